//! Inbox store: the loaded page of persistent notifications.
//!
//! Mark-read flows are optimistic: the store flips locally first, the
//! backend confirms afterwards, and a failed confirm rolls the flip back
//! unless a newer mutation has superseded it. The store keeps one
//! monotonically increasing version for that supersede check.

use crate::api::CampanileClient;
use crate::models::toasts::{ToastState, notify};
use chrono::Utc;
use shared::models::{
    Notification, NotificationFilter, NotificationKind, NotificationPage, SortKey, Timestamp,
    sort_notifications,
};
use uuid::Uuid;
use yewdux::prelude::*;

/// Notifications requested per page.
pub const PAGE_SIZE: u32 = 10;

/// One loaded page of the persistent-notification inbox.
#[derive(Clone, PartialEq, Store)]
pub struct InboxState {
    items: Vec<Notification>,
    page: u32,
    total_pages: u32,
    loading: bool,
    sort: SortKey,
    seq: u64,
}

impl Default for InboxState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            loading: false,
            sort: SortKey::default(),
            seq: 0,
        }
    }
}

impl InboxState {
    /// The loaded notifications in display order.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// 1-based page number currently loaded.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Total pages reported by the backend for the active query.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The active sort key.
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Unread notifications on the loaded page; drives the header badge.
    pub fn unread_count(&self) -> usize {
        self.items
            .iter()
            .filter(|notification| !notification.is_read())
            .count()
    }

    /// Replace the loaded page with a server response. The response is
    /// authoritative, including read state, and gets the active sort.
    /// Installing also bumps the store version, so a rollback for a flip
    /// made before the refetch cannot undo what the server just said.
    fn install_page(&mut self, response: NotificationPage) {
        self.items = response.items;
        self.page = response.page;
        self.total_pages = response.total_pages;
        sort_notifications(&mut self.items, self.sort);
        self.loading = false;
        self.seq += 1;
    }

    fn start_loading(&mut self) {
        self.loading = true;
    }

    fn finish_loading(&mut self) {
        self.loading = false;
    }

    fn apply_sort(&mut self, key: SortKey) {
        self.sort = key;
        sort_notifications(&mut self.items, key);
    }

    /// Optimistically flip one notification to read. Returns the new store
    /// version when something changed; `None` when the id is unknown or
    /// the notification was already read.
    fn apply_mark_read(&mut self, id: Uuid, at: Timestamp) -> Option<u64> {
        let notification = self
            .items
            .iter_mut()
            .find(|notification| notification.id == id)?;
        if notification.is_read() {
            return None;
        }
        notification.mark_read(at);
        self.seq += 1;
        Some(self.seq)
    }

    /// Optimistically flip every loaded unread notification to read.
    /// Returns the ids touched plus the new store version; `None` when
    /// nothing was unread.
    fn apply_mark_all_read(&mut self, at: Timestamp) -> Option<(Vec<Uuid>, u64)> {
        let mut touched = Vec::new();
        for notification in &mut self.items {
            if !notification.is_read() {
                notification.mark_read(at.clone());
                touched.push(notification.id);
            }
        }
        if touched.is_empty() {
            return None;
        }
        self.seq += 1;
        Some((touched, self.seq))
    }

    /// Roll an optimistic flip back, unless a newer mutation already
    /// superseded it. A superseded rollback is dropped entirely rather
    /// than clobbering fresher state.
    fn revert_marks(&mut self, ids: &[Uuid], version: u64) {
        if self.seq != version {
            return;
        }
        for notification in &mut self.items {
            if ids.contains(&notification.id) {
                notification.mark_unread();
            }
        }
    }
}

/// Failure path for [`fetch_page`]: the loaded items stay put and exactly
/// one error toast is raised.
fn apply_fetch_failure(inbox: &Dispatch<InboxState>, toasts: &Dispatch<ToastState>) {
    inbox.reduce_mut(InboxState::finish_loading);
    notify(
        toasts,
        NotificationKind::Error,
        "Could not load notifications",
    );
}

/// Failure path for the mark-read confirms: roll the optimistic flips
/// back (unless superseded) and raise one error toast.
fn apply_mark_failure(
    inbox: &Dispatch<InboxState>,
    toasts: &Dispatch<ToastState>,
    ids: &[Uuid],
    version: u64,
    message: &'static str,
) {
    inbox.reduce_mut(|state| state.revert_marks(ids, version));
    notify(toasts, NotificationKind::Error, message);
}

/// Load one page from the backend. The response replaces the loaded page;
/// on failure the current items stay put and one error toast is raised.
pub async fn fetch_page(
    inbox: &Dispatch<InboxState>,
    toasts: &Dispatch<ToastState>,
    user_id: Uuid,
    page: u32,
    filter: NotificationFilter,
) {
    inbox.reduce_mut(InboxState::start_loading);
    let client = CampanileClient::shared();
    match client
        .list_notifications(&user_id, page, PAGE_SIZE, &filter)
        .await
    {
        Ok(response) => {
            inbox.reduce_mut(|state| state.install_page(response));
        }
        Err(err) => {
            web_sys::console::error_1(&format!("Failed to load notifications: {err}").into());
            apply_fetch_failure(inbox, toasts);
        }
    }
}

/// Mark one notification read: flip locally, confirm with the backend,
/// roll back on failure. Already-read ids skip the backend entirely.
pub async fn mark_read(inbox: &Dispatch<InboxState>, toasts: &Dispatch<ToastState>, id: Uuid) {
    let mut version = None;
    inbox.reduce_mut(|state| version = state.apply_mark_read(id, Timestamp(Utc::now())));
    let Some(version) = version else {
        return;
    };

    let client = CampanileClient::shared();
    if let Err(err) = client.mark_notification_read(&id).await {
        web_sys::console::error_1(&format!("Failed to mark notification read: {err}").into());
        apply_mark_failure(
            inbox,
            toasts,
            &[id],
            version,
            "Could not update the notification",
        );
    }
}

/// Mark every loaded unread notification read, with the same
/// optimistic-then-confirm contract as [`mark_read`].
pub async fn mark_all_read(
    inbox: &Dispatch<InboxState>,
    toasts: &Dispatch<ToastState>,
    user_id: Uuid,
) {
    let mut touched = None;
    inbox.reduce_mut(|state| touched = state.apply_mark_all_read(Timestamp(Utc::now())));
    let Some((ids, version)) = touched else {
        return;
    };

    let client = CampanileClient::shared();
    if let Err(err) = client.mark_all_notifications_read(&user_id).await {
        web_sys::console::error_1(&format!("Failed to mark all notifications read: {err}").into());
        apply_mark_failure(
            inbox,
            toasts,
            &ids,
            version,
            "Could not update notifications",
        );
    }
}

/// Re-order the loaded page locally. Never refetches.
pub fn set_sort(inbox: &Dispatch<InboxState>, key: SortKey) {
    inbox.reduce_mut(|state| state.apply_sort(key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::models::{Audience, Priority};

    fn notification(minute: u32, kind: NotificationKind, priority: Priority) -> Notification {
        let mut notification = Notification::new(
            "Campus update",
            "Details inside",
            kind,
            priority,
            Audience::All,
            "Registrar",
        );
        notification.created_at =
            Timestamp(Utc.with_ymd_and_hms(2025, 9, 1, 9, minute, 0).unwrap());
        notification
    }

    fn read_at(minute: u32) -> Timestamp {
        Timestamp(Utc.with_ymd_and_hms(2025, 9, 1, 10, minute, 0).unwrap())
    }

    fn loaded(items: Vec<Notification>) -> InboxState {
        let mut state = InboxState::default();
        state.install_page(NotificationPage {
            items,
            page: 1,
            total_pages: 3,
        });
        state
    }

    #[test]
    fn installing_a_page_replaces_items_and_applies_the_sort() {
        let older = notification(5, NotificationKind::Info, Priority::Low);
        let newer = notification(45, NotificationKind::Info, Priority::Low);
        let newer_id = newer.id;

        let mut state = InboxState::default();
        state.start_loading();
        state.install_page(NotificationPage {
            items: vec![older, newer],
            page: 2,
            total_pages: 5,
        });

        assert!(!state.is_loading());
        assert_eq!(state.page(), 2);
        assert_eq!(state.total_pages(), 5);
        // Default sort is newest first.
        assert_eq!(state.items()[0].id, newer_id);
    }

    #[test]
    fn installing_a_page_overwrites_local_read_state() {
        let unread = notification(10, NotificationKind::Info, Priority::Medium);
        let id = unread.id;
        let mut state = loaded(vec![unread]);
        state.apply_mark_read(id, read_at(0));

        // The server still says unread; its answer wins.
        state.install_page(NotificationPage {
            items: vec![notification(10, NotificationKind::Info, Priority::Medium)],
            page: 1,
            total_pages: 1,
        });
        assert_eq!(state.unread_count(), 1);
    }

    #[test]
    fn a_failed_fetch_keeps_the_loaded_items() {
        let mut state = loaded(vec![
            notification(10, NotificationKind::Info, Priority::Low),
            notification(20, NotificationKind::Info, Priority::Low),
        ]);

        // Failure path: loading resets and nothing else moves.
        state.start_loading();
        state.finish_loading();

        assert!(!state.is_loading());
        assert_eq!(state.items().len(), 2);
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn a_failed_fetch_raises_exactly_one_error_toast() {
        let cx = yewdux::Context::new();
        let inbox = Dispatch::<InboxState>::new(&cx);
        let toasts = Dispatch::<ToastState>::new(&cx);
        inbox.reduce_mut(|state| {
            state.install_page(NotificationPage {
                items: vec![notification(10, NotificationKind::Info, Priority::Low)],
                page: 1,
                total_pages: 3,
            });
        });

        inbox.reduce_mut(InboxState::start_loading);
        apply_fetch_failure(&inbox, &toasts);

        let state = inbox.get();
        assert!(!state.is_loading());
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 3);

        let queue = toasts.get();
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].kind, NotificationKind::Error);
    }

    #[test]
    fn unread_count_ignores_read_items() {
        let read = {
            let mut n = notification(10, NotificationKind::Info, Priority::Low);
            n.mark_read(read_at(0));
            n
        };
        let state = loaded(vec![read, notification(20, NotificationKind::Info, Priority::Low)]);
        assert_eq!(state.unread_count(), 1);
    }

    #[test]
    fn marking_read_flips_immediately_and_bumps_the_version() {
        let item = notification(10, NotificationKind::Info, Priority::Medium);
        let id = item.id;
        let mut state = loaded(vec![item]);

        let before = state.seq;
        let version = state.apply_mark_read(id, read_at(0));
        assert_eq!(version, Some(before + 1));
        assert!(state.items()[0].is_read());
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn marking_an_already_read_notification_is_a_no_op() {
        let item = notification(10, NotificationKind::Info, Priority::Medium);
        let id = item.id;
        let mut state = loaded(vec![item]);

        state.apply_mark_read(id, read_at(0));
        let version = state.seq;
        assert_eq!(state.apply_mark_read(id, read_at(1)), None);
        assert_eq!(state.seq, version);
    }

    #[test]
    fn marking_an_unknown_id_is_a_no_op() {
        let mut state = loaded(vec![notification(10, NotificationKind::Info, Priority::Low)]);
        let version = state.seq;
        assert_eq!(state.apply_mark_read(Uuid::new_v4(), read_at(0)), None);
        assert_eq!(state.seq, version);
        assert_eq!(state.unread_count(), 1);
    }

    #[test]
    fn a_failed_confirm_rolls_the_flip_back() {
        let item = notification(10, NotificationKind::Warning, Priority::High);
        let id = item.id;
        let mut state = loaded(vec![item]);

        let version = state.apply_mark_read(id, read_at(0)).unwrap();
        state.revert_marks(&[id], version);

        assert!(!state.items()[0].is_read());
        assert_eq!(state.unread_count(), 1);
    }

    #[test]
    fn a_failed_confirm_reverts_and_raises_one_error_toast() {
        let cx = yewdux::Context::new();
        let inbox = Dispatch::<InboxState>::new(&cx);
        let toasts = Dispatch::<ToastState>::new(&cx);
        let item = notification(10, NotificationKind::Warning, Priority::High);
        let id = item.id;
        inbox.reduce_mut(|state| {
            state.install_page(NotificationPage {
                items: vec![item],
                page: 1,
                total_pages: 1,
            });
        });

        let mut version = None;
        inbox.reduce_mut(|state| version = state.apply_mark_read(id, read_at(0)));
        apply_mark_failure(
            &inbox,
            &toasts,
            &[id],
            version.unwrap(),
            "Could not update the notification",
        );

        assert_eq!(inbox.get().unread_count(), 1);
        let queue = toasts.get();
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].kind, NotificationKind::Error);
        assert_eq!(queue.toasts()[0].message, "Could not update the notification");
    }

    #[test]
    fn a_superseded_rollback_is_dropped() {
        let first = notification(10, NotificationKind::Info, Priority::Low);
        let second = notification(20, NotificationKind::Info, Priority::Low);
        let first_id = first.id;
        let second_id = second.id;
        let mut state = loaded(vec![first, second]);

        let stale = state.apply_mark_read(first_id, read_at(0)).unwrap();
        state.apply_mark_read(second_id, read_at(1)).unwrap();

        // The rollback for the first flip arrives after the second flip.
        state.revert_marks(&[first_id], stale);
        assert!(state.items().iter().all(Notification::is_read));
    }

    #[test]
    fn a_page_install_supersedes_pending_reverts() {
        let item = notification(10, NotificationKind::Info, Priority::Medium);
        let id = item.id;
        let mut state = loaded(vec![item.clone()]);

        let version = state.apply_mark_read(id, read_at(0)).unwrap();

        // A refetch lands before the failed confirm's rollback. The server
        // already says read; the stale revert must not flip it back.
        let mut from_server = item;
        from_server.mark_read(read_at(1));
        state.install_page(NotificationPage {
            items: vec![from_server],
            page: 1,
            total_pages: 1,
        });
        state.revert_marks(&[id], version);

        assert!(state.items()[0].is_read());
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn mark_all_touches_only_unread_and_reverts_exactly_those() {
        let already_read = {
            let mut n = notification(5, NotificationKind::Info, Priority::Low);
            n.mark_read(read_at(0));
            n
        };
        let kept_read_at = already_read.read_at().cloned();
        let unread_a = notification(10, NotificationKind::Info, Priority::Low);
        let unread_b = notification(20, NotificationKind::Info, Priority::Low);
        let mut state = loaded(vec![already_read, unread_a, unread_b]);

        let (ids, version) = state.apply_mark_all_read(read_at(5)).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(state.unread_count(), 0);

        state.revert_marks(&ids, version);
        assert_eq!(state.unread_count(), 2);
        // The notification that was read before the sweep keeps its stamp.
        let kept = state
            .items()
            .iter()
            .find(|notification| notification.is_read())
            .unwrap();
        assert_eq!(kept.read_at().cloned(), kept_read_at);
    }

    #[test]
    fn mark_all_with_nothing_unread_is_a_no_op() {
        let read = {
            let mut n = notification(5, NotificationKind::Info, Priority::Low);
            n.mark_read(read_at(0));
            n
        };
        let mut state = loaded(vec![read]);
        let version = state.seq;
        assert_eq!(state.apply_mark_all_read(read_at(1)), None);
        assert_eq!(state.seq, version);
    }

    #[test]
    fn resorting_is_local_and_keeps_the_loaded_page() {
        let low = notification(30, NotificationKind::Info, Priority::Low);
        let urgent = notification(10, NotificationKind::Error, Priority::Urgent);
        let urgent_id = urgent.id;
        let mut state = loaded(vec![low, urgent]);

        state.apply_sort(SortKey::Priority);

        assert_eq!(state.sort(), SortKey::Priority);
        assert_eq!(state.items()[0].id, urgent_id);
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn set_sort_reorders_through_the_dispatch() {
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<InboxState>::new(&cx);
        let urgent = notification(10, NotificationKind::Error, Priority::Urgent);
        let urgent_id = urgent.id;
        dispatch.reduce_mut(|state| {
            state.install_page(NotificationPage {
                items: vec![notification(30, NotificationKind::Info, Priority::Low), urgent],
                page: 1,
                total_pages: 1,
            });
        });

        set_sort(&dispatch, SortKey::Priority);
        assert_eq!(dispatch.get().items()[0].id, urgent_id);
    }
}
