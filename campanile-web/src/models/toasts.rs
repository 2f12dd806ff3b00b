//! Toast store: the FIFO queue of ephemeral on-screen notifications.
//!
//! Every toast auto-expires after [`TOAST_TTL_MS`] unless something
//! dismisses it first. Expiry timers live outside the store state so the
//! store itself stays cheap to clone and compare.

use shared::models::{NotificationKind, Timestamp};
use yewdux::prelude::*;

/// How long a toast stays on screen before it auto-expires.
pub const TOAST_TTL_MS: u32 = 5_000;

/// Identifier for a queued toast, unique for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// A single ephemeral notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Timestamp,
}

/// Queue of on-screen toasts, oldest first.
#[derive(Clone, PartialEq, Store, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// The queued toasts in display order, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn push(&mut self, kind: NotificationKind, message: String) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message,
            created_at: Timestamp::now(),
        });
        id
    }

    /// Remove a toast by id. Returns whether anything was removed, so a
    /// late expiry timer racing a manual dismiss stays a no-op.
    fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}

/// Queue a toast and schedule its auto-expiry. Returns the id so callers
/// can dismiss it early.
pub fn notify(
    dispatch: &Dispatch<ToastState>,
    kind: NotificationKind,
    message: impl Into<String>,
) -> ToastId {
    let message = message.into();
    let mut assigned = ToastId(0);
    dispatch.reduce_mut(|state| assigned = state.push(kind, message));
    schedule_expiry(dispatch.clone(), assigned);
    assigned
}

/// Dismiss a toast ahead of its expiry, cancelling the pending timer.
/// Unknown or already-expired ids are a no-op.
pub fn dismiss(dispatch: &Dispatch<ToastState>, id: ToastId) {
    cancel_expiry(id);
    dispatch.reduce_mut(|state| {
        state.remove(id);
    });
}

#[cfg(target_arch = "wasm32")]
mod expiry {
    use super::{TOAST_TTL_MS, ToastId, ToastState};
    use gloo_timers::callback::Timeout;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use yewdux::Dispatch;

    thread_local! {
        static TIMERS: RefCell<HashMap<ToastId, Timeout>> = RefCell::new(HashMap::new());
    }

    pub(super) fn schedule(dispatch: Dispatch<ToastState>, id: ToastId) {
        let timeout = Timeout::new(TOAST_TTL_MS, move || {
            // The timer drops its own handle before touching the store so
            // a dismiss arriving after expiry finds nothing to cancel.
            TIMERS.with(|timers| timers.borrow_mut().remove(&id));
            dispatch.reduce_mut(|state| {
                state.remove(id);
            });
        });
        if let Some(superseded) = TIMERS.with(|timers| timers.borrow_mut().insert(id, timeout)) {
            superseded.cancel();
        }
    }

    pub(super) fn cancel(id: ToastId) {
        if let Some(timeout) = TIMERS.with(|timers| timers.borrow_mut().remove(&id)) {
            timeout.cancel();
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_expiry(dispatch: Dispatch<ToastState>, id: ToastId) {
    expiry::schedule(dispatch, id);
}

#[cfg(target_arch = "wasm32")]
fn cancel_expiry(id: ToastId) {
    expiry::cancel(id);
}

// Timers are a browser facility; off wasm the queue logic runs bare.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_expiry(_dispatch: Dispatch<ToastState>, _id: ToastId) {}

#[cfg(not(target_arch = "wasm32"))]
fn cancel_expiry(_id: ToastId) {}
