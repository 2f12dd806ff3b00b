//! Persistent-notification inbox page.
//!
//! Loads one page at a time from the backend. Read flips are optimistic;
//! the inbox store handles confirmation and rollback.

use crate::models::inbox::{InboxState, fetch_page, mark_all_read, mark_read, set_sort};
use crate::models::session::SessionState;
use crate::models::toasts::ToastState;
use shared::models::{Audience, Notification, NotificationFilter, NotificationKind, Priority, SortKey};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::{
    Callback, Html, TargetCast, classes,
    events::{Event, MouseEvent},
    function_component, html, use_effect_with,
};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

fn kind_icon(kind: NotificationKind) -> IconId {
    match kind {
        NotificationKind::Info => IconId::HeroiconsOutlineInformationCircle,
        NotificationKind::Success => IconId::HeroiconsOutlineCheckCircle,
        NotificationKind::Warning => IconId::HeroiconsOutlineExclamationTriangle,
        NotificationKind::Error => IconId::HeroiconsOutlineXCircle,
    }
}

fn priority_badge(priority: Priority) -> Html {
    let class = match priority {
        Priority::Low => "badge-ghost",
        Priority::Medium => "badge-info",
        Priority::High => "badge-warning",
        Priority::Urgent => "badge-error",
    };
    html! {
        <span class={classes!("badge", "badge-sm", class)}>{ priority.as_str() }</span>
    }
}

#[function_component(NotificationsPage)]
pub fn notifications_page() -> Html {
    let (session, _) = use_store::<SessionState>();
    let (inbox, inbox_dispatch) = use_store::<InboxState>();
    let (_, toast_dispatch) = use_store::<ToastState>();

    let user_id = session.user().map(|user| user.id);

    // Load the first page whenever the signed-in user changes.
    {
        let inbox_dispatch = inbox_dispatch.clone();
        let toast_dispatch = toast_dispatch.clone();
        use_effect_with(user_id, move |user_id| {
            if let Some(user_id) = *user_id {
                spawn_local(async move {
                    fetch_page(
                        &inbox_dispatch,
                        &toast_dispatch,
                        user_id,
                        1,
                        NotificationFilter::default(),
                    )
                    .await;
                });
            }
            || ()
        });
    }

    let on_sort_change = {
        let inbox_dispatch = inbox_dispatch.clone();
        move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(key) = select.value().parse::<SortKey>() {
                set_sort(&inbox_dispatch, key);
            }
        }
    };

    let on_mark_all = {
        let inbox_dispatch = inbox_dispatch.clone();
        let toast_dispatch = toast_dispatch.clone();
        move |_: MouseEvent| {
            let Some(user_id) = user_id else {
                return;
            };
            let inbox_dispatch = inbox_dispatch.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                mark_all_read(&inbox_dispatch, &toast_dispatch, user_id).await;
            });
        }
    };

    let go_to_page = {
        let inbox_dispatch = inbox_dispatch.clone();
        let toast_dispatch = toast_dispatch.clone();
        Callback::from(move |page: u32| {
            let Some(user_id) = user_id else {
                return;
            };
            let inbox_dispatch = inbox_dispatch.clone();
            let toast_dispatch = toast_dispatch.clone();
            spawn_local(async move {
                fetch_page(
                    &inbox_dispatch,
                    &toast_dispatch,
                    user_id,
                    page,
                    NotificationFilter::default(),
                )
                .await;
            });
        })
    };

    let on_prev = {
        let go_to_page = go_to_page.clone();
        let page = inbox.page();
        move |_: MouseEvent| go_to_page.emit(page.saturating_sub(1))
    };

    let on_next = {
        let go_to_page = go_to_page.clone();
        let page = inbox.page();
        move |_: MouseEvent| go_to_page.emit(page + 1)
    };

    let render_notification = |notification: &Notification| -> Html {
        let id = notification.id;
        let on_mark_read = {
            let inbox_dispatch = inbox_dispatch.clone();
            let toast_dispatch = toast_dispatch.clone();
            move |_: MouseEvent| {
                let inbox_dispatch = inbox_dispatch.clone();
                let toast_dispatch = toast_dispatch.clone();
                spawn_local(async move {
                    mark_read(&inbox_dispatch, &toast_dispatch, id).await;
                });
            }
        };

        let muted = if notification.is_read() { "opacity-60" } else { "" };

        html! {
            <div class={classes!("card", "card-compact", "border", "border-base-300", muted)}>
                <div class="card-body">
                    <div class="flex items-start justify-between gap-4">
                        <div class="flex items-start gap-3">
                            <Icon
                                icon_id={kind_icon(notification.kind)}
                                class="h-5 w-5 mt-1 flex-shrink-0"
                            />
                            <div>
                                <h3 class="font-semibold flex flex-wrap items-center gap-2">
                                    { notification.title.clone() }
                                    { priority_badge(notification.priority) }
                                    if notification.audience != Audience::All {
                                        <span class="badge badge-outline badge-sm">
                                            { notification.audience.as_str() }
                                        </span>
                                    }
                                    if !notification.is_read() {
                                        <span class="badge badge-primary badge-sm">{"New"}</span>
                                    }
                                </h3>
                                <p class="text-sm opacity-80">{ notification.message.clone() }</p>
                                <p class="text-xs opacity-60 mt-1">
                                    { format!("{} by {}", notification.created_at.short(), notification.created_by) }
                                </p>
                            </div>
                        </div>
                        if !notification.is_read() {
                            <button class="btn btn-ghost btn-xs" onclick={on_mark_read}>
                                {"Mark read"}
                            </button>
                        }
                    </div>
                </div>
            </div>
        }
    };

    html! {
        <div class="flex flex-col gap-4">
            <div class="flex flex-wrap items-center justify-between gap-2">
                <div>
                    <h1 class="text-2xl font-bold">{"Notifications"}</h1>
                    <p class="text-sm opacity-70">
                        { format!("{} unread on this page", inbox.unread_count()) }
                    </p>
                </div>
                <div class="flex items-center gap-2">
                    <select
                        class="select select-bordered select-sm"
                        onchange={on_sort_change}
                        data-testid="notification-sort-select"
                    >
                        <option value="date" selected={inbox.sort() == SortKey::Date}>
                            {"Newest first"}
                        </option>
                        <option value="priority" selected={inbox.sort() == SortKey::Priority}>
                            {"Priority"}
                        </option>
                        <option value="kind" selected={inbox.sort() == SortKey::Kind}>
                            {"Type"}
                        </option>
                    </select>
                    <button
                        class="btn btn-outline btn-sm"
                        onclick={on_mark_all}
                        disabled={inbox.unread_count() == 0 || inbox.is_loading()}
                        data-testid="mark-all-read-button"
                    >
                        {"Mark all read"}
                    </button>
                </div>
            </div>

            if inbox.is_loading() {
                <div class="flex justify-center py-10">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if inbox.items().is_empty() {
                <div class="flex flex-col items-center gap-2 py-10 opacity-70">
                    <Icon icon_id={IconId::HeroiconsOutlineBellSlash} class="h-8 w-8" />
                    <p>{"You're all caught up"}</p>
                </div>
            } else {
                <div class="flex flex-col gap-2">
                    { for inbox.items().iter().map(render_notification) }
                </div>
            }

            if inbox.total_pages() > 1 {
                <div class="join justify-center">
                    <button
                        class="join-item btn btn-sm"
                        onclick={on_prev}
                        disabled={inbox.page() <= 1 || inbox.is_loading()}
                    >
                        {"«"}
                    </button>
                    <button class="join-item btn btn-sm pointer-events-none">
                        { format!("Page {} of {}", inbox.page(), inbox.total_pages()) }
                    </button>
                    <button
                        class="join-item btn btn-sm"
                        onclick={on_next}
                        disabled={inbox.page() >= inbox.total_pages() || inbox.is_loading()}
                    >
                        {"»"}
                    </button>
                </div>
            }
        </div>
    }
}
