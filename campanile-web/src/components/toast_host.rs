//! Fixed overlay that renders the toast queue.

use crate::models::toasts::{self, Toast, ToastState};
use shared::models::NotificationKind;
use yew::{Callback, Html, classes, events::MouseEvent, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

fn alert_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "alert-info",
        NotificationKind::Success => "alert-success",
        NotificationKind::Warning => "alert-warning",
        NotificationKind::Error => "alert-error",
    }
}

fn alert_icon(kind: NotificationKind) -> IconId {
    match kind {
        NotificationKind::Info => IconId::HeroiconsOutlineInformationCircle,
        NotificationKind::Success => IconId::HeroiconsOutlineCheckCircle,
        NotificationKind::Warning => IconId::HeroiconsOutlineExclamationTriangle,
        NotificationKind::Error => IconId::HeroiconsOutlineXCircle,
    }
}

/// Renders the queued toasts oldest-first in the bottom-right corner.
/// Each carries a dismiss button; expiry is handled by the store.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let (state, dispatch) = use_store::<ToastState>();

    if state.is_empty() {
        return Html::default();
    }

    let render_toast = |toast: &Toast| -> Html {
        let dispatch = dispatch.clone();
        let toast_id = toast.id;
        let on_dismiss = Callback::from(move |_: MouseEvent| {
            toasts::dismiss(&dispatch, toast_id);
        });

        html! {
            <div
                class={classes!("alert", "shadow-lg", alert_class(toast.kind))}
                title={toast.created_at.0.format("%H:%M").to_string()}
            >
                <Icon icon_id={alert_icon(toast.kind)} class="h-5 w-5 flex-shrink-0" />
                <span>{ toast.message.clone() }</span>
                <button
                    class="btn btn-ghost btn-xs"
                    aria-label="Dismiss"
                    onclick={on_dismiss}
                >
                    {"✕"}
                </button>
            </div>
        }
    };

    html! {
        <div class="toast toast-end toast-bottom z-50">
            { for state.toasts().iter().map(render_toast) }
        </div>
    }
}
