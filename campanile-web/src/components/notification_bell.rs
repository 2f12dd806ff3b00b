//! Header bell with the unread badge for the signed-in user.

use crate::models::inbox::InboxState;
use crate::routes::Route;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

/// Bell linking to the notifications page. The badge shows the unread
/// count on the loaded page and disappears at zero.
#[function_component(NotificationBell)]
pub fn notification_bell() -> Html {
    let unread = use_selector(InboxState::unread_count);

    html! {
        <Link<Route> to={Route::Notifications} classes="btn btn-ghost btn-circle">
            <div class="indicator">
                <Icon icon_id={IconId::HeroiconsOutlineBell} class="h-5 w-5" />
                if *unread > 0 {
                    <span class="badge badge-primary badge-xs indicator-item">{ *unread }</span>
                }
            </div>
        </Link<Route>>
    }
}
