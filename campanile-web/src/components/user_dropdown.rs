//! Avatar dropdown with the signed-in user's details and session actions.

use crate::models::session::SessionState;
use crate::routes::Route;
use yew::{Callback, Html, events::MouseEvent, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store;

/// Dropdown showing who is signed in, with profile and sign-out entries.
/// Renders nothing for anonymous visitors.
#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator().unwrap();
    let (session, dispatch) = use_store::<SessionState>();

    let Some(user) = session.user().cloned() else {
        return Html::default();
    };

    let profile_entry = {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            navigator.push(&Route::Profile);
        });
        html! { <li><a {onclick}>{"Profile"}</a></li> }
    };

    let sign_out_entry = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            SessionState::logout(&dispatch);
            navigator.push(&Route::Login);
        });
        html! { <li><a {onclick}>{"Sign out"}</a></li> }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <Icon icon_id={IconId::HeroiconsSolidUserCircle} class="h-6 w-6" />
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-56">
                <li class="px-2 py-1 pointer-events-none">
                    <div class="flex flex-col items-start gap-1">
                        <span class="text-sm font-semibold">{ user.name.clone() }</span>
                        <span class="text-xs opacity-70">{ user.email.clone() }</span>
                        <span class="badge badge-outline badge-sm">{ user.role.label() }</span>
                    </div>
                </li>
                <div class="divider my-0"></div>
                { profile_entry }
                { sign_out_entry }
            </ul>
        </div>
    }
}
