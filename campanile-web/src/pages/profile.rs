//! Profile page: the signed-in user's details.

use crate::models::session::SessionState;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let (session, _) = use_store::<SessionState>();

    let Some(user) = session.user() else {
        return Html::default();
    };

    html! {
        <div class="flex flex-col gap-6 max-w-xl">
            <h1 class="text-2xl font-bold">{"Profile"}</h1>

            <div class="flex items-center gap-4">
                <div class="avatar placeholder">
                    <div class="bg-neutral text-neutral-content rounded-full w-16">
                        <Icon icon_id={IconId::HeroiconsSolidUserCircle} class="h-12 w-12" />
                    </div>
                </div>
                <div>
                    <p class="text-lg font-semibold">{ user.name.clone() }</p>
                    <span class="badge badge-outline">{ user.role.label() }</span>
                </div>
            </div>

            <div class="card bg-base-200">
                <div class="card-body gap-3">
                    <div>
                        <p class="text-xs uppercase opacity-60">{"Email"}</p>
                        <p>{ user.email.clone() }</p>
                    </div>
                    <div>
                        <p class="text-xs uppercase opacity-60">{"Account id"}</p>
                        <p class="font-mono text-sm">{ user.id.to_string() }</p>
                    </div>
                </div>
            </div>

            <p class="text-sm opacity-70">
                {"Name or email wrong? Contact the registrar's office to get it corrected."}
            </p>
        </div>
    }
}
