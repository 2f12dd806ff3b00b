//! Top navigation bar.
//!
//! The menu is built from the role-routing table, so a student, a faculty
//! member, and an admin each see exactly the routes their role may open.

use crate::{
    components::{
        header_nav_item::HeaderNavItem, notification_bell::NotificationBell,
        theme_switcher::ThemeSwitcher, user_dropdown::UserDropdown,
    },
    models::session::SessionState,
    routes::{Route, permitted_routes},
};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let role = use_selector(|state: &SessionState| state.role());

    // Profile sits in the user dropdown instead of the top bar.
    let nav_routes: Vec<Route> = (*role)
        .map(permitted_routes)
        .unwrap_or_default()
        .into_iter()
        .filter(|route| *route != Route::Profile)
        .collect();

    let render_routes = |routes: &[Route]| -> Html {
        html! {
            { for routes.iter().map(|route| html! {
                <HeaderNavItem
                    current_route={props.current_route.clone()}
                    route={route.clone()}
                />
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<Route> to={Route::Home} classes="btn btn-ghost text-lg">
                {"Campanile"}
            </Link<Route>>

            <div class="dropdown dropdown-end sm:hidden">
                <div tabindex="0" role="button" class="btn btn-ghost">
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="h-5 w-5" />
                </div>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-4 rounded-box shadow w-56 gap-1"
                >
                    { render_routes(&nav_routes) }
                </ul>
            </div>

            <ul class="hidden menu sm:menu-horizontal px-1">
                { render_routes(&nav_routes) }
            </ul>

            <div class="hidden sm:flex items-center gap-1">
                <NotificationBell />
                <ThemeSwitcher />
                <UserDropdown />
            </div>
        </nav>
    }
}
