//! A single entry in the header navigation.

use crate::routes::Route;
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    /// Route this entry navigates to; label and icon come from the route.
    pub route: Route,
    /// Route currently being displayed, for highlighting.
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let active_class = if props.current_route.as_ref() == Some(&props.route) {
        "btn-active"
    } else {
        ""
    };

    html! {
        <li>
            <Link<Route>
                to={props.route.clone()}
                classes={classes!("btn", "btn-ghost", "btn-sm", "gap-2", active_class)}
            >
                <Icon icon_id={props.route.icon()} class="h-4 w-4" />
                { props.route.label() }
            </Link<Route>>
        </li>
    }
}
