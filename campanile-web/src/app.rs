//! Application root: session bootstrap and router.

use crate::components::loading::Loading;
use crate::models::session::SessionState;
use crate::routes::{Route, switch};
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::{BrowserRouter, Switch};
use yewdux::prelude::use_store;

/// Resolves the persisted session once on mount, then hands off to the
/// router. Route guards never see a half-resolved session; this gate
/// absorbs the loading window.
#[function_component(App)]
pub fn app() -> Html {
    let (session, dispatch) = use_store::<SessionState>();

    use_effect_with((), move |()| {
        spawn_local(async move {
            SessionState::load_session(&dispatch).await;
        });
        || ()
    });

    if session.is_loading() {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
