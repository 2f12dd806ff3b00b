//! Not-found page.

use crate::routes::Route;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div>
                    <h1 class="text-6xl font-bold">{"404"}</h1>
                    <p class="py-4 opacity-70">{"That page doesn't exist on this campus."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Take me home"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
