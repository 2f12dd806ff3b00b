//! Landing page for every signed-in role.

use crate::config::FrontendConfig;
use crate::models::inbox::{InboxState, fetch_page};
use crate::models::session::SessionState;
use crate::models::toasts::ToastState;
use crate::routes::{Route, permitted_routes};
use shared::models::NotificationFilter;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (session, _) = use_store::<SessionState>();
    let (inbox, inbox_dispatch) = use_store::<InboxState>();
    let (_, toast_dispatch) = use_store::<ToastState>();

    let user_id = session.user().map(|user| user.id);

    // Refresh the inbox so the unread stat and header badge are live from
    // the moment the user lands here.
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

    let Some(user) = session.user() else {
        return Html::default();
    };

    let quick_links: Vec<Route> = permitted_routes(user.role)
        .into_iter()
        .filter(|route| *route != Route::Dashboard)
        .collect();

    let config = FrontendConfig::new();
    let documentation_url = config.documentation_url().to_string();

    html! {
        <div class="flex flex-col gap-6">
            <div>
                <h1 class="text-2xl font-bold">{ format!("Welcome back, {}", user.name) }</h1>
                <p class="text-sm opacity-70">{ format!("Signed in as {}", user.role.label()) }</p>
            </div>

            <div class="stats stats-vertical sm:stats-horizontal shadow">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineBell} class="h-6 w-6" />
                    </div>
                    <div class="stat-title">{"Unread notifications"}</div>
                    <div class="stat-value text-primary">{ inbox.unread_count() }</div>
                    <div class="stat-desc">
                        <Link<Route> to={Route::Notifications} classes="link">
                            {"Open inbox"}
                        </Link<Route>>
                    </div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Role"}</div>
                    <div class="stat-value text-lg">{ user.role.label() }</div>
                    <div class="stat-desc">{ user.email.clone() }</div>
                </div>
            </div>

            <div>
                <h2 class="text-lg font-semibold mb-2">{"Your pages"}</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for quick_links.iter().map(|route| html! {
                        <Link<Route>
                            to={route.clone()}
                            classes="card bg-base-200 hover:bg-base-300 transition-colors"
                        >
                            <div class="card-body flex-row items-center gap-3">
                                <Icon icon_id={route.icon()} class="h-6 w-6" />
                                <span class="card-title text-base">{ route.label() }</span>
                            </div>
                        </Link<Route>>
                    }) }
                </div>
            </div>

            <div class="card bg-base-200">
                <div class="card-body">
                    <h2 class="card-title text-base">{"Need a hand?"}</h2>
                    <p class="text-sm opacity-80">
                        {"The campus guide covers courses, attendance and placement workflows."}
                    </p>
                    <div class="card-actions">
                        <a
                            class="btn btn-sm btn-outline"
                            href={documentation_url}
                            target="_blank"
                            rel="noreferrer"
                        >
                            {"Open the guide"}
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
