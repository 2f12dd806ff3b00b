//! Sign-in page.

use crate::models::session::SessionState;
use crate::routes::Route;
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::{
    Html, TargetCast,
    events::{Event, SubmitEvent},
    function_component, html, use_state,
};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

/// Credential form for existing accounts. A successful sign-in flips the
/// session store and the route guard takes it from there.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);
    let (_, dispatch) = use_store::<SessionState>();

    let on_email_change = {
        let email = email.clone();
        move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        }
    };

    let on_password_change = {
        let password = password.clone();
        move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        }
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            is_submitting.set(true);
            error.set(None);

            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                if let Err(err) = SessionState::login(&dispatch, &request).await {
                    error.set(Some(err.to_string()));
                }
                is_submitting.set(false);
            });
        }
    };

    let disable_submit = *is_submitting || email.is_empty() || password.is_empty();

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center">
                    <h1 class="text-4xl font-bold">{"Campanile"}</h1>
                    <p class="py-4 opacity-70">{"Sign in to your campus account"}</p>
                </div>
                <div class="card w-full bg-base-100 shadow-xl">
                    <div class="card-body">
                        if let Some(message) = &*error {
                            <div class="alert alert-error shadow-lg mb-2">
                                <span>{ message }</span>
                            </div>
                        }

                        <form {onsubmit}>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">{"Email"}</span>
                                </label>
                                <input
                                    type="email"
                                    placeholder="you@campus.edu"
                                    class="input input-bordered w-full"
                                    value={(*email).clone()}
                                    onchange={on_email_change}
                                    disabled={*is_submitting}
                                    data-testid="login-email-input"
                                />
                            </div>

                            <div class="form-control mt-2">
                                <label class="label">
                                    <span class="label-text">{"Password"}</span>
                                </label>
                                <input
                                    type="password"
                                    placeholder="••••••••"
                                    class="input input-bordered w-full"
                                    value={(*password).clone()}
                                    onchange={on_password_change}
                                    disabled={*is_submitting}
                                    data-testid="login-password-input"
                                />
                            </div>

                            <div class="form-control mt-6">
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled={disable_submit}
                                    data-testid="login-submit-button"
                                >
                                    if *is_submitting {
                                        <span class="loading loading-spinner loading-sm mr-2"></span>
                                    }
                                    {"Sign in"}
                                </button>
                            </div>
                        </form>

                        <p class="text-sm text-center mt-4">
                            {"New to campus? "}
                            <Link<Route> to={Route::Register} classes="link link-primary">
                                {"Create an account"}
                            </Link<Route>>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
