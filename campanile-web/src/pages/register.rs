//! Registration page.
//!
//! Creates a student account. Faculty and admin accounts are provisioned
//! by an administrator, never through this form.

use super::auth_validation::{
    ValidationError, validate_confirm_password, validate_email, validate_name, validate_password,
};
use crate::models::session::SessionState;
use crate::routes::Route;
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::{
    Html, TargetCast,
    events::{Event, FocusEvent, SubmitEvent},
    function_component, html, use_state,
};
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    // Form inputs
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);

    // Per-field validation state
    let name_error = use_state(|| Option::<ValidationError>::None);
    let email_error = use_state(|| Option::<ValidationError>::None);
    let password_error = use_state(|| Option::<ValidationError>::None);
    let confirm_password_error = use_state(|| Option::<ValidationError>::None);

    // Submission state
    let is_submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);

    let (_, dispatch) = use_store::<SessionState>();

    let on_name_change = {
        let name = name.clone();
        move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        }
    };

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

    let on_confirm_password_change = {
        let confirm_password = confirm_password.clone();
        move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            confirm_password.set(input.value());
        }
    };

    let on_name_blur = {
        let name = name.clone();
        let name_error = name_error.clone();
        move |_: FocusEvent| {
            name_error.set(validate_name(&name).err());
        }
    };

    let on_email_blur = {
        let email = email.clone();
        let email_error = email_error.clone();
        move |_: FocusEvent| {
            email_error.set(validate_email(&email).err());
        }
    };

    let on_password_blur = {
        let password = password.clone();
        let password_error = password_error.clone();
        move |_: FocusEvent| {
            password_error.set(validate_password(&password).err());
        }
    };

    let on_confirm_password_blur = {
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let confirm_password_error = confirm_password_error.clone();
        move |_: FocusEvent| {
            confirm_password_error.set(validate_confirm_password(&confirm_password, &password).err());
        }
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let name_error = name_error.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let confirm_password_error = confirm_password_error.clone();
        let is_submitting = is_submitting.clone();
        let form_error = form_error.clone();

        move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            form_error.set(None);

            let mut has_errors = false;

            match validate_name(&name) {
                Ok(()) => name_error.set(None),
                Err(err) => {
                    name_error.set(Some(err));
                    has_errors = true;
                }
            }

            match validate_email(&email) {
                Ok(()) => email_error.set(None),
                Err(err) => {
                    email_error.set(Some(err));
                    has_errors = true;
                }
            }

            match validate_password(&password) {
                Ok(()) => password_error.set(None),
                Err(err) => {
                    password_error.set(Some(err));
                    has_errors = true;
                }
            }

            match validate_confirm_password(&confirm_password, &password) {
                Ok(()) => confirm_password_error.set(None),
                Err(err) => {
                    confirm_password_error.set(Some(err));
                    has_errors = true;
                }
            }

            if has_errors {
                return;
            }

            is_submitting.set(true);

            let request = RegisterRequest {
                name: name.trim().to_string(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let form_error = form_error.clone();
            let is_submitting = is_submitting.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                if let Err(err) = SessionState::register(&dispatch, &request).await {
                    form_error.set(Some(err.to_string()));
                }
                is_submitting.set(false);
            });
        }
    };

    let input_class = |error: &Option<ValidationError>| {
        format!(
            "input input-bordered w-full {}",
            if error.is_some() { "input-error" } else { "" }
        )
    };

    let field_error = |error: &Option<ValidationError>| -> Html {
        match error {
            Some(err) => html! {
                <label class="label">
                    <span class="label-text-alt text-error">{ err.message() }</span>
                </label>
            },
            None => Html::default(),
        }
    };

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center">
                    <h1 class="text-4xl font-bold">{"Create your account"}</h1>
                    <p class="py-4 opacity-70">{"Student accounts only; staff access is provisioned for you"}</p>
                </div>
                <div class="card w-full bg-base-100 shadow-xl">
                    <div class="card-body">
                        if let Some(message) = &*form_error {
                            <div class="alert alert-error shadow-lg mb-2">
                                <span>{ message }</span>
                            </div>
                        }

                        <form {onsubmit}>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">{"Full name"}</span>
                                </label>
                                <input
                                    type="text"
                                    placeholder="Maya Lin"
                                    class={input_class(&name_error)}
                                    value={(*name).clone()}
                                    onchange={on_name_change}
                                    onblur={on_name_blur}
                                    disabled={*is_submitting}
                                    data-testid="register-name-input"
                                />
                                { field_error(&name_error) }
                            </div>

                            <div class="form-control mt-2">
                                <label class="label">
                                    <span class="label-text">{"Email"}</span>
                                </label>
                                <input
                                    type="email"
                                    placeholder="you@campus.edu"
                                    class={input_class(&email_error)}
                                    value={(*email).clone()}
                                    onchange={on_email_change}
                                    onblur={on_email_blur}
                                    disabled={*is_submitting}
                                    data-testid="register-email-input"
                                />
                                { field_error(&email_error) }
                            </div>

                            <div class="form-control mt-2">
                                <label class="label">
                                    <span class="label-text">{"Password"}</span>
                                </label>
                                <input
                                    type="password"
                                    placeholder="At least 8 characters"
                                    class={input_class(&password_error)}
                                    value={(*password).clone()}
                                    onchange={on_password_change}
                                    onblur={on_password_blur}
                                    disabled={*is_submitting}
                                    data-testid="register-password-input"
                                />
                                { field_error(&password_error) }
                            </div>

                            <div class="form-control mt-2">
                                <label class="label">
                                    <span class="label-text">{"Confirm password"}</span>
                                </label>
                                <input
                                    type="password"
                                    placeholder="Repeat your password"
                                    class={input_class(&confirm_password_error)}
                                    value={(*confirm_password).clone()}
                                    onchange={on_confirm_password_change}
                                    onblur={on_confirm_password_blur}
                                    disabled={*is_submitting}
                                    data-testid="register-confirm-password-input"
                                />
                                { field_error(&confirm_password_error) }
                            </div>

                            <div class="form-control mt-6">
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled={*is_submitting}
                                    data-testid="register-submit-button"
                                >
                                    if *is_submitting {
                                        <span class="loading loading-spinner loading-sm mr-2"></span>
                                    }
                                    {"Register"}
                                </button>
                            </div>
                        </form>

                        <p class="text-sm text-center mt-4">
                            {"Already enrolled? "}
                            <Link<Route> to={Route::Login} classes="link link-primary">
                                {"Sign in"}
                            </Link<Route>>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
