//! Admin sign-in form.

use dioxus::prelude::*;
use ui::icons::FaLock;
use ui::{use_admin_auth, AdminAuthState, Icon};

use crate::Route;

#[component]
pub fn AdminLogin() -> Element {
    let mut auth = use_admin_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Already signed in: go straight to the dashboard.
    use_effect(move || {
        let state = auth();
        if !state.loading && state.signed_in {
            nav.replace(Route::AdminDashboard {});
        }
    });

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        submitting.set(true);
        error.set(None);

        match api::admin_login(username(), password()).await {
            Ok(()) => {
                password.set(String::new());
                auth.set(AdminAuthState {
                    signed_in: true,
                    loading: false,
                });
                nav.push(Route::AdminDashboard {});
            }
            Err(e) => {
                tracing::warn!("Admin login rejected: {}", e);
                error.set(Some("Invalid username or password".to_string()));
            }
        }
        submitting.set(false);
    };

    rsx! {
        section {
            class: "section",
            div {
                class: "container",
                form {
                    class: "panel login-card",
                    onsubmit: onsubmit,
                    div {
                        class: "login-card__head",
                        Icon { icon: FaLock, width: 32, height: 32, class: "login-card__icon" }
                        h3 { "Admin Login" }
                        p { "Access the administrative dashboard" }
                    }

                    div {
                        class: "field",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            class: "input",
                            autocomplete: "username",
                            placeholder: "Enter your username",
                            required: true,
                            value: "{username}",
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "input",
                            r#type: "password",
                            autocomplete: "current-password",
                            placeholder: "Enter your password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    if let Some(message) = error() {
                        div { class: "form-error", "{message}" }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Login" }
                    }
                }
            }
        }
    }
}
