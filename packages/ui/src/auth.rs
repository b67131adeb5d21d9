//! Admin session context and hooks for the UI.

use dioxus::prelude::*;

use crate::icons::FaRightFromBracket;
use crate::Icon;

/// Whether the browser holds a signed-in admin session.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminAuthState {
    pub signed_in: bool,
    pub loading: bool,
}

impl Default for AdminAuthState {
    fn default() -> Self {
        Self {
            signed_in: false,
            loading: true,
        }
    }
}

/// Get the current admin session state.
/// Returns a signal that updates when the operator signs in or out.
pub fn use_admin_auth() -> Signal<AdminAuthState> {
    use_context::<Signal<AdminAuthState>>()
}

/// Provider component that asks the server for the admin session on mount.
/// Wrap the app with this component to enable the admin gate.
#[component]
pub fn AdminAuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AdminAuthState::default);

    let _ = use_resource(move || async move {
        let signed_in = match api::admin_status().await {
            Ok(signed_in) => signed_in,
            Err(e) => {
                tracing::error!("Failed to check admin session: {}", e);
                false
            }
        };
        auth_state.set(AdminAuthState {
            signed_in,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that ends the admin session.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_admin_auth();

    let onclick = move |_| async move {
        if let Err(e) = api::admin_logout().await {
            tracing::error!("Logout failed: {}", e);
        }
        auth_state.set(AdminAuthState {
            signed_in: false,
            loading: false,
        });
        on_logout.call(());
    };

    rsx! {
        button {
            class: "btn btn-outline {class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            " {label}"
        }
    }
}
