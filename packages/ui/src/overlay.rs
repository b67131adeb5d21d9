use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::FaCircleCheck;
use crate::Icon;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Confirmation shown after the contact form is stored.
#[component]
pub fn SuccessOverlay(on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_close,
            div {
                class: "success",
                Icon { icon: FaCircleCheck, width: 64, height: 64, class: "success__icon" }
                h3 { class: "success__title", "Message Sent Successfully!" }
                p { "Thank you for contacting us. We'll get back to you soon." }
            }
        }
    }
}

/// Sleep on either the browser or the native runtime.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
