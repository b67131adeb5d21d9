//! Site copy shared by the public pages.

use dioxus::prelude::*;
use store::SiteContent;

use crate::icons::{FaEnvelope, FaLocationDot, FaPhone};
use crate::Icon;

/// Load the stored site copy, showing the published defaults until it arrives
/// or if it cannot be fetched.
pub fn use_site_content() -> Signal<SiteContent> {
    let mut content = use_signal(SiteContent::default);

    let _ = use_resource(move || async move {
        match api::get_site_content().await {
            Ok(stored) => content.set(stored),
            Err(e) => tracing::error!("Failed to load site content: {}", e),
        }
    });

    content
}

/// "Find Us" block: address, phone and email.
#[component]
pub fn ContactDetails(content: SiteContent) -> Element {
    let address_lines: Vec<String> = content
        .address_lines()
        .into_iter()
        .map(str::to_string)
        .collect();

    rsx! {
        section {
            class: "find-us",
            div {
                class: "container",
                div {
                    class: "find-us__heading",
                    h2 { "Find Us" }
                    p { "Get in touch with our team" }
                }
                div {
                    class: "find-us__grid",
                    div {
                        class: "find-us__item",
                        Icon { icon: FaLocationDot, width: 40, height: 40, class: "find-us__icon" }
                        h3 { "Address" }
                        p {
                            for line in address_lines {
                                span { class: "find-us__line", "{line}" }
                            }
                        }
                    }
                    div {
                        class: "find-us__item",
                        Icon { icon: FaPhone, width: 40, height: 40, class: "find-us__icon" }
                        h3 { "Phone" }
                        p { "{content.contact_phone}" }
                    }
                    div {
                        class: "find-us__item",
                        Icon { icon: FaEnvelope, width: 40, height: 40, class: "find-us__icon" }
                        h3 { "Email" }
                        p { "{content.contact_email}" }
                    }
                }
            }
        }
    }
}
