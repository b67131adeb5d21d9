//! Landing page.

use dioxus::prelude::*;
use ui::icons::{FaArrowTrendUp, FaShieldHalved, FaUsers};
use ui::{use_site_content, ContactDetails, Icon};

const PROTECTION_PRINCIPLES: [&str; 7] = [
    "Appropriate product design and delivery",
    "Prevention of over-indebtedness",
    "Transparency",
    "Responsible Pricing",
    "Fair and Respectful treatment of clients",
    "Privacy of client data",
    "Mechanism of complaint resolution",
];

#[component]
pub fn Home() -> Element {
    let content = use_site_content();
    let site = content.read().clone();

    rsx! {
        section {
            class: "page-hero",
            div {
                class: "container page-hero__inner",
                h2 { class: "page-hero__title", "{site.hero_title}" }
                p { class: "page-hero__subtitle", "{site.hero_subtitle}" }
                div {
                    class: "page-hero__actions",
                    Link { class: "btn btn-outline", to: "/loans", "View Loan Products" }
                    Link { class: "btn btn-primary", to: "/contact", "Contact Us" }
                }
            }
        }

        section {
            class: "section",
            div {
                class: "container",
                h2 { class: "section__title", "About Goal Getters Financial" }
                div {
                    class: "pillars",
                    div {
                        class: "pillar",
                        Icon { icon: FaShieldHalved, width: 32, height: 32, class: "pillar__icon" }
                        h3 { "Our Mission" }
                        p { "{site.mission_text}" }
                    }
                    div {
                        class: "pillar",
                        Icon { icon: FaArrowTrendUp, width: 32, height: 32, class: "pillar__icon" }
                        h3 { "Our Vision" }
                        p { "{site.vision_text}" }
                    }
                    div {
                        class: "pillar",
                        Icon { icon: FaUsers, width: 32, height: 32, class: "pillar__icon" }
                        h3 { "Our Values" }
                        p { "{site.values_text}" }
                    }
                }
            }
        }

        section {
            class: "section",
            div {
                class: "container",
                h2 { class: "section__title", "Client Protection Principles" }
                ul {
                    class: "principles",
                    for (index, principle) in PROTECTION_PRINCIPLES.iter().enumerate() {
                        li {
                            key: "{index}",
                            class: if index % 2 == 1 { "principle principle--yellow" } else { "principle" },
                            span { class: "principle__dot" }
                            p { "{principle}" }
                        }
                    }
                }
            }
        }

        ContactDetails { content: site }
    }
}
