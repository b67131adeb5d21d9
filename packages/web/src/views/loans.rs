use dioxus::prelude::*;
use ui::{use_site_content, LoanCard, PageHero};

#[component]
pub fn Loans() -> Element {
    let content = use_site_content();
    let products = content.read().loan_products.clone();

    rsx! {
        PageHero {
            title: "Our Loan Products",
            subtitle: "Flexible financing solutions designed to meet your unique needs and help you achieve your goals.",
        }

        section {
            class: "section",
            div {
                class: "container loan-grid",
                for (index, product) in products.into_iter().enumerate() {
                    LoanCard { key: "{product.id}", product, index }
                }
            }
        }

        section {
            class: "section section--cta",
            div {
                class: "container",
                h2 { class: "section__title", "Ready to Apply?" }
                p {
                    class: "section__lead",
                    "Take the first step towards achieving your financial goals. Our team is here to guide you through the application process."
                }
                div {
                    class: "section__actions",
                    Link { class: "btn btn-primary", to: "/contact", "Apply Now" }
                }
            }
        }
    }
}
