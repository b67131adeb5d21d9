use dioxus::prelude::*;
use store::LoanProduct;

use crate::icons::{FaGraduationCap, FaSun, FaUser, FaUsers};
use crate::Icon;

/// Card for one loan product. Cards alternate green and yellow accents.
#[component]
pub fn LoanCard(product: LoanProduct, index: usize) -> Element {
    let accent = if index % 2 == 1 { "loan-card--yellow" } else { "loan-card--green" };

    rsx! {
        div {
            class: "loan-card {accent}",
            div {
                class: "loan-card__badge",
                LoanIcon { index }
            }
            h3 { class: "loan-card__title", "{product.title}" }
            p { class: "loan-card__description", "{product.description}" }
            div {
                class: "loan-card__terms",
                span { class: "pill", "Repayment: {product.repayment}" }
                span { class: "pill pill--accent", "{product.interest}" }
            }
        }
    }
}

/// Icon for the product at `index`: group, individual, solar, school fees.
#[component]
pub fn LoanIcon(index: usize) -> Element {
    match index {
        1 => rsx! { Icon { icon: FaUser, width: 28, height: 28 } },
        2 => rsx! { Icon { icon: FaSun, width: 28, height: 28 } },
        3 => rsx! { Icon { icon: FaGraduationCap, width: 28, height: 28 } },
        _ => rsx! { Icon { icon: FaUsers, width: 28, height: 28 } },
    }
}
