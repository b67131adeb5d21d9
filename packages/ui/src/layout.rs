//! Header navigation and footer shared by every page.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::icons::FaArrowTrendUp;
use crate::Icon;

pub const COMPANY_NAME: &str = "Goal Getters Financial Services";

/// Top-level pages reachable from the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Loans,
    Contact,
    Admin,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [NavItem::Home, NavItem::Loans, NavItem::Contact, NavItem::Admin];

    pub fn href(&self) -> &'static str {
        match self {
            NavItem::Home => "/",
            NavItem::Loans => "/loans",
            NavItem::Contact => "/contact",
            NavItem::Admin => "/admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Loans => "Loan Products",
            NavItem::Contact => "Contact",
            NavItem::Admin => "Admin",
        }
    }
}

#[component]
pub fn SiteHeader(active: NavItem) -> Element {
    rsx! {
        header {
            class: "site-header",
            div {
                class: "container site-header__inner",
                a {
                    class: "brand",
                    href: "/",
                    Icon { icon: FaArrowTrendUp, width: 28, height: 28, class: "brand__icon" }
                    h1 { class: "brand__name", "{COMPANY_NAME}" }
                }
                nav {
                    class: "site-nav",
                    for item in NavItem::ALL {
                        a {
                            key: "{item.href()}",
                            class: if item == active { "site-nav__link site-nav__link--active" } else { "site-nav__link" },
                            href: item.href(),
                            "{item.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "container site-footer__inner",
                div {
                    class: "brand",
                    Icon { icon: FaArrowTrendUp, width: 22, height: 22, class: "brand__icon" }
                    span { class: "brand__name brand__name--small", "{COMPANY_NAME}" }
                }
                p {
                    class: "site-footer__copy",
                    "© {year} {COMPANY_NAME}. All rights reserved."
                }
            }
        }
    }
}

/// Green banner at the top of each page.
#[component]
pub fn PageHero(title: String, subtitle: String) -> Element {
    rsx! {
        section {
            class: "page-hero",
            div {
                class: "container page-hero__inner",
                h2 { class: "page-hero__title", "{title}" }
                p { class: "page-hero__subtitle", "{subtitle}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_items_point_at_public_routes() {
        let hrefs: Vec<_> = NavItem::ALL.iter().map(NavItem::href).collect();
        assert_eq!(hrefs, vec!["/", "/loans", "/contact", "/admin"]);
    }
}
