//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const SITE_CSS: Asset = asset!("/assets/site.css");

mod auth;
pub use auth::{use_admin_auth, AdminAuthProvider, AdminAuthState, LogoutButton};

mod layout;
pub use layout::{NavItem, PageHero, SiteFooter, SiteHeader, COMPANY_NAME};

mod site_content;
pub use site_content::{use_site_content, ContactDetails};

mod loan_card;
pub use loan_card::{LoanCard, LoanIcon};

mod overlay;
pub use overlay::{sleep, ModalOverlay, SuccessOverlay};

mod messages;
pub use messages::{MessageList, ReplyPanel};

mod content_form;
pub use content_form::ContentForm;
