//! # Website copy: `SiteContent` and its editor
//!
//! The marketing pages render from a single [`SiteContent`] document: hero text,
//! mission / vision / values statements, contact details and exactly four
//! [`LoanProduct`]s. Defaults carry the lender's published copy so a fresh
//! deployment renders without any stored content.
//!
//! The document is stored as TOML (see [`SiteContent::to_toml`]). Every field
//! has a serde default, so a partial seed file only overrides what it names:
//!
//! ```toml
//! hero_title = "Smart Financial Solutions for Your Goals"
//! contact_phone = "+263713014547"
//!
//! [[loan_products]]
//! id = "1"
//! title = "Group Enterprise Loans"
//! # ...
//! ```
//!
//! [`ContentEditor`] wraps a document for the admin dashboard: fields are edited
//! one at a time, loan products only by field (never added or removed), and
//! [`is_dirty`](ContentEditor::is_dirty) compares against the last saved copy.

use serde::{Deserialize, Serialize};

use crate::models::ValidationError;

/// Number of loan products the site always shows.
pub const LOAN_PRODUCT_COUNT: usize = 4;

/// Editable marketing copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub mission_text: String,
    pub vision_text: String,
    pub values_text: String,
    pub contact_address: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub loan_products: Vec<LoanProduct>,
}

/// One loan product card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanProduct {
    pub id: String,
    pub title: String,
    pub description: String,
    pub repayment: String,
    pub interest: String,
}

/// Top-level text fields of [`SiteContent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentField {
    HeroTitle,
    HeroSubtitle,
    MissionText,
    VisionText,
    ValuesText,
    ContactAddress,
    ContactPhone,
    ContactEmail,
}

/// Editable fields of a [`LoanProduct`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoanField {
    Title,
    Description,
    Repayment,
    Interest,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            hero_title: "Smart Financial Solutions for Your Goals".to_string(),
            hero_subtitle: "Here is your trusted lender Goal Getters Financial Services, your lending solution which helps you to live your dream.".to_string(),
            mission_text: "To provide the best, affordable and smart financial solutions that empower and address the needs of employees and small to medium enterprises in Zimbabwe.".to_string(),
            vision_text: "To be a leading financial institution in the provision of affordable and smart financial solutions to employed individuals and small to medium enterprises in Zimbabwe.".to_string(),
            values_text: "Commitment, Respect, Transparency. Goal Getters is a learning institute and encourages a system of continuous improvement.".to_string(),
            contact_address: "No. 2, East wing, First Floor\n6491A Clyde Road Eastlea\nHarare, Zimbabwe".to_string(),
            contact_phone: "+263713014547".to_string(),
            contact_email: "info@goalgetters.co.zw".to_string(),
            loan_products: default_loan_products(),
        }
    }
}

fn default_loan_products() -> Vec<LoanProduct> {
    vec![
        LoanProduct::new(
            "1",
            "Group Enterprise Loans",
            "For women in groups (4 to 8 members), co-guaranteed. Suitable for small businesses like poultry, tailoring, retail, and farming.",
            "2–3 months",
            "15% flat interest",
        ),
        LoanProduct::new(
            "2",
            "Individual Enterprise Loans",
            "For women working solo on larger projects. Perfect for entrepreneurs looking to expand their business operations.",
            "2–3 months",
            "15% flat interest",
        ),
        LoanProduct::new(
            "3",
            "Solar Loans",
            "50% cost covered upfront by borrower, the remaining 50% loan is repayable in 3 months. Bring clean energy to your home or business.",
            "3 months",
            "15% flat",
        ),
        LoanProduct::new(
            "4",
            "School Fees Loans",
            "Covers school fees to ensure your children's education is never interrupted. Invest in their future today.",
            "3 months",
            "Competitive rates",
        ),
    ]
}

impl LoanProduct {
    pub fn new(id: &str, title: &str, description: &str, repayment: &str, interest: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            repayment: repayment.to_string(),
            interest: interest.to_string(),
        }
    }

    pub fn get(&self, field: LoanField) -> &str {
        match field {
            LoanField::Title => &self.title,
            LoanField::Description => &self.description,
            LoanField::Repayment => &self.repayment,
            LoanField::Interest => &self.interest,
        }
    }

    fn slot(&mut self, field: LoanField) -> &mut String {
        match field {
            LoanField::Title => &mut self.title,
            LoanField::Description => &mut self.description,
            LoanField::Repayment => &mut self.repayment,
            LoanField::Interest => &mut self.interest,
        }
    }
}

impl ContentField {
    pub const ALL: [ContentField; 8] = [
        ContentField::HeroTitle,
        ContentField::HeroSubtitle,
        ContentField::MissionText,
        ContentField::VisionText,
        ContentField::ValuesText,
        ContentField::ContactAddress,
        ContentField::ContactPhone,
        ContentField::ContactEmail,
    ];

    /// Form label shown in the editor.
    pub fn label(&self) -> &'static str {
        match self {
            ContentField::HeroTitle => "Hero Title",
            ContentField::HeroSubtitle => "Hero Subtitle",
            ContentField::MissionText => "Mission Statement",
            ContentField::VisionText => "Vision Statement",
            ContentField::ValuesText => "Values Statement",
            ContentField::ContactAddress => "Address",
            ContentField::ContactPhone => "Phone",
            ContentField::ContactEmail => "Email",
        }
    }

    /// Whether the editor should use a multi-line input.
    pub fn is_multiline(&self) -> bool {
        !matches!(
            self,
            ContentField::HeroTitle | ContentField::ContactPhone | ContentField::ContactEmail
        )
    }
}

impl LoanField {
    pub const ALL: [LoanField; 4] = [
        LoanField::Title,
        LoanField::Description,
        LoanField::Repayment,
        LoanField::Interest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LoanField::Title => "Title",
            LoanField::Description => "Description",
            LoanField::Repayment => "Repayment Period",
            LoanField::Interest => "Interest Rate",
        }
    }
}

impl SiteContent {
    pub fn get(&self, field: ContentField) -> &str {
        match field {
            ContentField::HeroTitle => &self.hero_title,
            ContentField::HeroSubtitle => &self.hero_subtitle,
            ContentField::MissionText => &self.mission_text,
            ContentField::VisionText => &self.vision_text,
            ContentField::ValuesText => &self.values_text,
            ContentField::ContactAddress => &self.contact_address,
            ContentField::ContactPhone => &self.contact_phone,
            ContentField::ContactEmail => &self.contact_email,
        }
    }

    pub fn set(&mut self, field: ContentField, value: String) {
        let slot = match field {
            ContentField::HeroTitle => &mut self.hero_title,
            ContentField::HeroSubtitle => &mut self.hero_subtitle,
            ContentField::MissionText => &mut self.mission_text,
            ContentField::VisionText => &mut self.vision_text,
            ContentField::ValuesText => &mut self.values_text,
            ContentField::ContactAddress => &mut self.contact_address,
            ContentField::ContactPhone => &mut self.contact_phone,
            ContentField::ContactEmail => &mut self.contact_email,
        };
        *slot = value;
    }

    /// Set one field of the loan product with `id`. Returns false for an unknown id.
    pub fn set_loan(&mut self, id: &str, field: LoanField, value: String) -> bool {
        match self.loan_products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                *product.slot(field) = value;
                true
            }
            None => false,
        }
    }

    /// Address split into display lines.
    pub fn address_lines(&self) -> Vec<&str> {
        self.contact_address
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Check the document before it is stored.
    ///
    /// Products are fixed: exactly [`LOAN_PRODUCT_COUNT`] of them, with the
    /// default ids in order, each with a title.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.hero_title.trim().is_empty() {
            return Err(ValidationError::MissingField("Hero title"));
        }
        if self.contact_email.trim().is_empty() {
            return Err(ValidationError::MissingField("Contact email"));
        }
        if self.loan_products.len() != LOAN_PRODUCT_COUNT {
            return Err(ValidationError::InvalidContent(format!(
                "expected {} loan products, got {}",
                LOAN_PRODUCT_COUNT,
                self.loan_products.len()
            )));
        }
        for (product, expected) in self.loan_products.iter().zip(default_loan_products()) {
            if product.id != expected.id {
                return Err(ValidationError::InvalidContent(format!(
                    "unexpected loan product id {:?}",
                    product.id
                )));
            }
            if product.title.trim().is_empty() {
                return Err(ValidationError::InvalidContent(format!(
                    "loan product {} has no title",
                    product.id
                )));
            }
        }
        Ok(())
    }

    /// The storage key the document is saved under.
    pub fn key() -> &'static str {
        "site"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Editing state for the admin content tab.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentEditor {
    draft: SiteContent,
    saved: SiteContent,
}

impl ContentEditor {
    pub fn new(content: SiteContent) -> Self {
        Self {
            draft: content.clone(),
            saved: content,
        }
    }

    pub fn draft(&self) -> &SiteContent {
        &self.draft
    }

    pub fn set(&mut self, field: ContentField, value: String) {
        self.draft.set(field, value);
    }

    pub fn set_loan(&mut self, id: &str, field: LoanField, value: String) -> bool {
        self.draft.set_loan(id, field, value)
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }

    /// Record `content` as the stored version, e.g. after a successful save.
    pub fn mark_saved(&mut self, content: SiteContent) {
        self.draft = content.clone();
        self.saved = content;
    }

    /// Throw away unsaved edits.
    pub fn revert(&mut self) {
        self.draft = self.saved.clone();
    }
}

impl Default for ContentEditor {
    fn default() -> Self {
        Self::new(SiteContent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_valid() {
        let content = SiteContent::default();
        assert!(content.validate().is_ok());
        assert_eq!(content.loan_products.len(), LOAN_PRODUCT_COUNT);
        assert_eq!(
            content.address_lines(),
            vec![
                "No. 2, East wing, First Floor",
                "6491A Clyde Road Eastlea",
                "Harare, Zimbabwe"
            ]
        );
    }

    #[test]
    fn test_set_loan_edits_only_the_addressed_product() {
        let mut content = SiteContent::default();
        assert!(content.set_loan("3", LoanField::Interest, "12% flat".to_string()));

        assert_eq!(content.loan_products[2].interest, "12% flat");
        assert_eq!(content.loan_products[2].title, "Solar Loans");
        assert_eq!(content.loan_products[0].interest, "15% flat interest");

        assert!(!content.set_loan("9", LoanField::Title, "Nope".to_string()));
        assert_eq!(content.loan_products.len(), LOAN_PRODUCT_COUNT);
    }

    #[test]
    fn test_validate_rejects_changed_product_set() {
        let mut content = SiteContent::default();
        content.loan_products.pop();
        assert!(content.validate().is_err());

        let mut content = SiteContent::default();
        content.loan_products[1].id = "x".to_string();
        assert!(content.validate().is_err());

        let mut content = SiteContent::default();
        content.loan_products[0].title = " ".to_string();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let content = SiteContent::from_toml("hero_title = \"Borrow smarter\"\n").unwrap();
        assert_eq!(content.hero_title, "Borrow smarter");
        assert_eq!(content.contact_phone, "+263713014547");
        assert_eq!(content.loan_products.len(), LOAN_PRODUCT_COUNT);

        let mut edited = SiteContent::default();
        edited.set(ContentField::ContactAddress, "1 Main St\nHarare".to_string());
        let parsed = SiteContent::from_toml(&edited.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, edited);
    }

    #[test]
    fn test_editor_tracks_dirty_state() {
        let mut editor = ContentEditor::default();
        assert!(!editor.is_dirty());

        editor.set(ContentField::MissionText, "New mission".to_string());
        assert!(editor.is_dirty());
        assert_eq!(editor.draft().get(ContentField::MissionText), "New mission");

        editor.revert();
        assert!(!editor.is_dirty());

        editor.set_loan("1", LoanField::Repayment, "4 months".to_string());
        let saved = editor.draft().clone();
        editor.mark_saved(saved);
        assert!(!editor.is_dirty());
        assert_eq!(editor.draft().loan_products[0].repayment, "4 months");
    }
}
