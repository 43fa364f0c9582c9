//! Contact domain model.
//!
//! # Responsibility
//! - Define the individual-person record tied to one company.
//!
//! # Invariants
//! - `company_id` is a weak reference; it is kept verbatim even when
//!   the referenced company is deleted.
//! - `tags` preserves caller order for display; lookup treats it as a set.

use crate::model::company::CompanyId;
use serde::{Deserialize, Serialize};

/// Stable identifier for a contact record (`cont-<ordinal>`).
pub type ContactId = String;

/// An individual contact tied to one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Job title, free-form.
    pub title: String,
    /// Weak reference to the employing company.
    pub company_id: CompanyId,
    pub owner: String,
    /// Free-form tags in caller-provided order.
    pub tags: Vec<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Creation request for a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    pub company_id: CompanyId,
    pub owner: String,
    pub tags: Vec<String>,
}

/// Partial update. `tags`, when present, replaces the whole tag list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub company_id: Option<CompanyId>,
    pub owner: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Contact {
    /// Set-style tag lookup; display order is irrelevant here.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::Contact;

    fn sample() -> Contact {
        Contact {
            id: "cont-1".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john.smith@techcorp.com".to_string(),
            phone: "+1-555-0101".to_string(),
            title: "CEO".to_string(),
            company_id: "comp-1".to_string(),
            owner: "Sarah Johnson".to_string(),
            tags: vec!["Decision Maker".to_string(), "Executive".to_string()],
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn has_tag_matches_exact_entries() {
        let contact = sample();
        assert!(contact.has_tag("Executive"));
        assert!(!contact.has_tag("executive"));
        assert!(!contact.has_tag("Sales"));
    }

    #[test]
    fn tags_keep_insertion_order_through_serde() {
        let contact = sample();
        let json = serde_json::to_string(&contact).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tags, vec!["Decision Maker", "Executive"]);
    }
}
