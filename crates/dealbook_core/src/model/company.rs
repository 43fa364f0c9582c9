//! Company domain model.
//!
//! # Responsibility
//! - Define the account-level record that contacts and deals reference.
//!
//! # Invariants
//! - `id` is stable and never reused for another company within a
//!   process lifetime.
//! - `created_at` is assigned once at creation and never changes.

use serde::{Deserialize, Serialize};

/// Stable identifier for a company record (`comp-<ordinal>`).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CompanyId = String;

/// Lifecycle status of a company in the funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    /// Unqualified inbound account.
    Lead,
    /// Qualified and actively worked.
    Prospect,
    /// Has at least one closed deal.
    Customer,
}

/// A company/account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub industry: String,
    pub website: String,
    /// Free-form headcount bracket, e.g. `"200-500"`.
    pub size: String,
    pub status: CompanyStatus,
    /// Owning agent display name.
    pub owner: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Creation request: everything except the store-assigned `id` and
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub industry: String,
    pub website: String,
    pub size: String,
    pub status: CompanyStatus,
    pub owner: String,
}

/// Partial update: present fields overwrite, absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub size: Option<String>,
    pub status: Option<CompanyStatus>,
    pub owner: Option<String>,
}

impl CompanyPatch {
    /// Returns whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.industry.is_none()
            && self.website.is_none()
            && self.size.is_none()
            && self.status.is_none()
            && self.owner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{Company, CompanyPatch, CompanyStatus};

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&CompanyStatus::Prospect).unwrap();
        assert_eq!(json, "\"prospect\"");
    }

    #[test]
    fn company_round_trips_through_json() {
        let company = Company {
            id: "comp-1".to_string(),
            name: "Acme Corp".to_string(),
            industry: "Manufacturing".to_string(),
            website: "acme.example".to_string(),
            size: "50-200".to_string(),
            status: CompanyStatus::Customer,
            owner: "Sarah Johnson".to_string(),
            created_at: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&company).unwrap();
        let back: Company = serde_json::from_str(&json).unwrap();
        assert_eq!(back, company);
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(CompanyPatch::default().is_empty());
        let patch = CompanyPatch {
            owner: Some("Michael Chen".to_string()),
            ..CompanyPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
