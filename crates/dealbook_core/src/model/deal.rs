//! Deal domain model.
//!
//! # Responsibility
//! - Define the tracked sales deal with an amount and funnel stage.
//!
//! # Invariants
//! - `company_id` is a weak reference, kept verbatim after a company
//!   delete.
//! - Stage ordering follows the funnel; `Won` and `Lost` are terminal.

use crate::model::company::CompanyId;
use serde::{Deserialize, Serialize};

/// Stable identifier for a deal record (`deal-<ordinal>`).
pub type DealId = String;

/// Funnel position of a deal.
///
/// Variant order is the funnel order, so `#[derive(PartialOrd)]` gives
/// stage progression comparisons for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    New,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl DealStage {
    /// Terminal stages never move again.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A tracked sales deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: DealId,
    pub name: String,
    /// Weak reference to the account this deal belongs to.
    pub company_id: CompanyId,
    /// Monetary amount; non-negative by convention, not enforced.
    pub amount: f64,
    pub stage: DealStage,
    /// Expected (or actual, once terminal) close date, epoch ms.
    pub close_date: i64,
    pub owner: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Creation request for a deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDeal {
    pub name: String,
    pub company_id: CompanyId,
    pub amount: f64,
    pub stage: DealStage,
    pub close_date: i64,
    pub owner: String,
}

/// Partial update: present fields overwrite, absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealPatch {
    pub name: Option<String>,
    pub company_id: Option<CompanyId>,
    pub amount: Option<f64>,
    pub stage: Option<DealStage>,
    pub close_date: Option<i64>,
    pub owner: Option<String>,
}
