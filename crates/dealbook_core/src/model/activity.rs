//! Activity domain model.
//!
//! # Responsibility
//! - Define the timestamped note/interaction record attached to exactly
//!   one company, contact, or deal.
//!
//! # Invariants
//! - `related` is set once at creation and never mutated.
//! - Activities carry no creation timestamp distinct from `occurred_at`.

use serde::{Deserialize, Serialize};

/// Stable identifier for an activity record (`act-<ordinal>`).
pub type ActivityId = String;

/// Interaction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Note,
    Call,
    Email,
    Meeting,
}

/// Kind tag for the polymorphic activity relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelatedKind {
    Company,
    Contact,
    Deal,
}

/// Weak reference to the record an activity is attached to.
///
/// Resolution may fail after the referent was deleted; traversal call
/// sites must treat an unresolved reference as "not available".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelatedRef {
    pub kind: RelatedKind,
    pub id: String,
}

/// A timestamped note/interaction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub kind: ActivityKind,
    /// Free-text body.
    pub content: String,
    /// When the interaction happened, epoch ms.
    pub occurred_at: i64,
    pub owner: String,
    pub related: RelatedRef,
}

/// Creation request: everything except the store-assigned `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub kind: ActivityKind,
    pub content: String,
    pub occurred_at: i64,
    pub owner: String,
    pub related: RelatedRef,
}

/// Partial update. The relation is immutable and deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityPatch {
    pub kind: Option<ActivityKind>,
    pub content: Option<String>,
    pub occurred_at: Option<i64>,
    pub owner: Option<String>,
}
