//! Domain model for CRM records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one struct per entity kind plus draft/patch request shapes.
//!
//! # Invariants
//! - Every record is identified by a stable `<prefix>-<ordinal>` id string.
//! - `company_id` and `RelatedRef` hold weak references: resolution may
//!   fail after the referent was deleted, and callers must handle the
//!   absent case instead of assuming referential integrity.

pub mod activity;
pub mod company;
pub mod contact;
pub mod deal;
