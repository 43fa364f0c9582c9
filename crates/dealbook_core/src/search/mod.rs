//! Free-text search entry points.
//!
//! # Responsibility
//! - Expose case-insensitive substring search over companies, contacts,
//!   and deals.
//! - Keep search result shaping inside core.

pub mod substring;
