//! Core domain logic for dealbook, an in-memory CRM record store.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{
    Activity, ActivityId, ActivityKind, ActivityPatch, NewActivity, RelatedKind, RelatedRef,
};
pub use model::company::{Company, CompanyId, CompanyPatch, CompanyStatus, NewCompany};
pub use model::contact::{Contact, ContactId, ContactPatch, NewContact};
pub use model::deal::{Deal, DealId, DealPatch, DealStage, NewDeal};
pub use repo::activity_repo::{ActivityRepository, SqliteActivityRepository};
pub use repo::company_repo::{CompanyRepository, SqliteCompanyRepository};
pub use repo::contact_repo::{ContactRepository, SqliteContactRepository};
pub use repo::deal_repo::{DealRepository, SqliteDealRepository};
pub use repo::{RepoError, RepoResult};
pub use search::substring::{search_all, SearchError, SearchHits, SearchResult};
pub use service::store::Store;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
