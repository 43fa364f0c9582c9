//! Store facade over the per-kind repositories.
//!
//! # Responsibility
//! - Own the in-memory database connection for the process lifetime.
//! - Expose the full CRUD, traversal, and search surface behind one
//!   explicit object that can be passed or injected into consumers.
//!
//! # Invariants
//! - Mutating methods take `&mut self`; a shared store therefore
//!   serializes writers statically.
//! - The store pushes no change notifications; callers re-fetch via
//!   `list_*`/`get_*` after any mutation.
//! - The store validates nothing: required fields, value ranges, and
//!   email shape are a caller concern.

use crate::db::open_db_in_memory;
use crate::model::activity::{Activity, ActivityPatch, NewActivity, RelatedKind};
use crate::model::company::{Company, CompanyPatch, NewCompany};
use crate::model::contact::{Contact, ContactPatch, NewContact};
use crate::model::deal::{Deal, DealPatch, NewDeal};
use crate::repo::activity_repo::{ActivityRepository, SqliteActivityRepository};
use crate::repo::company_repo::{CompanyRepository, SqliteCompanyRepository};
use crate::repo::contact_repo::{ContactRepository, SqliteContactRepository};
use crate::repo::deal_repo::{DealRepository, SqliteDealRepository};
use crate::repo::RepoResult;
use crate::search::substring::{search_all, SearchHits, SearchResult};
use crate::seed::seed_demo_data;
use log::info;
use rusqlite::Connection;

/// In-memory CRM record store.
///
/// Construct once at process start and hand to all consumers; there is
/// no global instance.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens a fresh store seeded with the demo roster.
    pub fn open() -> RepoResult<Self> {
        let mut conn = open_db_in_memory()?;
        seed_demo_data(&mut conn)?;
        info!("event=store_open module=service status=ok seeded=true");
        Ok(Self { conn })
    }

    /// Opens a fresh, empty store. Useful as a test double substitution
    /// point.
    pub fn open_empty() -> RepoResult<Self> {
        let conn = open_db_in_memory()?;
        info!("event=store_open module=service status=ok seeded=false");
        Ok(Self { conn })
    }

    // Companies

    /// All companies, newest first.
    pub fn list_companies(&self) -> RepoResult<Vec<Company>> {
        SqliteCompanyRepository::new(&self.conn).list_companies()
    }

    pub fn get_company(&self, id: &str) -> RepoResult<Option<Company>> {
        SqliteCompanyRepository::new(&self.conn).get_company(id)
    }

    pub fn add_company(&mut self, new: &NewCompany) -> RepoResult<Company> {
        SqliteCompanyRepository::new(&self.conn).create_company(new)
    }

    pub fn update_company(&mut self, id: &str, patch: &CompanyPatch) -> RepoResult<Option<Company>> {
        SqliteCompanyRepository::new(&self.conn).update_company(id, patch)
    }

    /// Removes one company. Contacts, deals, and activities referencing
    /// it keep their now-dangling ids.
    pub fn delete_company(&mut self, id: &str) -> RepoResult<bool> {
        SqliteCompanyRepository::new(&self.conn).delete_company(id)
    }

    // Contacts

    pub fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        SqliteContactRepository::new(&self.conn).list_contacts()
    }

    pub fn get_contact(&self, id: &str) -> RepoResult<Option<Contact>> {
        SqliteContactRepository::new(&self.conn).get_contact(id)
    }

    /// All contacts referencing the given company, in storage order.
    pub fn contacts_of_company(&self, company_id: &str) -> RepoResult<Vec<Contact>> {
        SqliteContactRepository::new(&self.conn).contacts_of_company(company_id)
    }

    pub fn add_contact(&mut self, new: &NewContact) -> RepoResult<Contact> {
        SqliteContactRepository::new(&self.conn).create_contact(new)
    }

    pub fn update_contact(&mut self, id: &str, patch: &ContactPatch) -> RepoResult<Option<Contact>> {
        SqliteContactRepository::new(&self.conn).update_contact(id, patch)
    }

    pub fn delete_contact(&mut self, id: &str) -> RepoResult<bool> {
        SqliteContactRepository::new(&self.conn).delete_contact(id)
    }

    // Deals

    pub fn list_deals(&self) -> RepoResult<Vec<Deal>> {
        SqliteDealRepository::new(&self.conn).list_deals()
    }

    pub fn get_deal(&self, id: &str) -> RepoResult<Option<Deal>> {
        SqliteDealRepository::new(&self.conn).get_deal(id)
    }

    /// All deals referencing the given company, in storage order.
    pub fn deals_of_company(&self, company_id: &str) -> RepoResult<Vec<Deal>> {
        SqliteDealRepository::new(&self.conn).deals_of_company(company_id)
    }

    pub fn add_deal(&mut self, new: &NewDeal) -> RepoResult<Deal> {
        SqliteDealRepository::new(&self.conn).create_deal(new)
    }

    pub fn update_deal(&mut self, id: &str, patch: &DealPatch) -> RepoResult<Option<Deal>> {
        SqliteDealRepository::new(&self.conn).update_deal(id, patch)
    }

    pub fn delete_deal(&mut self, id: &str) -> RepoResult<bool> {
        SqliteDealRepository::new(&self.conn).delete_deal(id)
    }

    // Activities

    /// All activities, newest first by occurrence time.
    pub fn list_activities(&self) -> RepoResult<Vec<Activity>> {
        SqliteActivityRepository::new(&self.conn).list_activities()
    }

    /// All activities attached to the given record, newest first.
    pub fn activities_for(&self, kind: RelatedKind, id: &str) -> RepoResult<Vec<Activity>> {
        SqliteActivityRepository::new(&self.conn).activities_for(kind, id)
    }

    pub fn get_activity(&self, id: &str) -> RepoResult<Option<Activity>> {
        SqliteActivityRepository::new(&self.conn).get_activity(id)
    }

    pub fn add_activity(&mut self, new: &NewActivity) -> RepoResult<Activity> {
        SqliteActivityRepository::new(&self.conn).create_activity(new)
    }

    /// Merges the fields present in the patch. The record the activity is
    /// attached to cannot be changed after creation.
    pub fn update_activity(&mut self, id: &str, patch: &ActivityPatch) -> RepoResult<Option<Activity>> {
        SqliteActivityRepository::new(&self.conn).update_activity(id, patch)
    }

    pub fn delete_activity(&mut self, id: &str) -> RepoResult<bool> {
        SqliteActivityRepository::new(&self.conn).delete_activity(id)
    }

    // Search

    /// Case-insensitive substring search over companies, contacts, and
    /// deals. Blank queries return empty hit sets.
    pub fn search(&self, query: &str) -> SearchResult<SearchHits> {
        search_all(&self.conn, query)
    }
}
