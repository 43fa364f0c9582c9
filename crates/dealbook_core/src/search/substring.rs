//! Case-insensitive substring search over CRM records.
//!
//! # Responsibility
//! - Match a query against company name/industry, contact
//!   first/last/email, and deal name.
//! - Return full records grouped per kind; activities are not searchable.
//!
//! # Invariants
//! - A blank or whitespace-only query returns all-empty hit sets.
//!   Without the guard, an empty substring would trivially match every
//!   record.
//! - Both sides of a match are folded with Rust `to_lowercase`, so
//!   non-ASCII names compare case-insensitively too. Rows are fetched
//!   and filtered in core; the dataset stays at fixture scale.
//! - Whitespace inside a non-blank query is significant: `" tech"` only
//!   matches fields containing that exact substring.
//! - Matching is independent across the three kinds; no ranking, no
//!   deduplication beyond row identity.

use crate::db::DbError;
use crate::model::company::Company;
use crate::model::contact::Contact;
use crate::model::deal::Deal;
use crate::repo::company_repo::{parse_company_row, COMPANY_SELECT_SQL};
use crate::repo::contact_repo::{collect_contacts, CONTACT_SELECT_SQL};
use crate::repo::deal_repo::{parse_deal_row, DEAL_SELECT_SQL};
use crate::repo::RepoError;
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for search APIs.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error for DB interaction and result decoding.
#[derive(Debug)]
pub enum SearchError {
    Db(DbError),
    InvalidData(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid search row: {message}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for SearchError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SearchError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<RepoError> for SearchError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Db(err) => Self::Db(err),
            RepoError::InvalidData(message) => Self::InvalidData(message),
        }
    }
}

/// Grouped hits returned by [`search_all`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHits {
    pub companies: Vec<Company>,
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,
}

impl SearchHits {
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty() && self.contacts.is_empty() && self.deals.is_empty()
    }
}

/// Searches companies, contacts, and deals for a substring of `query`.
///
/// Returns empty hit sets for blank queries.
pub fn search_all(conn: &Connection, query: &str) -> SearchResult<SearchHits> {
    let Some(needle) = normalize_query(query) else {
        return Ok(SearchHits::default());
    };

    let companies = search_companies(conn, &needle)?;
    let contacts = search_contacts(conn, &needle)?;
    let deals = search_deals(conn, &needle)?;

    Ok(SearchHits {
        companies,
        contacts,
        deals,
    })
}

fn search_companies(conn: &Connection, needle: &str) -> SearchResult<Vec<Company>> {
    let companies = collect(conn, &format!("{COMPANY_SELECT_SQL};"), |row| {
        parse_company_row(row).map_err(SearchError::from)
    })?;
    Ok(companies
        .into_iter()
        .filter(|company| {
            contains_folded(&company.name, needle) || contains_folded(&company.industry, needle)
        })
        .collect())
}

fn search_contacts(conn: &Connection, needle: &str) -> SearchResult<Vec<Contact>> {
    let contacts = collect_contacts(conn, &format!("{CONTACT_SELECT_SQL};"), &[])
        .map_err(SearchError::from)?;
    Ok(contacts
        .into_iter()
        .filter(|contact| {
            contains_folded(&contact.first_name, needle)
                || contains_folded(&contact.last_name, needle)
                || contains_folded(&contact.email, needle)
        })
        .collect())
}

fn search_deals(conn: &Connection, needle: &str) -> SearchResult<Vec<Deal>> {
    let deals = collect(conn, &format!("{DEAL_SELECT_SQL};"), |row| {
        parse_deal_row(row).map_err(SearchError::from)
    })?;
    Ok(deals
        .into_iter()
        .filter(|deal| contains_folded(&deal.name, needle))
        .collect())
}

fn collect<T>(
    conn: &Connection,
    sql: &str,
    parse: impl Fn(&Row<'_>) -> SearchResult<T>,
) -> SearchResult<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        records.push(parse(row)?);
    }
    Ok(records)
}

/// Lowercases the query for matching, or `None` for blank input.
///
/// Only the blank check trims; surrounding whitespace stays part of
/// the needle.
fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    Some(query.to_lowercase())
}

fn contains_folded(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
