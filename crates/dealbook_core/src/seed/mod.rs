//! Demo dataset seeding.
//!
//! # Responsibility
//! - Populate a fresh store with the fixture roster: 10 companies,
//!   20 contacts, 10 deals, 30 activities.
//! - Leave id counters pointing past the seeded ordinals.
//!
//! # Invariants
//! - Seeding is a no-op when companies already exist, so it runs at most
//!   once per store lifetime.
//! - Dataset shape is deterministic; only timestamps are randomized,
//!   within bounded look-back windows per kind.

mod fixture;

use crate::model::activity::RelatedKind;
use crate::repo::activity_repo::{activity_kind_to_db, related_kind_to_db};
use crate::repo::company_repo::status_to_db;
use crate::repo::deal_repo::stage_to_db;
use crate::repo::{bump_counter_to, now_epoch_ms, RepoResult};
use fixture::{
    ACTIVITY_CONTENTS, ACTIVITY_COUNT, ACTIVITY_KINDS, COMPANIES, CONTACTS, DEALS, OWNERS,
};
use log::info;
use rand::Rng;
use rusqlite::{params, Connection, TransactionBehavior};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

const COMPANY_LOOKBACK_DAYS: i64 = 90;
const CONTACT_LOOKBACK_DAYS: i64 = 60;
const DEAL_LOOKBACK_DAYS: i64 = 45;
const ACTIVITY_LOOKBACK_DAYS: i64 = 30;

/// Seeds the demo roster into an empty store.
///
/// # Side effects
/// - Emits `seed` logging events with row counts and status.
pub fn seed_demo_data(conn: &mut Connection) -> RepoResult<()> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM companies;", [], |row| row.get(0))?;
    if existing > 0 {
        info!("event=seed module=seed status=skipped existing_companies={existing}");
        return Ok(());
    }

    let now = now_epoch_ms();
    let mut rng = rand::rng();

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    for (index, company) in COMPANIES.iter().enumerate() {
        let created_at = now - rng.random_range(0..COMPANY_LOOKBACK_DAYS * DAY_MS);
        tx.execute(
            "INSERT INTO companies (
                id, name, industry, website, size, status, owner, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                format!("comp-{}", index + 1),
                company.name,
                company.industry,
                company.website,
                company.size,
                status_to_db(company.status),
                OWNERS[index % OWNERS.len()],
                created_at,
            ],
        )?;
    }

    for (index, contact) in CONTACTS.iter().enumerate() {
        let id = format!("cont-{}", index + 1);
        let created_at = now - rng.random_range(0..CONTACT_LOOKBACK_DAYS * DAY_MS);
        tx.execute(
            "INSERT INTO contacts (
                id, first_name, last_name, email, phone, title, company_id, owner, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                id,
                contact.first_name,
                contact.last_name,
                contact.email,
                contact.phone,
                contact.title,
                format!("comp-{}", contact.company_ordinal),
                OWNERS[index % OWNERS.len()],
                created_at,
            ],
        )?;
        for (position, tag) in contact.tags.iter().enumerate() {
            tx.execute(
                "INSERT INTO contact_tags (contact_id, position, tag) VALUES (?1, ?2, ?3);",
                params![id, position as i64, tag],
            )?;
        }
    }

    for (index, deal) in DEALS.iter().enumerate() {
        let created_at = now - rng.random_range(0..DEAL_LOOKBACK_DAYS * DAY_MS);
        tx.execute(
            "INSERT INTO deals (
                id, name, company_id, amount, stage, close_date, owner, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                format!("deal-{}", index + 1),
                deal.name,
                format!("comp-{}", deal.company_ordinal),
                deal.amount,
                stage_to_db(deal.stage),
                now + deal.close_offset_days * DAY_MS,
                OWNERS[index % OWNERS.len()],
                created_at,
            ],
        )?;
    }

    for index in 0..ACTIVITY_COUNT as usize {
        let (related_kind, related_id) = activity_relation(index);
        let occurred_at = now - rng.random_range(0..ACTIVITY_LOOKBACK_DAYS * DAY_MS);
        tx.execute(
            "INSERT INTO activities (
                id, kind, content, occurred_at, owner, related_kind, related_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                format!("act-{}", index + 1),
                activity_kind_to_db(ACTIVITY_KINDS[index % ACTIVITY_KINDS.len()]),
                ACTIVITY_CONTENTS[index % ACTIVITY_CONTENTS.len()],
                occurred_at,
                OWNERS[index % OWNERS.len()],
                related_kind_to_db(related_kind),
                related_id,
            ],
        )?;
    }

    bump_counter_to(&tx, "company", COMPANIES.len() as i64)?;
    bump_counter_to(&tx, "contact", CONTACTS.len() as i64)?;
    bump_counter_to(&tx, "deal", DEALS.len() as i64)?;
    bump_counter_to(&tx, "activity", i64::from(ACTIVITY_COUNT))?;

    tx.commit()?;

    info!(
        "event=seed module=seed status=ok companies={} contacts={} deals={} activities={}",
        COMPANIES.len(),
        CONTACTS.len(),
        DEALS.len(),
        ACTIVITY_COUNT
    );
    Ok(())
}

/// Cycles activities over the three relatable kinds and their seeded ids.
fn activity_relation(index: usize) -> (RelatedKind, String) {
    match index % 3 {
        0 => (RelatedKind::Company, format!("comp-{}", index % 10 + 1)),
        1 => (RelatedKind::Contact, format!("cont-{}", index % 20 + 1)),
        _ => (RelatedKind::Deal, format!("deal-{}", index % 10 + 1)),
    }
}
