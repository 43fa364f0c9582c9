//! Deal repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `deals` table plus company traversal.
//!
//! # Invariants
//! - `amount` and `stage` are stored as given; range/funnel checks are a
//!   caller concern.
//! - `company_id` is stored verbatim and may dangle after a company delete.

use crate::model::deal::{Deal, DealPatch, DealStage, NewDeal};
use crate::repo::{next_record_id, now_epoch_ms, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

pub(crate) const DEAL_SELECT_SQL: &str = "SELECT
    id,
    name,
    company_id,
    amount,
    stage,
    close_date,
    owner,
    created_at
FROM deals";

/// Repository interface for deal CRUD and company traversal.
pub trait DealRepository {
    fn create_deal(&self, new: &NewDeal) -> RepoResult<Deal>;
    fn get_deal(&self, id: &str) -> RepoResult<Option<Deal>>;
    fn list_deals(&self) -> RepoResult<Vec<Deal>>;
    /// All deals referencing `company_id`, in natural storage order.
    fn deals_of_company(&self, company_id: &str) -> RepoResult<Vec<Deal>>;
    fn update_deal(&self, id: &str, patch: &DealPatch) -> RepoResult<Option<Deal>>;
    fn delete_deal(&self, id: &str) -> RepoResult<bool>;
}

/// SQLite-backed deal repository.
pub struct SqliteDealRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDealRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DealRepository for SqliteDealRepository<'_> {
    fn create_deal(&self, new: &NewDeal) -> RepoResult<Deal> {
        let id = next_record_id(self.conn, "deal", "deal")?;
        let created_at = now_epoch_ms();

        self.conn.execute(
            "INSERT INTO deals (
                id,
                name,
                company_id,
                amount,
                stage,
                close_date,
                owner,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                id,
                new.name,
                new.company_id,
                new.amount,
                stage_to_db(new.stage),
                new.close_date,
                new.owner,
                created_at,
            ],
        )?;

        Ok(Deal {
            id,
            name: new.name.clone(),
            company_id: new.company_id.clone(),
            amount: new.amount,
            stage: new.stage,
            close_date: new.close_date,
            owner: new.owner.clone(),
            created_at,
        })
    }

    fn get_deal(&self, id: &str) -> RepoResult<Option<Deal>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEAL_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_deal_row(row)?));
        }
        Ok(None)
    }

    fn list_deals(&self) -> RepoResult<Vec<Deal>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "{DEAL_SELECT_SQL} ORDER BY created_at DESC, rowid ASC;"
            ))?;
        let mut rows = stmt.query([])?;
        let mut deals = Vec::new();
        while let Some(row) = rows.next()? {
            deals.push(parse_deal_row(row)?);
        }
        Ok(deals)
    }

    fn deals_of_company(&self, company_id: &str) -> RepoResult<Vec<Deal>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEAL_SELECT_SQL} WHERE company_id = ?1;"))?;
        let mut rows = stmt.query([company_id])?;
        let mut deals = Vec::new();
        while let Some(row) = rows.next()? {
            deals.push(parse_deal_row(row)?);
        }
        Ok(deals)
    }

    fn update_deal(&self, id: &str, patch: &DealPatch) -> RepoResult<Option<Deal>> {
        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(name) = patch.name.as_ref() {
            assignments.push("name = ?");
            bind_values.push(Value::Text(name.clone()));
        }
        if let Some(company_id) = patch.company_id.as_ref() {
            assignments.push("company_id = ?");
            bind_values.push(Value::Text(company_id.clone()));
        }
        if let Some(amount) = patch.amount {
            assignments.push("amount = ?");
            bind_values.push(Value::Real(amount));
        }
        if let Some(stage) = patch.stage {
            assignments.push("stage = ?");
            bind_values.push(Value::Text(stage_to_db(stage).to_string()));
        }
        if let Some(close_date) = patch.close_date {
            assignments.push("close_date = ?");
            bind_values.push(Value::Integer(close_date));
        }
        if let Some(owner) = patch.owner.as_ref() {
            assignments.push("owner = ?");
            bind_values.push(Value::Text(owner.clone()));
        }

        if assignments.is_empty() {
            return self.get_deal(id);
        }

        let sql = format!("UPDATE deals SET {} WHERE id = ?;", assignments.join(", "));
        bind_values.push(Value::Text(id.to_string()));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Ok(None);
        }

        self.get_deal(id)
    }

    fn delete_deal(&self, id: &str) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM deals WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

pub(crate) fn parse_deal_row(row: &Row<'_>) -> RepoResult<Deal> {
    let stage_text: String = row.get("stage")?;
    let stage = parse_stage(&stage_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid deal stage `{stage_text}` in deals.stage"))
    })?;

    Ok(Deal {
        id: row.get("id")?,
        name: row.get("name")?,
        company_id: row.get("company_id")?,
        amount: row.get("amount")?,
        stage,
        close_date: row.get("close_date")?,
        owner: row.get("owner")?,
        created_at: row.get("created_at")?,
    })
}

pub(crate) fn stage_to_db(stage: DealStage) -> &'static str {
    match stage {
        DealStage::New => "new",
        DealStage::Qualified => "qualified",
        DealStage::Proposal => "proposal",
        DealStage::Negotiation => "negotiation",
        DealStage::Won => "won",
        DealStage::Lost => "lost",
    }
}

pub(crate) fn parse_stage(value: &str) -> Option<DealStage> {
    match value {
        "new" => Some(DealStage::New),
        "qualified" => Some(DealStage::Qualified),
        "proposal" => Some(DealStage::Proposal),
        "negotiation" => Some(DealStage::Negotiation),
        "won" => Some(DealStage::Won),
        "lost" => Some(DealStage::Lost),
        _ => None,
    }
}
