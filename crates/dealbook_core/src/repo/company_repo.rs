//! Company repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `companies` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `create_company` assigns id and `created_at`; callers never pick ids.
//! - `update_company` only touches fields present in the patch.
//! - `delete_company` never cascades into contacts, deals, or activities.

use crate::model::company::{Company, CompanyPatch, CompanyStatus, NewCompany};
use crate::repo::{next_record_id, now_epoch_ms, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

pub(crate) const COMPANY_SELECT_SQL: &str = "SELECT
    id,
    name,
    industry,
    website,
    size,
    status,
    owner,
    created_at
FROM companies";

/// Repository interface for company CRUD operations.
pub trait CompanyRepository {
    fn create_company(&self, new: &NewCompany) -> RepoResult<Company>;
    fn get_company(&self, id: &str) -> RepoResult<Option<Company>>;
    fn list_companies(&self) -> RepoResult<Vec<Company>>;
    fn update_company(&self, id: &str, patch: &CompanyPatch) -> RepoResult<Option<Company>>;
    fn delete_company(&self, id: &str) -> RepoResult<bool>;
}

/// SQLite-backed company repository.
pub struct SqliteCompanyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCompanyRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CompanyRepository for SqliteCompanyRepository<'_> {
    fn create_company(&self, new: &NewCompany) -> RepoResult<Company> {
        let id = next_record_id(self.conn, "company", "comp")?;
        let created_at = now_epoch_ms();

        self.conn.execute(
            "INSERT INTO companies (
                id,
                name,
                industry,
                website,
                size,
                status,
                owner,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                id,
                new.name,
                new.industry,
                new.website,
                new.size,
                status_to_db(new.status),
                new.owner,
                created_at,
            ],
        )?;

        Ok(Company {
            id,
            name: new.name.clone(),
            industry: new.industry.clone(),
            website: new.website.clone(),
            size: new.size.clone(),
            status: new.status,
            owner: new.owner.clone(),
            created_at,
        })
    }

    fn get_company(&self, id: &str) -> RepoResult<Option<Company>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COMPANY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_company_row(row)?));
        }
        Ok(None)
    }

    fn list_companies(&self) -> RepoResult<Vec<Company>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "{COMPANY_SELECT_SQL} ORDER BY created_at DESC, rowid ASC;"
            ))?;
        let mut rows = stmt.query([])?;
        let mut companies = Vec::new();
        while let Some(row) = rows.next()? {
            companies.push(parse_company_row(row)?);
        }
        Ok(companies)
    }

    fn update_company(&self, id: &str, patch: &CompanyPatch) -> RepoResult<Option<Company>> {
        if patch.is_empty() {
            return self.get_company(id);
        }

        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(name) = patch.name.as_ref() {
            assignments.push("name = ?");
            bind_values.push(Value::Text(name.clone()));
        }
        if let Some(industry) = patch.industry.as_ref() {
            assignments.push("industry = ?");
            bind_values.push(Value::Text(industry.clone()));
        }
        if let Some(website) = patch.website.as_ref() {
            assignments.push("website = ?");
            bind_values.push(Value::Text(website.clone()));
        }
        if let Some(size) = patch.size.as_ref() {
            assignments.push("size = ?");
            bind_values.push(Value::Text(size.clone()));
        }
        if let Some(status) = patch.status {
            assignments.push("status = ?");
            bind_values.push(Value::Text(status_to_db(status).to_string()));
        }
        if let Some(owner) = patch.owner.as_ref() {
            assignments.push("owner = ?");
            bind_values.push(Value::Text(owner.clone()));
        }

        let sql = format!(
            "UPDATE companies SET {} WHERE id = ?;",
            assignments.join(", ")
        );
        bind_values.push(Value::Text(id.to_string()));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Ok(None);
        }

        self.get_company(id)
    }

    fn delete_company(&self, id: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM companies WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

pub(crate) fn parse_company_row(row: &Row<'_>) -> RepoResult<Company> {
    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid company status `{status_text}` in companies.status"
        ))
    })?;

    Ok(Company {
        id: row.get("id")?,
        name: row.get("name")?,
        industry: row.get("industry")?,
        website: row.get("website")?,
        size: row.get("size")?,
        status,
        owner: row.get("owner")?,
        created_at: row.get("created_at")?,
    })
}

pub(crate) fn status_to_db(status: CompanyStatus) -> &'static str {
    match status {
        CompanyStatus::Lead => "lead",
        CompanyStatus::Prospect => "prospect",
        CompanyStatus::Customer => "customer",
    }
}

pub(crate) fn parse_status(value: &str) -> Option<CompanyStatus> {
    match value {
        "lead" => Some(CompanyStatus::Lead),
        "prospect" => Some(CompanyStatus::Prospect),
        "customer" => Some(CompanyStatus::Customer),
        _ => None,
    }
}
