//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over `contacts` plus their order-preserving tag rows.
//! - Own tag replacement logic with atomic semantics.
//!
//! # Invariants
//! - Tag rows are written and replaced inside one transaction.
//! - `company_id` is stored verbatim; it is never checked against the
//!   `companies` table.
//! - Deleting a contact removes its tag rows but nothing else.

use crate::model::contact::{Contact, ContactPatch, NewContact};
use crate::repo::{next_record_id, now_epoch_ms, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, Transaction, TransactionBehavior};

pub(crate) const CONTACT_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    email,
    phone,
    title,
    company_id,
    owner,
    created_at
FROM contacts";

/// Repository interface for contact CRUD and company traversal.
pub trait ContactRepository {
    fn create_contact(&self, new: &NewContact) -> RepoResult<Contact>;
    fn get_contact(&self, id: &str) -> RepoResult<Option<Contact>>;
    fn list_contacts(&self) -> RepoResult<Vec<Contact>>;
    /// All contacts referencing `company_id`, in natural storage order.
    /// A dangling or unknown company id yields an empty list.
    fn contacts_of_company(&self, company_id: &str) -> RepoResult<Vec<Contact>>;
    fn update_contact(&self, id: &str, patch: &ContactPatch) -> RepoResult<Option<Contact>>;
    fn delete_contact(&self, id: &str) -> RepoResult<bool>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Starts an immediate transaction on the shared borrow. The store
    /// is single-threaded, so the connection is never used concurrently.
    fn begin_tx(&self) -> RepoResult<Transaction<'conn>> {
        Ok(Transaction::new_unchecked(
            self.conn,
            TransactionBehavior::Immediate,
        )?)
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn create_contact(&self, new: &NewContact) -> RepoResult<Contact> {
        let id = next_record_id(self.conn, "contact", "cont")?;
        let created_at = now_epoch_ms();

        let tx = self.begin_tx()?;
        tx.execute(
            "INSERT INTO contacts (
                id,
                first_name,
                last_name,
                email,
                phone,
                title,
                company_id,
                owner,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                id,
                new.first_name,
                new.last_name,
                new.email,
                new.phone,
                new.title,
                new.company_id,
                new.owner,
                created_at,
            ],
        )?;
        insert_tags_in_tx(&tx, &id, &new.tags)?;
        tx.commit()?;

        Ok(Contact {
            id,
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            title: new.title.clone(),
            company_id: new.company_id.clone(),
            owner: new.owner.clone(),
            tags: new.tags.clone(),
            created_at,
        })
    }

    fn get_contact(&self, id: &str) -> RepoResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            let contact = parse_contact_row(self.conn, row)?;
            return Ok(Some(contact));
        }
        Ok(None)
    }

    fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        collect_contacts(
            self.conn,
            &format!("{CONTACT_SELECT_SQL} ORDER BY created_at DESC, rowid ASC;"),
            &[],
        )
    }

    fn contacts_of_company(&self, company_id: &str) -> RepoResult<Vec<Contact>> {
        collect_contacts(
            self.conn,
            &format!("{CONTACT_SELECT_SQL} WHERE company_id = ?1;"),
            &[company_id],
        )
    }

    fn update_contact(&self, id: &str, patch: &ContactPatch) -> RepoResult<Option<Contact>> {
        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(first_name) = patch.first_name.as_ref() {
            assignments.push("first_name = ?");
            bind_values.push(Value::Text(first_name.clone()));
        }
        if let Some(last_name) = patch.last_name.as_ref() {
            assignments.push("last_name = ?");
            bind_values.push(Value::Text(last_name.clone()));
        }
        if let Some(email) = patch.email.as_ref() {
            assignments.push("email = ?");
            bind_values.push(Value::Text(email.clone()));
        }
        if let Some(phone) = patch.phone.as_ref() {
            assignments.push("phone = ?");
            bind_values.push(Value::Text(phone.clone()));
        }
        if let Some(title) = patch.title.as_ref() {
            assignments.push("title = ?");
            bind_values.push(Value::Text(title.clone()));
        }
        if let Some(company_id) = patch.company_id.as_ref() {
            assignments.push("company_id = ?");
            bind_values.push(Value::Text(company_id.clone()));
        }
        if let Some(owner) = patch.owner.as_ref() {
            assignments.push("owner = ?");
            bind_values.push(Value::Text(owner.clone()));
        }

        let tx = self.begin_tx()?;
        if !contact_exists_in_tx(&tx, id)? {
            return Ok(None);
        }

        if !assignments.is_empty() {
            let sql = format!(
                "UPDATE contacts SET {} WHERE id = ?;",
                assignments.join(", ")
            );
            bind_values.push(Value::Text(id.to_string()));
            tx.execute(&sql, params_from_iter(bind_values))?;
        }

        if let Some(tags) = patch.tags.as_ref() {
            tx.execute("DELETE FROM contact_tags WHERE contact_id = ?1;", [id])?;
            insert_tags_in_tx(&tx, id, tags)?;
        }
        tx.commit()?;

        self.get_contact(id)
    }

    fn delete_contact(&self, id: &str) -> RepoResult<bool> {
        let tx = self.begin_tx()?;
        let changed = tx.execute("DELETE FROM contacts WHERE id = ?1;", [id])?;
        tx.execute("DELETE FROM contact_tags WHERE contact_id = ?1;", [id])?;
        tx.commit()?;
        Ok(changed > 0)
    }
}

pub(crate) fn collect_contacts(
    conn: &Connection,
    sql: &str,
    binds: &[&str],
) -> RepoResult<Vec<Contact>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params_from_iter(binds))?;
    let mut contacts = Vec::new();
    while let Some(row) = rows.next()? {
        contacts.push(parse_contact_row(conn, row)?);
    }
    Ok(contacts)
}

fn parse_contact_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Contact> {
    let id: String = row.get("id")?;
    let tags = load_tags_for_contact(conn, &id)?;
    Ok(Contact {
        id,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        title: row.get("title")?,
        company_id: row.get("company_id")?,
        owner: row.get("owner")?,
        tags,
        created_at: row.get("created_at")?,
    })
}

fn load_tags_for_contact(conn: &Connection, contact_id: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT tag
         FROM contact_tags
         WHERE contact_id = ?1
         ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([contact_id])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        tags.push(row.get::<_, String>(0)?);
    }
    Ok(tags)
}

fn insert_tags_in_tx(tx: &Transaction<'_>, contact_id: &str, tags: &[String]) -> RepoResult<()> {
    for (position, tag) in tags.iter().enumerate() {
        tx.execute(
            "INSERT INTO contact_tags (contact_id, position, tag) VALUES (?1, ?2, ?3);",
            params![contact_id, position as i64, tag],
        )?;
    }
    Ok(())
}

fn contact_exists_in_tx(tx: &Transaction<'_>, contact_id: &str) -> RepoResult<bool> {
    let exists: i64 = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM contacts WHERE id = ?1);",
        [contact_id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
