//! Activity repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `activities` table and the polymorphic
//!   relation filter.
//!
//! # Invariants
//! - The relation (`related_kind`, `related_id`) is written once at
//!   creation and never mutated; the patch shape has no relation fields.
//! - Listings order by `occurred_at` descending; activities have no
//!   separate creation timestamp.

use crate::model::activity::{
    Activity, ActivityKind, ActivityPatch, NewActivity, RelatedKind, RelatedRef,
};
use crate::repo::{next_record_id, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const ACTIVITY_SELECT_SQL: &str = "SELECT
    id,
    kind,
    content,
    occurred_at,
    owner,
    related_kind,
    related_id
FROM activities";

/// Repository interface for the activity log.
pub trait ActivityRepository {
    fn create_activity(&self, new: &NewActivity) -> RepoResult<Activity>;
    fn get_activity(&self, id: &str) -> RepoResult<Option<Activity>>;
    fn list_activities(&self) -> RepoResult<Vec<Activity>>;
    /// All activities attached to the given record, newest first.
    /// A dangling or unknown id yields an empty list.
    fn activities_for(&self, kind: RelatedKind, id: &str) -> RepoResult<Vec<Activity>>;
    fn update_activity(&self, id: &str, patch: &ActivityPatch) -> RepoResult<Option<Activity>>;
    fn delete_activity(&self, id: &str) -> RepoResult<bool>;
}

/// SQLite-backed activity repository.
pub struct SqliteActivityRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteActivityRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ActivityRepository for SqliteActivityRepository<'_> {
    fn create_activity(&self, new: &NewActivity) -> RepoResult<Activity> {
        let id = next_record_id(self.conn, "activity", "act")?;

        self.conn.execute(
            "INSERT INTO activities (
                id,
                kind,
                content,
                occurred_at,
                owner,
                related_kind,
                related_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                id,
                activity_kind_to_db(new.kind),
                new.content,
                new.occurred_at,
                new.owner,
                related_kind_to_db(new.related.kind),
                new.related.id,
            ],
        )?;

        Ok(Activity {
            id,
            kind: new.kind,
            content: new.content.clone(),
            occurred_at: new.occurred_at,
            owner: new.owner.clone(),
            related: new.related.clone(),
        })
    }

    fn get_activity(&self, id: &str) -> RepoResult<Option<Activity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACTIVITY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_activity_row(row)?));
        }
        Ok(None)
    }

    fn list_activities(&self) -> RepoResult<Vec<Activity>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ACTIVITY_SELECT_SQL} ORDER BY occurred_at DESC, rowid ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut activities = Vec::new();
        while let Some(row) = rows.next()? {
            activities.push(parse_activity_row(row)?);
        }
        Ok(activities)
    }

    fn activities_for(&self, kind: RelatedKind, id: &str) -> RepoResult<Vec<Activity>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ACTIVITY_SELECT_SQL}
             WHERE related_kind = ?1
               AND related_id = ?2
             ORDER BY occurred_at DESC, rowid ASC;"
        ))?;
        let mut rows = stmt.query(params![related_kind_to_db(kind), id])?;
        let mut activities = Vec::new();
        while let Some(row) = rows.next()? {
            activities.push(parse_activity_row(row)?);
        }
        Ok(activities)
    }

    fn update_activity(&self, id: &str, patch: &ActivityPatch) -> RepoResult<Option<Activity>> {
        let mut assignments: Vec<&str> = Vec::new();
        let mut binds: Vec<Value> = Vec::new();

        if let Some(kind) = patch.kind {
            assignments.push("kind = ?");
            binds.push(Value::Text(activity_kind_to_db(kind).to_string()));
        }
        if let Some(content) = &patch.content {
            assignments.push("content = ?");
            binds.push(Value::Text(content.clone()));
        }
        if let Some(occurred_at) = patch.occurred_at {
            assignments.push("occurred_at = ?");
            binds.push(Value::Integer(occurred_at));
        }
        if let Some(owner) = &patch.owner {
            assignments.push("owner = ?");
            binds.push(Value::Text(owner.clone()));
        }

        if assignments.is_empty() {
            return self.get_activity(id);
        }

        let sql = format!(
            "UPDATE activities SET {} WHERE id = ?;",
            assignments.join(", ")
        );
        binds.push(Value::Text(id.to_string()));
        let changed = self.conn.execute(&sql, params_from_iter(binds))?;
        if changed == 0 {
            return Ok(None);
        }
        self.get_activity(id)
    }

    fn delete_activity(&self, id: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM activities WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_activity_row(row: &Row<'_>) -> RepoResult<Activity> {
    let kind_text: String = row.get("kind")?;
    let kind = parse_activity_kind(&kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid activity kind `{kind_text}` in activities.kind"
        ))
    })?;

    let related_kind_text: String = row.get("related_kind")?;
    let related_kind = parse_related_kind(&related_kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid related kind `{related_kind_text}` in activities.related_kind"
        ))
    })?;

    Ok(Activity {
        id: row.get("id")?,
        kind,
        content: row.get("content")?,
        occurred_at: row.get("occurred_at")?,
        owner: row.get("owner")?,
        related: RelatedRef {
            kind: related_kind,
            id: row.get("related_id")?,
        },
    })
}

pub(crate) fn activity_kind_to_db(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Note => "note",
        ActivityKind::Call => "call",
        ActivityKind::Email => "email",
        ActivityKind::Meeting => "meeting",
    }
}

pub(crate) fn parse_activity_kind(value: &str) -> Option<ActivityKind> {
    match value {
        "note" => Some(ActivityKind::Note),
        "call" => Some(ActivityKind::Call),
        "email" => Some(ActivityKind::Email),
        "meeting" => Some(ActivityKind::Meeting),
        _ => None,
    }
}

pub(crate) fn related_kind_to_db(kind: RelatedKind) -> &'static str {
    match kind {
        RelatedKind::Company => "company",
        RelatedKind::Contact => "contact",
        RelatedKind::Deal => "deal",
    }
}

pub(crate) fn parse_related_kind(value: &str) -> Option<RelatedKind> {
    match value {
        "company" => Some(RelatedKind::Company),
        "contact" => Some(RelatedKind::Contact),
        "deal" => Some(RelatedKind::Deal),
        _ => None,
    }
}
