//! Milestone repository
//!
//! Row mapping is explicit construction from the fixed column list in
//! `COLUMNS`; no dynamic row-to-struct reflection. The update and delete
//! flows are each two round trips without a transaction, so a concurrent
//! mutation between the trips can turn either into NotFound.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::{ListQuery, ListResponse, Milestone, MilestoneEdit, NewMilestone, SortColumn};

/// Columns selected for every milestone read, in field order.
const COLUMNS: &str = "id, sow_id, name, status";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    fn milestone_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "milestone",
            id: id.to_string(),
        }
    }
}

fn milestone_from_row(row: &PgRow) -> Milestone {
    Milestone {
        id: row.get("id"),
        sow_id: row.get("sow_id"),
        name: row.get("name"),
        status: row.get("status"),
    }
}

/// Build the list statement. `filtered` adds the sow_id predicate as $1;
/// `windowed` adds LIMIT/OFFSET as the next two placeholders.
fn list_sql(order: SortColumn, filtered: bool, windowed: bool) -> String {
    let mut sql = format!("SELECT {COLUMNS} FROM milestones");
    let mut next_param = 1;
    if filtered {
        sql.push_str(" WHERE sow_id = $1");
        next_param = 2;
    }
    sql.push_str(" ORDER BY ");
    sql.push_str(order.as_str());
    if windowed {
        sql.push_str(&format!(" LIMIT ${} OFFSET ${}", next_param, next_param + 1));
    }
    sql
}

/// Milestone repository
pub struct MilestoneRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MilestoneRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List milestones, optionally filtered to one statement of work.
    ///
    /// `total` is counted with the same filter but without the window, so
    /// a `skip` past the last row still reports the real count. When the
    /// caller asked for all rows, the echoed `limit` is that count.
    pub async fn list(
        &self,
        query: ListQuery,
        order: SortColumn,
    ) -> Result<ListResponse<Milestone>, DbError> {
        let sql = list_sql(order, query.sow_id.is_some(), query.limit.is_some());

        let mut select = sqlx::query(&sql);
        if let Some(sow_id) = query.sow_id {
            select = select.bind(sow_id);
        }
        if let Some(limit) = query.limit {
            select = select.bind(limit).bind(query.skip);
        }
        let rows = select.fetch_all(self.pool).await?;

        let total: i64 = match query.sow_id {
            Some(sow_id) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM milestones WHERE sow_id = $1")
                    .bind(sow_id)
                    .fetch_one(self.pool)
                    .await?
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM milestones")
                    .fetch_one(self.pool)
                    .await?
            }
        };

        Ok(ListResponse {
            data: rows.iter().map(milestone_from_row).collect(),
            total,
            skip: query.skip,
            limit: query.limit.unwrap_or(total),
        })
    }

    /// Get a single milestone by id.
    pub async fn get(&self, id: i64) -> Result<Milestone, DbError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM milestones WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::milestone_not_found(id))?;

        Ok(milestone_from_row(&row))
    }

    /// Insert a milestone and return the stored row.
    ///
    /// The row is re-read after the insert so generated columns come back
    /// exactly as the database holds them.
    pub async fn create(&self, new: NewMilestone) -> Result<Milestone, DbError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO milestones (sow_id, name, status) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(new.sow_id)
        .bind(&new.name)
        .bind(&new.status)
        .fetch_one(self.pool)
        .await?;

        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM milestones WHERE id = $1"))
            .bind(id)
            .fetch_one(self.pool)
            .await?;

        Ok(milestone_from_row(&row))
    }

    /// Update name and status for the given id, then return the stored row.
    ///
    /// The UPDATE itself is unconditional; a missing id surfaces as
    /// NotFound when the re-read comes back empty.
    pub async fn update(&self, id: i64, edit: MilestoneEdit) -> Result<Milestone, DbError> {
        sqlx::query("UPDATE milestones SET name = $1, status = $2 WHERE id = $3")
            .bind(&edit.name)
            .bind(&edit.status)
            .bind(id)
            .execute(self.pool)
            .await?;

        self.get(id).await
    }

    /// Delete the given id, returning the row as it stood before deletion.
    pub async fn delete(&self, id: i64) -> Result<Milestone, DbError> {
        let milestone = self.get(id).await?;

        sqlx::query("DELETE FROM milestones WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(milestone)
    }
}
