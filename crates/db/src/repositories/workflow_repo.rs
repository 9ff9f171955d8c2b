//! Repository for the `workflows` table.

use brandhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::workflow::{CreateWorkflow, UpdateWorkflow, Workflow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, duration_days, status, created_at, updated_at";

/// Provides CRUD operations for workflows.
pub struct WorkflowRepo;

impl WorkflowRepo {
    /// Insert a new workflow, returning the created row.
    ///
    /// Defaults: 30 days duration, `draft` status.
    pub async fn create(pool: &PgPool, input: &CreateWorkflow) -> Result<Workflow, sqlx::Error> {
        let query = format!(
            "INSERT INTO workflows (name, description, duration_days, status)
             VALUES ($1, $2, COALESCE($3, 30), COALESCE($4, 'draft'::workflow_status))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workflow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.duration_days)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a workflow by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Workflow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workflows WHERE id = $1");
        sqlx::query_as::<_, Workflow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all workflows ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Workflow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workflows ORDER BY created_at DESC");
        sqlx::query_as::<_, Workflow>(&query).fetch_all(pool).await
    }

    /// Update a workflow. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorkflow,
    ) -> Result<Option<Workflow>, sqlx::Error> {
        let query = format!(
            "UPDATE workflows SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                duration_days = COALESCE($4, duration_days),
                status = COALESCE($5, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workflow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.duration_days)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a workflow by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workflows WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
