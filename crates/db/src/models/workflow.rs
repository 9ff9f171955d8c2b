//! Workflow entity model and DTOs.

use brandhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Workflow lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "workflow_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Draft,
    Active,
    Archived,
}

/// A workflow row from the `workflows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Workflow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub duration_days: i32,
    pub status: WorkflowStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new workflow.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkflow {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to 30 if omitted.
    #[validate(range(min = 1, message = "duration_days must be positive"))]
    pub duration_days: Option<i32>,
    /// Defaults to `draft` if omitted.
    pub status: Option<WorkflowStatus>,
}

/// DTO for updating a workflow. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateWorkflow {
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "duration_days must be positive"))]
    pub duration_days: Option<i32>,
    pub status: Option<WorkflowStatus>,
}
