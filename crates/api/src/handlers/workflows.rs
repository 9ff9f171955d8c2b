//! Handlers for the `/workflows` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brandhub_core::error::CoreError;
use brandhub_core::types::DbId;
use brandhub_db::models::workflow::{CreateWorkflow, UpdateWorkflow, Workflow};
use brandhub_db::repositories::WorkflowRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/workflows
///
/// List all workflows, most recently created first.
pub async fn list_workflows(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Workflow>>>> {
    let workflows = WorkflowRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: workflows }))
}

/// POST /api/v1/workflows
pub async fn create_workflow(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateWorkflow>,
) -> AppResult<(StatusCode, Json<DataResponse<Workflow>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let workflow = WorkflowRepo::create(&state.pool, &input).await?;
    tracing::info!(workflow_id = workflow.id, "Workflow created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: workflow })))
}

/// GET /api/v1/workflows/{id}
pub async fn get_workflow(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Workflow>>> {
    let workflow = WorkflowRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Workflow",
            id,
        })?;
    Ok(Json(DataResponse { data: workflow }))
}

/// PUT /api/v1/workflows/{id}
pub async fn update_workflow(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkflow>,
) -> AppResult<Json<DataResponse<Workflow>>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let workflow = WorkflowRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Workflow",
            id,
        })?;
    Ok(Json(DataResponse { data: workflow }))
}

/// DELETE /api/v1/workflows/{id}
pub async fn delete_workflow(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = WorkflowRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Workflow",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
