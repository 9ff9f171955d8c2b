//! Handlers for the `/team` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brandhub_core::error::CoreError;
use brandhub_core::types::DbId;
use brandhub_db::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use brandhub_db::repositories::TeamMemberRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/team
///
/// List all team members, most recently created first.
pub async fn list_team_members(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<TeamMember>>>> {
    let members = TeamMemberRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: members }))
}

/// POST /api/v1/team
pub async fn create_team_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateTeamMember>,
) -> AppResult<(StatusCode, Json<DataResponse<TeamMember>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let member = TeamMemberRepo::create(&state.pool, &input).await?;
    tracing::info!(member_id = member.id, "Team member created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// GET /api/v1/team/{id}
pub async fn get_team_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TeamMember>>> {
    let member = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Team member",
            id,
        })?;
    Ok(Json(DataResponse { data: member }))
}

/// PUT /api/v1/team/{id}
pub async fn update_team_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeamMember>,
) -> AppResult<Json<DataResponse<TeamMember>>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let member = TeamMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Team member",
            id,
        })?;
    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/v1/team/{id}
pub async fn delete_team_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TeamMemberRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Team member",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
