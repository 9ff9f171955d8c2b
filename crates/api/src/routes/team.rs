//! Route definitions for the `/team` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes mounted at `/team`.
///
/// ```text
/// GET    /      -> list_team_members
/// POST   /      -> create_team_member
/// GET    /{id}  -> get_team_member
/// PUT    /{id}  -> update_team_member
/// DELETE /{id}  -> delete_team_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(team::list_team_members).post(team::create_team_member),
        )
        .route(
            "/{id}",
            get(team::get_team_member)
                .put(team::update_team_member)
                .delete(team::delete_team_member),
        )
}
