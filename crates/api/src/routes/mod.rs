pub mod assets;
pub mod auth;
pub mod brands;
pub mod clients;
pub mod dashboard;
pub mod health;
pub mod team;
pub mod workflows;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                     register (public)
/// /auth/login                      login (public)
/// /auth/refresh                    refresh tokens (public)
/// /auth/logout                     revoke sessions (requires auth)
/// /auth/me                         current user (requires auth)
///
/// /brands                          list, create
/// /brands/{id}                     get, update, delete
/// /brands/{id}/export              download asset list as JSON
/// /brands/{brand_id}/assets        list, upload (multipart)
///
/// /assets/{id}                     delete (blob + metadata)
///
/// /clients                         list, create
/// /clients/{id}                    get, update, delete
///
/// /workflows                       list, create
/// /workflows/{id}                  get, update, delete
///
/// /team                            list, create
/// /team/{id}                       get, update, delete
///
/// /dashboard/summary               entity counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (signup, login, refresh, logout, me).
        .nest("/auth", auth::router())
        // Brands, with nested asset upload/listing and JSON export.
        .nest("/brands", brands::router())
        // Asset deletion addresses the asset directly, not via the brand.
        .nest("/assets", assets::router())
        // Client roster.
        .nest("/clients", clients::router())
        // Onboarding workflow templates.
        .nest("/workflows", workflows::router())
        // Team member directory.
        .nest("/team", team::router())
        // Dashboard entity counts.
        .nest("/dashboard", dashboard::router())
}
