//! Entity counts backing the dashboard summary endpoint.

use serde::Serialize;
use sqlx::PgPool;

/// Counts of the four managed entity collections.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardSummary {
    pub clients: i64,
    pub workflows: i64,
    pub brands: i64,
    pub team_members: i64,
}

/// Read-only aggregate queries for the dashboard.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Fetch all entity counts in a single round trip.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        let (clients, workflows, brands, team_members) =
            sqlx::query_as::<_, (i64, i64, i64, i64)>(
                "SELECT
                    (SELECT COUNT(*) FROM clients),
                    (SELECT COUNT(*) FROM workflows),
                    (SELECT COUNT(*) FROM brands),
                    (SELECT COUNT(*) FROM team_members)",
            )
            .fetch_one(pool)
            .await?;

        Ok(DashboardSummary {
            clients,
            workflows,
            brands,
            team_members,
        })
    }
}
