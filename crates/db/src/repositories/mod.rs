//! One repository per table, all taking an explicit pool reference.

mod asset_repo;
mod brand_repo;
mod client_repo;
mod dashboard_repo;
mod session_repo;
mod team_member_repo;
mod user_repo;
mod workflow_repo;

pub use asset_repo::AssetRepo;
pub use brand_repo::BrandRepo;
pub use client_repo::ClientRepo;
pub use dashboard_repo::{DashboardRepo, DashboardSummary};
pub use session_repo::SessionRepo;
pub use team_member_repo::TeamMemberRepo;
pub use user_repo::UserRepo;
pub use workflow_repo::WorkflowRepo;
