//! Read-only aggregates for the dashboard.

use crate::models::dashboard::InventorySummary;
use crate::repositories::{ChairRepo, ComputerRepo, FolderRepo, MotorRepo};
use crate::DbPool;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Count every equipment table. Recomputed on each call.
    pub async fn summary(pool: &DbPool) -> Result<InventorySummary, sqlx::Error> {
        Ok(InventorySummary {
            computer_count: ComputerRepo::count(pool).await?,
            folder_count: FolderRepo::count(pool).await?,
            chair_count: ChairRepo::count(pool).await?,
            motor_count: MotorRepo::count(pool).await?,
        })
    }
}
