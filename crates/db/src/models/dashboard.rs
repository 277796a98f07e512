//! Dashboard aggregate model.

use serde::Serialize;

/// Per-entity record counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub computer_count: i64,
    pub folder_count: i64,
    pub chair_count: i64,
    pub motor_count: i64,
}
