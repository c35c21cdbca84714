use serde::{Deserialize, Serialize};

use tm_shared::types::HealthStatus;

/// Row counts reported by the health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatistics {
    pub total_users: u64,
    pub total_notes: u64,
    pub admins: u64,
    pub managers: u64,
    pub clients: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// "connected" or "disconnected"
    pub database: String,
    pub version: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<HealthStatistics>,
}
