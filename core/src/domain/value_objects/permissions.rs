//! Permission summary reported to clients validating their token.

use serde::{Deserialize, Serialize};

/// Which tiers of the role hierarchy a user satisfies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSummary {
    /// Exactly admin
    pub is_admin: bool,
    /// Manager or higher
    pub is_manager: bool,
    /// Client or higher
    pub is_client: bool,
}
