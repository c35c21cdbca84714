//! Role hierarchy checks shared by the request gate and the handlers

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::PermissionSummary;

/// True when the user's role is at least `required` in the hierarchy
pub fn has_permission(user: &User, required: Role) -> bool {
    role_satisfies(user.role.as_str(), required)
}

/// Hierarchy check on a raw role name; unknown names satisfy nothing
pub fn role_satisfies(role: &str, required: Role) -> bool {
    Role::level_of(role) >= required.level()
}

/// Exact role match, for decisions the hierarchy must not widen
pub fn has_role(user: &User, role: Role) -> bool {
    user.role == role
}

/// Owner-or-privileged access with manager as the privileged role
pub fn can_access(user: &User, owner_id: i64) -> bool {
    can_access_with(user, owner_id, Role::Manager)
}

/// The user owns the resource or holds at least `privileged`
pub fn can_access_with(user: &User, owner_id: i64, privileged: Role) -> bool {
    user.id == owner_id || has_permission(user, privileged)
}

pub fn permission_summary(user: &User) -> PermissionSummary {
    PermissionSummary {
        is_admin: has_role(user, Role::Admin),
        is_manager: has_permission(user, Role::Manager),
        is_client: has_permission(user, Role::Client),
    }
}
