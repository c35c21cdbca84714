//! Permission evaluation over the admin > manager > client hierarchy.
//!
//! Everything here is pure: decisions depend only on the user passed in.

mod policy;


pub use policy::{
    can_access, can_access_with, has_permission, has_role, permission_summary, role_satisfies,
};
