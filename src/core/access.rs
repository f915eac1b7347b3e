//! Wiring between the configured operator and the capability predicate.
//!
//! The policy itself is the pure [`Role::allows`] predicate; this module only
//! resolves the operator name against the `users` table and turns a denied
//! check into an [`AppError::Forbidden`].

use crate::db::pool::DbPool;
use crate::db::users::role_of;
use crate::errors::{AppError, AppResult};
use crate::models::role::{Capability, Role};

/// Resolve the operator's role and require the given capability.
pub fn require(pool: &mut DbPool, operator: &str, cap: Capability) -> AppResult<Role> {
    let role = role_of(pool, operator)?;

    if !role.allows(cap) {
        return Err(AppError::Forbidden(
            operator.to_string(),
            cap.describe().to_string(),
        ));
    }

    Ok(role)
}
