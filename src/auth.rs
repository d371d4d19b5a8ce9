//! Admin authorization checks.

use std::collections::HashSet;

use crate::{config::Config, error::auth::AuthError};

/// Decides whether a Discord user may run admin operations.
///
/// Admin ids are injected at construction, normally from [`Config`], so game
/// logic never hardcodes identities.
#[derive(Debug, Clone, Default)]
pub struct Authorizer {
    admin_ids: HashSet<i64>,
}

impl Authorizer {
    /// Creates a new instance of [`Authorizer`] from an explicit id list.
    pub fn new(admin_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            admin_ids: admin_ids.into_iter().collect(),
        }
    }

    /// Creates a new instance of [`Authorizer`] from application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.admin_ids.iter().copied())
    }

    /// Returns whether the given Discord user id is an admin.
    pub fn is_admin(&self, discord_id: i64) -> bool {
        self.admin_ids.contains(&discord_id)
    }

    /// Returns [`AuthError::Unauthorized`] unless the id is an admin.
    pub fn ensure_admin(&self, discord_id: i64) -> Result<(), AuthError> {
        if self.is_admin(discord_id) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized(discord_id))
        }
    }
}
