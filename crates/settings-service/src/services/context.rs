//! Service context - dependency container for services
//!
//! Holds the repositories the settings store delegates to.

use std::sync::Arc;

use settings_core::traits::{GuildRoleRepository, ServerSettingsRepository};
use settings_db::{PgGuildRoleRepository, PgPool, PgServerSettingsRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    settings_repo: Arc<dyn ServerSettingsRepository>,
    role_repo: Arc<dyn GuildRoleRepository>,
}

impl ServiceContext {
    /// Create a new service context from repository implementations
    pub fn new(
        settings_repo: Arc<dyn ServerSettingsRepository>,
        role_repo: Arc<dyn GuildRoleRepository>,
    ) -> Self {
        Self {
            settings_repo,
            role_repo,
        }
    }

    /// Wire the PostgreSQL repositories over a shared pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgServerSettingsRepository::new(pool.clone())),
            Arc::new(PgGuildRoleRepository::new(pool)),
        )
    }

    // === Repositories ===

    /// Get the server settings repository
    pub fn settings_repo(&self) -> &dyn ServerSettingsRepository {
        self.settings_repo.as_ref()
    }

    /// Get the guild role repository
    pub fn role_repo(&self) -> &dyn GuildRoleRepository {
        self.role_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}
