//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{GuildRole, ServerSettings};
use crate::error::DomainError;
use crate::value_objects::GuildId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Server Settings Repository
// ============================================================================

/// Durable mapping from guild to its settings record
///
/// Records returned by this trait always carry their guild roles. Absence is
/// reported as `None`; turning that into defaults is the caller's concern.
#[async_trait]
pub trait ServerSettingsRepository: Send + Sync {
    /// List every stored settings record (no ordering guarantee)
    async fn find_all(&self) -> RepoResult<Vec<ServerSettings>>;

    /// Find the settings stored for a guild
    async fn find_by_guild(&self, guild_id: &GuildId) -> RepoResult<Option<ServerSettings>>;

    /// Insert or fully replace the settings for `settings.guild_id`, roles included
    ///
    /// The settings row and the role set are written as one unit.
    async fn upsert(&self, settings: &ServerSettings) -> RepoResult<()>;
}

// ============================================================================
// Guild Role Repository
// ============================================================================

/// Role bindings of a guild, keyed by the same guild ID as its settings
#[async_trait]
pub trait GuildRoleRepository: Send + Sync {
    /// Get all role bindings for a guild, in the order they were written
    async fn get_guild_roles(&self, guild_id: &GuildId) -> RepoResult<Vec<GuildRole>>;

    /// Replace the full set of role bindings for a guild
    async fn update_guild_roles(&self, guild_id: &GuildId, roles: &[GuildRole]) -> RepoResult<()>;
}
