//! # settings-core
//!
//! Domain layer containing the per-guild settings entities, platform identifiers,
//! and repository traits. This crate has zero dependencies on infrastructure
//! (database, bot framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    GuildRole, GuildRoleType, ServerSettings, SystemAnnouncement, SystemAnnouncementType,
    DEFAULT_LANGUAGE,
};
pub use error::DomainError;
pub use traits::{GuildRoleRepository, RepoResult, ServerSettingsRepository};
pub use value_objects::{ChannelId, Coords, GuildId, IdParseError, RoleId, MAX_ID_LEN};
