//! Repository traits (ports)

mod repositories;

pub use repositories::{GuildRoleRepository, RepoResult, ServerSettingsRepository};
