//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in settings-core.

mod error;
mod guild_role;
mod server_settings;

pub use guild_role::PgGuildRoleRepository;
pub use server_settings::PgServerSettingsRepository;
