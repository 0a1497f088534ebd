//! Database models - SQLx-compatible structs for PostgreSQL tables

mod guild_role;
mod server_settings;

pub use guild_role::GuildRoleModel;
pub use server_settings::ServerSettingsModel;
