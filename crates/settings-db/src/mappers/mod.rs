//! Entity to model mappers
//!
//! This module provides conversions between domain entities (settings-core) and database models.
//! - `From<Model> for Entity` / `*_from_db`: Convert database rows to domain objects
//! - `*Insert`/`*Upsert` structs: Prepare entity data for database writes

mod guild_role;
mod server_settings;

pub use guild_role::{role_type_from_db, GuildRoleInsert};
pub use server_settings::{announcement_type_from_db, settings_with_roles, ServerSettingsUpsert};
