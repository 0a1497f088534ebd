//! Guild role database model

use sqlx::FromRow;

/// Database model for guild_roles table
#[derive(Debug, Clone, FromRow)]
pub struct GuildRoleModel {
    pub guild_id: String,
    pub role_id: String,
    pub role_type: String,
    pub position: i32,
}
