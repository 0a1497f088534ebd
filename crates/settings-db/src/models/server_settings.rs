//! Server settings database model

use sqlx::FromRow;

/// Database model for server_settings table
#[derive(Debug, Clone, FromRow)]
pub struct ServerSettingsModel {
    pub guild_id: String,
    pub language: String,
    pub system_announcement_type: String,
    pub announcement_room_channel_id: Option<String>,
}
