//! ServerSettings entity <-> model mapper

use settings_core::entities::{GuildRole, ServerSettings, SystemAnnouncement, SystemAnnouncementType};
use settings_core::value_objects::{ChannelId, GuildId};
use tracing::warn;

use crate::models::ServerSettingsModel;

/// Resolve a stored announcement type name, falling back to the default for
/// names this build does not know
pub fn announcement_type_from_db(name: &str) -> SystemAnnouncementType {
    SystemAnnouncementType::from_name(name).unwrap_or_else(|| {
        warn!(stored = name, "Unknown system announcement type, using default");
        SystemAnnouncementType::default()
    })
}

/// Convert ServerSettingsModel with its role bindings to a ServerSettings entity
pub fn settings_with_roles(model: ServerSettingsModel, guild_roles: Vec<GuildRole>) -> ServerSettings {
    ServerSettings {
        guild_id: GuildId::new(model.guild_id),
        language: model.language,
        system_announcement: SystemAnnouncement {
            announcement_type: announcement_type_from_db(&model.system_announcement_type),
            announcement_room_channel_id: model.announcement_room_channel_id.map(ChannelId::new),
        },
        guild_roles,
    }
}

/// Borrowed column values for the settings upsert
pub struct ServerSettingsUpsert<'a> {
    pub guild_id: &'a str,
    pub language: &'a str,
    pub system_announcement_type: &'static str,
    pub announcement_room_channel_id: Option<&'a str>,
}

impl<'a> ServerSettingsUpsert<'a> {
    pub fn new(settings: &'a ServerSettings) -> Self {
        Self {
            guild_id: settings.guild_id.as_str(),
            language: &settings.language,
            system_announcement_type: settings.system_announcement.announcement_type.as_str(),
            announcement_room_channel_id: settings
                .system_announcement
                .announcement_room_channel_id
                .as_ref()
                .map(ChannelId::as_str),
        }
    }
}
