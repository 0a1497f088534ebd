//! Request DTOs for settings writes
//!
//! `SettingsRequest` mirrors a full settings record and carries the input
//! validation rules. It is also used to check records built in code before
//! they reach storage.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use settings_core::entities::{
    GuildRole, GuildRoleType, ServerSettings, SystemAnnouncement, SystemAnnouncementType,
    DEFAULT_LANGUAGE,
};
use settings_core::value_objects::{ChannelId, GuildId, RoleId};

/// Locale tags like `en`, `de-DE`: letters, digits and hyphens only
fn validate_language_tag(tag: &str) -> Result<(), ValidationError> {
    let well_formed = !tag.starts_with('-')
        && !tag.ends_with('-')
        && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::new("language_tag")
            .with_message("Language must be a locale tag such as en-US".into()))
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Full settings payload for one guild
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SettingsRequest {
    #[validate(
        length(min = 2, max = 5, message = "Language must be 2-5 characters"),
        custom(function = "validate_language_tag")
    )]
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub announcement_type: SystemAnnouncementType,

    #[validate(length(min = 1, max = 24, message = "Channel ID must be 1-24 characters"))]
    #[serde(default)]
    pub announcement_room_channel_id: Option<String>,

    #[validate(nested)]
    #[serde(default)]
    pub guild_roles: Vec<GuildRoleRequest>,
}

/// One role binding in a settings payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GuildRoleRequest {
    #[validate(length(min = 1, max = 24, message = "Role ID must be 1-24 characters"))]
    pub role_id: String,

    #[serde(default)]
    pub role_type: GuildRoleType,
}

impl SettingsRequest {
    /// Build the settings record this request describes for `guild_id`
    pub fn into_settings(self, guild_id: GuildId) -> ServerSettings {
        ServerSettings {
            guild_id,
            language: self.language,
            system_announcement: SystemAnnouncement {
                announcement_type: self.announcement_type,
                announcement_room_channel_id: self.announcement_room_channel_id.map(ChannelId::new),
            },
            guild_roles: self
                .guild_roles
                .into_iter()
                .map(|role| GuildRole::new(RoleId::new(role.role_id), role.role_type))
                .collect(),
        }
    }
}

impl From<&ServerSettings> for SettingsRequest {
    fn from(settings: &ServerSettings) -> Self {
        Self {
            language: settings.language.clone(),
            announcement_type: settings.system_announcement.announcement_type,
            announcement_room_channel_id: settings
                .system_announcement
                .announcement_room_channel_id
                .as_ref()
                .map(|id| id.as_str().to_string()),
            guild_roles: settings
                .guild_roles
                .iter()
                .map(|role| GuildRoleRequest {
                    role_id: role.role_id.as_str().to_string(),
                    role_type: role.role_type,
                })
                .collect(),
        }
    }
}
