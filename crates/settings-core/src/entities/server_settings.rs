//! Server settings entity - per-guild bot configuration

use serde::{Deserialize, Serialize};

use super::guild_role::GuildRole;
use crate::value_objects::{ChannelId, GuildId};

/// Language used for guilds that never configured one
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Kind of system announcements a guild receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemAnnouncementType {
    #[default]
    None,
    RoleChange,
    BotUpdate,
}

impl SystemAnnouncementType {
    /// Stored name of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::RoleChange => "ROLE_CHANGE",
            Self::BotUpdate => "BOT_UPDATE",
        }
    }

    /// Look up a variant by its stored name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NONE" => Some(Self::None),
            "ROLE_CHANGE" => Some(Self::RoleChange),
            "BOT_UPDATE" => Some(Self::BotUpdate),
            _ => None,
        }
    }
}

impl std::fmt::Display for SystemAnnouncementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and what the bot announces in a guild
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SystemAnnouncement {
    #[serde(default)]
    pub announcement_type: SystemAnnouncementType,
    #[serde(default)]
    pub announcement_room_channel_id: Option<ChannelId>,
}

impl SystemAnnouncement {
    /// Announcements of `announcement_type` posted into `channel_id`
    pub fn new(announcement_type: SystemAnnouncementType, channel_id: ChannelId) -> Self {
        Self {
            announcement_type,
            announcement_room_channel_id: Some(channel_id),
        }
    }
}

/// Settings record for one guild
///
/// A guild with nothing stored is equivalent to `ServerSettings::new(guild_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub guild_id: GuildId,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub system_announcement: SystemAnnouncement,
    #[serde(default)]
    pub guild_roles: Vec<GuildRole>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl ServerSettings {
    /// Default settings for a guild
    pub fn new(guild_id: GuildId) -> Self {
        Self {
            guild_id,
            language: default_language(),
            system_announcement: SystemAnnouncement::default(),
            guild_roles: Vec::new(),
        }
    }

    /// Whether every field still holds its default value
    pub fn is_default(&self) -> bool {
        self.language == DEFAULT_LANGUAGE
            && self.system_announcement == SystemAnnouncement::default()
            && self.guild_roles.is_empty()
    }

    /// Builder-style language override
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder-style announcement override
    pub fn with_system_announcement(mut self, announcement: SystemAnnouncement) -> Self {
        self.system_announcement = announcement;
        self
    }

    /// Builder-style role list override
    pub fn with_guild_roles(mut self, roles: Vec<GuildRole>) -> Self {
        self.guild_roles = roles;
        self
    }
}
