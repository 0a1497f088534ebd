//! Guild role binding - maps a platform role to what it means to the bot

use serde::{Deserialize, Serialize};

use crate::value_objects::RoleId;

/// What a bound role grants inside the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuildRoleType {
    Admin,
    Moderator,
    #[default]
    Member,
}

impl GuildRoleType {
    /// Stored name of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Moderator => "MODERATOR",
            Self::Member => "MEMBER",
        }
    }

    /// Look up a variant by its stored name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ADMIN" => Some(Self::Admin),
            "MODERATOR" => Some(Self::Moderator),
            "MEMBER" => Some(Self::Member),
            _ => None,
        }
    }
}

impl std::fmt::Display for GuildRoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role bound to a bot-side role type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuildRole {
    pub role_id: RoleId,
    #[serde(default)]
    pub role_type: GuildRoleType,
}

impl GuildRole {
    pub fn new(role_id: RoleId, role_type: GuildRoleType) -> Self {
        Self { role_id, role_type }
    }
}
