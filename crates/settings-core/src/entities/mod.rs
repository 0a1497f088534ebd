//! Domain entities - core business objects

mod guild_role;
mod server_settings;

pub use guild_role::{GuildRole, GuildRoleType};
pub use server_settings::{
    ServerSettings, SystemAnnouncement, SystemAnnouncementType, DEFAULT_LANGUAGE,
};
