//! Value objects - immutable types that represent domain concepts

mod coords;
mod ids;

pub use coords::Coords;
pub use ids::{ChannelId, GuildId, IdParseError, RoleId, MAX_ID_LEN};
