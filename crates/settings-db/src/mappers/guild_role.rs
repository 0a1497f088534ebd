//! GuildRole entity <-> model mapper

use settings_core::entities::{GuildRole, GuildRoleType};
use settings_core::value_objects::RoleId;
use tracing::warn;

use crate::models::GuildRoleModel;

/// Resolve a stored role type name, falling back to the default for unknown names
pub fn role_type_from_db(name: &str) -> GuildRoleType {
    GuildRoleType::from_name(name).unwrap_or_else(|| {
        warn!(stored = name, "Unknown guild role type, using default");
        GuildRoleType::default()
    })
}

/// Convert GuildRoleModel to GuildRole entity
impl From<GuildRoleModel> for GuildRole {
    fn from(model: GuildRoleModel) -> Self {
        GuildRole {
            role_id: RoleId::new(model.role_id),
            role_type: role_type_from_db(&model.role_type),
        }
    }
}

/// Borrowed column values for inserting a role binding
pub struct GuildRoleInsert<'a> {
    pub role_id: &'a str,
    pub role_type: &'static str,
    pub position: i32,
}

impl<'a> GuildRoleInsert<'a> {
    /// Values for the role at `index` in the guild's role list
    pub fn new(role: &'a GuildRole, index: usize) -> Self {
        Self {
            role_id: role.role_id.as_str(),
            role_type: role.role_type.as_str(),
            position: i32::try_from(index).unwrap_or(i32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_to_entity() {
        let role = GuildRole::from(GuildRoleModel {
            guild_id: "1".to_string(),
            role_id: "2".to_string(),
            role_type: "MODERATOR".to_string(),
            position: 0,
        });
        assert_eq!(role, GuildRole::new(RoleId::new("2"), GuildRoleType::Moderator));
    }

    #[test]
    fn test_unknown_role_type_falls_back() {
        assert_eq!(role_type_from_db("OWNER"), GuildRoleType::Member);
    }

    #[test]
    fn test_insert_values() {
        let role = GuildRole::new(RoleId::new("42"), GuildRoleType::Admin);
        let insert = GuildRoleInsert::new(&role, 3);
        assert_eq!(insert.role_id, "42");
        assert_eq!(insert.role_type, "ADMIN");
        assert_eq!(insert.position, 3);
    }
}
