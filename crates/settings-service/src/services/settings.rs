//! Settings store
//!
//! Reads fall back to defaults for guilds that never stored anything; writes
//! are validated and then replace the whole record, roles included.

use std::collections::HashSet;

use settings_core::entities::ServerSettings;
use settings_core::value_objects::GuildId;
use settings_core::{DomainError, GuildRole};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::SettingsRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Per-guild settings with default-on-miss reads
#[derive(Debug, Clone)]
pub struct SettingsStore {
    ctx: ServiceContext,
}

impl SettingsStore {
    /// Create a new SettingsStore
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every stored settings record, each with its guild roles
    #[instrument(skip(self))]
    pub async fn load_all(&self) -> ServiceResult<Vec<ServerSettings>> {
        let all = self.ctx.settings_repo().find_all().await?;
        debug!(count = all.len(), "Loaded all server settings");
        Ok(all)
    }

    /// Settings for a guild, or the defaults when none are stored
    #[instrument(skip(self), fields(guild_id = %guild_id))]
    pub async fn load(&self, guild_id: &GuildId) -> ServiceResult<ServerSettings> {
        match self.ctx.settings_repo().find_by_guild(guild_id).await? {
            Some(settings) => Ok(settings),
            None => {
                debug!("No stored settings, using defaults");
                Ok(ServerSettings::new(guild_id.clone()))
            }
        }
    }

    /// Insert or fully replace a guild's settings, roles included
    ///
    /// Role order is kept, so a later `load` returns an equal record.
    ///
    /// # Errors
    /// Rejects malformed records before anything is written. Storage failures
    /// leave the previous record in place.
    #[instrument(skip(self, settings), fields(guild_id = %settings.guild_id))]
    pub async fn update(&self, settings: ServerSettings) -> ServiceResult<ServerSettings> {
        validate_settings(&settings)?;

        self.ctx.settings_repo().upsert(&settings).await?;

        info!(
            language = %settings.language,
            announcement_type = %settings.system_announcement.announcement_type,
            roles = settings.guild_roles.len(),
            "Server settings updated"
        );

        Ok(settings)
    }

    /// Load a guild's settings, apply `f`, and write the result back
    #[instrument(skip(self, f), fields(guild_id = %guild_id))]
    pub async fn modify<F>(&self, guild_id: &GuildId, f: F) -> ServiceResult<ServerSettings>
    where
        F: FnOnce(&mut ServerSettings) + Send,
    {
        let mut settings = self.load(guild_id).await?;
        f(&mut settings);
        // The closure may not move the record to another guild
        settings.guild_id = guild_id.clone();
        self.update(settings).await
    }

    /// Role bindings stored for a guild
    #[instrument(skip(self), fields(guild_id = %guild_id))]
    pub async fn guild_roles(&self, guild_id: &GuildId) -> ServiceResult<Vec<GuildRole>> {
        Ok(self.ctx.role_repo().get_guild_roles(guild_id).await?)
    }
}

/// Field bounds, id well-formedness and role uniqueness
fn validate_settings(settings: &ServerSettings) -> ServiceResult<()> {
    GuildId::parse(settings.guild_id.as_str()).map_err(DomainError::from)?;

    SettingsRequest::from(settings).validate()?;

    let mut seen = HashSet::with_capacity(settings.guild_roles.len());
    for role in &settings.guild_roles {
        if !seen.insert(role.role_id.as_str()) {
            return Err(DomainError::DuplicateRole {
                guild_id: settings.guild_id.clone(),
                role_id: role.role_id.to_string(),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use parking_lot::RwLock;
    use settings_core::entities::{GuildRoleType, SystemAnnouncement, SystemAnnouncementType};
    use settings_core::traits::{GuildRoleRepository, RepoResult, ServerSettingsRepository};
    use settings_core::value_objects::{ChannelId, RoleId};

    use crate::services::ServiceError;

    /// Settings rows and role rows kept apart, like the two tables
    #[derive(Default)]
    struct InMemoryRepo {
        settings: RwLock<HashMap<GuildId, ServerSettings>>,
        roles: RwLock<HashMap<GuildId, Vec<GuildRole>>>,
    }

    impl InMemoryRepo {
        fn joined(&self, row: &ServerSettings) -> ServerSettings {
            let roles = self
                .roles
                .read()
                .get(&row.guild_id)
                .cloned()
                .unwrap_or_default();
            row.clone().with_guild_roles(roles)
        }
    }

    #[async_trait]
    impl ServerSettingsRepository for InMemoryRepo {
        async fn find_all(&self) -> RepoResult<Vec<ServerSettings>> {
            let rows: Vec<ServerSettings> = self.settings.read().values().cloned().collect();
            Ok(rows.iter().map(|row| self.joined(row)).collect())
        }

        async fn find_by_guild(&self, guild_id: &GuildId) -> RepoResult<Option<ServerSettings>> {
            let row = self.settings.read().get(guild_id).cloned();
            Ok(row.map(|row| self.joined(&row)))
        }

        async fn upsert(&self, settings: &ServerSettings) -> RepoResult<()> {
            let row = settings.clone().with_guild_roles(Vec::new());
            self.settings.write().insert(settings.guild_id.clone(), row);
            self.update_guild_roles(&settings.guild_id, &settings.guild_roles)
                .await
        }
    }

    #[async_trait]
    impl GuildRoleRepository for InMemoryRepo {
        async fn get_guild_roles(&self, guild_id: &GuildId) -> RepoResult<Vec<GuildRole>> {
            Ok(self.roles.read().get(guild_id).cloned().unwrap_or_default())
        }

        async fn update_guild_roles(&self, guild_id: &GuildId, roles: &[GuildRole]) -> RepoResult<()> {
            self.roles.write().insert(guild_id.clone(), roles.to_vec());
            Ok(())
        }
    }

    /// Repository whose storage is always unreachable
    struct FailingRepo;

    #[async_trait]
    impl ServerSettingsRepository for FailingRepo {
        async fn find_all(&self) -> RepoResult<Vec<ServerSettings>> {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        }

        async fn find_by_guild(&self, _guild_id: &GuildId) -> RepoResult<Option<ServerSettings>> {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        }

        async fn upsert(&self, _settings: &ServerSettings) -> RepoResult<()> {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        }
    }

    fn store() -> (SettingsStore, Arc<InMemoryRepo>) {
        let repo = Arc::new(InMemoryRepo::default());
        let ctx = ServiceContext::new(repo.clone(), repo.clone());
        (SettingsStore::new(ctx), repo)
    }

    fn example_settings() -> ServerSettings {
        ServerSettings::new(GuildId::new("123"))
            .with_language("de-DE")
            .with_system_announcement(SystemAnnouncement::new(
                SystemAnnouncementType::RoleChange,
                ChannelId::new("999"),
            ))
    }

    #[tokio::test]
    async fn test_load_unknown_guild_returns_defaults() {
        let (store, _) = store();

        let settings = store.load(&GuildId::new("unknown-guild")).await.unwrap();

        assert_eq!(settings.guild_id.as_str(), "unknown-guild");
        assert_eq!(settings.language, "en-US");
        assert_eq!(
            settings.system_announcement.announcement_type,
            SystemAnnouncementType::None
        );
        assert!(settings.system_announcement.announcement_room_channel_id.is_none());
        assert!(settings.guild_roles.is_empty());
    }

    #[tokio::test]
    async fn test_load_does_not_persist_defaults() {
        let (store, _) = store();

        store.load(&GuildId::new("1")).await.unwrap();

        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_then_load() {
        let (store, _) = store();

        store.update(example_settings()).await.unwrap();
        let loaded = store.load(&GuildId::new("123")).await.unwrap();

        assert_eq!(loaded, example_settings());
    }

    #[tokio::test]
    async fn test_update_overwrites_every_field() {
        let (store, _) = store();
        let guild_id = GuildId::new("123");

        store
            .update(example_settings().with_guild_roles(vec![GuildRole::new(
                RoleId::new("1"),
                GuildRoleType::Admin,
            )]))
            .await
            .unwrap();
        store
            .update(ServerSettings::new(guild_id.clone()).with_language("fr-FR"))
            .await
            .unwrap();

        let loaded = store.load(&guild_id).await.unwrap();
        assert_eq!(loaded.language, "fr-FR");
        assert_eq!(loaded.system_announcement, SystemAnnouncement::default());
        assert!(loaded.guild_roles.is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_roles() {
        let (store, repo) = store();
        let guild_id = GuildId::new("123");
        let roles = vec![
            GuildRole::new(RoleId::new("a"), GuildRoleType::Admin),
            GuildRole::new(RoleId::new("b"), GuildRoleType::Moderator),
        ];

        store
            .update(example_settings().with_guild_roles(roles.clone()))
            .await
            .unwrap();

        assert_eq!(repo.get_guild_roles(&guild_id).await.unwrap(), roles);
        assert_eq!(store.guild_roles(&guild_id).await.unwrap(), roles);
    }

    #[tokio::test]
    async fn test_update_keeps_role_order() {
        let (store, _) = store();
        let settings = example_settings().with_guild_roles(vec![
            GuildRole::new(RoleId::new("b"), GuildRoleType::Admin),
            GuildRole::new(RoleId::new("a"), GuildRoleType::Member),
        ]);

        let written = store.update(settings.clone()).await.unwrap();
        let loaded = store.load(&GuildId::new("123")).await.unwrap();

        assert_eq!(written, settings);
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn test_modify_result_matches_next_load() {
        let (store, _) = store();
        let guild_id = GuildId::new("77");

        let written = store
            .modify(&guild_id, |settings| {
                settings.guild_roles = vec![
                    GuildRole::new(RoleId::new("9"), GuildRoleType::Moderator),
                    GuildRole::new(RoleId::new("1"), GuildRoleType::Admin),
                ];
            })
            .await
            .unwrap();

        assert_eq!(store.load(&guild_id).await.unwrap(), written);
    }

    #[tokio::test]
    async fn test_load_all_keeps_last_write_per_guild() {
        let (store, _) = store();
        let guild_a = GuildId::new("a");
        let second_a = ServerSettings::new(guild_a.clone())
            .with_language("fr-FR")
            .with_guild_roles(vec![GuildRole::new(RoleId::new("5"), GuildRoleType::Admin)]);

        store
            .update(ServerSettings::new(guild_a.clone()).with_language("de-DE"))
            .await
            .unwrap();
        store
            .update(ServerSettings::new(GuildId::new("b")))
            .await
            .unwrap();
        store.update(second_a.clone()).await.unwrap();

        let all = store.load_all().await.unwrap();

        assert_eq!(all.len(), 2);
        let stored_a: Vec<&ServerSettings> =
            all.iter().filter(|s| s.guild_id == guild_a).collect();
        assert_eq!(stored_a, vec![&second_a]);
    }

    #[tokio::test]
    async fn test_load_all_returns_every_guild() {
        let (store, _) = store();

        store.update(example_settings()).await.unwrap();
        store
            .update(ServerSettings::new(GuildId::new("456")))
            .await
            .unwrap();

        let mut all = store.load_all().await.unwrap();
        all.sort_by(|a, b| a.guild_id.cmp(&b.guild_id));

        assert_eq!(all.len(), 2);
        assert_eq!(all[0], example_settings());
        assert_eq!(all[1], ServerSettings::new(GuildId::new("456")));
    }

    #[tokio::test]
    async fn test_update_rejects_overlong_language() {
        let (store, _) = store();

        let err = store
            .update(ServerSettings::new(GuildId::new("1")).with_language("en-US-x"))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_overlong_guild_id() {
        let (store, _) = store();

        let err = store
            .update(ServerSettings::new(GuildId::new("9".repeat(25))))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.error_code(), "INVALID_ID");
    }

    #[tokio::test]
    async fn test_update_rejects_duplicate_roles() {
        let (store, _) = store();

        let err = store
            .update(ServerSettings::new(GuildId::new("1")).with_guild_roles(vec![
                GuildRole::new(RoleId::new("7"), GuildRoleType::Admin),
                GuildRole::new(RoleId::new("7"), GuildRoleType::Member),
            ]))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.error_code(), "DUPLICATE_ROLE");
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_modify_starts_from_defaults() {
        let (store, _) = store();
        let guild_id = GuildId::new("77");

        let written = store
            .modify(&guild_id, |settings| {
                settings.language = "pt-BR".to_string();
            })
            .await
            .unwrap();

        assert_eq!(written.language, "pt-BR");
        assert_eq!(store.load(&guild_id).await.unwrap(), written);
    }

    #[tokio::test]
    async fn test_modify_keeps_guild_id() {
        let (store, _) = store();
        let guild_id = GuildId::new("77");

        store
            .modify(&guild_id, |settings| {
                settings.guild_id = GuildId::new("other");
            })
            .await
            .unwrap();

        assert!(store.load(&GuildId::new("other")).await.unwrap().is_default());
        assert_eq!(store.load_all().await.unwrap()[0].guild_id, guild_id);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let failing = Arc::new(FailingRepo);
        let roles = Arc::new(InMemoryRepo::default());
        let store = SettingsStore::new(ServiceContext::new(failing, roles));

        let err = store.load(&GuildId::new("1")).await.unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(err.error_code(), "DATABASE_ERROR");

        let err = store.update(example_settings()).await.unwrap_err();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }
}
