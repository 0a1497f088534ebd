//! PostgreSQL implementation of ServerSettingsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use settings_core::entities::ServerSettings;
use settings_core::traits::{RepoResult, ServerSettingsRepository};
use settings_core::value_objects::GuildId;

use crate::mappers::{settings_with_roles, ServerSettingsUpsert};
use crate::models::ServerSettingsModel;
use crate::pool::begin_snapshot;

use super::error::map_db_error;
use super::guild_role::{fetch_all_guild_roles, fetch_guild_roles, replace_guild_roles};

/// PostgreSQL implementation of ServerSettingsRepository
///
/// Each call runs in its own transaction. Reads use a REPEATABLE READ
/// snapshot so the settings rows and their roles come from the same commit;
/// `upsert` commits both or neither.
#[derive(Clone)]
pub struct PgServerSettingsRepository {
    pool: PgPool,
}

impl PgServerSettingsRepository {
    /// Create a new PgServerSettingsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServerSettingsRepository for PgServerSettingsRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ServerSettings>> {
        let mut tx = begin_snapshot(&self.pool).await.map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, ServerSettingsModel>(
            r#"
            SELECT guild_id, language, system_announcement_type, announcement_room_channel_id
            FROM server_settings
            ORDER BY guild_id
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let mut roles = fetch_all_guild_roles(&mut tx).await.map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|model| {
                let guild_roles = roles.remove(&model.guild_id).unwrap_or_default();
                settings_with_roles(model, guild_roles)
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_guild(&self, guild_id: &GuildId) -> RepoResult<Option<ServerSettings>> {
        let mut tx = begin_snapshot(&self.pool).await.map_err(map_db_error)?;

        let row = sqlx::query_as::<_, ServerSettingsModel>(
            r#"
            SELECT guild_id, language, system_announcement_type, announcement_room_channel_id
            FROM server_settings
            WHERE guild_id = $1
            "#,
        )
        .bind(guild_id.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let settings = match row {
            Some(model) => {
                let guild_roles = fetch_guild_roles(&mut tx, guild_id.as_str())
                    .await
                    .map_err(map_db_error)?;
                Some(settings_with_roles(model, guild_roles))
            }
            None => None,
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(settings)
    }

    #[instrument(skip(self, settings), fields(guild_id = %settings.guild_id))]
    async fn upsert(&self, settings: &ServerSettings) -> RepoResult<()> {
        let values = ServerSettingsUpsert::new(settings);

        // Dropping the transaction on an early return rolls it back
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO server_settings (guild_id, language, system_announcement_type,
                                         announcement_room_channel_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (guild_id) DO UPDATE
            SET language = EXCLUDED.language,
                system_announcement_type = EXCLUDED.system_announcement_type,
                announcement_room_channel_id = EXCLUDED.announcement_room_channel_id
            "#,
        )
        .bind(values.guild_id)
        .bind(values.language)
        .bind(values.system_announcement_type)
        .bind(values.announcement_room_channel_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        replace_guild_roles(&mut tx, values.guild_id, &settings.guild_roles)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(roles = settings.guild_roles.len(), "Server settings saved");

        Ok(())
    }
}
