//! PostgreSQL implementation of GuildRoleRepository
//!
//! The connection-level helpers are shared with the settings repository so
//! role writes can join the same transaction as the settings row.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use settings_core::entities::GuildRole;
use settings_core::traits::{GuildRoleRepository, RepoResult};
use settings_core::value_objects::GuildId;

use crate::mappers::GuildRoleInsert;
use crate::models::GuildRoleModel;

use super::error::map_db_error;

/// Load the role bindings of one guild in the order they were written
pub(crate) async fn fetch_guild_roles(
    conn: &mut PgConnection,
    guild_id: &str,
) -> Result<Vec<GuildRole>, sqlx::Error> {
    let rows = sqlx::query_as::<_, GuildRoleModel>(
        r#"
        SELECT guild_id, role_id, role_type, position
        FROM guild_roles
        WHERE guild_id = $1
        ORDER BY position, role_id
        "#,
    )
    .bind(guild_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(GuildRole::from).collect())
}

/// Load every role binding, grouped by guild
pub(crate) async fn fetch_all_guild_roles(
    conn: &mut PgConnection,
) -> Result<HashMap<String, Vec<GuildRole>>, sqlx::Error> {
    let rows = sqlx::query_as::<_, GuildRoleModel>(
        r#"
        SELECT guild_id, role_id, role_type, position
        FROM guild_roles
        ORDER BY guild_id, position, role_id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    let mut by_guild: HashMap<String, Vec<GuildRole>> = HashMap::new();
    for row in rows {
        let guild_id = row.guild_id.clone();
        by_guild.entry(guild_id).or_default().push(GuildRole::from(row));
    }

    Ok(by_guild)
}

/// Replace the role bindings of one guild with `roles`, keeping their order
pub(crate) async fn replace_guild_roles(
    conn: &mut PgConnection,
    guild_id: &str,
    roles: &[GuildRole],
) -> Result<(), sqlx::Error> {
    let removed = sqlx::query(
        r#"
        DELETE FROM guild_roles WHERE guild_id = $1
        "#,
    )
    .bind(guild_id)
    .execute(&mut *conn)
    .await?
    .rows_affected();

    for (index, role) in roles.iter().enumerate() {
        let insert = GuildRoleInsert::new(role, index);
        sqlx::query(
            r#"
            INSERT INTO guild_roles (guild_id, role_id, role_type, position)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(guild_id)
        .bind(insert.role_id)
        .bind(insert.role_type)
        .bind(insert.position)
        .execute(&mut *conn)
        .await?;
    }

    debug!(guild_id, removed, inserted = roles.len(), "Guild roles replaced");
    Ok(())
}

/// PostgreSQL implementation of GuildRoleRepository
#[derive(Clone)]
pub struct PgGuildRoleRepository {
    pool: PgPool,
}

impl PgGuildRoleRepository {
    /// Create a new PgGuildRoleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuildRoleRepository for PgGuildRoleRepository {
    #[instrument(skip(self))]
    async fn get_guild_roles(&self, guild_id: &GuildId) -> RepoResult<Vec<GuildRole>> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;

        fetch_guild_roles(&mut conn, guild_id.as_str())
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, roles), fields(count = roles.len()))]
    async fn update_guild_roles(&self, guild_id: &GuildId, roles: &[GuildRole]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        replace_guild_roles(&mut tx, guild_id.as_str(), roles)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
