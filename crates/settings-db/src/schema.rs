//! Table definitions for the settings store
//!
//! Creates the tables when they are missing. Column widths mirror the bounds
//! enforced on identifiers and language tags in the domain layer.

use sqlx::PgPool;
use tracing::{info, instrument};

/// DDL statements, executed in order inside one transaction
pub const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS server_settings (
        guild_id                     VARCHAR(24) PRIMARY KEY,
        language                     VARCHAR(5)  NOT NULL DEFAULT 'en-US',
        system_announcement_type     VARCHAR(32) NOT NULL DEFAULT 'NONE',
        announcement_room_channel_id VARCHAR(24)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS guild_roles (
        guild_id  VARCHAR(24) NOT NULL,
        role_id   VARCHAR(24) NOT NULL,
        role_type VARCHAR(32) NOT NULL DEFAULT 'MEMBER',
        position  INTEGER     NOT NULL DEFAULT 0,
        PRIMARY KEY (guild_id, role_id)
    )
    "#,
    r#"
    ALTER TABLE guild_roles ADD COLUMN IF NOT EXISTS position INTEGER NOT NULL DEFAULT 0
    "#,
];

/// Create the settings tables if they do not exist yet
#[instrument(skip(pool))]
pub async fn create_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    info!(statements = SCHEMA_STATEMENTS.len(), "Settings schema ready");
    Ok(())
}
