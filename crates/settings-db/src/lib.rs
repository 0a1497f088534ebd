//! # settings-db
//!
//! Database layer implementing the settings repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `settings-core`. It handles:
//!
//! - Connection pool management
//! - Table creation for `server_settings` and `guild_roles`
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use settings_db::{create_pool, create_schema, DatabaseConfig, PgServerSettingsRepository};
//! use settings_core::traits::ServerSettingsRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     create_schema(&pool).await?;
//!     let repo = PgServerSettingsRepository::new(pool);
//!
//!     let all = repo.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{begin_snapshot, create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgGuildRoleRepository, PgServerSettingsRepository};
pub use schema::create_schema;
