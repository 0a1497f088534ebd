//! # settings-service
//!
//! Application layer: the per-guild settings store, its request DTOs, and
//! startup wiring.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use settings_core::GuildId;
//! use settings_service::bootstrap;
//!
//! async fn example() -> settings_common::AppResult<()> {
//!     let store = bootstrap::init_from_env().await?;
//!
//!     let settings = store.load(&GuildId::new("123")).await?;
//!     store.update(settings.with_language("de-DE")).await?;
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod dto;
pub mod services;

pub use bootstrap::{connect, init_from_env};
pub use dto::{GuildRoleRequest, SettingsRequest};
pub use services::{ServiceContext, ServiceError, ServiceResult, SettingsStore};
