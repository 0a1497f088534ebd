//! Business logic services
//!
//! The settings store and the dependency context it runs on.

pub mod context;
pub mod error;
pub mod settings;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use settings::SettingsStore;
