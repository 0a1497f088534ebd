//! Data transfer objects for settings writes
//!
//! Request DTOs carry the validation rules applied before a record is stored.

pub mod requests;

pub use requests::{GuildRoleRequest, SettingsRequest};
