//! Platform identifiers - guild, channel, and role IDs
//!
//! Discord snowflakes are persisted as fixed-width text columns (`VARCHAR(24)`),
//! so identifiers are carried as strings rather than integers. Construction with
//! `new` is unchecked; `parse` enforces the storage bound.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum identifier length accepted by the storage layer
pub const MAX_ID_LEN: usize = 24;

/// Error when parsing an identifier from user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("identifier must not be empty")]
    Empty,

    #[error("identifier exceeds {max} characters (got {len})")]
    TooLong { len: usize, max: usize },
}

fn check_id(s: &str) -> Result<(), IdParseError> {
    let len = s.chars().count();
    if len == 0 {
        Err(IdParseError::Empty)
    } else if len > MAX_ID_LEN {
        Err(IdParseError::TooLong {
            len,
            max: MAX_ID_LEN,
        })
    } else {
        Ok(())
    }
}

macro_rules! platform_id {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier without checking it
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Parse an identifier, rejecting empty or over-long input
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                check_id(s).map(|()| Self(s.to_string()))
            }

            /// Borrow the identifier as a string slice
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the identifier fits the storage bound
            pub fn is_well_formed(&self) -> bool {
                check_id(&self.0).is_ok()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        // Accept both string and integer forms, as bot frameworks emit either
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                use serde::de::{self, Visitor};

                struct IdVisitor;

                impl<'de> Visitor<'de> for IdVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str(concat!("a string or integer ", $what))
                    }

                    fn visit_u64<E>(self, value: u64) -> Result<$name, E>
                    where
                        E: de::Error,
                    {
                        Ok($name(value.to_string()))
                    }

                    fn visit_i64<E>(self, value: i64) -> Result<$name, E>
                    where
                        E: de::Error,
                    {
                        Ok($name(value.to_string()))
                    }

                    fn visit_str<E>(self, value: &str) -> Result<$name, E>
                    where
                        E: de::Error,
                    {
                        Ok($name(value.to_string()))
                    }

                    fn visit_string<E>(self, value: String) -> Result<$name, E>
                    where
                        E: de::Error,
                    {
                        Ok($name(value))
                    }
                }

                deserializer.deserialize_any(IdVisitor)
            }
        }
    };
}

platform_id!(
    /// Guild (server) identifier - the tenant key for settings
    GuildId,
    "guild ID"
);

platform_id!(
    /// Text channel identifier
    ChannelId,
    "channel ID"
);

platform_id!(
    /// Role identifier
    RoleId,
    "role ID"
);
