/// ID types for Roster entities
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier
///
/// Opaque and assigned by the backend on creation. Serialized as a string;
/// stores that hand out integer keys are read into the same string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new user ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the backend left the id blank
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = UserId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer id")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<UserId, E> {
                Ok(UserId::new(value))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<UserId, E> {
                Ok(UserId(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<UserId, E> {
                Ok(UserId(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<UserId, E> {
                Ok(UserId(value.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
