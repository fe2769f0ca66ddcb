//! Types for Roster client configuration and request bodies.

use roster_core::{Address, UserFields, UserId};
use serde::Serialize;

/// Collection path used when none is configured
pub const DEFAULT_COLLECTION: &str = "users";

/// Configuration for connecting to the user collection.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "http://localhost:3000")
    pub url: String,
    /// Path segment of the collection under the base URL
    pub collection: String,
}

impl ClientConfig {
    /// Create a config for the default `users` collection.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    /// Use a different collection path.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }
}

/// Record body sent on create and update.
///
/// The flat form fields are nested into `address` here. Text fields the
/// form did not submit are left out, but the address is always sent whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub updated_at: String,
}

impl UserPayload {
    fn from_fields(fields: &UserFields, updated_at: &str) -> Self {
        let fields = fields.trimmed();
        Self {
            id: None,
            address: fields.address(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone_number: fields.phone_number,
            created_at: None,
            updated_at: updated_at.to_string(),
        }
    }

    /// Body for POST: no id, both timestamps set to `now`.
    pub fn for_create(fields: &UserFields, now: &str) -> Self {
        let mut payload = Self::from_fields(fields, now);
        payload.created_at = Some(now.to_string());
        payload
    }

    /// Body for PUT: carries the id, only `updatedAt` is stamped.
    pub fn for_update(id: &UserId, fields: &UserFields, now: &str) -> Self {
        let mut payload = Self::from_fields(fields, now);
        payload.id = Some(id.clone());
        payload
    }
}
