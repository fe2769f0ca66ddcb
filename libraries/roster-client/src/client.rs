//! Main Roster client.

use crate::error::{ClientError, Result};
use crate::types::ClientConfig;
use crate::users::UsersClient;
use async_trait::async_trait;
use reqwest::Client;
use roster_core::{User, UserBackend, UserFields, UserId};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Client for one user collection on a JSON backend.
///
/// Holds the HTTP connection pool and the validated collection location.
/// It is cheap to clone and implements [`UserBackend`], so it can be handed
/// straight to the list controller.
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, RosterClient};
///
/// let client = RosterClient::new(ClientConfig::new("http://localhost:3000/"))?;
/// assert_eq!(client.url().as_str(), "http://localhost:3000/");
/// let users = client.users().list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct RosterClient {
    http: Client,
    base_url: Url,
    collection: String,
}

impl RosterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim().trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base_url = Url::parse(&url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let collection = config.collection.trim().trim_matches('/').to_string();
        if collection.is_empty() {
            return Err(ClientError::InvalidUrl(
                "Collection path cannot be empty".into(),
            ));
        }

        // No timeout: requests use the transport defaults
        let http = Client::builder()
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        debug!(url = %base_url, collection = %collection, "Created roster client");

        Ok(Self {
            http,
            base_url,
            collection,
        })
    }

    /// Get the normalized base URL.
    pub fn url(&self) -> &Url {
        &self.base_url
    }

    /// Get the collection path segment.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Get a client for the user collection.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.http, &self.base_url, &self.collection)
    }
}

#[async_trait]
impl UserBackend for RosterClient {
    async fn list_users(&self) -> roster_core::Result<Vec<User>> {
        self.users()
            .list()
            .await
            .map_err(|e| e.into_roster_error("list"))
    }

    async fn get_user(&self, id: &UserId) -> roster_core::Result<Option<User>> {
        self.users()
            .get(id)
            .await
            .map_err(|e| e.into_roster_error("get"))
    }

    async fn create_user(&self, fields: &UserFields) -> roster_core::Result<User> {
        self.users()
            .create(fields)
            .await
            .map_err(|e| e.into_roster_error("create"))
    }

    async fn update_user(
        &self,
        id: &UserId,
        fields: &UserFields,
    ) -> roster_core::Result<Option<User>> {
        self.users()
            .update(id, fields)
            .await
            .map_err(|e| e.into_roster_error("update"))
    }

    async fn delete_user(&self, id: &UserId) -> roster_core::Result<Value> {
        self.users()
            .delete(id)
            .await
            .map_err(|e| e.into_roster_error("delete"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(RosterClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(RosterClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(RosterClient::new(ClientConfig::new("")).is_err());
        assert!(RosterClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(RosterClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = RosterClient::new(ClientConfig::new("https://example.com/api///"))
            .expect("valid url");

        assert_eq!(client.url().as_str(), "https://example.com/api");
    }

    #[test]
    fn test_collection_normalization() {
        let client = RosterClient::new(
            ClientConfig::new("https://example.com").with_collection("/people/"),
        )
        .expect("valid config");
        assert_eq!(client.collection(), "people");

        let empty = RosterClient::new(ClientConfig::new("https://example.com").with_collection("/"));
        assert!(matches!(empty, Err(ClientError::InvalidUrl(_))));
    }
}
