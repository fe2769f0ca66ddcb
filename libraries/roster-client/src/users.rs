//! User collection operations.

use crate::error::{ClientError, Result};
use crate::types::UserPayload;
use chrono::{SecondsFormat, Utc};
use reqwest::{Client, Response, StatusCode};
use roster_core::{User, UserFields, UserId};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

/// Client for the user collection endpoint.
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a Url,
    collection: &'a str,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a Url, collection: &'a str) -> Self {
        Self {
            http,
            base_url,
            collection,
        }
    }

    /// Fetch every user.
    ///
    /// The backend answers with an object keyed by generated ids; the keys
    /// are discarded except as a fallback id for records stored without
    /// one. An array body or `null` is accepted as well.
    pub async fn list(&self) -> Result<Vec<User>> {
        let url = self.collection_url()?;
        debug!(url = %url, "Fetching users");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let body: Value = read_json(response, "user list").await?;

        let users = users_from_body(body)?;
        debug!(users = users.len(), "Fetched users");

        Ok(users)
    }

    /// Fetch a single user, `None` when the backend does not have it.
    pub async fn get(&self, id: &UserId) -> Result<Option<User>> {
        let url = self.item_url(id)?;
        debug!(url = %url, user_id = %id, "Fetching user");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        // Firebase-style stores answer a missing key with `null`
        let user: Option<User> = read_json(response, "user").await?;
        Ok(user)
    }

    /// Create a user from submitted form fields.
    pub async fn create(&self, fields: &UserFields) -> Result<User> {
        let url = self.collection_url()?;
        let payload = UserPayload::for_create(fields, &now());
        debug!(url = %url, "Creating user");

        let response = self
            .http
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let user: User = read_json(response, "created user").await?;

        info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    /// Replace a user with submitted form fields.
    ///
    /// Returns the backend acknowledgement, which echoes the body sent, or
    /// `None` when the backend answers with an empty body or `null`.
    pub async fn update(&self, id: &UserId, fields: &UserFields) -> Result<Option<User>> {
        let url = self.item_url(id)?;
        let payload = UserPayload::for_update(id, fields, &now());
        debug!(url = %url, user_id = %id, "Updating user");

        let response = self
            .http
            .put(url)
            .json(&payload)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let ack = match read_ack(response, "update acknowledgement").await? {
            Value::Null => None,
            body => Some(serde_json::from_value::<User>(body).map_err(|e| {
                ClientError::ParseError(format!("Failed to parse update acknowledgement: {}", e))
            })?),
        };

        info!(user_id = %id, "Updated user");
        Ok(ack)
    }

    /// Delete a user.
    ///
    /// Returns whatever the backend sends back, `Value::Null` for an empty body.
    pub async fn delete(&self, id: &UserId) -> Result<Value> {
        let url = self.item_url(id)?;
        debug!(url = %url, user_id = %id, "Deleting user");

        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let ack = read_ack(response, "delete acknowledgement").await?;

        info!(user_id = %id, "Deleted user");
        Ok(ack)
    }

    fn collection_url(&self) -> Result<Url> {
        self.url_with(&[])
    }

    fn item_url(&self, id: &UserId) -> Result<Url> {
        self.url_with(&[id.as_str()])
    }

    fn url_with(&self, extra: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(self.collection.split('/'))
            .extend(extra);
        Ok(url)
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let error_text = response.text().await.unwrap_or_default();
        Err(ClientError::ServerError {
            status: status.as_u16(),
            message: error_text,
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
}

/// Decode a write acknowledgement; an empty body reads as `Value::Null`
async fn read_ack(response: Response, what: &str) -> Result<Value> {
    let response = check_status(response).await?;
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text)
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
}

fn users_from_body(body: Value) -> Result<Vec<User>> {
    let parse = |value: Value| {
        serde_json::from_value::<User>(value)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse user record: {}", e)))
    };

    match body {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => map
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| {
                let mut user = parse(value)?;
                if user.id.is_empty() {
                    user.id = UserId::new(key);
                }
                Ok(user)
            })
            .collect(),
        Value::Array(items) => items
            .into_iter()
            .filter(|value| !value.is_null())
            .map(parse)
            .collect(),
        other => Err(ClientError::ParseError(format!(
            "Expected an object of users, got: {}",
            other
        ))),
    }
}
