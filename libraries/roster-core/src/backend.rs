//! Backend trait for the user collection

use crate::error::Result;
use crate::types::{User, UserFields, UserId};
use async_trait::async_trait;
use serde_json::Value;

/// Access to the remote user collection
///
/// Every method performs exactly one round trip. Implementations do not
/// retry and do not cache; the caller owns the local copy of the collection.
#[async_trait]
pub trait UserBackend: Send + Sync {
    /// Fetch every record in the collection, in backend order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Fetch one record, `None` when the backend has no such id
    async fn get_user(&self, id: &UserId) -> Result<Option<User>>;

    /// Create a record from submitted form fields
    ///
    /// Returns the stored record including the server-assigned id and
    /// timestamps.
    async fn create_user(&self, fields: &UserFields) -> Result<User>;

    /// Replace a record with submitted form fields
    ///
    /// Returns the backend's acknowledgement payload, `None` when the
    /// backend answers with an empty body.
    async fn update_user(&self, id: &UserId, fields: &UserFields) -> Result<Option<User>>;

    /// Delete a record
    ///
    /// Returns the backend's representation of the deleted record, which may
    /// be `Value::Null`.
    async fn delete_user(&self, id: &UserId) -> Result<Value>;
}
