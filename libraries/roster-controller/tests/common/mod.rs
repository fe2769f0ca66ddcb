//! In-memory backend shared by the controller tests

#![allow(dead_code)]

use async_trait::async_trait;
use roster_core::{Address, Result, RosterError, User, UserBackend, UserFields, UserId};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

pub const CREATED_AT: &str = "2024-01-01T00:00:00.000Z";
pub const UPDATED_AT: &str = "2024-06-01T00:00:00.000Z";

#[derive(Default)]
struct FakeState {
    users: Vec<User>,
    failing: HashSet<&'static str>,
    stalled: HashSet<&'static str>,
    calls: Vec<String>,
    next_id: u32,
}

/// Backend keeping the collection in memory, with switchable failures
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub fn with_users(users: Vec<User>) -> Self {
        let backend = Self::default();
        backend.state.lock().unwrap().users = users;
        backend
    }

    /// Make every call of `operation` fail until `recover` is called
    pub fn fail(&self, operation: &'static str) {
        self.state.lock().unwrap().failing.insert(operation);
    }

    pub fn recover(&self, operation: &'static str) {
        self.state.lock().unwrap().failing.remove(operation);
    }

    /// Make calls of `operation` hang forever until `resume` is called
    pub fn stall(&self, operation: &'static str) {
        self.state.lock().unwrap().stalled.insert(operation);
    }

    pub fn resume(&self, operation: &'static str) {
        self.state.lock().unwrap().stalled.remove(operation);
    }

    /// Operations called so far, as "list", "get:<id>", ...
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    /// Server-side copy of the collection
    pub fn server_users(&self) -> Vec<User> {
        self.state.lock().unwrap().users.clone()
    }

    /// Simulate another client writing to the collection
    pub fn insert_server_user(&self, user: User) {
        self.state.lock().unwrap().users.push(user);
    }

    fn begin(&self, operation: &'static str, call: String) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing.contains(operation) {
            return Err(RosterError::request_failed(operation, "injected failure"));
        }
        Ok(())
    }
}

fn stored(id: UserId, fields: &UserFields, created_at: Option<String>) -> User {
    let fields = fields.trimmed();
    User {
        address: Some(fields.address()),
        created_at,
        updated_at: Some(UPDATED_AT.to_string()),
        ..User::from_fields(id, &fields)
    }
}

#[async_trait]
impl UserBackend for FakeBackend {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.begin("list", "list".to_string())?;
        let stalled = self.state.lock().unwrap().stalled.contains("list");
        if stalled {
            std::future::pending::<()>().await;
        }
        Ok(self.server_users())
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        self.begin("get", format!("get:{}", id))?;
        Ok(self.server_users().into_iter().find(|u| &u.id == id))
    }

    async fn create_user(&self, fields: &UserFields) -> Result<User> {
        self.begin("create", "create".to_string())?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = UserId::new(format!("srv-{}", state.next_id));
        let user = User {
            updated_at: Some(CREATED_AT.to_string()),
            ..stored(id, fields, Some(CREATED_AT.to_string()))
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &UserId, fields: &UserFields) -> Result<Option<User>> {
        self.begin("update", format!("update:{}", id))?;
        let mut state = self.state.lock().unwrap();
        let slot = state
            .users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| RosterError::request_failed("update", "404"))?;
        *slot = stored(id.clone(), fields, slot.created_at.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete_user(&self, id: &UserId) -> Result<Value> {
        self.begin("delete", format!("delete:{}", id))?;
        let mut state = self.state.lock().unwrap();
        match state.users.iter().position(|u| &u.id == id) {
            Some(index) => {
                let removed = state.users.remove(index);
                Ok(serde_json::to_value(removed).unwrap_or(Value::Null))
            }
            None => Ok(Value::Null),
        }
    }
}

// ===== Test Helpers =====

pub fn user(id: &str, first: &str, last: &str, email: &str) -> User {
    User {
        id: UserId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone_number: "555-0100".to_string(),
        address: Some(Address {
            city: "Oxford".to_string(),
            country: "UK".to_string(),
            street_number: "1".to_string(),
            street: "High Street".to_string(),
        }),
        created_at: Some(CREATED_AT.to_string()),
        updated_at: Some(CREATED_AT.to_string()),
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        user("a", "Alice", "Liddell", "alice@x.com"),
        user("b", "Bob", "builder", "bob@x.com"),
        user("c", "carol", "Danvers", "carol@y.org"),
    ]
}

pub fn ids(users: &[&User]) -> Vec<String> {
    users.iter().map(|u| u.id.to_string()).collect()
}
