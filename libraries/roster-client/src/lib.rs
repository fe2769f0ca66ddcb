//! Roster Client
//!
//! HTTP client for a JSON user collection served with plain REST verbs.
//!
//! # Features
//!
//! - **List**: fetch every record, keyed object or array response
//! - **Get one**: fetch a single record, `None` when missing
//! - **Create / update**: nest the flat form fields into the record shape
//!   and stamp timestamps before sending
//! - **Delete**: remove a record and return the backend acknowledgement
//!
//! Every operation is exactly one request. Nothing is retried and no
//! request timeout is set beyond the transport defaults.
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ClientConfig, RosterClient};
//! use roster_core::UserFields;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RosterClient::new(ClientConfig::new("http://localhost:3000"))?;
//!
//!     let users = client.users().list().await?;
//!     println!("Found {} users", users.len());
//!
//!     let created = client
//!         .users()
//!         .create(&UserFields::new().with_first_name("Alice"))
//!         .await?;
//!     println!("Created {}", created.id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod users;

pub use client::RosterClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, UserPayload, DEFAULT_COLLECTION};
pub use users::UsersClient;
