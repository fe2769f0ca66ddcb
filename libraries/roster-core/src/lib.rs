//! Roster Core
//!
//! Transport-agnostic types, traits, and error handling for the Roster user
//! manager.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Address`, `UserId`, and the flat `UserFields`
//!   map a form submits
//! - **Backend Trait**: `UserBackend`, the seam between the list controller
//!   and whatever talks to the user collection
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::{User, UserFields, UserId};
//!
//! let fields = UserFields::new()
//!     .with_first_name("Alice")
//!     .with_last_name("Liddell");
//!
//! let user = User::from_fields(UserId::new("-N1"), &fields);
//! assert_eq!(user.first_name, "Alice");
//! assert!(user.address.is_none());
//! ```

#![forbid(unsafe_code)]

pub mod backend;
pub mod error;
pub mod types;

pub use backend::UserBackend;
pub use error::{Result, RosterError};
pub use types::{parse_timestamp, Address, User, UserField, UserFields, UserId};
