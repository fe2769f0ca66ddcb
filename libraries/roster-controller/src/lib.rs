//! Roster - List Management
//!
//! Transport-agnostic state for the user list screen.
//!
//! This crate provides:
//! - The local user collection, loaded once and reconciled after each
//!   create/edit/delete without refetching
//! - A single view mode (create form, edit form, info panel, delete
//!   confirmation) instead of independent flags
//! - Search as an explicit refresh followed by a pure filter
//! - Sorting derived on read, with the direction remembered per field
//! - Loading/error/empty indicators for the presentation layer
//!
//! # Architecture
//!
//! `roster-controller` does not know about HTTP. All data comes through the
//! `UserBackend` trait from `roster-core`; `roster-client` provides the HTTP
//! implementation.
//!
//! # Example
//!
//! ```ignore
//! use roster_controller::{DisplayState, ListController};
//! use roster_core::UserField;
//!
//! let mut controller = ListController::new(backend);
//! controller.activate().await?;
//!
//! controller.toggle_sort(UserField::LastName);
//! for user in controller.visible_users() {
//!     println!("{} <{}>", user.full_name(), user.email);
//! }
//!
//! controller.search("alice", "email").await?;
//! assert_ne!(controller.display_state(), DisplayState::Loading);
//! ```

pub mod controller;
pub mod events;
pub mod filter;
pub mod sort;
pub mod view;

pub use controller::ListController;
pub use events::RowEvent;
pub use filter::{filter_users, SearchQuery};
pub use sort::{compare_by, SortDirection, SortState};
pub use view::{DisplayState, ViewMode};
