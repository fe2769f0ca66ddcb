//! Row events
//!
//! Emitted by the presentation layer when a row button is clicked. Each
//! carries the id of the record the row renders.

use roster_core::UserId;
use serde::{Deserialize, Serialize};

/// Click on one of a row's action buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowEvent {
    /// Open the info panel for the record
    Info(UserId),
    /// Open the edit form for the record
    Edit(UserId),
    /// Ask for delete confirmation
    Delete(UserId),
}
