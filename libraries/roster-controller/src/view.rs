//! View modes and indicators

use roster_core::UserId;
use serde::{Deserialize, Serialize};

/// Which overlay the list screen is showing
///
/// At most one overlay is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Plain list
    #[default]
    Idle,

    /// Create form open
    Creating,

    /// Edit form open for a record
    Editing(UserId),

    /// Info panel open for a record
    ViewingInfo(UserId),

    /// Delete confirmation open for a record
    ConfirmingDelete(UserId),
}

impl ViewMode {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            ViewMode::Idle => "idle",
            ViewMode::Creating => "creating",
            ViewMode::Editing(_) => "editing",
            ViewMode::ViewingInfo(_) => "viewing info",
            ViewMode::ConfirmingDelete(_) => "confirming delete",
        }
    }
}

/// What the table area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    /// A fetch is in flight
    Loading,

    /// The last operation failed
    Error,

    /// Loaded, but there are no records
    Empty,

    /// Loaded, render the rows
    Table,
}
