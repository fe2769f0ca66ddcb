//! Sort state and record ordering
//!
//! The displayed order is derived from the collection on every read; the
//! collection itself keeps insertion order. Each field remembers its own
//! direction, so switching to a field that was never sorted always starts
//! ascending.

use roster_core::{parse_timestamp, User, UserField};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Current sort field plus the last direction used for every field
#[derive(Debug, Clone, Default)]
pub struct SortState {
    current: Option<UserField>,
    directions: HashMap<UserField, SortDirection>,
}

impl SortState {
    /// Create an unsorted state
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by `field`, flipping the direction it had last time
    ///
    /// The first toggle of a field is ascending.
    pub fn toggle(&mut self, field: UserField) -> SortDirection {
        let direction = self
            .directions
            .get(&field)
            .map_or(SortDirection::Ascending, |previous| previous.reversed());

        self.directions.insert(field, direction);
        self.current = Some(field);
        direction
    }

    /// Active field and direction, `None` while unsorted
    pub fn current(&self) -> Option<(UserField, SortDirection)> {
        let field = self.current?;
        self.directions
            .get(&field)
            .map(|direction| (field, *direction))
    }

    /// Last direction used for a field
    pub fn direction(&self, field: UserField) -> Option<SortDirection> {
        self.directions.get(&field).copied()
    }

    /// Ordered view over `users`
    ///
    /// The sort is stable, so equal records keep collection order in both
    /// directions.
    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        let mut view: Vec<&User> = users.iter().collect();
        if let Some((field, direction)) = self.current() {
            view.sort_by(|a, b| direction.apply(compare_by(a, b, field)));
        }
        view
    }
}

/// Ascending comparison of two records on one field
///
/// `createdAt` compares parsed timestamps, with missing or unparseable
/// values first. Every other field compares case-insensitively as text,
/// with a missing value treated as empty.
pub fn compare_by(a: &User, b: &User, field: UserField) -> Ordering {
    match field {
        UserField::CreatedAt => {
            let key = |user: &User| user.created_at.as_deref().and_then(parse_timestamp);
            key(a).cmp(&key(b))
        }
        _ => {
            let key = |user: &User| user.field_value(field).unwrap_or_default().to_lowercase();
            key(a).cmp(&key(b))
        }
    }
}
