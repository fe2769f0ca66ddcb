//! Search filtering
//!
//! Pure functions over an already loaded collection. Refreshing the
//! collection before filtering is the controller's job.

use roster_core::{Result, User, UserField};

/// Case-insensitive substring search on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub field: UserField,
    needle: String,
}

impl SearchQuery {
    /// Create a query; the text is matched case-insensitively
    pub fn new(field: UserField, text: &str) -> Self {
        Self {
            field,
            needle: text.to_lowercase(),
        }
    }

    /// Build a query from raw search box input
    ///
    /// Both inputs are trimmed. When either is empty there is nothing to
    /// filter by and `Ok(None)` is returned. An unknown criteria name is an
    /// `UnknownField` error.
    pub fn parse(search: &str, criteria: &str) -> Result<Option<Self>> {
        let search = search.trim();
        let criteria = criteria.trim();
        if search.is_empty() || criteria.is_empty() {
            return Ok(None);
        }

        let field: UserField = criteria.parse()?;
        Ok(Some(Self::new(field, search)))
    }

    /// Lowercased search text
    pub fn text(&self) -> &str {
        &self.needle
    }

    /// Whether the record's field contains the text
    ///
    /// Records that do not carry the field never match.
    pub fn matches(&self, user: &User) -> bool {
        user.field_value(self.field)
            .is_some_and(|value| value.to_lowercase().contains(&self.needle))
    }
}

/// Records matching the query, in their original order
pub fn filter_users(users: &[User], query: &SearchQuery) -> Vec<User> {
    users
        .iter()
        .filter(|user| query.matches(user))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{Address, UserId};

    fn user(id: &str, email: &str) -> User {
        User {
            id: UserId::new(id),
            email: email.to_string(),
            ..User::default()
        }
    }

    #[test]
    fn test_email_search_is_case_insensitive() {
        let users = vec![user("1", "alice@x.com"), user("2", "bob@x.com")];
        let query = SearchQuery::parse("ALICE", "email").unwrap().unwrap();

        let found = filter_users(&users, &query);
        assert_eq!(found, vec![users[0].clone()]);
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let query = SearchQuery::parse("  Bob ", " email ").unwrap().unwrap();
        assert_eq!(query.field, UserField::Email);
        assert_eq!(query.text(), "bob");
    }

    #[test]
    fn test_empty_input_means_no_filter() {
        assert!(SearchQuery::parse("", "email").unwrap().is_none());
        assert!(SearchQuery::parse("alice", "  ").unwrap().is_none());
        // Criteria is not even parsed when the text is empty
        assert!(SearchQuery::parse("   ", "nonsense").unwrap().is_none());
    }

    #[test]
    fn test_unknown_criteria_is_an_error() {
        assert!(SearchQuery::parse("alice", "nonsense").is_err());
    }

    #[test]
    fn test_address_search_skips_records_without_address() {
        let mut in_oxford = user("1", "a@x.com");
        in_oxford.address = Some(Address {
            city: "Oxford".to_string(),
            ..Address::default()
        });
        let no_address = user("2", "b@x.com");

        let query = SearchQuery::new(UserField::City, "ox");
        assert!(query.matches(&in_oxford));
        assert!(!query.matches(&no_address));
    }
}
