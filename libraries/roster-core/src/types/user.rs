/// User domain type
use crate::types::{UserField, UserFields, UserId};
use serde::{Deserialize, Serialize};

/// Postal address, always replaced as a whole
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub city: String,
    pub country: String,
    pub street_number: String,
    pub street: String,
}

/// User record as stored by the backend
///
/// Missing text fields deserialize as empty strings. Address and
/// timestamps are optional because a locally edited copy does not carry
/// them until the next reload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned identifier
    #[serde(default)]
    pub id: UserId,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone_number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Creation timestamp, set once by the creating client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    /// Build the local copy of a record from a submitted form
    ///
    /// Only the name, email, and phone values carry over. Address and
    /// timestamps are left empty; the server copy keeps them.
    pub fn from_fields(id: UserId, fields: &UserFields) -> Self {
        Self {
            id,
            first_name: fields.first_name.clone().unwrap_or_default(),
            last_name: fields.last_name.clone().unwrap_or_default(),
            email: fields.email.clone().unwrap_or_default(),
            phone_number: fields.phone_number.clone().unwrap_or_default(),
            address: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Display name, "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Raw value of a field, `None` when the record does not carry it
    pub fn field_value(&self, field: UserField) -> Option<&str> {
        let address = self.address.as_ref();
        match field {
            UserField::FirstName => Some(self.first_name.as_str()),
            UserField::LastName => Some(self.last_name.as_str()),
            UserField::Email => Some(self.email.as_str()),
            UserField::PhoneNumber => Some(self.phone_number.as_str()),
            UserField::City => address.map(|a| a.city.as_str()),
            UserField::Country => address.map(|a| a.country.as_str()),
            UserField::StreetNumber => address.map(|a| a.street_number.as_str()),
            UserField::Street => address.map(|a| a.street.as_str()),
            UserField::CreatedAt => self.created_at.as_deref(),
            UserField::UpdatedAt => self.updated_at.as_deref(),
        }
    }

    /// Flatten the record back into form fields, for pre-filling an edit form
    pub fn to_fields(&self) -> UserFields {
        let mut fields = UserFields::new()
            .with_first_name(self.first_name.as_str())
            .with_last_name(self.last_name.as_str())
            .with_email(self.email.as_str())
            .with_phone_number(self.phone_number.as_str());

        if let Some(address) = &self.address {
            fields = fields
                .with_city(address.city.as_str())
                .with_country(address.country.as_str())
                .with_street_number(address.street_number.as_str())
                .with_street(address.street.as_str());
        }

        fields
    }
}
