/// Form field map and field names
use crate::error::RosterError;
use crate::types::user::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flat field map submitted by a create/edit form
///
/// Only the keys the form actually collected are present. The address
/// parts are flat here and get nested when a request body is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
}

impl UserFields {
    /// Create an empty field map
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn with_phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    pub fn with_city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn with_country(mut self, value: impl Into<String>) -> Self {
        self.country = Some(value.into());
        self
    }

    pub fn with_street_number(mut self, value: impl Into<String>) -> Self {
        self.street_number = Some(value.into());
        self
    }

    pub fn with_street(mut self, value: impl Into<String>) -> Self {
        self.street = Some(value.into());
        self
    }

    /// Copy of the map with every present value trimmed
    pub fn trimmed(&self) -> Self {
        let trim = |value: &Option<String>| value.as_ref().map(|v| v.trim().to_string());
        Self {
            first_name: trim(&self.first_name),
            last_name: trim(&self.last_name),
            email: trim(&self.email),
            phone_number: trim(&self.phone_number),
            city: trim(&self.city),
            country: trim(&self.country),
            street_number: trim(&self.street_number),
            street: trim(&self.street),
        }
    }

    /// Nest the flat address parts; absent parts become empty strings
    pub fn address(&self) -> Address {
        Address {
            city: self.city.clone().unwrap_or_default(),
            country: self.country.clone().unwrap_or_default(),
            street_number: self.street_number.clone().unwrap_or_default(),
            street: self.street.clone().unwrap_or_default(),
        }
    }
}

/// A user field usable as search or sort criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    City,
    Country,
    StreetNumber,
    Street,
    CreatedAt,
    UpdatedAt,
}

impl UserField {
    /// Every field, in table column order
    pub const ALL: [UserField; 10] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::Email,
        UserField::PhoneNumber,
        UserField::City,
        UserField::Country,
        UserField::StreetNumber,
        UserField::Street,
        UserField::CreatedAt,
        UserField::UpdatedAt,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::FirstName => "firstName",
            UserField::LastName => "lastName",
            UserField::Email => "email",
            UserField::PhoneNumber => "phoneNumber",
            UserField::City => "city",
            UserField::Country => "country",
            UserField::StreetNumber => "streetNumber",
            UserField::Street => "street",
            UserField::CreatedAt => "createdAt",
            UserField::UpdatedAt => "updatedAt",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserField {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        UserField::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| RosterError::UnknownField(name.to_string()))
    }
}
