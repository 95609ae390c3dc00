//! User record domain model.
//!
//! [`UserRecord`] mirrors the JSON shape served by the remote directory service
//! (camelCase keys, nested `hair`, `address` and `company` objects). Decoding is
//! lenient: only `id`, `firstName` and `lastName` are required, everything else
//! falls back to an empty or zero value, and keys this model does not know about
//! are kept in [`UserRecord::extra`] so the presentation layer can still show them.
//!
//! Records are never mutated after decoding; the session replaces whole
//! collections instead.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single user as returned by the directory service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub maiden_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub hair: Hair,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,

    /// Pass-through fields not interpreted by the directory.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Hair attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hair {
    #[serde(default)]
    pub color: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub state_code: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// Geographic coordinates of an address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Employer details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub address: Option<Address>,
}

impl UserRecord {
    /// Creates a record with only the identifying fields set.
    ///
    /// Mostly useful for tests and fixtures; real records come from the service.
    ///
    /// # Examples
    ///
    /// ```
    /// use userdir::UserRecord;
    ///
    /// let user = UserRecord::new(1, "Emily", "Johnson");
    /// assert_eq!(user.full_name(), "Emily Johnson");
    /// assert_eq!(user.hair_color(), "");
    /// ```
    #[must_use]
    pub fn new(id: u64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            maiden_name: String::new(),
            username: String::new(),
            email: String::new(),
            phone: String::new(),
            age: 0,
            gender: String::new(),
            birth_date: String::new(),
            image: String::new(),
            blood_group: String::new(),
            height: 0.0,
            weight: 0.0,
            eye_color: String::new(),
            hair: Hair::default(),
            address: Address::default(),
            company: Company::default(),
            extra: Map::new(),
        }
    }

    /// `"{firstName} {lastName}"`, the key used for name sorting.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// First character of the first and last name.
    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    #[must_use]
    pub fn hair_color(&self) -> &str {
        &self.hair.color
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.address.city
    }

    /// Case-insensitive hair color comparison.
    #[must_use]
    pub fn has_hair_color(&self, color: &str) -> bool {
        self.hair.color.to_lowercase() == color.to_lowercase()
    }
}
