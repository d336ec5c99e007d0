//! Customer record and its mutable fields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Server-assigned customer identifier (SERIAL primary key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i32);

impl CustomerId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for CustomerId {
    type Err = ValidationError;

    /// Only a plain (optionally signed) integer is accepted. Anything else,
    /// SQL fragments included, is rejected before a query is built.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

/// Mutable customer fields as sent by clients on create and update.
///
/// Every field is optional. An update writes all three columns, so an
/// absent field clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
