//! Strongly-typed identifiers for domain entities
//!
//! Using newtype wrappers around the storage-assigned integer keys provides
//! type safety and prevents accidental mixing of different identifier types.
//! Identifiers are assigned monotonically by the storage layer, so there is
//! no constructor that generates a fresh value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a storage-assigned key
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying key
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

// Ledger domain identifiers
define_id!(AccountId);
define_id!(MovementId);
