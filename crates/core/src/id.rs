//! Identifiers used across the service.
//!
//! Identifiers are opaque strings on the wire. Freshly generated ids are
//! random UUIDs, but any string supplied by a caller (e.g. on update) is
//! accepted as-is.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a base item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseItemId(String);

/// Identifier of the user owning a record. Carried, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = core::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    };
}

impl_string_newtype!(BaseItemId);
impl_string_newtype!(UserId);

impl BaseItemId {
    /// Generate a new random identifier (UUIDv4, hyphenated lowercase).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_valid_uuids() {
        let id = BaseItemId::generate();
        let parsed = Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn generated_ids_do_not_collide() {
        let ids: HashSet<_> = (0..1_000).map(|_| BaseItemId::generate()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn arbitrary_strings_are_accepted() {
        let id: BaseItemId = "A".parse().unwrap();
        assert_eq!(id.as_str(), "A");
        assert_eq!(id.to_string(), "A");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = BaseItemId::new("milk-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"milk-1\"");

        let back: BaseItemId = serde_json::from_str("\"milk-1\"").unwrap();
        assert_eq!(back, id);
    }
}
