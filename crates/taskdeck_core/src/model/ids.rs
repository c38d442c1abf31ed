//! Typed string identifiers and id generation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Stable identifier of one todo. Opaque to callers.
    TodoId
);

string_id!(
    /// Stable identifier of one category. Seeded categories use `"1".."3"`.
    CategoryId
);

/// Source of fresh raw id values for store-created records.
///
/// Implementations must eventually yield a value not already in use; the
/// store retries on collision.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> String;
}

/// Default generator: random UUID v4 in simple (32 hex chars) form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Monotonic counter generator producing `<prefix><n>`.
///
/// Deterministic, so it suits snapshot tests and scripted demos.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id-")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let value = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryId, IdGenerator, SequentialIdGenerator, TodoId, UuidIdGenerator};
    use std::collections::HashSet;

    #[test]
    fn uuid_generator_yields_distinct_hex_tokens() {
        let mut ids = UuidIdGenerator;
        let values: HashSet<String> = (0..64).map(|_| ids.next_id()).collect();
        assert_eq!(values.len(), 64);
        assert!(values
            .iter()
            .all(|value| value.len() == 32 && value.chars().all(|c| c.is_ascii_hexdigit())));
    }

    #[test]
    fn sequential_generator_counts_from_one() {
        let mut ids = SequentialIdGenerator::new("t");
        assert_eq!(ids.next_id(), "t1");
        assert_eq!(ids.next_id(), "t2");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&CategoryId::from("3")).unwrap();
        assert_eq!(json, "\"3\"");
        let decoded: TodoId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(decoded.as_str(), "abc");
    }
}
