//! Strongly-typed identifier value objects.
//!
//! Every persisted record uses a database-assigned integer key. Wrapping the
//! raw `i64` keeps a criterion id from being passed where a user id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw database key.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw database key.
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| ValidationError::invalid_format($field, "must be an integer id"))
            }
        }
    };
}

define_id!(
    /// Identifier of a user account (admin, pakar or siswa).
    UserId,
    "user_id"
);
define_id!(
    /// Identifier of a criterion.
    KriteriaId,
    "kriteria_id"
);
define_id!(
    /// Identifier of a major.
    JurusanId,
    "jurusan_id"
);
define_id!(
    /// Identifier of an academic period.
    PeriodeId,
    "periode_id"
);
define_id!(
    /// Identifier of an alumni record.
    AlumniId,
    "alumni_id"
);
define_id!(
    /// Identifier of a stored recommendation result.
    HasilId,
    "hasil_id"
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn parses_integer_ids() {
        let id: KriteriaId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let result = "abc".parse::<PeriodeId>();
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn deserializes_as_json_map_key() {
        let map: BTreeMap<KriteriaId, u8> = serde_json::from_str(r#"{"3": 5, "1": 2}"#).unwrap();
        assert_eq!(map.get(&KriteriaId::new(3)), Some(&5));
        assert_eq!(map.keys().next(), Some(&KriteriaId::new(1)));
    }
}
