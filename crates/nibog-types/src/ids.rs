//! Type-safe identifier wrappers around `u64`.
//!
//! Every entity has a strongly-typed ID so a venue identifier can never be
//! handed to a city lookup. IDs render as plain decimal strings (`"1"`,
//! `"42"`) both in URLs and in JSON, and only that canonical rendering
//! parses back: no sign, no leading zeros, no whitespace.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Error returned when a string is not a canonical decimal identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier: {0:?}")]
pub struct ParseIdError(pub String);

/// Parse a canonical decimal identifier.
fn parse_canonical(s: &str) -> Result<u64, ParseIdError> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && !(s.len() > 1 && s.starts_with('0'));
    if !canonical {
        return Err(ParseIdError(s.to_owned()));
    }
    s.parse::<u64>()
        .map_err(|e| ParseIdError(format!("{s} ({e})")))
}

/// Generates a newtype wrapper around `u64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(into = "String", try_from = "String")]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(#[ts(as = "String")] pub u64);

        impl $name {
            /// Return the inner numeric value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }

            /// The identifier following this one, or `None` on overflow.
            pub const fn next(self) -> Option<Self> {
                match self.0.checked_add(1) {
                    Some(n) => Some(Self(n)),
                    None => None,
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_canonical(s).map(Self)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseIdError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a city.
    CityId
}

define_id! {
    /// Unique identifier for a venue hosting events.
    VenueId
}

define_id! {
    /// Unique identifier for a scheduled event.
    EventId
}
