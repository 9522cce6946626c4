//! Marker identity values and the unassigned sentinel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric identity of a ring tag pattern within a marker dictionary.
///
/// Identities are plain values: `Copy`, comparable, hashable, immutable once
/// constructed. Re-identifying a detection means building a new `MarkerId`,
/// not mutating one.
///
/// The id `0` is reserved as [`MarkerId::UNASSIGNED`], the identity of a tag
/// that has not been decoded (or whose decode failed). Dictionaries must not
/// assign `0` to a real pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(u32);

impl MarkerId {
    /// Sentinel identity of a tag that has not been identified.
    pub const UNASSIGNED: MarkerId = MarkerId(0);

    /// Wrap a raw dictionary id.
    ///
    /// No range validation happens here; whether `raw` names a real pattern
    /// is the dictionary's concern.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The stored identifier.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// True unless this is the [`MarkerId::UNASSIGNED`] sentinel.
    #[inline]
    pub const fn is_assigned(self) -> bool {
        self.0 != Self::UNASSIGNED.0
    }

    /// The identifier, or `None` for the sentinel.
    #[inline]
    pub const fn assigned(self) -> Option<u32> {
        if self.is_assigned() {
            Some(self.0)
        } else {
            None
        }
    }
}

impl Default for MarkerId {
    /// The named sentinel, not an implicit zero.
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl From<u32> for MarkerId {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl From<MarkerId> for u32 {
    fn from(id: MarkerId) -> Self {
        id.get()
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a marker id cannot be parsed from text.
#[derive(thiserror::Error, Debug)]
#[error("invalid marker id: {0}")]
pub struct ParseMarkerIdError(#[from] std::num::ParseIntError);

impl FromStr for MarkerId {
    type Err = ParseMarkerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_unassigned_sentinel() {
        let id = MarkerId::default();
        assert_eq!(id.get(), 0);
        assert_eq!(id, MarkerId::UNASSIGNED);
        assert!(!id.is_assigned());
    }

    #[test]
    fn assigned_projects_the_sentinel_to_none() {
        assert_eq!(MarkerId::UNASSIGNED.assigned(), None);
        assert_eq!(MarkerId::new(0).assigned(), None);
        assert_eq!(MarkerId::new(17).assigned(), Some(17));
    }

    #[test]
    fn conversions_preserve_the_raw_id() {
        let id = MarkerId::from(42u32);
        assert_eq!(u32::from(id), 42);
    }

    #[test]
    fn display_and_parse_round_trip() {
        for raw in [0u32, 7, 1000, u32::MAX] {
            let id = MarkerId::new(raw);
            let parsed: MarkerId = id.to_string().parse().expect("parse printed id");
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn malformed_text_fails_to_parse() {
        assert!("".parse::<MarkerId>().is_err());
        assert!("-1".parse::<MarkerId>().is_err());
        assert!("7b".parse::<MarkerId>().is_err());
    }
}
