//! Moderation status for products.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Admin-controlled visibility flag on a product, independent of stock.
///
/// Stored records predating moderation carry no status at all, and hand
/// edited ones may vary in case or whitespace, so parsing trims and ignores
/// case, and anything unrecognized normalizes to [`Unblocked`]. The
/// normalization is idempotent: re-parsing already-normalized text is a
/// no-op.
///
/// [`Unblocked`]: ModerationStatus::Unblocked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModerationStatus {
    Blocked,
    #[default]
    Unblocked,
}

impl ModerationStatus {
    /// Canonical serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blocked => "Blocked",
            Self::Unblocked => "Unblocked",
        }
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModerationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("blocked") {
            Ok(Self::Blocked)
        } else if s.eq_ignore_ascii_case("unblocked") {
            Ok(Self::Unblocked)
        } else {
            Err(format!("invalid moderation status: {s}"))
        }
    }
}

impl Serialize for ModerationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModerationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Unrecognized status text in legacy records falls back to the
        // default rather than rejecting the whole collection.
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}
