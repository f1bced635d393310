//! Member element - an axial bar between two joints

use serde::{Deserialize, Serialize};

/// Canonical identity of a member: an unordered pair of joint ids.
///
/// The pair is stored in lexicographic order, so a member's identity does
/// not depend on the order its endpoints were given in. This is what makes
/// deduplication and stable serialization possible.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberKey {
    /// Lexicographically smaller joint id
    low: String,
    /// Lexicographically larger joint id
    high: String,
}

impl MemberKey {
    /// Create a canonical key from two joint ids in either order
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                low: a.to_string(),
                high: b.to_string(),
            }
        } else {
            Self {
                low: b.to_string(),
                high: a.to_string(),
            }
        }
    }

    /// The lexicographically smaller endpoint
    pub fn low(&self) -> &str {
        &self.low
    }

    /// The lexicographically larger endpoint
    pub fn high(&self) -> &str {
        &self.high
    }

    /// Whether `id` is one of the two endpoints
    pub fn touches(&self, id: &str) -> bool {
        self.low == id || self.high == id
    }
}

/// Cross-sectional properties of a member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Linear (cross-sectional) area; 0 when unassigned
    pub linear_area: f64,
}

impl Member {
    /// Create a member with the given linear area
    pub fn new(linear_area: f64) -> Self {
        Self { linear_area }
    }
}

impl Default for Member {
    fn default() -> Self {
        Self::new(0.0)
    }
}
