//! Type-safe identifier wrapper for students.
//!
//! Student identifiers are plain integers assigned by the store, starting
//! at 1 and never reused. The newtype keeps them from being mixed up with
//! ages or other integers at compile time while still serializing as a
//! bare JSON number.

use serde::{Deserialize, Serialize};

/// Unique identifier for a student, assigned by the store.
///
/// The zero value means "not yet assigned". Request bodies may carry any
/// value here; the store always overwrites it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StudentId(pub i64);

impl StudentId {
    /// The first identifier handed out by a fresh store.
    pub const FIRST: Self = Self(1);

    /// Return the inner integer value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// The identifier following this one, or `None` on overflow.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl core::fmt::Display for StudentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StudentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<StudentId> for i64 {
    fn from(id: StudentId) -> Self {
        id.0
    }
}

impl core::str::FromStr for StudentId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}
