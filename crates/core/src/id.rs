//! Identifier newtypes.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a sweet, assigned by the store at creation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SweetId(i64);

impl SweetId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for SweetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for SweetId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<SweetId> for i64 {
    fn from(value: SweetId) -> Self {
        value.0
    }
}

impl FromStr for SweetId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(i64::from_str(s)?))
    }
}
