//! Read-only queries over a [`crate::Catalog`].
//!
//! Each query is an `impl Catalog` method living next to its helpers. All of
//! them recompute from the full session list and order their output by an
//! explicit key, never by hash iteration order.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::CatalogError;

pub mod instructors;
pub mod participants;
pub mod ranking;
pub mod recommend;
pub mod similarity;

pub use instructors::InstructorCourses;

/// The metric used to rank sessions in [`crate::Catalog::top_courses`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Hours,
    Participants,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Hours => "hours",
            SortKey::Participants => "participants",
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    /// Exact, case-sensitive match on `hours` or `participants`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hours" => Ok(SortKey::Hours),
            "participants" => Ok(SortKey::Participants),
            other => Err(CatalogError::InvalidArgument(format!(
                "unknown sort key `{}` (expected `hours` or `participants`)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender of the profile passed to [`crate::Catalog::recommend_courses`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// `0` is female, `1` is male.
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Gender::Female),
            1 => Some(Gender::Male),
            _ => None,
        }
    }

    pub fn flag(&self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }
}
