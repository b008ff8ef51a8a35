// src/query/instructors.rs
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;

/// Titles taught by one instructor, split by whether they taught alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstructorCourses {
    /// Sorted, duplicate-free titles of sessions taught alone.
    pub solo: Vec<String>,
    /// Sorted, duplicate-free titles of sessions shared with co-instructors.
    pub co_taught: Vec<String>,
}

#[derive(Default)]
struct Titles<'a> {
    solo: BTreeSet<&'a str>,
    co_taught: BTreeSet<&'a str>,
}

impl Catalog {
    /// Every distinct instructor name with their solo and co-taught titles.
    ///
    /// Names are compared exactly, so `"Ann Lee"` and `"ann lee"` are two
    /// different instructors.
    pub fn courses_by_instructor(&self) -> BTreeMap<String, InstructorCourses> {
        let mut by_name: BTreeMap<&str, Titles<'_>> = BTreeMap::new();
        for s in self.sessions() {
            if s.is_co_taught() {
                for name in s.instructor_names() {
                    by_name.entry(name).or_default().co_taught.insert(&s.title);
                }
            } else {
                by_name
                    .entry(s.instructors.as_str())
                    .or_default()
                    .solo
                    .insert(&s.title);
            }
        }

        debug!(instructors = by_name.len(), "courses by instructor");
        by_name
            .into_iter()
            .map(|(name, titles)| {
                (
                    name.to_string(),
                    InstructorCourses {
                        solo: titles.solo.into_iter().map(String::from).collect(),
                        co_taught: titles.co_taught.into_iter().map(String::from).collect(),
                    },
                )
            })
            .collect()
    }
}
