// src/query/recommend.rs
use std::collections::BTreeMap;

use tracing::debug;

use super::similarity::{DemographicMeans, Profile};
use super::Gender;
use crate::catalog::{Catalog, CourseSession};

/// Maximum number of titles returned by a recommendation.
pub const RECOMMENDATION_LIMIT: usize = 10;

/// Per course family: demographic sums plus the most recently launched session.
struct Family<'a> {
    means: DemographicMeans,
    latest: &'a CourseSession,
}

impl Catalog {
    /// Up to ten titles whose course families' audiences sit closest to the
    /// given learner, nearest first, ties by title.
    ///
    /// A family is named by the title of its latest session (first in input
    /// order on equal dates). When several families share that title the
    /// smallest distance wins.
    pub fn recommend_courses(
        &self,
        age: i32,
        gender: Gender,
        bachelor_or_higher: bool,
    ) -> Vec<String> {
        let profile = Profile::new(age, gender.flag(), bachelor_or_higher);

        let mut families: BTreeMap<&str, Family<'_>> = BTreeMap::new();
        for s in self.sessions() {
            let family = families
                .entry(s.course_number.as_str())
                .or_insert_with(|| Family {
                    means: DemographicMeans::default(),
                    latest: s,
                });
            family.means.add(s);
            if s.launch_date > family.latest.launch_date {
                family.latest = s;
            }
        }

        let mut best: BTreeMap<&str, f64> = BTreeMap::new();
        for family in families.values() {
            let distance = family.means.distance(&profile);
            best.entry(family.latest.title.as_str())
                .and_modify(|d| {
                    if distance < *d {
                        *d = distance;
                    }
                })
                .or_insert(distance);
        }

        let mut ranked: Vec<(&str, f64)> = best.into_iter().collect();
        // titles arrive ascending, so a stable sort on distance keeps the title tie-break
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

        debug!(
            families = families.len(),
            titles = ranked.len(),
            "recommend courses"
        );
        ranked
            .into_iter()
            .take(RECOMMENDATION_LIMIT)
            .map(|(title, _)| title.to_string())
            .collect()
    }
}
