// src/query/ranking.rs
use std::{cmp::Ordering, collections::BTreeSet, collections::HashSet};

use tracing::debug;

use super::SortKey;
use crate::catalog::{Catalog, CourseSession};
use crate::error::CatalogError;

impl Catalog {
    /// The `top_k` distinct titles ranked by `by` (`"hours"` or `"participants"`).
    ///
    /// An unknown `by` is an [`CatalogError::InvalidArgument`], which is not
    /// the same thing as an empty ranking.
    pub fn top_courses(&self, top_k: usize, by: &str) -> Result<Vec<String>, CatalogError> {
        let key: SortKey = by.parse()?;
        Ok(self.top_courses_by(top_k, key))
    }

    /// Sessions sorted by `key` descending, ties by title ascending, then
    /// reduced to the first occurrence of each title.
    pub fn top_courses_by(&self, top_k: usize, key: SortKey) -> Vec<String> {
        let mut ranked: Vec<&CourseSession> = self.sessions().iter().collect();
        ranked.sort_by(|a, b| compare_metric(a, b, key).then_with(|| a.title.cmp(&b.title)));

        let mut seen = HashSet::new();
        let titles: Vec<String> = ranked
            .into_iter()
            .map(|s| s.title.as_str())
            .filter(|t| seen.insert(*t))
            .take(top_k)
            .map(String::from)
            .collect();
        debug!(key = %key, top_k, returned = titles.len(), "top courses");
        titles
    }

    /// Distinct titles, ascending, of sessions whose subject contains
    /// `subject_fragment` (ignoring case), with `percent_audited` at least
    /// `min_percent_audited` and `total_hours` at most `max_total_hours`.
    pub fn search_courses(
        &self,
        subject_fragment: &str,
        min_percent_audited: f64,
        max_total_hours: f64,
    ) -> Vec<String> {
        let needle = subject_fragment.to_lowercase();
        let titles: BTreeSet<&str> = self
            .sessions()
            .iter()
            .filter(|s| s.subject.to_lowercase().contains(&needle))
            .filter(|s| s.percent_audited >= min_percent_audited)
            .filter(|s| s.total_hours <= max_total_hours)
            .map(|s| s.title.as_str())
            .collect();
        debug!(
            fragment = subject_fragment,
            matches = titles.len(),
            "search courses"
        );
        titles.into_iter().map(String::from).collect()
    }
}

/// Descending order on the chosen metric.
fn compare_metric(a: &CourseSession, b: &CourseSession, key: SortKey) -> Ordering {
    match key {
        SortKey::Hours => b.total_hours.total_cmp(&a.total_hours),
        SortKey::Participants => b.participants.cmp(&a.participants),
    }
}
