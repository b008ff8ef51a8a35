// src/query/participants.rs
use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::catalog::{Catalog, CourseSession};

impl Catalog {
    /// Total participants per institution, keyed in ascending order.
    pub fn participants_by_institution(&self) -> BTreeMap<String, i64> {
        let totals = sum_participants(self.sessions(), |s| s.institution.clone());
        debug!(groups = totals.len(), "participants by institution");
        totals
    }

    /// Total participants per `"<institution>-<subject>"`.
    ///
    /// Ordered by total descending, then by key ascending.
    pub fn participants_by_institution_and_subject(&self) -> IndexMap<String, i64> {
        let totals = sum_participants(self.sessions(), |s| {
            format!("{}-{}", s.institution, s.subject)
        });

        let mut ranked: Vec<(String, i64)> = totals.into_iter().collect();
        // keys arrive ascending, so a stable sort on the total keeps the key tie-break
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        debug!(groups = ranked.len(), "participants by institution and subject");
        ranked.into_iter().collect()
    }
}

fn sum_participants<F>(sessions: &[CourseSession], key: F) -> BTreeMap<String, i64>
where
    F: Fn(&CourseSession) -> String,
{
    sessions.iter().fold(BTreeMap::new(), |mut acc, s| {
        *acc.entry(key(s)).or_insert(0) += s.participants;
        acc
    })
}
