// src/catalog/mod.rs
use std::{
    collections::BTreeSet,
    fs::File,
    io::{BufReader, Read},
    path::Path,
    time::Instant,
};

use csv::ReaderBuilder;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::CatalogError;

pub mod date_parser;
pub mod parse;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use types::{strip_quote, CourseSession, INSTRUCTOR_SEPARATOR};

/// An immutable, input-ordered collection of course sessions.
///
/// Built once, then queried any number of times. Every query scans the
/// full set of sessions; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sessions: Vec<CourseSession>,
}

/// Headline counts for a loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub sessions: usize,
    pub institutions: usize,
    pub course_families: usize,
    pub instructors: usize,
}

impl Catalog {
    /// Build a catalog from already-typed sessions, keeping their order.
    /// Title, instructors and subject lose one surrounding quote pair each.
    ///
    /// Sessions read by [`Catalog::from_reader`] skip this step: the CSV
    /// reader has already removed the wrapping quotes.
    pub fn from_sessions(sessions: Vec<CourseSession>) -> Self {
        let sessions = sessions.into_iter().map(CourseSession::normalize).collect();
        Self { sessions }
    }

    /// Load the CSV file at `path`. The first line is a header and is skipped.
    #[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let source_name = path.as_ref().display().to_string();
        let file = File::open(&path).map_err(|source| CatalogError::Io {
            source_name: source_name.clone(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), &source_name)
    }

    /// Load CSV data from any reader. `source_name` only labels errors.
    ///
    /// Any malformed line aborts the whole load.
    pub fn from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self, CatalogError> {
        let start = Instant::now();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // field count is checked per record for a better message
            .from_reader(reader);

        let mut sessions = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| CatalogError::from_csv(e, source_name))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            sessions.push(parse::parse_record(&record, line)?);
        }

        let catalog = Self { sessions };
        info!(
            source = source_name,
            sessions = catalog.len(),
            elapsed = ?start.elapsed(),
            "loaded course catalog"
        );
        Ok(catalog)
    }

    /// All sessions in input order.
    pub fn sessions(&self) -> &[CourseSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn summary(&self) -> CatalogSummary {
        let institutions: BTreeSet<&str> =
            self.sessions.iter().map(|s| s.institution.as_str()).collect();
        let families: BTreeSet<&str> = self
            .sessions
            .iter()
            .map(|s| s.course_number.as_str())
            .collect();
        let instructors: BTreeSet<&str> = self
            .sessions
            .iter()
            .flat_map(|s| s.instructor_names())
            .collect();

        let summary = CatalogSummary {
            sessions: self.sessions.len(),
            institutions: institutions.len(),
            course_families: families.len(),
            instructors: instructors.len(),
        };
        debug!(?summary, "catalog summary");
        summary
    }
}
