// src/catalog/types.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One offering (edition) of a course, as read from a single data line.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CourseSession {
    pub institution: String,
    /// Shared by every edition of the same course family.
    pub course_number: String,
    pub launch_date: NaiveDate,
    pub title: String,
    /// One name, or several joined by `", "`.
    pub instructors: String,
    pub subject: String,
    pub year: i32,
    pub honor_code: i32,
    pub participants: i64,
    pub audited: i64,
    pub certified: i64,
    pub percent_audited: f64,
    pub percent_certified: f64,
    pub percent_certified_50: f64,
    pub percent_video: f64,
    pub percent_forum: f64,
    pub grade_higher_zero: f64,
    pub total_hours: f64,
    pub median_hours_certification: f64,
    pub median_age: f64,
    pub percent_male: f64,
    pub percent_female: f64,
    pub percent_degree: f64,
}

impl CourseSession {
    /// Strip the quoting artifact left on the free-text columns.
    pub(crate) fn normalize(mut self) -> Self {
        self.title = strip_quote(&self.title);
        self.instructors = strip_quote(&self.instructors);
        self.subject = strip_quote(&self.subject);
        self
    }

    /// True when the session lists more than one instructor.
    pub fn is_co_taught(&self) -> bool {
        self.instructors.contains(INSTRUCTOR_SEPARATOR)
    }

    /// The individual instructor names of this session.
    pub fn instructor_names(&self) -> impl Iterator<Item = &str> {
        self.instructors.split(INSTRUCTOR_SEPARATOR)
    }
}

pub const INSTRUCTOR_SEPARATOR: &str = ", ";

/// Drop one leading and one trailing `"` if present. Inner quotes are kept.
pub fn strip_quote(raw: &str) -> String {
    let s = raw.strip_prefix('"').unwrap_or(raw);
    let s = s.strip_suffix('"').unwrap_or(s);
    s.to_string()
}
