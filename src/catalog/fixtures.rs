// Shared builders for unit tests.

use chrono::NaiveDate;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use super::{Catalog, CourseSession};

pub const HEADER: &str = "Institution,Course Number,Launch Date,Course Title,Instructors,Course Subject,Year,Honor Code Certificates,Participants (Course Content Accessed),Audited (> 50% Course Content Accessed),Certified,% Audited,% Certified,% Certified of > 50% Course Content Accessed,% Played Video,% Posted in Forum,% Grade Higher Than Zero,Total Course Hours (Thousands),Median Hours for Certification,Median Age,% Male,% Female,% Bachelor's Degree or Higher";

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,course_analyzer=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// A session with zeroed metrics and a fixed launch date.
pub fn session(institution: &str, number: &str, title: &str, instructors: &str) -> CourseSession {
    CourseSession {
        institution: institution.into(),
        course_number: number.into(),
        launch_date: date("2013-01-01"),
        title: title.into(),
        instructors: instructors.into(),
        subject: "Computer Science".into(),
        year: 1,
        honor_code: 1,
        participants: 0,
        audited: 0,
        certified: 0,
        percent_audited: 0.0,
        percent_certified: 0.0,
        percent_certified_50: 0.0,
        percent_video: 0.0,
        percent_forum: 0.0,
        grade_higher_zero: 0.0,
        total_hours: 0.0,
        median_hours_certification: 0.0,
        median_age: 0.0,
        percent_male: 0.0,
        percent_female: 0.0,
        percent_degree: 0.0,
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date")
}

pub fn catalog(sessions: Vec<CourseSession>) -> Catalog {
    Catalog::from_sessions(sessions)
}

/// Render one data line in the catalog's CSV layout.
#[allow(clippy::too_many_arguments)]
pub fn csv_line(
    institution: &str,
    number: &str,
    launch: &str,
    title: &str,
    instructors: &str,
    subject: &str,
    participants: i64,
    total_hours: f64,
) -> String {
    format!(
        "{},{},{},{},{},{},2013,1,{},10,5,12.5,4.1,30.0,80.0,5.5,20.0,{},40.0,27.0,70.0,30.0,60.0",
        institution,
        number,
        launch,
        quote(title),
        quote(instructors),
        quote(subject),
        participants,
        total_hours
    )
}

fn quote(field: &str) -> String {
    if field.contains(',') && !field.starts_with('"') {
        format!("\"{}\"", field)
    } else {
        field.to_string()
    }
}
