// src/catalog/parse.rs
use std::str::FromStr;

use csv::StringRecord;

use super::date_parser::parse_launch_date;
use super::types::CourseSession;
use crate::error::CatalogError;

/// Number of positional fields in every data line.
pub const FIELD_COUNT: usize = 23;

const COLUMNS: [&str; FIELD_COUNT] = [
    "institution",
    "course number",
    "launch date",
    "course title",
    "instructors",
    "course subject",
    "year",
    "honor code certificates",
    "participants",
    "audited",
    "certified",
    "% audited",
    "% certified",
    "% certified of > 50% course content accessed",
    "% played video",
    "% posted in forum",
    "% grade higher than zero",
    "total course hours",
    "median hours for certification",
    "median age",
    "% male",
    "% female",
    "% bachelor's degree or higher",
];

/// Turn one CSV record into a session. Field text is taken as the reader
/// delivers it, with the wrapping quotes already removed.
pub fn parse_record(record: &StringRecord, line: u64) -> Result<CourseSession, CatalogError> {
    if record.len() != FIELD_COUNT {
        return Err(CatalogError::malformed(
            line,
            format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
        ));
    }

    let text = |idx: usize| record.get(idx).unwrap_or_default().to_string();
    let launch_raw = record.get(2).unwrap_or_default();
    let launch_date = parse_launch_date(launch_raw).ok_or_else(|| {
        CatalogError::malformed(line, format!("unparseable launch date `{}`", launch_raw))
    })?;

    Ok(CourseSession {
        institution: text(0),
        course_number: text(1),
        launch_date,
        title: text(3),
        instructors: text(4),
        subject: text(5),
        year: field(record, 6, line)?,
        honor_code: field(record, 7, line)?,
        participants: field(record, 8, line)?,
        audited: field(record, 9, line)?,
        certified: field(record, 10, line)?,
        percent_audited: field(record, 11, line)?,
        percent_certified: field(record, 12, line)?,
        percent_certified_50: field(record, 13, line)?,
        percent_video: field(record, 14, line)?,
        percent_forum: field(record, 15, line)?,
        grade_higher_zero: field(record, 16, line)?,
        total_hours: field(record, 17, line)?,
        median_hours_certification: field(record, 18, line)?,
        median_age: field(record, 19, line)?,
        percent_male: field(record, 20, line)?,
        percent_female: field(record, 21, line)?,
        percent_degree: field(record, 22, line)?,
    })
}

fn field<T: FromStr>(record: &StringRecord, idx: usize, line: u64) -> Result<T, CatalogError> {
    let raw = record.get(idx).unwrap_or_default();
    raw.trim().parse::<T>().map_err(|_| {
        CatalogError::malformed(
            line,
            format!("column `{}` has non-numeric value `{}`", COLUMNS[idx], raw),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    const ROW: [&str; FIELD_COUNT] = [
        "MITx",
        "6.002x",
        "09/05/2012",
        "Circuits and Electronics",
        "Khurram Afridi",
        "Science, Technology, Engineering, and Mathematics",
        "1",
        "1",
        "36105",
        "5431",
        "3003",
        "15.04",
        "8.32",
        "54.98",
        "83.2",
        "8.17",
        "28.97",
        "418.94",
        "64.45",
        "26.0",
        "88.28",
        "11.72",
        "60.68",
    ];

    #[test]
    fn parses_a_full_row() {
        let s = parse_record(&record(&ROW), 2).unwrap();
        assert_eq!(s.institution, "MITx");
        assert_eq!(s.course_number, "6.002x");
        assert_eq!(s.launch_date, NaiveDate::from_ymd_opt(2012, 9, 5).unwrap());
        assert_eq!(s.participants, 36105);
        assert_eq!(s.total_hours, 418.94);
        assert_eq!(s.percent_degree, 60.68);
        assert_eq!(
            s.subject,
            "Science, Technology, Engineering, and Mathematics"
        );
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let err = parse_record(&record(&ROW[..22]), 7).unwrap_err();
        match err {
            CatalogError::Malformed { line, reason } => {
                assert_eq!(line, 7);
                assert!(reason.contains("expected 23"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_is_malformed() {
        let mut row = ROW;
        row[8] = "lots";
        let err = parse_record(&record(&row), 3).unwrap_err();
        assert!(err.to_string().contains("participants"), "{err}");
    }

    #[test]
    fn bad_date_is_malformed() {
        let mut row = ROW;
        row[2] = "someday";
        let err = parse_record(&record(&row), 3).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { line: 3, .. }));
    }
}
