use chrono::NaiveDate;

/// Parse a launch date. The catalog writes `MM/DD/YYYY` (padding optional);
/// ISO-style `YYYY-MM-DD` and `YYYY/MM/DD` are accepted too.
pub fn parse_launch_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim().trim_matches('"');
    // minimal length check, shortest form is `M/D/YYYY`
    if s.len() < 8 {
        return None;
    }
    let bytes = s.as_bytes();
    let year_first = bytes[..4].iter().all(u8::is_ascii_digit);
    let fmt = match (year_first, bytes[4]) {
        (true, b'-') => "%Y-%m-%d",
        (true, b'/') => "%Y/%m/%d",
        (false, _) if s.contains('/') => "%m/%d/%Y",
        _ => return None,
    };
    NaiveDate::parse_from_str(s, fmt).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_catalog_and_iso_forms() {
        let want = ymd(2012, 9, 5);
        assert_eq!(parse_launch_date("09/05/2012"), Some(want));
        assert_eq!(parse_launch_date("9/5/2012"), Some(want));
        assert_eq!(parse_launch_date("2012-09-05"), Some(want));
        assert_eq!(parse_launch_date("2012/09/05"), Some(want));
        assert_eq!(parse_launch_date("\"09/05/2012\""), Some(want));
        assert_eq!(parse_launch_date("10/5/2012"), Some(ymd(2012, 10, 5)));
        assert_eq!(parse_launch_date("1/15/2013"), Some(ymd(2013, 1, 15)));
        assert_eq!(parse_launch_date("12/5/2012"), Some(ymd(2012, 12, 5)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_launch_date(""), None);
        assert_eq!(parse_launch_date("yesterday"), None);
        assert_eq!(parse_launch_date("13/45/2012"), None);
        assert_eq!(parse_launch_date("2012-02-30"), None);
        assert_eq!(parse_launch_date("2012.09.05"), None);
    }
}
