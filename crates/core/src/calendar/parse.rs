//! Normalization of loosely formatted calendar inputs.
//!
//! Every date that enters an annotation set goes through [`parse_date`], so
//! two spellings of the same day always collapse onto one `NaiveDate` key.

use chrono::{DateTime, Month, NaiveDate, NaiveDateTime, Weekday};

use super::error::{CalendarError, Result};

/// Date-only formats tried in order. None of them is ambiguous between
/// day-first and month-first readings.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%A %d %B %Y",
];

/// Date-time formats; the time of day is discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses any unambiguous date representation into a calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let invalid = || CalendarError::InvalidDate(input.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Some(date) = parse_compact(trimmed) {
        return Ok(date);
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|datetime| datetime.date_naive())
        .map_err(|_| invalid())
}

/// `YYYYMMDD` with no separators.
fn parse_compact(input: &str) -> Option<NaiveDate> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = input[..4].parse().ok()?;
    let month = input[4..6].parse().ok()?;
    let day = input[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a 4-digit year.
pub fn parse_year(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::InvalidYear(input.to_string()));
    }
    let year = trimmed
        .parse()
        .map_err(|_| CalendarError::InvalidYear(input.to_string()))?;
    validate_year(year)
}

/// Checks that a numeric year has exactly four digits.
pub fn validate_year(year: i32) -> Result<i32> {
    if (1000..=9999).contains(&year) {
        Ok(year)
    } else {
        Err(CalendarError::InvalidYear(year.to_string()))
    }
}

/// Parses a weekday name or abbreviation, case-insensitively.
pub fn parse_weekday(input: &str) -> Result<Weekday> {
    input
        .trim()
        .parse()
        .map_err(|_| CalendarError::InvalidWeekday(input.to_string()))
}

/// Parses a month number (1-12) or an English month name or abbreviation.
pub fn parse_month(input: &str) -> Result<Month> {
    let trimmed = input.trim();
    if let Ok(number) = trimmed.parse::<u32>() {
        return month_from_number(number);
    }
    trimmed
        .parse()
        .map_err(|_| CalendarError::InvalidMonth(input.to_string()))
}

/// Converts a 1-based month number into a `Month`.
pub fn month_from_number(number: u32) -> Result<Month> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .ok_or_else(|| CalendarError::InvalidMonth(number.to_string()))
}

/// Conversion of caller-supplied values into a calendar date.
///
/// Implemented for text (parsed with [`parse_date`]) and for chrono values,
/// so the annotation API accepts either without separate entry points.
pub trait IntoDate {
    fn into_date(self) -> Result<NaiveDate>;
}

impl IntoDate for NaiveDate {
    fn into_date(self) -> Result<NaiveDate> {
        Ok(self)
    }
}

impl IntoDate for &NaiveDate {
    fn into_date(self) -> Result<NaiveDate> {
        Ok(*self)
    }
}

impl IntoDate for NaiveDateTime {
    fn into_date(self) -> Result<NaiveDate> {
        Ok(self.date())
    }
}

impl IntoDate for &str {
    fn into_date(self) -> Result<NaiveDate> {
        parse_date(self)
    }
}

impl IntoDate for String {
    fn into_date(self) -> Result<NaiveDate> {
        parse_date(&self)
    }
}

impl IntoDate for &String {
    fn into_date(self) -> Result<NaiveDate> {
        parse_date(self)
    }
}

/// Conversion of a month number, name or `Month` into a `Month`.
pub trait IntoMonth {
    fn into_month(self) -> Result<Month>;
}

impl IntoMonth for Month {
    fn into_month(self) -> Result<Month> {
        Ok(self)
    }
}

impl IntoMonth for u32 {
    fn into_month(self) -> Result<Month> {
        month_from_number(self)
    }
}

impl IntoMonth for &str {
    fn into_month(self) -> Result<Month> {
        parse_month(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(parse_date("2018-02-05").unwrap(), make_date(2018, 2, 5));
        assert_eq!(parse_date("  2018-02-05 ").unwrap(), make_date(2018, 2, 5));
    }

    #[test]
    fn test_parse_date_alternate_forms() {
        let expected = make_date(2018, 7, 21);

        assert_eq!(parse_date("2018/07/21").unwrap(), expected);
        assert_eq!(parse_date("20180721").unwrap(), expected);
        assert_eq!(parse_date("21 July 2018").unwrap(), expected);
        assert_eq!(parse_date("21 Jul 2018").unwrap(), expected);
        assert_eq!(parse_date("July 21, 2018").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_discards_time() {
        let expected = make_date(2018, 2, 5);

        assert_eq!(parse_date("2018-02-05T23:59:00").unwrap(), expected);
        assert_eq!(parse_date("2018-02-05 08:30").unwrap(), expected);
        assert_eq!(parse_date("2018-02-05T10:00:00+02:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(
            parse_date("next tuesday-ish"),
            Err(CalendarError::InvalidDate("next tuesday-ish".to_string()))
        );
        assert!(parse_date("").is_err());
        assert!(parse_date("2018-02-30").is_err());
        assert!(parse_date("20181301").is_err());
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2018").unwrap(), 2018);
        assert!(matches!(parse_year("18"), Err(CalendarError::InvalidYear(_))));
        assert!(matches!(parse_year("20x8"), Err(CalendarError::InvalidYear(_))));
        assert!(matches!(parse_year("0999"), Err(CalendarError::InvalidYear(_))));
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("Sunday").unwrap(), Weekday::Sun);
        assert_eq!(parse_weekday("mon").unwrap(), Weekday::Mon);
        assert!(matches!(
            parse_weekday("Caturday"),
            Err(CalendarError::InvalidWeekday(_))
        ));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2").unwrap(), Month::February);
        assert_eq!(parse_month("February").unwrap(), Month::February);
        assert_eq!(parse_month("dec").unwrap(), Month::December);
        assert!(matches!(parse_month("13"), Err(CalendarError::InvalidMonth(_))));
        assert!(matches!(parse_month("0"), Err(CalendarError::InvalidMonth(_))));
        assert!(matches!(parse_month("Smarch"), Err(CalendarError::InvalidMonth(_))));
    }

    #[test]
    fn test_into_month_variants() {
        assert_eq!(Month::July.into_month().unwrap(), Month::July);
        assert_eq!(7u32.into_month().unwrap(), Month::July);
        assert_eq!("July".into_month().unwrap(), Month::July);
        assert!(matches!(
            0u32.into_month(),
            Err(CalendarError::InvalidMonth(_))
        ));
    }

    #[test]
    fn test_into_date_variants() {
        let date = make_date(2018, 2, 5);

        assert_eq!(date.into_date().unwrap(), date);
        assert_eq!("2018-02-05".into_date().unwrap(), date);
        assert_eq!(String::from("2018-02-05").into_date().unwrap(), date);
    }
}
