use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when configuring, building or annotating calendars.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Invalid year (expected 4 digits): {0}")]
    InvalidYear(String),
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),
    #[error("Unknown calendar option: {0}")]
    UnknownOption(String),
    #[error("Invalid calendar options: {0}")]
    InvalidOptions(String),
    #[error("Month grid for {year}-{month:02} ran out of cells before the last day")]
    IncompleteGrid { year: i32, month: u32 },
}

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;
