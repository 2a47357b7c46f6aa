//! Calendar configuration with validation.

use chrono::{Datelike, Local, Month, Weekday};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::{CalendarError, Result};
use super::parse::{month_from_number, parse_month, parse_weekday, validate_year};
use super::types::GridKey;

pub const DEFAULT_HIGHLIGHT_CLASS: &str = "primary";
pub const DEFAULT_BANK_HOLIDAY_CLASS: &str = "bankholidays";
pub const DEFAULT_OTHER_DATE_CLASS: &str = "danger";
pub const DEFAULT_PUBLIC_HOLIDAY_TERM: &str = "Bank holiday";

/// Settings for one render pass. Immutable once rendering begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    pub year: i32,
    /// Month rendered when no month is requested explicitly.
    pub month: Month,
    /// Weekday shown in the first grid column.
    pub week_starts_on: Weekday,
    /// When false, annotations landing on Saturday or Sunday are not styled.
    pub show_weekends: bool,
    /// When false, cells after the month's last day are left blank.
    pub show_trailing_days: bool,
    pub highlight_class: String,
    pub bank_holiday_class: String,
    pub other_date_class: String,
    /// Tooltip for bank holidays added without a label.
    pub public_holiday_term: String,
}

impl CalendarConfig {
    /// Creates a configuration for `year`, or the current year when `None`.
    /// The default month is the current month.
    pub fn new(year: Option<i32>) -> Result<Self> {
        let today = Local::now();
        let year = match year {
            Some(year) => validate_year(year)?,
            None => today.year(),
        };

        Ok(Self {
            year,
            month: month_from_number(today.month())?,
            week_starts_on: Weekday::Mon,
            show_weekends: true,
            show_trailing_days: true,
            highlight_class: DEFAULT_HIGHLIGHT_CLASS.to_string(),
            bank_holiday_class: DEFAULT_BANK_HOLIDAY_CLASS.to_string(),
            other_date_class: DEFAULT_OTHER_DATE_CLASS.to_string(),
            public_holiday_term: DEFAULT_PUBLIC_HOLIDAY_TERM.to_string(),
        })
    }

    /// Applies an options mapping on top of this configuration.
    pub fn with_options(mut self, options: CalendarOptions) -> Result<Self> {
        if let Some(year) = options.year {
            self.year = validate_year(year)?;
        }
        if let Some(month) = options.month {
            self.month = parse_month(&month)?;
        }
        if let Some(day) = options.week_starts_on {
            self.week_starts_on = parse_weekday(&day)?;
        }
        if let Some(show) = options.show_weekends {
            self.show_weekends = show;
        }
        if let Some(show) = options.show_trailing_days {
            self.show_trailing_days = show;
        }
        if let Some(class) = options.highlight_class {
            self.highlight_class = class;
        }
        if let Some(class) = options.bank_holiday_class {
            self.bank_holiday_class = class;
        }
        if let Some(class) = options.other_date_class {
            self.other_date_class = class;
        }
        if let Some(term) = options.public_holiday_term {
            self.public_holiday_term = term;
        }
        Ok(self)
    }

    pub fn with_month(mut self, month: Month) -> Self {
        self.month = month;
        self
    }

    pub fn with_week_starts_on(mut self, weekday: Weekday) -> Self {
        self.week_starts_on = weekday;
        self
    }

    pub fn with_show_weekends(mut self, show: bool) -> Self {
        self.show_weekends = show;
        self
    }

    pub fn with_show_trailing_days(mut self, show: bool) -> Self {
        self.show_trailing_days = show;
        self
    }

    pub fn with_highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = class.into();
        self
    }

    pub fn with_bank_holiday_class(mut self, class: impl Into<String>) -> Self {
        self.bank_holiday_class = class.into();
        self
    }

    pub fn with_other_date_class(mut self, class: impl Into<String>) -> Self {
        self.other_date_class = class.into();
        self
    }

    pub fn with_public_holiday_term(mut self, term: impl Into<String>) -> Self {
        self.public_holiday_term = term.into();
        self
    }

    /// The inputs the month grids depend on.
    pub fn grid_key(&self) -> GridKey {
        GridKey {
            year: self.year,
            week_starts_on: self.week_starts_on,
            show_trailing_days: self.show_trailing_days,
        }
    }
}

/// Optional overrides for a [`CalendarConfig`], typically read from JSON.
///
/// Unknown keys are rejected. camelCase aliases are accepted for every key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarOptions {
    #[serde(default)]
    pub year: Option<i32>,
    /// Month number or English name.
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default, alias = "weekStartsOn")]
    pub week_starts_on: Option<String>,
    #[serde(default, alias = "isWeekends")]
    pub show_weekends: Option<bool>,
    #[serde(default, alias = "isTrailingDays")]
    pub show_trailing_days: Option<bool>,
    #[serde(default, alias = "highlightClass")]
    pub highlight_class: Option<String>,
    #[serde(default, alias = "bankHolidayClass")]
    pub bank_holiday_class: Option<String>,
    #[serde(default, alias = "otherDateClass")]
    pub other_date_class: Option<String>,
    #[serde(default, alias = "publicHolidayTerm")]
    pub public_holiday_term: Option<String>,
}

/// Every key [`CalendarOptions`] accepts, aliases included.
const OPTION_KEYS: &[&str] = &[
    "year",
    "month",
    "week_starts_on",
    "weekStartsOn",
    "show_weekends",
    "isWeekends",
    "show_trailing_days",
    "isTrailingDays",
    "highlight_class",
    "highlightClass",
    "bank_holiday_class",
    "bankHolidayClass",
    "other_date_class",
    "otherDateClass",
    "public_holiday_term",
    "publicHolidayTerm",
];

impl CalendarOptions {
    /// Parses options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let object: Map<String, Value> = serde_json::from_str(json)
            .map_err(|e| CalendarError::InvalidOptions(e.to_string()))?;

        if let Some(key) = object
            .keys()
            .find(|key| !OPTION_KEYS.contains(&key.as_str()))
        {
            return Err(CalendarError::UnknownOption(key.clone()));
        }

        serde_json::from_value(Value::Object(object))
            .map_err(|e| CalendarError::InvalidOptions(e.to_string()))
    }
}
