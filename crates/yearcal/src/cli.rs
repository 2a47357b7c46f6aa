//! Command-line interface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use yearcal_core::calendar::{
    parse_weekday, parse_year, AnnotationSet, CalendarConfig, CalendarError, CalendarOptions,
};

use crate::Calendar;

/// yearcal - render a year or month calendar as Bootstrap table markup
#[derive(Parser, Debug)]
#[command(name = "yearcal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Four-digit year to render (defaults to the current year)
    #[arg(long, short, env = "YEARCAL_YEAR")]
    pub year: Option<String>,

    /// Render a single month (1-12 or name) instead of the whole year
    #[arg(long, short)]
    pub month: Option<String>,

    /// Weekday shown in the first column
    #[arg(long, env = "YEARCAL_WEEK_STARTS_ON")]
    pub week_starts_on: Option<String>,

    /// Do not style annotations that fall on Saturday or Sunday
    #[arg(long)]
    pub hide_weekends: bool,

    /// Leave cells after the month's last day blank
    #[arg(long)]
    pub hide_trailing_days: bool,

    /// Highlight a date, optionally with a tooltip label
    #[arg(long = "highlight", value_name = "DATE[=LABEL]")]
    pub highlights: Vec<String>,

    /// Highlight an inclusive date range, optionally with a tooltip label
    #[arg(long = "range", value_name = "START..END[=LABEL]")]
    pub ranges: Vec<String>,

    /// Mark a bank holiday, optionally with a tooltip label
    #[arg(long = "bank-holiday", value_name = "DATE[=LABEL]")]
    pub bank_holidays: Vec<String>,

    /// Mark a date in the "other" category
    #[arg(long = "other", value_name = "DATE")]
    pub other_dates: Vec<String>,

    /// JSON file of calendar options; command-line flags take precedence
    #[arg(long, env = "YEARCAL_OPTIONS")]
    pub options: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the configuration: defaults, then the options file, then flags.
    pub fn config(&self) -> Result<CalendarConfig> {
        let year = self.year.as_deref().map(parse_year).transpose()?;
        let mut config = CalendarConfig::new(year)?;

        if let Some(path) = &self.options {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file {}", path.display()))?;
            let options = CalendarOptions::from_json(&json)?;
            config = config.with_options(options)?;
            // An explicit --year still wins over the file.
            if let Some(year) = year {
                config.year = year;
            }
        }

        if let Some(day) = &self.week_starts_on {
            config = config.with_week_starts_on(parse_weekday(day)?);
        }
        if self.hide_weekends {
            config = config.with_show_weekends(false);
        }
        if self.hide_trailing_days {
            config = config.with_show_trailing_days(false);
        }

        Ok(config)
    }

    /// Collects every annotation flag into a set.
    pub fn annotations(&self) -> Result<AnnotationSet> {
        let mut annotations = AnnotationSet::new();

        for arg in &self.highlights {
            let (date, label) = split_label(arg);
            annotations.add_highlight(date, label)?;
        }
        for arg in &self.ranges {
            let (start, end, label) = parse_range_arg(arg)?;
            annotations.add_date_range(start, end, label)?;
        }
        for arg in &self.bank_holidays {
            let (date, label) = split_label(arg);
            annotations.add_bank_holiday(date, label)?;
        }
        annotations.add_other_dates(&self.other_dates)?;

        Ok(annotations)
    }

    /// Builds the calendar and renders the requested month or year.
    pub fn render(&self) -> Result<String> {
        let config = self.config()?;
        tracing::info!(
            year = config.year,
            week_starts_on = %config.week_starts_on,
            "Rendering calendar"
        );

        let calendar = Calendar::new(config).with_annotations(self.annotations()?);
        let html = match self.month.as_deref() {
            Some(month) => calendar.render_month(month)?,
            None => calendar.render_year()?,
        };
        Ok(html)
    }
}

/// Splits `DATE=LABEL` at the first `=`. A missing or empty label is `None`.
pub fn split_label(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once('=') {
        Some((date, label)) if !label.is_empty() => (date, Some(label)),
        Some((date, _)) => (date, None),
        None => (arg, None),
    }
}

/// Parses `START..END[=LABEL]`.
pub fn parse_range_arg(arg: &str) -> std::result::Result<(&str, &str, Option<&str>), CalendarError> {
    let (span, label) = split_label(arg);
    span.split_once("..")
        .map(|(start, end)| (start, end, label))
        .ok_or_else(|| CalendarError::InvalidDate(arg.to_string()))
}
