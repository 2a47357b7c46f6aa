//! Caller-supplied dates of interest.
//!
//! The store only grows: entries are added during configuration and read
//! during rendering. A date may appear in several collections at once;
//! the classifier decides which one wins.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::error::Result;
use super::parse::IntoDate;
use super::range::expand_range;

/// Highlighted dates, bank holidays and other dates, keyed by calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    highlighted: BTreeMap<NaiveDate, Option<String>>,
    bank_holidays: BTreeMap<NaiveDate, Option<String>>,
    other_dates: BTreeSet<NaiveDate>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights a single date. Re-adding a date replaces its label.
    pub fn add_highlight(&mut self, date: impl IntoDate, label: Option<&str>) -> Result<&mut Self> {
        let date = date.into_date()?;
        self.highlighted.insert(date, label.map(str::to_string));
        Ok(self)
    }

    /// Highlights several dates with the same label.
    ///
    /// Every input is parsed before anything is inserted, so a bad date
    /// leaves the store untouched.
    pub fn add_highlights<I>(&mut self, dates: I, label: Option<&str>) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: IntoDate,
    {
        let dates = collect_dates(dates)?;
        self.insert_highlights(dates, label);
        Ok(self)
    }

    /// Highlights every date from `start` to `end` inclusive.
    pub fn add_date_range(
        &mut self,
        start: impl IntoDate,
        end: impl IntoDate,
        label: Option<&str>,
    ) -> Result<&mut Self> {
        let dates = expand_range(start.into_date()?, end.into_date()?)?;
        self.insert_highlights(dates, label);
        Ok(self)
    }

    /// Flags a bank holiday. Unlabelled holidays use the configured term.
    #[doc(alias = "add_public_holiday")]
    pub fn add_bank_holiday(
        &mut self,
        date: impl IntoDate,
        label: Option<&str>,
    ) -> Result<&mut Self> {
        let date = date.into_date()?;
        self.bank_holidays.insert(date, label.map(str::to_string));
        Ok(self)
    }

    /// Flags several unlabelled bank holidays.
    pub fn add_bank_holidays<I>(&mut self, dates: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: IntoDate,
    {
        for date in collect_dates(dates)? {
            self.bank_holidays.insert(date, None);
        }
        Ok(self)
    }

    /// Flags a date in the "other" category.
    pub fn add_other_date(&mut self, date: impl IntoDate) -> Result<&mut Self> {
        self.other_dates.insert(date.into_date()?);
        Ok(self)
    }

    /// Flags several dates in the "other" category.
    pub fn add_other_dates<I>(&mut self, dates: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: IntoDate,
    {
        self.other_dates.extend(collect_dates(dates)?);
        Ok(self)
    }

    /// Returns the highlight entry for a date: `None` when not highlighted,
    /// `Some(None)` when highlighted without a label.
    pub fn highlight(&self, date: NaiveDate) -> Option<Option<&str>> {
        self.highlighted.get(&date).map(Option::as_deref)
    }

    /// Returns the bank holiday entry for a date, same shape as [`Self::highlight`].
    pub fn bank_holiday(&self, date: NaiveDate) -> Option<Option<&str>> {
        self.bank_holidays.get(&date).map(Option::as_deref)
    }

    pub fn is_highlighted(&self, date: NaiveDate) -> bool {
        self.highlighted.contains_key(&date)
    }

    pub fn is_bank_holiday(&self, date: NaiveDate) -> bool {
        self.bank_holidays.contains_key(&date)
    }

    pub fn is_other_date(&self, date: NaiveDate) -> bool {
        self.other_dates.contains(&date)
    }

    /// Highlighted dates in ascending order.
    pub fn highlighted_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.highlighted.keys().copied()
    }

    /// Bank holidays in ascending order.
    pub fn bank_holiday_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.bank_holidays.keys().copied()
    }

    /// Other dates in ascending order.
    pub fn other_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.other_dates.iter().copied()
    }

    /// Total number of entries across all three collections.
    pub fn len(&self) -> usize {
        self.highlighted.len() + self.bank_holidays.len() + self.other_dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert_highlights(&mut self, dates: Vec<NaiveDate>, label: Option<&str>) {
        tracing::debug!(count = dates.len(), label, "Adding highlighted dates");
        for date in dates {
            self.highlighted.insert(date, label.map(str::to_string));
        }
    }
}

fn collect_dates<I>(dates: I) -> Result<Vec<NaiveDate>>
where
    I: IntoIterator,
    I::Item: IntoDate,
{
    dates.into_iter().map(IntoDate::into_date).collect()
}
