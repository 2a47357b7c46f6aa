use chrono::NaiveDate;

use super::error::{CalendarError, Result};

/// Returns every date from `start` to `end`, both inclusive.
///
/// A reversed range is an error rather than an empty sequence.
pub fn expand_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if start > end {
        return Err(CalendarError::InvalidRange { start, end });
    }

    let dates: Vec<NaiveDate> = start.iter_days().take_while(|date| *date <= end).collect();

    tracing::trace!(%start, %end, days = dates.len(), "Expanded date range");

    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_expand_range_inclusive() {
        let dates = expand_range(make_date(2018, 2, 5), make_date(2018, 2, 14)).unwrap();

        assert_eq!(dates.len(), 10);
        assert_eq!(dates[0], make_date(2018, 2, 5));
        assert_eq!(dates[9], make_date(2018, 2, 14));
        assert!(dates.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
    }

    #[test]
    fn test_expand_range_single_day() {
        let day = make_date(2018, 7, 21);
        assert_eq!(expand_range(day, day).unwrap(), vec![day]);
    }

    #[test]
    fn test_expand_range_crosses_month_and_leap_day() {
        let dates = expand_range(make_date(2020, 2, 27), make_date(2020, 3, 2)).unwrap();

        assert_eq!(dates.len(), 5);
        assert_eq!(dates[2], make_date(2020, 2, 29));
        assert_eq!(dates[3], make_date(2020, 3, 1));
    }

    #[test]
    fn test_expand_range_reversed_fails() {
        let start = make_date(2018, 2, 14);
        let end = make_date(2018, 2, 5);

        assert_eq!(
            expand_range(start, end),
            Err(CalendarError::InvalidRange { start, end })
        );
    }
}
