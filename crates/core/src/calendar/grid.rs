//! Month grid construction.
//!
//! A month is laid out on a fixed 6x7 grid whose first column is the
//! configured week-start day. Cells are filled by a three-phase walk:
//! muted days from the previous month, the month's own days, then muted
//! continuation days.

use chrono::{Datelike, Days, Month, Months, NaiveDate, Weekday};

use super::error::{CalendarError, Result};
use super::parse::{month_from_number, validate_year};
use super::types::{CellPhase, GridCell, GridKey, MonthGrid, YearGrids, GRID_CELLS};

/// Builds the 42-cell grid for one month.
pub fn build_month(
    year: i32,
    month: Month,
    week_starts_on: Weekday,
    show_trailing_days: bool,
) -> Result<MonthGrid> {
    let year = validate_year(year)?;
    let month_number = month.number_from_month();
    let first = NaiveDate::from_ymd_opt(year, month_number, 1)
        .ok_or_else(|| CalendarError::InvalidMonth(month_number.to_string()))?;
    let last_day = days_in_month(first);
    let first_weekday = first.weekday();

    let mut cells = Vec::with_capacity(GRID_CELLS);
    let mut phase = CellPhase::Pre;
    let mut weekday = week_starts_on;
    let mut day = 1;

    for _ in 0..GRID_CELLS {
        match phase {
            CellPhase::Pre if weekday == first_weekday => {
                cells.push(GridCell::active(first, weekday));
                day = 2;
                phase = CellPhase::Active;
            }
            CellPhase::Pre => {
                // Lead cells always fall in the week before the 1st.
                let back = days_between(weekday, first_weekday);
                let number = first
                    .checked_sub_days(Days::new(back.into()))
                    .map(|date| date.day());
                cells.push(GridCell::muted(weekday, number, CellPhase::Pre));
            }
            CellPhase::Active => {
                let date = first.with_day(day).ok_or(CalendarError::IncompleteGrid {
                    year,
                    month: month_number,
                })?;
                cells.push(GridCell::active(date, weekday));
                if day == last_day {
                    day = 1;
                    phase = CellPhase::Post;
                } else {
                    day += 1;
                }
            }
            CellPhase::Post => {
                let number = show_trailing_days.then_some(day);
                cells.push(GridCell::muted(weekday, number, CellPhase::Post));
                day += 1;
            }
        }
        weekday = weekday.succ();
    }

    if phase != CellPhase::Post {
        return Err(CalendarError::IncompleteGrid {
            year,
            month: month_number,
        });
    }

    tracing::trace!(year, month = month_number, "Built month grid");

    Ok(MonthGrid {
        year,
        month,
        week_starts_on,
        cells,
    })
}

/// Builds all twelve month grids for a key.
pub fn build_year(key: GridKey) -> Result<YearGrids> {
    let months = (1..=12)
        .map(|number| {
            let month = month_from_number(number)?;
            build_month(key.year, month, key.week_starts_on, key.show_trailing_days)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        year = key.year,
        week_starts_on = %key.week_starts_on,
        show_trailing_days = key.show_trailing_days,
        "Built year grids"
    );

    Ok(YearGrids { key, months })
}

/// Number of days in the month starting at `first`.
pub fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

/// Days from `from` forward to `to`, in 0..7.
fn days_between(from: Weekday, to: Weekday) -> u32 {
    (to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7
}
