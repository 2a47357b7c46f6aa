use chrono::{Datelike, Month, NaiveDate, Weekday};

/// Number of cells in every month grid (6 rows of 7 days).
pub const GRID_CELLS: usize = 42;

/// Number of columns in a grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Where a grid cell sits relative to the rendered month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellPhase {
    /// Padding before the 1st, numbered from the previous month.
    Pre,
    /// A real day of the rendered month.
    Active,
    /// Padding after the last day.
    Post,
}

/// A single cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Weekday of the grid column this cell sits in.
    pub weekday: Weekday,
    /// Day number to display, if any.
    pub day: Option<u32>,
    /// Full calendar date. Only active cells carry one.
    pub date: Option<NaiveDate>,
    pub phase: CellPhase,
}

impl GridCell {
    /// Creates an active cell for a real day of the month.
    pub fn active(date: NaiveDate, weekday: Weekday) -> Self {
        Self {
            weekday,
            day: Some(date.day()),
            date: Some(date),
            phase: CellPhase::Active,
        }
    }

    /// Creates a muted padding cell.
    pub fn muted(weekday: Weekday, day: Option<u32>, phase: CellPhase) -> Self {
        Self {
            weekday,
            day,
            date: None,
            phase,
        }
    }

    /// Returns true if this cell is padding from an adjacent month.
    pub fn is_muted(&self) -> bool {
        self.phase != CellPhase::Active
    }

    /// Returns the English name of this cell's weekday (e.g. "Monday").
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

/// The fixed 42-cell grid for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: Month,
    pub week_starts_on: Weekday,
    pub(crate) cells: Vec<GridCell>,
}

impl MonthGrid {
    /// All cells in display order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Returns the cell at a 1-indexed grid position.
    pub fn cell(&self, position: usize) -> Option<&GridCell> {
        position.checked_sub(1).and_then(|i| self.cells.get(i))
    }

    /// Iterates the six rows of seven cells.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Iterates the cells belonging to the month itself.
    pub fn active_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().filter(|cell| !cell.is_muted())
    }

    /// English month name, e.g. "February".
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Weekdays of the grid columns, starting at `week_starts_on`.
    pub fn column_weekdays(&self) -> [Weekday; DAYS_PER_WEEK] {
        week_from(self.week_starts_on)
    }
}

/// Cache key for a full year of grids.
///
/// Grids depend only on these three inputs, so any two configurations
/// sharing a key can share grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridKey {
    pub year: i32,
    pub week_starts_on: Weekday,
    pub show_trailing_days: bool,
}

/// The twelve month grids of one year, January first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGrids {
    pub key: GridKey,
    pub(crate) months: Vec<MonthGrid>,
}

impl YearGrids {
    /// Returns the grid for the given month.
    pub fn month(&self, month: Month) -> &MonthGrid {
        &self.months[month.number_from_month() as usize - 1]
    }

    /// Iterates all twelve grids in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = &MonthGrid> {
        self.months.iter()
    }
}

/// Visual category a cell ends up in after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellCategory {
    Default,
    Muted,
    Highlight,
    OtherDate,
    BankHoliday,
}

/// Rendering decision for a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStyle {
    pub category: CellCategory,
    /// Space-separated CSS class tokens.
    pub css_class: Option<String>,
    /// Tooltip text, rendered as a `title` attribute.
    pub tooltip: Option<String>,
    pub bold: bool,
}

impl CellStyle {
    /// The unstyled cell.
    pub fn plain() -> Self {
        Self {
            category: CellCategory::Default,
            css_class: None,
            tooltip: None,
            bold: false,
        }
    }

    /// Muted text for padding cells.
    pub fn muted() -> Self {
        Self {
            category: CellCategory::Muted,
            css_class: Some("text-muted".to_string()),
            tooltip: None,
            bold: false,
        }
    }
}

/// Seven consecutive weekdays starting at `first`.
pub fn week_from(first: Weekday) -> [Weekday; DAYS_PER_WEEK] {
    let mut days = [first; DAYS_PER_WEEK];
    for i in 1..DAYS_PER_WEEK {
        days[i] = days[i - 1].succ();
    }
    days
}

/// Full English weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Three-letter English weekday abbreviation.
pub fn weekday_short_name(weekday: Weekday) -> &'static str {
    &weekday_name(weekday)[..3]
}

/// Returns true for Saturday and Sunday.
pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}
