mod annotations;
mod classify;
mod config;
mod error;
mod grid;
mod parse;
mod range;
mod types;

pub use annotations::AnnotationSet;
pub use classify::classify;
pub use config::{
    CalendarConfig, CalendarOptions, DEFAULT_BANK_HOLIDAY_CLASS, DEFAULT_HIGHLIGHT_CLASS,
    DEFAULT_OTHER_DATE_CLASS, DEFAULT_PUBLIC_HOLIDAY_TERM,
};
pub use error::{CalendarError, Result};
pub use grid::{build_month, build_year, days_in_month};
pub use parse::{
    month_from_number, parse_date, parse_month, parse_weekday, parse_year, validate_year, IntoDate,
    IntoMonth,
};
pub use range::expand_range;
pub use types::{
    is_weekend, week_from, weekday_name, weekday_short_name, CellCategory, CellPhase, CellStyle,
    GridCell, GridKey, MonthGrid, YearGrids, DAYS_PER_WEEK, GRID_CELLS,
};
