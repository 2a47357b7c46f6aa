//! Pure calendar grid logic: date parsing, annotations, month grid
//! construction and cell classification. No I/O.

pub mod cache;
pub mod calendar;
