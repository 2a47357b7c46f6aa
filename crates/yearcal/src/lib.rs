//! yearcal - render year and month calendar grids as HTML table markup.

pub mod calendar;
pub mod cli;
pub mod error;
pub mod logging;
pub mod render;

pub use calendar::Calendar;
pub use error::{RenderError, Result};
