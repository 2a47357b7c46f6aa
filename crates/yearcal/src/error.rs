//! Rendering error types.

use thiserror::Error;
use yearcal_core::calendar::CalendarError;

/// Result type alias for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while building or rendering calendars.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),
}
