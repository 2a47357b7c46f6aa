//! Per-cell styling decisions.
//!
//! Resulting precedence, strongest first: weekend suppression, muted,
//! highlight, other date, bank holiday, plain.

use chrono::Datelike;

use super::annotations::AnnotationSet;
use super::config::CalendarConfig;
use super::types::{is_weekend, CellCategory, CellStyle, GridCell};

/// Decides how a grid cell is styled.
pub fn classify(cell: &GridCell, annotations: &AnnotationSet, config: &CalendarConfig) -> CellStyle {
    // Padding cells carry no date, so they never reach the annotation lookups.
    let Some(date) = cell.date.filter(|_| !cell.is_muted()) else {
        return CellStyle::muted();
    };

    if !config.show_weekends && is_weekend(date.weekday()) {
        return CellStyle::plain();
    }

    if let Some(label) = annotations.highlight(date) {
        let css_class = match label {
            Some(_) => format!("{} pointer", config.highlight_class),
            None => config.highlight_class.clone(),
        };
        return CellStyle {
            category: CellCategory::Highlight,
            css_class: Some(css_class),
            tooltip: label.map(str::to_string),
            bold: true,
        };
    }

    if annotations.is_other_date(date) {
        return CellStyle {
            category: CellCategory::OtherDate,
            css_class: Some(config.other_date_class.clone()),
            tooltip: None,
            bold: true,
        };
    }

    if let Some(label) = annotations.bank_holiday(date) {
        let tooltip = label.unwrap_or(config.public_holiday_term.as_str());
        return CellStyle {
            category: CellCategory::BankHoliday,
            css_class: Some(format!("pointer {}", config.bank_holiday_class)),
            tooltip: Some(tooltip.to_string()),
            bold: true,
        };
    }

    CellStyle::plain()
}
