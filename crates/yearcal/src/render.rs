//! HTML rendering of month grids.
//!
//! Structure comes from the core grid builder, styling from the cell
//! classifier; this module only turns both into table markup. All
//! interpolated text goes through askama's HTML escaper.

use askama::Template;
use yearcal_core::calendar::{
    classify, weekday_short_name, AnnotationSet, CalendarConfig, GridCell, MonthGrid, YearGrids,
};

use crate::error::Result;

/// One `<td>` worth of rendering data. Empty strings mean "absent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub css_class: String,
    pub tooltip: String,
    pub bold: bool,
    /// Day number as text; empty renders as a non-breaking space.
    pub day: String,
}

impl CellView {
    /// Classifies a grid cell and flattens the result for the template.
    pub fn new(cell: &GridCell, annotations: &AnnotationSet, config: &CalendarConfig) -> Self {
        let style = classify(cell, annotations, config);
        Self {
            css_class: style.css_class.unwrap_or_default(),
            tooltip: style.tooltip.unwrap_or_default(),
            bold: style.bold,
            day: cell.day.map(|day| day.to_string()).unwrap_or_default(),
        }
    }
}

/// Month table template.
#[derive(Template)]
#[template(path = "month.html")]
struct MonthTemplate {
    month_name: &'static str,
    year: i32,
    weekday_names: Vec<&'static str>,
    rows: Vec<Vec<CellView>>,
}

impl MonthTemplate {
    fn new(grid: &MonthGrid, annotations: &AnnotationSet, config: &CalendarConfig) -> Self {
        let rows = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| CellView::new(cell, annotations, config))
                    .collect()
            })
            .collect();

        Self {
            month_name: grid.month_name(),
            year: grid.year,
            weekday_names: grid
                .column_weekdays()
                .into_iter()
                .map(weekday_short_name)
                .collect(),
            rows,
        }
    }
}

/// Renders one month grid as a table fragment.
pub fn render_month(
    grid: &MonthGrid,
    annotations: &AnnotationSet,
    config: &CalendarConfig,
) -> Result<String> {
    let html = MonthTemplate::new(grid, annotations, config).render()?;
    tracing::debug!(
        month = grid.month_name(),
        year = grid.year,
        bytes = html.len(),
        "Rendered month"
    );
    Ok(html)
}

/// Renders all twelve months, January first, as one fragment.
pub fn render_year(
    grids: &YearGrids,
    annotations: &AnnotationSet,
    config: &CalendarConfig,
) -> Result<String> {
    grids
        .iter()
        .map(|grid| render_month(grid, annotations, config))
        .collect()
}
