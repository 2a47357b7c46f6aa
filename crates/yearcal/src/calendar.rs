//! The `Calendar` facade: one configuration, its annotations and a grid cache.

use yearcal_core::cache::GridCache;
use yearcal_core::calendar::{AnnotationSet, CalendarConfig, IntoMonth};

use crate::error::Result;
use crate::render::{render_month, render_year};

/// A configured calendar ready to collect annotations and render markup.
///
/// The configuration is fixed at construction. Grids come from a
/// [`GridCache`], which may be shared with other calendars.
#[derive(Debug, Clone)]
pub struct Calendar {
    config: CalendarConfig,
    annotations: AnnotationSet,
    cache: GridCache,
}

impl Calendar {
    /// Creates a calendar with its own grid cache.
    pub fn new(config: CalendarConfig) -> Self {
        Self::with_cache(config, GridCache::default())
    }

    /// Creates a calendar that builds grids through a shared cache.
    pub fn with_cache(config: CalendarConfig, cache: GridCache) -> Self {
        Self {
            config,
            annotations: AnnotationSet::new(),
            cache,
        }
    }

    /// Replaces the annotation set wholesale.
    pub fn with_annotations(mut self, annotations: AnnotationSet) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }

    /// Mutable access for adding highlights, holidays and other dates.
    pub fn annotations_mut(&mut self) -> &mut AnnotationSet {
        &mut self.annotations
    }

    /// Renders one month, given as a number (1-12), a name or a `chrono::Month`.
    pub fn render_month(&self, month: impl IntoMonth) -> Result<String> {
        let month = month.into_month()?;
        let grids = self.cache.get_or_build(self.config.grid_key())?;
        render_month(grids.month(month), &self.annotations, &self.config)
    }

    /// Renders the configured default month, which is the current month
    /// unless set through [`CalendarConfig::with_month`] or the `month` option.
    pub fn render_current_month(&self) -> Result<String> {
        self.render_month(self.config.month)
    }

    /// Renders all twelve months, January first.
    pub fn render_year(&self) -> Result<String> {
        let grids = self.cache.get_or_build(self.config.grid_key())?;
        render_year(&grids, &self.annotations, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Local, Month};
    use yearcal_core::calendar::{CalendarError, CalendarOptions};

    use crate::error::RenderError;

    fn calendar_2018() -> Calendar {
        Calendar::new(CalendarConfig::new(Some(2018)).unwrap())
    }

    #[test]
    fn test_render_month_accepts_number_and_name() {
        let calendar = calendar_2018();

        let by_number = calendar.render_month(2).unwrap();
        let by_name = calendar.render_month("February").unwrap();
        let by_month = calendar.render_month(Month::February).unwrap();

        assert_eq!(by_number, by_name);
        assert_eq!(by_number, by_month);
        assert!(by_number.contains("February 2018"));
    }

    #[test]
    fn test_render_month_rejects_bad_month() {
        let calendar = calendar_2018();

        assert!(matches!(
            calendar.render_month(13),
            Err(RenderError::Calendar(CalendarError::InvalidMonth(_)))
        ));
        assert!(matches!(
            calendar.render_month("Smarch"),
            Err(RenderError::Calendar(CalendarError::InvalidMonth(_)))
        ));
    }

    #[test]
    fn test_render_current_month_uses_configured_year() {
        let html = calendar_2018().render_current_month().unwrap();
        let month_name = chrono::Month::try_from(Local::now().month() as u8)
            .unwrap()
            .name();

        assert!(html.contains(&format!("{month_name} 2018")));
    }

    #[test]
    fn test_render_current_month_uses_configured_month() {
        let options = CalendarOptions::from_json(r#"{"year": 2018, "month": "March"}"#).unwrap();
        let config = CalendarConfig::new(None)
            .unwrap()
            .with_options(options)
            .unwrap();
        let calendar = Calendar::new(config);

        let html = calendar.render_current_month().unwrap();

        assert!(html.contains("March 2018"));
        assert_eq!(html, calendar.render_month(Month::March).unwrap());
    }

    #[test]
    fn test_render_year_orders_months() {
        let html = calendar_2018().render_year().unwrap();

        let january = html.find("January 2018").unwrap();
        let june = html.find("June 2018").unwrap();
        let december = html.find("December 2018").unwrap();
        assert!(january < june && june < december);
        assert_eq!(html.matches("<table").count(), 12);
    }

    #[test]
    fn test_shared_cache_builds_once() {
        let cache = GridCache::default();
        let config = CalendarConfig::new(Some(2018)).unwrap();
        let first = Calendar::with_cache(config.clone(), cache.clone());
        let second = Calendar::with_cache(config.clone(), cache.clone());

        first.render_month(1).unwrap();
        second.render_month(1).unwrap();

        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&config.grid_key()));
    }
}
