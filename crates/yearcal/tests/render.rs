//! End-to-end rendering scenarios.

use chrono::Weekday;
use yearcal::Calendar;
use yearcal_core::calendar::CalendarConfig;

fn calendar_2018() -> Calendar {
    Calendar::new(CalendarConfig::new(Some(2018)).unwrap())
}

fn highlighted_cell(day: u32, label: &str) -> String {
    format!(
        r#"<td class="primary pointer" data-toggle="tooltip" data-placement="top" title="{label}"><strong>{day}</strong></td>"#
    )
}

fn plain_cell(day: u32) -> String {
    format!("<td>{day}</td>")
}

#[test]
fn test_week_in_portugal() {
    let mut calendar = calendar_2018();
    calendar
        .annotations_mut()
        .add_date_range("2018-02-05", "2018-02-14", Some("Week in Portugal"))
        .unwrap();

    let html = calendar.render_month(2).unwrap();

    for day in 5..=14 {
        assert!(
            html.contains(&highlighted_cell(day, "Week in Portugal")),
            "February {day} should be highlighted"
        );
    }
    for day in (1..=4).chain(15..=28) {
        assert!(
            html.contains(&plain_cell(day)),
            "February {day} should be plain"
        );
    }
    assert_eq!(html.matches("Week in Portugal").count(), 10);
}

#[test]
fn test_bank_holiday_labels() {
    let mut calendar = calendar_2018();
    calendar
        .annotations_mut()
        .add_bank_holiday("2018-07-21", Some("This is a bank holiday"))
        .unwrap()
        .add_bank_holiday("2018-07-22", None)
        .unwrap();

    let html = calendar.render_month("July").unwrap();

    assert!(html.contains(
        r#"<td class="pointer bankholidays" data-toggle="tooltip" data-placement="top" title="This is a bank holiday"><strong>21</strong></td>"#
    ));
    assert!(html.contains(
        r#"<td class="pointer bankholidays" data-toggle="tooltip" data-placement="top" title="Bank holiday"><strong>22</strong></td>"#
    ));
}

#[test]
fn test_highlight_overrides_bank_holiday() {
    let mut calendar = calendar_2018();
    calendar
        .annotations_mut()
        .add_bank_holiday("2018-12-25", None)
        .unwrap()
        .add_highlight("2018-12-25", Some("Family visit"))
        .unwrap();

    let html = calendar.render_month(12).unwrap();

    assert!(html.contains(&highlighted_cell(25, "Family visit")));
    assert!(!html.contains("bankholidays"));
    assert!(!html.contains("Bank holiday"));
}

#[test]
fn test_hidden_weekends_suppress_highlight() {
    let config = CalendarConfig::new(Some(2018))
        .unwrap()
        .with_show_weekends(false);
    let mut calendar = Calendar::new(config);
    // 10 February 2018 is a Saturday.
    calendar
        .annotations_mut()
        .add_date_range("2018-02-09", "2018-02-12", Some("Long weekend"))
        .unwrap();

    let html = calendar.render_month(2).unwrap();

    assert!(html.contains(&highlighted_cell(9, "Long weekend")));
    assert!(html.contains(&plain_cell(10)));
    assert!(html.contains(&plain_cell(11)));
    assert!(html.contains(&highlighted_cell(12, "Long weekend")));
}

#[test]
fn test_render_year_is_idempotent() {
    let mut calendar = calendar_2018();
    calendar
        .annotations_mut()
        .add_date_range("2018-02-05", "2018-02-14", Some("Week in Portugal"))
        .unwrap()
        .add_other_date("2018-10-31")
        .unwrap();

    let first = calendar.render_year().unwrap();
    let second = calendar.render_year().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.matches("<table").count(), 12);
}

#[test]
fn test_sunday_start_layout() {
    let config = CalendarConfig::new(Some(2018))
        .unwrap()
        .with_week_starts_on(Weekday::Sun);
    let html = Calendar::new(config).render_month(7).unwrap();

    // 1 July 2018 is a Sunday, so no lead cells are needed.
    assert!(html.contains("<tr><th>Sun</th>"));
    assert!(html.contains("<tr><td>1</td><td>2</td>"));
}
