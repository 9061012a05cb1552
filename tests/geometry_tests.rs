use chrono::NaiveDate;
use scope_timeline::geometry::{GeometryCalculator, ProgressColor, progress_color};
use scope_timeline::item::ScopeItem;
use scope_timeline::timeline::TimelineWindow;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn window(start: NaiveDate, end: NaiveDate) -> TimelineWindow {
    TimelineWindow { start, end }
}

fn item(planned: (NaiveDate, NaiveDate)) -> ScopeItem {
    let mut item = ScopeItem::new("a", "a");
    item.planned_start = Some(planned.0);
    item.planned_end = Some(planned.1);
    item
}

// Three-week window, 20 day span.
fn three_weeks() -> TimelineWindow {
    window(d(2024, 1, 1), d(2024, 1, 21))
}

#[test]
fn planned_bar_offsets_from_the_window_start() {
    let w = three_weeks();
    let calc = GeometryCalculator::new(&w);
    let bar = calc.planned(&item((d(2024, 1, 8), d(2024, 1, 12))));
    // Offset 7 of 20 days, duration 5 days inclusive.
    assert!((bar.left_percent - 35.0).abs() < 1e-9);
    assert!((bar.width_percent - 25.0).abs() < 1e-9);
}

#[test]
fn bar_never_extends_past_the_right_edge() {
    let w = three_weeks();
    let calc = GeometryCalculator::new(&w);
    // Planned range runs a week past the window end.
    let bar = calc.planned(&item((d(2024, 1, 15), d(2024, 1, 28))));
    assert!(bar.left_percent + bar.width_percent <= 100.0 + 1e-4);
    assert!((bar.left_percent - 70.0).abs() < 1e-9);
    assert!((bar.width_percent - 30.0).abs() < 1e-9);
}

#[test]
fn reversed_planned_range_degrades_to_zero_width() {
    let w = three_weeks();
    let calc = GeometryCalculator::new(&w);
    let bar = calc.planned(&item((d(2024, 1, 12), d(2024, 1, 8))));
    assert_eq!(bar.width_percent, 0.0);
    assert!(bar.left_percent >= 0.0);
}

#[test]
fn missing_planned_dates_degrade_to_zero_geometry() {
    let w = three_weeks();
    let calc = GeometryCalculator::new(&w);
    let bar = calc.planned(&ScopeItem::new("a", "a"));
    assert_eq!(bar.left_percent, 0.0);
    assert_eq!(bar.width_percent, 0.0);
}

#[test]
fn degenerate_window_zeroes_every_bar() {
    let w = window(d(2024, 1, 1), d(2024, 1, 1));
    let calc = GeometryCalculator::new(&w);
    let bar = calc.planned(&item((d(2024, 1, 1), d(2024, 1, 5))));
    assert_eq!(bar.left_percent, 0.0);
    assert_eq!(bar.width_percent, 0.0);
    assert_eq!(calc.today_percent(d(2024, 1, 1)), None);
}

#[test]
fn actual_bar_requires_both_actual_dates() {
    let w = three_weeks();
    let calc = GeometryCalculator::new(&w);

    let mut started = item((d(2024, 1, 1), d(2024, 1, 5)));
    started.actual_start = Some(d(2024, 1, 2));
    assert_eq!(calc.actual(&started), None);

    started.actual_end = Some(d(2024, 1, 6));
    let bar = calc.actual(&started).unwrap();
    assert!((bar.left_percent - 5.0).abs() < 1e-9);
    assert!((bar.width_percent - 25.0).abs() < 1e-9);
}

#[test]
fn overdue_flag_compares_actual_to_planned_end() {
    let mut it = item((d(2024, 1, 1), d(2024, 1, 5)));
    assert!(!it.is_overdue());
    it.actual_end = Some(d(2024, 1, 5));
    assert!(!it.is_overdue());
    it.actual_end = Some(d(2024, 1, 8));
    assert!(it.is_overdue());
}

#[test]
fn today_marker_only_inside_the_window() {
    let w = three_weeks();
    let calc = GeometryCalculator::new(&w);
    assert_eq!(calc.today_percent(d(2024, 1, 1)), Some(0.0));
    assert_eq!(calc.today_percent(d(2024, 1, 21)), Some(100.0));
    let mid = calc.today_percent(d(2024, 1, 11)).unwrap();
    assert!((mid - 50.0).abs() < 1e-9);
    assert_eq!(calc.today_percent(d(2023, 12, 31)), None);
    assert_eq!(calc.today_percent(d(2024, 1, 22)), None);
}

#[test]
fn color_tiers_follow_the_thresholds() {
    assert_eq!(progress_color(0), ProgressColor::Low);
    assert_eq!(progress_color(25), ProgressColor::Low);
    assert_eq!(progress_color(26), ProgressColor::Medium);
    assert_eq!(progress_color(80), ProgressColor::Medium);
    assert_eq!(progress_color(81), ProgressColor::High);
    assert_eq!(progress_color(100), ProgressColor::High);
    // Out-of-range input clamps before comparison.
    assert_eq!(progress_color(-5), ProgressColor::Low);
    assert_eq!(progress_color(150), ProgressColor::High);
}
