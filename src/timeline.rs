use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::item::ScopeItem;

/// The week-aligned date span a chart renders. Recomputed whenever the item
/// collection or the explicit project bounds change; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimelineWindow {
    /// Day distance between the window edges. The degenerate single-point
    /// window spans zero days.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Sunday of the week containing `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

/// Earliest and latest candidate dates across items and explicit bounds.
/// Planned dates always contribute; actual dates only when `include_actual`.
/// `None` when nothing contributes a date at all.
pub fn date_extremes(
    items: &[ScopeItem],
    explicit_start: Option<NaiveDate>,
    explicit_end: Option<NaiveDate>,
    include_actual: bool,
) -> Option<(NaiveDate, NaiveDate)> {
    let mut candidates: Vec<NaiveDate> = Vec::new();
    for item in items {
        candidates.extend(item.planned_start);
        candidates.extend(item.planned_end);
        if include_actual {
            candidates.extend(item.actual_start);
            candidates.extend(item.actual_end);
        }
    }
    candidates.extend(explicit_start);
    candidates.extend(explicit_end);

    let earliest = candidates.iter().copied().min()?;
    let latest = candidates.iter().copied().max()?;
    Some((earliest, latest))
}

/// Resolve the chart window from item dates and optional explicit project
/// bounds, expanded outward to full Monday..Sunday weeks.
pub fn resolve_bounds_at(
    items: &[ScopeItem],
    explicit_start: Option<NaiveDate>,
    explicit_end: Option<NaiveDate>,
    include_actual: bool,
    today: NaiveDate,
) -> TimelineWindow {
    match date_extremes(items, explicit_start, explicit_end, include_actual) {
        Some((earliest, latest)) => TimelineWindow {
            start: start_of_week(earliest),
            end: end_of_week(latest),
        },
        // No datable candidates: collapse to a single point.
        None => TimelineWindow {
            start: today,
            end: today,
        },
    }
}

/// `resolve_bounds_at` with the host clock.
pub fn resolve_bounds(
    items: &[ScopeItem],
    explicit_start: Option<NaiveDate>,
    explicit_end: Option<NaiveDate>,
    include_actual: bool,
) -> TimelineWindow {
    resolve_bounds_at(
        items,
        explicit_start,
        explicit_end,
        include_actual,
        Local::now().date_naive(),
    )
}
