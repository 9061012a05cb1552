use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::WorkCalendar;

/// One unit of planned delivery work (a "scope"). The surrounding
/// application owns the canonical list; engine functions take a read view
/// and return derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeItem {
    pub id: String,
    pub order_index: u32,
    pub name: String,
    pub planned_start: Option<NaiveDate>,
    pub planned_end: Option<NaiveDate>,
    pub actual_start: Option<NaiveDate>,
    pub actual_end: Option<NaiveDate>,
    pub percent_complete: i64,
    pub mandays_planned: Option<i64>,
    pub mandays_actual: Option<i64>,
}

impl ScopeItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order_index: 0,
            name: name.into(),
            planned_start: None,
            planned_end: None,
            actual_start: None,
            actual_end: None,
            percent_complete: 0,
            mandays_planned: None,
            mandays_actual: None,
        }
    }

    /// Planned manday count: the stored value when present, otherwise derived
    /// from the planned range. Missing dates derive to 0.
    pub fn planned_mandays(&self, calendar: &WorkCalendar) -> i64 {
        if let Some(stored) = self.mandays_planned {
            return stored;
        }
        match (self.planned_start, self.planned_end) {
            (Some(start), Some(end)) => calendar.business_days_between(start, end),
            _ => 0,
        }
    }

    /// Actual manday count, same stored-or-derived rule as `planned_mandays`.
    pub fn actual_mandays(&self, calendar: &WorkCalendar) -> i64 {
        if let Some(stored) = self.mandays_actual {
            return stored;
        }
        match (self.actual_start, self.actual_end) {
            (Some(start), Some(end)) => calendar.business_days_between(start, end),
            _ => 0,
        }
    }

    /// An item is overdue once its actual end lands after its planned end.
    pub fn is_overdue(&self) -> bool {
        matches!(
            (self.actual_end, self.planned_end),
            (Some(actual), Some(planned)) if actual > planned
        )
    }

    /// Signed working-day slip of the actual end against the planned end;
    /// positive means late. `None` until both end dates exist.
    pub fn slip_days(&self, calendar: &WorkCalendar) -> Option<i64> {
        match (self.planned_end, self.actual_end) {
            (Some(planned), Some(actual)) => Some(calendar.working_days_diff(planned, actual)),
            _ => None,
        }
    }
}
