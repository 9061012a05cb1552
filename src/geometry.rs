use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::ScopeItem;
use crate::progress::clamp_percent;
use crate::timeline::TimelineWindow;

/// Color tier a renderer picks from percent complete alone. Overdue-ness is
/// a separate flag on the row; the engine never folds it into the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressColor {
    Low,
    Medium,
    High,
}

impl ProgressColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressColor::Low => "low",
            ProgressColor::Medium => "medium",
            ProgressColor::High => "high",
        }
    }
}

/// Bar position as percentages of the whole timeline width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub left_percent: f64,
    pub width_percent: f64,
}

impl BarGeometry {
    fn zero() -> Self {
        Self {
            left_percent: 0.0,
            width_percent: 0.0,
        }
    }
}

/// Color tier for a percent-complete value, clamped before comparison.
pub fn progress_color(percent_complete: i64) -> ProgressColor {
    let percent = clamp_percent(percent_complete);
    if percent <= 25 {
        ProgressColor::Low
    } else if percent <= 80 {
        ProgressColor::Medium
    } else {
        ProgressColor::High
    }
}

/// Positions bars inside a resolved window. Outputs are clamped so a bar can
/// never extend past the right edge of the timeline.
#[derive(Debug, Clone, Copy)]
pub struct GeometryCalculator<'a> {
    window: &'a TimelineWindow,
    total_days: i64,
}

impl<'a> GeometryCalculator<'a> {
    pub fn new(window: &'a TimelineWindow) -> Self {
        Self {
            window,
            total_days: window.total_days(),
        }
    }

    /// Geometry for the planned bar. Missing or reversed planned dates
    /// degrade to zero width, never an error.
    pub fn planned(&self, item: &ScopeItem) -> BarGeometry {
        self.span(item.planned_start, item.planned_end)
    }

    /// Geometry for the actual bar, `None` while either actual date is
    /// absent (no actual bar is drawn).
    pub fn actual(&self, item: &ScopeItem) -> Option<BarGeometry> {
        match (item.actual_start, item.actual_end) {
            (Some(start), Some(end)) => Some(self.span(Some(start), Some(end))),
            _ => None,
        }
    }

    /// Horizontal position of the today marker, `None` when today falls
    /// outside the window (the marker is not drawn).
    pub fn today_percent(&self, today: NaiveDate) -> Option<f64> {
        if self.total_days <= 0 {
            return None;
        }
        let percent =
            (today - self.window.start).num_days() as f64 / self.total_days as f64 * 100.0;
        if (0.0..=100.0).contains(&percent) {
            Some(percent)
        } else {
            None
        }
    }

    fn span(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> BarGeometry {
        if self.total_days <= 0 {
            return BarGeometry::zero();
        }
        let start = match start {
            Some(date) => date,
            None => return BarGeometry::zero(),
        };

        let offset = (start - self.window.start).num_days().max(0);
        let duration = match end {
            Some(end) => ((end - start).num_days() + 1).max(0),
            None => 0,
        };

        let left_percent = (offset as f64 / self.total_days as f64 * 100.0).min(100.0);
        let width_percent = (duration as f64 / self.total_days as f64 * 100.0)
            .min(100.0 - left_percent)
            .max(0.0);

        BarGeometry {
            left_percent,
            width_percent,
        }
    }
}
