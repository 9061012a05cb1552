use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::item::ScopeItem;
use crate::progress::clamp_percent;

/// Days-to-due window under which insufficient progress flags at risk.
pub const AT_RISK_WINDOW_DAYS: i64 = 2;
/// Percent-complete floor below which an imminent due date flags at risk.
pub const AT_RISK_PERCENT_FLOOR: i64 = 80;

/// Lifecycle status, derived on every recompute and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
    AtRisk,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "not_started",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::AtRisk => "at_risk",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "not_started" => Some(ProjectStatus::NotStarted),
            "in_progress" => Some(ProjectStatus::InProgress),
            "completed" => Some(ProjectStatus::Completed),
            "at_risk" => Some(ProjectStatus::AtRisk),
            _ => None,
        }
    }
}

/// Infer a lifecycle status from progress and dates. The rules are an
/// ordered decision list; earlier rules win and the order must not change.
/// A missing date makes its rule inapplicable rather than an error.
pub fn infer_status(
    percent_complete: i64,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> ProjectStatus {
    let percent = clamp_percent(percent_complete);

    if percent >= 100 {
        return ProjectStatus::Completed;
    }
    if let Some(due) = due_date {
        if due < today {
            return ProjectStatus::AtRisk;
        }
        if percent < AT_RISK_PERCENT_FLOOR && (due - today).num_days() <= AT_RISK_WINDOW_DAYS {
            return ProjectStatus::AtRisk;
        }
    }
    if let Some(start) = start_date {
        if today < start && percent == 0 {
            return ProjectStatus::NotStarted;
        }
    }
    if percent <= 0 {
        return ProjectStatus::NotStarted;
    }
    ProjectStatus::InProgress
}

/// `infer_status` with the host clock.
pub fn infer_status_today(
    percent_complete: i64,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
) -> ProjectStatus {
    infer_status(
        percent_complete,
        start_date,
        due_date,
        Local::now().date_naive(),
    )
}

/// Status of a single item, judged on its planned range.
pub fn item_status(item: &ScopeItem, today: NaiveDate) -> ProjectStatus {
    infer_status(
        item.percent_complete,
        item.planned_start,
        item.planned_end,
        today,
    )
}
