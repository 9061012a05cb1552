use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::WorkCalendar;
use crate::geometry::{BarGeometry, GeometryCalculator, ProgressColor, progress_color};
use crate::grid::{MonthBand, TimeColumn, build_grid};
use crate::item::ScopeItem;
use crate::progress::aggregate_progress;
use crate::status::{ProjectStatus, infer_status};
use crate::timeline::{TimelineWindow, date_extremes, resolve_bounds_at};

/// Knobs for one chart recompute.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartOptions {
    pub explicit_start: Option<NaiveDate>,
    pub explicit_end: Option<NaiveDate>,
    pub include_actual: bool,
}

/// Renderer payload for one item row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub id: String,
    pub name: String,
    pub planned: BarGeometry,
    pub actual: Option<BarGeometry>,
    pub is_overdue: bool,
    pub color: ProgressColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSummary {
    pub item_count: usize,
    pub overdue_count: usize,
    pub mandays_planned: i64,
    pub mandays_actual: i64,
}

impl ChartSummary {
    /// Compact one-line form for host diagnostics.
    pub fn to_status_line(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("items={}", self.item_count));
        if self.overdue_count > 0 {
            parts.push(format!("overdue={}", self.overdue_count));
        }
        parts.push(format!(
            "mandays={}/{}",
            self.mandays_actual, self.mandays_planned
        ));
        parts.join(", ")
    }
}

/// Everything a renderer needs for one chart paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    pub window: TimelineWindow,
    pub columns: Vec<TimeColumn>,
    pub bands: Vec<MonthBand>,
    pub rows: Vec<ChartRow>,
    pub today_percent: Option<f64>,
    pub progress: i64,
    pub status: ProjectStatus,
    pub summary: ChartSummary,
}

/// Run the full recompute pipeline over a read view of the item list. Rows
/// keep the caller's order; the caller owns display ordering.
pub fn build_chart_model(
    items: &[ScopeItem],
    calendar: &WorkCalendar,
    options: &ChartOptions,
    today: NaiveDate,
) -> ChartModel {
    let window = resolve_bounds_at(
        items,
        options.explicit_start,
        options.explicit_end,
        options.include_actual,
        today,
    );
    let grid = build_grid(&window);
    let geometry = GeometryCalculator::new(&window);

    let mut rows = Vec::with_capacity(items.len());
    let mut overdue_count = 0;
    let mut mandays_planned = 0;
    let mut mandays_actual = 0;
    for item in items {
        let is_overdue = item.is_overdue();
        if is_overdue {
            overdue_count += 1;
        }
        mandays_planned += item.planned_mandays(calendar);
        mandays_actual += item.actual_mandays(calendar);
        rows.push(ChartRow {
            id: item.id.clone(),
            name: item.name.clone(),
            planned: geometry.planned(item),
            actual: geometry.actual(item),
            is_overdue,
            color: progress_color(item.percent_complete),
        });
    }

    let progress = aggregate_progress(items);
    // Status judges the project's real start/due pair, not the week-expanded
    // window edges.
    let (project_start, project_due) = match date_extremes(
        items,
        options.explicit_start,
        options.explicit_end,
        options.include_actual,
    ) {
        Some((earliest, latest)) => (Some(earliest), Some(latest)),
        None => (None, None),
    };
    let status = infer_status(progress, project_start, project_due, today);
    let today_percent = geometry.today_percent(today);

    ChartModel {
        window,
        columns: grid.columns,
        bands: grid.bands,
        rows,
        today_percent,
        progress,
        status,
        summary: ChartSummary {
            item_count: items.len(),
            overdue_count,
            mandays_planned,
            mandays_actual,
        },
    }
}

/// `build_chart_model` with the host clock.
pub fn build_chart_model_today(
    items: &[ScopeItem],
    calendar: &WorkCalendar,
    options: &ChartOptions,
) -> ChartModel {
    build_chart_model(items, calendar, options, Local::now().date_naive())
}
