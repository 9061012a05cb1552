use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::timeline::TimelineWindow;

/// One week bucket, labelled with its Monday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeColumn {
    pub week_start: NaiveDate,
    pub label: String,
}

/// Header band spanning the consecutive columns that share a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBand {
    pub label: String,
    pub column_count: usize,
    pub first_column_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGrid {
    pub columns: Vec<TimeColumn>,
    pub bands: Vec<MonthBand>,
}

/// Build week columns and month header bands for a resolved window. One
/// column per 7-day step from the window start through its end; the same
/// walk covers a single week or several years.
pub fn build_grid(window: &TimelineWindow) -> TimeGrid {
    let mut columns = Vec::new();
    let mut current = window.start;
    while current <= window.end {
        columns.push(TimeColumn {
            week_start: current,
            label: current.format("%b %d").to_string(),
        });
        current = current + Duration::days(7);
    }

    let mut bands: Vec<MonthBand> = Vec::new();
    let mut last_key: Option<(i32, u32)> = None;
    for (index, column) in columns.iter().enumerate() {
        // Bands group on the month+year of the week-start Monday, so a week
        // spilling into the next month still belongs to its Monday's month.
        let key = (column.week_start.year(), column.week_start.month());
        if last_key == Some(key) {
            if let Some(band) = bands.last_mut() {
                band.column_count += 1;
            }
        } else {
            bands.push(MonthBand {
                label: column.week_start.format("%B %Y").to_string(),
                column_count: 1,
                first_column_index: index,
            });
            last_key = Some(key);
        }
    }

    TimeGrid { columns, bands }
}
