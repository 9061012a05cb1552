use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
use std::collections::HashSet;
use std::fmt;

use crate::item::ScopeItem;
use crate::progress::clamp_percent;
use crate::status::{ProjectStatus, item_status};

#[derive(Debug)]
pub enum RecordError {
    Serialization(SerdeJsonError),
    InvalidData(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Serialization(err) => write!(f, "serialization error: {err}"),
            RecordError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<SerdeJsonError> for RecordError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

pub type RecordResult<T> = Result<T, RecordError>;

/// Plain item record as supplied by the persistence collaborator. Dates are
/// ISO-8601 date-only strings; a string that fails to parse becomes an
/// absent date on the item, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeRecord {
    pub id: String,
    #[serde(default)]
    pub order_index: u32,
    pub name: String,
    #[serde(default)]
    pub planned_start: Option<String>,
    #[serde(default)]
    pub planned_end: Option<String>,
    #[serde(default)]
    pub actual_start: Option<String>,
    #[serde(default)]
    pub actual_end: Option<String>,
    #[serde(default)]
    pub percent_complete: i64,
    #[serde(default)]
    pub mandays_planned: Option<i64>,
    #[serde(default)]
    pub mandays_actual: Option<i64>,
}

impl From<&ScopeItem> for ScopeRecord {
    fn from(item: &ScopeItem) -> Self {
        Self {
            id: item.id.clone(),
            order_index: item.order_index,
            name: item.name.clone(),
            planned_start: format_date(item.planned_start),
            planned_end: format_date(item.planned_end),
            actual_start: format_date(item.actual_start),
            actual_end: format_date(item.actual_end),
            percent_complete: item.percent_complete,
            mandays_planned: item.mandays_planned,
            mandays_actual: item.mandays_actual,
        }
    }
}

impl ScopeRecord {
    pub fn into_item(self) -> ScopeItem {
        let mut item = ScopeItem::new(self.id, self.name);
        item.order_index = self.order_index;
        item.planned_start = parse_date(self.planned_start.as_deref());
        item.planned_end = parse_date(self.planned_end.as_deref());
        item.actual_start = parse_date(self.actual_start.as_deref());
        item.actual_end = parse_date(self.actual_end.as_deref());
        item.percent_complete = self.percent_complete;
        item.mandays_planned = self.mandays_planned;
        item.mandays_actual = self.mandays_actual;
        item
    }
}

/// Parse a whole collaborator payload into items.
pub fn items_from_json(payload: &str) -> RecordResult<Vec<ScopeItem>> {
    let records: Vec<ScopeRecord> = serde_json::from_str(payload)?;
    Ok(records.into_iter().map(ScopeRecord::into_item).collect())
}

/// Reject duplicate ids; everything else is tolerated and clamped at use.
pub fn validate_items(items: &[ScopeItem]) -> RecordResult<()> {
    let mut seen_ids = HashSet::with_capacity(items.len());
    for item in items {
        if !seen_ids.insert(item.id.as_str()) {
            return Err(RecordError::InvalidData(format!(
                "duplicate item id '{}'",
                item.id
            )));
        }
    }
    Ok(())
}

/// Ordering payload handed to the persistence collaborator after a reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub id: String,
    pub order_index: u32,
}

pub fn order_update(items: &[ScopeItem]) -> Vec<OrderUpdate> {
    items
        .iter()
        .map(|item| OrderUpdate {
            id: item.id.clone(),
            order_index: item.order_index,
        })
        .collect()
}

/// Percent/status payload handed to the collaborator after a progress edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub id: String,
    pub percent_complete: i64,
    pub status: ProjectStatus,
}

pub fn progress_update(item: &ScopeItem, today: NaiveDate) -> ProgressUpdate {
    ProgressUpdate {
        id: item.id.clone(),
        percent_complete: clamp_percent(item.percent_complete),
        status: item_status(item, today),
    }
}

fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

fn parse_date(input: Option<&str>) -> Option<NaiveDate> {
    let raw = input?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
