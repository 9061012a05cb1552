use crate::item::ScopeItem;

/// Clamp a raw percent-complete value into the renderable `0..=100` range.
/// Aggregation, color tiers, and status rules all run on the clamped value.
pub fn clamp_percent(value: i64) -> i64 {
    value.clamp(0, 100)
}

/// Mean percent complete across items, rounded half-up; empty input is 0.
/// Every item counts equally: the average is not weighted by duration or
/// mandays, and downstream status inference depends on that exact figure.
pub fn aggregate_progress(items: &[ScopeItem]) -> i64 {
    if items.is_empty() {
        return 0;
    }
    let total: i64 = items
        .iter()
        .map(|item| clamp_percent(item.percent_complete))
        .sum();
    let mean = total as f64 / items.len() as f64;
    mean.round() as i64
}
