use crate::domain::model::UsageMap;

/// Sums every duration in the map and rounds the total to 2 decimal
/// places, half away from zero (`f64::round` semantics).
///
/// An empty map sums to `0.0`. Values are expected to be non-negative
/// finite hours; that constraint is enforced where datasets are loaded,
/// not here.
pub fn total_hours(usage: &UsageMap) -> f64 {
    let total: f64 = usage.values().sum();
    round2(total)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
