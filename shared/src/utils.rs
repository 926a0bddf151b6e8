// Small helpers for working with bar sequences and request dates,
// shared by the engine (fetch windows, series shaping) and the gui.
use chrono::{Duration, NaiveDate};

use crate::models::Bar;

/// Closed date range `[today - days, today]`.
pub fn lookback_window(today: NaiveDate, days: u32) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(i64::from(days)), today)
}

pub fn dates(bars: &[Bar]) -> Vec<NaiveDate> {
    bars.iter().map(|b| b.date).collect()
}

pub fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

/// Keeps bars inside `[start, end]`, sorted by date with duplicate dates dropped.
pub fn normalize_range(mut bars: Vec<Bar>, start: NaiveDate, end: NaiveDate) -> Vec<Bar> {
    bars.retain(|b| b.date >= start && b.date <= end);
    bars.sort_by_key(|b| b.date);
    bars.dedup_by_key(|b| b.date);
    bars
}
