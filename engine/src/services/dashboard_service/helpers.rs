// Helper functions for the dashboard_service handlers
use chrono::NaiveDate;
use shared::models::Bar;

/// Close the live delta is measured against: the first bar of the
/// reference window, or, when the window holds no trading day, the last
/// historical bar before it.
pub fn reference_close(window_bars: &[Bar], history: &[Bar], window_start: NaiveDate) -> Option<f64> {
    window_bars
        .iter()
        .min_by_key(|b| b.date)
        .or_else(|| history.iter().filter(|b| b.date < window_start).max_by_key(|b| b.date))
        .map(|b| b.close)
}
