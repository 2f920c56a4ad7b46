//! Cut the requested time window out of a fetched hourly series.

use crate::error::{Error, Result};
use crate::models::{HourlySeries, PastUnit, TimeWindow};
use chrono::{NaiveDateTime, Timelike};

/// Drop minutes and seconds, keeping the date and hour.
pub fn truncate_to_hour(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date().and_hms_opt(ts.hour(), 0, 0).unwrap_or(ts)
}

/// Select the entries of `series` that fall inside `window`.
///
/// For a `Dates` window this keeps every entry whose calendar date lies in
/// the inclusive range. For a `Past` window it anchors at `now` truncated to
/// the hour, falls back to the nearest earlier timestamp when that exact
/// hour is absent, and keeps the trailing `count` hours (or days worth of
/// hours) up to and including the anchor. Fewer entries than requested is
/// not an error; an anchor before the whole series is
/// [`Error::HourNotFound`].
pub fn select_window(
    series: &HourlySeries,
    window: TimeWindow,
    now: NaiveDateTime,
) -> Result<HourlySeries> {
    match window {
        TimeWindow::Dates { start, end } => {
            let lo = series.timestamps.partition_point(|t| t.date() < start);
            let hi = series.timestamps.partition_point(|t| t.date() <= end);
            // An inverted range selects nothing.
            Ok(series.slice(lo, hi.max(lo)))
        }
        TimeWindow::Past { count, unit } => {
            let anchor = truncate_to_hour(now);
            let end = series.timestamps.partition_point(|t| *t <= anchor);
            if end == 0 {
                return Err(Error::HourNotFound(anchor));
            }
            let entries = match unit {
                PastUnit::Hours => count as usize,
                PastUnit::Days => count as usize * 24,
            };
            Ok(series.slice(end.saturating_sub(entries), end))
        }
    }
}
