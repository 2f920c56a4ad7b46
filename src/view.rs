//! Chart, table, and statistics presentation derived from a windowed series.

use crate::models::{DataType, HourlySeries, display_timestamp};
use crate::stats::{Summary, round_half_up};
use crate::units::display_unit;
use serde::{Deserialize, Serialize};

/// How a series should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
}

/// Precipitation draws as bars, everything else as a line.
pub fn chart_kind(data_type: DataType) -> ChartKind {
    match data_type {
        DataType::Precipitation => ChartKind::Bar,
        _ => ChartKind::Line,
    }
}

/// Spacing between labeled ticks on the time axis.
///
/// Scales with series length at roughly two labels per day with a floor of
/// one; a 20-entry series keeps the coarser step of 4.
pub fn tick_step(len: usize) -> usize {
    if len == 20 { 4 } else { (len * 2 / 24).max(1) }
}

/// Everything a chart renderer needs for one query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub data_type: DataType,
    pub unit: String,
    pub kind: ChartKind,
    pub tick_step: usize,
}

impl ChartData {
    pub fn from_series(series: &HourlySeries, data_type: DataType) -> Self {
        Self {
            labels: series
                .timestamps
                .iter()
                .map(|t| display_timestamp(*t))
                .collect(),
            values: series.values.clone(),
            data_type,
            unit: display_unit(data_type).to_string(),
            kind: chart_kind(data_type),
            tick_step: tick_step(series.len()),
        }
    }
}

/// One table line: the timestamp split into date and time plus the raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub date: String,
    pub time: String,
    pub value: f64,
}

impl TableRow {
    /// Value with its unit suffix, unrounded.
    pub fn display_value(&self, unit: &str) -> String {
        format!("{}{}", self.value, unit)
    }
}

/// Split each entry into a date column and a time column.
pub fn table_rows(series: &HourlySeries) -> Vec<TableRow> {
    series
        .timestamps
        .iter()
        .zip(&series.values)
        .map(|(t, v)| TableRow {
            date: t.format("%Y-%m-%d").to_string(),
            time: t.format("%H:%M").to_string(),
            value: *v,
        })
        .collect()
}

/// Upper bound on modes listed before the list is elided.
pub const MODE_DISPLAY_CAP: usize = 4;

/// Join modes with their unit, eliding after [`MODE_DISPLAY_CAP`] entries.
pub fn format_modes(modes: &[f64], unit: &str) -> String {
    let mut out = String::new();
    for (i, m) in modes.iter().enumerate() {
        if i == MODE_DISPLAY_CAP {
            out.push_str(", ...");
            break;
        }
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("{}{}", m, unit));
    }
    out
}

/// Ready-to-print statistics lines.
///
/// Mean, median, amplitude, and standard deviation are rounded to one
/// decimal; the range keeps the raw extremes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsDisplay {
    pub mean: String,
    pub range: String,
    pub median: String,
    pub amplitude: String,
    pub modes: String,
    pub std_dev: String,
}

impl StatsDisplay {
    pub fn new(summary: &Summary, unit: &str) -> Self {
        Self {
            mean: format!("{}{}", round_half_up(summary.mean, 1), unit),
            range: format!("{}{} to {}{}", summary.min, unit, summary.max, unit),
            median: format!("{}{}", round_half_up(summary.median, 1), unit),
            amplitude: format!("{}{}", round_half_up(summary.amplitude(), 1), unit),
            modes: format_modes(&summary.modes, unit),
            std_dev: format!("{}{}", round_half_up(summary.std_dev, 1), unit),
        }
    }
}
