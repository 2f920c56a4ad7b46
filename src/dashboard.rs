//! One query from place to presentable view.

use crate::api::Client;
use crate::error::Result;
use crate::models::{DataType, HourlySeries, Location, TimeWindow};
use crate::stats::Summary;
use crate::units::display_unit;
use crate::view::{self, ChartData, StatsDisplay, TableRow};
use crate::window::select_window;
use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};

/// Where to fetch weather for: a city name to geocode, or coordinates as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Place {
    City(String),
    Coordinates(Location),
}

/// Everything one dashboard query needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub place: Place,
    pub window: TimeWindow,
    pub data_type: DataType,
}

/// The complete result of one query: the windowed series plus every derived
/// presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub location: Location,
    pub series: HourlySeries,
    pub chart: ChartData,
    pub rows: Vec<TableRow>,
    pub summary: Summary,
    pub stats: StatsDisplay,
}

/// Run one query end to end: resolve the place, fetch the hourly series,
/// cut the window relative to `now`, and derive chart, table, and
/// statistics.
pub fn run_query(
    client: &Client,
    request: &QueryRequest,
    now: NaiveDateTime,
) -> Result<DashboardView> {
    let location = match &request.place {
        Place::City(name) => client.resolve_location(name)?,
        Place::Coordinates(loc) => *loc,
    };
    let fetched = client.fetch_hourly(&location, request.window, request.data_type)?;
    debug!("fetched {} hourly entries", fetched.len());
    let series = select_window(&fetched, request.window, now)?;
    let summary = Summary::compute(&series.values)?;
    let unit = display_unit(request.data_type);
    let chart = ChartData::from_series(&series, request.data_type);
    let rows = view::table_rows(&series);
    let stats = StatsDisplay::new(&summary, unit);
    Ok(DashboardView {
        location,
        series,
        chart,
        rows,
        summary,
        stats,
    })
}
