use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Timestamp layout used by the Open-Meteo hourly time axis.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Timestamp layout used for tables, labels, and error messages.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Hourly observable supported by the forecast endpoint.
///
/// The serialized form is the exact identifier the API expects in the
/// `hourly` query parameter and uses as the value column key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "temperature_2m")]
    Temperature2m,
    #[serde(rename = "relative_humidity_2m")]
    RelativeHumidity2m,
    #[serde(rename = "precipitation")]
    Precipitation,
    #[serde(rename = "dew_point_2m")]
    DewPoint2m,
    #[serde(rename = "apparent_temperature")]
    ApparentTemperature,
    #[serde(rename = "surface_pressure")]
    SurfacePressure,
    #[serde(rename = "wind_speed_10m")]
    WindSpeed10m,
}

impl DataType {
    /// Every supported data type, in display order.
    pub const ALL: [DataType; 7] = [
        DataType::Temperature2m,
        DataType::RelativeHumidity2m,
        DataType::Precipitation,
        DataType::DewPoint2m,
        DataType::ApparentTemperature,
        DataType::SurfacePressure,
        DataType::WindSpeed10m,
    ];

    /// Identifier used in request URLs and response columns.
    pub fn api_name(&self) -> &'static str {
        match self {
            DataType::Temperature2m => "temperature_2m",
            DataType::RelativeHumidity2m => "relative_humidity_2m",
            DataType::Precipitation => "precipitation",
            DataType::DewPoint2m => "dew_point_2m",
            DataType::ApparentTemperature => "apparent_temperature",
            DataType::SurfacePressure => "surface_pressure",
            DataType::WindSpeed10m => "wind_speed_10m",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "temperature_2m" => Ok(DataType::Temperature2m),
            "relative_humidity_2m" => Ok(DataType::RelativeHumidity2m),
            "precipitation" => Ok(DataType::Precipitation),
            "dew_point_2m" => Ok(DataType::DewPoint2m),
            "apparent_temperature" => Ok(DataType::ApparentTemperature),
            "surface_pressure" => Ok(DataType::SurfacePressure),
            "wind_speed_10m" => Ok(DataType::WindSpeed10m),
            other => Err(Error::UnsupportedDataType(other.to_string())),
        }
    }
}

/// Unit of a relative time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PastUnit {
    Hours,
    Days,
}

/// Which slice of the hourly series a query asks for.
///
/// `Dates` selects whole calendar days, both endpoints inclusive. `Past`
/// selects the trailing `count` hours or days ending at the current hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    Dates { start: NaiveDate, end: NaiveDate },
    Past { count: u32, unit: PastUnit },
}

impl TimeWindow {
    /// Query parameters that make the forecast endpoint return at least the
    /// hours this window needs.
    ///
    /// A relative window is widened to whole `past_days`; the exact trailing
    /// slice is cut locally afterwards.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            TimeWindow::Dates { start, end } => vec![
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
            ],
            TimeWindow::Past { count, unit } => {
                let days = match unit {
                    PastUnit::Days => *count,
                    PastUnit::Hours => count.div_ceil(24),
                };
                vec![
                    ("past_days", days.to_string()),
                    ("forecast_days", "1".to_string()),
                ]
            }
        }
    }
}

/// Geographic point resolved from a city name or given directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Hourly observations with their time axis.
///
/// Both vectors always have the same length and the timestamps are strictly
/// increasing; `new` refuses anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub timestamps: Vec<NaiveDateTime>,
    pub values: Vec<f64>,
}

impl HourlySeries {
    pub fn new(timestamps: Vec<NaiveDateTime>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(Error::MalformedResponse(format!(
                "time axis has {} entries but value column has {}",
                timestamps.len(),
                values.len()
            )));
        }
        if let Some(w) = timestamps.windows(2).find(|w| w[0] >= w[1]) {
            return Err(Error::MalformedResponse(format!(
                "time axis is not strictly increasing around {}",
                w[0]
            )));
        }
        Ok(Self { timestamps, values })
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Copy out the half-open index range `start..end`.
    pub(crate) fn slice(&self, start: usize, end: usize) -> Self {
        Self {
            timestamps: self.timestamps[start..end].to_vec(),
            values: self.values[start..end].to_vec(),
        }
    }
}

/// Parse a timestamp in either the wire or the display layout.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, WIRE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, DISPLAY_FORMAT))
        .map_err(|e| Error::MalformedResponse(format!("bad timestamp {s:?}: {e}")))
}

/// Render a timestamp in the display layout (`2024-05-01 13:00`).
pub fn display_timestamp(ts: NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

/// Top-level geocoding payload. `results` is absent entirely when the API
/// finds no match, hence the default.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoResponse {
    #[serde(default)]
    pub results: Vec<GeoResult>,
}

/// One geocoding candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

/// Top-level forecast payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub hourly: Option<HourlyBlock>,
}

/// The `hourly` object: a `time` axis plus one value column per requested
/// data type, keyed by its API identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    #[serde(flatten)]
    pub columns: HashMap<String, Vec<Option<f64>>>,
}

impl HourlyBlock {
    /// Extract the column for `data_type` and pair it with the time axis.
    ///
    /// A missing column, a null observation, an unparseable timestamp, or
    /// mismatched lengths are all reported as [`Error::MalformedResponse`].
    pub fn into_series(mut self, data_type: DataType) -> Result<HourlySeries> {
        let column = self.columns.remove(data_type.api_name()).ok_or_else(|| {
            Error::MalformedResponse(format!(
                "hourly block lacks a {} column",
                data_type.api_name()
            ))
        })?;
        let mut values = Vec::with_capacity(column.len());
        for (i, v) in column.into_iter().enumerate() {
            match v {
                Some(v) => values.push(v),
                None => {
                    return Err(Error::MalformedResponse(format!(
                        "{} column holds a null at index {i}",
                        data_type.api_name()
                    )));
                }
            }
        }
        let mut timestamps = Vec::with_capacity(self.time.len());
        for t in &self.time {
            timestamps.push(parse_timestamp(t)?);
        }
        HourlySeries::new(timestamps, values)
    }
}
