//! Display units for the supported hourly data types.
//!
//! The returned strings are appended verbatim to formatted values, so some
//! carry a leading space (`12.3 hPa`) and some do not (`55%`, `21.4°C`).

use crate::error::Result;
use crate::models::DataType;

/// Unit suffix shown next to values of the given data type.
pub fn display_unit(data_type: DataType) -> &'static str {
    match data_type {
        DataType::RelativeHumidity2m => "%",
        DataType::Temperature2m | DataType::DewPoint2m | DataType::ApparentTemperature => "°C",
        DataType::Precipitation => " ml",
        DataType::SurfacePressure => " hPa",
        DataType::WindSpeed10m => " km/h",
    }
}

/// Look up the unit for a raw identifier string.
///
/// Unknown identifiers yield [`crate::Error::UnsupportedDataType`].
pub fn unit_for(identifier: &str) -> Result<&'static str> {
    identifier.parse::<DataType>().map(display_unit)
}
