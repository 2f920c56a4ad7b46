//! Synchronous client for the **Open-Meteo** geocoding and forecast APIs.
//!
//! Resolves city names to coordinates via the geocoding endpoint and fetches
//! one hourly variable from the forecast endpoint as a tidy
//! [`HourlySeries`].
//!
//! ### Notes
//! - Geocoding always asks for the single best match (`count=1`).
//! - The forecast request sets `timezone=auto`, so timestamps arrive in the
//!   location's local time.
//! - Network timeouts use a sane default (30s) and can be adjusted by editing
//!   the client builder.
//!
//! Typical usage:
//! ```no_run
//! # use meteogram::{Client, DataType, PastUnit, TimeWindow};
//! let client = Client::default();
//! let location = client.resolve_location("Helsinki")?;
//! let series = client.fetch_hourly(
//!     &location,
//!     TimeWindow::Past { count: 7, unit: PastUnit::Days },
//!     DataType::Temperature2m,
//! )?;
//! # Ok::<(), meteogram::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::models::{DataType, ForecastResponse, GeoResponse, HourlySeries, Location, TimeWindow};
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    pub geocoding_url: String,
    pub forecast_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("meteogram/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            geocoding_url: "https://geocoding-api.open-meteo.com/v1/search".into(),
            forecast_url: "https://api.open-meteo.com/v1/forecast".into(),
            http,
        }
    }
}

// Allow -, _, . unescaped in query values (common in city names)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value.trim(), SAFE).to_string()
}

impl Client {
    /// Resolve a city name to coordinates using the best geocoding match.
    ///
    /// ### Errors
    /// - Network/HTTP error
    /// - JSON decoding error (surfaced as [`Error::MalformedResponse`])
    /// - [`Error::LocationNotFound`] when the API knows no such place
    pub fn resolve_location(&self, city: &str) -> Result<Location> {
        let url = format!(
            "{}?name={}&count=1&language=en&format=json",
            self.geocoding_url,
            enc(city)
        );
        debug!("GET {url}");
        let body = self.http.get(&url).send()?.error_for_status()?.text()?;
        let parsed: GeoResponse = serde_json::from_str(&body)?;
        let hit = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| Error::LocationNotFound(city.to_string()))?;
        debug!(
            "resolved {:?} to {} ({}, {})",
            city, hit.name, hit.latitude, hit.longitude
        );
        Ok(Location {
            latitude: hit.latitude,
            longitude: hit.longitude,
        })
    }

    /// Fetch one hourly variable for `location` over `window`.
    ///
    /// The response covers at least the requested window; cutting the exact
    /// slice is left to [`crate::window::select_window`]. One request per
    /// call, no retries.
    ///
    /// ### Errors
    /// - Network/HTTP error
    /// - [`Error::MalformedResponse`] when the payload lacks the hourly
    ///   block, the requested column, or holds null observations
    pub fn fetch_hourly(
        &self,
        location: &Location,
        window: TimeWindow,
        data_type: DataType,
    ) -> Result<HourlySeries> {
        let mut url = format!(
            "{}?latitude={}&longitude={}&hourly={}&timezone=auto",
            self.forecast_url,
            location.latitude,
            location.longitude,
            data_type.api_name()
        );
        for (key, value) in window.to_query_params() {
            url.push_str(&format!("&{}={}", key, enc(&value)));
        }
        debug!("GET {url}");
        let body = self.http.get(&url).send()?.error_for_status()?.text()?;
        let parsed: ForecastResponse = serde_json::from_str(&body)?;
        let hourly = parsed
            .hourly
            .ok_or_else(|| Error::MalformedResponse("response lacks an hourly block".into()))?;
        hourly.into_series(data_type)
    }
}
