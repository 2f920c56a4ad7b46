//! meteogram
//!
//! A lightweight Rust library for fetching, windowing, and summarizing hourly
//! Open-Meteo weather data. Pairs with the `meteogram` CLI.
//!
//! ### Features
//! - Geocode a city name or use coordinates directly
//! - Fetch one hourly variable over an explicit date range or a trailing
//!   hours/days window ending at the current hour
//! - Summary statistics (mean, median, modes, standard deviation, min, max)
//!   with decimal half-up rounding for display
//! - Chart, table, and statistics presentations derived from the same series
//! - Save the windowed series as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use meteogram::{Client, DataType, PastUnit, Place, QueryRequest, TimeWindow};
//!
//! let client = Client::default();
//! let request = QueryRequest {
//!     place: Place::City("Helsinki".into()),
//!     window: TimeWindow::Past { count: 7, unit: PastUnit::Days },
//!     data_type: DataType::Temperature2m,
//! };
//! let now = chrono::Local::now().naive_local();
//! let view = meteogram::dashboard::run_query(&client, &request, now)?;
//! println!("{}", view.stats.mean);
//! meteogram::storage::save_csv(&view.rows, "helsinki.csv")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod session;
pub mod stats;
pub mod storage;
pub mod units;
pub mod view;
pub mod window;

pub use api::Client;
pub use dashboard::{DashboardView, Place, QueryRequest};
pub use error::{Error, Result};
pub use models::{DataType, HourlySeries, Location, PastUnit, TimeWindow};
pub use session::{DisplayState, Session};
pub use stats::Summary;
