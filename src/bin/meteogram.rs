use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use meteogram::view::StatsDisplay;
use meteogram::{
    Client, DashboardView, DataType, Location, PastUnit, Place, QueryRequest, TimeWindow,
};
use meteogram::{dashboard, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "meteogram",
    version,
    about = "Fetch, window & summarize Open-Meteo hourly weather data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch data (and optionally save and print a table or stats).
    Get(GetArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// City name to geocode (ignored when --lat/--lon are given).
    #[arg(short, long, default_value = "Helsinki")]
    city: String,
    /// Latitude in decimal degrees; together with --lon bypasses geocoding.
    #[arg(long, requires = "lon")]
    lat: Option<f64>,
    /// Longitude in decimal degrees; together with --lat bypasses geocoding.
    #[arg(long, requires = "lat")]
    lon: Option<f64>,
    /// Hourly data type (e.g., temperature_2m, precipitation, wind_speed_10m).
    #[arg(short = 't', long, default_value = "temperature_2m")]
    data_type: DataType,
    /// First day of an explicit range (YYYY-MM-DD).
    #[arg(long, requires = "end", conflicts_with_all = ["past_days", "past_hours"])]
    start: Option<NaiveDate>,
    /// Last day of an explicit range (YYYY-MM-DD), inclusive.
    #[arg(long, requires = "start")]
    end: Option<NaiveDate>,
    /// Trailing window of whole days ending at the current hour.
    #[arg(long, conflicts_with = "past_hours")]
    past_days: Option<u32>,
    /// Trailing window of hours ending at the current hour.
    #[arg(long)]
    past_hours: Option<u32>,
    /// Save the windowed series to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Print summary statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Print the hourly table to stdout.
    #[arg(long, default_value_t = false)]
    table: bool,
}

fn resolve_window(args: &GetArgs) -> Result<TimeWindow> {
    if let (Some(start), Some(end)) = (args.start, args.end) {
        if start > end {
            anyhow::bail!("--start {} is after --end {}", start, end);
        }
        return Ok(TimeWindow::Dates { start, end });
    }
    if let Some(count) = args.past_hours {
        return Ok(TimeWindow::Past {
            count,
            unit: PastUnit::Hours,
        });
    }
    let count = args.past_days.unwrap_or(7);
    Ok(TimeWindow::Past {
        count,
        unit: PastUnit::Days,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let window = resolve_window(&args)?;
    let place = match (args.lat, args.lon) {
        (Some(latitude), Some(longitude)) => Place::Coordinates(Location {
            latitude,
            longitude,
        }),
        _ => Place::City(args.city.clone()),
    };
    let request = QueryRequest {
        place,
        window,
        data_type: args.data_type,
    };

    let client = Client::default();
    let now = Local::now().naive_local();
    let view = dashboard::run_query(&client, &request, now)?;

    println!(
        "{} at {}, {}: {} entries",
        args.data_type,
        view.location.latitude,
        view.location.longitude,
        view.series.len()
    );

    if args.stats {
        print_stats(&view.stats, view.summary.count);
    }
    if args.table {
        print_table(&view);
    }

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&view.rows, path)?,
            "json" => storage::save_json(&view.rows, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", view.rows.len(), path.display());
    }

    Ok(())
}

fn print_stats(stats: &StatsDisplay, count: usize) {
    println!("count:     {}", count);
    println!("mean:      {}", stats.mean);
    println!("range:     {}", stats.range);
    println!("median:    {}", stats.median);
    println!("amplitude: {}", stats.amplitude);
    println!("mode(s):   {}", stats.modes);
    println!("std dev:   {}", stats.std_dev);
}

fn print_table(view: &DashboardView) {
    let unit = &view.chart.unit;
    for row in &view.rows {
        println!("{}  {}  {}", row.date, row.time, row.display_value(unit));
    }
}
