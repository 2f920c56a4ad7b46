use chrono::{Duration, NaiveDate, NaiveDateTime};
use meteogram::view::{
    ChartData, ChartKind, MODE_DISPLAY_CAP, StatsDisplay, chart_kind, format_modes, table_rows,
    tick_step,
};
use meteogram::{DataType, HourlySeries, Summary};

fn series(hours: usize) -> HourlySeries {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let timestamps: Vec<NaiveDateTime> = (0..hours)
        .map(|i| start + Duration::hours(i as i64))
        .collect();
    let values: Vec<f64> = (0..hours).map(|i| i as f64 / 2.0).collect();
    HourlySeries::new(timestamps, values).unwrap()
}

#[test]
fn precipitation_draws_as_bars() {
    assert_eq!(chart_kind(DataType::Precipitation), ChartKind::Bar);
    assert_eq!(chart_kind(DataType::Temperature2m), ChartKind::Line);
    assert_eq!(chart_kind(DataType::WindSpeed10m), ChartKind::Line);
}

#[test]
fn tick_step_scales_with_length() {
    assert_eq!(tick_step(20), 4);
    assert_eq!(tick_step(24), 2);
    assert_eq!(tick_step(48), 4);
    assert_eq!(tick_step(168), 14);
    assert_eq!(tick_step(5), 1);
    assert_eq!(tick_step(1), 1);
}

#[test]
fn chart_data_carries_labels_values_and_unit() {
    let s = series(24);
    let chart = ChartData::from_series(&s, DataType::Temperature2m);
    assert_eq!(chart.labels.len(), 24);
    assert_eq!(chart.labels[0], "2024-05-01 00:00");
    assert_eq!(chart.values, s.values);
    assert_eq!(chart.data_type, DataType::Temperature2m);
    assert_eq!(chart.unit, "°C");
    assert_eq!(chart.kind, ChartKind::Line);
    assert_eq!(chart.tick_step, 2);
}

#[test]
fn table_rows_split_date_and_time() {
    let s = series(2);
    let rows = table_rows(&s);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2024-05-01");
    assert_eq!(rows[0].time, "00:00");
    assert_eq!(rows[1].time, "01:00");
    assert_eq!(rows[1].display_value(" km/h"), "0.5 km/h");
}

#[test]
fn mode_list_is_capped_with_an_ellipsis() {
    let unit = "°C";
    assert_eq!(format_modes(&[], unit), "");
    assert_eq!(format_modes(&[4.0], unit), "4°C");
    assert_eq!(format_modes(&[1.0, 2.0], unit), "1°C, 2°C");
    let five = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(format_modes(&five, unit), "1°C, 2°C, 3°C, 4°C, ...");
    assert_eq!(MODE_DISPLAY_CAP, 4);
}

#[test]
fn stats_display_rounds_to_one_decimal_but_keeps_raw_range() {
    let vals = [11.25, 11.25, 13.553, 9.91];
    let summary = Summary::compute(&vals).unwrap();
    let display = StatsDisplay::new(&summary, "°C");
    assert_eq!(display.mean, "11.5°C");
    assert_eq!(display.range, "9.91°C to 13.553°C");
    assert_eq!(display.median, "11.3°C");
    assert_eq!(display.modes, "11.25°C");
    assert_eq!(display.amplitude, "3.6°C");
    assert_eq!(display.std_dev, "1.3°C");
}
