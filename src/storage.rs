use crate::view::TableRow;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save table rows as CSV with header.
pub fn save_csv<P: AsRef<Path>>(rows: &[TableRow], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("date", "time", "value"))?;
    for r in rows {
        wtr.serialize((&r.date, &r.time, r.value))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save table rows as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(rows: &[TableRow], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
