//! JSON output formatting

use super::ColumnReport;
use crate::Result;
use serde::Serialize;
use std::io::Write;

/// Write a report as JSON followed by a newline
pub fn write_report<W: Write>(report: &ColumnReport, pretty: bool, writer: W) -> Result<()> {
    write_json(report, pretty, writer)
}

/// Write several reports as one JSON array followed by a newline
pub fn write_reports<W: Write>(reports: &[ColumnReport], pretty: bool, writer: W) -> Result<()> {
    write_json(reports, pretty, writer)
}

fn write_json<T, W>(value: &T, pretty: bool, mut writer: W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}
