//! CSV export of the session history.

use std::{fs::File, io::Write, path::Path};

use csv::WriterBuilder;

use crate::{error::ExportError, model::HistoryRecord};

pub const HEADER: [&str; 5] = ["State", "Capital", "Temperature", "Condition", "Time"];

/// Write `records` to a new (or truncated) UTF-8 CSV file at `path`.
pub fn export(records: &[HistoryRecord], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)
        .map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;

    write_records(records, file)?;

    tracing::info!(rows = records.len(), path = %path.display(), "history exported");
    Ok(())
}

/// Header row, then one row per record in order. The header is written even
/// when there are no records.
pub fn write_records<W: Write>(records: &[HistoryRecord], out: W) -> Result<(), ExportError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &str, condition: &str) -> HistoryRecord {
        HistoryRecord {
            state: state.to_string(),
            capital: "Somewhere".into(),
            temperature: "21.5 °C".into(),
            condition: condition.to_string(),
            time: "2024-06-01T12:00".into(),
        }
    }

    fn render(records: &[HistoryRecord]) -> String {
        let mut buf = Vec::new();
        write_records(records, &mut buf).expect("write to memory");
        String::from_utf8(buf).expect("utf-8 output")
    }

    #[test]
    fn empty_history_writes_header_only() {
        assert_eq!(render(&[]), "State,Capital,Temperature,Condition,Time\n");
    }

    #[test]
    fn rows_follow_header_in_order() {
        let out = render(&[record("Goa", "☀️ Clear Sky"), record("Assam", "🌫️ Fog")]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Goa,Somewhere,21.5 °C,☀️ Clear Sky,2024-06-01T12:00");
        assert_eq!(lines[2], "Assam,Somewhere,21.5 °C,🌫️ Fog,2024-06-01T12:00");
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        let out = render(&[record("Jammu, Kashmir", "say \"hi\"")]);
        assert!(out.contains("\"Jammu, Kashmir\""));
        assert!(out.contains("\"say \"\"hi\"\"\""));
    }

    #[test]
    fn unwritable_destination_is_io_error() {
        let err = export(&[], Path::new("/nonexistent-dir/definitely/history.csv")).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
