//! Record sinks: CSV, Excel, and JSON writers plus the summary report.
//!
//! All sinks honor the same column order: the nine extraction columns in
//! [`COLUMN_ORDER`], then the caller-supplied source column last.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};
use serde_json::Value;

use crate::error::{ExtractError, Result};
use crate::record::{ResumeRow, COLUMN_ORDER};

/// Source column name used when the caller has no preference.
pub const DEFAULT_SOURCE_COLUMN: &str = "Resume Name";

/// Output formats supported by `write_rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Excel,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Excel => "xlsx",
            OutputFormat::Json => "json",
        }
    }
}

/// Writes `rows` to `path` in the requested format.
pub fn write_rows(
    format: OutputFormat,
    rows: &[ResumeRow],
    source_column: &str,
    path: &Path,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(rows, source_column, path),
        OutputFormat::Excel => write_xlsx(rows, source_column, path),
        OutputFormat::Json => write_json(rows, source_column, path),
    }
}

/// CSV sink: header row first, one record per row, absent fields as empty
/// cells.
pub fn write_csv(rows: &[ResumeRow], source_column: &str, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = COLUMN_ORDER.to_vec();
    header.push(source_column);
    writer.write_record(&header)?;

    for row in rows {
        let mut fields: Vec<&str> = COLUMN_ORDER
            .iter()
            .map(|column| row.record.get(column).unwrap_or(""))
            .collect();
        fields.push(&row.source);
        writer.write_record(&fields)?;
    }

    writer.flush()?;
    Ok(())
}

/// JSON sink: an array of objects keyed by column name, absent fields as
/// `null`, the source column last in each object.
pub fn write_json(rows: &[ResumeRow], source_column: &str, path: &Path) -> Result<()> {
    let mut documents = Vec::with_capacity(rows.len());
    for row in rows {
        let mut object = serde_json::Map::new();
        for column in COLUMN_ORDER {
            let value = match row.record.get(column) {
                Some(v) => Value::String(v.to_string()),
                None => Value::Null,
            };
            object.insert(column.to_string(), value);
        }
        object.insert(source_column.to_string(), Value::String(row.source.clone()));
        documents.push(Value::Object(object));
    }

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &Value::Array(documents))?;
    Ok(())
}

/// Excel sink: styled header row, per-column widths sized to content,
/// frozen header pane.
pub fn write_xlsx(rows: &[ResumeRow], source_column: &str, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x366092))
        .set_align(FormatAlign::Center);

    let mut columns: Vec<&str> = COLUMN_ORDER.to_vec();
    columns.push(source_column);

    for (col, name) in columns.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *name, &header_format)
            .map_err(|e| ExtractError::Xlsx(e.to_string()))?;
        let mut width = name.len();
        for row in rows {
            let value = if col < COLUMN_ORDER.len() {
                row.record.get(name).unwrap_or("")
            } else {
                row.source.as_str()
            };
            width = width.max(value.len());
        }
        worksheet
            .set_column_width(col as u16, (width + 2).clamp(12, 50) as f64)
            .map_err(|e| ExtractError::Xlsx(e.to_string()))?;
    }

    for (r, row) in rows.iter().enumerate() {
        for (col, name) in columns.iter().enumerate() {
            let value = if col < COLUMN_ORDER.len() {
                row.record.get(name).unwrap_or("")
            } else {
                row.source.as_str()
            };
            worksheet
                .write_string((r + 1) as u32, col as u16, value)
                .map_err(|e| ExtractError::Xlsx(e.to_string()))?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| ExtractError::Xlsx(e.to_string()))?;
    workbook
        .save(path)
        .map_err(|e| ExtractError::Xlsx(e.to_string()))?;
    Ok(())
}

/// Plain-text summary of field completion rates across the batch.
pub fn write_summary_report(rows: &[ResumeRow], path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "RESUME EXTRACTION SUMMARY REPORT")?;
    writeln!(file, "{}", "=".repeat(50))?;
    writeln!(file)?;
    writeln!(file, "Total resumes processed: {}", rows.len())?;
    writeln!(file)?;
    writeln!(file, "FIELD COMPLETION STATISTICS:")?;
    writeln!(file, "{}", "-".repeat(30))?;

    for column in COLUMN_ORDER {
        let completed = rows.iter().filter(|r| r.record.has(column)).count();
        let percentage = if rows.is_empty() {
            0.0
        } else {
            completed as f64 / rows.len() as f64 * 100.0
        };
        writeln!(file, "{column}: {completed}/{} ({percentage:.1}%)", rows.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ExtractionRecord;

    fn sample_rows() -> Vec<ResumeRow> {
        vec![ResumeRow {
            source: "jane_doe.pdf".into(),
            record: ExtractionRecord {
                name: Some("Jane Doe".into()),
                email: Some("jane.doe@company.org".into()),
                skills: Some("Python, Rust".into()),
                ..Default::default()
            },
        }]
    }

    #[test]
    fn csv_round_trip_preserves_values_and_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&sample_rows(), DEFAULT_SOURCE_COLUMN, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        let mut expected: Vec<&str> = COLUMN_ORDER.to_vec();
        expected.push(DEFAULT_SOURCE_COLUMN);
        assert_eq!(headers.iter().collect::<Vec<_>>(), expected);

        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "Jane Doe");
        assert_eq!(&record[1], "jane.doe@company.org");
        assert_eq!(&record[3], "Python, Rust");
        assert_eq!(&record[9], "jane_doe.pdf");
    }

    #[test]
    fn json_marks_absent_fields_null_and_source_last() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&sample_rows(), "Resume_File", &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        let doc = &value[0];
        assert_eq!(doc["Name"], "Jane Doe");
        assert!(doc["Phone"].is_null());
        assert_eq!(doc["Resume_File"], "jane_doe.pdf");
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys.last().unwrap().as_str(), "Resume_File");
        assert_eq!(keys.first().unwrap().as_str(), "Name");
    }

    #[test]
    fn xlsx_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_xlsx(&sample_rows(), DEFAULT_SOURCE_COLUMN, &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn summary_report_counts_completed_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.txt");
        write_summary_report(&sample_rows(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Total resumes processed: 1"));
        assert!(text.contains("Name: 1/1 (100.0%)"));
        assert!(text.contains("Phone: 0/1 (0.0%)"));
    }
}
