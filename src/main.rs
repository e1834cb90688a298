use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::Context;
use clap::Parser;
use threadpool::ThreadPool;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use resume_extract::output::{self, OutputFormat};
use resume_extract::record::ResumeRow;
use resume_extract::{extract_information, pdf};

#[derive(Parser)]
#[command(
    name = "resume-extract",
    version,
    about = "Extract structured fields from PDF resumes into CSV, Excel, or JSON"
)]
struct Cli {
    /// Directory containing PDF resumes (searched recursively)
    #[arg(default_value = "resumes")]
    input: PathBuf,

    /// Output file path; defaults to resume_data.<ext> for the chosen format
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Worker threads for batch processing
    #[arg(short, long, default_value_t = 4)]
    jobs: usize,

    /// Column name for the source file in the output
    #[arg(long, default_value = output::DEFAULT_SOURCE_COLUMN)]
    source_column: String,

    /// Also write a field-completion summary report next to the output
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let (rows, errors) = process_resumes(&cli.input, cli.jobs)?;

    println!("Total files processed: {}", rows.len() + errors.len());
    println!("Successful extractions: {}", rows.len());
    println!("Failed extractions: {}", errors.len());
    for error in &errors {
        println!("  - {error}");
    }

    if rows.is_empty() {
        println!("No data to save.");
        return Ok(());
    }

    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("resume_data.{}", cli.format.extension())));
    output::write_rows(cli.format, &rows, &cli.source_column, &output_path)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    println!("Results have been written to {}", output_path.display());

    if cli.summary {
        let summary_path = output_path.with_file_name("extraction_summary.txt");
        output::write_summary_report(&rows, &summary_path)
            .with_context(|| format!("failed to write {}", summary_path.display()))?;
        println!("Summary report written to {}", summary_path.display());
    }

    Ok(())
}

/// Walks `dir` for PDF files and extracts a record per document on a worker
/// pool. Documents are independent, so the only serialization point is the
/// result channel drained here; rows are sorted by source name afterwards so
/// the output order does not depend on pool scheduling.
fn process_resumes(dir: &Path, jobs: usize) -> anyhow::Result<(Vec<ResumeRow>, Vec<String>)> {
    anyhow::ensure!(dir.is_dir(), "input directory not found: {}", dir.display());

    let pool = ThreadPool::new(jobs.max(1));
    let (tx, rx) = mpsc::channel();

    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
    {
        let path = entry.path().to_path_buf();
        let tx = tx.clone();
        pool.execute(move || {
            debug!(path = %path.display(), "processing resume");
            let result = pdf::extract_text(&path).map(|text| ResumeRow {
                source: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                record: extract_information(&text),
            });
            // Send only fails if the main thread already bailed out.
            let _ = tx.send((path, result));
        });
    }
    drop(tx);

    let mut rows = Vec::new();
    let mut errors = Vec::new();
    for (path, result) in rx {
        match result {
            Ok(row) => {
                println!("Processed file: {}", path.display());
                rows.push(row);
            }
            Err(e) => {
                println!("Skipped {}: {e}", path.display());
                errors.push(e.to_string());
            }
        }
    }

    rows.sort_by(|a, b| a.source.cmp(&b.source));
    Ok((rows, errors))
}
