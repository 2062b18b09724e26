//! pdfsift CLI - analyze parsed PDF documents

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;

use pdfsift::{analyze_all, AnalyzeOptions, Analyzer, DocumentRecord, DocumentSource, JsonSource};

#[derive(Parser)]
#[command(name = "pdfsift")]
#[command(version)]
#[command(about = "Extract structured text and heuristic metadata from parsed PDF documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List PDF files in a folder
    Scan {
        /// Folder to scan
        #[arg(value_name = "DIR")]
        folder: PathBuf,
    },

    /// Analyze one parsed-document JSON dump
    Analyze {
        /// Input dump file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        format: OutputKind,

        /// Maximum number of keywords
        #[arg(long, default_value = "10")]
        max_keywords: usize,
    },

    /// Analyze every parsed-document dump in a folder
    Batch {
        /// Folder containing dump files
        #[arg(value_name = "DIR")]
        folder: PathBuf,

        /// Directory for per-document summaries
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputKind {
    /// Short human-readable summary
    Summary,
    /// Structurally-marked full text
    Text,
    /// Full document record as JSON
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan { folder } => cmd_scan(&folder),
        Commands::Analyze {
            input,
            output,
            format,
            max_keywords,
        } => cmd_analyze(&input, output.as_deref(), format, max_keywords),
        Commands::Batch { folder, output } => cmd_batch(&folder, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_scan(folder: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let files = pdfsift::list_pdf_files(folder)?;
    if files.is_empty() {
        println!("{}", "No PDF files found".yellow());
        return Ok(());
    }
    for file in &files {
        println!("{}", file.display());
    }
    println!("{}", format!("{} PDF file(s)", files.len()).green());
    Ok(())
}

fn cmd_analyze(
    input: &Path,
    output: Option<&Path>,
    format: OutputKind,
    max_keywords: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = AnalyzeOptions::new().with_max_keywords(max_keywords);
    let document = JsonSource::new(input).load()?;
    let record = Analyzer::with_options(options).analyze(&document);

    let rendered = render_record(&record, format)?;
    match output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn cmd_batch(folder: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let files = pdfsift::list_files_with_extension(folder, "json")?;
    if files.is_empty() {
        println!("{}", "No parsed-document dumps found".yellow());
        return Ok(());
    }

    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let sources: Vec<JsonSource> = files.iter().map(JsonSource::new).collect();
    let items = analyze_all(&sources, &AnalyzeOptions::default());

    let mut failures = 0;
    for item in &items {
        pb.set_message(item.source.clone());
        match &item.result {
            Ok(record) => {
                if let Some(dir) = output {
                    let stem = Path::new(&item.source)
                        .file_stem()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .to_string();
                    fs::write(dir.join(format!("{stem}.summary.txt")), &record.summary)?;
                }
            }
            Err(e) => {
                // One broken dump must not abort the rest of the batch.
                warn!("failed to analyze {}: {e}", item.source);
                failures += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let ok = items.len() - failures;
    println!("{}", format!("{ok} document(s) analyzed").green());
    if failures > 0 {
        println!("{}", format!("{failures} document(s) failed").red());
    }
    Ok(())
}

fn render_record(
    record: &DocumentRecord,
    format: OutputKind,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        OutputKind::Summary => {
            let meta = &record.metadata;
            let mut out = format!(
                "{} ({} pages, {} bytes)\n",
                meta.filename.bold(),
                meta.page_count,
                meta.file_size
            );
            if record.summary.is_empty() {
                out.push_str("No findings\n");
            } else {
                out.push_str(&record.summary);
                out.push('\n');
            }
            out
        }
        OutputKind::Text => record.full_text.clone(),
        OutputKind::Json => serde_json::to_string_pretty(record)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfsift::{ParsedDocument, RawPage, SourceInfo};

    fn write_dump(dir: &Path, name: &str, text: &str) -> PathBuf {
        let doc = ParsedDocument::new(
            SourceInfo {
                filename: "note.pdf".to_string(),
                file_size: 64,
                created: None,
                modified: None,
            },
            vec![RawPage::with_text(612.0, 792.0, text)],
        );
        let path = dir.join(name);
        fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_analyze_command_loads_dump() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_dump(dir.path(), "note.json", "Total 1,250.00 due 03/15/2024");
        let output = dir.path().join("note.txt");

        cmd_analyze(&input, Some(&output), OutputKind::Summary, 10).unwrap();

        let rendered = fs::read_to_string(&output).unwrap();
        assert!(rendered.contains("note.pdf"));
        assert!(rendered.contains("Dates found: 03/15/2024"));
    }

    #[test]
    fn test_analyze_command_missing_dump_errors() {
        let result = cmd_analyze(
            Path::new("/nonexistent/dump.json"),
            None,
            OutputKind::Summary,
            10,
        );
        assert!(result.is_err());
    }
}
