use std::fs;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::Pattern;
use hexline_tools::{
    decode_capture, format_decoded_pretty, inspect_capture, registry_rows, InspectReport,
};

#[derive(Parser)]
#[command(
    name = "hexline-tools",
    version,
    about = "hexline capture inspection and decoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a capture file into structured output.
    Decode {
        /// Path to the capture, or `-` for stdin.
        capture: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Summarize per-type traffic of a capture file or directory.
    Inspect {
        /// Path to a capture file or a directory of captures.
        path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected captures.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected captures (after sorting).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the message type registry.
    Registry {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Decode { capture, format } => {
            let text = read_capture(&capture)?;
            let report = decode_capture(&text);
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Pretty => {
                    for entry in &report.decoded {
                        println!("{}", format_decoded_pretty(entry));
                    }
                }
            }
            for rejected in &report.rejected {
                eprintln!(
                    "line {}: {} ({:?})",
                    rejected.line, rejected.reason, rejected.raw
                );
            }
        }
        Command::Inspect {
            path,
            glob,
            sort,
            limit,
        } => {
            if path.is_dir() {
                let mut entries = collect_captures(&path, glob.as_deref())?;
                if let Some(InspectSort::Size) = sort {
                    entries.sort_by_key(|(_, size)| std::cmp::Reverse(*size));
                }
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for (entry, size) in entries {
                    let text = fs::read_to_string(&entry)
                        .with_context(|| format!("read capture {}", entry.display()))?;
                    println!("== {} ({size} bytes) ==", entry.display());
                    print_inspect_report(&inspect_capture(&text));
                }
            } else {
                let text = read_capture(&path)?;
                print_inspect_report(&inspect_capture(&text));
            }
        }
        Command::Registry { format } => match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(registry_rows())?);
            }
            OutputFormat::Pretty => {
                println!("{:>5}  {:<28} {:>6}", "code", "name", "min");
                for row in registry_rows() {
                    println!("{:>5}  {:<28} {:>6}", row.code, row.name, row.min_version);
                }
            }
        },
    }
    Ok(())
}

fn read_capture(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("read capture {}", path.display()))
    }
}

fn collect_captures(dir: &Path, filter: Option<&str>) -> Result<Vec<(PathBuf, u64)>> {
    let pattern = filter
        .map(Pattern::new)
        .transpose()
        .context("parse glob pattern")?;
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let name = entry.file_name();
            if !pattern.matches(&name.to_string_lossy()) {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push((path, size));
    }
    entries.sort();
    Ok(entries)
}

fn print_inspect_report(report: &InspectReport) {
    println!(
        "{} lines, {} bytes, {} unparseable",
        report.lines, report.bytes, report.unparseable
    );
    for t in &report.per_type {
        println!(
            "{:>5}  {:<28} {:>7} msgs {:>9} bytes",
            t.code, t.name, t.count, t.bytes
        );
    }
    if !report.unknown_codes.is_empty() {
        println!("unknown type codes: {:?}", report.unknown_codes);
    }
}
