use std::path::PathBuf;
use std::process;

use editsc_chunks::{parse_any, parse_as, CodecOptions, Layout};
use editsc_core::BlockTypeTable;
use editsc_inspect::report;
use editsc_inspect::summary;

fn usage() {
    eprintln!("Usage: chunks-inspect <file> [OPTIONS]");
    eprintln!("  --layout <a|b>       Force the layout instead of detecting it");
    eprintln!("  --config <path>      Codec options (RON)");
    eprintln!("  --report <path>      Save the summary as JSON");
    eprintln!("  --top <n>            Block types to list (default: 10)");
    eprintln!("  --no-verify          Skip the Layout B round-trip check");
}

fn next_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Missing value for {}", flag);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut input: Option<PathBuf> = None;
    let mut layout: Option<Layout> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut report_path: Option<PathBuf> = None;
    let mut top_n = 10usize;
    let mut verify = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--layout" => {
                i += 1;
                layout = match next_value(&args, i, "--layout") {
                    "a" | "A" => Some(Layout::A),
                    "b" | "B" => Some(Layout::B),
                    other => {
                        eprintln!("Unknown layout: {} (expected a or b)", other);
                        process::exit(1);
                    }
                };
            }
            "--config" => {
                i += 1;
                config_path = Some(PathBuf::from(next_value(&args, i, "--config")));
            }
            "--report" => {
                i += 1;
                report_path = Some(PathBuf::from(next_value(&args, i, "--report")));
            }
            "--top" => {
                i += 1;
                top_n = match next_value(&args, i, "--top").parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("Invalid --top value");
                        process::exit(1);
                    }
                };
            }
            "--no-verify" => verify = false,
            "--help" | "-h" => {
                usage();
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
            other => {
                if input.is_some() {
                    eprintln!("Only one input file is supported");
                    process::exit(1);
                }
                input = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    let Some(input) = input else {
        usage();
        process::exit(1);
    };

    let options = match config_path {
        Some(ref path) => match CodecOptions::load(path) {
            Ok(options) => {
                log::info!("Loaded codec options from {}", path.display());
                options
            }
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => CodecOptions::default(),
    };

    let bytes = match std::fs::read(&input) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("{}: {}", input.display(), e);
            process::exit(1);
        }
    };

    let parsed = match layout {
        Some(layout) => parse_as(&bytes, layout, &options),
        None => parse_any(&bytes, &options),
    };
    let file = match parsed {
        Ok(file) => file,
        Err(e) => {
            log::error!("{}: {}", input.display(), e);
            process::exit(1);
        }
    };

    let block_types = match BlockTypeTable::defaults() {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load block types: {}", e);
            process::exit(1);
        }
    };

    let round_trip = summary::check_round_trip(&file, &bytes, verify);
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let summary = summary::summarize(
        &name,
        bytes.len(),
        &file,
        &block_types,
        top_n,
        round_trip,
    );

    println!("\n## {}\n", summary.file);
    println!("{}", report::format_markdown(&summary));

    if let Some(ref path) = report_path {
        if let Err(e) = report::save_report(path, &summary) {
            log::error!("Failed to save report to {}: {}", path.display(), e);
            process::exit(1);
        }
        log::info!("Saved report to {}", path.display());
    }

    if summary.round_trip.is_failure() {
        eprintln!("ERROR: round-trip check failed, exiting with code 1");
        process::exit(1);
    }
}
