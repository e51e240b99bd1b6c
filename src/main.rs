use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use unique_chars::{
    check, demo_samples,
    io_utils::{io_cli_error, read_samples, simple_cli_error, unique_chars_cli_error},
    Config, OutputFormat, Report, Stats, UniqueCharsError,
};

/// Report whether each sample contains only unique ASCII characters.
#[derive(Parser)]
struct Args {
    /// Samples to check
    inputs: Vec<String>,
    /// Check every line of a file
    #[arg(long = "file")]
    files: Vec<PathBuf>,
    /// Check the built-in sample set
    #[arg(long)]
    demo: bool,
    /// Print reports as a JSON array
    #[arg(long)]
    json: bool,
    /// Print a summary line after the reports
    #[arg(long)]
    summary: bool,
}

fn main() {
    setup_logger();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn setup_logger() {
    use tracing_subscriber::{
        filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
        Registry,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let fmt_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .without_time();

    Registry::default()
        .with(fmt_layer)
        .with(filter)
        .try_init()
        .ok();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config::new(args.json, args.summary);

    let mut samples = Vec::new();
    if args.demo {
        samples.extend(demo_samples());
    }
    for path in &args.files {
        let lines = read_samples(path).map_err(|e| match e {
            UniqueCharsError::Io(io) => io_cli_error("reading samples", path, io),
            other => unique_chars_cli_error("reading samples", other),
        })?;
        debug!(path = %path.display(), count = lines.len(), "loaded samples");
        samples.extend(lines);
    }
    samples.extend(args.inputs);

    if samples.is_empty() {
        let err = UniqueCharsError::Input("no samples given".to_string());
        return Err(unique_chars_cli_error("nothing to check", err).into());
    }

    let mut stats = Stats::new();
    let reports: Vec<Report> = samples
        .iter()
        .map(|s| {
            let report = check(s);
            stats.record(&report);
            report
        })
        .collect();

    match config.format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report.message());
            }
        }
        OutputFormat::Json => {
            let out = serde_json::to_string_pretty(&reports)
                .map_err(|e| simple_cli_error(&format!("encoding reports failed: {e}")))?;
            println!("{out}");
        }
    }

    stats.report();
    if config.summary {
        println!("{}", stats.summary());
    }
    Ok(())
}
