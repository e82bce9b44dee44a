//! Command-line front end: expand short descriptions and write JSON records.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing_subscriber::{filter::LevelFilter, fmt};

use lathe::batch::{load_descriptions, run_batch};
use lathe::generate::{GenerationParams, NullGenerator, Pregenerated, TextGenerator};
use lathe::{Config, Error, Shaper};

/// Expand short descriptions into whole-sentence passages of at least N words.
#[derive(Debug, Parser)]
#[command(name = "lathe", version, about)]
struct Cli {
    /// Short description, or a file with one description per line.
    #[arg(long, value_name = "TEXT|FILE")]
    desc: String,

    /// JSON object mapping descriptions to pre-generated text.
    #[arg(long, value_name = "FILE")]
    generated: Option<PathBuf>,

    /// Directory for the JSON records.
    #[arg(long, value_name = "DIR", default_value = ".")]
    out: PathBuf,

    /// TOML config with window and filler settings.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(log_level(cli.verbose));

    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let shaper = Shaper::try_from(&config)?;

    let descriptions = load_descriptions(&cli.desc)?;
    if descriptions.is_empty() {
        println!("No descriptions to process.");
        return Ok(());
    }

    let generator: Box<dyn TextGenerator> = match &cli.generated {
        Some(path) => Box::new(Pregenerated::load(path)?),
        None => Box::new(NullGenerator),
    };

    let summary = run_batch(
        generator.as_ref(),
        &GenerationParams::default(),
        &shaper,
        &descriptions,
        &cli.out,
    );

    for path in &summary.written {
        println!("Saved: {}", path.display());
    }
    let out_dir = cli.out.canonicalize().unwrap_or_else(|_| cli.out.clone());
    println!(
        "Done. Processed {} of {} descriptions. JSON saved to: {}",
        summary.succeeded(),
        descriptions.len(),
        out_dir.display()
    );
    Ok(())
}
