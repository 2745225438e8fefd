//! jpg-glitch: produce glitch art from an image file
//!
//! Usage: jpg-glitch [OPTIONS] INPUTFILE

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use std::process;

use jpg_glitch::{GlitchCommand, GlitchConfig, GlitchError, GuardBand};

#[derive(Parser)]
#[command(name = "jpg-glitch")]
#[command(version)]
#[command(about = "Glitch an image by deleting random lines and bytes", long_about = None)]
#[command(override_usage = "jpg-glitch [OPTIONS] INPUTFILE")]
struct Cli {
    /// Number of output iterations to produce
    #[arg(short = 'i', long = "iteration", value_name = "NUMBER", default_value = "1",
          value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,

    /// Number of times to delete random bytes
    #[arg(long, value_name = "NUMBER", default_value = "1")]
    delete_bytes: usize,

    /// Number of times to delete random lines
    #[arg(long, value_name = "NUMBER", default_value = "1")]
    delete_lines: usize,

    /// Do all glitches a random number of times (1-15) per iteration.
    /// Note: this often results in an invalid jpg
    #[arg(short, long)]
    random: bool,

    /// Random seed for reproducible output
    #[arg(long, value_name = "NUMBER")]
    seed: Option<u64>,

    /// Print run statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Log every glitch to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Input image file
    #[arg(value_name = "INPUTFILE")]
    inputs: Vec<PathBuf>,
}

/// Print a usage error the way the argument checks below do, then exit 1.
fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", Cli::command().render_usage());
    process::exit(1);
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let input = match cli.inputs.as_slice() {
        [] => usage_error("Too few arguments."),
        [input] => input.clone(),
        _ => usage_error("Too many arguments."),
    };
    if !input.is_file() {
        usage_error(&format!("File {} is not a real file.", input.display()));
    }

    let config = GlitchConfig {
        input,
        iterations: cli.iterations,
        delete_lines: cli.delete_lines,
        delete_bytes: cli.delete_bytes,
        random: cli.random,
        guard: GuardBand::default(),
    };

    if let Err(e) = run_glitch(config, cli.seed, cli.stats) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_glitch(config: GlitchConfig, seed: Option<u64>, stats: bool) -> Result<(), GlitchError> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let result = GlitchCommand::new(config).run(&mut rng, &mut handle)?;

    if stats {
        eprintln!("Glitch stats: {}", result);
    }
    Ok(())
}
