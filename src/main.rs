use std::path::PathBuf;

use aoc2022::days::DAYS;
use aoc2022::{run, Answer, RunConfig, Variant};
use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Runs puzzle solutions against the example and real inputs.
#[derive(Parser)]
#[command(name = "aoc2022", version, about)]
struct Cli {
    /// Day to run; every registered day when omitted
    day: Option<u8>,

    /// Which input to run against
    #[arg(long, value_enum, default_value_t = Inputs::Both)]
    variant: Inputs,

    /// Directory holding dayN.in and dayNtest.in
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "input")]
    input_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Inputs {Test, Real, Both}

impl Inputs {
    fn variants(self) -> &'static [Variant] {
        match self {
            Inputs::Test => &[Variant::Test],
            Inputs::Real => &[Variant::Real],
            Inputs::Both => &[Variant::Test, Variant::Real],
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn show(answer: &Answer) -> String {
    if answer.is_multiline() {format!("\n{}", answer)} else {answer.to_string()}
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = RunConfig {input_dir: cli.input_dir};
    let days: Vec<u8> = match cli.day {
        Some(day) => vec![day],
        None => (1 ..= DAYS.len() as u8).collect(),
    };

    let mut failed = 0;
    for &day in &days {
        for &variant in cli.variant.variants() {
            match run(day, variant, &config) {
                Ok(r) => {
                    println!("day {} ({}): part 1 = {}, part 2 = {}", r.day, r.variant, show(&r.answers.part1), show(&r.answers.part2));
                    println!("{} seconds elapsed", r.elapsed.as_secs_f32());
                }
                Err(e) => {
                    error!(day, %variant, "{}", e);
                    failed += 1;
                }
            }
        }
    }

    if failed > 0 && cli.day.is_some() {
        anyhow::bail!("day {}: {} of {} run(s) failed", days[0], failed, cli.variant.variants().len());
    }
    Ok(())
}
