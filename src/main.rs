//! Passforge CLI
//!
//! Thin command-line front-end over the library's two operations:
//! generate a password, and report the strength of one.

use clap::{Args, Parser, Subcommand};
use passforge::{
    FileConfig, GenerationCriteria, PasswordGenerator, StrengthEstimator, StrengthReport,
};
use std::io::BufRead;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Secure password generator
#[derive(Parser, Debug)]
#[command(name = "passforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "PASSFORGE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Report the strength of a password
    Check(CheckArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
struct GenerateArgs {
    /// Password length (8-128)
    #[arg(short, long)]
    length: Option<usize>,

    /// Leave digits out
    #[arg(long)]
    no_numbers: bool,

    /// Leave symbols out
    #[arg(long)]
    no_symbols: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Print a strength report after each password
    #[arg(short, long)]
    show_strength: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
struct CheckArgs {
    /// Password to check; read from stdin when omitted
    password: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only passwords and reports.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("Passforge v{}", passforge::VERSION);

    let config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    match cli.command {
        Commands::Generate(args) => run_generate(&config, &args),
        Commands::Check(args) => run_check(&config, args),
    }
}

fn run_generate(config: &FileConfig, args: &GenerateArgs) {
    let defaults = config.generation;
    let criteria = GenerationCriteria {
        length: args.length.unwrap_or(defaults.length),
        include_numbers: defaults.include_numbers && !args.no_numbers,
        include_symbols: defaults.include_symbols && !args.no_symbols,
    };

    let mut generator = PasswordGenerator::from_config(config);

    for _ in 0..args.count {
        let password = match generator.generate(&criteria) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        println!("{}", password);

        if args.show_strength {
            print_report(&generator.estimate_strength(password.as_str()));
            println!();
        }
    }

    info!(
        count = args.count,
        reseeds = generator.source().reseed_count(),
        "Done"
    );
}

fn run_check(config: &FileConfig, args: CheckArgs) {
    let password = match args.password {
        Some(p) => p,
        None => {
            let mut line = String::new();
            if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
                eprintln!("Error: failed to read password from stdin: {}", e);
                std::process::exit(1);
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let estimator = StrengthEstimator::new(config.strength);
    print_report(&estimator.estimate(&password));
}

fn print_report(report: &StrengthReport) {
    println!("Strength: {}", report.strength_level);
    println!("Entropy: {:.2} bits", report.entropy_bits);
    println!("Character Set Size: {}", report.charset_size);
    println!("Composition: {}", report.composition());
}
