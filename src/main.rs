//! Resolute CLI.
//!
//! # Commands
//!
//! - `resolute prove <FORMULA>...` - Refute a set of formulas and print the trace
//! - `resolute explain [FILE]` - Run the text pipeline over a file or stdin
//! - `resolute repl` - Interactive session (the default)

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use resolute::pipeline::Pipeline;
use resolute::prover::{DedupMode, PairSelection, Prover, ProverConfig};
use resolute::repl::Repl;
use resolute::session::Session;
use resolute::unify::UnifierMode;

#[derive(Parser)]
#[command(name = "resolute")]
#[command(about = "Resolution prover for a small first-order fragment")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Try to refute the given formulas
    Prove {
        /// Formulas, e.g. "∀x (Human(x) → Mortal(x))"
        #[arg(required = true)]
        formulas: Vec<String>,
        #[command(flatten)]
        settings: Settings,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Formalize text (one formula per line), prove it and explain the result
    Explain {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
        #[command(flatten)]
        settings: Settings,
    },
    /// Interactive session
    Repl {
        #[command(flatten)]
        settings: Settings,
    },
}

#[derive(Args)]
struct Settings {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maximum number of resolution steps
    #[arg(long)]
    max_steps: Option<usize>,
    /// Unifier: single_pass or complete
    #[arg(long)]
    unifier: Option<UnifierMode>,
    /// Pair selection: first_match or all
    #[arg(long)]
    pair_selection: Option<PairSelection>,
    /// Duplicate detection: canonical or literal_set
    #[arg(long)]
    dedup: Option<DedupMode>,
}

impl Settings {
    fn resolve(&self) -> Result<ProverConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => ProverConfig::from_json_file(path)?,
            None => ProverConfig::default(),
        };
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        if let Some(unifier) = self.unifier {
            config.unifier = unifier;
        }
        if let Some(pair_selection) = self.pair_selection {
            config.pair_selection = pair_selection;
        }
        if let Some(dedup) = self.dedup {
            config.dedup = dedup;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Option<Commands>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Some(Commands::Prove {
            formulas,
            settings,
            json,
        }) => {
            let outcome = Prover::new(settings.resolve()?).prove(&formulas);
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome);
            }
            Ok(verdict_code(outcome.proved))
        }
        Some(Commands::Explain { file, settings }) => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    text
                }
            };
            let pipeline = Pipeline::plain(Prover::new(settings.resolve()?));
            let runtime = tokio::runtime::Runtime::new()?;
            let report = runtime.block_on(pipeline.run(&text))?;
            println!("{}", report.outcome);
            println!();
            println!("{}", report.explanation);
            Ok(verdict_code(report.outcome.proved))
        }
        Some(Commands::Repl { settings }) => run_repl(settings.resolve()?),
        None => run_repl(ProverConfig::default()),
    }
}

fn run_repl(config: ProverConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    println!("Resolute - resolution prover");
    println!("Type :help for help, :quit to exit.\n");
    Repl::with_session(Session::with_config(config)).run()?;
    Ok(ExitCode::SUCCESS)
}

fn verdict_code(proved: bool) -> ExitCode {
    if proved {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
