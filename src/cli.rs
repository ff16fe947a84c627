use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use twentyfour::solver::constants::TARGET;
use twentyfour::{NO_SOLUTION, SearchStrategy, SolverConfig, TwentyFourSolver, parse_operands};

/// Shown when the operands do not describe four integers in range
pub const INVALID_INPUT_MESSAGE: &str = "Enter four integers from 1 to 10.";
/// Shown when the search is exhausted
pub const NO_SOLUTION_MESSAGE: &str = "No expression found.";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - Make 24 from four numbers
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Find an expression using four integers from 1 to 10 that equals 24")]
#[command(version)]
pub struct CliArgs {
    /// The four numbers, each an integer from 1 to 10
    #[arg(allow_negative_numbers = true)]
    pub operands: Vec<String>,

    /// Value the expression must reach
    #[arg(short, long, default_value_t = TARGET)]
    pub target: f64,

    /// Search arrangements on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Print -1 for both invalid input and no solution
    #[arg(long)]
    pub legacy: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl CliArgs {
    pub fn solver_config(&self) -> SolverConfig {
        let strategy = if self.parallel {
            SearchStrategy::Parallel
        } else {
            SearchStrategy::Sequential
        };

        SolverConfig {
            target: self.target,
            strategy,
            ..SolverConfig::default()
        }
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Produce the line to print for the given arguments.
///
/// # Errors
///
/// Fails on invalid operands, unless running in legacy mode.
pub fn render(args: &CliArgs) -> Result<String> {
    let solver = TwentyFourSolver::with_config(args.solver_config());

    let operands = match parse_operands(args.operands.as_slice()) {
        Ok(operands) => operands,
        Err(e) if args.legacy => {
            warn!("{}", e);
            return Ok(NO_SOLUTION.to_string());
        }
        Err(e) => return Err(e).context(INVALID_INPUT_MESSAGE),
    };

    info!(
        "Searching for an expression over {:?} that equals {}",
        args.operands, args.target
    );

    match solver.find_solution(operands) {
        Some(solution) => Ok(solution.expression()),
        None if args.legacy => Ok(NO_SOLUTION.to_string()),
        None => {
            warn!("No matching expression found");
            Ok(NO_SOLUTION_MESSAGE.to_string())
        }
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let line = render(&args)?;
    println!("{}", line);
    Ok(())
}
