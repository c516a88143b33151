use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{LevelFilter, error};
use stackcalc::{
    evaluate,
    shell::{Shell, ShellConfig},
};

/// stackcalc is an interactive calculator for infix arithmetic with
/// `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text shown before each line in interactive mode.
    #[arg(long, default_value = ">>> ")]
    prompt: String,

    /// Number of decimals printed for each result.
    #[arg(long, default_value_t = 2)]
    precision: usize,

    /// Raises the log level; repeat for more detail. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Evaluates this expression once and exits instead of starting the
    /// interactive loop.
    expression: Option<String>,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let shell = Shell::new(ShellConfig { prompt: args.prompt,
                                         precision: args.precision,
                                         ..ShellConfig::default() });

    if let Some(expression) = args.expression {
        return match evaluate(&expression) {
            Ok(value) => {
                println!("{}", shell.format_result(value));
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = shell.run() {
        error!("terminal error: {e}");
        eprintln!("Failed to read from the terminal: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
