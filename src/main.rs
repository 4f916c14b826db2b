use anyhow::Result;
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use student_data_check::validation::Validator;

#[derive(Parser)]
#[command(
    name = "student-data-check",
    about = "Checks that every student profile JSON file has the required keys",
    version,
    long_about = None
)]
struct Cli {
    /// Directory holding one subfolder per student
    ///
    /// Relative paths, including the default, resolve against the current
    /// working directory rather than the executable's location.
    #[arg(short, long, env = "STUDENT_DATA_DIR", default_value = "public/data")]
    data_dir: PathBuf,

    /// Output format for the validation result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match check_command(&cli.data_dir, cli.format) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("student_data_check=warn"),
        1 => EnvFilter::new("student_data_check=info"),
        _ => EnvFilter::new("student_data_check=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn check_command(data_dir: &Path, format: OutputFormat) -> Result<ExitCode> {
    tracing::info!("Validating student data directory: {}", data_dir.display());

    let report = match Validator::new().run(data_dir) {
        Ok(report) => report,
        Err(err) => {
            // Hard errors replace the report entirely
            eprintln!("{:?}", miette::Report::new(err));
            return Ok(ExitCode::FAILURE);
        }
    };

    match format {
        OutputFormat::Json => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", report.to_json()?)?;
        }
        OutputFormat::Text if report.is_empty() => {
            report.write_success(&mut std::io::stdout().lock())?;
        }
        OutputFormat::Text => {
            let stderr = std::io::stderr();
            report.write_errors(&mut stderr.lock(), stderr.is_terminal())?;
        }
    }

    Ok(if report.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
