mod cli;
mod cmd;
mod error;
mod format;
mod io;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use udyam_core::ValidationConfig;

pub use cli::{ChecksumAction, Cli, Command, OutputFormat, PathOrStdin};
use error::CliError;
use format::{FormatMode, FormatterConfig};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mode = FormatMode::from(cli.format);
    let fmt_config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose);
    let config = ValidationConfig {
        gstin_turnover_threshold: cli.gstin_threshold,
        ..ValidationConfig::default()
    };

    match &cli.command {
        Command::Validate { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            let stderr = std::io::stderr();
            cmd::validate::run(
                &mut stderr.lock(),
                &content,
                &config,
                cli.evaluation_date(),
                mode,
                &fmt_config,
            )
        }
        Command::ValidatePan { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            let stderr = std::io::stderr();
            cmd::validate_pan::run(
                &mut stderr.lock(),
                &content,
                &config,
                cli.evaluation_date(),
                mode,
                &fmt_config,
            )
        }
        Command::Checksum { action } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            match action {
                ChecksumAction::Verify { digits } => cmd::checksum::verify(&mut out, digits, mode),
                ChecksumAction::Generate { digits } => {
                    cmd::checksum::generate(&mut out, digits, mode)
                }
            }
        }
        Command::Version => {
            println!("{}", udyam_core::version());
            Ok(())
        }
    }
}
