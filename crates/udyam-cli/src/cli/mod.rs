//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits one line per defect to stderr and plain text to stdout.
/// `Json` emits NDJSON for defects and a single object for data.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// Operations of the `checksum` subcommand.
#[derive(Debug, Subcommand)]
pub enum ChecksumAction {
    /// Check a 12-digit Aadhaar number against its Verhoeff check digit.
    Verify {
        /// The full 12-digit number.
        #[arg(value_name = "DIGITS")]
        digits: String,
    },
    /// Compute the Verhoeff check digit for 11 data digits.
    Generate {
        /// The 11 data digits.
        #[arg(value_name = "DIGITS")]
        digits: String,
    },
}

/// All top-level subcommands exposed by the `udyam` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a Udyam registration form record (JSON).
    Validate {
        /// Path to a JSON form record, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Validate PAN holder details on their own (PAN, holder name, date).
    #[command(name = "validate-pan")]
    ValidatePan {
        /// Path to a JSON PAN holder request, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Verify or generate Aadhaar check digits.
    Checksum {
        #[command(subcommand)]
        action: ChecksumAction,
    },

    /// Print the udyam-core library version.
    Version,
}

/// Root CLI struct for the `udyam` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Debug, Parser)]
#[command(
    name = "udyam",
    version,
    about = "Udyam registration form validator",
    long_about = "Validates Udyam MSME registration form records and PAN holder\n\
                  details, and verifies or generates Aadhaar check digits."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: timing and per-rule debug logs
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `UDYAM_MAX_FILE_SIZE` environment variable.
    /// Default: 1048576 (1 MiB).
    #[arg(
        long,
        global = true,
        env = "UDYAM_MAX_FILE_SIZE",
        default_value = "1048576"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Evaluation date for future-date checks, as YYYY-MM-DD.
    ///
    /// Defaults to the local calendar date.
    #[arg(long, global = true, env = "UDYAM_TODAY", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Turnover (in rupees) above which a GSTIN is mandatory.
    #[arg(
        long,
        global = true,
        env = "UDYAM_GSTIN_THRESHOLD",
        default_value = "4000000",
        value_parser = parse_threshold
    )]
    pub gstin_threshold: f64,
}

/// Parses a turnover threshold: a finite, non-negative number of rupees.
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !value.is_finite() {
        return Err(format!("'{s}' is not a finite amount"));
    }
    if value < 0.0 {
        return Err(format!("'{s}' is negative"));
    }
    Ok(value)
}

impl Cli {
    /// The evaluation date: `--today` when given, otherwise the local date.
    pub fn evaluation_date(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
