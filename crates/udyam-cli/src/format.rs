/// Defect formatting: human-readable and JSON (NDJSON) modes.
///
/// - **Human mode** (default): one line per [`FieldDefect`] to stderr,
///   `[E] <rule-code>  <field>: <message>`, with the tag colored red when
///   colors are enabled.
/// - **JSON mode**: each defect is a single-line JSON object (NDJSON)
///   `{"rule","kind","field","message"}`, followed by a summary object.
///
/// Quiet mode drops the summary line; defects are always printed.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use udyam_core::{FieldDefect, ValidationOutcome};

/// Returns `true` if ANSI color codes should be emitted to stderr.
///
/// Colors are off when `--no-color` is passed, when `NO_COLOR` is set, or
/// when stderr is not a TTY.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

/// Configuration for the defect formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress the summary line.
    pub quiet: bool,
    /// Emit timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// Structured NDJSON output.
    Json,
}

impl From<crate::OutputFormat> for FormatMode {
    fn from(format: crate::OutputFormat) -> Self {
        match format {
            crate::OutputFormat::Human => Self::Human,
            crate::OutputFormat::Json => Self::Json,
        }
    }
}

/// Writes a single defect in human-readable format.
///
/// Format: `[E] pan-number  pan: Invalid PAN format (e.g., ABCDE1234F).`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_defect_human<W: Write>(
    writer: &mut W,
    defect: &FieldDefect,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let tag = if config.colors {
        format!("{ANSI_RED}[E]{ANSI_RESET}")
    } else {
        "[E]".to_owned()
    };
    writeln!(
        writer,
        "{tag} {rule}  {field}: {message}",
        rule = defect.rule_id,
        field = defect.field,
        message = defect.message,
    )
}

/// Writes a single defect as an NDJSON line.
///
/// # Errors
///
/// Returns an error if serialization or writing to `writer` fails.
pub fn write_defect_json<W: Write>(writer: &mut W, defect: &FieldDefect) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, defect)?;
    writeln!(writer)
}

/// Writes the human summary line: `accepted` or `3 defects`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    defects: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    if defects == 0 {
        if config.colors {
            writeln!(writer, "{ANSI_GREEN}accepted{ANSI_RESET}, 0 defects")
        } else {
            writeln!(writer, "accepted, 0 defects")
        }
    } else {
        writeln!(
            writer,
            "{defects} {}",
            pluralize(defects, "defect", "defects")
        )
    }
}

/// Writes the JSON summary object as a final NDJSON line.
///
/// Format: `{"summary":{"accepted":false,"defects":3}}`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_json<W: Write>(
    writer: &mut W,
    defects: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    let accepted = defects == 0;
    writeln!(
        writer,
        r#"{{"summary":{{"accepted":{accepted},"defects":{defects}}}}}"#
    )
}

/// Writes timing information in verbose mode; a no-op otherwise.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}µs", duration.as_micros())
}

/// Writes every defect of `outcome` followed by the summary.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_outcome<W: Write>(
    writer: &mut W,
    outcome: &ValidationOutcome,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    for defect in outcome.defects() {
        match mode {
            FormatMode::Human => write_defect_human(writer, defect, config)?,
            FormatMode::Json => write_defect_json(writer, defect)?,
        }
    }
    let count = outcome.defects().len();
    match mode {
        FormatMode::Human => write_summary_human(writer, count, config),
        FormatMode::Json => write_summary_json(writer, count, config),
    }
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
