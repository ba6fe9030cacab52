/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `udyam` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The tool could not read the input or
///   could not turn it into a form record at all.
/// - Exit code **1**: logical failure. The input was read and checked, and
///   the verdict is negative (form rejected, check digit wrong).
use std::path::PathBuf;

use thiserror::Error;

/// All error conditions that the `udyam` CLI can produce.
///
/// The `Display` text is the line `main` prints to stderr before exiting.
#[derive(Debug, Error)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    #[error("error: file not found: {}", .path.display())]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    #[error("error: permission denied: {}", .path.display())]
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    #[error("error: file too large: {}", too_large_detail(.input, .limit, .actual))]
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        input: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    #[error("error: invalid UTF-8 in {input}: first invalid byte at offset {byte_offset}")]
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        input: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    #[error("error: failed to read stdin: {detail}")]
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    #[error("error: I/O error on {input}: {detail}")]
    IoError {
        /// The file path, `"-"`, or the name of the output stream.
        input: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The JSON could not be deserialized into the expected record shape.
    #[error("error: {detail}")]
    ParseFailed {
        /// The parse error, including line and column.
        detail: String,
    },

    /// A command argument is malformed.
    #[error("error: invalid argument: {detail}")]
    InvalidArgument {
        /// What was wrong with the argument.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The record was rejected. The defects have already been printed.
    #[error("error: form rejected with {defects} {}", defect_noun(.defects))]
    Rejected {
        /// Number of defects reported.
        defects: usize,
    },

    /// The number's check digit does not match.
    #[error("error: checksum invalid")]
    ChecksumInvalid,
}

impl CliError {
    /// Returns the process exit code associated with this error.
    ///
    /// - `2` for input failures.
    /// - `1` for logical failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::InvalidArgument { .. } => 2,
            Self::Rejected { .. } | Self::ChecksumInvalid => 1,
        }
    }

    /// Wraps a write failure on one of the process output streams.
    pub fn output(stream: &str, e: &std::io::Error) -> Self {
        Self::IoError {
            input: stream.to_owned(),
            detail: e.to_string(),
        }
    }
}

fn defect_noun(count: &usize) -> &'static str {
    if *count == 1 { "defect" } else { "defects" }
}

fn too_large_detail(input: &str, limit: &u64, actual: &Option<u64>) -> String {
    match actual {
        Some(actual) => format!("{input} is {actual} bytes, limit is {limit} bytes"),
        None => format!("{input} exceeded limit of {limit} bytes"),
    }
}
