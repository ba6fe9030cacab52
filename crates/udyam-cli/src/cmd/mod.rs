/// Command module for the `udyam` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the already-read input and returns `Ok(())` on success or
/// a [`crate::error::CliError`] on failure.
pub mod checksum;
pub mod validate;
pub mod validate_pan;
