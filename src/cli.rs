//! Command-line interface implementation for Custodian.
//! Provides argument parsing and help text formatting using clap.

use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};

/// Command-line arguments structure for Custodian.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Custodian: apply template packs to a project directory",
    long_about = None
)]
pub struct Args {
    /// Pack directories to import from, followed by the destination directory
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Splits the positional paths into import roots and the destination.
    ///
    /// # Returns
    /// * `None` if no path was given
    pub fn targets(&self) -> Option<(&[PathBuf], &Path)> {
        let (dest, imports) = self.paths.split_last()?;
        Some((imports, dest.as_path()))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for malformed arguments
pub fn get_args() -> Args {
    Args::parse()
}

/// Prints the usage text to stdout.
pub fn print_usage() -> std::io::Result<()> {
    Args::command()
        .help_template(
            r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
        )
        .print_help()
}
