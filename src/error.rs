//! Error handling for Custodian.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that abort a custodian run.
///
/// A missing manifest and an unresolved import are deliberately absent here:
/// the former is `Ok(None)` from the loader, the latter a no-op in the interpreter.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The manifest file is not valid EDN.
    #[error("Cannot parse manifest '{path}': {message}.")]
    ManifestSyntax { path: String, message: String },

    /// The manifest is valid EDN but not a usable manifest.
    #[error("Invalid manifest: {0}.")]
    InvalidManifest(String),

    /// A step declares a type that is not one of the recognized step kinds.
    #[error("Unknown step type in {step}.")]
    UnknownStepType { step: String },

    /// A step reached the executor in a shape it cannot run.
    #[error("Invalid step {step}.")]
    InvalidStep { step: String },

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Directory traversal failed while copying a tree.
    #[error("Copy error: {0}.")]
    WalkError(#[from] walkdir::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
