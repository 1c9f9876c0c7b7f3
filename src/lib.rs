//! Custodian is a manifest-driven project scaffolding tool.
//! It copies files and renders templates from reusable packs into a
//! destination directory, following the `Custodianfile` found in each pack
//! and in the destination itself.

/// Command-line interface module for the Custodian application
pub mod cli;

/// Common constants
pub mod constants;

/// Variable context available to templates
pub mod context;

/// Error types and handling for the Custodian application
pub mod error;

/// Execution of individual steps
/// Handles copy, template, import and arg steps
pub mod executor;

/// Ordered manifest walk with recursive import expansion
pub mod interpreter;

/// Locating and reading `Custodianfile` manifests
pub mod loader;

/// Manifest model and decoding from EDN
pub mod manifest;

/// Lexical path normalization
pub mod paths;

/// Template rendering functionality
pub mod renderer;

/// Session driver: registry building and destination application
pub mod session;
