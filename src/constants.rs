//! Common constants used throughout Custodian.

/// Name of the manifest file looked up at the root of every pack and destination
pub const MANIFEST_FILE: &str = "Custodianfile";

/// Printed when the command line carries no paths at all
pub const NEED_INPUT_MESSAGE: &str = "Need at least one input";
