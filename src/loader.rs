//! Manifest loading.
//! Locates the manifest file at a pack root and parses it.

use log::debug;
use std::fs;
use std::path::Path;

use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};
use crate::manifest::{parse_manifest, Manifest};

/// Loads the manifest found directly inside `root`.
///
/// # Returns
/// * `Ok(Some(Manifest))` - The parsed manifest
/// * `Ok(None)` - No manifest file exists at `root`; this is not an error
///
/// # Errors
/// * `Error::IoError` if the manifest exists but cannot be read
/// * Any parse error from [`parse_manifest`]
pub fn load_manifest<P: AsRef<Path>>(root: P) -> Result<Option<Manifest>> {
    let root = root.as_ref();
    let manifest_path = root.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        println!("No {} found at {}", MANIFEST_FILE, root.display());
        return Ok(None);
    }

    debug!("Loading manifest from {}", manifest_path.display());
    let content = fs::read_to_string(&manifest_path).map_err(Error::IoError)?;
    let manifest = parse_manifest(&content, root)?;
    debug!(
        "Loaded manifest '{}' with {} steps{}",
        manifest.name,
        manifest.steps.len(),
        if manifest.no_dest { " (nodest)" } else { "" }
    );

    Ok(Some(manifest))
}
