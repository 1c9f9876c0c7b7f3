//! Top-level session: loads the import packs and the destination manifest,
//! then applies the destination manifest in place.

use log::debug;
use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::error::Result;
use crate::interpreter::{Interpreter, TagRegistry};
use crate::loader::load_manifest;
use crate::renderer::TemplateRenderer;

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The destination has no manifest.
    NoManifest,
    /// The destination manifest carries the `nodest` pragma.
    NoDest,
    /// The destination manifest ran; holds the final context.
    Applied(Context),
}

/// Loads every import root into a [`TagRegistry`]. Roots without a
/// manifest contribute nothing; earlier roots win name clashes.
pub fn build_registry(import_roots: &[PathBuf]) -> Result<TagRegistry> {
    let mut manifests = Vec::with_capacity(import_roots.len());
    for root in import_roots {
        if let Some(manifest) = load_manifest(root)? {
            manifests.push(manifest);
        }
    }
    let registry = TagRegistry::from_manifests(manifests);
    debug!("Registered tags: {:?}", registry.tags().collect::<Vec<_>>());
    Ok(registry)
}

/// Applies the manifest at `dest_root` using packs from `import_roots`.
///
/// # Flow
/// 1. Loads the import packs into a tag registry
/// 2. Loads the destination manifest, stopping if there is none
/// 3. Stops if the destination manifest is marked `nodest`
/// 4. Runs the destination manifest with `dest_root` as both source and destination
pub fn run(
    renderer: &dyn TemplateRenderer,
    import_roots: &[PathBuf],
    dest_root: &Path,
) -> Result<Outcome> {
    let registry = build_registry(import_roots)?;

    let Some(manifest) = load_manifest(dest_root)? else {
        println!("Nothing to do here...");
        return Ok(Outcome::NoManifest);
    };

    if manifest.no_dest {
        println!("The specified destination has the `nodest` pragma. Stopping.");
        return Ok(Outcome::NoDest);
    }

    let context = Interpreter::new(renderer).run(
        dest_root,
        dest_root,
        &manifest.steps,
        &registry,
        Context::new(),
    )?;
    Ok(Outcome::Applied(context))
}
