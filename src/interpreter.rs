//! Manifest walk.
//! Threads the context through every step in order and expands imports
//! recursively.

use log::debug;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::context::Context;
use crate::error::Result;
use crate::executor::{Directive, Executor};
use crate::manifest::{Manifest, Step};
use crate::renderer::TemplateRenderer;

/// Manifests available to `from` steps, keyed by tag.
///
/// Registries are values: [`TagRegistry::without`] builds a new one, so a
/// tag consumed inside one import chain stays available to sibling steps.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: BTreeMap<String, Arc<Manifest>>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry keyed by manifest name. When two manifests share a
    /// name, the one appearing first wins.
    pub fn from_manifests<I: IntoIterator<Item = Manifest>>(manifests: I) -> Self {
        let manifests: Vec<Manifest> = manifests.into_iter().collect();
        let mut tags = BTreeMap::new();
        for manifest in manifests.into_iter().rev() {
            tags.insert(manifest.name.clone(), Arc::new(manifest));
        }
        Self { tags }
    }

    pub fn get(&self, tag: &str) -> Option<&Arc<Manifest>> {
        self.tags.get(tag)
    }

    /// Returns a copy of the registry without `tag`.
    pub fn without(&self, tag: &str) -> Self {
        let mut tags = self.tags.clone();
        tags.remove(tag);
        Self { tags }
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Walks manifest steps through an [`Executor`].
pub struct Interpreter<'a> {
    executor: Executor<'a>,
}

impl<'a> Interpreter<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { executor: Executor::new(renderer) }
    }

    /// Runs `steps` in order and returns the context left after the last one.
    ///
    /// # Arguments
    /// * `src_root` - Directory step sources are read from
    /// * `dest_root` - Directory step outputs are written to; imports never change it
    /// * `steps` - Steps to run, in declaration order
    /// * `registry` - Manifests reachable through `from` steps
    /// * `context` - Seed context
    ///
    /// # Notes
    /// - A `from` step naming a tag missing from `registry` does nothing.
    /// - An `arg` step never overrides a name that is already bound.
    /// - The first failing step aborts the walk and every enclosing walk;
    ///   effects of earlier steps stay on disk.
    pub fn run(
        &self,
        src_root: &Path,
        dest_root: &Path,
        steps: &[Step],
        registry: &TagRegistry,
        context: Context,
    ) -> Result<Context> {
        let mut context = context;
        for step in steps {
            match self.executor.apply(src_root, dest_root, step, &context)? {
                Some(Directive::Import { tag }) => match registry.get(&tag) {
                    Some(manifest) => {
                        debug!("Expanding '{}' from {}", tag, manifest.root.display());
                        context = self.run(
                            &manifest.root,
                            dest_root,
                            &manifest.steps,
                            &registry.without(&tag),
                            context,
                        )?;
                    }
                    None => debug!("No manifest registered for '{}', skipping", tag),
                },
                Some(Directive::Bind { name, value }) => {
                    context = context.with_default(name, value);
                }
                None => {}
            }
        }
        Ok(context)
    }
}
