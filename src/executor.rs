//! Execution of single manifest steps.
//! File-producing steps act on disk; `from` and `arg` steps hand a
//! [`Directive`] back to the interpreter instead.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::manifest::Step;
use crate::paths::absolutize;
use crate::renderer::TemplateRenderer;

/// Instruction for the interpreter produced by a non-file step.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Expand the manifest registered under `tag`.
    Import { tag: String },
    /// Bind `name` in the running context.
    Bind { name: String, value: serde_json::Value },
}

/// Runs steps against a source root and a destination root.
pub struct Executor<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Executor<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// Applies `step`, reading sources under `src_root` and writing under `dest_root`.
    ///
    /// # Returns
    /// * `Ok(None)` - The step ran (or was skipped) with no follow-up for the caller
    /// * `Ok(Some(Directive))` - The caller must import a pack or bind a variable
    ///
    /// # Errors
    /// * `Error::IoError` / `Error::WalkError` if reading or writing fails
    /// * `Error::MinijinjaError` if a template fails to render
    pub fn apply(
        &self,
        src_root: &Path,
        dest_root: &Path,
        step: &Step,
        context: &Context,
    ) -> Result<Option<Directive>> {
        if let Some(dest) = step.dest() {
            if step.is_conditional() && absolutize(dest_root, dest).exists() {
                println!("SKIP\t{}", dest.display());
                return Ok(None);
            }
        }

        match step {
            Step::Copy { src, dest, .. } => {
                copy_path(&absolutize(src_root, src), &absolutize(dest_root, dest))?;
                println!("COPY\t{}\t{}", src.display(), dest.display());
                Ok(None)
            }
            Step::Template { src, dest, .. } => {
                let template = fs::read_to_string(absolutize(src_root, src))?;
                let rendered = self.renderer.render(&template, context)?;
                println!("TEMPLATE\t{}\t{}", src.display(), dest.display());
                write_file(&absolutize(dest_root, dest), &rendered)?;
                Ok(None)
            }
            Step::Import { tag } => {
                println!("FROM\t{}", tag);
                Ok(Some(Directive::Import { tag: tag.clone() }))
            }
            Step::Arg { name, value } => {
                debug!("ARG\t{}\t{}", name, value);
                Ok(Some(Directive::Bind { name: name.clone(), value: value.clone() }))
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::copy(source, dest).map(|_| ()).map_err(Error::IoError)
}

/// Copies a file, or a directory tree recursively, overwriting what is there.
pub fn copy_path(source: &Path, dest: &Path) -> Result<()> {
    // Copying a path onto itself would truncate it.
    if source == dest {
        debug!("{} is its own destination, leaving it as is", source.display());
        return Ok(());
    }
    if !source.is_dir() {
        return copy_file(source, dest);
    }
    if dest.starts_with(source) {
        return Err(Error::InvalidStep {
            step: format!(
                "copy {} into its own subdirectory {}",
                source.display(),
                dest.display()
            ),
        });
    }

    for entry in WalkDir::new(source) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).map_err(|_| Error::InvalidStep {
            step: format!("copy {}", entry.path().display()),
        })?;
        let target: PathBuf = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(Error::IoError)?;
        } else {
            debug!("Copying {} to {}", entry.path().display(), target.display());
            copy_file(entry.path(), &target)?;
        }
    }
    Ok(())
}
