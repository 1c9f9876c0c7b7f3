//! In-memory model of a pack manifest and its decoding from EDN.
//!
//! A manifest looks like:
//!
//! ```text
//! {:name "lib"
//!  :nodest true
//!  :steps [(copy "a.txt")
//!          (xtemplate "README.tmpl" "README.md")
//!          (arg "license" "MIT")
//!          (from "base")]}
//! ```
//!
//! [`decode_step`] is the only place that understands the positional
//! array form of a step; everything downstream works on [`Step`].

use edn_format::Value;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths;

/// A single manifest step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Copies a file or directory tree.
    Copy { src: PathBuf, dest: PathBuf, conditional: bool },
    /// Renders a text template.
    Template { src: PathBuf, dest: PathBuf, conditional: bool },
    /// Runs the steps of the manifest registered under `tag`.
    Import { tag: String },
    /// Binds `name` in the running context.
    Arg { name: String, value: serde_json::Value },
}

impl Step {
    /// Whether the step is skipped when its destination already exists.
    pub fn is_conditional(&self) -> bool {
        match self {
            Step::Copy { conditional, .. } | Step::Template { conditional, .. } => *conditional,
            _ => false,
        }
    }

    /// Destination path of file-producing steps.
    pub fn dest(&self) -> Option<&Path> {
        match self {
            Step::Copy { dest, .. } | Step::Template { dest, .. } => Some(dest.as_path()),
            _ => None,
        }
    }
}

/// A parsed pack manifest. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// Tag under which other manifests import this one
    pub name: String,
    /// Directory the manifest was loaded from
    pub root: PathBuf,
    pub steps: Vec<Step>,
    /// Marks a library pack that must never be applied as a destination
    pub no_dest: bool,
}

/// Parses manifest text loaded from `root`.
///
/// # Errors
/// * `Error::ManifestSyntax` if the text is not valid EDN
/// * `Error::InvalidManifest` if there is no `:steps` array or a step is malformed
/// * `Error::UnknownStepType` if a step names an unrecognized type
pub fn parse_manifest<P: AsRef<Path>>(content: &str, root: P) -> Result<Manifest> {
    let root = paths::normalize(root);
    let parsed = edn_format::parse_str(content).map_err(|e| Error::ManifestSyntax {
        path: root.display().to_string(),
        message: format!("{:?}", e),
    })?;

    let Value::Map(entries) = parsed else {
        return Err(Error::InvalidManifest(format!(
            "{} must contain a map at top level",
            root.display()
        )));
    };

    let mut name = None;
    let mut no_dest = false;
    let mut raw_steps = None;
    for (key, value) in &entries {
        match keyword_name(key) {
            Some("name") => name = atom_to_string(value),
            Some("nodest") => no_dest = is_truthy(value),
            Some("steps") => raw_steps = Some(value),
            _ => {}
        }
    }

    let steps = match raw_steps {
        Some(Value::Vector(items)) | Some(Value::List(items)) => {
            items.iter().map(decode_step).collect::<Result<Vec<_>>>()?
        }
        _ => {
            return Err(Error::InvalidManifest(
                "Custodianfile must have an array of steps".to_string(),
            ))
        }
    };

    let name = match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => root.display().to_string(),
    };

    Ok(Manifest { name, root, steps, no_dest })
}

/// Decodes one raw step declaration into a [`Step`].
pub fn decode_step(raw: &Value) -> Result<Step> {
    let items = match raw {
        Value::Vector(items) | Value::List(items) => items,
        other => {
            return Err(Error::InvalidManifest(format!(
                "step {} must be a list",
                edn_format::emit_str(other)
            )))
        }
    };
    let malformed =
        |what: &str| Error::InvalidManifest(format!("{} in step {}", what, edn_format::emit_str(raw)));

    let kind = items
        .first()
        .and_then(atom_to_string)
        .ok_or_else(|| malformed("missing step type"))?
        .trim_start_matches(':')
        .to_lowercase();

    match kind.as_str() {
        "copy" | "xcopy" | "template" | "xtemplate" => {
            let src = items
                .get(1)
                .and_then(atom_to_string)
                .map(PathBuf::from)
                .ok_or_else(|| malformed("missing source path"))?;
            let dest = items
                .get(2)
                .and_then(atom_to_string)
                .map(PathBuf::from)
                .unwrap_or_else(|| src.clone());
            let conditional = kind.starts_with('x');
            if kind.ends_with("copy") {
                Ok(Step::Copy { src, dest, conditional })
            } else {
                Ok(Step::Template { src, dest, conditional })
            }
        }
        "arg" => {
            let name =
                items.get(1).and_then(atom_to_string).ok_or_else(|| malformed("missing name"))?;
            let value = match (items.get(2), items.get(3)) {
                (Some(value), _) if *value != Value::Nil => to_json(value),
                (_, Some(value)) => to_json(value),
                _ => serde_json::Value::Null,
            };
            Ok(Step::Arg { name, value })
        }
        "from" => {
            let tag =
                items.get(1).and_then(atom_to_string).ok_or_else(|| malformed("missing tag"))?;
            Ok(Step::Import { tag })
        }
        _ => Err(Error::UnknownStepType { step: edn_format::emit_str(raw) }),
    }
}

/// Converts an EDN value into the JSON form used by the template context.
pub fn to_json(value: &Value) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        Value::Nil => Json::Null,
        Value::Boolean(b) => Json::Bool(*b),
        Value::Integer(i) => Json::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(f.into_inner())
            .map(Json::Number)
            .unwrap_or(Json::Null),
        Value::String(s) => Json::String(s.clone()),
        Value::Character(c) => Json::String(c.to_string()),
        Value::Symbol(_) | Value::Keyword(_) => {
            Json::String(atom_to_string(value).unwrap_or_default())
        }
        Value::Vector(items) | Value::List(items) => {
            Json::Array(items.iter().map(to_json).collect())
        }
        Value::Set(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Map(entries) => Json::Object(
            entries
                .iter()
                .map(|(k, v)| {
                    let key = keyword_name(k)
                        .map(str::to_string)
                        .or_else(|| atom_to_string(k))
                        .unwrap_or_else(|| edn_format::emit_str(k));
                    (key, to_json(v))
                })
                .collect(),
        ),
        other => Json::String(edn_format::emit_str(other)),
    }
}

fn keyword_name(value: &Value) -> Option<&str> {
    match value {
        Value::Keyword(keyword) if keyword.namespace().is_none() => Some(keyword.name()),
        _ => None,
    }
}

/// Reads scalars that may stand in for a string: strings, symbols and keywords.
fn atom_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Symbol(symbol) => Some(symbol.name().to_string()),
        Value::Keyword(keyword) => Some(format!(":{}", keyword.name())),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Nil | Value::Boolean(false))
}
