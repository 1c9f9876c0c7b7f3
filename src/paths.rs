//! Lexical path helpers.
//! Nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path lexically: drops `.` components and folds `..` into
/// their parent where one is available. An empty result becomes `.`.
pub fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Joins `rel` under `root` and normalizes the result.
///
/// Unlike [`Path::join`], an absolute `rel` does not replace `root`: its
/// leading root component is dropped so the result always lives under `root`.
pub fn absolutize<R: AsRef<Path>, P: AsRef<Path>>(root: R, rel: P) -> PathBuf {
    let mut joined = root.as_ref().to_path_buf();
    for component in rel.as_ref().components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {}
            other => joined.push(other.as_os_str()),
        }
    }
    normalize(joined)
}
