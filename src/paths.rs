//! Path resolution against the session's current directory.
//!
//! Everything here is purely lexical: no path is checked for existence, that
//! is left to whichever operation uses the result.

use std::path::{Component, Path, PathBuf};

/// Resolve `input` against `base`.
///
/// An absolute `input` replaces `base`; a relative one is joined onto it.
/// `.` segments are dropped and `..` pops one segment, never climbing above
/// the root.
pub fn resolve(base: &Path, input: &str) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in base.join(input).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !is_root(&resolved) {
                    resolved.pop();
                }
            }
            Component::Normal(segment) => resolved.push(segment),
        }
    }
    resolved
}

/// Whether `path` is a filesystem root (`/`, `C:\`, `\\server\share\`, ...)
pub fn is_root(path: &Path) -> bool {
    path.has_root() && path.parent().is_none()
}

/// Parent of `path`, or `path` itself when it is already a root.
pub fn parent_or_root(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => path.to_path_buf(),
    }
}
