//! Lexical path helpers.
//!
//! Nothing here touches the filesystem: `..` is resolved against the
//! preceding component, not against symlinks on disk.

use std::path::{Component, Path, PathBuf};

/// Drop `.` components and fold `..` into the preceding normal component
///
/// `..` directly below the root is discarded (`/..` is `/`). Leading `..`
/// in a relative path is kept. An empty result becomes `.`.
///
/// ```rust
/// use std::path::Path;
/// use code_dbg_utils::paths::normalize;
///
/// assert_eq!(normalize(Path::new("a/./b/../c")), Path::new("a/c"));
/// ```
#[must_use]
pub fn normalize(path: &Path) -> PathBuf
{
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.into_iter().collect()
}

/// Resolve `path` against `base` (when relative) and normalize the result
#[must_use]
pub fn absolutize(path: &Path, base: &Path) -> PathBuf
{
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}
