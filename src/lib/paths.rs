//! Shared helpers reused across modules (e.g., path validation).

use std::path::{Component, Path, PathBuf};

/// Returns true if the path is non-empty and stays below its base directory.
pub fn is_nonempty_relative(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

/// Join `relative` onto `base`.
pub fn resolve_under(base: &Path, relative: &Path) -> PathBuf {
    base.join(relative)
}
