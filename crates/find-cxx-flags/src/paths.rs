//! Standard paths and path normalization

use std::path::{Component, Path, PathBuf};

/// Standard find-cxx-flags paths
pub struct Paths {
    /// Config directory (~/.config/find-cxx-flags)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("find-cxx-flags");

        Self { config }
    }

    /// Get the config file path
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.yaml")
    }
}

/// Make `path` absolute against `base` and normalize it lexically.
///
/// Symlinks are not resolved and the filesystem is not touched, so the
/// result is comparable with paths recorded by a build system that may
/// not exist on this machine.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Remove `.` components and fold `..` into the preceding component.
///
/// `..` directly under the root stays at the root. A relative path keeps
/// leading `..` components it cannot fold.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(part) => out.push(part),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
