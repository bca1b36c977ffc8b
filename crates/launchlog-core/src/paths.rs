//! Filesystem path helpers shared by the binaries.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory. Paths without one, or
/// any path when `HOME` is unset, are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
  expand_with_home(path, std::env::var("HOME").ok().as_deref())
}

fn expand_with_home(path: &Path, home: Option<&str>) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Some(home) = home
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
