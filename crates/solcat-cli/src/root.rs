use std::path::{Path, PathBuf};

/// Resolve the catalog root directory.
///
/// Priority:
/// 1. `--root` flag / `SOLCAT_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `catalog.yaml` or `providers/`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Walk upward looking for catalog markers
    let mut dir = cwd.clone();
    loop {
        if dir.join("catalog.yaml").is_file() || dir.join("providers").is_dir() {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    // Walk upward looking for .git/
    let mut dir = cwd.clone();
    loop {
        if dir.join(".git").is_dir() {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    cwd
}
