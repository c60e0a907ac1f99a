use saverr_core::paths;
use std::path::{Path, PathBuf};

/// Resolve the project root directory.
///
/// Priority:
/// 1. `--root` flag / `SAVERR_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.saverr/`
/// 3. Walk upward from `cwd` looking for `template.yaml`
/// 4. Walk upward from `cwd` looking for `.git/`
/// 5. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_root_from(&cwd).unwrap_or(cwd)
}

fn find_root_from(start: &Path) -> Option<PathBuf> {
    find_upward(start, |dir| dir.join(paths::SAVERR_DIR).is_dir())
        .or_else(|| find_upward(start, |dir| dir.join("template.yaml").is_file()))
        .or_else(|| find_upward(start, |dir| dir.join(".git").is_dir()))
}

fn find_upward(start: &Path, is_root: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| is_root(dir))
        .map(Path::to_path_buf)
}
