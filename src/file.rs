//! Discovery of `.env` files.
//!
//! Each [`SearchPath`] resolves to one or more directories:
//!
//! - `Platform`, `Home`, `Cwd`, `Path` resolve to a single directory.
//! - `Ancestors(boundary)` expands into every directory from the current
//!   working directory up toward the root, **shallowest first**, so the
//!   directory closest to CWD has the highest priority.
//!
//! The expanded list is priority-ascending: the last entry wins. Directories
//! that cannot be resolved (no home directory, `Platform` without an app
//! name) are skipped.

use std::path::{Path, PathBuf};

use crate::types::{Boundary, SearchPath};

/// Whether `path` names an existing regular file.
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Resolve a single-directory [`SearchPath`].
///
/// Returns `None` for [`SearchPath::Ancestors`] (use [`expand_ancestors`]) and
/// for paths that cannot be resolved on this machine.
pub fn resolve_search_path(sp: &SearchPath, app_name: Option<&str>) -> Option<PathBuf> {
    match sp {
        SearchPath::Platform => {
            let proj = directories::ProjectDirs::from("", "", app_name?)?;
            Some(proj.config_dir().to_path_buf())
        }
        SearchPath::Home(subdir) => {
            let user = directories::UserDirs::new()?;
            Some(user.home_dir().join(subdir))
        }
        SearchPath::Cwd => std::env::current_dir().ok(),
        SearchPath::Path(p) => Some(p.clone()),
        SearchPath::Ancestors(_) => None,
    }
}

/// Expand [`Ancestors`](SearchPath::Ancestors) from the current working directory.
pub fn expand_ancestors(boundary: &Boundary) -> Vec<PathBuf> {
    let Ok(cwd) = std::env::current_dir() else {
        return vec![];
    };
    expand_ancestors_from(cwd, boundary)
}

/// Like [`expand_ancestors`] but starting from an explicit directory.
///
/// [`Boundary::Marker`] stops (inclusive) at the first directory containing
/// the marker and falls back to the root if none does.
pub fn expand_ancestors_from(start: PathBuf, boundary: &Boundary) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let mut current = start.as_path();

    loop {
        dirs.push(current.to_path_buf());

        if let Boundary::Marker(name) = boundary
            && current.join(name).exists()
        {
            break;
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }

    dirs.reverse();
    dirs
}

/// Expand all search paths into concrete directories, priority-ascending.
pub fn expand_search_paths(search_paths: &[SearchPath], app_name: Option<&str>) -> Vec<PathBuf> {
    expand_search_paths_from(search_paths, app_name, None)
}

/// Like [`expand_search_paths`] with an explicit start directory for
/// `Ancestors` instead of CWD.
pub(crate) fn expand_search_paths_from(
    search_paths: &[SearchPath],
    app_name: Option<&str>,
    ancestors_start: Option<&Path>,
) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    for sp in search_paths {
        match sp {
            SearchPath::Ancestors(boundary) => {
                let expanded = match ancestors_start {
                    Some(start) => expand_ancestors_from(start.to_path_buf(), boundary),
                    None => expand_ancestors(boundary),
                };
                dirs.extend(expanded);
            }
            other => match resolve_search_path(other, app_name) {
                Some(dir) => dirs.push(dir),
                None => tracing::debug!(search_path = ?other, "search path did not resolve"),
            },
        }
    }
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_explicit_path() {
        let p = PathBuf::from("/tmp/myapp");
        assert_eq!(resolve_search_path(&SearchPath::Path(p.clone()), None), Some(p));
    }

    #[test]
    fn platform_needs_app_name() {
        assert_eq!(resolve_search_path(&SearchPath::Platform, None), None);
    }

    #[test]
    fn ancestors_do_not_resolve_to_single_dir() {
        assert_eq!(
            resolve_search_path(&SearchPath::Ancestors(Boundary::Root), None),
            None
        );
    }

    #[test]
    fn file_exists_only_for_regular_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(".env");
        assert!(!file_exists(&file));
        fs::write(&file, "A=1\n").unwrap();
        assert!(file_exists(&file));
        assert!(!file_exists(dir.path()));
    }

    #[test]
    fn expand_ancestors_root_ends_at_cwd() {
        let dirs = expand_ancestors(&Boundary::Root);
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(dirs.last().unwrap(), &cwd);
        for pair in dirs.windows(2) {
            assert!(pair[1].starts_with(&pair[0]));
        }
    }

    #[test]
    fn expand_ancestors_marker_stops_at_marker() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();
        fs::create_dir(dir.path().join("a").join(".git")).unwrap();

        let dirs = expand_ancestors_from(deep.clone(), &Boundary::Marker(".git"));

        assert_eq!(
            dirs,
            vec![
                dir.path().join("a"),
                dir.path().join("a").join("b"),
                deep,
            ]
        );
    }

    #[test]
    fn expand_ancestors_marker_missing_walks_to_root() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("x").join("y");
        fs::create_dir_all(&deep).unwrap();

        let dirs = expand_ancestors_from(deep.clone(), &Boundary::Marker(".nonexistent"));

        assert!(dirs.contains(&dir.path().to_path_buf()));
        assert_eq!(dirs.last(), Some(&deep));
    }

    #[test]
    fn expand_search_paths_keeps_priority_order() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("a").join("b");
        fs::create_dir_all(&deep).unwrap();
        fs::create_dir(dir.path().join("a").join(".marker")).unwrap();
        let explicit = TempDir::new().unwrap();

        let paths = vec![
            SearchPath::Path(explicit.path().to_path_buf()),
            SearchPath::Ancestors(Boundary::Marker(".marker")),
            SearchPath::Platform,
        ];
        let dirs = expand_search_paths_from(&paths, None, Some(&deep));

        assert_eq!(
            dirs,
            vec![explicit.path().to_path_buf(), dir.path().join("a"), deep]
        );
    }
}
