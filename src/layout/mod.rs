//! Project skeleton layout.
//!
//! The directory set and marker-file set are ordered constants so tests can
//! validate them as data. All paths are relative to the project root;
//! creation is idempotent and each entry is independent.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Backend tree root, relative to the project root.
pub const BACKEND_ROOT: &str = "backend";

/// Directories materialized by the bootstrap, in creation order.
pub const PROJECT_DIRS: [&str; 14] = [
    "backend/app/core",
    "backend/app/models",
    "backend/app/services",
    "backend/app/api",
    "backend/app/middleware",
    "backend/app/utils",
    "backend/tests",
    "backend/scripts",
    "backend/logs",
    "frontend/lib",
    "frontend/routes",
    "frontend/static",
    "docs",
    ".github/workflows",
];

/// Empty `__init__.py` markers, one per Python package directory plus the
/// backend test directory.
pub const PACKAGE_MARKERS: [&str; 8] = [
    "backend/app/__init__.py",
    "backend/app/core/__init__.py",
    "backend/app/models/__init__.py",
    "backend/app/services/__init__.py",
    "backend/app/api/__init__.py",
    "backend/app/middleware/__init__.py",
    "backend/app/utils/__init__.py",
    "backend/tests/__init__.py",
];

/// Whether a materialized entry was freshly created or already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Materialized {
    Created,
    AlreadyPresent,
}

/// The backend root for a given project root.
pub fn backend_root(project_root: &Path) -> PathBuf {
    project_root.join(BACKEND_ROOT)
}

/// Ensure every directory in [`PROJECT_DIRS`] exists under `root`.
///
/// Missing ancestors are created; an existing directory is not an error.
/// Returns one entry per path, in order, for reporting.
pub fn materialize_dirs(root: &Path) -> Result<Vec<(&'static str, Materialized)>> {
    let mut results = Vec::with_capacity(PROJECT_DIRS.len());
    for rel in PROJECT_DIRS {
        let path = root.join(rel);
        let outcome = if path.is_dir() {
            Materialized::AlreadyPresent
        } else {
            fs::create_dir_all(&path)?;
            Materialized::Created
        };
        tracing::debug!("directory {}: {:?}", rel, outcome);
        results.push((rel, outcome));
    }
    Ok(results)
}

/// Ensure every marker in [`PACKAGE_MARKERS`] exists under `root`.
///
/// Markers are written empty. Re-creating one truncates it, which is
/// observably a no-op since markers never hold content.
pub fn materialize_markers(root: &Path) -> Result<Vec<(&'static str, Materialized)>> {
    let mut results = Vec::with_capacity(PACKAGE_MARKERS.len());
    for rel in PACKAGE_MARKERS {
        let path = root.join(rel);
        let outcome = if path.is_file() {
            Materialized::AlreadyPresent
        } else {
            Materialized::Created
        };
        fs::File::create(&path)?;
        tracing::debug!("marker {}: {:?}", rel, outcome);
        results.push((rel, outcome));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn dir_set_has_fourteen_entries() {
        assert_eq!(PROJECT_DIRS.len(), 14);
    }

    #[test]
    fn marker_set_has_eight_entries() {
        assert_eq!(PACKAGE_MARKERS.len(), 8);
    }

    #[test]
    fn every_marker_lives_inside_a_materialized_directory() {
        for marker in PACKAGE_MARKERS {
            let parent = Path::new(marker).parent().unwrap().to_str().unwrap();
            assert!(
                parent == "backend/app" || PROJECT_DIRS.contains(&parent),
                "marker {} has no parent directory in the set",
                marker
            );
        }
    }

    #[test]
    fn materialize_dirs_creates_all_with_ancestors() {
        let temp = TempDir::new().unwrap();
        let results = materialize_dirs(temp.path()).unwrap();

        assert_eq!(results.len(), 14);
        for (rel, outcome) in &results {
            assert_eq!(*outcome, Materialized::Created);
            assert!(temp.path().join(rel).is_dir(), "{} missing", rel);
        }
        // implied ancestors
        assert!(temp.path().join("backend/app").is_dir());
        assert!(temp.path().join(".github").is_dir());
    }

    #[test]
    fn materialize_dirs_is_idempotent() {
        let temp = TempDir::new().unwrap();
        materialize_dirs(temp.path()).unwrap();
        let second = materialize_dirs(temp.path()).unwrap();

        assert!(second
            .iter()
            .all(|(_, outcome)| *outcome == Materialized::AlreadyPresent));
    }

    #[test]
    fn materialize_markers_creates_empty_files() {
        let temp = TempDir::new().unwrap();
        materialize_dirs(temp.path()).unwrap();
        let results = materialize_markers(temp.path()).unwrap();

        assert_eq!(results.len(), 8);
        for (rel, outcome) in &results {
            assert_eq!(*outcome, Materialized::Created);
            let meta = fs::metadata(temp.path().join(rel)).unwrap();
            assert!(meta.is_file());
            assert_eq!(meta.len(), 0, "{} not empty", rel);
        }
    }

    #[test]
    fn materialize_markers_truncation_is_a_noop_second_time() {
        let temp = TempDir::new().unwrap();
        materialize_dirs(temp.path()).unwrap();
        materialize_markers(temp.path()).unwrap();
        let second = materialize_markers(temp.path()).unwrap();

        assert!(second
            .iter()
            .all(|(_, outcome)| *outcome == Materialized::AlreadyPresent));
    }

    #[test]
    fn backend_root_joins_project_root() {
        assert_eq!(
            backend_root(Path::new("/proj")),
            PathBuf::from("/proj/backend")
        );
    }
}
