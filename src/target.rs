use crate::config::CorsConfig;
use crate::error::{PatchError, PatchResult};
use crate::utils::{file_exists, find_files};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file selected for inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Name shown in the report
    pub label: String,
    pub path: PathBuf,
}

/// Resolve a fixed list of relative paths against `root`.
///
/// Every entry becomes a candidate; missing files are reported later.
pub fn known_targets(root: &Path, targets: &[PathBuf]) -> Vec<Candidate> {
    targets
        .iter()
        .map(|rel| Candidate {
            label: rel.display().to_string(),
            path: root.join(rel),
        })
        .collect()
}

/// Find `<root>/<functions_dir>/*/<entry_file>`, one directory level deep.
///
/// Candidates are labelled with their function directory name and returned
/// in path order. Subdirectories without the entry file yield nothing.
pub fn discover_entries(root: &Path, config: &CorsConfig) -> PatchResult<Vec<Candidate>> {
    let base = root.join(&config.functions_dir);
    let pattern = format!(
        "{}/*/{}",
        glob::Pattern::escape(&base.to_string_lossy()),
        glob::Pattern::escape(&config.entry_file)
    );

    let mut candidates = Vec::new();
    for path in find_files(&pattern)? {
        if !file_exists(&path) {
            continue;
        }
        let label = path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| PatchError::invalid_path(path.display().to_string()))?;
        candidates.push(Candidate { label, path });
    }

    debug!(
        "Discovered {} entry files under {}",
        candidates.len(),
        base.display()
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_known_targets_keep_order_and_labels() {
        let root = Path::new("/project");
        let targets = vec![PathBuf::from("src/b.ts"), PathBuf::from("src/a.ts")];
        let candidates = known_targets(root, &targets);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].label, "src/b.ts");
        assert_eq!(candidates[0].path, PathBuf::from("/project/src/b.ts"));
        assert_eq!(candidates[1].label, "src/a.ts");
    }

    #[test]
    fn test_discover_only_dirs_with_entry_file() {
        let dir = tempdir().unwrap();
        let functions = dir.path().join("supabase/functions");
        fs::create_dir_all(functions.join("a")).unwrap();
        fs::create_dir_all(functions.join("b")).unwrap();
        fs::write(functions.join("a/index.ts"), "").unwrap();
        fs::write(functions.join("b/helpers.ts"), "").unwrap();

        let candidates = discover_entries(dir.path(), &CorsConfig::default()).unwrap();
        assert_eq!(
            candidates,
            vec![Candidate {
                label: "a".to_string(),
                path: functions.join("a/index.ts"),
            }]
        );
    }

    #[test]
    fn test_discover_is_not_recursive() {
        let dir = tempdir().unwrap();
        let functions = dir.path().join("supabase/functions");
        fs::create_dir_all(functions.join("_shared/nested")).unwrap();
        fs::write(functions.join("index.ts"), "").unwrap();
        fs::write(functions.join("_shared/nested/index.ts"), "").unwrap();

        let candidates = discover_entries(dir.path(), &CorsConfig::default()).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_discover_sorted_by_path() {
        let dir = tempdir().unwrap();
        let functions = dir.path().join("supabase/functions");
        for name in ["zeta", "alpha", "mid"] {
            fs::create_dir_all(functions.join(name)).unwrap();
            fs::write(functions.join(name).join("index.ts"), "").unwrap();
        }

        let labels: Vec<_> = discover_entries(dir.path(), &CorsConfig::default())
            .unwrap()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_discover_missing_functions_dir() {
        let dir = tempdir().unwrap();
        let candidates = discover_entries(dir.path(), &CorsConfig::default()).unwrap();
        assert!(candidates.is_empty());
    }
}
