use std::collections::BTreeMap;
use std::path::Path;

use crate::types::ResolvedFiles;

/// Check each candidate filename against the input directory. Files found on
/// disk end up in the resolved set keyed by filename (duplicate manifest rows
/// collapse onto one entry); absent files are tallied but not fatal.
pub fn resolve_files(input_dir: &Path, candidates: &[String]) -> ResolvedFiles {
    let mut found = BTreeMap::new();
    let mut missed_count = 0;

    for name in candidates {
        let path = input_dir.join(name);
        if path.is_file() {
            let path = path.canonicalize().unwrap_or(path);
            found.insert(name.clone(), path);
        } else {
            missed_count += 1;
        }
    }

    ResolvedFiles {
        files: found.into_iter().collect(),
        missed_count,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_files_tallied_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("present.fna.gz"), b"x").unwrap();

        let resolved = resolve_files(
            dir.path(),
            &names(&["present.fna.gz", "absent.fna.gz", "also_absent.fna.gz"]),
        );

        assert_eq!(resolved.missed_count, 2);
        assert_eq!(resolved.files.len(), 1);
        assert_eq!(resolved.files[0].0, "present.fna.gz");
    }

    #[test]
    fn test_order_is_lexicographic() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.fna.gz", "a.fna.gz", "c.fna.gz"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let resolved = resolve_files(dir.path(), &names(&["c.fna.gz", "a.fna.gz", "b.fna.gz"]));
        let order: Vec<&str> = resolved.files.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["a.fna.gz", "b.fna.gz", "c.fna.gz"]);
    }

    #[test]
    fn test_duplicate_rows_collapse() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("dup.fna.gz"), b"x").unwrap();

        let resolved = resolve_files(dir.path(), &names(&["dup.fna.gz", "dup.fna.gz"]));
        assert_eq!(resolved.files.len(), 1);
        assert_eq!(resolved.missed_count, 0);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.fna.gz"), b"x").unwrap();
        let candidates = names(&["a.fna.gz", "gone.fna.gz"]);

        let first = resolve_files(dir.path(), &candidates);
        let second = resolve_files(dir.path(), &candidates);
        assert_eq!(first, second);
    }
}
