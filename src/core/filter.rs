//! Client-side filtering of the repository listing.
//!
//! [`filter`] is a pure, total function of `(entries, term)`: the filtered view of the
//! index is always re-derived from the full list, never patched in place.

use crate::core::state::FileEntry;

/// Last `/`-separated segment of a repository path
pub fn extract_filename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Normalize a raw search input the way [`filter`] compares it
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Order-preserving subsequence of `entries` whose file name contains `term`,
/// case-insensitively. An empty (or blank) term returns `entries` unchanged.
pub fn filter(entries: &[FileEntry], term: &str) -> Vec<FileEntry> {
    let term = normalize_term(term);
    if term.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| extract_filename(&entry.path).to_lowercase().contains(&term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(paths: &[&str]) -> Vec<FileEntry> {
        paths
            .iter()
            .filter_map(|p| FileEntry::from_blob_path(*p))
            .collect()
    }

    fn sample() -> Vec<FileEntry> {
        entries(&[
            "a/Solution.py",
            "b/Main.java",
            "sol/helper.py",
            "c/ConsoleSolver.java",
            "d/two_sum.py",
        ])
    }

    #[test]
    fn test_extract_filename() {
        assert_eq!(extract_filename("a/b/Solution.py"), "Solution.py");
        assert_eq!(extract_filename("Main.java"), "Main.java");
        assert_eq!(extract_filename("dir/"), "");
    }

    #[test]
    fn test_empty_term_is_identity() {
        let list = sample();
        assert_eq!(filter(&list, ""), list);
        assert_eq!(filter(&list, "   "), list);
    }

    #[test]
    fn test_empty_entries() {
        assert!(filter(&[], "sol").is_empty());
        assert!(filter(&[], "").is_empty());
    }

    #[test]
    fn test_matches_filename_not_directory() {
        let result = filter(&sample(), "sol");
        let paths: Vec<&str> = result.iter().map(|e| e.path.as_str()).collect();
        // "sol/helper.py" only matches through its directory
        assert_eq!(paths, vec!["a/Solution.py", "c/ConsoleSolver.java"]);
    }

    #[test]
    fn test_term_is_trimmed_and_case_insensitive() {
        let result = filter(&sample(), "  MAIN ");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].path, "b/Main.java");
    }

    #[test]
    fn test_soundness_and_completeness() {
        let list = sample();
        for term in ["s", "SUM", ".py", "java", "x", "o"] {
            let kept = filter(&list, term);
            let needle = normalize_term(term);
            for entry in &kept {
                assert!(entry.filename().to_lowercase().contains(&needle));
            }
            for entry in list.iter().filter(|e| !kept.contains(e)) {
                assert!(!entry.filename().to_lowercase().contains(&needle));
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let list = sample();
        for term in ["", "sol", "py", "Main", "zzz"] {
            let once = filter(&list, term);
            assert_eq!(filter(&once, term), once);
        }
    }

    #[test]
    fn test_preserves_order() {
        let result = filter(&sample(), ".py");
        let paths: Vec<&str> = result.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["a/Solution.py", "sol/helper.py", "d/two_sum.py"]);
    }
}
