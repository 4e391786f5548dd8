//! Corpus discovery: find the plain-text documents to scan.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A text document discovered under the corpus root.
#[derive(Debug)]
pub struct DocumentFile {
    pub path: PathBuf,
}

/// Recursively discover `.txt` and `.md` files under `root`.
///
/// Hidden entries and the `output` directory are skipped. Results are
/// sorted by path so repeated runs are deterministic.
pub fn scan_corpus(root: &Path) -> Vec<DocumentFile> {
    let mut results: Vec<DocumentFile> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || (!is_hidden(e) && e.file_name() != "output"))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            matches!(
                e.path().extension().and_then(|ext| ext.to_str()),
                Some("txt") | Some("md")
            )
        })
        .map(|e| DocumentFile {
            path: e.path().to_path_buf(),
        })
        .collect();

    results.sort_by(|a, b| a.path.cmp(&b.path));
    results
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_corpus_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "2016-10-01").unwrap();
        fs::write(dir.path().join("a.md"), "notes").unwrap();
        fs::write(dir.path().join("c.rs"), "fn main() {}").unwrap();
        fs::write(dir.path().join(".hidden.txt"), "skip").unwrap();
        fs::create_dir(dir.path().join("output")).unwrap();
        fs::write(dir.path().join("output").join("d.txt"), "skip").unwrap();

        let files = scan_corpus(dir.path());
        let names: Vec<&str> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.md", "b.txt"]);
    }

    #[test]
    fn test_scan_corpus_recurses() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("deep.txt"), "text").unwrap();

        let files = scan_corpus(dir.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("sub/deep.txt"));
    }
}
