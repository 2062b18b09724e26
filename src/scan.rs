//! Folder scanning: discover candidate document files.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// List files in `dir` (non-recursive) whose extension matches `ext`,
/// case-insensitively. Results are sorted for stable output.
pub fn list_files_with_extension(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ext));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// List all PDF files in a folder.
pub fn list_pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_files_with_extension(dir, "pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lists_only_matching_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.pdf"), b"").unwrap();
        fs::write(dir.path().join("b.PDF"), b"").unwrap();
        fs::write(dir.path().join("c.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let files = list_pdf_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.PDF"]);
    }

    #[test]
    fn test_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_pdf_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_dir_errors() {
        assert!(list_pdf_files(Path::new("/nonexistent/folder")).is_err());
    }
}
