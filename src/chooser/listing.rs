//! Subdirectory enumeration for the directory being shown.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// One directory entry directly under the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdirectory {
    /// Absolute path of the child directory
    pub path: PathBuf,
    /// File name as shown in the list
    pub name: String,
    /// Raw file name, used as the sort key
    file_name: OsString,
}

impl Subdirectory {
    fn new(path: PathBuf, file_name: OsString) -> Self {
        Self {
            name: file_name.to_string_lossy().to_string(),
            path,
            file_name,
        }
    }
}

/// List the immediate child directories of `dir`, sorted by file name.
///
/// Ordering is byte-wise on the raw file name, so it does not depend on the
/// locale and upper case sorts before lower case (`Zeta` < `alpha`).
/// Symlinks that resolve to a directory are included. Entries whose metadata
/// cannot be read are skipped; failing to open `dir` itself is an error.
pub fn list_subdirectories(dir: &Path) -> io::Result<Vec<Subdirectory>> {
    let mut subdirs = Vec::new();

    for entry in std::fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        // Follows symlinks, unlike DirEntry::file_type
        if path.is_dir() {
            subdirs.push(Subdirectory::new(path, entry.file_name()));
        }
    }

    subdirs.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(subdirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_only_directories_are_listed() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();

        let subdirs = list_subdirectories(temp.path()).unwrap();
        assert_eq!(subdirs.len(), 1);
        assert_eq!(subdirs[0].name, "docs");
        assert_eq!(subdirs[0].path, temp.path().join("docs"));
    }

    #[test]
    fn test_byte_order_puts_uppercase_first() {
        let temp = TempDir::new().unwrap();
        for name in ["alpha", "Zeta", "beta", "Alpha"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }

        let names: Vec<String> = list_subdirectories(temp.path())
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Zeta", "alpha", "beta"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_counts_as_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("missing"), temp.path().join("dangling"))
            .unwrap();

        let names: Vec<String> = list_subdirectories(temp.path())
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["link", "real"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(list_subdirectories(&temp.path().join("nope")).is_err());
    }
}
