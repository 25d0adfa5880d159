//! Shared fixtures for chooser integration tests.
//!
//! Every test works inside its own `TempDir`. Permission failures are
//! simulated with [`DenyWrite`] rather than chmod, since the suite may run
//! as root, which ignores permission bits.

#![allow(dead_code)]

use dirchooser::chooser::{AccessProbe, DirectoryChooser, OsAccess};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree.
pub struct TestTree {
    pub temp: TempDir,
    /// Canonical form of the temp dir, as the chooser reports it
    root: PathBuf,
}

impl TestTree {
    /// Create a tree with the given relative directories (parents included).
    pub fn with_dirs(dirs: &[&str]) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        for dir in dirs {
            fs::create_dir_all(temp.path().join(dir)).expect("Failed to create dir");
        }
        let root = fs::canonicalize(temp.path()).expect("Failed to resolve temp dir");
        Self { temp, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Write an empty regular file.
    pub fn file(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::write(&path, "").expect("Failed to create file");
        path
    }

    /// A chooser opened at the tree root.
    pub fn chooser(&self, new_dir_name: Option<&str>) -> DirectoryChooser {
        DirectoryChooser::open(self.root(), new_dir_name.map(String::from))
    }

    /// A chooser opened at the tree root that may not write under `denied`.
    pub fn chooser_denying_write(
        &self,
        new_dir_name: Option<&str>,
        denied: &Path,
    ) -> DirectoryChooser {
        self.chooser_with_access(
            "",
            new_dir_name,
            Box::new(DenyWrite {
                denied: denied.to_path_buf(),
            }),
        )
    }

    /// A chooser opened at `relative` (empty for the root) with custom
    /// access checks.
    pub fn chooser_with_access(
        &self,
        relative: &str,
        new_dir_name: Option<&str>,
        access: Box<dyn AccessProbe>,
    ) -> DirectoryChooser {
        let mut chooser = DirectoryChooser::with_probe(new_dir_name.map(String::from), access);
        assert!(chooser.change_directory(Some(&self.path(relative))));
        chooser
    }
}

/// Reports every path as readable and writable, whatever is on disk.
pub struct AllowAll;

impl AccessProbe for AllowAll {
    fn can_read(&self, _path: &Path) -> bool {
        true
    }

    fn can_write(&self, _path: &Path) -> bool {
        true
    }
}

/// Real access checks, except that `denied` and everything below it is
/// not writable.
pub struct DenyWrite {
    pub denied: PathBuf,
}

impl AccessProbe for DenyWrite {
    fn can_read(&self, path: &Path) -> bool {
        OsAccess.can_read(path)
    }

    fn can_write(&self, path: &Path) -> bool {
        !path.starts_with(&self.denied) && OsAccess.can_write(path)
    }
}

/// Names currently listed by `chooser`.
pub fn names(chooser: &DirectoryChooser) -> Vec<String> {
    chooser.names().map(String::from).collect()
}
