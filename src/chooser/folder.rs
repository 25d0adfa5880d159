//! Creating the caller-named folder inside the current directory.

use super::access::AccessProbe;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of a folder creation attempt, one per user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateFolderOutcome {
    /// The folder was created at this path
    Created(PathBuf),
    /// An entry with the same name already exists
    AlreadyExists,
    /// The current directory is not writable
    NoWriteAccess,
    /// `create_dir` failed for another reason
    Failed(String),
}

impl CreateFolderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CreateFolderOutcome::Created(_))
    }

    /// Short message shown to the user for this outcome
    pub fn message(&self, name: &str) -> String {
        match self {
            CreateFolderOutcome::Created(_) => format!("Created folder '{}'", name),
            CreateFolderOutcome::AlreadyExists => format!("'{}' already exists", name),
            CreateFolderOutcome::NoWriteAccess => {
                "No write access to this directory".to_string()
            }
            CreateFolderOutcome::Failed(_) => format!("Could not create '{}'", name),
        }
    }
}

/// A pending request to create `name` inside `parent`.
///
/// Only obtainable from [`DirectoryChooser::new_folder`](super::DirectoryChooser::new_folder),
/// which requires both a folder name and a current directory.
pub struct NewFolder<'a> {
    pub(super) parent: &'a Path,
    pub(super) name: &'a str,
    pub(super) probe: &'a dyn AccessProbe,
}

impl NewFolder<'_> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn parent(&self) -> &Path {
        self.parent
    }

    /// Path the folder would be created at
    pub fn target(&self) -> PathBuf {
        self.parent.join(self.name)
    }

    /// Try to create the folder. Does not navigate or refresh; the watch on
    /// the current directory picks up the new entry.
    pub fn create(&self) -> CreateFolderOutcome {
        if !self.probe.can_write(self.parent) {
            return CreateFolderOutcome::NoWriteAccess;
        }

        let target = self.target();
        // symlink_metadata so a dangling symlink also counts as taken
        if target.symlink_metadata().is_ok() {
            return CreateFolderOutcome::AlreadyExists;
        }

        match std::fs::create_dir(&target) {
            Ok(()) => {
                info!("Created folder {:?}", target);
                CreateFolderOutcome::Created(target)
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                CreateFolderOutcome::AlreadyExists
            }
            Err(e) => {
                warn!("Failed to create folder {:?}: {}", target, e);
                CreateFolderOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Check that a folder name names a single child entry.
pub fn validate_folder_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Folder name cannot be empty".to_string());
    }
    if name == "." || name == ".." {
        return Err(format!("'{}' is not a valid folder name", name));
    }
    if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        return Err("Folder name cannot contain a path separator".to_string());
    }
    if name.contains('\0') {
        return Err("Folder name cannot contain NUL".to_string());
    }
    Ok(())
}
