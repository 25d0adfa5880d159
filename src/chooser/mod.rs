//! Directory navigation and selection state, independent of any UI.
//!
//! [`DirectoryChooser`] owns the directory being shown, its sorted
//! subdirectories, the optional folder name the caller asked to be able to
//! create, and the final [`SelectionResult`]. All of it is mutated from one
//! thread; filesystem notifications arrive through a channel and are applied
//! by [`DirectoryChooser::process_watch_events`].

pub mod access;
pub mod folder;
pub mod listing;
pub mod watch;

pub use access::{is_valid_selection, AccessProbe, OsAccess};
pub use folder::{validate_folder_name, CreateFolderOutcome, NewFolder};
pub use listing::{list_subdirectories, Subdirectory};
pub use watch::{DirectoryWatch, WatchEvent};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use tracing::{debug, info};

/// What the chooser hands back to whoever started it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// The user backed out without choosing
    Cancelled,
    /// The user confirmed this absolute directory path
    Selected(PathBuf),
}

impl SelectionResult {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SelectionResult::Cancelled => None,
            SelectionResult::Selected(path) => Some(path),
        }
    }

    /// Process exit status for this result: 0 when a directory was
    /// selected, 1 when cancelled.
    pub fn exit_code(&self) -> i32 {
        match self {
            SelectionResult::Selected(_) => 0,
            SelectionResult::Cancelled => 1,
        }
    }
}

/// Directory browser controller.
pub struct DirectoryChooser {
    current: Option<PathBuf>,
    subdirs: Vec<Subdirectory>,
    new_dir_name: Option<String>,
    probe: Box<dyn AccessProbe>,
    watch: DirectoryWatch,
    events: Receiver<WatchEvent>,
    result: Option<SelectionResult>,
}

impl std::fmt::Debug for DirectoryChooser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryChooser")
            .field("current", &self.current)
            .field("subdirs", &self.subdirs.len())
            .field("new_dir_name", &self.new_dir_name)
            .field("watch", &self.watch)
            .field("result", &self.result)
            .finish()
    }
}

impl DirectoryChooser {
    /// Create a chooser using the operating system's access checks.
    /// No directory is shown until the first successful navigation.
    pub fn new(new_dir_name: Option<String>) -> Self {
        Self::with_probe(new_dir_name, Box::new(OsAccess))
    }

    /// Create a chooser with a custom access probe.
    pub fn with_probe(new_dir_name: Option<String>, probe: Box<dyn AccessProbe>) -> Self {
        let (tx, events) = mpsc::channel();
        Self {
            current: None,
            subdirs: Vec::new(),
            new_dir_name,
            probe,
            watch: DirectoryWatch::new(tx),
            events,
            result: None,
        }
    }

    /// Create a chooser and navigate to `start`.
    pub fn open(start: &Path, new_dir_name: Option<String>) -> Self {
        let mut chooser = Self::new(new_dir_name);
        chooser.change_directory(Some(start));
        chooser
    }

    // ==================== State ====================

    /// The directory being shown, if any navigation has succeeded yet
    pub fn current_dir(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Child directories of the current directory, sorted by name
    pub fn subdirectories(&self) -> &[Subdirectory] {
        &self.subdirs
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.subdirs.iter().map(|s| s.path.as_path())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.subdirs.iter().map(|s| s.name.as_str())
    }

    pub fn new_dir_name(&self) -> Option<&str> {
        self.new_dir_name.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// The selection result once confirmed or cancelled
    pub fn result(&self) -> Option<&SelectionResult> {
        self.result.as_ref()
    }

    // ==================== Navigation ====================

    /// Show `target`. Returns whether the displayed directory was replaced.
    ///
    /// The target is stored in canonical form: absolute, with `.`, `..` and
    /// symlinks resolved. `None`, a path that is not a directory, or a
    /// directory whose contents cannot be listed leave the current state
    /// untouched.
    pub fn change_directory(&mut self, target: Option<&Path>) -> bool {
        if self.is_finished() {
            return false;
        }

        let Some(dir) = target else {
            debug!("Could not change directory: no target");
            return false;
        };
        if !dir.is_dir() {
            debug!("Could not change directory: {:?} is not a directory", dir);
            return false;
        }
        let dir = match fs::canonicalize(dir) {
            Ok(dir) => dir,
            Err(e) => {
                debug!("Could not change directory: resolving {:?} failed: {}", dir, e);
                return false;
            }
        };

        let subdirs = match list_subdirectories(&dir) {
            Ok(subdirs) => subdirs,
            Err(e) => {
                debug!("Could not change directory: listing {:?} failed: {}", dir, e);
                return false;
            }
        };

        // Listing is complete before anything visible changes
        let is_same_dir = self.current.as_ref() == Some(&dir);
        if !is_same_dir || !self.watch.is_watching() {
            self.watch.watch(&dir);
        }
        info!(
            "Changed directory to {:?} ({} subdirectories)",
            dir,
            subdirs.len()
        );
        self.current = Some(dir);
        self.subdirs = subdirs;
        true
    }

    /// Go to the parent of the current directory, if it has one.
    pub fn navigate_up(&mut self) -> bool {
        let parent = self
            .current
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);
        match parent {
            Some(parent) => self.change_directory(Some(&parent)),
            None => false,
        }
    }

    /// Open the subdirectory at `index`; out-of-range indices are ignored.
    pub fn select_entry(&mut self, index: usize) -> bool {
        let Some(entry) = self.subdirs.get(index) else {
            debug!(
                "Ignoring selection {} of {} entries",
                index,
                self.subdirs.len()
            );
            return false;
        };
        let path = entry.path.clone();
        self.change_directory(Some(&path))
    }

    /// Re-list the current directory.
    pub fn refresh(&mut self) -> bool {
        let current = self.current.clone();
        self.change_directory(current.as_deref())
    }

    // ==================== Validation ====================

    /// Whether `path` could be returned as the selection.
    pub fn is_valid_selection(&self, path: Option<&Path>) -> bool {
        is_valid_selection(path, self.probe.as_ref())
    }

    /// Whether the confirm action is currently enabled
    pub fn can_confirm(&self) -> bool {
        !self.is_finished() && self.is_valid_selection(self.current_dir())
    }

    /// Whether the "new folder" action should be offered
    pub fn can_offer_new_folder(&self) -> bool {
        self.new_dir_name.is_some() && self.can_confirm()
    }

    // ==================== Folder creation ====================

    /// A request to create the pending folder in the current directory.
    ///
    /// `None` without a pending name, without a current directory, or once
    /// the chooser has finished.
    pub fn new_folder(&self) -> Option<NewFolder<'_>> {
        if self.is_finished() {
            return None;
        }
        Some(NewFolder {
            parent: self.current.as_deref()?,
            name: self.new_dir_name.as_deref()?,
            probe: self.probe.as_ref(),
        })
    }

    // ==================== Termination ====================

    /// Finish with the current directory as the selection.
    ///
    /// Returns `None` and changes nothing unless the current directory is a
    /// valid selection.
    pub fn confirm_selection(&mut self) -> Option<SelectionResult> {
        if !self.can_confirm() {
            debug!("Confirm blocked: {:?} is not a valid selection", self.current);
            return None;
        }
        let path = self.current.clone()?;
        info!("Selected {:?}", path);
        Some(self.finish(SelectionResult::Selected(path)))
    }

    /// Finish without a selection. Once finished, returns the existing result.
    pub fn cancel(&mut self) -> SelectionResult {
        if let Some(result) = &self.result {
            return result.clone();
        }
        info!("Selection cancelled");
        self.finish(SelectionResult::Cancelled)
    }

    fn finish(&mut self, result: SelectionResult) -> SelectionResult {
        self.watch.stop();
        self.result = Some(result.clone());
        result
    }

    // ==================== Filesystem watch ====================

    /// Resume watching the current directory (foreground).
    pub fn activate(&mut self) {
        if !self.is_finished() {
            self.watch.activate();
        }
    }

    /// Pause watching (background).
    pub fn deactivate(&mut self) {
        self.watch.deactivate();
    }

    pub fn is_watching(&self) -> bool {
        self.watch.is_watching()
    }

    /// Apply pending filesystem notifications. Events for directories other
    /// than the current one are dropped; the rest collapse into a single
    /// refresh. Returns whether a refresh ran and succeeded.
    pub fn process_watch_events(&mut self) -> bool {
        let mut stale = false;
        while let Ok(event) = self.events.try_recv() {
            if self.current.as_deref() == Some(event.dir.as_path()) {
                stale = true;
            } else {
                debug!("Dropping watch event for {:?}", event.dir);
            }
        }

        if stale && !self.is_finished() {
            debug!("Refreshing {:?} after filesystem change", self.current);
            self.refresh()
        } else {
            false
        }
    }

    #[cfg(test)]
    fn event_sender(&self) -> mpsc::Sender<WatchEvent> {
        self.watch.sender()
    }
}
