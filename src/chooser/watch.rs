//! Filesystem watch on the directory currently being shown.
//!
//! notify delivers events on its own thread. That thread never touches the
//! chooser: it only sends a [`WatchEvent`] tagged with the watched directory
//! over a channel, and the UI thread drains the channel and refreshes.

use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Notification that the entries of `dir` changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    pub dir: PathBuf,
}

/// Create, delete, move-in and move-out change the subdirectory list;
/// content and metadata changes do not.
fn is_relevant(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(_))
    )
}

/// Keeps exactly one non-recursive watch on one directory.
pub struct DirectoryWatch {
    tx: Sender<WatchEvent>,
    dir: Option<PathBuf>,
    watcher: Option<RecommendedWatcher>,
    active: bool,
}

impl std::fmt::Debug for DirectoryWatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryWatch")
            .field("dir", &self.dir)
            .field("watching", &self.watcher.is_some())
            .field("active", &self.active)
            .finish()
    }
}

impl DirectoryWatch {
    /// Create an active watch with no directory yet.
    pub fn new(tx: Sender<WatchEvent>) -> Self {
        Self {
            tx,
            dir: None,
            watcher: None,
            active: true,
        }
    }

    /// Point the watch at `dir`, replacing any previous watch.
    /// While inactive the directory is only remembered.
    pub fn watch(&mut self, dir: &Path) {
        self.dir = Some(dir.to_path_buf());
        if self.active {
            self.install();
        }
    }

    /// Start watching the remembered directory again (foreground).
    pub fn activate(&mut self) {
        self.active = true;
        self.install();
    }

    /// Stop delivering events but remember the directory (background).
    pub fn deactivate(&mut self) {
        self.active = false;
        if self.watcher.take().is_some() {
            debug!("Stopped watching {:?}", self.dir);
        }
    }

    /// Stop for good; used when the chooser finishes.
    pub fn stop(&mut self) {
        self.deactivate();
        self.dir = None;
    }

    /// Whether a watcher is currently installed
    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    pub fn watched_dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn sender(&self) -> Sender<WatchEvent> {
        self.tx.clone()
    }

    fn install(&mut self) {
        // Old watcher goes first so two are never alive at once
        self.watcher = None;

        let Some(dir) = self.dir.clone() else {
            return;
        };

        match Self::spawn_watcher(&dir, self.tx.clone()) {
            Ok(watcher) => {
                debug!("Watching {:?}", dir);
                self.watcher = Some(watcher);
            }
            Err(e) => {
                warn!("Could not watch {:?}, automatic refresh disabled: {}", dir, e);
            }
        }
    }

    fn spawn_watcher(dir: &Path, tx: Sender<WatchEvent>) -> notify::Result<RecommendedWatcher> {
        let tagged = dir.to_path_buf();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) if is_relevant(&event.kind) => {
                    // Receiver gone means the chooser finished; nothing to do
                    let _ = tx.send(WatchEvent {
                        dir: tagged.clone(),
                    });
                }
                Ok(_) => {}
                Err(e) => warn!("Watch error on {:?}: {}", tagged, e),
            }
        })?;
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, MetadataKind, RemoveKind, RenameMode};
    use std::sync::mpsc;
    use tempfile::TempDir;

    #[test]
    fn test_relevant_event_kinds() {
        assert!(is_relevant(&EventKind::Create(CreateKind::Folder)));
        assert!(is_relevant(&EventKind::Remove(RemoveKind::Folder)));
        assert!(is_relevant(&EventKind::Modify(ModifyKind::Name(
            RenameMode::From
        ))));
        assert!(is_relevant(&EventKind::Modify(ModifyKind::Name(
            RenameMode::To
        ))));
        assert!(!is_relevant(&EventKind::Modify(ModifyKind::Data(
            DataChange::Content
        ))));
        assert!(!is_relevant(&EventKind::Modify(ModifyKind::Metadata(
            MetadataKind::Permissions
        ))));
    }

    #[test]
    fn test_deactivate_keeps_directory() {
        let temp = TempDir::new().unwrap();
        let (tx, _rx) = mpsc::channel();
        let mut watch = DirectoryWatch::new(tx);

        watch.watch(temp.path());
        assert!(watch.is_watching());

        watch.deactivate();
        assert!(!watch.is_watching());
        assert_eq!(watch.watched_dir(), Some(temp.path()));

        watch.activate();
        assert!(watch.is_watching());
    }

    #[test]
    fn test_watch_while_inactive_only_records() {
        let temp = TempDir::new().unwrap();
        let (tx, _rx) = mpsc::channel();
        let mut watch = DirectoryWatch::new(tx);

        watch.deactivate();
        watch.watch(temp.path());
        assert!(!watch.is_watching());
        assert_eq!(watch.watched_dir(), Some(temp.path()));
    }

    #[test]
    fn test_stop_forgets_directory() {
        let temp = TempDir::new().unwrap();
        let (tx, _rx) = mpsc::channel();
        let mut watch = DirectoryWatch::new(tx);

        watch.watch(temp.path());
        watch.stop();
        assert!(!watch.is_watching());
        assert!(watch.watched_dir().is_none());

        // Nothing to reinstall
        watch.activate();
        assert!(!watch.is_watching());
    }
}
