mod common;

use common::{names, TestTree};
use std::fs;
use std::time::{Duration, Instant};

/// Drain watch events until `done` holds or the timeout passes.
fn wait_for(
    chooser: &mut dirchooser::DirectoryChooser,
    done: impl Fn(&dirchooser::DirectoryChooser) -> bool,
) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        chooser.process_watch_events();
        if done(chooser) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    false
}

#[test]
fn test_new_subdirectory_appears() {
    let tree = TestTree::with_dirs(&["a"]);
    let mut chooser = tree.chooser(None);
    assert!(chooser.is_watching());

    fs::create_dir(tree.path("b")).unwrap();

    assert!(wait_for(&mut chooser, |c| names(c) == vec!["a", "b"]));
}

#[test]
fn test_removed_subdirectory_disappears() {
    let tree = TestTree::with_dirs(&["a", "b"]);
    let mut chooser = tree.chooser(None);

    fs::remove_dir(tree.path("a")).unwrap();

    assert!(wait_for(&mut chooser, |c| names(c) == vec!["b"]));
}

#[test]
fn test_created_folder_shows_up_through_watch() {
    let tree = TestTree::with_dirs(&[]);
    let mut chooser = tree.chooser(Some("Music"));

    assert!(chooser.new_folder().unwrap().create().is_success());

    assert!(wait_for(&mut chooser, |c| names(c) == vec!["Music"]));
}

#[test]
fn test_watch_follows_navigation() {
    let tree = TestTree::with_dirs(&["inner"]);
    let mut chooser = tree.chooser(None);
    assert!(chooser.select_entry(0));

    fs::create_dir(tree.path("inner/child")).unwrap();

    assert!(wait_for(&mut chooser, |c| names(c) == vec!["child"]));
}

#[test]
fn test_reactivated_watch_with_refresh_catches_up() {
    let tree = TestTree::with_dirs(&["a"]);
    let mut chooser = tree.chooser(None);

    chooser.deactivate();
    assert!(!chooser.is_watching());
    fs::create_dir(tree.path("b")).unwrap();
    assert_eq!(names(&chooser), vec!["a"]);

    chooser.activate();
    assert!(chooser.is_watching());
    assert!(chooser.refresh());
    assert_eq!(names(&chooser), vec!["a", "b"]);
}
