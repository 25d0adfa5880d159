mod common;

use common::{names, AllowAll, TestTree};
use dirchooser::chooser::CreateFolderOutcome;
use std::fs;

#[test]
fn test_creates_folder_in_current_directory() {
    let tree = TestTree::with_dirs(&["docs"]);
    let chooser = tree.chooser(Some("Music"));
    assert!(chooser.can_offer_new_folder());

    let request = chooser.new_folder().unwrap();
    assert_eq!(request.target(), tree.path("Music"));

    let outcome = request.create();
    assert_eq!(outcome, CreateFolderOutcome::Created(tree.path("Music")));
    assert_eq!(outcome.message("Music"), "Created folder 'Music'");
    assert!(tree.path("Music").is_dir());
}

#[test]
fn test_creation_does_not_navigate() {
    let tree = TestTree::with_dirs(&["docs"]);
    let chooser = tree.chooser(Some("Music"));

    chooser.new_folder().unwrap().create();

    assert_eq!(chooser.current_dir(), Some(tree.root()));
    // Listing is only refreshed by the watch or an explicit refresh
    assert_eq!(names(&chooser), vec!["docs"]);
}

#[test]
fn test_existing_folder_is_reported() {
    let tree = TestTree::with_dirs(&["Music/album"]);
    let chooser = tree.chooser(Some("Music"));

    let outcome = chooser.new_folder().unwrap().create();
    assert_eq!(outcome, CreateFolderOutcome::AlreadyExists);
    assert_eq!(outcome.message("Music"), "'Music' already exists");
    // Existing contents untouched
    assert!(tree.path("Music/album").is_dir());
}

#[test]
fn test_existing_file_with_same_name_is_reported() {
    let tree = TestTree::with_dirs(&[]);
    tree.file("Music");
    let chooser = tree.chooser(Some("Music"));

    let outcome = chooser.new_folder().unwrap().create();
    assert_eq!(outcome, CreateFolderOutcome::AlreadyExists);
    assert!(tree.path("Music").is_file());
}

#[test]
fn test_no_write_access() {
    let tree = TestTree::with_dirs(&[]);
    let chooser = tree.chooser_denying_write(Some("Music"), tree.root());

    assert!(!chooser.can_offer_new_folder());
    let outcome = chooser.new_folder().unwrap().create();
    assert_eq!(outcome, CreateFolderOutcome::NoWriteAccess);
    assert_eq!(
        outcome.message("Music"),
        "No write access to this directory"
    );
    assert!(!tree.path("Music").exists());
}

#[test]
fn test_failed_creation_reports_generic_error() {
    let tree = TestTree::with_dirs(&["a"]);
    let chooser = tree.chooser_with_access("a", Some("Music"), Box::new(AllowAll));
    assert!(chooser.can_offer_new_folder());

    // Parent disappears after the chooser listed it
    fs::remove_dir(tree.path("a")).unwrap();

    let outcome = chooser.new_folder().unwrap().create();
    assert!(matches!(outcome, CreateFolderOutcome::Failed(_)));
    assert!(!outcome.is_success());
    assert_eq!(outcome.message("Music"), "Could not create 'Music'");
    assert!(!tree.path("a").exists());
    assert!(!tree.path("a/Music").exists());
    assert_eq!(chooser.current_dir(), Some(tree.path("a").as_path()));
}

#[test]
fn test_no_name_means_no_request() {
    let tree = TestTree::with_dirs(&["a"]);
    let chooser = tree.chooser(None);

    assert!(!chooser.can_offer_new_folder());
    assert!(chooser.new_folder().is_none());
}

#[test]
fn test_follows_current_directory() {
    let tree = TestTree::with_dirs(&["projects"]);
    let mut chooser = tree.chooser(Some("new-project"));
    assert!(chooser.select_entry(0));

    let outcome = chooser.new_folder().unwrap().create();
    assert!(outcome.is_success());
    assert!(tree.path("projects/new-project").is_dir());
    assert!(!tree.path("new-project").exists());

    fs::remove_dir(tree.path("projects/new-project")).unwrap();
}
