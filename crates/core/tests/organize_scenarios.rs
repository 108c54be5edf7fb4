//! End-to-end organizing scenarios on real directory trees.

use std::fs;
use std::path::Path;

use photokey_core::{
    event::render, organize, run, Event, OrganizeSummary, RunMode, RunOptions, RunRequest, Scope,
};
use tempfile::TempDir;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, path.to_string_lossy().as_bytes()).unwrap();
}

// =============================================================================
// Organize
// =============================================================================

#[test]
fn test_batch_folder_is_sorted_by_key() {
    let temp = TempDir::new().unwrap();
    let batch = temp.path().join("batch1");
    for name in ["IMG_1234_a.jpg", "IMG_1234_b.jpg", "IMGK5678.jpg", "random.jpg"] {
        touch(&batch.join(name));
    }

    let mut events = Vec::new();
    let summary = organize(&batch, &RunOptions::default(), &mut events).unwrap();

    assert_eq!(
        summary,
        OrganizeSummary {
            relocated: 3,
            already_placed: 0,
            missing_key: 1,
        }
    );
    assert!(batch.join("1234/IMG_1234_a.jpg").exists());
    assert!(batch.join("1234/IMG_1234_b.jpg").exists());
    assert!(batch.join("5678/IMGK5678.jpg").exists());
    assert!(batch.join("random.jpg").exists());

    let log = render(&events);
    assert!(log.contains("[MOVE] IMG_1234_a.jpg -> 1234/IMG_1234_a.jpg"));
    assert!(log.contains("[MOVE] IMGK5678.jpg -> 5678/IMGK5678.jpg"));
    assert!(log.contains("[SKIP] no IMGK/IMG_ key found -> random.jpg"));
    assert!(log.contains("Processed: 3"));
    assert!(log.contains("No key found: 1"));
}

#[test]
fn test_second_run_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    let batch = temp.path().join("batch1");
    for name in ["IMG_1234_a.jpg", "IMGK5678.jpg"] {
        touch(&batch.join(name));
    }

    let mut events = Vec::new();
    let first = organize(&batch, &RunOptions::default(), &mut events).unwrap();
    assert_eq!(first.relocated, 2);

    let mut events = Vec::new();
    let second = organize(&batch, &RunOptions::default(), &mut events).unwrap();
    assert_eq!(second, OrganizeSummary::default());
    assert!(!events.iter().any(|e| matches!(e, Event::Relocated { .. })));
}

#[test]
fn test_key_folder_organized_in_place() {
    let temp = TempDir::new().unwrap();
    let folder = temp.path().join("1234");
    touch(&folder.join("IMG_1234_x.jpg"));

    let mut events = Vec::new();
    let summary = organize(&folder, &RunOptions::default(), &mut events).unwrap();

    assert_eq!(summary.relocated, 0);
    assert_eq!(summary.already_placed, 1);
    assert!(folder.join("IMG_1234_x.jpg").exists());
}

#[test]
fn test_collision_in_target_folder() {
    let temp = TempDir::new().unwrap();
    let batch = temp.path().join("batch");
    touch(&batch.join("5678/IMGK5678.jpg"));
    fs::write(batch.join("IMGK5678.jpg"), b"second shot").unwrap();

    let mut events = Vec::new();
    let summary = organize(&batch, &RunOptions::default(), &mut events).unwrap();

    assert_eq!(summary.relocated, 1);
    assert!(batch.join("5678/IMGK5678.jpg").exists());
    assert_eq!(
        fs::read(batch.join("5678/IMGK5678 (1).jpg")).unwrap(),
        b"second shot"
    );
    assert!(render(&events).contains("[MOVE] IMGK5678.jpg -> 5678/IMGK5678 (1).jpg"));
}

#[test]
fn test_dry_run_reports_without_mutating() {
    let temp = TempDir::new().unwrap();
    let batch = temp.path().join("batch");
    touch(&batch.join("IMG_1234_a.jpg"));
    touch(&batch.join("sub/QR/QR_1234.jpg"));

    let options = RunOptions::default()
        .with_dry_run(true)
        .with_extract_qr(true);
    let mut events = Vec::new();
    let summary = organize(&batch, &options, &mut events).unwrap();

    assert_eq!(summary.relocated, 0);
    assert!(batch.join("IMG_1234_a.jpg").exists());
    assert!(batch.join("sub/QR/QR_1234.jpg").exists());
    assert!(!batch.join("1234").exists());

    let log = render(&events);
    assert!(log.contains("[QR-MOVE]"));
    assert!(log.contains("[MOVE] IMG_1234_a.jpg -> 1234/IMG_1234_a.jpg"));
    assert!(!log.contains("[QR-RMDIR]"));
}

// =============================================================================
// Full runs
// =============================================================================

#[test]
fn test_recursive_run_with_qr_extraction() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(&root.join("shoot-2081/IMG_2081_a.jpg"));
    touch(&root.join("shoot-2081/QR/QR_2081.jpg"));
    touch(&root.join("shoot-2081/QR/note.jpg"));
    touch(&root.join("IMGK0001.jpg"));

    let request = RunRequest::new(root)
        .with_scope(Scope::Recursive)
        .with_options(RunOptions::default().with_extract_qr(true));
    let mut events = Vec::new();
    let report = run(&request, &mut events);

    assert!(report.is_success());
    // QR file flattened to the root during the root pass
    assert!(root.join("QR_2081.jpg").exists());
    // Unrelated file keeps the QR folder alive
    assert!(root.join("shoot-2081/QR/note.jpg").exists());
    assert!(root.join("0001/IMGK0001.jpg").exists());
    assert!(root.join("shoot-2081/2081/IMG_2081_a.jpg").exists());
    assert_eq!(report.qr_relocated, 1);
    assert_eq!(report.relocated, 2);
}

#[test]
fn test_recursive_run_converges() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(&root.join("a/IMG_1111.jpg"));
    touch(&root.join("a/b/IMGK2222.jpg"));

    let request = RunRequest::new(root).with_scope(Scope::Recursive);
    let mut events = Vec::new();
    let first = run(&request, &mut events);
    assert_eq!(first.relocated, 2);

    let mut events = Vec::new();
    let second = run(&request, &mut events);
    assert_eq!(second.relocated, 0);
    // Key folders are named after their key, so their photos count as placed
    assert_eq!(second.already_placed, 2);
}

#[test]
fn test_qr_only_mode_copy() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(&root.join("x/QR/QR-0005.jpg"));

    let request = RunRequest::new(root)
        .with_mode(RunMode::QrOnly)
        .with_options(RunOptions::default().with_copy(true));
    let mut events = Vec::new();
    let report = run(&request, &mut events);

    assert_eq!(report.qr_relocated, 1);
    assert!(root.join("QR-0005.jpg").exists());
    assert!(root.join("x/QR/QR-0005.jpg").exists());
    assert!(render(&events).contains("[QR-COPY] x/QR/QR-0005.jpg -> QR-0005.jpg"));
}

#[test]
fn test_missing_subdir_scope_root() {
    let temp = TempDir::new().unwrap();
    let request = RunRequest::new(temp.path().join("nope")).with_scope(Scope::Subdirs);

    let mut events = Vec::new();
    let report = run(&request, &mut events);

    assert_eq!(report.directories, 0);
    let log = render(&events);
    assert!(log.contains("[ERROR]"));
    assert!(log.contains("No directories to process."));
}
