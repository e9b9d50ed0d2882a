//! Integration tests for persisted fingerprints and polling from them

use super::test_utils::{touch, write_pinned, PINNED_MTIME};
use dirprint::snapshot;
use dirprint::watch::{nested_exclusions, PollOutcome, Poller, WatchDefinition};
use dirprint::capture;
use tempfile::TempDir;

/// A fingerprint saved in one run compares cleanly against a later capture
#[test]
fn test_saved_snapshot_detects_later_change() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    write_pinned(&root, "a.txt", "a", PINNED_MTIME);
    write_pinned(&root, "b.txt", "b", PINNED_MTIME);

    let snapshot_path = temp_dir.path().join("state").join("tree.json");
    snapshot::save(&snapshot_path, &capture(&root, &[]).unwrap()).unwrap();

    touch(&root, "b.txt", PINNED_MTIME + 10);

    let saved = snapshot::load(&snapshot_path).unwrap();
    let current = capture(&root, &[]).unwrap();
    assert!(current.changed(&saved));
    assert_eq!(current.diff(&saved).modified().len(), 1);
}

/// Nested watches are excluded from the enclosing watch's captures
#[test]
fn test_nested_watch_not_double_counted() {
    let temp_dir = TempDir::new().unwrap();
    let outer = temp_dir.path().join("outer");
    let inner = outer.join("inner");
    write_pinned(&outer, "outer.txt", "o", PINNED_MTIME);
    write_pinned(&inner, "inner.txt", "i", PINNED_MTIME);

    let definitions = vec![
        WatchDefinition::new(outer.clone()),
        WatchDefinition::new(inner.clone()),
    ];
    let exclusions = nested_exclusions(&definitions, &outer);
    assert_eq!(exclusions.len(), 1);

    let mut outer_poller = Poller::new(definitions[0].clone()).with_excluded(exclusions);
    let mut inner_poller = Poller::new(definitions[1].clone());

    match outer_poller.poll().unwrap() {
        PollOutcome::Baseline(fingerprint) => {
            assert_eq!(fingerprint.len(), 1);
            assert!(fingerprint.get("outer.txt").is_some());
        }
        other => panic!("expected baseline, got {:?}", other),
    }
    inner_poller.poll().unwrap();

    write_pinned(&inner, "fresh.txt", "f", PINNED_MTIME);

    assert_eq!(outer_poller.poll().unwrap(), PollOutcome::Unchanged);
    match inner_poller.poll().unwrap() {
        PollOutcome::Changed(diff) => assert!(diff.added().contains("fresh.txt")),
        other => panic!("expected change, got {:?}", other),
    }
}
