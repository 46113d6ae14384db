use glyphtools::{
    load_snapshot, run_edit, GlyphToolsError, MatchItalicAngle, NodeRef, Orientation,
    Parallelize, SegmentPolicy, SelectionEdit, Snapshot, SnapshotHost,
};
use kurbo::Point;
use pretty_assertions::assert_eq;
use rstest::rstest;

const FIXTURE: &str = "resources/slanted-n.json";
const EPSILON: f64 = 1e-9;

fn fixture() -> Snapshot {
    load_snapshot(FIXTURE).unwrap()
}

fn position(snapshot: &Snapshot, path: usize, index: usize) -> Point {
    snapshot.position(NodeRef::new(path, index)).unwrap()
}

#[test]
fn test_load_snapshot() -> Result<(), GlyphToolsError> {
    let snapshot = load_snapshot(FIXTURE)?;
    assert_eq!(snapshot.paths.len(), 2);
    assert_eq!(snapshot.paths[1].nodes.len(), 7);
    assert!(snapshot.paths[1].nodes[5].smooth);
    assert_eq!(snapshot.selection.len(), 4);
    assert_eq!(
        snapshot.selected_on_curves()?,
        vec![
            NodeRef::new(0, 1),
            NodeRef::new(0, 2),
            NodeRef::new(1, 0),
            NodeRef::new(1, 6)
        ]
    );
    Ok(())
}

#[test]
fn test_missing_fixture_is_an_io_error() {
    assert!(matches!(
        load_snapshot("resources/does-not-exist.json"),
        Err(GlyphToolsError::IO(_))
    ));
}

#[rstest]
#[case(SegmentPolicy::PathWalk)]
#[case(SegmentPolicy::Pairwise)]
fn test_flip_straightens_the_slanted_stem(#[case] policy: SegmentPolicy) {
    let before = fixture();
    let mut host = SnapshotHost::new(before.clone());
    let edit = Parallelize::new(Orientation::Horizontal, true).with_policy(policy);
    let outcome = run_edit(&mut host, &edit).unwrap();

    // Both stems are vertical, so a vertical pair is used even though
    // horizontal was asked for; with flip, the upright stem is the source.
    assert_eq!(
        outcome.message,
        "Vertical pair | Source: upper/right | 90.00° | A fixed, B moved"
    );
    assert_eq!(outcome.edits.len(), 1);

    let after = host.document();
    assert_eq!(position(after, 0, 1), position(&before, 0, 1));
    let moved = position(after, 0, 2);
    assert!((moved.x - 150.0).abs() < EPSILON);
    assert!((moved.y - 100.0_f64.hypot(500.0)).abs() < EPSILON);

    // Nothing else changed
    let mut expected = before.clone();
    expected.paths[0].nodes[2] = after.paths[0].nodes[2].clone();
    assert_eq!(after, &expected);
}

#[test]
fn test_default_rotates_handles_with_the_stem() {
    let before = fixture();
    let mut host = SnapshotHost::new(before.clone());
    let outcome = run_edit(&mut host, &Parallelize::default()).unwrap();
    assert!(outcome.message.starts_with("Vertical pair | Source: lower/left | "));

    // B of the upright stem, then the two handles met walking forward from A
    let touched: Vec<NodeRef> = outcome.edits.iter().map(|e| e.node).collect();
    assert_eq!(
        touched,
        vec![NodeRef::new(1, 6), NodeRef::new(1, 3), NodeRef::new(1, 4)]
    );

    let after = host.document();
    let pivot = position(after, 1, 0);
    assert_eq!(pivot, position(&before, 1, 0));

    // Parallel to the left stem, same length as before
    let stem = position(after, 1, 6) - pivot;
    let source = position(after, 0, 2) - position(after, 0, 1);
    assert!(stem.cross(source).abs() < 1e-6);
    assert!((stem.hypot() - 500.0).abs() < EPSILON);

    // Handles keep their distance from the pivot
    for index in [3, 4] {
        let old = position(&before, 1, index).distance(pivot);
        let new = position(after, 1, index).distance(pivot);
        assert!((old - new).abs() < EPSILON);
    }
    // On-curve nodes along the way stay put
    for index in [1, 2, 5] {
        assert_eq!(position(after, 1, index), position(&before, 1, index));
    }

    assert!(host.undo());
    assert_eq!(host.document(), &before);
}

#[test]
fn test_parallelize_twice_changes_nothing_more() {
    let mut host = SnapshotHost::new(fixture());
    run_edit(&mut host, &Parallelize::default()).unwrap();
    let once = host.document().clone();
    let again = Parallelize::default().compute(&once).unwrap();
    for edit in again.edits {
        let current = once.position(edit.node).unwrap();
        assert!(current.distance(edit.position()) < 1e-6);
    }
}

#[test]
fn test_italic_on_fixture_handle() {
    let mut snapshot = fixture();
    snapshot.selection.clear();
    snapshot.selection.insert(NodeRef::new(1, 4));
    let mut host = SnapshotHost::new(snapshot);
    let outcome = run_edit(&mut host, &MatchItalicAngle::new(-8.0)).unwrap();
    assert_eq!(outcome.edits.len(), 1);
    // The handle's anchor is the next node, the smooth curve point
    let handle = position(host.document(), 1, 4);
    assert!((handle.x - 440.0).abs() < EPSILON);
    assert_eq!(handle.y, 500.0);
}

#[test]
fn test_errors_leave_the_document_alone() {
    let mut snapshot = fixture();
    snapshot.selection.truncate(2);
    let mut host = SnapshotHost::new(snapshot.clone());
    let err = run_edit(&mut host, &Parallelize::default()).unwrap_err();
    assert!(matches!(
        err,
        GlyphToolsError::InsufficientSelection { found: 2 }
    ));
    assert_eq!(host.document(), &snapshot);
    assert_eq!(host.undo_depth(), 0);
}

#[test]
fn test_edited_snapshot_serializes() {
    let mut host = SnapshotHost::new(fixture());
    run_edit(&mut host, &Parallelize::default()).unwrap();
    let json = serde_json::to_string_pretty(host.document()).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, host.document());
}
