use super::*;

#[test]
fn test_typing_coalesces_into_one_region() {
    let mut batch = ReconcileBatch::new();
    assert!(batch.is_clean());
    for offset in 10..15 {
        assert_eq!(batch.record(offset, 0, 1), None);
    }
    assert_eq!(batch.pending(), Some(Region::new(10, 0, 5)));
}

#[test]
fn test_disjoint_edit_flushes_previous_batch() {
    let mut batch = ReconcileBatch::new();
    batch.record(10, 0, 5);
    assert_eq!(batch.record(20, 1, 1), Some(Region::new(10, 0, 5)));
    assert_eq!(batch.pending(), Some(Region::new(20, 1, 1)));
}

#[test]
fn test_empty_edit_leaves_batch_clean() {
    let mut batch = ReconcileBatch::new();
    assert_eq!(batch.record(7, 0, 0), None);
    assert_eq!(batch.pending(), None);
    assert_eq!(batch.take(), None);
}

#[test]
fn test_take_resets_the_batch() {
    let mut batch = ReconcileBatch::new();
    batch.record_region(Region::new(3, 2, 0));
    assert_eq!(batch.take(), Some(Region::new(3, 2, 0)));
    assert!(batch.is_clean());
    // The next edit starts fresh even though it is far away.
    assert_eq!(batch.record(100, 0, 1), None);
    assert_eq!(batch.pending(), Some(Region::new(100, 0, 1)));
}

#[test]
fn test_tracker_keeps_documents_apart() {
    let mut tracker = DirtyRegionTracker::new();
    tracker.record("a.dart", 0, 0, 3);
    tracker.record("b.dart", 50, 0, 1);
    assert_eq!(tracker.record("a.dart", 3, 0, 2), None);
    assert_eq!(tracker.record("b.dart", 51, 0, 1), None);

    assert_eq!(tracker.pending(&"a.dart"), Some(Region::new(0, 0, 5)));
    assert_eq!(tracker.pending(&"b.dart"), Some(Region::new(50, 0, 2)));
    assert_eq!(tracker.dirty_count(), 2);
}

#[test]
fn test_tracker_flushes_per_document() {
    let mut tracker = DirtyRegionTracker::new();
    tracker.record(1u32, 10, 0, 5);
    tracker.record(2u32, 10, 0, 5);
    assert_eq!(tracker.record(1, 40, 0, 1), Some(Region::new(10, 0, 5)));
    assert_eq!(tracker.pending(&2), Some(Region::new(10, 0, 5)));
}

#[test]
fn test_tracker_take_drain_forget() {
    let mut tracker = DirtyRegionTracker::new();
    tracker.record("a", 0, 0, 1);
    tracker.record("b", 0, 0, 2);
    tracker.record("c", 0, 0, 3);
    tracker.record("d", 5, 0, 0);

    assert_eq!(tracker.take(&"a"), Some(Region::new(0, 0, 1)));
    assert_eq!(tracker.take(&"a"), None);
    assert!(tracker.forget(&"b"));
    assert!(!tracker.forget(&"b"));

    let mut drained = tracker.drain();
    drained.sort_by_key(|(doc, _)| *doc);
    assert_eq!(drained, vec![("c", Region::new(0, 0, 3))]);
    assert_eq!(tracker.dirty_count(), 0);
}
