use super::*;

#[test]
fn test_empty_edit_is_absorbed() {
    let current = Region::new(10, 2, 7);
    assert_eq!(current.combine(3, 0, 0), Ok(current));
    assert_eq!(current.combine(500, 0, 0), Ok(current));
    assert_eq!(Region::EMPTY.combine(42, 0, 0), Ok(Region::EMPTY));
}

#[test]
fn test_first_edit_in_batch() {
    assert_eq!(Region::EMPTY.combine(7, 3, 1), Ok(Region::new(7, 3, 1)));
    // Any region with zero lengths counts as empty, wherever it points.
    assert_eq!(Region::new(99, 0, 0).combine(7, 3, 1), Ok(Region::new(7, 3, 1)));
}

#[test]
fn test_typing_extends_region() {
    let mut region = Region::EMPTY;
    for i in 0..5 {
        region = region.combine(10 + i, 0, 1).unwrap();
    }
    assert_eq!(region, Region::new(10, 0, 5));
}

#[test]
fn test_replace_inside_region() {
    let region = Region::new(10, 0, 5).combine(12, 1, 3).unwrap();
    assert_eq!(region, Region::new(10, 0, 7));
}

#[test]
fn test_delete_extending_left() {
    // Deleting [8, 11) removes two untouched chars and one freshly typed one.
    let region = Region::new(10, 0, 5).combine(8, 3, 0).unwrap();
    assert_eq!(region, Region::new(8, 2, 4));
}

#[test]
fn test_backspace_over_whole_insert() {
    let region = Region::new(10, 0, 3).combine(10, 3, 0).unwrap();
    assert_eq!(region, Region::new(10, 0, 0));
    assert!(region.is_empty());
}

#[test]
fn test_disjoint_after_region() {
    assert_eq!(Region::new(10, 0, 5).combine(20, 1, 1), Err(Disjoint));
}

#[test]
fn test_disjoint_before_region() {
    assert_eq!(Region::new(10, 0, 5).combine(4, 2, 2), Err(Disjoint));
    // Inserting right before the region does not touch it either.
    assert_eq!(Region::new(10, 0, 5).combine(9, 0, 1), Err(Disjoint));
}

#[test]
fn test_disjoint_when_replacement_overruns_end() {
    assert_eq!(Region::new(10, 0, 5).combine(13, 4, 1), Err(Disjoint));
}

#[test]
fn test_merged_span_covers_previous_when_growing() {
    let edits = [(12, 0, 4), (10, 0, 1), (19, 2, 3), (8, 2, 5)];
    let mut region = Region::new(10, 0, 10);
    for (offset, old_len, new_len) in edits {
        let prev = region.output_span();
        region = region.combine(offset, old_len, new_len).unwrap();
        let next = region.output_span();
        assert!(next.start <= prev.start, "{next:?} vs {prev:?}");
        assert!(next.end >= prev.end, "{next:?} vs {prev:?}");
        assert!(next.start <= offset && offset + new_len <= next.end);
    }
}

#[test]
fn test_region_accessors() {
    let region = Region::new(4, 6, 2);
    assert_eq!(region.old_end(), 10);
    assert_eq!(region.new_end(), 6);
    assert_eq!(region.output_span(), 4..6);
    assert_eq!(region.delta(), -4);
    assert_eq!(region.to_string(), "@4 -6 +2");
}

#[test]
fn test_region_serde() {
    let region: Region = serde_json::from_str(r#"{"offset":3,"old_len":0,"new_len":2}"#).unwrap();
    assert_eq!(region, Region::new(3, 0, 2));
}
