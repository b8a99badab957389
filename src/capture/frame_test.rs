use super::*;

fn region(x: i32, y: i32, w: u32, h: u32) -> Region {
    Region::new(x, y, w, h, "person")
}

#[test]
fn test_region_containment() {
    let outer = region(0, 0, 100, 100);
    let inner = region(10, 10, 50, 50);
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));

    // Touching the edge still counts as contained.
    let flush = region(0, 0, 100, 50);
    assert!(outer.contains(&flush));

    // Overlap without containment.
    let straddling = region(50, 50, 100, 100);
    assert!(!outer.contains(&straddling));
    assert!(!straddling.contains(&outer));
}

/// Multi-scale detector output: the nested region is discarded and
/// presence is computed from the one remaining region.
#[test]
fn test_nested_region_is_filtered() {
    let set = DetectionSet::new(vec![region(0, 0, 100, 100), region(10, 10, 50, 50)]);
    let filtered = set.filter_nested();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.regions()[0], region(0, 0, 100, 100));
    assert!(filtered.present());
}

#[test]
fn test_disjoint_regions_all_survive() {
    let set = DetectionSet::new(vec![region(0, 0, 40, 40), region(100, 100, 40, 40)]);
    assert_eq!(set.filter_nested().len(), 2);
}

#[test]
fn test_degenerate_regions_do_not_count_as_presence() {
    let set = DetectionSet::new(vec![region(5, 5, 0, 10), region(5, 5, 10, 0)]);
    let filtered = set.filter_nested();
    assert!(filtered.is_empty());
    assert!(!filtered.present());
}

#[test]
fn test_identical_regions_contain_each_other() {
    // Mutual containment drops both.
    let set = DetectionSet::new(vec![region(0, 0, 10, 10), region(0, 0, 10, 10)]);
    assert!(set.filter_nested().is_empty());
}

#[test]
fn test_empty_set_is_absent() {
    assert!(!DetectionSet::empty().present());
    assert!(DetectionSet::empty().filter_nested().is_empty());
}

#[test]
fn test_frame_dimensions() {
    let frame = Frame::new(vec![0u8; 12], 2, 2);
    assert_eq!(
        frame.dimensions(),
        Dimensions {
            width: 2,
            height: 2
        }
    );
}
