use bounce::geometry::*;

// ── accessors ─────────────────────────────────────────────────────────────────

#[test]
fn derived_edges_and_center() {
    let r = Rect::new(2.0, 3.0, 10.0, 4.0);
    assert_eq!(r.right(), 12.0);
    assert_eq!(r.bottom(), 7.0);
    assert_eq!(r.center(), Point::new(7.0, 5.0));
}

#[test]
fn from_origin_matches_new() {
    let r = Rect::from_origin(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
    assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));
}

// ── mutation ──────────────────────────────────────────────────────────────────

#[test]
fn translate_moves_all_edges() {
    let mut r = Rect::new(0.0, 0.0, 10.0, 5.0);
    r.translate(3.0, -2.0);
    assert_eq!(r.left, 3.0);
    assert_eq!(r.top, -2.0);
    assert_eq!(r.right(), 13.0);
    assert_eq!(r.bottom(), 3.0);
}

#[test]
fn set_right_and_bottom_keep_size() {
    let mut r = Rect::new(0.0, 0.0, 10.0, 5.0);
    r.set_right(11.0);
    r.set_bottom(20.0);
    assert_eq!(r.left, 1.0);
    assert_eq!(r.top, 15.0);
    assert_eq!(r.width, 10.0);
    assert_eq!(r.height, 5.0);
}

// ── contains ──────────────────────────────────────────────────────────────────

#[test]
fn contains_is_half_open() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(9.99, 9.99)));
    assert!(!r.contains(Point::new(10.0, 5.0)));
    assert!(!r.contains(Point::new(5.0, 10.0)));
    assert!(!r.contains(Point::new(-0.01, 5.0)));
}

#[test]
fn zero_size_rect_contains_nothing() {
    let r = Rect::new(5.0, 5.0, 0.0, 0.0);
    assert!(!r.contains(Point::new(5.0, 5.0)));
}

// ── overlaps ──────────────────────────────────────────────────────────────────

#[test]
fn overlapping_boxes() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn shared_edge_is_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 5.0, 10.0);
    let below = Rect::new(0.0, 10.0, 10.0, 5.0);
    assert!(!a.overlaps(&right));
    assert!(!a.overlaps(&below));
}

#[test]
fn shared_corner_is_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let corner = Rect::new(10.0, 10.0, 5.0, 5.0);
    assert!(!a.overlaps(&corner));
}

#[test]
fn containment_counts_as_overlap() {
    let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
    let inner = Rect::new(2.0, 2.0, 1.0, 1.0);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn axis_overlap_is_independent() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let beside = Rect::new(20.0, 2.0, 5.0, 5.0);
    assert!(!a.overlaps_x(&beside));
    assert!(a.overlaps_y(&beside));
}
