use invaders::geometry::{overlaps, Rect};

use proptest::prelude::*;

// ── Basic contract ────────────────────────────────────────────────────────────

#[test]
fn rect_overlaps_itself() {
    let r = Rect::new(10.0, 20.0, 5.0, 10.0);
    assert!(overlaps(&r, &r));
}

#[test]
fn disjoint_on_x_never_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(50.0, 0.0, 10.0, 10.0);
    assert!(!overlaps(&a, &b));
    assert!(!overlaps(&b, &a));
}

#[test]
fn disjoint_on_y_never_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(0.0, 50.0, 10.0, 10.0);
    assert!(!overlaps(&a, &b));
    assert!(!overlaps(&b, &a));
}

#[test]
fn edge_touching_is_not_overlap() {
    // Strict inequalities: sharing an edge does not count
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0);
    assert!(!overlaps(&a, &b));
    let c = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!overlaps(&a, &c));
}

#[test]
fn partial_overlap_detected() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(9.0, 9.0, 10.0, 10.0);
    assert!(overlaps(&a, &b));
}

#[test]
fn containment_is_overlap() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
    assert!(overlaps(&outer, &inner));
    assert!(overlaps(&inner, &outer));
}

#[test]
fn rect_accessors() {
    let r = Rect::new(10.0, 20.0, 6.0, 8.0);
    assert_eq!(r.right(), 16.0);
    assert_eq!(r.bottom(), 28.0);
    assert_eq!(r.center_x(), 13.0);
}

// ── Algebraic properties ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn overlap_is_symmetric(
        ax in -500.0f32..500.0, ay in -500.0f32..500.0,
        aw in 0.1f32..100.0, ah in 0.1f32..100.0,
        bx in -500.0f32..500.0, by in -500.0f32..500.0,
        bw in 0.1f32..100.0, bh in 0.1f32..100.0,
    ) {
        let a = Rect::new(ax, ay, aw, ah);
        let b = Rect::new(bx, by, bw, bh);
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn no_shared_x_interval_means_no_overlap(
        ax in -500.0f32..500.0, ay in -500.0f32..500.0,
        aw in 0.1f32..100.0, ah in 0.1f32..100.0,
        gap in 0.0f32..100.0,
        by in -500.0f32..500.0, bw in 0.1f32..100.0, bh in 0.1f32..100.0,
    ) {
        let a = Rect::new(ax, ay, aw, ah);
        let b = Rect::new(ax + aw + gap, by, bw, bh);
        prop_assert!(!overlaps(&a, &b));
    }

    #[test]
    fn positive_rect_overlaps_itself(
        x in -500.0f32..500.0, y in -500.0f32..500.0,
        w in 0.1f32..100.0, h in 0.1f32..100.0,
    ) {
        let r = Rect::new(x, y, w, h);
        prop_assert!(overlaps(&r, &r));
    }
}
