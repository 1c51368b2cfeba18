//! Property-style checks for the geometry utilities over sampled inputs.

use moodboard::geometry::{
    Point, Rect, Size, calculate_new_position, constrain_to_parent, detect_collision, drag_position,
    snap_to_grid,
};

fn samples() -> Vec<Point> {
    let coords = [-125.5, -3.0, 0.0, 4.9, 5.0, 17.25, 99.99, 640.0, 1234.5];
    coords
        .iter()
        .flat_map(|&x| coords.iter().map(move |&y| Point::new(x, y)))
        .collect()
}

#[test]
fn test_constrain_bounds_hold_for_samples() {
    let parent = Size::new(640.0, 480.0);
    for size in [Size::new(200.0, 50.0), Size::new(300.0, 200.0), Size::new(640.0, 480.0)] {
        for p in samples() {
            let c = constrain_to_parent(p, size, parent);
            assert!(c.x >= 0.0 && c.x <= parent.width - size.width);
            assert!(c.y >= 0.0 && c.y <= parent.height - size.height);
        }
    }
}

#[test]
fn test_snap_is_idempotent() {
    for grid in [1.0, 10.0, 25.0] {
        for p in samples() {
            let once = snap_to_grid(p, grid);
            assert_eq!(snap_to_grid(once, grid), once, "grid {grid}, point {p:?}");
        }
    }
}

#[test]
fn test_snap_with_invalid_grid_returns_input() {
    let p = Point::new(13.3, 7.7);
    assert_eq!(snap_to_grid(p, 0.0), p);
    assert_eq!(snap_to_grid(p, -10.0), p);
    assert_eq!(snap_to_grid(p, f32::NAN), p);
}

#[test]
fn test_collision_symmetry_over_grid() {
    let rects: Vec<Rect> = samples()
        .into_iter()
        .map(|p| Rect::new(p, Size::new(120.0, 80.0)))
        .collect();
    for a in &rects {
        for b in &rects {
            assert_eq!(detect_collision(*a, *b), detect_collision(*b, *a));
        }
    }
}

#[test]
fn test_touching_edges_collide() {
    let a = Rect::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
    let right = Rect::new(Point::new(100.0, 0.0), Size::new(50.0, 50.0));
    let apart = Rect::new(Point::new(100.5, 0.0), Size::new(50.0, 50.0));
    assert!(detect_collision(a, right));
    assert!(!detect_collision(a, apart));
}

#[test]
fn test_zero_delta_is_noop_for_samples() {
    for p in samples() {
        let start = Point::new(300.0, 200.0);
        assert_eq!(calculate_new_position(p, start, start), p);
    }
}

#[test]
fn test_drag_position_matches_delta_translation_inside_bounds() {
    // Offset-based and delta-based drags agree when no clamping applies.
    let item = Point::new(50.0, 50.0);
    let press = Point::new(60.0, 60.0);
    let offset = press - item;
    let pointer = Point::new(110.0, 160.0);

    let by_offset = drag_position(pointer, offset, Size::new(200.0, 50.0), Some(Size::new(800.0, 600.0)));
    let by_delta = calculate_new_position(item, press, pointer);
    assert_eq!(by_offset, by_delta);
    assert_eq!(by_offset, Point::new(100.0, 150.0));
}
