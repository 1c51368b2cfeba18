//! Position and size arithmetic for the board surface.
//!
//! Everything here is pure: no editor state, no side effects. The live drag
//! handler goes through [`drag_position`] so initial placement and every
//! pointer move share one transform.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A position in board-surface pixels, top-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Inclusive on all edges, matching the hit-test semantics of the spatial index.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x && p.x <= self.right() && p.y >= self.origin.y && p.y <= self.bottom()
    }
}

/// Clamp `position` so an item of `size` stays inside `parent`.
///
/// When the item is larger than the parent on an axis the upper bound goes
/// negative and the lower bound (0) wins.
pub fn constrain_to_parent(position: Point, size: Size, parent: Size) -> Point {
    Point::new(
        position.x.min(parent.width - size.width).max(0.0),
        position.y.min(parent.height - size.height).max(0.0),
    )
}

/// Pointer coordinates relative to a container whose top-left sits at `container_origin`.
#[inline]
pub fn relative_position(pointer: Point, container_origin: Point) -> Point {
    pointer - container_origin
}

/// Delta-based translation: `current + (mouse - drag_start)`.
#[inline]
pub fn calculate_new_position(current: Point, drag_start: Point, mouse: Point) -> Point {
    current + (mouse - drag_start)
}

/// AABB overlap test. Boxes that only touch along an edge count as colliding.
pub fn detect_collision(a: Rect, b: Rect) -> bool {
    !(a.right() < b.origin.x
        || b.right() < a.origin.x
        || a.bottom() < b.origin.y
        || b.bottom() < a.origin.y)
}

/// Round each axis to the nearest multiple of `grid_size`.
pub fn snap_to_grid(position: Point, grid_size: f32) -> Point {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return position;
    }
    Point::new(
        (position.x / grid_size).round() * grid_size,
        (position.y / grid_size).round() * grid_size,
    )
}

/// The one drag transform: pointer minus the offset captured at drag start.
///
/// With known `bounds` the result is kept inside them; otherwise only the
/// non-negative lower bound applies.
pub fn drag_position(pointer: Point, offset: Point, size: Size, bounds: Option<Size>) -> Point {
    let raw = pointer - offset;
    match bounds {
        Some(parent) => constrain_to_parent(raw, size, parent),
        None => Point::new(raw.x.max(0.0), raw.y.max(0.0)),
    }
}
