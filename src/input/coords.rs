//! Coordinate conversion between screen space and the board surface.
//!
//! Every handler converts through here so drag math never mixes the two
//! spaces.

use crate::geometry::{Point, relative_position};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to surface coordinates, given the surface's on-screen origin.
    #[inline]
    pub fn screen_to_surface(screen_pos: Point, surface_origin: Point) -> Point {
        relative_position(screen_pos, surface_origin)
    }
}
