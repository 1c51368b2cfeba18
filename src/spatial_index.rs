//! Spatial Index Module
//!
//! R-tree based spatial indexing for hit testing on the board surface.
//! Point queries are O(log n); a drag updates a single entry per move.

use crate::geometry::{Point, Rect};
use crate::types::ItemId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing an item's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    pub bounds: Rect,
}

impl SpatialEntry {
    pub fn new(item_id: ItemId, bounds: Rect) -> Self {
        Self { item_id, bounds }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.origin.x, self.bounds.origin.y],
            [self.bounds.right(), self.bounds.bottom()],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index over item bounds.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build a spatial index from `(id, bounds)` pairs.
    pub fn from_items<I>(items: I) -> Self
    where
        I: Iterator<Item = (ItemId, Rect)>,
    {
        let entries: Vec<SpatialEntry> = items.map(|(id, b)| SpatialEntry::new(id, b)).collect();
        let map = entries.iter().map(|e| (e.item_id, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: map,
        }
    }

    /// Insert or replace the entry for `item_id`.
    pub fn upsert(&mut self, item_id: ItemId, bounds: Rect) {
        if let Some(old) = self.entries.remove(&item_id) {
            self.tree.remove(&old);
        }
        let entry = SpatialEntry::new(item_id, bounds);
        self.tree.insert(entry);
        self.entries.insert(item_id, entry);
    }

    pub fn remove(&mut self, item_id: ItemId) -> bool {
        if let Some(entry) = self.entries.remove(&item_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All items whose bounds contain `p`.
    pub fn query_point(&self, p: Point) -> Vec<ItemId> {
        let envelope = AABB::from_point([p.x, p.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.bounds.contains(p))
            .map(|entry| entry.item_id)
            .collect()
    }

    /// All items intersecting `rect`.
    pub fn query_rect(&self, rect: Rect) -> Vec<ItemId> {
        let envelope = AABB::from_corners([rect.origin.x, rect.origin.y], [rect.right(), rect.bottom()]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.item_id)
            .collect()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
