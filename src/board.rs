//! Board model - the named, ordered collection of items in one editor view.
//!
//! Items are kept in insertion order (later items paint above earlier ones
//! within a layer). A spatial index mirrors their bounds for hit testing and
//! is updated one entry at a time as items move.

use crate::constants::MAX_ITEM_ID;
use crate::error::BoardStateError;
use crate::geometry::{Point, Rect, Size};
use crate::spatial_index::SpatialIndex;
use crate::types::{BoardItem, ItemContent, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Serializable view of a board, used for the save placeholder and replay output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<BoardItem>,
    pub next_item_id: ItemId,
}

pub struct Board {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    items: Vec<BoardItem>,
    next_item_id: ItemId,
    index: SpatialIndex,
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            items: Vec::new(),
            next_item_id: 0,
            index: SpatialIndex::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Rebuild a board from a saved state, reindexing every item.
    ///
    /// Rejects states with repeated ids or ids past [`MAX_ITEM_ID`], since the
    /// counter could then hand out an id that is already taken.
    pub fn from_state(state: BoardState) -> Result<Self, BoardStateError> {
        let mut seen = HashSet::with_capacity(state.items.len());
        let mut next_item_id = state.next_item_id;
        for item in &state.items {
            if item.id >= MAX_ITEM_ID {
                return Err(BoardStateError::ItemIdOutOfRange(item.id));
            }
            if !seen.insert(item.id) {
                return Err(BoardStateError::DuplicateItemId(item.id));
            }
            next_item_id = next_item_id.max(item.id + 1);
        }
        if next_item_id > MAX_ITEM_ID {
            return Err(BoardStateError::ItemIdOutOfRange(next_item_id));
        }

        let index = SpatialIndex::from_items(state.items.iter().map(|i| (i.id, i.bounds())));
        Ok(Self {
            id: state.id,
            title: state.title,
            description: state.description,
            items: state.items,
            next_item_id,
            index,
        })
    }

    pub fn snapshot(&self) -> BoardState {
        BoardState {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            items: self.items.clone(),
            next_item_id: self.next_item_id,
        }
    }

    /// Append a new item with the content's default size. Returns its id.
    pub fn add_item(&mut self, position: Point, content: ItemContent) -> ItemId {
        let id = self.next_item_id;
        self.next_item_id += 1;

        let item = BoardItem {
            id,
            position: Point::new(position.x.max(0.0), position.y.max(0.0)),
            size: content.default_size(),
            content,
        };
        self.index.upsert(id, item.bounds());
        debug!(item_id = id, kind = item.kind().label(), "item added");
        self.items.push(item);
        id
    }

    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn next_item_id(&self) -> ItemId {
        self.next_item_id
    }

    pub fn get_item(&self, id: ItemId) -> Option<&BoardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutable access for content edits. Position changes go through [`Board::move_item`]
    /// so the index stays in sync.
    pub fn get_item_content_mut(&mut self, id: ItemId) -> Option<&mut ItemContent> {
        self.items.iter_mut().find(|item| item.id == id).map(|item| &mut item.content)
    }

    /// Move one item and refresh only its index entry.
    pub fn move_item(&mut self, id: ItemId, position: Point) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.position = Point::new(position.x.max(0.0), position.y.max(0.0));
        self.index.upsert(id, item.bounds());
        true
    }

    /// Move one item to a position derived from its size, in a single lookup.
    /// Returns the applied position.
    pub fn place_item(&mut self, id: ItemId, place: impl FnOnce(Size) -> Point) -> Option<Point> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        let position = place(item.size);
        item.position = Point::new(position.x.max(0.0), position.y.max(0.0));
        self.index.upsert(id, item.bounds());
        Some(item.position)
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<BoardItem> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        self.index.remove(id);
        Some(self.items.remove(idx))
    }

    /// Ids of items containing `p`, in paint order (bottom first).
    pub fn query_items_at_point(&self, p: Point) -> Vec<ItemId> {
        let mut hits = self.index.query_point(p);
        self.sort_by_paint_order(&mut hits);
        hits
    }

    /// Ids of items intersecting `rect`, in paint order.
    pub fn query_items_in_rect(&self, rect: Rect) -> Vec<ItemId> {
        let mut hits = self.index.query_rect(rect);
        self.sort_by_paint_order(&mut hits);
        hits
    }

    /// Case-insensitive search over the recognizable text of each item.
    pub fn find_items(&self, query: &str) -> Vec<&BoardItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.items.iter().filter(|item| item.content.matches(&needle)).collect()
    }

    fn sort_by_paint_order(&self, ids: &mut [ItemId]) {
        ids.sort_by_key(|id| self.items.iter().position(|item| item.id == *id).unwrap_or(usize::MAX));
    }
}
