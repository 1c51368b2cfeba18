//! Board index - the dashboard's list of boards.
//!
//! Holds metadata only. Board contents live in their editors; the item count
//! shown on a card is refreshed with [`BoardIndex::sync_from`].

use crate::board::Board;
use crate::error::BoardIndexError;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMetadata {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub item_count: usize,
    pub created_at: u64,
    pub updated_at: u64,
}

impl BoardMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        let now = now_secs();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            favorite: false,
            item_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = now_secs();
    }

    /// Open a fresh, empty board for this entry.
    pub fn open(&self) -> Board {
        let mut board = Board::new(self.title.clone());
        board.id = self.id.clone();
        board.description = self.description.clone();
        board
    }
}

/// Totals shown above the board list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub total_boards: usize,
    pub total_items: usize,
    pub favorites: usize,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BoardIndex {
    pub boards: Vec<BoardMetadata>,
}

impl BoardIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board. The title is trimmed; a blank title is rejected. A blank
    /// description is stored as `None`.
    pub fn create_board(
        &mut self,
        title: &str,
        description: Option<&str>,
    ) -> Result<&BoardMetadata, BoardIndexError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardIndexError::EmptyTitle);
        }
        let mut meta = BoardMetadata::new(title);
        meta.description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        info!(board_id = %meta.id, title, "board created");

        self.boards.push(meta);
        let last = self.boards.len() - 1;
        Ok(&self.boards[last])
    }

    pub fn get_board(&self, id: &str) -> Option<&BoardMetadata> {
        self.boards.iter().find(|b| b.id == id)
    }

    fn get_board_mut(&mut self, id: &str) -> Result<&mut BoardMetadata, BoardIndexError> {
        self.boards
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BoardIndexError::NotFound(id.to_string()))
    }

    /// Flip the favorite flag, returning the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, BoardIndexError> {
        let meta = self.get_board_mut(id)?;
        meta.favorite = !meta.favorite;
        meta.touch();
        Ok(meta.favorite)
    }

    pub fn favorites(&self) -> impl Iterator<Item = &BoardMetadata> {
        self.boards.iter().filter(|b| b.favorite)
    }

    pub fn remove_board(&mut self, id: &str) -> Result<BoardMetadata, BoardIndexError> {
        let pos = self
            .boards
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| BoardIndexError::NotFound(id.to_string()))?;
        let removed = self.boards.remove(pos);
        info!(board_id = %removed.id, "board removed");
        Ok(removed)
    }

    /// Refresh title, description and item count from an open board.
    pub fn sync_from(&mut self, board: &Board) -> Result<(), BoardIndexError> {
        let meta = self.get_board_mut(&board.id)?;
        meta.title = board.title.clone();
        meta.description = board.description.clone();
        meta.item_count = board.item_count();
        meta.touch();
        Ok(())
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            total_boards: self.boards.len(),
            total_items: self.boards.iter().map(|b| b.item_count).sum(),
            favorites: self.boards.iter().filter(|b| b.favorite).count(),
        }
    }
}
