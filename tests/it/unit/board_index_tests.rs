//! Unit tests for board_index module.

use moodboard::board::Board;
use moodboard::board_index::{BoardIndex, BoardMetadata, BoardStats};
use moodboard::error::BoardIndexError;
use moodboard::geometry::Point;
use moodboard::types::ItemContent;

#[test]
fn test_board_metadata_new() {
    let meta = BoardMetadata::new("Test Board");
    assert_eq!(meta.title, "Test Board");
    assert_eq!(meta.id.len(), 36);
    assert!(!meta.favorite);
    assert_eq!(meta.item_count, 0);
    assert_eq!(meta.created_at, meta.updated_at);
}

#[test]
fn test_create_board_trims_title_and_description() {
    let mut index = BoardIndex::new();
    let meta = index.create_board("  Interior Ideas  ", Some("  ")).unwrap();
    assert_eq!(meta.title, "Interior Ideas");
    assert_eq!(meta.description, None);

    let meta = index.create_board("Fashion", Some(" Fall trends ")).unwrap();
    assert_eq!(meta.description.as_deref(), Some("Fall trends"));
    assert_eq!(index.boards.len(), 2);
}

#[test]
fn test_create_board_rejects_blank_title() {
    let mut index = BoardIndex::new();
    assert_eq!(index.create_board("   ", None).unwrap_err(), BoardIndexError::EmptyTitle);
    assert!(index.boards.is_empty());
}

#[test]
fn test_toggle_favorite() {
    let mut index = BoardIndex::new();
    let id = index.create_board("Palettes", None).unwrap().id.clone();

    assert_eq!(index.toggle_favorite(&id), Ok(true));
    assert_eq!(index.favorites().count(), 1);
    assert_eq!(index.toggle_favorite(&id), Ok(false));
    assert_eq!(index.favorites().count(), 0);
    assert_eq!(
        index.toggle_favorite("missing"),
        Err(BoardIndexError::NotFound("missing".to_string()))
    );
}

#[test]
fn test_remove_board() {
    let mut index = BoardIndex::new();
    let id = index.create_board("Gone", None).unwrap().id.clone();
    let removed = index.remove_board(&id).unwrap();
    assert_eq!(removed.title, "Gone");
    assert!(index.get_board(&id).is_none());
    assert!(index.remove_board(&id).is_err());
}

#[test]
fn test_sync_from_open_board_updates_stats() {
    let mut index = BoardIndex::new();
    let meta = index.create_board("Interior", Some("Minimalist")).unwrap().clone();
    index.create_board("Empty", None).unwrap();

    let mut board: Board = meta.open();
    assert_eq!(board.id, meta.id);
    assert_eq!(board.description.as_deref(), Some("Minimalist"));
    for i in 0..3 {
        board.add_item(
            Point::new(i as f32 * 10.0, 0.0),
            ItemContent::ColorPalette { title: None, colors: Vec::new() },
        );
    }
    index.sync_from(&board).unwrap();
    index.toggle_favorite(&meta.id).unwrap();

    assert_eq!(
        index.stats(),
        BoardStats {
            total_boards: 2,
            total_items: 3,
            favorites: 1,
        }
    );
}

#[test]
fn test_sync_from_unknown_board() {
    let mut index = BoardIndex::new();
    let board = Board::new("Loose");
    assert!(matches!(index.sync_from(&board), Err(BoardIndexError::NotFound(_))));
}
