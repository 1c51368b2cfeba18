//! Snapshot tests for the JSON shape of items and boards.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use moodboard::board::{Board, BoardState};
use moodboard::editor::BoardEditor;
use moodboard::geometry::{Point, Size};
use moodboard::types::{BoardItem, FontWeight, ItemContent};

fn pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap()
}

#[test]
fn snapshot_text_item() {
    let item = BoardItem {
        id: 3,
        position: Point::new(100.0, 100.0),
        size: Size::new(200.0, 50.0),
        content: ItemContent::Text {
            text: "Double-click to edit".to_string(),
            font_size: 16,
            color: "#6366f1".to_string(),
            font_weight: FontWeight::Bold,
        },
    };
    insta::assert_snapshot!(pretty(&item), @r##"
    {
      "id": 3,
      "position": {
        "x": 100.0,
        "y": 100.0
      },
      "size": {
        "width": 200.0,
        "height": 50.0
      },
      "content": {
        "type": "text",
        "text": "Double-click to edit",
        "fontSize": 16,
        "color": "#6366f1",
        "fontWeight": "bold"
      }
    }
    "##);
}

#[test]
fn snapshot_image_and_palette_content() {
    let image = ItemContent::Image {
        url: "blob:abc".to_string(),
        alt: "moodboard.png".to_string(),
        original_name: "moodboard.png".to_string(),
    };
    insta::assert_snapshot!(pretty(&image), @r#"
    {
      "type": "image",
      "url": "blob:abc",
      "alt": "moodboard.png",
      "originalName": "moodboard.png"
    }
    "#);

    let palette = ItemContent::ColorPalette {
        title: None,
        colors: vec!["#000000".to_string()],
    };
    insta::assert_snapshot!(pretty(&palette), @r##"
    {
      "type": "color-palette",
      "title": null,
      "colors": [
        "#000000"
      ]
    }
    "##);
}

#[test]
fn snapshot_note_board_state() {
    let mut board = Board::new("Interior Ideas");
    board.id = "board-1".to_string();
    let mut editor = BoardEditor::new(board);
    editor.add_note();

    let state: BoardState = editor.save();
    insta::assert_snapshot!(pretty(&state), @r##"
    {
      "id": "board-1",
      "title": "Interior Ideas",
      "description": null,
      "items": [
        {
          "id": 0,
          "position": {
            "x": 150.0,
            "y": 150.0
          },
          "size": {
            "width": 250.0,
            "height": 150.0
          },
          "content": {
            "type": "note",
            "title": "Note",
            "content": "Write your note here...",
            "backgroundColor": "#fef3c7",
            "borderColor": "#f59e0b"
          }
        }
      ],
      "nextItemId": 1
    }
    "##);
}

#[test]
fn test_item_json_parses_back() {
    let json = r##"{
        "id": 9,
        "position": { "x": 1, "y": 2 },
        "size": { "width": 300, "height": 200 },
        "content": { "type": "note", "title": "T", "content": "C", "backgroundColor": "#fff", "borderColor": "#000" }
    }"##;
    let item: BoardItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.id, 9);
    assert_eq!(item.content.editable_text(), Some("C"));
}
