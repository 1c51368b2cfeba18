//! Script replay end to end.

use moodboard::geometry::Point;
use moodboard::input::InputOutcome;
use moodboard::script::Script;
use moodboard::settings::Settings;
use moodboard::types::ItemKind;
use std::path::Path;

#[test]
fn test_replay_drag_scenario() {
    let script = Script::from_json(
        r#"{
            "board": { "title": "Replay" },
            "steps": [
                { "action": "set_surface", "origin": { "x": 0, "y": 0 }, "size": { "width": 800, "height": 600 } },
                { "action": "add_note" },
                { "action": "pointer_down", "x": 160, "y": 160 },
                { "action": "pointer_move", "x": 210, "y": 260 },
                { "action": "pointer_up", "x": 210, "y": 260 }
            ]
        }"#,
    )
    .unwrap();

    let replay = script.run(Settings::default(), Path::new("."));
    assert!(replay.failures.is_empty());
    assert_eq!(replay.outcomes[2], Some(InputOutcome::DragStarted(0)));
    assert_eq!(replay.outcomes[4], Some(InputOutcome::DragEnded(0)));
    assert_eq!(replay.editor.item(0).unwrap().position, Point::new(200.0, 250.0));
}

#[test]
fn test_replay_edit_and_delete() {
    let script = Script::from_json(
        r#"{
            "steps": [
                { "action": "set_font_size", "size": 24 },
                { "action": "add_text" },
                { "action": "add_color_palette", "title": "Pastels" },
                { "action": "begin_edit", "id": 0 },
                { "action": "set_edit_buffer", "text": "Headline" },
                { "action": "save_edit" },
                { "action": "begin_edit", "id": 1 },
                { "action": "request_delete", "id": 1 },
                { "action": "confirm_delete" }
            ]
        }"#,
    )
    .unwrap();

    let replay = script.run(Settings::default(), Path::new("."));
    // Palettes are not editable
    assert_eq!(replay.failures.len(), 1);
    assert_eq!(replay.failures[0].index, 6);

    let items = replay.editor.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind(), ItemKind::Text);
    assert_eq!(items[0].content.editable_text(), Some("Headline"));
}

#[test]
fn test_replay_uploads_local_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.png"), [0u8; 16]).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();

    let script = Script::from_json(
        r#"{ "steps": [ { "action": "upload_paths", "paths": ["a.png", "notes.txt"] } ] }"#,
    )
    .unwrap();
    let replay = script.run(Settings::default(), dir.path());
    assert!(replay.failures.is_empty());
    assert_eq!(replay.editor.items().len(), 1);
    assert_eq!(replay.editor.items()[0].position, Point::new(50.0, 50.0));
}

#[test]
fn test_script_settings_override_fallback() {
    let script = Script::from_json(
        r#"{
            "settings": { "max_upload_bytes": 8 },
            "steps": [
                { "action": "upload_images", "files": [
                    { "name": "a.png", "mediaType": "image/png", "sizeBytes": 9, "url": "blob:a" }
                ] }
            ]
        }"#,
    )
    .unwrap();
    let replay = script.run(Settings::default(), Path::new("."));
    assert_eq!(replay.failures.len(), 1);
    assert!(replay.editor.items().is_empty());
    assert_eq!(replay.editor.toasts().count(), 1);
}

#[test]
fn test_script_settings_are_sanitized() {
    let script = Script::from_json(
        r#"{
            "settings": { "export_scale": 1e10 },
            "steps": [
                { "action": "set_surface", "origin": { "x": 0, "y": 0 }, "size": { "width": 800, "height": 600 } }
            ]
        }"#,
    )
    .unwrap();
    let mut replay = script.run(Settings::default(), Path::new("."));
    let img = replay.editor.export_image().unwrap();
    assert_eq!(img.dimensions(), (1600, 1200));
}

#[test]
fn test_load_missing_script() {
    let err = Script::load(Path::new("/definitely/not/here.json")).err().unwrap();
    assert!(format!("{err:#}").contains("here.json"));
}
