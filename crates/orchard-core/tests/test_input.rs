mod common;

use std::path::Path;

use orchard_core::error::InputError;
use orchard_core::input::{guess_media_type, DropZone, SelectedFile};

use common::{image_file, png_bytes, text_file};

// ---------------------------------------------------------------------------
// Media type
// ---------------------------------------------------------------------------

#[test]
fn test_guess_media_type_from_extension() {
    assert_eq!(guess_media_type(Path::new("a.png")), "image/png");
    assert_eq!(guess_media_type(Path::new("b.jpg")), "image/jpeg");
    assert_eq!(guess_media_type(Path::new("c.webp")), "image/webp");
}

#[test]
fn test_guess_media_type_unknown() {
    assert_eq!(guess_media_type(Path::new("notes.txt")), "application/octet-stream");
    assert_eq!(guess_media_type(Path::new("no_extension")), "application/octet-stream");
}

#[test]
fn test_empty_media_type_is_guessed() {
    let file = SelectedFile::new("photo.png", "", png_bytes(2, 2, [0, 0, 0]));
    assert_eq!(file.media_type, "image/png");
    assert!(file.is_image());
}

#[test]
fn test_declared_media_type_wins_over_extension() {
    let file = SelectedFile::new("photo.png", "text/plain", vec![0u8]);
    assert!(!file.is_image());
}

// ---------------------------------------------------------------------------
// Validation and decode
// ---------------------------------------------------------------------------

#[test]
fn test_validate_rejects_non_image() {
    let err = text_file("readme.md").validate().unwrap_err();
    match err {
        InputError::NotAnImage { name, media_type } => {
            assert_eq!(name, "readme.md");
            assert_eq!(media_type, "text/plain");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_decode_valid_png() {
    let preview = image_file("fruit.png").decode().unwrap();
    assert_eq!(preview.name, "fruit.png");
    assert_eq!((preview.width(), preview.height()), (8, 6));
}

#[test]
fn test_decode_garbage_bytes_fails() {
    let file = SelectedFile::new("broken.jpg", "image/jpeg", vec![0u8; 16]);
    assert!(matches!(file.decode(), Err(InputError::Decode { .. })));
}

#[test]
fn test_from_path_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("apple.png");
    std::fs::write(&path, png_bytes(3, 5, [10, 200, 10])).unwrap();

    let file = SelectedFile::from_path(&path).unwrap();
    assert_eq!(file.name, "apple.png");
    assert_eq!(file.media_type, "image/png");
    let preview = file.decode().unwrap();
    assert_eq!((preview.width(), preview.height()), (3, 5));
}

#[test]
fn test_from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SelectedFile::from_path(&dir.path().join("gone.png")).unwrap_err();
    assert!(matches!(err, InputError::Read { .. }));
}

// ---------------------------------------------------------------------------
// Drop zone highlight
// ---------------------------------------------------------------------------

#[test]
fn test_drop_zone_enter_leave() {
    let mut zone = DropZone::default();
    assert!(!zone.is_drag_over());
    zone.enter();
    assert!(zone.is_drag_over());
    zone.leave();
    assert!(!zone.is_drag_over());
}

#[test]
fn test_drop_zone_drop_clears() {
    let mut zone = DropZone::default();
    zone.enter();
    zone.dropped();
    assert!(!zone.is_drag_over());
}

#[test]
fn test_drop_zone_repeated_enter_is_idempotent() {
    let mut zone = DropZone::default();
    zone.enter();
    zone.enter();
    zone.leave();
    assert!(!zone.is_drag_over());
}

#[test]
fn test_drop_zone_tracks_hover() {
    let mut zone = DropZone::default();
    zone.track_hover(true);
    assert!(zone.is_drag_over());
    zone.track_hover(true);
    assert!(zone.is_drag_over());
    zone.track_hover(false);
    assert!(!zone.is_drag_over());
}
