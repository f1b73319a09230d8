//! Tests for puzzle file loading and catalog directory scanning.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use tileslide_core::PuzzleSource;
use tileslide_game::{load_puzzle, LoadFailureKind, PuzzleCatalog, MENU_CAPACITY};

/// Writes a complete puzzle file plus every image it references.
fn write_puzzle(dir: &Path, filename: &str, name: &str, tiles: usize, size: i32) {
    let mut content = format!("name: {name}\nnumber: {tiles}\nsize: {size}\n");
    let thumb = format!("{name}_thumb.gif");
    fs::write(dir.join(&thumb), b"gif").expect("Failed to write thumbnail");
    content.push_str(&format!("thumbnail: {thumb}\n"));
    for slot in 1..=tiles {
        let image = format!("{name}_{slot}.gif");
        fs::write(dir.join(&image), b"gif").expect("Failed to write tile image");
        content.push_str(&format!("{slot}: {image}\n"));
    }
    fs::write(dir.join(filename), content).expect("Failed to write puzzle file");
}

#[test]
fn test_load_builds_a_complete_definition() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_puzzle(dir.path(), "mario.puz", "Mario", 9, 100);

    let puzzle = load_puzzle(dir.path(), dir.path(), "mario.puz").expect("Load failed");
    assert_eq!(puzzle.name(), "Mario");
    assert_eq!(*puzzle.tile_count(), 9);
    assert_eq!(puzzle.width(), 3);
    assert_eq!(*puzzle.tile_size(), 100);
    assert_eq!(puzzle.tile_images().len(), 9);
    assert_eq!(puzzle.tile_images()[0].path(), "Mario_1.gif");
    assert_eq!(puzzle.thumbnail().path(), "Mario_thumb.gif");
}

#[test]
fn test_missing_file_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let error = load_puzzle(dir.path(), dir.path(), "absent.puz").expect_err("Load should fail");
    assert_eq!(error.kind, LoadFailureKind::FileNotFound);
    assert_eq!(error.filename, "absent.puz");
}

#[test]
fn test_non_square_tile_count_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("odd.puz"), "name: Odd\nnumber: 15\n").expect("Write failed");

    let error = load_puzzle(dir.path(), dir.path(), "odd.puz").expect_err("Load should fail");
    assert_eq!(error.kind, LoadFailureKind::NotSquare(15));
}

#[test]
fn test_line_without_separator_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("bad.puz"), "name: Bad\njust some text\n").expect("Write failed");

    let error = load_puzzle(dir.path(), dir.path(), "bad.puz").expect_err("Load should fail");
    assert!(matches!(error.kind, LoadFailureKind::MalformedLine(_)));
}

#[test]
fn test_tile_line_before_number_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("tile.gif"), b"gif").expect("Write failed");
    fs::write(
        dir.path().join("early.puz"),
        "name: Early\n1: tile.gif\nnumber: 4\n",
    )
    .expect("Write failed");

    let error = load_puzzle(dir.path(), dir.path(), "early.puz").expect_err("Load should fail");
    assert!(matches!(error.kind, LoadFailureKind::MissingNumber(_)));
}

#[test]
fn test_tile_indices_outside_the_puzzle_are_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("tile.gif"), b"gif").expect("Write failed");

    fs::write(
        dir.path().join("zero.puz"),
        "name: Zero\nnumber: 4\n0: tile.gif\n",
    )
    .expect("Write failed");
    let error = load_puzzle(dir.path(), dir.path(), "zero.puz").expect_err("Load should fail");
    assert_eq!(error.kind, LoadFailureKind::TileIndexOutOfRange(0));

    fs::write(
        dir.path().join("five.puz"),
        "name: Five\nnumber: 4\n5: tile.gif\n",
    )
    .expect("Write failed");
    let error = load_puzzle(dir.path(), dir.path(), "five.puz").expect_err("Load should fail");
    assert_eq!(error.kind, LoadFailureKind::TileIndexOutOfRange(5));
}

#[test]
fn test_missing_image_file_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("ghost.puz"),
        "name: Ghost\nnumber: 4\n1: nowhere.gif\n",
    )
    .expect("Write failed");

    let error = load_puzzle(dir.path(), dir.path(), "ghost.puz").expect_err("Load should fail");
    assert_eq!(
        error.kind,
        LoadFailureKind::MissingImage("nowhere.gif".to_string())
    );
}

#[test]
fn test_incomplete_file_lists_what_is_missing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut content = String::from("name: Gappy\nnumber: 4\nsize: 100\n");
    let thumb = "gappy_thumb.gif";
    fs::write(dir.path().join(thumb), b"gif").expect("Write failed");
    content.push_str(&format!("thumbnail: {thumb}\n"));
    for slot in [1usize, 2, 3] {
        let image = format!("gappy_{slot}.gif");
        fs::write(dir.path().join(&image), b"gif").expect("Write failed");
        content.push_str(&format!("{slot}: {image}\n"));
    }
    fs::write(dir.path().join("gappy.puz"), content).expect("Write failed");

    let error = load_puzzle(dir.path(), dir.path(), "gappy.puz").expect_err("Load should fail");
    assert_eq!(error.kind, LoadFailureKind::Incomplete("4".to_string()));
}

#[test]
fn test_scan_loads_valid_puzzles_sorted_by_filename() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_puzzle(dir.path(), "zelda.puz", "Zelda", 4, 150);
    write_puzzle(dir.path(), "mario.puz", "Mario", 9, 100);

    let catalog = PuzzleCatalog::scan(dir.path(), dir.path()).expect("Scan failed");
    assert_eq!(catalog.len(), 2);
    assert!(!catalog.overflow());

    let ids: Vec<&str> = catalog
        .entries()
        .iter()
        .map(|entry| entry.id().as_str())
        .collect();
    assert_eq!(ids, ["mario.puz", "zelda.puz"]);
}

#[test]
fn test_scan_skips_invalid_and_unrelated_files() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_puzzle(dir.path(), "good.puz", "Good", 4, 100);
    fs::write(dir.path().join("broken.puz"), "name: Broken\nnumber: 4\n").expect("Write failed");
    fs::write(dir.path().join("notes.txt"), "not a puzzle").expect("Write failed");

    let catalog = PuzzleCatalog::scan(dir.path(), dir.path()).expect("Scan failed");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].id(), "good.puz");
}

#[test]
fn test_scan_empty_directory_is_not_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = PuzzleCatalog::scan(dir.path(), dir.path()).expect("Scan failed");
    assert!(catalog.is_empty());
    assert!(catalog.entries().is_empty());
}

#[test]
fn test_scan_nonexistent_directory_fails() {
    let result = PuzzleCatalog::scan("/this/path/does/not/exist/at/all", ".");
    assert!(result.is_err());
}

#[test]
fn test_menu_entries_cap_at_capacity_and_flag_overflow() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for index in 0..10 {
        write_puzzle(
            dir.path(),
            &format!("puzzle_{index}.puz"),
            &format!("P{index}"),
            4,
            100,
        );
    }

    let catalog = PuzzleCatalog::scan(dir.path(), dir.path()).expect("Scan failed");
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.entries().len(), MENU_CAPACITY);
    assert!(catalog.overflow());
}

#[test]
fn test_puzzle_resolves_menu_ids() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_puzzle(dir.path(), "mario.puz", "Mario", 9, 100);

    let catalog = PuzzleCatalog::scan(dir.path(), dir.path()).expect("Scan failed");
    let puzzle = catalog.puzzle("mario.puz").expect("Puzzle should resolve");
    assert_eq!(puzzle.name(), "Mario");
    assert!(catalog.puzzle("luigi.puz").is_none());
}

#[test]
fn test_load_file_reaches_past_the_menu() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for index in 0..10 {
        write_puzzle(
            dir.path(),
            &format!("puzzle_{index}.puz"),
            &format!("P{index}"),
            4,
            100,
        );
    }

    let mut catalog = PuzzleCatalog::scan(dir.path(), dir.path()).expect("Scan failed");
    // puzzle_9 sorts past the ninth entry, so only a direct load reaches it.
    assert!(catalog
        .entries()
        .iter()
        .all(|entry| entry.id() != "puzzle_9.puz"));
    let puzzle = catalog
        .load_file("puzzle_9.puz")
        .expect("Direct load failed");
    assert_eq!(puzzle.name(), "P9");
    assert!(catalog.load_file("missing.puz").is_none());
}

#[test]
fn test_manual_requests_answer_in_queue_order() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_puzzle(dir.path(), "first.puz", "First", 4, 100);
    write_puzzle(dir.path(), "second.puz", "Second", 9, 100);

    let mut catalog = PuzzleCatalog::scan(dir.path(), dir.path()).expect("Scan failed");
    catalog.queue_manual("second.puz");
    catalog.queue_manual("first.puz");

    let puzzle = catalog.request_manual().expect("First request failed");
    assert_eq!(puzzle.name(), "Second");
    let puzzle = catalog.request_manual().expect("Second request failed");
    assert_eq!(puzzle.name(), "First");
    assert!(catalog.request_manual().is_none());
}
