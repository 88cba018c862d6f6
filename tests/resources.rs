use std::fs;

use image::{Rgba, RgbaImage};
use tilecam::{ResourceError, ResourceLoader, TileAtlasEntry};

const TILE_JSON: &str = r#"{ "0": { "sheet_x": 0, "sheet_y": 0 }, "5": { "sheet_x": 1, "sheet_y": 0 } }"#;

#[test]
fn bare_names_are_found_in_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("tiles/overworld")).unwrap();
    fs::write(dir.path().join("tiles/overworld/tile_data.json"), TILE_JSON).unwrap();

    let loader = ResourceLoader::new([dir.path()]);
    let table = loader.load_tile_table("tile_data.json").unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(5), Some(TileAtlasEntry::new(1, 0)));
}

#[test]
fn relative_paths_are_joined_onto_search_dirs() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("maps")).unwrap();
    fs::write(dir.path().join("maps/notes.txt"), "hello").unwrap();

    let loader = ResourceLoader::new([dir.path()]);
    assert_eq!(loader.load_text("maps/notes.txt").unwrap(), "hello");
    assert!(matches!(loader.load_text("other/notes.txt"), Err(ResourceError::NotFound(_))));
}

#[test]
fn first_search_dir_wins() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(first.path().join("a.txt"), "first").unwrap();
    fs::write(second.path().join("a.txt"), "second").unwrap();
    fs::write(second.path().join("b.txt"), "only second").unwrap();

    let loader = ResourceLoader::new([first.path()]).with_path(second.path());
    assert_eq!(loader.paths().len(), 2);
    assert_eq!(loader.load_text("a.txt").unwrap(), "first");
    assert_eq!(loader.load_text("b.txt").unwrap(), "only second");
}

#[test]
fn missing_resource_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ResourceLoader::new([dir.path()]);
    let err = loader.load_bytes("nope.png").unwrap_err();
    assert!(matches!(err, ResourceError::NotFound(ref n) if n == "nope.png"));
    assert_eq!(err.to_string(), "resource 'nope.png' not found");
}

#[test]
fn reindex_picks_up_new_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut loader = ResourceLoader::new([dir.path()]);
    fs::write(dir.path().join("late.txt"), "x").unwrap();
    assert!(loader.locate("late.txt").is_err());
    loader.reindex();
    assert_eq!(loader.locate("late.txt").unwrap(), dir.path().join("late.txt"));
}

#[test]
fn load_image_decodes_png_to_rgba() {
    let dir = tempfile::tempdir().unwrap();
    let img = RgbaImage::from_pixel(64, 32, Rgba([10, 20, 30, 255]));
    img.save(dir.path().join("tileset.png")).unwrap();

    let loader = ResourceLoader::new([dir.path()]);
    let loaded = loader.load_image("tileset.png").unwrap();
    assert_eq!(loaded.dimensions(), (64, 32));
    assert_eq!(*loaded.get_pixel(5, 5), Rgba([10, 20, 30, 255]));
}

#[test]
fn garbage_image_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.png"), b"not a png").unwrap();
    let loader = ResourceLoader::new([dir.path()]);
    assert!(matches!(loader.load_image("broken.png"), Err(ResourceError::Decode { .. })));
}

#[test]
fn invalid_tile_data_is_reported_with_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tiles.json"), r#"{ "x": { "sheet_x": 0, "sheet_y": 0 } }"#).unwrap();
    let loader = ResourceLoader::new([dir.path()]);
    let err = loader.load_tile_table("tiles.json").unwrap_err();
    assert!(matches!(err, ResourceError::TileData { ref name, .. } if name == "tiles.json"));
}

#[test]
fn bundled_sample_assets_load() {
    let loader = ResourceLoader::new([concat!(env!("CARGO_MANIFEST_DIR"), "/resources")]);
    let tileset = loader.load_image("sample_tileset.png").unwrap();
    let table = loader.load_tile_table("tile_data.json").unwrap();
    assert_eq!(tileset.width() % tilecam::DEFAULT_TILE_SIZE, 0);
    assert_eq!(tileset.height() % tilecam::DEFAULT_TILE_SIZE, 0);
    assert_eq!(table.len(), 4);
}
