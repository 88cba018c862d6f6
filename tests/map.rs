use tilecam::{MapError, TileId, TileMap};

#[test]
fn new_checks_tile_count() {
    let err = TileMap::new(3, 2, vec![0; 5]).unwrap_err();
    assert_eq!(err, MapError::SizeMismatch { width: 3, height: 2, len: 5 });
    assert!(TileMap::new(3, 2, vec![0; 6]).is_ok());
}

#[test]
fn get_is_row_major_from_the_top() {
    let rows: [[TileId; 3]; 2] = [[1, 2, 3], [4, 5, 6]];
    let map = TileMap::from_rows(&rows).unwrap();
    assert_eq!((map.width(), map.height()), (3, 2));
    assert_eq!(map.get(0, 0), Some(1));
    assert_eq!(map.get(2, 0), Some(3));
    assert_eq!(map.get(0, 1), Some(4));
    assert_eq!(map.get(3, 0), None);
    assert_eq!(map.get(0, 2), None);
}

#[test]
fn from_rows_rejects_ragged_rows() {
    let rows: Vec<Vec<TileId>> = vec![vec![1, 2], vec![3]];
    let err = TileMap::from_rows(&rows).unwrap_err();
    assert_eq!(err, MapError::RaggedRows { row: 1, expected: 2, found: 1 });
}

#[test]
fn rows_iterate_top_first() {
    let map = TileMap::new(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let rows: Vec<&[TileId]> = map.rows().collect();
    assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
}

#[test]
fn empty_map_has_no_rows() {
    let rows: Vec<Vec<TileId>> = Vec::new();
    let map = TileMap::from_rows(&rows).unwrap();
    assert_eq!((map.width(), map.height()), (0, 0));
    assert_eq!(map.rows().count(), 0);
}
