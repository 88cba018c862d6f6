use std::fmt;

use crate::tiles::TileId;

// ── MapError ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// `tiles.len()` does not equal `width * height`.
    SizeMismatch { width: u32, height: u32, len: usize },
    /// A row passed to [`TileMap::from_rows`] has a different length than the first.
    RaggedRows { row: usize, expected: usize, found: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::SizeMismatch { width, height, len } => {
                write!(f, "map of {width}x{height} needs {} tiles, got {len}", *width as usize * *height as usize)
            }
            MapError::RaggedRows { row, expected, found } => {
                write!(f, "map row {row} has {found} tiles, expected {expected}")
            }
        }
    }
}

impl std::error::Error for MapError {}

// ── TileMap ───────────────────────────────────────────────────────────────────

/// Row-major grid of tile IDs.
///
/// Logical row 0 is the **top** of the map.  The renderer flips rows when
/// drawing so the map appears upright on a bottom-left-origin surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    width: u32,
    height: u32,
    tiles: Vec<TileId>,
}

impl TileMap {
    pub fn new(width: u32, height: u32, tiles: Vec<TileId>) -> Result<Self, MapError> {
        if tiles.len() != width as usize * height as usize {
            return Err(MapError::SizeMismatch { width, height, len: tiles.len() });
        }
        Ok(Self { width, height, tiles })
    }

    /// Build a map from a list of rows, top row first.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MapError>
    where
        R: AsRef<[TileId]>,
    {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        let mut tiles = Vec::with_capacity(expected * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != expected {
                return Err(MapError::RaggedRows { row, expected, found: r.len() });
            }
            tiles.extend_from_slice(r);
        }
        Ok(Self { width: expected as u32, height: rows.len() as u32, tiles })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile at column `col` of logical row `row`, or `None` outside the map.
    pub fn get(&self, col: u32, row: u32) -> Option<TileId> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.tiles.get((row * self.width + col) as usize).copied()
    }

    /// Rows in logical order, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[TileId]> {
        // chunks_exact panics on 0; an empty-width map has no rows to yield.
        self.tiles.chunks_exact(self.width.max(1) as usize)
    }

    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }
}
