use super::ConfigError;
use crate::tiles::TileAtlasEntry;

// ── TileRegion ────────────────────────────────────────────────────────────────

/// Pixel rectangle of one tile inside the tileset image.
///
/// Coordinates use the image's own top-left origin, which is what decoders
/// and texture uploads work in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TileRegion {
    /// Returns `(uv_min, uv_max)` for this region inside an image of
    /// `image_w × image_h` pixels.
    pub fn uv(&self, image_w: u32, image_h: u32) -> ([f32; 2], [f32; 2]) {
        let w = image_w as f32;
        let h = image_h as f32;
        let u_min = self.x as f32 / w;
        let v_min = self.y as f32 / h;
        let u_max = (self.x + self.width) as f32 / w;
        let v_max = (self.y + self.height) as f32 / h;
        ([u_min, v_min], [u_max, v_max])
    }
}

// ── TileGrid ──────────────────────────────────────────────────────────────────

/// A tileset image sliced into square cells of `tile_size` pixels.
///
/// Cells are addressed by `(row, col)` with **row 0 at the bottom edge** of
/// the image, matching a bottom-left-origin screen:
///
/// ```text
///   image y=0   ┌────┬────┐  row = rows-1
///               ├────┼────┤
///               └────┴────┘  row = 0
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    pub cols: u32,
    pub rows: u32,
    pub tile_size: u32,
}

impl TileGrid {
    /// Slice an `image_w × image_h` image.  Both dimensions must be exact
    /// multiples of `tile_size`.
    pub fn new(image_w: u32, image_h: u32, tile_size: u32) -> Result<Self, ConfigError> {
        if tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if image_w % tile_size != 0 || image_h % tile_size != 0 {
            return Err(ConfigError::ImageNotTileAligned {
                width: image_w,
                height: image_h,
                tile_size,
            });
        }
        Ok(Self {
            cols: image_w / tile_size,
            rows: image_h / tile_size,
            tile_size,
        })
    }

    /// Number of addressable cells (`cols × rows`).
    pub fn cell_count(&self) -> u32 {
        self.cols * self.rows
    }

    pub fn image_size(&self) -> (u32, u32) {
        (self.cols * self.tile_size, self.rows * self.tile_size)
    }

    /// Pixel region of cell `(row, col)`, or `None` outside the grid.
    pub fn region(&self, row: u32, col: u32) -> Option<TileRegion> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let t = self.tile_size;
        Some(TileRegion {
            x: col * t,
            y: (self.rows - 1 - row) * t,
            width: t,
            height: t,
        })
    }

    /// Region addressed by an atlas entry (`sheet_y` is the row, `sheet_x` the column).
    pub fn entry_region(&self, entry: TileAtlasEntry) -> Option<TileRegion> {
        self.region(entry.sheet_y, entry.sheet_x)
    }

    pub fn contains(&self, entry: TileAtlasEntry) -> bool {
        entry.sheet_y < self.rows && entry.sheet_x < self.cols
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
