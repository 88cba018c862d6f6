pub mod atlas;
pub mod gpu;
pub mod pipeline;
pub mod recording;
pub mod software;

use std::fmt;

use image::RgbaImage;
use tracing::debug;

use atlas::{TileGrid, TileRegion};

use crate::camera::Camera;
use crate::map::TileMap;
use crate::tiles::{TileAtlasEntry, TileId, TileTable};

// ── Errors ────────────────────────────────────────────────────────────────────

/// Failure reported by a [`Surface`] while creating a texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// The image exceeds the largest texture the backend can hold.
    TextureTooLarge { width: u32, height: u32, max: u32 },
    /// Backend-specific failure.
    Backend(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::TextureTooLarge { width, height, max } => {
                write!(f, "texture {width}x{height} exceeds the {max}px limit")
            }
            SurfaceError::Backend(msg) => write!(f, "surface error: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Invalid renderer configuration.  Construction never completes with one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroTileSize,
    ImageNotTileAligned { width: u32, height: u32, tile_size: u32 },
    ViewportNotTileAligned { width: u32, height: u32, tile_size: u32 },
    /// A tile table entry points outside the sliced tileset.
    EntryOutsideSheet { tile_id: TileId, entry: TileAtlasEntry, cols: u32, rows: u32 },
    /// The surface could not upload the tileset.
    Texture(SurfaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTileSize => write!(f, "tile size must be positive"),
            ConfigError::ImageNotTileAligned { width, height, tile_size } => write!(
                f,
                "tileset image {width}x{height} is not a multiple of the {tile_size}px tile size"
            ),
            ConfigError::ViewportNotTileAligned { width, height, tile_size } => write!(
                f,
                "viewport {width}x{height} is not a multiple of the {tile_size}px tile size"
            ),
            ConfigError::EntryOutsideSheet { tile_id, entry, cols, rows } => write!(
                f,
                "tile {tile_id} points at sheet cell ({}, {}) outside the {cols}x{rows} tileset",
                entry.sheet_x, entry.sheet_y
            ),
            ConfigError::Texture(e) => write!(f, "failed to upload tileset: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Texture(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SurfaceError> for ConfigError {
    fn from(e: SurfaceError) -> Self {
        ConfigError::Texture(e)
    }
}

/// A map cell referenced a tile ID missing from the [`TileTable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownTileError {
    pub tile_id: TileId,
}

impl fmt::Display for UnknownTileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile id {} has no atlas entry", self.tile_id)
    }
}

impl std::error::Error for UnknownTileError {}

// ── Surface ───────────────────────────────────────────────────────────────────

/// Graphics collaborator the renderer draws into.
///
/// Blit positions are in pixels with the origin at the **bottom-left** of the
/// viewport.  Texture regions use the image's top-left origin.
pub trait Surface {
    /// Backend handle for an uploaded image.
    type Texture;

    /// Viewport size in pixels.
    fn viewport_size(&self) -> (u32, u32);

    /// Upload a decoded image and return a handle usable with [`Surface::blit`].
    fn create_texture(&mut self, image: &RgbaImage) -> Result<Self::Texture, SurfaceError>;

    /// Copy `region` of `texture` so its bottom-left corner lands at pixel `(x, y)`.
    ///
    /// Pixel positions are `i64` so any `i32` tile position times any tile
    /// size is representable.
    fn blit(&mut self, texture: &Self::Texture, region: TileRegion, x: i64, y: i64);
}

// ── TileRenderer ──────────────────────────────────────────────────────────────

/// Draws tile maps through a camera onto a [`Surface`].
///
/// Owns the surface, the tile table and the uploaded tileset; the map being
/// drawn is borrowed per call.
pub struct TileRenderer<S: Surface> {
    surface: S,
    texture: S::Texture,
    grid: TileGrid,
    tiles: TileTable,
    camera: Camera,
}

impl<S: Surface> TileRenderer<S> {
    /// Slice `tileset` into `tile_size` cells, upload it to `surface` and
    /// validate the tile table against the sliced grid.
    ///
    /// Fails when the tile size is zero, when the tileset or the surface
    /// viewport is not an exact multiple of the tile size, or when a table
    /// entry points outside the tileset.
    pub fn new(
        mut surface: S,
        tileset: &RgbaImage,
        tiles: TileTable,
        tile_size: u32,
    ) -> Result<Self, ConfigError> {
        let grid = TileGrid::new(tileset.width(), tileset.height(), tile_size)?;

        let (vw, vh) = surface.viewport_size();
        if vw % tile_size != 0 || vh % tile_size != 0 {
            return Err(ConfigError::ViewportNotTileAligned {
                width: vw,
                height: vh,
                tile_size,
            });
        }

        // Smallest ID first so the reported entry does not depend on hash order.
        let mut entries: Vec<_> = tiles.iter().collect();
        entries.sort_by_key(|(id, _)| *id);
        if let Some((tile_id, entry)) = entries.into_iter().find(|(_, e)| !grid.contains(*e)) {
            return Err(ConfigError::EntryOutsideSheet {
                tile_id,
                entry,
                cols: grid.cols,
                rows: grid.rows,
            });
        }

        let texture = surface.create_texture(tileset)?;
        let camera = Camera::new(vw / tile_size, vh / tile_size);

        debug!(
            cols = grid.cols,
            rows = grid.rows,
            tile_size,
            viewport_w = vw / tile_size,
            viewport_h = vh / tile_size,
            tiles = tiles.len(),
            "tile renderer initialised"
        );

        Ok(Self { surface, texture, grid, tiles, camera })
    }

    /// Center the viewport on world tile `(x, y)`.
    pub fn center_camera(&mut self, x: i32, y: i32) {
        self.camera.center_on(x, y);
    }

    /// World tile position → screen tile position.  Pure; wraps on overflow
    /// (see [`Camera`]).
    pub fn world_to_screen(&self, x: i32, y: i32) -> (i32, i32) {
        self.camera.world_to_screen(x, y)
    }

    /// Blit `tile` at screen tile position `(x, y)`.  Issues no blit when
    /// the tile is unknown.
    pub fn draw_tile(&mut self, x: i32, y: i32, tile: TileId) -> Result<(), UnknownTileError> {
        let region = self
            .tiles
            .get(tile)
            .and_then(|entry| self.grid.entry_region(entry))
            .ok_or(UnknownTileError { tile_id: tile })?;

        let t = i64::from(self.grid.tile_size);
        self.surface.blit(&self.texture, region, i64::from(x) * t, i64::from(y) * t);
        Ok(())
    }

    /// Blit `tile` at world tile position `(x, y)`, shifted by the camera.
    pub fn draw_tile_at_world(&mut self, x: i32, y: i32, tile: TileId) -> Result<(), UnknownTileError> {
        let (sx, sy) = self.world_to_screen(x, y);
        self.draw_tile(sx, sy, tile)
    }

    /// Draw every cell of `map`.
    ///
    /// Rows are read top to bottom; logical row `r` lands on world row
    /// `height - 1 - r` so the map's top ends up at the highest screen Y.
    /// Nothing is culled.  The first unknown tile aborts the pass.
    pub fn draw_map(&mut self, map: &TileMap) -> Result<(), UnknownTileError> {
        let height = map.height() as i32;
        for (row_idx, row) in map.rows().enumerate() {
            let y = height - 1 - row_idx as i32;
            for (col_idx, &tile) in row.iter().enumerate() {
                self.draw_tile_at_world(col_idx as i32, y, tile)?;
            }
        }
        Ok(())
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn tile_size(&self) -> u32 {
        self.grid.tile_size
    }

    /// Viewport size in whole tiles.
    pub fn viewport_tiles(&self) -> (u32, u32) {
        let v = self.camera.viewport_tiles();
        (v.x, v.y)
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn tiles(&self) -> &TileTable {
        &self.tiles
    }

    pub fn texture(&self) -> &S::Texture {
        &self.texture
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
