use serde::Deserialize;

use crate::renderer::ConfigError;

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window and asset configuration for a tile renderer.
///
/// Every field has a default, so a JSON config only needs the keys it
/// changes:
///
/// ```json
/// { "width": 800, "height": 608, "tileset": "dungeon.png" }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Viewport width in pixels.  Must be a multiple of `tile_size`.
    pub width: u32,
    /// Viewport height in pixels.  Must be a multiple of `tile_size`.
    pub height: u32,
    /// Edge length of one square tile in pixels.
    pub tile_size: u32,
    /// Resource name of the tileset image.
    pub tileset: String,
    /// Resource name of the JSON tile metadata.
    pub tile_data: String,
}

impl Default for WindowConfig {
    /// 640 × 480 window of 32px tiles (20 × 15 tiles).
    fn default() -> Self {
        Self {
            title:     "tilecam".to_string(),
            width:     640,
            height:    480,
            tile_size: crate::DEFAULT_TILE_SIZE,
            tileset:   "sample_tileset.png".to_string(),
            tile_data: "tile_data.json".to_string(),
        }
    }
}

impl WindowConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the tile size and viewport divisibility before opening a window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.width % self.tile_size != 0 || self.height % self.tile_size != 0 {
            return Err(ConfigError::ViewportNotTileAligned {
                width: self.width,
                height: self.height,
                tile_size: self.tile_size,
            });
        }
        Ok(())
    }

    /// Viewport size in whole tiles, `(0, 0)` when the tile size is zero.
    pub fn viewport_tiles(&self) -> (u32, u32) {
        if self.tile_size == 0 {
            return (0, 0);
        }
        (self.width / self.tile_size, self.height / self.tile_size)
    }
}
