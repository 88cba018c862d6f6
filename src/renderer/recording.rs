use image::RgbaImage;

use super::atlas::TileRegion;
use super::{Surface, SurfaceError};

/// Handle returned by [`RecordingSurface::create_texture`]: the upload order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// One recorded [`Surface::blit`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Blit {
    pub texture: TextureHandle,
    pub region: TileRegion,
    pub x: i64,
    pub y: i64,
}

/// Headless surface that keeps every blit in call order instead of drawing.
///
/// Useful for tests and for tooling that wants the draw list without a window.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    /// `(width, height)` of every uploaded texture, indexed by handle.
    pub textures: Vec<(u32, u32)>,
    pub blits: Vec<Blit>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, textures: Vec::new(), blits: Vec::new() }
    }

    /// Drop recorded blits, keeping uploaded textures.
    pub fn clear(&mut self) {
        self.blits.clear();
    }
}

impl Surface for RecordingSurface {
    type Texture = TextureHandle;

    fn viewport_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn create_texture(&mut self, image: &RgbaImage) -> Result<TextureHandle, SurfaceError> {
        let handle = TextureHandle(self.textures.len() as u32);
        self.textures.push(image.dimensions());
        Ok(handle)
    }

    fn blit(&mut self, texture: &TextureHandle, region: TileRegion, x: i64, y: i64) {
        self.blits.push(Blit { texture: *texture, region, x, y });
    }
}
