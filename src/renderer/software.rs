// ── CPU blitting ──────────────────────────────────────────────────────────────
//
// Software surface backed by an `RgbaImage` framebuffer.  Blit positions use
// a bottom-left origin; the framebuffer is stored top-down like every image,
// so the destination row is flipped on the way in.

use std::path::Path;
use std::sync::Arc;

use image::{Rgba, RgbaImage};

use super::atlas::TileRegion;
use super::{Surface, SurfaceError};

/// CPU surface that composites tiles into an in-memory frame.
///
/// Texels are blended source-over onto the frame, matching the GPU
/// pipeline's alpha blending: opaque texels replace the pixel, fully
/// transparent ones leave it alone.  Blending works on the stored 8-bit
/// values, so partial alpha over sRGB data can differ slightly from the GPU.
pub struct ImageSurface {
    frame: RgbaImage,
}

impl ImageSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { frame: RgbaImage::new(width, height) }
    }

    /// Fill the whole frame with `color`.
    pub fn clear(&mut self, color: Rgba<u8>) {
        for px in self.frame.pixels_mut() {
            *px = color;
        }
    }

    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    pub fn into_frame(self) -> RgbaImage {
        self.frame
    }

    /// Pixel at `(x, y)` measured from the **bottom-left** corner.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x >= self.frame.width() || y >= self.frame.height() {
            return None;
        }
        Some(*self.frame.get_pixel(x, self.frame.height() - 1 - y))
    }

    /// Write the current frame as an image file; format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.frame.save(path)
    }
}

impl Surface for ImageSurface {
    type Texture = Arc<RgbaImage>;

    fn viewport_size(&self) -> (u32, u32) {
        self.frame.dimensions()
    }

    fn create_texture(&mut self, image: &RgbaImage) -> Result<Arc<RgbaImage>, SurfaceError> {
        Ok(Arc::new(image.clone()))
    }

    fn blit(&mut self, texture: &Arc<RgbaImage>, region: TileRegion, x: i64, y: i64) {
        let fw = self.frame.width() as i64;
        let fh = self.frame.height() as i64;

        for dy in 0..region.height {
            // Source row `dy` counts from the top of the region; the region's
            // bottom row lands on screen row `y`.
            let screen_y = y + (region.height - 1 - dy) as i64;
            if screen_y < 0 || screen_y >= fh {
                continue;
            }
            let dest_row = (fh - 1 - screen_y) as u32;
            let src_y = region.y + dy;
            if src_y >= texture.height() {
                continue;
            }

            for dx in 0..region.width {
                let screen_x = x + dx as i64;
                let src_x = region.x + dx;
                if screen_x < 0 || screen_x >= fw || src_x >= texture.width() {
                    continue;
                }
                let src = *texture.get_pixel(src_x, src_y);
                if src.0[3] == 0 {
                    continue;
                }
                let dst = self.frame.get_pixel_mut(screen_x as u32, dest_row);
                *dst = blend_over(src, *dst);
            }
        }
    }
}

/// `src` over `dst`: colour `s·a + d·(1-a)`, alpha `a + d_a·(1-a)`.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let a = src.0[3] as u32;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
    let [sr, sg, sb, _] = src.0;
    let [dr, dg, db, da] = dst.0;
    let alpha = a + (da as u32 * (255 - a) + 127) / 255;
    Rgba([mix(sr, dr), mix(sg, dg), mix(sb, db), alpha as u8])
}
