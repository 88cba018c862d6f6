use glam::{IVec2, UVec2};

/// 2D tile camera: an integer world-space offset subtracted from every tile
/// position before it is drawn.
///
/// ```text
/// screen = world - position
/// ```
///
/// The camera also remembers the viewport size in whole tiles so that
/// [`Camera::center_on`] can place a world position in the middle of the view.
///
/// Both subtractions wrap on `i32` overflow.  Wrapping keeps the camera an
/// exact translation, so centering on `i32::MIN` still puts that tile at the
/// viewport center; tiles more than `i32::MAX` apart alias.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Camera {
    /// World-space tile mapped to the viewport's bottom-left corner.
    pub position: IVec2,
    viewport_tiles: UVec2,
}

impl Camera {
    pub fn new(viewport_width_tiles: u32, viewport_height_tiles: u32) -> Self {
        Self {
            position: IVec2::ZERO,
            viewport_tiles: UVec2::new(viewport_width_tiles, viewport_height_tiles),
        }
    }

    /// Viewport size in whole tiles.
    pub fn viewport_tiles(&self) -> UVec2 {
        self.viewport_tiles
    }

    /// Offset from the camera position to the viewport center, in tiles.
    /// Integer division, so odd viewports round toward the bottom-left.
    pub fn center_offset(&self) -> IVec2 {
        (self.viewport_tiles / 2).as_ivec2()
    }

    /// Move the camera so `(x, y)` sits at the viewport center.
    pub fn center_on(&mut self, x: i32, y: i32) {
        self.position = IVec2::new(x, y).wrapping_sub(self.center_offset());
    }

    /// Translate a world tile position into screen tile coordinates.
    pub fn world_to_screen(&self, x: i32, y: i32) -> (i32, i32) {
        let screen = IVec2::new(x, y).wrapping_sub(self.position);
        (screen.x, screen.y)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_camera_is_at_origin() {
        let cam = Camera::new(20, 15);
        assert_eq!(cam.position, IVec2::ZERO);
        assert_eq!(cam.world_to_screen(4, -2), (4, -2));
    }

    #[test]
    fn center_offset_truncates_odd_viewport() {
        // 20x15 tiles → (10, 7).
        let cam = Camera::new(20, 15);
        assert_eq!(cam.center_offset(), IVec2::new(10, 7));
    }

    #[test]
    fn center_on_negative_world_position() {
        let mut cam = Camera::new(20, 15);
        cam.center_on(-3, -9);
        assert_eq!(cam.position, IVec2::new(-13, -16));
        assert_eq!(cam.world_to_screen(-3, -9), (10, 7));
    }

    #[test]
    fn center_on_extremes_wraps() {
        let mut cam = Camera::new(20, 15);
        cam.center_on(i32::MIN, i32::MAX);
        assert_eq!(cam.position, IVec2::new(i32::MAX - 9, i32::MAX - 7));
        assert_eq!(cam.world_to_screen(i32::MIN, i32::MAX), (10, 7));
        assert_eq!(cam.world_to_screen(i32::MIN + 1, i32::MAX - 1), (11, 6));
    }
}
