pub mod config;

pub use config::WindowConfig;

use winit::dpi::PhysicalSize;
use winit::window::{Window, WindowAttributes};

/// Attributes for a fixed-size, non-resizable window matching `config`.
///
/// The window is sized in physical pixels so the viewport stays an exact
/// multiple of the tile size regardless of DPI scaling.
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    Window::default_attributes()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false)
}
