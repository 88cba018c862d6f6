// Opens a window and draws a small static map through the tile renderer.
//
//     tilecam [RESOURCE_DIR] [CONFIG_JSON]
//
// RESOURCE_DIR defaults to `resources/`; CONFIG_JSON is an optional
// `WindowConfig` document.  Set RUST_LOG=debug for renderer diagnostics.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use image::RgbaImage;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::WindowId;

use tilecam::renderer::gpu::GpuSurface;
use tilecam::window::window_attributes;
use tilecam::{ResourceLoader, TileId, TileMap, TileRenderer, TileTable, WindowConfig};

// ── Demo map ─────────────────────────────────────────────────────────────────
//
// 0 = grass, 1 = wall, 2 = water, 3 = floor.  Top row first.

const MAP_ROWS: [[TileId; 12]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 3, 3, 3, 3, 1, 0, 0, 0, 0, 0, 1],
    [1, 3, 3, 3, 3, 1, 0, 2, 2, 0, 0, 1],
    [1, 3, 3, 3, 3, 3, 0, 2, 2, 2, 0, 1],
    [1, 3, 3, 3, 3, 1, 0, 0, 2, 2, 0, 1],
    [1, 1, 3, 1, 1, 1, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: WindowConfig,
    tileset: RgbaImage,
    tiles: TileTable,
    map: TileMap,
    renderer: Option<TileRenderer<GpuSurface>>,
}

impl App {
    fn init_renderer(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = event_loop
            .create_window(window_attributes(&self.config))
            .context("creating window")?;
        let surface = pollster::block_on(GpuSurface::new(Arc::new(window)))
            .context("creating GPU surface")?;

        let mut renderer =
            TileRenderer::new(surface, &self.tileset, self.tiles.clone(), self.config.tile_size)
                .context("building tile renderer")?;

        let cx = self.map.width() as i32 / 2;
        let cy = self.map.height() as i32 / 2;
        renderer.center_camera(cx, cy);
        info!(
            camera_x = renderer.camera().position.x,
            camera_y = renderer.camera().position.y,
            "renderer ready"
        );

        self.renderer = Some(renderer);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }
        if let Err(e) = self.init_renderer(event_loop) {
            error!("failed to start renderer: {e:#}");
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.surface().window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(renderer) = self.renderer.as_mut() else { return };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => renderer.surface_mut().resize(size),

            WindowEvent::RedrawRequested => {
                if let Err(e) = renderer.draw_map(&self.map) {
                    error!("{e}");
                    event_loop.exit();
                    return;
                }
                match renderer.surface_mut().present() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let surface = renderer.surface_mut();
                        let size = surface.window.inner_size();
                        surface.resize(size);
                    }
                    Err(e) => warn!("render error: {e}"),
                }
            }

            _ => {}
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let resource_dir = args.next().unwrap_or_else(|| "resources".to_string());

    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            WindowConfig::from_json(&json).with_context(|| format!("parsing config {path}"))?
        }
        None => WindowConfig::default(),
    };
    config.validate().context("invalid window config")?;

    let resources = ResourceLoader::new([resource_dir]);
    let tileset = resources.load_image(&config.tileset).context("loading tileset")?;
    let tiles = resources.load_tile_table(&config.tile_data).context("loading tile data")?;
    let map = TileMap::from_rows(&MAP_ROWS).context("building demo map")?;

    info!(
        tileset = %config.tileset,
        tiles = tiles.len(),
        map_w = map.width(),
        map_h = map.height(),
        "assets loaded"
    );

    let event_loop = EventLoop::new().context("creating event loop")?;
    let mut app = App {
        config,
        tileset,
        tiles,
        map,
        renderer: None,
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
