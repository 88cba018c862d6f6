pub mod camera;
pub mod map;
pub mod renderer;
pub mod resources;
pub mod tiles;
pub mod window;

pub use camera::Camera;
pub use map::{MapError, TileMap};
pub use renderer::{ConfigError, Surface, SurfaceError, TileRenderer, UnknownTileError};
pub use resources::{ResourceError, ResourceLoader};
pub use tiles::{TileAtlasEntry, TileDataError, TileId, TileTable};
pub use window::WindowConfig;

/// Edge length in pixels of the tiles in the bundled sample tileset.
pub const DEFAULT_TILE_SIZE: u32 = 32;
