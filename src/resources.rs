use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{debug, warn};

use crate::tiles::{TileDataError, TileTable};

// ── ResourceError ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ResourceError {
    /// No search directory contains a file with this name.
    NotFound(String),
    Io { name: String, source: std::io::Error },
    Decode { name: String, source: image::ImageError },
    TileData { name: String, source: TileDataError },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::NotFound(name) => write!(f, "resource '{name}' not found"),
            ResourceError::Io { name, source } => write!(f, "failed to read '{name}': {source}"),
            ResourceError::Decode { name, source } => write!(f, "failed to decode image '{name}': {source}"),
            ResourceError::TileData { name, source } => write!(f, "invalid tile data in '{name}': {source}"),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::NotFound(_) => None,
            ResourceError::Io { source, .. } => Some(source),
            ResourceError::Decode { source, .. } => Some(source),
            ResourceError::TileData { source, .. } => Some(source),
        }
    }
}

// ── ResourceLoader ────────────────────────────────────────────────────────────

/// Finds named asset files across a list of search directories.
///
/// Bare file names (`"tileset.png"`) are looked up in an index built by
/// walking every search directory recursively; the first directory in the
/// list wins when two files share a name.  Names containing a path separator
/// (`"maps/tileset.png"`) are joined onto each search directory in turn.
#[derive(Debug, Default)]
pub struct ResourceLoader {
    paths: Vec<PathBuf>,
    index: HashMap<String, PathBuf>,
}

impl ResourceLoader {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut loader = Self {
            paths: paths.into_iter().map(Into::into).collect(),
            index: HashMap::new(),
        };
        loader.reindex();
        loader
    }

    /// Append a search directory and rebuild the index.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self.reindex();
        self
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Rescan every search directory.  Call after files are added on disk.
    pub fn reindex(&mut self) {
        self.index.clear();
        for root in &self.paths {
            for entry in walkdir::WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                let Some(name) = entry.file_name().to_str() else { continue };
                if let Some(existing) = self.index.get(name) {
                    warn!(
                        resource = name,
                        kept = %existing.display(),
                        ignored = %entry.path().display(),
                        "duplicate resource name"
                    );
                    continue;
                }
                self.index.insert(name.to_string(), entry.into_path());
            }
        }
        debug!(files = self.index.len(), dirs = self.paths.len(), "resource index built");
    }

    /// Resolve `name` to a file on disk.
    pub fn locate(&self, name: &str) -> Result<PathBuf, ResourceError> {
        let is_bare = Path::new(name).components().count() == 1;
        if is_bare {
            if let Some(path) = self.index.get(name) {
                return Ok(path.clone());
            }
        } else {
            for root in &self.paths {
                let candidate = root.join(name);
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }
        Err(ResourceError::NotFound(name.to_string()))
    }

    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        let path = self.locate(name)?;
        std::fs::read(&path).map_err(|source| ResourceError::Io { name: name.to_string(), source })
    }

    pub fn load_text(&self, name: &str) -> Result<String, ResourceError> {
        let path = self.locate(name)?;
        std::fs::read_to_string(&path)
            .map_err(|source| ResourceError::Io { name: name.to_string(), source })
    }

    /// Load and decode an image into RGBA8.
    pub fn load_image(&self, name: &str) -> Result<RgbaImage, ResourceError> {
        let bytes = self.load_bytes(name)?;
        let img = image::load_from_memory(&bytes)
            .map_err(|source| ResourceError::Decode { name: name.to_string(), source })?;
        Ok(img.to_rgba8())
    }

    /// Load a JSON tile metadata file (see [`TileTable::from_json`]).
    pub fn load_tile_table(&self, name: &str) -> Result<TileTable, ResourceError> {
        let json = self.load_text(name)?;
        TileTable::from_json(&json)
            .map_err(|source| ResourceError::TileData { name: name.to_string(), source })
    }
}
