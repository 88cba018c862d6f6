use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

// ── TileId / TileAtlasEntry ───────────────────────────────────────────────────

/// Integer identifier stored in every map cell.
pub type TileId = u32;

/// Position of a tile's graphic inside the tileset, in whole tiles.
///
/// `sheet_y` counts rows from the **bottom** edge of the tileset image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct TileAtlasEntry {
    /// Atlas column.
    pub sheet_x: u32,
    /// Atlas row (0 = bottom strip of the image).
    pub sheet_y: u32,
}

impl TileAtlasEntry {
    pub const fn new(sheet_x: u32, sheet_y: u32) -> Self {
        Self { sheet_x, sheet_y }
    }
}

// ── TileDataError ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum TileDataError {
    /// The document is not valid JSON or an entry is missing a field.
    Parse(serde_json::Error),
    /// A key could not be read as a non-negative integer tile ID.
    InvalidKey(String),
    /// Two keys (e.g. `"7"` and `"007"`) resolve to the same tile ID.
    DuplicateId(TileId),
}

impl fmt::Display for TileDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileDataError::Parse(e) => write!(f, "malformed tile data: {e}"),
            TileDataError::InvalidKey(key) => write!(f, "tile id '{key}' is not a non-negative integer"),
            TileDataError::DuplicateId(id) => write!(f, "tile id {id} is defined more than once"),
        }
    }
}

impl std::error::Error for TileDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TileDataError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TileDataError {
    fn from(e: serde_json::Error) -> Self {
        TileDataError::Parse(e)
    }
}

// ── TileTable ─────────────────────────────────────────────────────────────────

/// Immutable lookup from tile ID to atlas cell.
///
/// Built once at startup, either from a static table or from the JSON tile
/// metadata document, and handed to the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileTable {
    entries: HashMap<TileId, TileAtlasEntry>,
}

impl TileTable {
    /// Build a table from `(id, entry)` pairs.  A repeated ID keeps the first
    /// entry and is reported as [`TileDataError::DuplicateId`].
    pub fn from_entries<I>(entries: I) -> Result<Self, TileDataError>
    where
        I: IntoIterator<Item = (TileId, TileAtlasEntry)>,
    {
        let mut map = HashMap::new();
        for (id, entry) in entries {
            if map.insert(id, entry).is_some() {
                return Err(TileDataError::DuplicateId(id));
            }
        }
        Ok(Self { entries: map })
    }

    /// Deserialise a table from the tile metadata JSON format, where each key
    /// is a decimal tile ID:
    ///
    /// ```json
    /// { "0": { "sheet_x": 0, "sheet_y": 0 }, "1": { "sheet_x": 3, "sheet_y": 1 } }
    /// ```
    ///
    /// Negative coordinates fail to deserialise.
    pub fn from_json(json: &str) -> Result<Self, TileDataError> {
        let raw: HashMap<String, TileAtlasEntry> = serde_json::from_str(json)?;

        let mut parsed = Vec::with_capacity(raw.len());
        for (key, entry) in raw {
            let id = key
                .trim()
                .parse::<TileId>()
                .map_err(|_| TileDataError::InvalidKey(key.clone()))?;
            parsed.push((id, entry));
        }
        // Deterministic duplicate reporting regardless of hash order.
        parsed.sort_by_key(|(id, _)| *id);

        Self::from_entries(parsed)
    }

    pub fn get(&self, id: TileId) -> Option<TileAtlasEntry> {
        self.entries.get(&id).copied()
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileId, TileAtlasEntry)> + '_ {
        self.entries.iter().map(|(&id, &entry)| (id, entry))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_reads_numeric_keys() {
        let table = TileTable::from_json(
            r#"{ "0": { "sheet_x": 0, "sheet_y": 0 }, "12": { "sheet_x": 3, "sheet_y": 1 } }"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(12), Some(TileAtlasEntry::new(3, 1)));
    }

    #[test]
    fn from_json_rejects_non_numeric_key() {
        let err = TileTable::from_json(r#"{ "grass": { "sheet_x": 0, "sheet_y": 0 } }"#).unwrap_err();
        assert!(matches!(err, TileDataError::InvalidKey(ref k) if k == "grass"));
    }

    #[test]
    fn from_json_rejects_negative_coordinates() {
        let err = TileTable::from_json(r#"{ "1": { "sheet_x": -1, "sheet_y": 0 } }"#).unwrap_err();
        assert!(matches!(err, TileDataError::Parse(_)));
    }

    #[test]
    fn from_json_rejects_keys_resolving_to_same_id() {
        let err = TileTable::from_json(
            r#"{ "7": { "sheet_x": 0, "sheet_y": 0 }, "007": { "sheet_x": 1, "sheet_y": 0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, TileDataError::DuplicateId(7)));
    }

    #[test]
    fn from_entries_rejects_duplicate_id() {
        let err = TileTable::from_entries([
            (1, TileAtlasEntry::new(0, 0)),
            (1, TileAtlasEntry::new(1, 1)),
        ])
        .unwrap_err();
        assert!(matches!(err, TileDataError::DuplicateId(1)));
    }

    #[test]
    fn missing_id_is_none() {
        let table = TileTable::from_entries([(1, TileAtlasEntry::new(0, 0))]).unwrap();
        assert!(table.get(2).is_none());
        assert!(!table.contains(2));
    }
}
