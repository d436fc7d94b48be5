//! Inventory rows and their JSON store.

use crate::defaults;
use crate::error::{ReleveError, Result};
use crate::interpret::Interpretation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One exported row: where, and which room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub location: String,
    pub room: String,
}

impl InventoryRecord {
    /// Build a record. Line breaks and tabs in either field become spaces.
    pub fn new(location: &str, room: &str) -> Self {
        Self {
            location: sanitize_field(location),
            room: sanitize_field(room),
        }
    }
}

/// Single-line form of a field value: no CR, LF or tab, single spaces, trimmed.
pub fn sanitize_field(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ordered list of inventory rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    rows: Vec<InventoryRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[InventoryRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append one row per room. Returns how many rows were added.
    pub fn append(&mut self, interpretation: &Interpretation) -> usize {
        let records = interpretation.records();
        let added = records.len();
        self.rows.extend(records);
        added
    }

    pub fn push(&mut self, record: InventoryRecord) {
        self.rows.push(InventoryRecord::new(&record.location, &record.room));
    }

    pub fn remove(&mut self, index: usize) -> Result<InventoryRecord> {
        self.check_index(index)?;
        Ok(self.rows.remove(index))
    }

    /// Edit a row in place. `None` leaves the field unchanged.
    pub fn update(&mut self, index: usize, location: Option<&str>, room: Option<&str>) -> Result<()> {
        self.check_index(index)?;
        let row = &mut self.rows[index];
        if let Some(location) = location {
            row.location = sanitize_field(location);
        }
        if let Some(room) = room {
            row.room = sanitize_field(room);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Load a JSON store. A missing file is an empty inventory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no inventory store yet");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let rows: Vec<InventoryRecord> = serde_json::from_str(&contents)?;
        Ok(Self {
            rows: rows
                .iter()
                .map(|r| InventoryRecord::new(&r.location, &r.room))
                .collect(),
        })
    }

    /// Write the store as a JSON array, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.rows)?;
        fs::write(path, json)?;
        tracing::debug!(path = %path.display(), rows = self.rows.len(), "saved inventory");
        Ok(())
    }

    /// `~/.local/share/releve/inventory.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(defaults::APP_DIR).join(defaults::STORE_FILENAME))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(ReleveError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn interpretation(location: &str, rooms: &[&str]) -> Interpretation {
        Interpretation {
            location: location.to_string(),
            rooms: rooms.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_record_sanitizes_separators() {
        let record = InventoryRecord::new("Building A\r\n- Unit 2", "Bed\troom  1 ");
        assert_eq!(record.location, "Building A - Unit 2");
        assert_eq!(record.room, "Bed room 1");
    }

    #[test]
    fn test_append_adds_one_row_per_room() {
        let mut inventory = Inventory::new();
        let added = inventory.append(&interpretation("Unit 2", &["Kitchen", "Bedroom 1"]));
        assert_eq!(added, 2);
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.rows()[1], InventoryRecord::new("Unit 2", "Bedroom 1"));
    }

    #[test]
    fn test_append_without_rooms_adds_nothing() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.append(&interpretation("Unit 2", &[])), 0);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_append_allows_empty_location() {
        let mut inventory = Inventory::new();
        inventory.append(&interpretation("", &["Kitchen"]));
        assert_eq!(inventory.rows()[0].location, "");
    }

    #[test]
    fn test_remove_and_update() {
        let mut inventory = Inventory::new();
        inventory.append(&interpretation("RDC", &["Cuisine", "Séjour"]));

        inventory.update(1, None, Some("Salon\n")).unwrap();
        assert_eq!(inventory.rows()[1].room, "Salon");
        assert_eq!(inventory.rows()[1].location, "RDC");

        let removed = inventory.remove(0).unwrap();
        assert_eq!(removed.room, "Cuisine");
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut inventory = Inventory::new();
        let err = inventory.remove(3).unwrap_err();
        assert!(matches!(err, ReleveError::RowOutOfRange { index: 3, len: 0 }));
        assert!(inventory.update(0, Some("x"), None).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("inventory.json");

        let mut inventory = Inventory::new();
        inventory.append(&interpretation("Bâtiment A - RDC", &["Cuisine", "WC 1"]));
        inventory.save(&path).unwrap();

        let loaded = Inventory::load(&path).unwrap();
        assert_eq!(loaded, inventory);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.trim_start().starts_with('['));
        assert!(raw.contains("\"room\": \"WC 1\""));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let loaded = Inventory::load(&dir.path().join("missing.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Inventory::load(&path), Err(ReleveError::Json(_))));
    }

    #[test]
    fn test_clear() {
        let mut inventory = Inventory::new();
        inventory.push(InventoryRecord::new("", "Garage"));
        inventory.clear();
        assert!(inventory.is_empty());
    }
}
