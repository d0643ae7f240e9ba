//! File-based storage implementation.
//!
//! Each property's floorplan (rooms + walls) lives in one JSON document under
//! a base directory. Loading a property with no document yet yields empty
//! sets (a fresh floorplan), not an error.

use super::{Storage, StorageError, StorageResult};
use crate::room::{PropertyId, Room, RoomId};
use crate::wall::{Wall, WallId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// On-disk document: everything belonging to one property's floorplan.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FloorplanDocument {
    rooms: Vec<Room>,
    walls: Vec<Wall>,
}

/// JSON-file storage under a base directory.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a file storage with the given base directory, creating it if
    /// needed.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the platform's local data directory
    /// (`roomsketch/floorplans` under it).
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("could not determine home directory".to_string()))?;
        Self::new(base.join("roomsketch").join("floorplans"))
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn document_path(&self, property: Option<PropertyId>) -> PathBuf {
        let name = match property {
            Some(id) => id.to_string(),
            None => "default".to_string(),
        };
        self.base_path.join(format!("{}.json", name))
    }

    fn read_document(&self, path: &PathBuf) -> StorageResult<FloorplanDocument> {
        if !path.exists() {
            return Ok(FloorplanDocument::default());
        }
        let json = fs::read_to_string(path)
            .map_err(|e| StorageError::Io(format!("failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&json).map_err(|e| {
            StorageError::Serialization(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    fn write_document(&self, path: &PathBuf, document: &FloorplanDocument) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| StorageError::Io(format!("failed to write {}: {}", path.display(), e)))
    }

    /// All document paths currently on disk.
    fn document_paths(&self) -> StorageResult<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| StorageError::Io(format!("failed to read directory: {}", e)))?;
        let mut paths = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                paths.push(path);
            }
        }
        Ok(paths)
    }
}

impl Storage for FileStorage {
    fn load_rooms(&self, property: Option<PropertyId>) -> StorageResult<Vec<Room>> {
        match property {
            Some(_) => Ok(self.read_document(&self.document_path(property))?.rooms),
            None => {
                // Unscoped: aggregate every document.
                let mut rooms = Vec::new();
                for path in self.document_paths()? {
                    rooms.extend(self.read_document(&path)?.rooms);
                }
                Ok(rooms)
            }
        }
    }

    fn load_walls(&self, property: Option<PropertyId>) -> StorageResult<Vec<Wall>> {
        match property {
            Some(_) => Ok(self.read_document(&self.document_path(property))?.walls),
            None => {
                let mut walls = Vec::new();
                for path in self.document_paths()? {
                    walls.extend(self.read_document(&path)?.walls);
                }
                Ok(walls)
            }
        }
    }

    fn save_room(&self, room: &Room) -> StorageResult<()> {
        let path = self.document_path(room.property);
        let mut document = self.read_document(&path)?;
        match document.rooms.iter_mut().find(|r| r.id == room.id) {
            Some(existing) => *existing = room.clone(),
            None => document.rooms.push(room.clone()),
        }
        self.write_document(&path, &document)
    }

    fn save_wall(&self, wall: &Wall) -> StorageResult<()> {
        let path = self.document_path(wall.property);
        let mut document = self.read_document(&path)?;
        match document.walls.iter_mut().find(|w| w.id == wall.id) {
            Some(existing) => *existing = wall.clone(),
            None => document.walls.push(wall.clone()),
        }
        self.write_document(&path, &document)
    }

    fn delete_room(&self, id: RoomId) -> StorageResult<()> {
        // The id alone does not identify the document, so scan all of them.
        for path in self.document_paths()? {
            let mut document = self.read_document(&path)?;
            let before = document.rooms.len();
            document.rooms.retain(|r| r.id != id);
            if document.rooms.len() != before {
                return self.write_document(&path, &document);
            }
        }
        Ok(())
    }

    fn delete_wall(&self, id: WallId) -> StorageResult<()> {
        for path in self.document_paths()? {
            let mut document = self.read_document(&path)?;
            let before = document.walls.len();
            document.walls.retain(|w| w.id != id);
            if document.walls.len() != before {
                return self.write_document(&path, &document);
            }
        }
        Ok(())
    }
}
