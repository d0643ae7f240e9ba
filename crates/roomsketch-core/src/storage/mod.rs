//! Storage abstraction for floorplan persistence.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::room::{PropertyId, Room, RoomId};
use crate::wall::{Wall, WallId};
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for floorplan persistence backends.
///
/// The session treats these calls as commit points: writes happen right after
/// an interactive commit, synchronously, and a failure is logged and surfaced
/// but never retried. The in-memory model stays authoritative for the
/// running session.
///
/// A `property` of `None` addresses the unscoped floorplan (all rooms/walls
/// not tied to a specific property).
pub trait Storage: Send + Sync {
    /// Load all rooms for a property.
    fn load_rooms(&self, property: Option<PropertyId>) -> StorageResult<Vec<Room>>;

    /// Load all walls for a property.
    fn load_walls(&self, property: Option<PropertyId>) -> StorageResult<Vec<Wall>>;

    /// Insert or update a room.
    fn save_room(&self, room: &Room) -> StorageResult<()>;

    /// Insert or update a wall.
    fn save_wall(&self, wall: &Wall) -> StorageResult<()>;

    /// Delete a room. Deleting an unknown id is not an error.
    fn delete_room(&self, id: RoomId) -> StorageResult<()>;

    /// Delete a wall. Deleting an unknown id is not an error.
    fn delete_wall(&self, id: WallId) -> StorageResult<()>;
}
