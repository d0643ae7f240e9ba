//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::room::{PropertyId, Room, RoomId};
use crate::wall::{Wall, WallId};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    rooms: RwLock<HashMap<RoomId, Room>>,
    walls: RwLock<HashMap<WallId, Wall>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_err<T>(e: std::sync::PoisonError<T>) -> StorageError {
    StorageError::Other(format!("lock error: {}", e))
}

impl Storage for MemoryStorage {
    fn load_rooms(&self, property: Option<PropertyId>) -> StorageResult<Vec<Room>> {
        let rooms = self.rooms.read().map_err(lock_err)?;
        Ok(rooms
            .values()
            .filter(|r| property.is_none() || r.property == property)
            .cloned()
            .collect())
    }

    fn load_walls(&self, property: Option<PropertyId>) -> StorageResult<Vec<Wall>> {
        let walls = self.walls.read().map_err(lock_err)?;
        Ok(walls
            .values()
            .filter(|w| property.is_none() || w.property == property)
            .cloned()
            .collect())
    }

    fn save_room(&self, room: &Room) -> StorageResult<()> {
        let mut rooms = self.rooms.write().map_err(lock_err)?;
        rooms.insert(room.id, room.clone());
        Ok(())
    }

    fn save_wall(&self, wall: &Wall) -> StorageResult<()> {
        let mut walls = self.walls.write().map_err(lock_err)?;
        walls.insert(wall.id, wall.clone());
        Ok(())
    }

    fn delete_room(&self, id: RoomId) -> StorageResult<()> {
        let mut rooms = self.rooms.write().map_err(lock_err)?;
        rooms.remove(&id);
        Ok(())
    }

    fn delete_wall(&self, id: WallId) -> StorageResult<()> {
        let mut walls = self.walls.write().map_err(lock_err)?;
        walls.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};
    use uuid::Uuid;

    #[test]
    fn test_save_and_load_room() {
        let storage = MemoryStorage::new();
        let room = Room::new("Kitchen", Point::new(10.0, 20.0), Size::new(120.0, 90.0), None);

        storage.save_room(&room).unwrap();
        let loaded = storage.load_rooms(None).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, room.id);
        assert_eq!(loaded[0].name, "Kitchen");
    }

    #[test]
    fn test_property_filter() {
        let storage = MemoryStorage::new();
        let property = Uuid::new_v4();
        let mine = Room::new("A", Point::ZERO, Size::new(120.0, 90.0), Some(property));
        let other = Room::new("B", Point::ZERO, Size::new(120.0, 90.0), Some(Uuid::new_v4()));

        storage.save_room(&mine).unwrap();
        storage.save_room(&other).unwrap();

        let loaded = storage.load_rooms(Some(property)).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, mine.id);

        // No filter loads everything.
        assert_eq!(storage.load_rooms(None).unwrap().len(), 2);
    }

    #[test]
    fn test_save_is_upsert() {
        let storage = MemoryStorage::new();
        let mut room = Room::new("A", Point::ZERO, Size::new(120.0, 90.0), None);

        storage.save_room(&room).unwrap();
        room.x = 48.0;
        storage.save_room(&room).unwrap();

        let loaded = storage.load_rooms(None).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].x, 48.0);
    }

    #[test]
    fn test_delete_room() {
        let storage = MemoryStorage::new();
        let room = Room::new("A", Point::ZERO, Size::new(120.0, 90.0), None);

        storage.save_room(&room).unwrap();
        storage.delete_room(room.id).unwrap();
        assert!(storage.load_rooms(None).unwrap().is_empty());

        // Deleting again is not an error.
        storage.delete_room(room.id).unwrap();
    }

    #[test]
    fn test_wall_round_trip() {
        let storage = MemoryStorage::new();
        let points = vec![
            Point::new(16.0, 16.0),
            Point::new(208.0, 16.0),
            Point::new(208.0, 200.0),
        ];
        let wall = Wall::new(points.clone(), None);

        storage.save_wall(&wall).unwrap();
        let loaded = storage.load_walls(None).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].points, points);
        assert_eq!(loaded[0].color_hex, wall.color_hex);
    }
}
