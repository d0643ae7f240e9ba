//! Canvas session: selection, draw-mode dispatch and persistence
//! orchestration.
//!
//! The session is the boundary between the pure geometry core and the
//! outside world: it owns the latest canvas size, the grid/snap toggles, the
//! single-room selection, and the storage collaborator. Persistence writes
//! happen synchronously at each commit point; a failed write is logged and
//! the in-memory model stays authoritative for the rest of the session.

use crate::draw::{TapOutcome, WallDraw};
use crate::geometry::GRID_SIZE;
use crate::layout::RoomLayout;
use crate::room::{PropertyId, Room, RoomId};
use crate::storage::{Storage, StorageResult};
use crate::wall::{Wall, WallId};
use kurbo::{Point, Rect, Size, Vec2};
use log::{debug, warn};

/// An interactive floorplan editing session for one property.
pub struct FloorplanSession {
    storage: Box<dyn Storage>,
    property: Option<PropertyId>,
    layout: RoomLayout,
    walls: Vec<Wall>,
    draw: WallDraw,
    canvas_size: Size,
    pub show_grid: bool,
    pub snap_to_grid: bool,
    selected: Option<RoomId>,
}

impl FloorplanSession {
    /// Create a session backed by the given storage. Call [`load`] before
    /// use to pull the persisted floorplan into memory.
    ///
    /// [`load`]: Self::load
    pub fn new(storage: Box<dyn Storage>, property: Option<PropertyId>) -> Self {
        Self {
            storage,
            property,
            layout: RoomLayout::new(),
            walls: Vec::new(),
            draw: WallDraw::new(),
            canvas_size: Size::ZERO,
            show_grid: true,
            snap_to_grid: true,
            selected: None,
        }
    }

    /// Load rooms and walls for the property from storage.
    pub fn load(&mut self) -> StorageResult<()> {
        for room in self.storage.load_rooms(self.property)? {
            self.layout.insert(room);
        }
        self.walls = self.storage.load_walls(self.property)?;
        Ok(())
    }

    /// Update the canvas bounds (e.g. on viewport resize). All subsequent
    /// clamping and default placement uses the new size.
    pub fn set_canvas_size(&mut self, size: Size) {
        self.canvas_size = size;
    }

    pub fn canvas_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.canvas_size)
    }

    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn selected_id(&self) -> Option<RoomId> {
        self.selected
    }

    pub fn selected_room(&self) -> Option<&Room> {
        self.selected.and_then(|id| self.layout.get(id))
    }

    /// Select a room. Unknown ids clear the selection instead.
    pub fn select_room(&mut self, id: RoomId) {
        self.selected = self.layout.get(id).map(|room| room.id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // --- draw mode ---

    pub fn is_drawing(&self) -> bool {
        self.draw.is_drawing()
    }

    /// The in-progress wall vertices, for preview rendering.
    pub fn draw_points(&self) -> &[Point] {
        self.draw.points()
    }

    /// Toggle wall draw mode; leaving it discards any partial polygon.
    pub fn toggle_draw_mode(&mut self) -> bool {
        self.draw.toggle()
    }

    /// Explicitly finish the in-progress polygon (toolbar action). Returns
    /// the new wall's id when at least 3 vertices were placed.
    pub fn finish_wall(&mut self) -> Option<WallId> {
        let points = self.draw.finish()?;
        Some(self.commit_wall(points))
    }

    /// Discard the in-progress polygon and leave draw mode.
    pub fn cancel_wall(&mut self) {
        self.draw.cancel();
    }

    /// Handle a tap in canvas coordinates.
    ///
    /// In draw mode the tap goes to the wall state machine (and a closing
    /// tap persists the new wall). Otherwise the front-most room under the
    /// tap is selected; a tap on empty canvas clears the selection.
    pub fn handle_tap(&mut self, location: Point) {
        if self.draw.is_drawing() {
            if let TapOutcome::Closed(points) = self.draw.tap_at(location, GRID_SIZE, self.snap_to_grid) {
                self.commit_wall(points);
            }
            return;
        }

        // Last room in insertion order renders on top, so it wins the hit.
        let hit = self
            .layout
            .rooms()
            .filter(|room| room.rect().contains(location))
            .last()
            .map(|room| room.id);
        match hit {
            Some(id) => self.selected = Some(id),
            None => self.selected = None,
        }
    }

    // --- room operations ---

    /// Add a room at the default size, centered on the canvas, select it,
    /// and persist it.
    pub fn add_room(&mut self) -> RoomId {
        let room = self.layout.add_room(self.canvas_size, self.property).clone();
        self.selected = Some(room.id);
        self.persist_room(&room);
        room.id
    }

    pub fn begin_move(&mut self, id: RoomId) -> bool {
        self.layout.begin_move(id)
    }

    pub fn update_move(&mut self, translation: Vec2) {
        self.layout.update_move(translation);
    }

    /// Commit a move gesture and persist the result.
    pub fn end_move(&mut self, translation: Vec2) -> Option<Rect> {
        let (id, committed) =
            self.layout
                .end_move(translation, self.canvas_bounds(), GRID_SIZE, self.snap_to_grid)?;
        self.persist_room_by_id(id);
        Some(committed)
    }

    pub fn begin_resize(&mut self, id: RoomId) -> bool {
        self.layout.begin_resize(id)
    }

    pub fn update_resize(&mut self, translation: Vec2) {
        self.layout.update_resize(translation);
    }

    /// Commit a resize gesture and persist the result.
    pub fn end_resize(&mut self, translation: Vec2) -> Option<Rect> {
        let (id, committed) =
            self.layout
                .end_resize(translation, self.canvas_bounds(), GRID_SIZE, self.snap_to_grid)?;
        self.persist_room_by_id(id);
        Some(committed)
    }

    /// Apply form edits (rename/recolor/explicit dimensions) and persist.
    pub fn apply_room_edits(
        &mut self,
        id: RoomId,
        name: &str,
        color_hex: &str,
        width: f64,
        height: f64,
    ) -> Option<Rect> {
        let committed =
            self.layout
                .apply_edits(id, name, color_hex, width, height, self.canvas_bounds())?;
        self.persist_room_by_id(id);
        Some(committed)
    }

    /// Delete a room, clearing the selection if it was selected.
    pub fn delete_room(&mut self, id: RoomId) -> bool {
        if self.layout.delete_room(id).is_none() {
            return false;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        if let Err(e) = self.storage.delete_room(id) {
            warn!("failed to delete room {}: {}", id, e);
        }
        true
    }

    /// Delete a wall.
    pub fn delete_wall(&mut self, id: WallId) -> bool {
        let before = self.walls.len();
        self.walls.retain(|wall| wall.id != id);
        if self.walls.len() == before {
            return false;
        }
        if let Err(e) = self.storage.delete_wall(id) {
            warn!("failed to delete wall {}: {}", id, e);
        }
        true
    }

    fn commit_wall(&mut self, points: Vec<Point>) -> WallId {
        let wall = Wall::new(points, self.property);
        let id = wall.id;
        if let Err(e) = self.storage.save_wall(&wall) {
            warn!("failed to save wall {}: {}", id, e);
        } else {
            debug!("saved wall {} ({} vertices)", id, wall.points.len());
        }
        self.walls.push(wall);
        id
    }

    fn persist_room_by_id(&mut self, id: RoomId) {
        if let Some(room) = self.layout.get(id) {
            let room = room.clone();
            self.persist_room(&room);
        }
    }

    fn persist_room(&mut self, room: &Room) {
        if let Err(e) = self.storage.save_room(room) {
            warn!("failed to save room {}: {}", room.id, e);
        } else {
            debug!("saved room {} at {:?}", room.id, room.rect());
        }
    }
}
