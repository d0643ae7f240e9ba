//! Room layout model: committed rooms plus per-gesture transient state.
//!
//! The committed model is the only persisted state. While a drag or resize is
//! in flight only a translation is tracked, so the stored geometry never
//! jitters mid-gesture; the end-of-gesture commit is the single writer.

use crate::geometry::{CANVAS_MARGIN, DEFAULT_ROOM_SIZE, MIN_ROOM_SIZE, clamp_rect};
use crate::room::{PropertyId, Room, RoomId};
use crate::snap::snap_and_align;
use kurbo::{Point, Rect, Size, Vec2};
use std::collections::HashMap;

/// Transient state for an in-progress move gesture.
#[derive(Debug, Clone)]
struct MoveState {
    room_id: RoomId,
    /// Committed origin captured at gesture start.
    initial_origin: Point,
    /// Current drag translation (display overlay only, never committed).
    translation: Vec2,
}

/// Transient state for an in-progress resize gesture.
#[derive(Debug, Clone)]
struct ResizeState {
    room_id: RoomId,
    /// Committed size captured at gesture start.
    initial_size: Size,
    translation: Vec2,
}

/// The set of rooms on a canvas, with interactive move/resize support.
#[derive(Debug, Clone, Default)]
pub struct RoomLayout {
    rooms: HashMap<RoomId, Room>,
    /// Insertion order, for stable iteration and sequential naming.
    order: Vec<RoomId>,
    move_state: Option<MoveState>,
    resize_state: Option<ResizeState>,
}

impl RoomLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-persisted room (used when loading a floorplan).
    pub fn insert(&mut self, room: Room) {
        if !self.rooms.contains_key(&room.id) {
            self.order.push(room.id);
        }
        self.rooms.insert(room.id, room);
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Rooms in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.order.iter().filter_map(|id| self.rooms.get(id))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Add a room at the default size, centered on the canvas with the
    /// top-left floored at the canvas margin. Commits immediately.
    pub fn add_room(&mut self, canvas_size: Size, property: Option<PropertyId>) -> &Room {
        let origin = Point::new(
            CANVAS_MARGIN.max((canvas_size.width - DEFAULT_ROOM_SIZE.width) / 2.0),
            CANVAS_MARGIN.max((canvas_size.height - DEFAULT_ROOM_SIZE.height) / 2.0),
        );
        let name = format!("Room {}", self.rooms.len() + 1);
        let room = Room::new(name, origin, DEFAULT_ROOM_SIZE, property);
        let id = room.id;
        self.insert(room);
        &self.rooms[&id]
    }

    /// Begin a move gesture. Returns false for an unknown room.
    pub fn begin_move(&mut self, id: RoomId) -> bool {
        match self.rooms.get(&id) {
            Some(room) => {
                self.move_state = Some(MoveState {
                    room_id: id,
                    initial_origin: room.origin(),
                    translation: Vec2::ZERO,
                });
                true
            }
            None => false,
        }
    }

    /// Update the transient move translation. The committed model is not
    /// touched.
    pub fn update_move(&mut self, translation: Vec2) {
        if let Some(state) = &mut self.move_state {
            state.translation = translation;
        }
    }

    /// Finish a move gesture: snap, align, clamp and commit the new origin.
    /// Only the origin is committed; the size is unchanged by a move.
    pub fn end_move(
        &mut self,
        translation: Vec2,
        bounds: Rect,
        grid_size: f64,
        snap_to_grid: bool,
    ) -> Option<(RoomId, Rect)> {
        let state = self.move_state.take()?;
        let size = self.rooms.get(&state.room_id)?.size();
        let proposed = Rect::from_origin_size(state.initial_origin + translation, size);

        let others = self.rooms_snapshot();
        let snapped = snap_and_align(proposed, &others, Some(state.room_id), grid_size, snap_to_grid);
        let clamped = clamp_rect(snapped, bounds);

        let room = self.rooms.get_mut(&state.room_id)?;
        room.set_origin(clamped.origin());
        Some((state.room_id, room.rect()))
    }

    /// Begin a resize gesture. Returns false for an unknown room.
    pub fn begin_resize(&mut self, id: RoomId) -> bool {
        match self.rooms.get(&id) {
            Some(room) => {
                self.resize_state = Some(ResizeState {
                    room_id: id,
                    initial_size: room.size(),
                    translation: Vec2::ZERO,
                });
                true
            }
            None => false,
        }
    }

    pub fn update_resize(&mut self, translation: Vec2) {
        if let Some(state) = &mut self.resize_state {
            state.translation = translation;
        }
    }

    /// Finish a resize gesture: grow from the gesture-start size, snap,
    /// re-enforce the minimum, clamp and commit the full rectangle (clamping
    /// may shift the origin too).
    pub fn end_resize(
        &mut self,
        translation: Vec2,
        bounds: Rect,
        grid_size: f64,
        snap_to_grid: bool,
    ) -> Option<(RoomId, Rect)> {
        let state = self.resize_state.take()?;
        let origin = self.rooms.get(&state.room_id)?.origin();
        // Built corner-wise: a translation past the top-left drives the
        // proposed width/height negative, and `Rect::from_origin_size` would
        // normalize that by swapping corners, moving the origin. The negative
        // dimension has to survive until the minimum-size floor below.
        let proposed = Rect::new(
            origin.x,
            origin.y,
            origin.x + state.initial_size.width + translation.x,
            origin.y + state.initial_size.height + translation.y,
        );

        let others = self.rooms_snapshot();
        let snapped = snap_and_align(proposed, &others, Some(state.room_id), grid_size, snap_to_grid);
        let sized = Rect::from_origin_size(
            snapped.origin(),
            Size::new(
                snapped.width().max(MIN_ROOM_SIZE.width),
                snapped.height().max(MIN_ROOM_SIZE.height),
            ),
        );
        let clamped = clamp_rect(sized, bounds);

        let room = self.rooms.get_mut(&state.room_id)?;
        room.set_rect(clamped);
        Some((state.room_id, clamped))
    }

    /// Remove a room, discarding any gesture that targets it.
    pub fn delete_room(&mut self, id: RoomId) -> Option<Room> {
        if self.move_state.as_ref().is_some_and(|s| s.room_id == id) {
            self.move_state = None;
        }
        if self.resize_state.as_ref().is_some_and(|s| s.room_id == id) {
            self.resize_state = None;
        }
        self.order.retain(|&other| other != id);
        self.rooms.remove(&id)
    }

    /// Apply edits from the room form: rename, recolor and set explicit
    /// dimensions. Runs the same minimum-size and bounds clamping as an
    /// interactive resize, then commits.
    pub fn apply_edits(
        &mut self,
        id: RoomId,
        name: &str,
        color_hex: &str,
        width: f64,
        height: f64,
        bounds: Rect,
    ) -> Option<Rect> {
        let room = self.rooms.get_mut(&id)?;
        room.name = name.to_string();
        room.color_hex = color_hex.to_string();

        let proposed = Rect::from_origin_size(
            room.origin(),
            Size::new(
                width.max(MIN_ROOM_SIZE.width),
                height.max(MIN_ROOM_SIZE.height),
            ),
        );
        let clamped = clamp_rect(proposed, bounds);
        room.set_rect(clamped);
        Some(clamped)
    }

    /// The rectangle to render for a room: the committed rect with any live
    /// gesture overlay applied. A transient resize is floored at the minimum
    /// size for display, same as the eventual commit.
    pub fn display_rect(&self, id: RoomId) -> Option<Rect> {
        let room = self.rooms.get(&id)?;
        let mut rect = room.rect();
        if let Some(state) = self.move_state.as_ref().filter(|s| s.room_id == id) {
            rect = rect + state.translation;
        }
        if let Some(state) = self.resize_state.as_ref().filter(|s| s.room_id == id) {
            rect = Rect::from_origin_size(
                rect.origin(),
                Size::new(
                    MIN_ROOM_SIZE.width.max(room.width + state.translation.x),
                    MIN_ROOM_SIZE.height.max(room.height + state.translation.y),
                ),
            );
        }
        Some(rect)
    }

    fn rooms_snapshot(&self) -> Vec<Room> {
        self.order
            .iter()
            .filter_map(|id| self.rooms.get(id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GRID_SIZE;
    use approx::assert_abs_diff_eq;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 400.0, 400.0);

    fn canvas() -> Size {
        Size::new(400.0, 400.0)
    }

    #[test]
    fn test_add_room_centers_on_canvas() {
        let mut layout = RoomLayout::new();
        let room = layout.add_room(canvas(), None);
        assert_eq!(room.name, "Room 1");
        assert_abs_diff_eq!(room.x, 140.0);
        assert_abs_diff_eq!(room.y, 155.0);
        assert_abs_diff_eq!(room.width, 120.0);
        assert_abs_diff_eq!(room.height, 90.0);
    }

    #[test]
    fn test_add_room_floors_at_margin() {
        let mut layout = RoomLayout::new();
        let room = layout.add_room(Size::new(100.0, 60.0), None);
        assert_abs_diff_eq!(room.x, CANVAS_MARGIN);
        assert_abs_diff_eq!(room.y, CANVAS_MARGIN);
    }

    #[test]
    fn test_sequential_names() {
        let mut layout = RoomLayout::new();
        layout.add_room(canvas(), None);
        let second = layout.add_room(canvas(), None);
        assert_eq!(second.name, "Room 2");
    }

    #[test]
    fn test_update_move_does_not_touch_model() {
        let mut layout = RoomLayout::new();
        let id = layout.add_room(canvas(), None).id;

        assert!(layout.begin_move(id));
        layout.update_move(Vec2::new(30.0, 40.0));

        let room = layout.get(id).unwrap();
        assert_abs_diff_eq!(room.x, 140.0);
        assert_abs_diff_eq!(room.y, 155.0);
        // The display overlay reflects the drag.
        let display = layout.display_rect(id).unwrap();
        assert_abs_diff_eq!(display.x0, 170.0);
        assert_abs_diff_eq!(display.y0, 195.0);
    }

    #[test]
    fn test_end_move_clamps_to_bounds() {
        let mut layout = RoomLayout::new();
        let id = layout.add_room(canvas(), None).id;

        layout.begin_move(id);
        // Proposed origin (-5, 50), snapping off.
        let (_, committed) = layout
            .end_move(Vec2::new(-145.0, -105.0), BOUNDS, GRID_SIZE, false)
            .unwrap();
        assert_abs_diff_eq!(committed.x0, 0.0);
        assert_abs_diff_eq!(committed.y0, 50.0);
        // Move commits origin only; size unchanged.
        assert_abs_diff_eq!(committed.width(), 120.0);
        assert_abs_diff_eq!(committed.height(), 90.0);
    }

    #[test]
    fn test_end_move_aligns_to_neighbor_edge() {
        let mut layout = RoomLayout::new();
        let first = Room::new("A", Point::new(0.0, 50.0), Size::new(120.0, 90.0), None);
        layout.insert(first);
        let second = Room::new("B", Point::new(240.0, 300.0), Size::new(120.0, 90.0), None);
        let id = second.id;
        layout.insert(second);

        layout.begin_move(id);
        // Drag so the left edge lands at 125, within threshold of A's right
        // edge at 120.
        let (_, committed) = layout
            .end_move(Vec2::new(-115.0, 0.0), BOUNDS, GRID_SIZE, false)
            .unwrap();
        assert_abs_diff_eq!(committed.x0, 120.0);
    }

    #[test]
    fn test_end_resize_enforces_minimum() {
        let mut layout = RoomLayout::new();
        let id = layout.add_room(canvas(), None).id;

        layout.begin_resize(id);
        // Translation well past the top-left corner: both proposed
        // dimensions go negative.
        let (_, committed) = layout
            .end_resize(Vec2::new(-200.0, -200.0), BOUNDS, GRID_SIZE, false)
            .unwrap();
        assert_abs_diff_eq!(committed.width(), MIN_ROOM_SIZE.width);
        assert_abs_diff_eq!(committed.height(), MIN_ROOM_SIZE.height);
        // The room stays anchored at its origin; only the size floors.
        assert_abs_diff_eq!(committed.x0, 140.0);
        assert_abs_diff_eq!(committed.y0, 155.0);
    }

    #[test]
    fn test_end_resize_commits_full_rect() {
        let mut layout = RoomLayout::new();
        let id = layout.add_room(canvas(), None).id;

        layout.begin_resize(id);
        let (_, committed) = layout
            .end_resize(Vec2::new(37.0, 13.0), BOUNDS, GRID_SIZE, false)
            .unwrap();
        let room = layout.get(id).unwrap();
        assert_eq!(room.rect(), committed);
        assert_abs_diff_eq!(committed.width(), 157.0);
        assert_abs_diff_eq!(committed.height(), 103.0);
    }

    #[test]
    fn test_end_resize_grid_snaps_dimensions() {
        let mut layout = RoomLayout::new();
        let room = Room::new("A", Point::new(32.0, 32.0), Size::new(120.0, 90.0), None);
        let id = room.id;
        layout.insert(room);

        layout.begin_resize(id);
        let (_, committed) = layout
            .end_resize(Vec2::new(5.0, 5.0), BOUNDS, GRID_SIZE, true)
            .unwrap();
        // 125 -> 128, 95 -> 96 on the 16-unit grid.
        assert_abs_diff_eq!(committed.width(), 128.0);
        assert_abs_diff_eq!(committed.height(), 96.0);
    }

    #[test]
    fn test_delete_room() {
        let mut layout = RoomLayout::new();
        let id = layout.add_room(canvas(), None).id;
        assert!(layout.delete_room(id).is_some());
        assert!(layout.is_empty());
        assert!(layout.delete_room(id).is_none());
    }

    #[test]
    fn test_delete_room_discards_gesture() {
        let mut layout = RoomLayout::new();
        let id = layout.add_room(canvas(), None).id;
        layout.begin_move(id);
        layout.delete_room(id);
        assert!(layout.end_move(Vec2::ZERO, BOUNDS, GRID_SIZE, false).is_none());
    }

    #[test]
    fn test_apply_edits_clamps() {
        let mut layout = RoomLayout::new();
        let room = Room::new("A", Point::new(350.0, 350.0), Size::new(120.0, 90.0), None);
        let id = room.id;
        layout.insert(room);

        let committed = layout
            .apply_edits(id, "Kitchen", "#FFCC00", 200.0, 20.0, BOUNDS)
            .unwrap();
        let room = layout.get(id).unwrap();
        assert_eq!(room.name, "Kitchen");
        assert_eq!(room.color_hex, "#FFCC00");
        // Width shrinks against the canvas edge, height floors at the minimum.
        assert_abs_diff_eq!(committed.width(), 50.0);
        assert_abs_diff_eq!(committed.height(), MIN_ROOM_SIZE.height);
    }
}
