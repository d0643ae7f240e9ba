//! RoomSketch Core Library
//!
//! Platform-agnostic floorplan editing: room layout, grid/edge snapping,
//! wall drawing and persistence.

pub mod color;
pub mod draw;
pub mod geometry;
pub mod layout;
pub mod room;
pub mod session;
pub mod snap;
pub mod storage;
pub mod wall;

pub use color::Rgba;
pub use draw::{TapOutcome, WallDraw};
pub use geometry::{
    CANVAS_MARGIN, CLOSE_THRESHOLD, DEFAULT_ROOM_SIZE, GRID_SIZE, HANDLE_SIZE, MIN_ROOM_SIZE,
    SNAP_THRESHOLD, clamp_rect, distance, snap_point, snap_scalar,
};
pub use layout::RoomLayout;
pub use room::{DEFAULT_ROOM_COLOR, PropertyId, Room, RoomId};
pub use session::FloorplanSession;
pub use snap::snap_and_align;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, StorageResult};
pub use wall::{DEFAULT_WALL_COLOR, Wall, WallId};
