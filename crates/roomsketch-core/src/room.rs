//! Room model: a named rectangle on the floorplan canvas.

use crate::color::Rgba;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a room.
pub type RoomId = Uuid;

/// Identifier of the owning property. Properties live in an external
/// persistence collaborator; the relation here is a plain foreign key, never
/// an ownership edge.
pub type PropertyId = Uuid;

/// Default fill color for new rooms.
pub const DEFAULT_ROOM_COLOR: &str = "#9AC0FF";

/// A room on the floorplan: an axis-aligned rectangle with identity, display
/// name and fill color. Coordinates are canvas units, top-left origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Fill color as a hex string (`#RRGGBB` or `#AARRGGBB`). Stored as text
    /// so persistence round-trips it byte-for-byte.
    pub color_hex: String,
    pub property: Option<PropertyId>,
}

impl Room {
    /// Create a new room with the default fill color.
    pub fn new(name: impl Into<String>, origin: Point, size: Size, property: Option<PropertyId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
            color_hex: DEFAULT_ROOM_COLOR.to_string(),
            property,
        }
    }

    /// The committed rectangle of the room.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.x = origin.x;
        self.y = origin.y;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.x = rect.x0;
        self.y = rect.y0;
        self.width = rect.width();
        self.height = rect.height();
    }

    /// Parsed fill color, gray when the stored string is invalid.
    pub fn fill(&self) -> Rgba {
        Rgba::from_hex_or_gray(Some(&self.color_hex))
    }
}
