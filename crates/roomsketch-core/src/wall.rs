//! Wall model: a closed polygon drawn on the floorplan.

use crate::color::Rgba;
use crate::room::PropertyId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a wall.
pub type WallId = Uuid;

/// Default stroke/fill color for new walls.
pub const DEFAULT_WALL_COLOR: &str = "#999999";

/// A wall polygon. The vertex list is implicitly closed back to the first
/// point; committed walls always have at least 3 vertices. Walls are created
/// only by the drawing state machine and are immutable afterwards (delete and
/// redraw to change one).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub id: WallId,
    pub points: Vec<Point>,
    /// Stroke/fill color as a hex string.
    pub color_hex: String,
    pub property: Option<PropertyId>,
}

impl Wall {
    /// Create a new wall with the default color.
    pub fn new(points: Vec<Point>, property: Option<PropertyId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            color_hex: DEFAULT_WALL_COLOR.to_string(),
            property,
        }
    }

    /// Parsed stroke color, gray when the stored string is invalid.
    pub fn stroke(&self) -> Rgba {
        Rgba::from_hex_or_gray(Some(&self.color_hex))
    }
}
