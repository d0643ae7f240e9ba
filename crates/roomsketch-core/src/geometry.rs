//! Geometry primitives and floorplan layout constants.

use kurbo::{Point, Rect, Size};

/// Default size for a newly added room (canvas units).
pub const DEFAULT_ROOM_SIZE: Size = Size::new(120.0, 90.0);

/// Minimum room dimensions, enforced on every commit.
pub const MIN_ROOM_SIZE: Size = Size::new(40.0, 32.0);

/// Grid spacing for snapping (matches the visual grid).
pub const GRID_SIZE: f64 = 16.0;

/// How close (canvas units) an edge needs to be to snap to another room
/// edge/center.
pub const SNAP_THRESHOLD: f64 = 10.0;

/// Tap distance to the first vertex that closes an in-progress wall polygon.
pub const CLOSE_THRESHOLD: f64 = 12.0;

/// Resize handle hit-target size.
pub const HANDLE_SIZE: f64 = 18.0;

/// Minimum top-left inset when placing a new room on the canvas.
pub const CANVAS_MARGIN: f64 = 16.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).hypot()
}

/// Snap a scalar to the nearest multiple of `grid`.
///
/// Returns the value unchanged when snapping is disabled or the grid is
/// degenerate.
pub fn snap_scalar(value: f64, grid: f64, enabled: bool) -> f64 {
    if !enabled || grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}

/// Snap both coordinates of a point to the grid.
pub fn snap_point(point: Point, grid: f64, enabled: bool) -> Point {
    Point::new(
        snap_scalar(point.x, grid, enabled),
        snap_scalar(point.y, grid, enabled),
    )
}

/// Clamp a room rectangle into the canvas bounds.
///
/// The origin is shifted to stay past the min edges, then width/height are
/// shrunk against the max edges. Minimum room size is re-enforced last, so
/// the result may exceed `bounds` on the max side when the bounds are smaller
/// than a minimum-size room. That edge case is accepted and not corrected
/// further.
pub fn clamp_rect(rect: Rect, bounds: Rect) -> Rect {
    let mut x = rect.x0;
    let mut y = rect.y0;
    let mut width = rect.width();
    let mut height = rect.height();

    if x < bounds.x0 {
        x = bounds.x0;
    }
    if y < bounds.y0 {
        y = bounds.y0;
    }
    if x + width > bounds.x1 {
        width = bounds.x1 - x;
    }
    if y + height > bounds.y1 {
        height = bounds.y1 - y;
    }

    width = width.max(MIN_ROOM_SIZE.width);
    height = height.max(MIN_ROOM_SIZE.height);

    Rect::new(x, y, x + width, y + height)
}
