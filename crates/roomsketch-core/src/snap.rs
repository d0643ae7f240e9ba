//! Snap engine: grid snapping and edge/center alignment for room rectangles.

use crate::geometry::{MIN_ROOM_SIZE, SNAP_THRESHOLD, snap_scalar};
use crate::room::{Room, RoomId};
use kurbo::Rect;

/// Snap a proposed room rectangle to the grid (when enabled) and align its
/// edges/centers to nearby rooms.
///
/// The alignment pass runs one other room at a time, in the given order, and
/// each test applies unconditionally: within one room the tests run against
/// the rectangle as adjusted so far, and a later room in the list can
/// override the alignment a previous one produced. When several rooms are
/// simultaneously within the threshold the last match wins per axis; callers
/// wanting a deterministic result should keep the room list in a stable
/// order.
pub fn snap_and_align(
    proposed: Rect,
    others: &[Room],
    exclude: Option<RoomId>,
    grid_size: f64,
    snap_to_grid: bool,
) -> Rect {
    let mut x = proposed.x0;
    let mut y = proposed.y0;
    let mut width = proposed.width();
    let mut height = proposed.height();

    // 1) grid snap
    if snap_to_grid && grid_size > 0.0 {
        x = snap_scalar(x, grid_size, true);
        y = snap_scalar(y, grid_size, true);
        width = MIN_ROOM_SIZE.width.max(snap_scalar(width, grid_size, true));
        height = MIN_ROOM_SIZE.height.max(snap_scalar(height, grid_size, true));
    }

    // 2) alignment to other rooms: edges and centers
    for other in others {
        if exclude == Some(other.id) {
            continue;
        }
        let o = other.rect();

        // horizontal: left to left
        if (x - o.x0).abs() <= SNAP_THRESHOLD {
            x = o.x0;
        }
        // left to other's right
        if (x - o.x1).abs() <= SNAP_THRESHOLD {
            x = o.x1;
        }
        // right to other's left
        if (x + width - o.x0).abs() <= SNAP_THRESHOLD {
            x = o.x0 - width;
        }
        // right to other's right
        if (x + width - o.x1).abs() <= SNAP_THRESHOLD {
            x = o.x1 - width;
        }
        // center X to center X
        if (x + width / 2.0 - o.center().x).abs() <= SNAP_THRESHOLD {
            x = o.center().x - width / 2.0;
        }

        // vertical: top to top
        if (y - o.y0).abs() <= SNAP_THRESHOLD {
            y = o.y0;
        }
        // top to other's bottom
        if (y - o.y1).abs() <= SNAP_THRESHOLD {
            y = o.y1;
        }
        // bottom to other's top
        if (y + height - o.y0).abs() <= SNAP_THRESHOLD {
            y = o.y0 - height;
        }
        // bottom to other's bottom
        if (y + height - o.y1).abs() <= SNAP_THRESHOLD {
            y = o.y1 - height;
        }
        // center Y to center Y
        if (y + height / 2.0 - o.center().y).abs() <= SNAP_THRESHOLD {
            y = o.center().y - height / 2.0;
        }
    }

    Rect::new(x, y, x + width, y + height)
}
