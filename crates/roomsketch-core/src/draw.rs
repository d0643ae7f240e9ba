//! Wall drawing state machine: tap-to-append polygon capture.
//!
//! Taps append vertices to an in-progress polyline; tapping back near the
//! first vertex closes the loop into a wall polygon. The 3-vertex minimum
//! refuses degenerate (point or line) walls at the transition level, so no
//! error path exists for them.

use crate::geometry::{CLOSE_THRESHOLD, distance, snap_point};
use kurbo::Point;

/// Current state of the wall drawing interaction.
#[derive(Debug, Clone, PartialEq, Default)]
enum DrawState {
    /// Not in draw mode; taps are ignored.
    #[default]
    Idle,
    /// Capturing polygon vertices.
    Drawing(Vec<Point>),
}

/// Outcome of a tap while the machine may be drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome {
    /// The tap added a vertex to the in-progress polygon.
    Appended,
    /// The tap closed the polygon; the finished vertex list is returned and
    /// the machine is idle again.
    Closed(Vec<Point>),
    /// The machine was idle; the tap was not consumed.
    Ignored,
}

/// Interactive polyline capture for new walls.
#[derive(Debug, Clone, Default)]
pub struct WallDraw {
    state: DrawState,
}

impl WallDraw {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawState::Drawing(_))
    }

    /// The in-progress vertices (empty when idle).
    pub fn points(&self) -> &[Point] {
        match &self.state {
            DrawState::Idle => &[],
            DrawState::Drawing(points) => points,
        }
    }

    /// Toggle draw mode. Leaving draw mode discards any partial polygon.
    /// Returns whether the machine is drawing afterwards.
    pub fn toggle(&mut self) -> bool {
        self.state = match self.state {
            DrawState::Idle => DrawState::Drawing(Vec::new()),
            DrawState::Drawing(_) => DrawState::Idle,
        };
        self.is_drawing()
    }

    /// Handle a tap at a canvas location.
    ///
    /// The first vertex is recorded raw; it gets snapped together with the
    /// rest when the polygon closes with grid snapping on. Subsequent
    /// vertices are snapped as they are placed. A tap within
    /// [`CLOSE_THRESHOLD`] of the first vertex closes the polygon once at
    /// least 3 vertices exist.
    pub fn tap_at(&mut self, location: Point, grid_size: f64, snap_to_grid: bool) -> TapOutcome {
        let DrawState::Drawing(points) = &mut self.state else {
            return TapOutcome::Ignored;
        };

        if points.is_empty() {
            points.push(location);
            return TapOutcome::Appended;
        }

        if distance(points[0], location) <= CLOSE_THRESHOLD && points.len() >= 3 {
            let mut finished = std::mem::take(points);
            if snap_to_grid {
                for point in &mut finished {
                    *point = snap_point(*point, grid_size, true);
                }
            }
            self.state = DrawState::Idle;
            return TapOutcome::Closed(finished);
        }

        points.push(snap_point(location, grid_size, snap_to_grid));
        TapOutcome::Appended
    }

    /// Explicitly finalize the polygon (e.g. a toolbar "finish" action).
    /// Unlike closing by tap, the vertices are not re-snapped. No-op below 3
    /// vertices; the machine stays in draw mode in that case.
    pub fn finish(&mut self) -> Option<Vec<Point>> {
        match &mut self.state {
            DrawState::Drawing(points) if points.len() >= 3 => {
                let finished = std::mem::take(points);
                self.state = DrawState::Idle;
                Some(finished)
            }
            _ => None,
        }
    }

    /// Discard the in-progress polygon and leave draw mode.
    pub fn cancel(&mut self) {
        self.state = DrawState::Idle;
    }
}
