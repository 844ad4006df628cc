//! Pointer-driven pan capability for a crop session.
//!
//! Converts absolute pointer positions into pan transitions measured from
//! the drag start: the target offset is the offset at drag start plus the
//! total pointer delta, so overshooting a clamp boundary and dragging back
//! behaves symmetrically. No coupling to any rendering surface; the host
//! forwards its own pointer events. A fresh tracker (or `pointer_up`) makes
//! re-attachment after re-initializing a session idempotent.

use super::CropSession;

#[derive(Debug, Clone, Copy)]
struct DragStart {
    pointer_x: f32,
    pointer_y: f32,
    offset_x: f32,
    offset_y: f32,
}

/// Tracks one in-flight drag.
#[derive(Debug, Default)]
pub struct DragTracker {
    start: Option<DragStart>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag at the given pointer position.
    pub fn pointer_down(&mut self, session: &CropSession, x: f32, y: f32) {
        let (offset_x, offset_y) = session.offset();
        self.start = Some(DragStart {
            pointer_x: x,
            pointer_y: y,
            offset_x,
            offset_y,
        });
    }

    /// Pan the session toward the current pointer position.
    ///
    /// Ignored when no drag is active.
    pub fn pointer_move(&mut self, session: &mut CropSession, x: f32, y: f32) {
        let Some(start) = self.start else { return };
        let target_x = start.offset_x + (x - start.pointer_x);
        let target_y = start.offset_y + (y - start.pointer_y);
        let (current_x, current_y) = session.offset();
        session.pan(target_x - current_x, target_y - current_y);
    }

    /// End the drag.
    pub fn pointer_up(&mut self) {
        self.start = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }
}
