//! Selecting, moving and deleting drawn shapes.
//!
//! Selection state lives in [`AnnotationSelection`](crate::annotations::AnnotationSelection);
//! this module only routes mouse and keyboard input to it.

mod drag;
mod handle;
mod hit_detection;
mod shortcuts;

use bevy::prelude::*;

use crate::annotations::ShapeId;

use hit_detection::EditHandle;

// Re-export public items
pub use drag::handle_drag;
pub use handle::{handle_delete_tool, handle_selection};
pub use shortcuts::{handle_deletion, handle_escape_clear_selection};

/// What part of a shape a drag grabbed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragHandle {
    /// The whole shape
    #[default]
    Body,
    /// One handle of the selected shape
    Edit(EditHandle),
}

/// The shape being dragged, if any
#[derive(Resource, Debug, Default)]
pub struct DragState {
    pub moving: Option<ShapeId>,
    pub handle: DragHandle,
    /// Cursor position at the previous drag step
    pub last_world: Vec2,
}

impl DragState {
    pub fn begin(&mut self, id: ShapeId, handle: DragHandle, world_pos: Vec2) {
        self.moving = Some(id);
        self.handle = handle;
        self.last_world = world_pos;
    }

    pub fn end(&mut self) {
        if let Some(id) = self.moving.take() {
            debug!("Finished dragging {:?} of shape {}", self.handle, id);
        }
        self.handle = DragHandle::Body;
    }
}
