//! Drawing tools that turn mouse gestures into `ShapeCreated` messages.
//!
//! - Path (L): click to add vertices; click the last vertex or press Enter
//!   to finish, Backspace drops a vertex, Escape or right click cancels
//! - Circle (C): press at the center, drag, release
//! - Marker (M): single click

mod circle_tool;
mod gizmo;
mod marker_tool;
mod path_tool;
mod rendering;
mod state;

pub use circle_tool::handle_circle_tool;
pub use gizmo::{AnnotationGizmoGroup, configure_annotation_gizmos};
pub use marker_tool::handle_marker_tool;
pub use path_tool::{finish_path, handle_path_tool};
pub use rendering::{render_circle_preview, render_path_preview, render_shapes};
pub use state::{AnnotationSettings, CircleDrawState, PathDrawState, apply_annotation_settings};

use bevy::prelude::*;

use super::tools::{CurrentTool, DrawTool};

/// Drop half-finished gestures when the user switches tools
pub fn reset_inactive_gestures(
    current_tool: Res<CurrentTool>,
    mut path_state: ResMut<PathDrawState>,
    mut circle_state: ResMut<CircleDrawState>,
) {
    if current_tool.tool != DrawTool::Path && path_state.is_drawing() {
        path_state.cancel();
    }
    if current_tool.tool != DrawTool::Circle && circle_state.center.is_some() {
        circle_state.cancel();
    }
}
