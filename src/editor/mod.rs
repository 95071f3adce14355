//! Map interaction: camera, drawing tools, selection and shape rendering.

mod camera;
mod conditions;
pub mod draw;
pub mod params;
mod selection;
pub mod tools;

pub use camera::{CameraZoom, MapCamera, step_camera_zoom};
pub use draw::{AnnotationSettings, CircleDrawState, PathDrawState, finish_path};
pub use tools::{CurrentTool, DrawTool};

use bevy::prelude::*;

use crate::config::ConfigLoaded;
use crate::map::SurfaceConfigured;

use conditions::{no_dialog_open, tool_is};

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentTool>()
            .init_resource::<camera::PanState>()
            .init_resource::<selection::DragState>()
            .init_resource::<PathDrawState>()
            .init_resource::<CircleDrawState>()
            .init_resource::<AnnotationSettings>()
            .init_gizmo_group::<draw::AnnotationGizmoGroup>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera.after(SurfaceConfigured),
                    (
                        draw::apply_annotation_settings,
                        draw::configure_annotation_gizmos,
                    )
                        .chain()
                        .after(ConfigLoaded),
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                    tools::handle_tool_shortcuts,
                    tools::update_cursor_icon,
                    draw::reset_inactive_gestures.run_if(resource_changed::<CurrentTool>),
                )
                    .chain()
                    .run_if(no_dialog_open),
            )
            .add_systems(
                Update,
                (
                    selection::handle_selection.run_if(tool_is(DrawTool::Select)),
                    selection::handle_drag,
                    selection::handle_deletion.run_if(tool_is(DrawTool::Select)),
                    selection::handle_escape_clear_selection.run_if(tool_is(DrawTool::Select)),
                    selection::handle_delete_tool.run_if(tool_is(DrawTool::Delete)),
                    draw::handle_path_tool.run_if(tool_is(DrawTool::Path)),
                    draw::handle_circle_tool.run_if(tool_is(DrawTool::Circle)),
                    draw::handle_marker_tool.run_if(tool_is(DrawTool::Marker)),
                    // Pan after selection so an empty-space press starts it
                    camera::camera_pan,
                )
                    .chain()
                    .after(tools::handle_tool_shortcuts)
                    .run_if(no_dialog_open),
            )
            .add_systems(
                Update,
                (
                    draw::render_shapes,
                    draw::render_path_preview.run_if(tool_is(DrawTool::Path)),
                    draw::render_circle_preview.run_if(tool_is(DrawTool::Circle)),
                ),
            );
    }
}
