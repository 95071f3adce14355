use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::annotations::{Shape, ShapeCreated};

use super::super::params::{MapCameraParams, is_cursor_over_ui};

/// Marker tool: one click drops a point
pub fn handle_marker_tool(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: MapCameraParams,
    mut created: MessageWriter<ShapeCreated>,
    mut contexts: EguiContexts,
) {
    if !mouse_button.just_pressed(MouseButton::Left) || is_cursor_over_ui(&mut contexts) {
        return;
    }

    if let Some(point) = camera.cursor_latlng() {
        created.write(ShapeCreated::new(Shape::Point(point)));
    }
}
