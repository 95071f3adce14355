//! Circle tool: press at the center, drag out the radius, release.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::annotations::ShapeCreated;

use super::super::params::{MapCameraParams, is_cursor_over_ui, is_typing};
use super::state::CircleDrawState;

pub fn handle_circle_tool(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut circle_state: ResMut<CircleDrawState>,
    camera: MapCameraParams,
    mut created: MessageWriter<ShapeCreated>,
    mut contexts: EguiContexts,
) {
    if mouse_button.just_pressed(MouseButton::Right)
        || (!is_typing(&mut contexts) && keyboard.just_pressed(KeyCode::Escape))
    {
        circle_state.cancel();
        return;
    }

    if mouse_button.just_pressed(MouseButton::Left) {
        if is_cursor_over_ui(&mut contexts) {
            return;
        }
        if let Some(center) = camera.cursor_latlng() {
            circle_state.begin(center);
        }
        return;
    }

    if !mouse_button.just_released(MouseButton::Left) || circle_state.center.is_none() {
        return;
    }

    let Some(edge) = camera.cursor_latlng() else {
        circle_state.cancel();
        return;
    };

    match circle_state.finish(&*camera.surface, edge) {
        Some(shape) => {
            created.write(ShapeCreated::new(shape));
        }
        None => debug!("Circle discarded: zero radius"),
    }
}
