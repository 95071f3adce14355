//! Path tool: click to add vertices, finish on the last vertex or Enter.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::annotations::ShapeCreated;
use crate::constants::SHAPE_HIT_TOLERANCE_PX;

use super::super::params::{MapCameraParams, is_cursor_over_ui, is_typing};
use super::state::{PathClick, PathDrawState};

/// Emit the path if it has enough vertices, then reset the tool
pub fn finish_path(state: &mut PathDrawState, created: &mut MessageWriter<ShapeCreated>) -> bool {
    match state.finish() {
        Some(shape) => {
            created.write(ShapeCreated::new(shape));
            true
        }
        None => {
            debug!("Path discarded: fewer than two vertices");
            false
        }
    }
}

pub fn handle_path_tool(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut path_state: ResMut<PathDrawState>,
    camera: MapCameraParams,
    mut created: MessageWriter<ShapeCreated>,
    mut contexts: EguiContexts,
) {
    let typing = is_typing(&mut contexts);

    // Right click or Escape cancels
    if mouse_button.just_pressed(MouseButton::Right)
        || (!typing && keyboard.just_pressed(KeyCode::Escape))
    {
        if path_state.is_drawing() {
            path_state.cancel();
            debug!("Path cancelled");
        }
        return;
    }

    if !typing {
        if keyboard.just_pressed(KeyCode::Backspace) {
            path_state.undo();
        }
        if keyboard.just_pressed(KeyCode::Enter) {
            finish_path(&mut path_state, &mut created);
            return;
        }
    }

    if !mouse_button.just_pressed(MouseButton::Left) || is_cursor_over_ui(&mut contexts) {
        return;
    }

    let (Some(screen_pos), Some(point)) = (camera.cursor_screen_pos(), camera.cursor_latlng())
    else {
        return;
    };

    // Clicking the last vertex again (a double-click included) finishes
    let on_last_vertex = path_state
        .points
        .last()
        .and_then(|last| camera.to_screen(*last))
        .is_some_and(|last| last.distance(screen_pos) <= SHAPE_HIT_TOLERANCE_PX);

    match path_state.click_action(on_last_vertex) {
        PathClick::AddVertex => path_state.push(point),
        PathClick::Finish => {
            finish_path(&mut path_state, &mut created);
        }
        PathClick::Ignore => debug!("Path needs a second vertex before it can finish"),
    }
}
