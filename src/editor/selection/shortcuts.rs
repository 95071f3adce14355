//! Keyboard shortcuts for the selected shape.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::annotations::{AnnotationSelection, RemoveShapeRequest};
use crate::editor::params::is_typing;
use crate::map::PopupState;

/// Delete or Backspace removes the selected shape
pub fn handle_deletion(
    keyboard: Res<ButtonInput<KeyCode>>,
    selection: Res<AnnotationSelection>,
    mut remove: MessageWriter<RemoveShapeRequest>,
    mut contexts: EguiContexts,
) {
    // Don't trigger if typing in UI
    if is_typing(&mut contexts) {
        return;
    }

    if !keyboard.just_pressed(KeyCode::Delete) && !keyboard.just_pressed(KeyCode::Backspace) {
        return;
    }

    if let Some(id) = selection.selected {
        remove.write(RemoveShapeRequest { id });
    }
}

/// Escape drops the selection and closes any popup
pub fn handle_escape_clear_selection(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<AnnotationSelection>,
    mut popups: ResMut<PopupState>,
    mut contexts: EguiContexts,
) {
    if is_typing(&mut contexts) || !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    selection.selected = None;
    popups.close();
}
