//! Click routing for the Select and Delete tools.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::annotations::{AnnotationCollection, AnnotationSelection, RemoveShapeRequest};
use crate::editor::camera::PanState;
use crate::editor::params::{MapCameraParams, is_cursor_over_ui};
use crate::map::{PopupState, PopupTarget};
use crate::poi::{PoiCatalogue, PoiLayer, poi_at};

use super::hit_detection::{edit_handle_at, topmost_shape_at};
use super::{DragHandle, DragState};

/// Select tool: markers first, then handles of the selected shape, then
/// shapes, then empty space pans
#[allow(clippy::too_many_arguments)]
pub fn handle_selection(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: MapCameraParams,
    collection: Res<AnnotationCollection>,
    catalogue: Res<PoiCatalogue>,
    poi_layer: Res<PoiLayer>,
    mut selection: ResMut<AnnotationSelection>,
    mut popups: ResMut<PopupState>,
    mut drag_state: ResMut<DragState>,
    mut pan_state: ResMut<PanState>,
    mut contexts: EguiContexts,
) {
    if !mouse_button.just_pressed(MouseButton::Left) || is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };
    let scale = camera.zoom_scale();

    // Markers take the click over shapes
    if let Some(index) = poi_at(&catalogue, &poi_layer, &*camera.surface, world_pos, scale) {
        selection.selected = None;
        popups.open(PopupTarget::PointOfInterest(index));
        return;
    }

    let grabbed_handle = selection.selected.and_then(|id| {
        let annotation = collection.get(id)?;
        let handle = edit_handle_at(&*camera.surface, &annotation.shape, world_pos, scale)?;
        Some((id, handle))
    });
    if let Some((id, handle)) = grabbed_handle {
        popups.open(PopupTarget::Annotation(id));
        drag_state.begin(id, DragHandle::Edit(handle), world_pos);
        return;
    }

    if let Some(id) = topmost_shape_at(&collection, &*camera.surface, world_pos, scale) {
        selection.selected = Some(id);
        popups.open(PopupTarget::Annotation(id));
        drag_state.begin(id, DragHandle::Body, world_pos);
        return;
    }

    selection.selected = None;
    popups.close();
    pan_state.active = true;
}

/// Delete tool: clicking a shape removes it
pub fn handle_delete_tool(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: MapCameraParams,
    collection: Res<AnnotationCollection>,
    mut remove: MessageWriter<RemoveShapeRequest>,
    mut contexts: EguiContexts,
) {
    if !mouse_button.just_pressed(MouseButton::Left) || is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };

    if let Some(id) =
        topmost_shape_at(&collection, &*camera.surface, world_pos, camera.zoom_scale())
    {
        remove.write(RemoveShapeRequest { id });
    }
}
