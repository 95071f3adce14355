//! Turning completed draw gestures into labelled annotations.

use bevy::prelude::*;

use crate::map::{Crs, MapSurface, PopupState, PopupTarget};

use super::collection::AnnotationCollection;
use super::measure::measure;
use super::messages::{ClearShapesRequest, RemoveShapeRequest, ShapeCreated};
use super::shape::{Shape, ShapeId};

/// The shape currently picked for editing, if any
#[derive(Resource, Debug, Default)]
pub struct AnnotationSelection {
    pub selected: Option<ShapeId>,
}

/// Measure `shape`, store it with its label and return the new id
pub fn annotate<C: Crs + ?Sized>(
    collection: &mut AnnotationCollection,
    crs: &C,
    shape: Shape,
) -> ShapeId {
    let label = measure(crs, &shape);
    collection.add(shape, label)
}

/// Forget a shape along with any popup or selection pointing at it
fn forget(id: ShapeId, popups: &mut PopupState, selection: &mut AnnotationSelection) {
    popups.close_if(PopupTarget::Annotation(id));
    if selection.selected == Some(id) {
        selection.selected = None;
    }
}

pub fn handle_shape_created(
    mut created: MessageReader<ShapeCreated>,
    mut collection: ResMut<AnnotationCollection>,
    mut popups: ResMut<PopupState>,
    surface: Res<MapSurface>,
) {
    for message in created.read() {
        let id = annotate(&mut collection, &*surface, message.shape.clone());

        // Show the measurement straight away
        popups.open(PopupTarget::Annotation(id));

        if let Some(annotation) = collection.get(id) {
            info!(
                "Added {} {}: {}",
                message.kind.as_str(),
                id,
                annotation.label
            );
        }
    }
}

pub fn handle_remove_shape(
    mut requests: MessageReader<RemoveShapeRequest>,
    mut collection: ResMut<AnnotationCollection>,
    mut popups: ResMut<PopupState>,
    mut selection: ResMut<AnnotationSelection>,
) {
    for request in requests.read() {
        if collection.remove(request.id).is_some() {
            forget(request.id, &mut popups, &mut selection);
            info!("Removed shape {}", request.id);
        } else {
            debug!("Shape {} already removed", request.id);
        }
    }
}

pub fn handle_clear_shapes(
    mut requests: MessageReader<ClearShapesRequest>,
    mut collection: ResMut<AnnotationCollection>,
    mut popups: ResMut<PopupState>,
    mut selection: ResMut<AnnotationSelection>,
) {
    // Several clicks in one frame clear once
    if requests.read().count() == 0 {
        return;
    }

    let removed = collection.clear();
    for id in &removed {
        forget(*id, &mut popups, &mut selection);
    }
    info!("Cleared {} shapes", removed.len());
}
