//! Annotation workflow: measuring and keeping track of user-drawn shapes.
//!
//! The draw tools in [`crate::editor`] write a [`ShapeCreated`] message when
//! a gesture completes. [`handle_shape_created`](workflow::handle_shape_created)
//! measures the shape, stores it in the [`AnnotationCollection`] with its
//! label and opens the label popup.
//!
//! ## Module Structure
//!
//! - [`shape`] - Shape geometry, kinds and ids
//! - [`measure`] - Path length and label formatting
//! - [`collection`] - The live set of shapes and labels
//! - [`messages`] - Creation and removal messages
//! - [`workflow`] - Systems reacting to those messages
//!
//! ## Labels
//!
//! - Path: `Distance: 7.00 meters`
//! - Circle: `Radius: 50.50 meters`
//! - Point: `Coordinates: [12.35, -67.89]`
//!
//! Labels are computed once. Moving a shape afterwards keeps its original
//! label.

mod collection;
mod measure;
mod messages;
mod shape;
mod workflow;

#[cfg(test)]
mod tests;

// Re-exports - Types
pub use collection::AnnotationCollection;
pub use shape::{Shape, ShapeId};
pub use workflow::AnnotationSelection;
#[cfg(test)]
pub(crate) use workflow::annotate;

// Re-exports - Messages
pub use messages::{ClearShapesRequest, RemoveShapeRequest, ShapeCreated};

use bevy::prelude::*;

pub struct AnnotationPlugin;

impl Plugin for AnnotationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnnotationCollection>()
            .init_resource::<AnnotationSelection>()
            .add_message::<ShapeCreated>()
            .add_message::<RemoveShapeRequest>()
            .add_message::<ClearShapesRequest>()
            .add_systems(
                Update,
                (
                    workflow::handle_shape_created.run_if(on_message::<ShapeCreated>),
                    workflow::handle_remove_shape.run_if(on_message::<RemoveShapeRequest>),
                    workflow::handle_clear_shapes.run_if(on_message::<ClearShapesRequest>),
                )
                    .chain(),
            );
    }
}
