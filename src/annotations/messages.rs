//! Message types for the annotation workflow.

use bevy::prelude::*;

use super::shape::{Shape, ShapeId, ShapeKind};

/// Written by the draw tools when a gesture completes
#[derive(Message, Debug, Clone)]
pub struct ShapeCreated {
    pub kind: ShapeKind,
    pub shape: Shape,
}

impl ShapeCreated {
    /// Tag a shape with its own kind
    pub fn new(shape: Shape) -> Self {
        Self {
            kind: shape.kind(),
            shape,
        }
    }
}

/// Message to remove a shape from the map
#[derive(Message, Debug, Clone, Copy)]
pub struct RemoveShapeRequest {
    pub id: ShapeId,
}

/// Message to remove every shape from the map
#[derive(Message, Debug, Clone, Copy)]
pub struct ClearShapesRequest;
