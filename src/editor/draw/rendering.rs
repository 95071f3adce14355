//! Gizmo rendering for drawn shapes and in-progress gestures.
//!
//! Shapes have no entities of their own: every frame the collection is walked
//! and each shape stroked in place.

use bevy::prelude::*;

use crate::annotations::{AnnotationCollection, AnnotationSelection, Shape};
use crate::constants::POINT_MARKER_RADIUS_PX;
use crate::map::{Crs, MapSurface};
use crate::theme::DRAW_PREVIEW_ALPHA;

use super::super::params::MapCameraParams;
use super::gizmo::AnnotationGizmoGroup;
use super::state::{AnnotationSettings, CircleDrawState, PathDrawState};

/// Radius of vertex handles on unfinished and selected shapes (screen pixels)
const VERTEX_HANDLE_RADIUS_PX: f32 = 4.0;

fn draw_shape(
    gizmos: &mut Gizmos<AnnotationGizmoGroup>,
    surface: &MapSurface,
    shape: &Shape,
    color: Color,
    scale: f32,
) {
    match shape {
        Shape::Path(points) => {
            let world: Vec<Vec2> = points.iter().map(|p| surface.to_world(*p)).collect();
            for pair in world.windows(2) {
                gizmos.line_2d(pair[0], pair[1], color);
            }
        }
        Shape::Circle { center, radius } => {
            gizmos.circle_2d(
                Isometry2d::from_translation(surface.to_world(*center)),
                *radius as f32,
                color,
            );
        }
        Shape::Point(point) => {
            // Pin: a head above the point with two strokes down to the tip
            let tip = surface.to_world(*point);
            let radius = POINT_MARKER_RADIUS_PX * scale;
            let head = tip + Vec2::new(0.0, radius * 2.0);
            gizmos.circle_2d(Isometry2d::from_translation(head), radius, color);
            gizmos.line_2d(head - Vec2::new(radius, 0.0), tip, color);
            gizmos.line_2d(head + Vec2::new(radius, 0.0), tip, color);
        }
    }
}

/// Handles of the selected shape: every path vertex, or the east point of a
/// circle's rim
fn draw_edit_handles(
    gizmos: &mut Gizmos<AnnotationGizmoGroup>,
    surface: &MapSurface,
    shape: &Shape,
    color: Color,
    scale: f32,
) {
    let handles: Vec<Vec2> = match shape {
        Shape::Path(points) => points.iter().map(|p| surface.to_world(*p)).collect(),
        Shape::Circle { center, radius } => {
            vec![surface.to_world(*center) + Vec2::new(*radius as f32, 0.0)]
        }
        Shape::Point(_) => Vec::new(),
    };
    for handle in handles {
        gizmos.circle_2d(
            Isometry2d::from_translation(handle),
            VERTEX_HANDLE_RADIUS_PX * scale,
            color,
        );
    }
}

pub fn render_shapes(
    mut gizmos: Gizmos<AnnotationGizmoGroup>,
    collection: Res<AnnotationCollection>,
    selection: Res<AnnotationSelection>,
    settings: Res<AnnotationSettings>,
    camera: MapCameraParams,
) {
    let scale = camera.zoom_scale();

    for (id, annotation) in collection.iter() {
        if selection.selected == Some(id) {
            let color = settings.selection_color;
            draw_shape(&mut gizmos, &camera.surface, &annotation.shape, color, scale);
            draw_edit_handles(&mut gizmos, &camera.surface, &annotation.shape, color, scale);
        } else {
            let color = settings.stroke_color;
            draw_shape(&mut gizmos, &camera.surface, &annotation.shape, color, scale);
        }
    }
}

pub fn render_path_preview(
    mut gizmos: Gizmos<AnnotationGizmoGroup>,
    path_state: Res<PathDrawState>,
    settings: Res<AnnotationSettings>,
    camera: MapCameraParams,
) {
    if !path_state.is_drawing() {
        return;
    }

    let color = settings.stroke_color.with_alpha(DRAW_PREVIEW_ALPHA);
    let scale = camera.zoom_scale();
    let world: Vec<Vec2> = path_state
        .points
        .iter()
        .map(|p| camera.surface.to_world(*p))
        .collect();

    for pair in world.windows(2) {
        gizmos.line_2d(pair[0], pair[1], color);
    }
    for vertex in &world {
        gizmos.circle_2d(
            Isometry2d::from_translation(*vertex),
            VERTEX_HANDLE_RADIUS_PX * scale,
            color,
        );
    }

    // Rubber band to the cursor
    if let (Some(last), Some(cursor)) = (world.last(), camera.cursor_world_pos()) {
        gizmos.line_2d(*last, cursor, color);
    }
}

pub fn render_circle_preview(
    mut gizmos: Gizmos<AnnotationGizmoGroup>,
    circle_state: Res<CircleDrawState>,
    settings: Res<AnnotationSettings>,
    camera: MapCameraParams,
) {
    let (Some(center), Some(cursor)) = (circle_state.center, camera.cursor_world_pos()) else {
        return;
    };

    let center = camera.surface.to_world(center);
    gizmos.circle_2d(
        Isometry2d::from_translation(center),
        center.distance(cursor),
        settings.stroke_color.with_alpha(DRAW_PREVIEW_ALPHA),
    );
}
