//! Custom gizmo group for drawn shapes.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

use super::state::AnnotationSettings;

/// Gizmo group for shapes and draw previews
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct AnnotationGizmoGroup;

/// Stroke shapes at the configured width
pub fn configure_annotation_gizmos(
    mut config_store: ResMut<GizmoConfigStore>,
    settings: Res<AnnotationSettings>,
) {
    let (config, _) = config_store.config_mut::<AnnotationGizmoGroup>();
    config.line.width = settings.stroke_width;
}
