//! Shared SystemParam bundles for editor systems.
//!
//! Most map interaction needs the same trio: primary window, map camera and
//! its projection. [`MapCameraParams`] bundles them and converts the cursor
//! into world and map coordinates.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::map::{Crs, LatLng, MapSurface};

use super::camera::MapCamera;

/// Bundled camera and window queries for cursor-to-world calculations
#[derive(SystemParam)]
pub struct MapCameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<
        'w,
        's,
        (&'static Camera, &'static GlobalTransform, &'static Projection),
        With<MapCamera>,
    >,
    pub surface: Res<'w, MapSurface>,
}

impl MapCameraParams<'_, '_> {
    /// Cursor position in window pixels
    pub fn cursor_screen_pos(&self) -> Option<Vec2> {
        self.window.single().ok()?.cursor_position()
    }

    /// World position of the cursor, if available
    pub fn cursor_world_pos(&self) -> Option<Vec2> {
        let cursor_pos = self.cursor_screen_pos()?;
        let (camera, transform, _) = self.camera.single().ok()?;
        camera.viewport_to_world_2d(transform, cursor_pos).ok()
    }

    /// Map position of the cursor, if available
    pub fn cursor_latlng(&self) -> Option<LatLng> {
        self.cursor_world_pos()
            .map(|world| self.surface.from_world(world))
    }

    /// World units per screen pixel
    pub fn zoom_scale(&self) -> f32 {
        self.camera
            .single()
            .ok()
            .and_then(|(_, _, proj)| {
                if let Projection::Orthographic(ortho) = proj {
                    Some(ortho.scale)
                } else {
                    None
                }
            })
            .unwrap_or(1.0)
    }

    /// Screen position of a map position
    pub fn to_screen(&self, point: LatLng) -> Option<Vec2> {
        let (camera, transform, _) = self.camera.single().ok()?;
        camera
            .world_to_viewport(transform, self.surface.to_world(point).extend(0.0))
            .ok()
    }
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}

/// Check if egui is consuming keyboard input
pub fn is_typing(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false)
}
