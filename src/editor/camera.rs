use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::map::{Crs, MapSurface, ZoomLimits};

use super::params::is_cursor_over_ui;

/// Scroll distance in pixels that counts as one wheel notch
const PIXELS_PER_WHEEL_STEP: f32 = 100.0;

#[derive(Component)]
pub struct MapCamera;

/// Zoom level of the map camera (`2^level` screen pixels per map unit)
#[derive(Component, Debug, Default)]
pub struct CameraZoom {
    pub level: f64,
    /// Scroll collected toward the next whole step
    pending: f32,
}

impl CameraZoom {
    pub fn new(level: f64) -> Self {
        Self {
            level,
            pending: 0.0,
        }
    }

    pub fn scale(&self) -> f32 {
        ZoomLimits::projection_scale(self.level)
    }
}

/// Left-drag panning started on empty map space
#[derive(Resource, Default)]
pub struct PanState {
    pub active: bool,
}

/// Camera position that keeps `anchor` under the cursor across a zoom change
pub fn zoom_about(anchor: Vec2, camera_pos: Vec2, old_level: f64, new_level: f64) -> Vec2 {
    let ratio = ZoomLimits::projection_scale(new_level) / ZoomLimits::projection_scale(old_level);
    anchor + (camera_pos - anchor) * ratio
}

/// Spawn the camera centered on the overlay and zoomed to fit it
pub fn spawn_camera(
    mut commands: Commands,
    surface: Res<MapSurface>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let viewport = window_query
        .single()
        .map(|w| (w.width() as f64, w.height() as f64))
        .unwrap_or((DEFAULT_WINDOW_WIDTH as f64, DEFAULT_WINDOW_HEIGHT as f64));

    let level = surface.zoom_limits.fit(surface.bounds.size(), viewport);
    let center = surface.to_world(surface.bounds.center());

    commands.spawn((
        Camera2d,
        MapCamera,
        CameraZoom::new(level),
        Transform::from_translation(center.extend(1000.0)),
    ));
    info!("Camera fitted to overlay at zoom {}", level);
}

pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut pan_state: ResMut<PanState>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CameraZoom), With<MapCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Left) {
        pan_state.active = false;
    }

    let panning = mouse_button.pressed(MouseButton::Middle) || pan_state.active;
    if !panning {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, zoom)) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        let delta = event.delta * zoom.scale();
        transform.translation.x -= delta.x;
        transform.translation.y += delta.y;
    }
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    surface: Res<MapSurface>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<
        (&Camera, &GlobalTransform, &mut Transform, &mut CameraZoom),
        With<MapCamera>,
    >,
    mut contexts: EguiContexts,
) {
    // Let egui scroll its own panels
    if is_cursor_over_ui(&mut contexts) {
        scroll_events.clear();
        return;
    }

    let Ok((camera, global_transform, mut transform, mut zoom)) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        zoom.pending += match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / PIXELS_PER_WHEEL_STEP,
        };
    }

    let steps = zoom.pending.trunc();
    if steps == 0.0 {
        return;
    }
    zoom.pending -= steps;

    let old_level = zoom.level;
    let new_level = surface.zoom_limits.step(old_level, steps as f64);
    if new_level == old_level {
        return;
    }

    let anchor = window_query
        .single()
        .ok()
        .and_then(|window| window.cursor_position())
        .and_then(|cursor| camera.viewport_to_world_2d(global_transform, cursor).ok());
    if let Some(anchor) = anchor {
        let position = zoom_about(
            anchor,
            transform.translation.truncate(),
            old_level,
            new_level,
        );
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }

    zoom.level = new_level;
    debug!("Zoom {} -> {}", old_level, new_level);
}

/// Zoom the map camera by whole snap steps, keeping the view centered.
/// Returns the new level, or `None` when there is no camera.
pub fn step_camera_zoom(world: &mut World, steps: f64) -> Option<f64> {
    let limits = world.get_resource::<MapSurface>()?.zoom_limits;
    let mut query = world.query_filtered::<&mut CameraZoom, With<MapCamera>>();
    let mut zoom = query.single_mut(world).ok()?;

    let old_level = zoom.level;
    let new_level = limits.step(old_level, steps);
    if new_level != old_level {
        zoom.level = new_level;
        debug!("Zoom {} -> {}", old_level, new_level);
    }
    Some(new_level)
}

pub fn apply_camera_zoom(
    mut camera_query: Query<(&CameraZoom, &mut Projection), (With<MapCamera>, Changed<CameraZoom>)>,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_scale_follows_level() {
        assert_eq!(CameraZoom::new(0.0).scale(), 1.0);
        assert_eq!(CameraZoom::new(2.0).scale(), 0.25);
    }

    #[test]
    fn test_zoom_about_keeps_anchor_fixed() {
        let anchor = Vec2::new(100.0, 50.0);
        let camera = Vec2::ZERO;

        // Zooming in one level halves the distance to the anchor
        let moved = zoom_about(anchor, camera, 0.0, 1.0);
        assert_eq!(moved, Vec2::new(50.0, 25.0));
    }

    #[test]
    fn test_step_camera_zoom_clamps() {
        let mut world = World::new();
        world.init_resource::<MapSurface>();
        let camera = world.spawn((MapCamera, CameraZoom::new(2.0))).id();

        assert_eq!(step_camera_zoom(&mut world, 1.0), Some(2.5));
        assert_eq!(step_camera_zoom(&mut world, 1.0), Some(2.5));
        assert_eq!(step_camera_zoom(&mut world, -1.0), Some(2.0));
        assert_eq!(step_camera_zoom(&mut world, -2.0), Some(0.0));
        assert_eq!(step_camera_zoom(&mut world, -1.0), Some(-0.6));
        assert_eq!(world.get::<CameraZoom>(camera).map(|z| z.level), Some(-0.6));
    }

    #[test]
    fn test_step_camera_zoom_without_camera() {
        let mut world = World::new();
        world.init_resource::<MapSurface>();
        assert_eq!(step_camera_zoom(&mut world, 1.0), None);
    }

    #[test]
    fn test_zoom_about_anchor_at_camera() {
        let anchor = Vec2::new(10.0, 10.0);
        assert_eq!(zoom_about(anchor, anchor, 1.0, -0.6), anchor);
    }
}
