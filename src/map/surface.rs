//! The map surface: coordinate system, overlay bounds and zoom rules.

use bevy::prelude::*;

use crate::config::{ViewerConfig, ViewerConfigData};

use super::crs::{Crs, LatLng, LatLngBounds, SimpleCrs};
use super::layer::Layer;

/// Zoom range and snapping.
///
/// A zoom level `z` shows `2^z` screen pixels per map unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    pub snap: f64,
}

impl ZoomLimits {
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    /// Round to the nearest snap step, then clamp
    pub fn snap(&self, zoom: f64) -> f64 {
        self.clamp((zoom / self.snap).round() * self.snap)
    }

    /// Move by whole snap steps (negative zooms out)
    pub fn step(&self, zoom: f64, steps: f64) -> f64 {
        self.snap(zoom + steps * self.snap)
    }

    /// Largest snapped zoom at which `content` fits inside `viewport`
    pub fn fit(&self, content: (f64, f64), viewport: (f64, f64)) -> f64 {
        let (content_w, content_h) = content;
        let (view_w, view_h) = viewport;
        if content_w <= 0.0 || content_h <= 0.0 || view_w <= 0.0 || view_h <= 0.0 {
            return self.clamp(0.0);
        }

        let zoom = (view_w / content_w).min(view_h / content_h).log2();
        self.clamp((zoom / self.snap).floor() * self.snap)
    }

    /// Orthographic projection scale (world units per screen pixel)
    pub fn projection_scale(zoom: f64) -> f32 {
        2f64.powf(-zoom) as f32
    }
}

/// Shared description of the map: where the image sits, how positions map to
/// the world, and how far the view may zoom.
#[derive(Resource, Debug, Clone)]
pub struct MapSurface {
    pub crs: SimpleCrs,
    pub bounds: LatLngBounds,
    pub zoom_limits: ZoomLimits,
    pub image: String,
}

impl MapSurface {
    pub fn from_config(config: &ViewerConfigData) -> Self {
        Self {
            crs: SimpleCrs,
            bounds: LatLngBounds::from_corners(config.map_bounds),
            zoom_limits: ZoomLimits {
                min: config.min_zoom,
                max: config.max_zoom,
                snap: config.zoom_snap,
            },
            image: config.map_image.clone(),
        }
    }
}

impl Default for MapSurface {
    fn default() -> Self {
        Self::from_config(&ViewerConfigData::default())
    }
}

impl Crs for MapSurface {
    fn to_world(&self, point: LatLng) -> Vec2 {
        self.crs.to_world(point)
    }

    fn from_world(&self, world: Vec2) -> LatLng {
        self.crs.from_world(world)
    }

    fn distance(&self, a: LatLng, b: LatLng) -> f64 {
        self.crs.distance(a, b)
    }
}

/// The sprite showing the map image
#[derive(Component)]
pub struct MapOverlay;

/// Startup system to rebuild the surface from the loaded config
pub fn configure_surface(config: Res<ViewerConfig>, mut surface: ResMut<MapSurface>) {
    *surface = MapSurface::from_config(&config.data);
    debug!(
        "Map surface bounds {:?}, zoom {}..{}",
        surface.bounds, surface.zoom_limits.min, surface.zoom_limits.max
    );
}

/// Stretch the map image over the configured bounds
pub fn spawn_map_overlay(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    surface: Res<MapSurface>,
) {
    let (width, height) = surface.bounds.size();
    let center = surface.to_world(surface.bounds.center());

    commands.spawn((
        Sprite {
            image: asset_server.load(&surface.image),
            custom_size: Some(Vec2::new(width as f32, height as f32)),
            ..default()
        },
        Transform::from_translation(center.extend(Layer::Overlay.z_base())),
        MapOverlay,
    ));
    info!(
        "{} layer {} spans {} x {} m",
        Layer::Overlay.display_name(),
        surface.image,
        width,
        height
    );
}
