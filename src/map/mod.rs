//! The map surface plugin: coordinate system, image overlay and the shared
//! [`MapSurface`] resource other plugins measure and project with.

mod crs;
mod images;
mod layer;
mod popup;
mod surface;

pub use crs::{Crs, LatLng, SimpleCrs};
pub use layer::Layer;
pub use popup::{PopupState, PopupTarget};
pub use surface::{MapSurface, ZoomLimits};

use bevy::prelude::*;

use crate::config::ConfigLoaded;

/// System set for surface setup (camera and markers run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceConfigured;

pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapSurface>()
            .init_resource::<PopupState>()
            .add_systems(
                Startup,
                (surface::configure_surface, surface::spawn_map_overlay)
                    .chain()
                    .in_set(SurfaceConfigured)
                    .after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    images::detect_missing_images,
                    images::draw_missing_image_indicators,
                ),
            );
    }
}
