//! Pre-placed points of interest shown as icon markers in one toggleable
//! layer. Each marker opens a popup with a photo of the location.
//!
//! The layer is independent of the user's annotations: hiding it never
//! touches the [`AnnotationCollection`](crate::annotations::AnnotationCollection).

mod catalogue;
mod layer;

// Re-exports - Types
pub use catalogue::PointOfInterest;
pub use layer::{CatalogueLoadError, PoiCatalogue, PoiLayer, poi_at};

use bevy::prelude::*;

use crate::config::ConfigLoaded;
use crate::map::SurfaceConfigured;

pub struct PoiPlugin;

impl Plugin for PoiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PoiLayer>()
            .init_resource::<PoiCatalogue>()
            .init_resource::<CatalogueLoadError>()
            .add_systems(
                Startup,
                (layer::load_poi_catalogue, layer::spawn_poi_markers)
                    .chain()
                    .after(ConfigLoaded)
                    .after(SurfaceConfigured),
            )
            .add_systems(
                Update,
                (
                    layer::sync_poi_visibility.run_if(resource_changed::<PoiLayer>),
                    layer::scale_poi_markers,
                ),
            );
    }
}
