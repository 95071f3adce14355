//! The toggleable layer of point-of-interest markers.

use bevy::prelude::*;

use crate::config::ViewerConfig;
use crate::constants::{POI_ICON_ANCHOR, POI_ICON_SIZE};
use crate::editor::CameraZoom;
use crate::map::{Crs, Layer, MapSurface, PopupState, PopupTarget};
use crate::paths;

use super::catalogue::{PointOfInterest, load_catalogue, workbenches};

/// Visibility of the whole marker layer
#[derive(Resource, Debug)]
pub struct PoiLayer {
    visible: bool,
}

impl Default for PoiLayer {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl PoiLayer {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Flip visibility and return the new state
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

/// Loaded catalogue entries, indexed by [`PoiMarker::index`]
#[derive(Resource, Debug, Default)]
pub struct PoiCatalogue {
    pub entries: Vec<PointOfInterest>,
}

impl PoiCatalogue {
    pub fn get(&self, index: usize) -> Option<&PointOfInterest> {
        self.entries.get(index)
    }
}

/// Resource to notify the user that the configured catalogue was unusable
#[derive(Resource, Default)]
pub struct CatalogueLoadError {
    pub message: Option<String>,
}

/// Marker sprite for one catalogue entry
#[derive(Component, Debug)]
pub struct PoiMarker {
    pub index: usize,
}

/// Offset from the icon anchor to the icon center, in screen pixels
/// (world axes: `y` points up)
pub fn marker_offset() -> Vec2 {
    let half = POI_ICON_SIZE / 2.0;
    Vec2::new(half - POI_ICON_ANCHOR[0], POI_ICON_ANCHOR[1] - half)
}

/// Whether world position `point` falls on the icon anchored at `anchor`
pub fn marker_contains(anchor: Vec2, point: Vec2, scale: f32) -> bool {
    let center = anchor + marker_offset() * scale;
    let half = POI_ICON_SIZE / 2.0 * scale;
    let d = (point - center).abs();
    d.x <= half && d.y <= half
}

/// Index of the marker under `point`, preferring the one drawn last
pub fn poi_at<C: Crs + ?Sized>(
    catalogue: &PoiCatalogue,
    layer: &PoiLayer,
    crs: &C,
    point: Vec2,
    scale: f32,
) -> Option<usize> {
    if !layer.is_visible() {
        return None;
    }

    catalogue
        .entries
        .iter()
        .enumerate()
        .rev()
        .find(|(_, poi)| marker_contains(crs.to_world(poi.location()), point, scale))
        .map(|(index, _)| index)
}

/// Startup system: built-in table, or the configured catalogue file
pub fn load_poi_catalogue(
    config: Res<ViewerConfig>,
    surface: Res<MapSurface>,
    mut catalogue: ResMut<PoiCatalogue>,
    mut layer: ResMut<PoiLayer>,
    mut load_error: ResMut<CatalogueLoadError>,
) {
    layer.set_visible(config.data.poi_layer_visible);

    catalogue.entries = match &config.data.poi_catalogue {
        Some(path) => {
            let path = paths::resolve_config_relative(path);
            match load_catalogue(&path) {
                Ok(entries) => {
                    info!("Loaded {} points of interest from {:?}", entries.len(), path);
                    entries
                }
                Err(e) => {
                    warn!("{}; using built-in workbenches", e);
                    load_error.message = Some(e);
                    workbenches()
                }
            }
        }
        None => workbenches(),
    };

    for poi in &catalogue.entries {
        if !surface.bounds.contains(poi.location()) {
            warn!(
                "{} at [{}, {}] lies outside the map image",
                poi.title(),
                poi.lat,
                poi.lng
            );
        }
    }
}

pub fn spawn_poi_markers(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
    catalogue: Res<PoiCatalogue>,
    surface: Res<MapSurface>,
    layer: Res<PoiLayer>,
) {
    let icon: Handle<Image> = asset_server.load(&config.data.marker_icon);
    let visibility = if layer.is_visible() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    for (index, poi) in catalogue.entries.iter().enumerate() {
        let anchor = surface.to_world(poi.location());
        commands.spawn((
            Sprite {
                image: icon.clone(),
                custom_size: Some(Vec2::splat(POI_ICON_SIZE)),
                ..default()
            },
            Transform::from_translation(
                (anchor + marker_offset()).extend(Layer::PointsOfInterest.z_base()),
            ),
            visibility,
            PoiMarker { index },
        ));
    }
    debug!(
        "Spawned {} markers on the {} layer",
        catalogue.entries.len(),
        Layer::PointsOfInterest.display_name()
    );
}

/// Show or hide every marker when the layer is toggled
pub fn sync_poi_visibility(
    layer: Res<PoiLayer>,
    mut markers: Query<&mut Visibility, With<PoiMarker>>,
    mut popups: ResMut<PopupState>,
) {
    let new_visibility = if layer.is_visible() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    for mut visibility in markers.iter_mut() {
        if *visibility != new_visibility {
            *visibility = new_visibility;
        }
    }

    // A hidden marker can't keep its popup
    if !layer.is_visible() && matches!(popups.current(), Some(PopupTarget::PointOfInterest(_))) {
        popups.close();
    }
}

/// Keep icons a constant size on screen
pub fn scale_poi_markers(
    camera_query: Query<&CameraZoom>,
    catalogue: Res<PoiCatalogue>,
    surface: Res<MapSurface>,
    mut markers: Query<(&PoiMarker, &mut Transform)>,
) {
    let Ok(zoom) = camera_query.single() else {
        return;
    };
    let scale = zoom.scale();

    for (marker, mut transform) in markers.iter_mut() {
        let Some(poi) = catalogue.get(marker.index) else {
            continue;
        };
        let position = surface.to_world(poi.location()) + marker_offset() * scale;
        transform.translation.x = position.x;
        transform.translation.y = position.y;
        transform.scale = Vec3::new(scale, scale, 1.0);
    }
}
