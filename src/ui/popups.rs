//! Popup bubbles pinned to shapes and point-of-interest markers.

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiTextureHandle, EguiUserTextures, egui};
use std::collections::HashMap;

use crate::annotations::{AnnotationCollection, Shape};
use crate::constants::{POI_ICON_SIZE, POI_POPUP_IMAGE_WIDTH, POINT_MARKER_RADIUS_PX};
use crate::editor::params::MapCameraParams;
use crate::map::{LatLng, PopupState, PopupTarget};
use crate::poi::{PoiCatalogue, PointOfInterest};
use crate::theme::ui::{ERROR_TEXT, HINT_TEXT, LABEL_TEXT};

/// Gap between a popup's tip and the thing it points at
const POPUP_GAP: f32 = 6.0;

/// Popup images, loaded the first time each marker is opened
#[derive(Resource, Default)]
pub struct PoiImages {
    loaded: HashMap<usize, (Handle<Image>, egui::TextureId)>,
}

/// Load and register the image for an open marker popup
pub fn load_poi_popup_image(
    popups: Res<PopupState>,
    catalogue: Res<PoiCatalogue>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<PoiImages>,
    mut egui_textures: ResMut<EguiUserTextures>,
) {
    let Some(PopupTarget::PointOfInterest(index)) = popups.current() else {
        return;
    };
    if images.loaded.contains_key(&index) {
        return;
    }
    let Some(poi) = catalogue.get(index) else {
        return;
    };

    let path = poi.image_path();
    debug!("Loading popup image {}", path);
    let handle: Handle<Image> = asset_server.load(path);
    let texture_id = egui_textures.add_image(EguiTextureHandle::Weak(handle.id()));
    images.loaded.insert(index, (handle, texture_id));
}

/// Height for an image shown at the popup width, keeping its aspect ratio
pub fn popup_image_height(size: Vec2) -> f32 {
    if size.x <= 0.0 {
        return 0.0;
    }
    POI_POPUP_IMAGE_WIDTH * size.y / size.x
}

fn show_popup(
    ctx: &egui::Context,
    tip: egui::Pos2,
    add_contents: impl FnOnce(&mut egui::Ui) -> bool,
) -> bool {
    let mut close = false;
    egui::Area::new(egui::Id::new("map_popup"))
        .pivot(egui::Align2::CENTER_BOTTOM)
        .fixed_pos(tip)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                close = add_contents(ui);
            });
        });
    close
}

fn close_button(ui: &mut egui::Ui) -> bool {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        ui.small_button("x").on_hover_text("Close").clicked()
    })
    .inner
}

fn poi_contents(
    ui: &mut egui::Ui,
    poi: &PointOfInterest,
    image: Option<&(Handle<Image>, egui::TextureId)>,
    assets: &Assets<Image>,
    asset_server: &AssetServer,
) -> bool {
    let close = ui
        .horizontal(|ui| {
            ui.label(egui::RichText::new(poi.title()).strong().color(LABEL_TEXT));
            close_button(ui)
        })
        .inner;

    match image {
        Some((handle, texture_id)) => {
            if let Some(loaded) = assets.get(handle) {
                let size = egui::vec2(
                    POI_POPUP_IMAGE_WIDTH,
                    popup_image_height(loaded.size_f32()),
                );
                ui.add(egui::Image::new(egui::load::SizedTexture::new(
                    *texture_id,
                    size,
                )));
            } else if let LoadState::Failed(_) = asset_server.load_state(handle) {
                ui.label(
                    egui::RichText::new(format!("Image not found: {}", poi.image_path()))
                        .color(ERROR_TEXT),
                );
            } else {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new("Loading image...").color(HINT_TEXT));
                });
            }
        }
        None => {
            ui.spinner();
        }
    }

    close
}

/// Draw whichever popup is open above its shape or marker
#[allow(clippy::too_many_arguments)]
pub fn popups_ui(
    mut contexts: EguiContexts,
    mut popups: ResMut<PopupState>,
    collection: Res<AnnotationCollection>,
    catalogue: Res<PoiCatalogue>,
    images: Res<PoiImages>,
    assets: Res<Assets<Image>>,
    asset_server: Res<AssetServer>,
    camera: MapCameraParams,
) -> Result {
    let Some(target) = popups.current() else {
        return Ok(());
    };

    // Anchor on the map and screen distance from it to the popup tip
    let (anchor, lift): (LatLng, f32) = match target {
        PopupTarget::Annotation(id) => {
            let Some(annotation) = collection.get(id) else {
                return Ok(());
            };
            let lift = if matches!(annotation.shape, Shape::Point(_)) {
                POINT_MARKER_RADIUS_PX * 3.0
            } else {
                0.0
            };
            (annotation.shape.popup_anchor(&*camera.surface), lift)
        }
        PopupTarget::PointOfInterest(index) => {
            let Some(poi) = catalogue.get(index) else {
                return Ok(());
            };
            (poi.location(), POI_ICON_SIZE / 2.0)
        }
    };

    let Some(screen) = camera.to_screen(anchor) else {
        return Ok(());
    };
    let tip = egui::pos2(screen.x, screen.y - lift - POPUP_GAP);
    let ctx = contexts.ctx_mut()?;

    let close = match target {
        PopupTarget::Annotation(id) => {
            let label = collection
                .get(id)
                .map(|a| a.label.to_string())
                .unwrap_or_default();
            show_popup(ctx, tip, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(label).color(LABEL_TEXT));
                    close_button(ui)
                })
                .inner
            })
        }
        PopupTarget::PointOfInterest(index) => match catalogue.get(index) {
            Some(poi) => show_popup(ctx, tip, |ui| {
                poi_contents(ui, poi, images.loaded.get(&index), &assets, &asset_server)
            }),
            None => false,
        },
    };

    if close {
        popups.close();
    }

    Ok(())
}
