//! Buttons pinned to the corners of the map view.
//!
//! A control is anything implementing [`MapControl`]. Controls are registered
//! in the [`MapControls`] resource; [`map_controls_ui`] lays them out by
//! corner and hands clicks back to the control as [`Commands`], so a control
//! never needs direct access to the resources it changes.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiTextureHandle, EguiUserTextures, egui};
use std::collections::HashMap;

use crate::theme::ui::{CONTROL_ACTIVE, CONTROL_INACTIVE};

/// Distance between a corner group and the edge of the map view
const CONTROL_MARGIN: f32 = 10.0;

/// Icon size inside a control button
pub const CONTROL_ICON_SIZE: f32 = 26.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ControlCorner {
    pub fn all() -> &'static [ControlCorner] {
        &[
            ControlCorner::TopLeft,
            ControlCorner::TopRight,
            ControlCorner::BottomLeft,
            ControlCorner::BottomRight,
        ]
    }

    /// Which corner of the control group sits on the anchor point
    pub fn pivot(&self) -> egui::Align2 {
        match self {
            ControlCorner::TopLeft => egui::Align2::LEFT_TOP,
            ControlCorner::TopRight => egui::Align2::RIGHT_TOP,
            ControlCorner::BottomLeft => egui::Align2::LEFT_BOTTOM,
            ControlCorner::BottomRight => egui::Align2::RIGHT_BOTTOM,
        }
    }

    /// Anchor point inside `view`, inset by `margin`
    pub fn anchor_pos(&self, view: egui::Rect, margin: f32) -> egui::Pos2 {
        match self {
            ControlCorner::TopLeft => egui::pos2(view.left() + margin, view.top() + margin),
            ControlCorner::TopRight => egui::pos2(view.right() - margin, view.top() + margin),
            ControlCorner::BottomLeft => egui::pos2(view.left() + margin, view.bottom() - margin),
            ControlCorner::BottomRight => {
                egui::pos2(view.right() - margin, view.bottom() - margin)
            }
        }
    }
}

/// A button on the map view
pub trait MapControl: Send + Sync + 'static {
    /// Stable key for the control's egui id and icon texture
    fn id(&self) -> &'static str;

    /// Hover text
    fn title(&self) -> &str;

    fn corner(&self) -> ControlCorner;

    /// Asset path of the button icon. Text-only controls have none.
    fn icon(&self) -> Option<&str> {
        None
    }

    /// Draw the button. The default is an icon button with the title as
    /// tooltip, or a text button while the icon is unavailable. Controls
    /// with an on/off state are tinted by it.
    fn render(
        &self,
        ui: &mut egui::Ui,
        icon: Option<egui::TextureId>,
        active: Option<bool>,
    ) -> egui::Response {
        let mut button = match icon {
            Some(texture) => egui::Button::image(egui::Image::new(egui::load::SizedTexture::new(
                texture,
                egui::vec2(CONTROL_ICON_SIZE, CONTROL_ICON_SIZE),
            ))),
            None => egui::Button::new(self.title()),
        };
        if let Some(active) = active {
            button = button.fill(if active { CONTROL_ACTIVE } else { CONTROL_INACTIVE });
        }
        ui.add(button).on_hover_text(self.title())
    }

    fn on_click(&self, commands: &mut Commands);
}

/// Registered map controls, in insertion order
#[derive(Resource, Default)]
pub struct MapControls {
    controls: Vec<Box<dyn MapControl>>,
    /// On/off state for controls that have one, by control id
    active: HashMap<&'static str, bool>,
}

impl MapControls {
    pub fn add(&mut self, control: impl MapControl) {
        self.controls.push(Box::new(control));
        if let Some(added) = self.controls.last() {
            info!("Added map control {:?} ({} total)", added.title(), self.len());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn MapControl> {
        self.controls.iter().map(|c| c.as_ref())
    }

    pub fn in_corner(&self, corner: ControlCorner) -> impl Iterator<Item = &dyn MapControl> {
        self.iter().filter(move |c| c.corner() == corner)
    }

    pub fn set_active(&mut self, id: &'static str, active: bool) {
        self.active.insert(id, active);
    }

    pub fn is_active(&self, id: &str) -> Option<bool> {
        self.active.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// Icon images for controls, registered with egui
#[derive(Resource, Default)]
pub struct ControlIcons {
    handles: HashMap<&'static str, Handle<Image>>,
    texture_ids: HashMap<&'static str, egui::TextureId>,
}

impl ControlIcons {
    pub fn texture(&self, id: &str) -> Option<egui::TextureId> {
        self.texture_ids.get(id).copied()
    }
}

/// Load each control's icon once and register it with egui
pub fn load_control_icons(
    asset_server: Res<AssetServer>,
    controls: Res<MapControls>,
    mut icons: ResMut<ControlIcons>,
    mut egui_textures: ResMut<EguiUserTextures>,
) {
    for control in controls.iter() {
        if icons.handles.contains_key(control.id()) {
            continue;
        }

        let Some(path) = control.icon() else {
            continue;
        };
        let handle: Handle<Image> = asset_server.load(path.to_string());
        let texture_id = egui_textures.add_image(EguiTextureHandle::Weak(handle.id()));
        icons.handles.insert(control.id(), handle);
        icons.texture_ids.insert(control.id(), texture_id);
    }
}

/// Lay out the controls in their corners of the remaining map view
pub fn map_controls_ui(
    mut contexts: EguiContexts,
    controls: Res<MapControls>,
    icons: Res<ControlIcons>,
    mut commands: Commands,
) -> Result {
    if controls.is_empty() {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let view = ctx.available_rect();

    for corner in ControlCorner::all() {
        if controls.in_corner(*corner).next().is_none() {
            continue;
        }

        egui::Area::new(egui::Id::new(("map_controls", *corner)))
            .pivot(corner.pivot())
            .fixed_pos(corner.anchor_pos(view, CONTROL_MARGIN))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.vertical(|ui| {
                        for control in controls.in_corner(*corner) {
                            let response = control.render(
                                ui,
                                icons.texture(control.id()),
                                controls.is_active(control.id()),
                            );
                            if response.clicked() {
                                debug!("Map control {:?} clicked", control.title());
                                control.on_click(&mut commands);
                            }
                        }
                    });
                });
            });
    }

    Ok(())
}
