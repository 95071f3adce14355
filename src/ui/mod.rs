mod controls;
mod dialogs;
mod poi_toggle;
mod popups;
mod toolbar;
mod zoom_control;

use controls::MapControls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::{ConfigLoaded, ConfigResetNotification};
use crate::poi::{CatalogueLoadError, PoiLayer};

/// Whether a notification dialog is up. Map input pauses while it is.
#[derive(Resource, Default)]
pub struct DialogState {
    pub any_modal_open: bool,
}

/// Runs in `First` so input handlers see this frame's dialogs
fn update_dialog_state(
    config_reset: Res<ConfigResetNotification>,
    catalogue_error: Res<CatalogueLoadError>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = config_reset.show || catalogue_error.message.is_some();
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<MapControls>()
            .init_resource::<controls::ControlIcons>()
            .init_resource::<popups::PoiImages>()
            // Zoom buttons sit above the workbench toggle
            .add_systems(
                Startup,
                (zoom_control::add_zoom_controls, poi_toggle::add_poi_toggle)
                    .chain()
                    .after(ConfigLoaded),
            )
            // Register textures before the egui pass
            .add_systems(
                Update,
                (
                    controls::load_control_icons.run_if(resource_changed::<MapControls>),
                    popups::load_poi_popup_image,
                    poi_toggle::sync_poi_toggle_state.run_if(resource_changed::<PoiLayer>),
                ),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Panels first so the controls fit below them
                    toolbar::toolbar_ui,
                    toolbar::tool_actions_ui,
                    controls::map_controls_ui,
                    popups::popups_ui,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (dialogs::config_reset_notification_ui, dialogs::catalogue_error_ui)
                    .after(popups::popups_ui),
            )
            .add_systems(First, update_dialog_state);
    }
}
