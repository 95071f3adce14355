//! One-shot notification dialogs for recoverable startup problems.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::{ConfigResetNotification, ViewerConfig};
use crate::poi::CatalogueLoadError;
use crate::theme::ui::{ERROR_TEXT, HINT_TEXT};

/// Shown when `config.json` could not be used and defaults were loaded
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
    config: Res<ViewerConfig>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Configuration Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("The configuration file could not be used. Default settings are in effect.");

            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).color(ERROR_TEXT));
            }

            ui.add_space(5.0);
            let path_str = config.config_path.to_string_lossy();
            ui.label(egui::RichText::new(path_str.as_ref()).color(HINT_TEXT));
            ui.add_space(10.0);

            if ui.button("OK").clicked() {
                notification.show = false;
            }
        });

    Ok(())
}

/// Shown when the configured catalogue failed and the built-in one was used
pub fn catalogue_error_ui(
    mut contexts: EguiContexts,
    mut load_error: ResMut<CatalogueLoadError>,
) -> Result {
    let Some(message) = load_error.message.clone() else {
        return Ok(());
    };

    egui::Window::new("Workbench Catalogue")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("The configured catalogue could not be loaded. Showing the built-in workbenches.");
            ui.add_space(5.0);
            ui.label(egui::RichText::new(message).color(ERROR_TEXT));
            ui.add_space(10.0);

            if ui.button("OK").clicked() {
                load_error.message = None;
            }
        });

    Ok(())
}
