//! Centralized color theme for the application.
//!
//! This module provides all colors used by the viewer UI and gizmo rendering.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Shape Colors
// ============================================================================

/// Dark red stroke used when the configured color cannot be parsed
pub const SHAPE_STROKE: Color = Color::srgb(0x65 as f32 / 255.0, 0.0, 0.0);

/// Light blue for the selected shape
pub const SELECTION_COLOR: Color = Color::srgb(0.2, 0.6, 1.0);

/// Faded stroke for in-progress draw gestures
pub const DRAW_PREVIEW_ALPHA: f32 = 0.5;

// ============================================================================
// Overlay Colors
// ============================================================================

/// Red outline drawn where an image failed to load
pub const MISSING_IMAGE_BORDER: Color = Color::srgba(1.0, 0.3, 0.3, 0.9);

/// Clear color behind the map image
pub const MAP_BACKGROUND: Color = Color::srgb(0.1, 0.1, 0.1);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// Dark grey panel background (tool actions bar)
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

    /// Control button background when its layer is hidden
    pub const CONTROL_INACTIVE: egui::Color32 = egui::Color32::from_rgb(90, 90, 90);

    /// Control button background when its layer is shown
    pub const CONTROL_ACTIVE: egui::Color32 = egui::Color32::from_rgb(235, 235, 235);

    /// Red for error messages
    pub const ERROR_TEXT: egui::Color32 = egui::Color32::RED;
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (preserving alpha)
pub fn bevy_to_egui(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        (srgba.alpha * 255.0) as u8,
    )
}
