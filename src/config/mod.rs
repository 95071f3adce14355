use bevy::color::Srgba;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_MAP_BOUNDS, DEFAULT_MAP_IMAGE, DEFAULT_MARKER_ICON, DEFAULT_MAX_ZOOM,
    DEFAULT_MIN_ZOOM, DEFAULT_SHAPE_COLOR, DEFAULT_TOGGLE_ICON, DEFAULT_ZOOM_SNAP,
};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Viewer configuration read from `config.json`.
///
/// Every field is optional in the file; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfigData {
    /// Background image, relative to the Bevy assets folder
    pub map_image: String,

    /// Overlay bounds as `[[south, west], [north, east]]`
    pub map_bounds: [[f64; 2]; 2],

    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_snap: f64,

    /// Hex stroke color for drawn shapes (`#rrggbb`)
    pub shape_color: String,

    pub marker_icon: String,
    pub toggle_icon: String,

    /// Optional JSON catalogue replacing the built-in workbench table
    pub poi_catalogue: Option<PathBuf>,

    /// Whether the point-of-interest layer starts visible
    pub poi_layer_visible: bool,
}

impl Default for ViewerConfigData {
    fn default() -> Self {
        Self {
            map_image: DEFAULT_MAP_IMAGE.to_string(),
            map_bounds: DEFAULT_MAP_BOUNDS,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_snap: DEFAULT_ZOOM_SNAP,
            shape_color: DEFAULT_SHAPE_COLOR.to_string(),
            marker_icon: DEFAULT_MARKER_ICON.to_string(),
            toggle_icon: DEFAULT_TOGGLE_ICON.to_string(),
            poi_catalogue: None,
            poi_layer_visible: true,
        }
    }
}

impl ViewerConfigData {
    /// Check values serde cannot: bound ordering, zoom range, color syntax.
    pub fn validate(&self) -> Result<(), String> {
        let [[south, west], [north, east]] = self.map_bounds;
        if south >= north || west >= east {
            return Err(format!(
                "map_bounds must be [[south, west], [north, east]], got {:?}",
                self.map_bounds
            ));
        }
        if self.min_zoom > self.max_zoom {
            return Err(format!(
                "min_zoom ({}) is greater than max_zoom ({})",
                self.min_zoom, self.max_zoom
            ));
        }
        if self.zoom_snap <= 0.0 {
            return Err(format!("zoom_snap must be positive, got {}", self.zoom_snap));
        }
        Srgba::hex(&self.shape_color)
            .map_err(|e| format!("Invalid shape_color {:?}: {}", self.shape_color, e))?;
        Ok(())
    }

    /// Stroke color for drawn shapes
    pub fn shape_color(&self) -> Color {
        Srgba::hex(&self.shape_color)
            .map(Color::Srgba)
            .unwrap_or(crate::theme::SHAPE_STROKE)
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct ViewerConfig {
    /// The loaded configuration data
    pub data: ViewerConfigData,
    /// Path the configuration was read from
    pub config_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data: ViewerConfigData::default(),
            config_path: crate::paths::config_file(),
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Parse and validate config JSON
pub fn parse_config(json: &str) -> Result<ViewerConfigData, String> {
    let data: ViewerConfigData =
        serde_json::from_str(json).map_err(|e| format!("Configuration file was corrupted: {}", e))?;
    data.validate()
        .map_err(|e| format!("Configuration file has invalid values: {}", e))?;
    Ok(data)
}

/// Result of loading config from disk
pub struct LoadConfigResult {
    pub data: ViewerConfigData,
    /// Error message if config was reset to defaults due to an error
    pub reset_reason: Option<String>,
}

/// Load configuration from disk, falling back to defaults on any error
pub fn load_config(config_path: &Path) -> LoadConfigResult {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return LoadConfigResult {
            data: ViewerConfigData::default(),
            reset_reason: None,
        };
    }

    let parsed = std::fs::read_to_string(config_path)
        .map_err(|e| format!("Could not read configuration file: {}", e))
        .and_then(|json| parse_config(&json));

    match parsed {
        Ok(data) => {
            info!("Loaded config from {:?}", config_path);
            LoadConfigResult {
                data,
                reset_reason: None,
            }
        }
        Err(reason) => {
            warn!("{}", reason);
            LoadConfigResult {
                data: ViewerConfigData::default(),
                reset_reason: Some(reason),
            }
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<ViewerConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;

    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_hosted_viewer() {
        let data = ViewerConfigData::default();
        assert_eq!(data.map_image, "images/Hunt_Map_Blank.jpg");
        assert_eq!(data.map_bounds, [[-500.0, -500.0], [500.0, 500.0]]);
        assert_eq!(data.min_zoom, -0.6);
        assert_eq!(data.max_zoom, 2.5);
        assert_eq!(data.shape_color, "#650000");
        assert_eq!(data.marker_icon, "images/marker.png");
        assert_eq!(data.toggle_icon, "images/wrench.png");
        assert!(data.poi_catalogue.is_none());
        assert!(data.poi_layer_visible);
    }

    #[test]
    fn test_defaults_validate() {
        assert!(ViewerConfigData::default().validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let data = parse_config(r#"{ "max_zoom": 4.0, "poi_layer_visible": false }"#).unwrap();
        assert_eq!(data.max_zoom, 4.0);
        assert!(!data.poi_layer_visible);
        assert_eq!(data.min_zoom, -0.6);
        assert_eq!(data.map_image, "images/Hunt_Map_Blank.jpg");
    }

    #[test]
    fn test_corrupt_config_is_rejected() {
        let err = parse_config("{ not json").unwrap_err();
        assert!(err.contains("corrupted"));
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let err = parse_config(r#"{ "map_bounds": [[500, -500], [-500, 500]] }"#).unwrap_err();
        assert!(err.contains("map_bounds"));
    }

    #[test]
    fn test_inverted_zoom_range_is_rejected() {
        let err = parse_config(r#"{ "min_zoom": 3, "max_zoom": 1 }"#).unwrap_err();
        assert!(err.contains("min_zoom"));
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = parse_config(r##"{ "shape_color": "#zzzzzz" }"##).unwrap_err();
        assert!(err.contains("shape_color"));
    }

    #[test]
    fn test_shape_color_parses_hex() {
        let color = ViewerConfigData::default().shape_color().to_srgba();
        assert!((color.red - 0x65 as f32 / 255.0).abs() < 0.001);
        assert_eq!(color.green, 0.0);
        assert_eq!(color.blue, 0.0);
    }

    #[test]
    fn test_missing_file_uses_defaults_without_notification() {
        let path = std::env::temp_dir().join("huntmap-config-does-not-exist.json");
        let result = load_config(&path);
        assert_eq!(result.data, ViewerConfigData::default());
        assert!(result.reset_reason.is_none());
    }

    #[test]
    fn test_corrupt_file_resets_with_reason() {
        let path = std::env::temp_dir().join(format!(
            "huntmap-corrupt-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "]]").unwrap();

        let result = load_config(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(result.data, ViewerConfigData::default());
        assert!(result.reset_reason.is_some());
    }

    #[test]
    fn test_config_reset_notification_default() {
        let notification = ConfigResetNotification::default();
        assert!(!notification.show);
        assert!(notification.reason.is_none());
    }
}
