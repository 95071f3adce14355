//! Centralized constants used across the application.
//!
//! Defaults here mirror the hand-tuned values of the hosted Hunt map viewer;
//! most of them can be overridden from `config.json`.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Map background image, relative to the Bevy assets folder
pub const DEFAULT_MAP_IMAGE: &str = "images/Hunt_Map_Blank.jpg";

/// Overlay bounds as `[[south, west], [north, east]]` in map units (meters)
pub const DEFAULT_MAP_BOUNDS: [[f64; 2]; 2] = [[-500.0, -500.0], [500.0, 500.0]];

/// Lowest zoom level (2^zoom screen pixels per map unit)
pub const DEFAULT_MIN_ZOOM: f64 = -0.6;

/// Highest zoom level
pub const DEFAULT_MAX_ZOOM: f64 = 2.5;

/// Zoom levels are snapped to multiples of this step
pub const DEFAULT_ZOOM_SNAP: f64 = 1.0;

/// Stroke color for drawn shapes
pub const DEFAULT_SHAPE_COLOR: &str = "#650000";

/// Icon used for every point-of-interest marker
pub const DEFAULT_MARKER_ICON: &str = "images/marker.png";

/// Icon shown on the point-of-interest toggle control
pub const DEFAULT_TOGGLE_ICON: &str = "images/wrench.png";

/// Point-of-interest icons are drawn at a fixed screen size
pub const POI_ICON_SIZE: f32 = 25.0;

/// Icon anchor in pixels from the top-left corner of the icon
pub const POI_ICON_ANCHOR: [f32; 2] = [12.0, 12.0];

/// Width of the image shown in a point-of-interest popup
pub const POI_POPUP_IMAGE_WIDTH: f32 = 500.0;

/// File looked up inside an image reference that names a directory
pub const POI_DIRECTORY_IMAGE: &str = "workbench.jpg";

/// Hit area around strokes, in screen pixels
pub const SHAPE_HIT_TOLERANCE_PX: f32 = 8.0;

/// Radius of a drawn point marker, in screen pixels
pub const POINT_MARKER_RADIUS_PX: f32 = 7.0;

/// Stroke width for shapes, in screen pixels
pub const SHAPE_STROKE_WIDTH: f32 = 3.0;
