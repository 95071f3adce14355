//! Measurements shown in shape popups.
//!
//! Values are printed with two decimals after rounding half away from zero,
//! so a marker dropped at `12.345` reads `12.35` rather than the `12.34` that
//! plain binary formatting would give.

use std::fmt;

use crate::map::{Crs, LatLng};

use super::shape::Shape;

/// Popup text derived from a shape's geometry when it was drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementLabel(String);

impl MeasurementLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MeasurementLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Round to two decimals, half away from zero. Negative zero becomes zero.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format with exactly two decimals
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// Sum of the distances between consecutive vertices.
///
/// Fewer than two vertices measure zero.
pub fn path_length<C: Crs + ?Sized>(crs: &C, points: &[LatLng]) -> f64 {
    points
        .windows(2)
        .map(|pair| crs.distance(pair[0], pair[1]))
        .sum()
}

pub fn distance_label(length: f64) -> MeasurementLabel {
    MeasurementLabel(format!("Distance: {} meters", fixed2(length)))
}

pub fn radius_label(radius: f64) -> MeasurementLabel {
    MeasurementLabel(format!("Radius: {} meters", fixed2(radius)))
}

pub fn coordinates_label(point: LatLng) -> MeasurementLabel {
    MeasurementLabel(format!(
        "Coordinates: [{}, {}]",
        fixed2(point.lat),
        fixed2(point.lng)
    ))
}

/// Measure a freshly drawn shape
pub fn measure<C: Crs + ?Sized>(crs: &C, shape: &Shape) -> MeasurementLabel {
    match shape {
        Shape::Path(points) => distance_label(path_length(crs, points)),
        Shape::Circle { radius, .. } => radius_label(*radius),
        Shape::Point(point) => coordinates_label(*point),
    }
}
