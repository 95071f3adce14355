//! Coordinate reference system for the flat map image.
//!
//! The map is a plain image, not a projection of the globe: one map unit is
//! one meter, `lat` runs up the image and `lng` runs across it.

use bevy::prelude::*;

/// A map position. Under [`SimpleCrs`] this is just `(y, x)` in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Offset by a delta expressed as another position
    pub fn offset(self, delta: LatLng) -> Self {
        Self::new(self.lat + delta.lat, self.lng + delta.lng)
    }
}

/// Maps positions to world space and measures distances between them.
pub trait Crs {
    fn to_world(&self, point: LatLng) -> Vec2;
    fn from_world(&self, world: Vec2) -> LatLng;
    fn distance(&self, a: LatLng, b: LatLng) -> f64;
}

/// Identity projection with planar distances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleCrs;

impl Crs for SimpleCrs {
    fn to_world(&self, point: LatLng) -> Vec2 {
        Vec2::new(point.lng as f32, point.lat as f32)
    }

    fn from_world(&self, world: Vec2) -> LatLng {
        LatLng::new(world.y as f64, world.x as f64)
    }

    fn distance(&self, a: LatLng, b: LatLng) -> f64 {
        let dx = b.lng - a.lng;
        let dy = b.lat - a.lat;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Rectangle given by its south-west and north-east corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Build from the `[[south, west], [north, east]]` layout used in config
    pub fn from_corners(corners: [[f64; 2]; 2]) -> Self {
        let [[south, west], [north, east]] = corners;
        Self {
            south_west: LatLng::new(south, west),
            north_east: LatLng::new(north, east),
        }
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Width and height in map units
    pub fn size(&self) -> (f64, f64) {
        (
            self.north_east.lng - self.south_west.lng,
            self.north_east.lat - self.south_west.lat,
        )
    }

    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}
