//! The static table of points of interest.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::POI_DIRECTORY_IMAGE;
use crate::map::LatLng;

/// One pre-placed location with the image shown in its popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub lat: f64,
    pub lng: f64,
    /// Image file, or a directory holding `workbench.jpg`
    pub image: String,
}

impl PointOfInterest {
    pub fn new(lat: f64, lng: f64, image: &str) -> Self {
        Self {
            lat,
            lng,
            image: image.to_string(),
        }
    }

    pub fn location(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Last non-empty component of the image reference
    pub fn title(&self) -> &str {
        self.image
            .split(['/', '\\'])
            .filter(|part| !part.is_empty())
            .next_back()
            .unwrap_or(&self.image)
    }

    /// Asset path of the popup image
    pub fn image_path(&self) -> String {
        if Path::new(&self.image).extension().is_some() && !self.image.ends_with('/') {
            return self.image.clone();
        }
        format!("{}/{}", self.image.trim_end_matches('/'), POI_DIRECTORY_IMAGE)
    }
}

const WORKBENCHES: &[(f64, f64, &str)] = &[
    (378.0, -373.0, "workbenches/Blackthorn Stockyard/"),
    (405.0, -335.0, "workbenches/Blackthorn Stockyard/"),
    (408.0, -322.0, "workbenches/Blackthorn Stockyard/"),
    (129.0, -406.0, "workbenches/Grizzly Lodge/"),
    (475.0, -12.0, "workbenches/The Gasworks/"),
    (415.0, 10.0, "workbenches/The Gasworks/"),
    (415.0, 35.0, "workbenches/The Gasworks/"),
    (405.0, -60.0, "workbenches/The Gasworks/"),
    (345.0, -60.0, "workbenches/The Gasworks/"),
    (98.0, -120.0, "workbenches/O Donovan Stone/"),
    (117.0, -103.0, "workbenches/O Donovan Stone/"),
    (207.0, 34.0, "workbenches/Monteros Malt/"),
    (255.0, 30.0, "workbenches/Monteros Malt/"),
    (230.0, 12.0, "workbenches/Monteros Malt/"),
    (406.0, 324.0, "workbenches/Terminus Railyard/"),
    (151.0, 280.0, "workbenches/East Mountain Corn/"),
    (122.0, 188.0, "workbenches/East Mountain Corn/"),
    (13.0, 282.0, "workbenches/Machine Gorge/"),
    (13.0, 87.0, "workbenches/Split River Mill/"),
    (-287.0, 342.0, "workbenches/Miners Folly/"),
    (-277.0, 346.0, "workbenches/Miners Folly/"),
    (-402.0, 160.0, "workbenches/Graystone Pit/"),
    (-378.0, 162.0, "workbenches/Graystone Pit/"),
    (-374.0, 150.0, "workbenches/Graystone Pit/"),
    (-152.0, 130.0, "workbenches/Oro Gordo Mine/"),
    (-127.0, 104.0, "workbenches/Oro Gordo Mine/"),
    (-131.0, 34.0, "workbenches/Oro Gordo Mine/"),
    (-98.0, -66.0, "workbenches/La Plata Mine/"),
    (-70.0, -74.0, "workbenches/La Plata Mine/"),
    (-93.0, -280.0, "workbenches/Deadfall Timber/"),
    (-96.0, -420.0, "workbenches/Deadfall Timber/"),
    (-141.0, -380.0, "workbenches/Deadfall Timber/"),
    (-335.0, -372.0, "workbenches/Preston Oil/"),
    (-380.0, -359.0, "workbenches/Preston Oil/"),
    (-380.0, -127.0, "workbenches/Kingfisher Foundry/"),
    (-343.0, -44.0, "workbenches/Kingfisher Foundry/"),
    (-298.0, -81.0, "workbenches/Kingfisher Foundry/"),
];

/// The built-in workbench catalogue
pub fn workbenches() -> Vec<PointOfInterest> {
    WORKBENCHES
        .iter()
        .map(|&(lat, lng, image)| PointOfInterest::new(lat, lng, image))
        .collect()
}

/// Parse a catalogue file: a JSON array of `{ "lat", "lng", "image" }`
pub fn parse_catalogue(json: &str) -> Result<Vec<PointOfInterest>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid point-of-interest catalogue: {}", e))
}

pub fn load_catalogue(path: &Path) -> Result<Vec<PointOfInterest>, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not read catalogue {:?}: {}", path, e))?;
    parse_catalogue(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapSurface;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalogue_size() {
        assert_eq!(workbenches().len(), 37);
    }

    #[test]
    fn test_builtin_compounds() {
        let compounds: HashSet<String> = workbenches()
            .iter()
            .map(|poi| poi.title().to_string())
            .collect();
        assert_eq!(compounds.len(), 16);
        assert!(compounds.contains("Blackthorn Stockyard"));
        assert!(compounds.contains("Kingfisher Foundry"));
    }

    #[test]
    fn test_builtin_entries_inside_default_bounds() {
        let bounds = MapSurface::default().bounds;
        for poi in workbenches() {
            assert!(bounds.contains(poi.location()), "{:?} is off the map", poi);
        }
    }

    #[test]
    fn test_directory_reference_resolves_to_image() {
        let poi = PointOfInterest::new(0.0, 0.0, "workbenches/Grizzly Lodge/");
        assert_eq!(poi.image_path(), "workbenches/Grizzly Lodge/workbench.jpg");
        assert_eq!(poi.title(), "Grizzly Lodge");
    }

    #[test]
    fn test_file_reference_is_used_directly() {
        let poi = PointOfInterest::new(0.0, 0.0, "workbenches/gasworks_north.png");
        assert_eq!(poi.image_path(), "workbenches/gasworks_north.png");
        assert_eq!(poi.title(), "gasworks_north.png");
    }

    #[test]
    fn test_parse_catalogue() {
        let json = r#"[{ "lat": 1.5, "lng": -2, "image": "a/b.jpg" }]"#;
        let parsed = parse_catalogue(json).unwrap();
        assert_eq!(parsed, vec![PointOfInterest::new(1.5, -2.0, "a/b.jpg")]);
    }

    #[test]
    fn test_parse_catalogue_rejects_missing_fields() {
        let err = parse_catalogue(r#"[{ "lat": 1.5 }]"#).unwrap_err();
        assert!(err.contains("catalogue"));
    }

    #[test]
    fn test_load_missing_catalogue() {
        let path = std::env::temp_dir().join("huntmap-no-such-catalogue.json");
        assert!(load_catalogue(&path).is_err());
    }
}
