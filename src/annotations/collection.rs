//! The live set of drawn shapes and their labels.

use bevy::prelude::*;
use std::collections::HashMap;

use super::measure::MeasurementLabel;
use super::shape::{Shape, ShapeId};

/// A drawn shape together with the label computed when it was drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub shape: Shape,
    pub label: MeasurementLabel,
}

/// Every shape currently on the map.
///
/// Adding a shape requires its label, so a shape can never be stored without
/// exactly one. Iteration order is unspecified.
#[derive(Resource, Debug, Default)]
pub struct AnnotationCollection {
    entries: HashMap<ShapeId, Annotation>,
    last_id: u64,
}

impl AnnotationCollection {
    pub fn add(&mut self, shape: Shape, label: MeasurementLabel) -> ShapeId {
        self.last_id += 1;
        let id = ShapeId(self.last_id);
        self.entries.insert(id, Annotation { shape, label });
        id
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<Annotation> {
        self.entries.remove(&id)
    }

    /// Remove everything, returning the ids that were present
    pub fn clear(&mut self) -> Vec<ShapeId> {
        let ids = self.entries.keys().copied().collect();
        self.entries.clear();
        ids
    }

    pub fn get(&self, id: ShapeId) -> Option<&Annotation> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Annotation)> {
        self.entries.iter().map(|(id, annotation)| (*id, annotation))
    }

    /// Replace a shape's geometry after an edit. The label is left as it was
    /// computed at creation.
    pub fn edit_geometry(&mut self, id: ShapeId, edit: impl FnOnce(&mut Shape)) -> bool {
        match self.entries.get_mut(&id) {
            Some(annotation) => {
                edit(&mut annotation.shape);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::measure::{coordinates_label, radius_label};
    use crate::map::LatLng;

    fn point(lat: f64, lng: f64) -> Shape {
        Shape::Point(LatLng::new(lat, lng))
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut collection = AnnotationCollection::default();
        let a = collection.add(point(0.0, 0.0), coordinates_label(LatLng::new(0.0, 0.0)));
        let b = collection.add(point(1.0, 1.0), coordinates_label(LatLng::new(1.0, 1.0)));
        assert_ne!(a, b);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut collection = AnnotationCollection::default();
        let a = collection.add(point(0.0, 0.0), coordinates_label(LatLng::default()));
        collection.remove(a);
        let b = collection.add(point(0.0, 0.0), coordinates_label(LatLng::default()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_returns_entry() {
        let mut collection = AnnotationCollection::default();
        let id = collection.add(point(2.0, 3.0), coordinates_label(LatLng::new(2.0, 3.0)));

        let removed = collection.remove(id).unwrap();
        assert_eq!(removed.shape, point(2.0, 3.0));
        assert!(collection.get(id).is_none());
        assert!(collection.is_empty());
        assert!(collection.remove(id).is_none());
    }

    #[test]
    fn test_clear_reports_ids() {
        let mut collection = AnnotationCollection::default();
        let a = collection.add(point(0.0, 0.0), coordinates_label(LatLng::default()));
        let b = collection.add(point(0.0, 0.0), coordinates_label(LatLng::default()));

        let mut cleared = collection.clear();
        cleared.sort();
        assert_eq!(cleared, vec![a, b]);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_edit_keeps_label() {
        let mut collection = AnnotationCollection::default();
        let shape = Shape::Circle {
            center: LatLng::default(),
            radius: 12.0,
        };
        let id = collection.add(shape, radius_label(12.0));

        let edited = collection.edit_geometry(id, |shape| {
            if let Shape::Circle { radius, .. } = shape {
                *radius = 30.0;
            }
        });

        assert!(edited);
        let annotation = collection.get(id).unwrap();
        assert_eq!(annotation.label.as_str(), "Radius: 12.00 meters");
        assert_eq!(
            annotation.shape,
            Shape::Circle {
                center: LatLng::default(),
                radius: 30.0
            }
        );
    }

    #[test]
    fn test_edit_missing_shape() {
        let mut collection = AnnotationCollection::default();
        assert!(!collection.edit_geometry(ShapeId(99), |_| {}));
    }
}
