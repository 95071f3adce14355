//! Geometry of user-drawn shapes.

use std::fmt;

use crate::map::{Crs, LatLng};

/// Identifier handed out by the annotation collection. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The variant tag carried alongside a shape when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Path,
    Circle,
    Point,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Path => "path",
            ShapeKind::Circle => "circle",
            ShapeKind::Point => "point",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Ordered vertices of a polyline
    Path(Vec<LatLng>),
    /// Center and radius in meters
    Circle { center: LatLng, radius: f64 },
    /// A dropped marker
    Point(LatLng),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Path(_) => ShapeKind::Path,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Point(_) => ShapeKind::Point,
        }
    }

    /// Move every vertex by `delta`. Radii are unchanged.
    pub fn translate(&mut self, delta: LatLng) {
        match self {
            Shape::Path(points) => {
                for point in points.iter_mut() {
                    *point = point.offset(delta);
                }
            }
            Shape::Circle { center, .. } => *center = center.offset(delta),
            Shape::Point(point) => *point = point.offset(delta),
        }
    }

    /// Put one path vertex at `to`. False for other shapes or a bad index.
    pub fn move_vertex(&mut self, index: usize, to: LatLng) -> bool {
        match self {
            Shape::Path(points) => match points.get_mut(index) {
                Some(point) => {
                    *point = to;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Resize a circle. Non-positive radii and other shapes are refused.
    pub fn set_radius(&mut self, new_radius: f64) -> bool {
        match self {
            Shape::Circle { radius, .. } if new_radius > 0.0 => {
                *radius = new_radius;
                true
            }
            _ => false,
        }
    }

    /// Where the shape's popup points: halfway along a path, the center of a
    /// circle, or the marker itself.
    pub fn popup_anchor<C: Crs + ?Sized>(&self, crs: &C) -> LatLng {
        match self {
            Shape::Path(points) => path_midpoint(crs, points),
            Shape::Circle { center, .. } => *center,
            Shape::Point(point) => *point,
        }
    }
}

/// The point halfway along a polyline, measured by length
fn path_midpoint<C: Crs + ?Sized>(crs: &C, points: &[LatLng]) -> LatLng {
    let Some(first) = points.first() else {
        return LatLng::default();
    };

    let half = super::measure::path_length(crs, points) / 2.0;
    if half <= 0.0 {
        return *first;
    }

    let mut walked = 0.0;
    for pair in points.windows(2) {
        let segment = crs.distance(pair[0], pair[1]);
        if walked + segment >= half && segment > 0.0 {
            let t = (half - walked) / segment;
            return LatLng::new(
                pair[0].lat + (pair[1].lat - pair[0].lat) * t,
                pair[0].lng + (pair[1].lng - pair[0].lng) * t,
            );
        }
        walked += segment;
    }

    *points.last().unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::SimpleCrs;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Shape::Path(vec![]).kind(), ShapeKind::Path);
        assert_eq!(
            Shape::Circle {
                center: LatLng::default(),
                radius: 1.0
            }
            .kind(),
            ShapeKind::Circle
        );
        assert_eq!(Shape::Point(LatLng::default()).kind(), ShapeKind::Point);
    }

    #[test]
    fn test_kind_names_are_lowercase() {
        assert_eq!(ShapeKind::Path.as_str(), "path");
        assert_eq!(ShapeKind::Circle.as_str(), "circle");
        assert_eq!(ShapeKind::Point.as_str(), "point");
    }

    #[test]
    fn test_translate_moves_all_vertices() {
        let mut path = Shape::Path(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)]);
        path.translate(LatLng::new(10.0, -5.0));
        assert_eq!(
            path,
            Shape::Path(vec![LatLng::new(10.0, -5.0), LatLng::new(11.0, -4.0)])
        );
    }

    #[test]
    fn test_translate_keeps_radius() {
        let mut circle = Shape::Circle {
            center: LatLng::new(1.0, 1.0),
            radius: 50.5,
        };
        circle.translate(LatLng::new(1.0, 0.0));
        assert_eq!(
            circle,
            Shape::Circle {
                center: LatLng::new(2.0, 1.0),
                radius: 50.5
            }
        );
    }

    #[test]
    fn test_move_vertex_touches_one_point() {
        let mut path = Shape::Path(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 3.0),
            LatLng::new(4.0, 3.0),
        ]);
        assert!(path.move_vertex(1, LatLng::new(0.0, 10.0)));
        assert_eq!(
            path,
            Shape::Path(vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(0.0, 10.0),
                LatLng::new(4.0, 3.0),
            ])
        );

        assert!(!path.move_vertex(3, LatLng::default()));
        assert!(!Shape::Point(LatLng::default()).move_vertex(0, LatLng::new(1.0, 1.0)));
    }

    #[test]
    fn test_set_radius_rejects_zero() {
        let mut circle = Shape::Circle {
            center: LatLng::new(1.0, 1.0),
            radius: 5.0,
        };
        assert!(circle.set_radius(12.5));
        assert!(!circle.set_radius(0.0));
        assert_eq!(
            circle,
            Shape::Circle {
                center: LatLng::new(1.0, 1.0),
                radius: 12.5
            }
        );
        assert!(!Shape::Path(vec![]).set_radius(3.0));
    }

    #[test]
    fn test_path_anchor_is_halfway_by_length() {
        let path = Shape::Path(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 3.0),
            LatLng::new(4.0, 3.0),
        ]);
        // Total length 7, so the anchor sits 0.5 into the second segment
        assert_eq!(path.popup_anchor(&SimpleCrs), LatLng::new(0.5, 3.0));
    }

    #[test]
    fn test_single_point_path_anchor() {
        let path = Shape::Path(vec![LatLng::new(2.0, 2.0)]);
        assert_eq!(path.popup_anchor(&SimpleCrs), LatLng::new(2.0, 2.0));
    }

    #[test]
    fn test_shape_id_display() {
        assert_eq!(ShapeId(7).to_string(), "#7");
    }
}
