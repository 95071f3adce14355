//! Hit testing for clicks on drawn shapes.
//!
//! Tolerances are given in screen pixels and scaled by the camera so a stroke
//! is equally easy to click at every zoom level.

use bevy::prelude::*;

use crate::annotations::{AnnotationCollection, Shape, ShapeId};
use crate::constants::{POINT_MARKER_RADIUS_PX, SHAPE_HIT_TOLERANCE_PX};
use crate::map::Crs;

/// Check if a point is within a given distance of a line segment
fn point_near_segment(point: Vec2, seg_start: Vec2, seg_end: Vec2, threshold: f32) -> bool {
    let line_vec = seg_end - seg_start;
    let line_len_sq = line_vec.length_squared();

    if line_len_sq < 0.0001 {
        // Segment is essentially a point
        return point.distance(seg_start) <= threshold;
    }

    // Project point onto line, clamped to segment
    let t = ((point - seg_start).dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    let projection = seg_start + line_vec * t;

    point.distance(projection) <= threshold
}

/// Whether a click at world position `point` lands on `shape`.
///
/// Circles count as filled; paths only near their strokes.
pub fn shape_contains<C: Crs + ?Sized>(crs: &C, shape: &Shape, point: Vec2, scale: f32) -> bool {
    let tolerance = SHAPE_HIT_TOLERANCE_PX * scale;

    match shape {
        Shape::Path(points) => {
            let world: Vec<Vec2> = points.iter().map(|p| crs.to_world(*p)).collect();
            match world.as_slice() {
                [] => false,
                [only] => point.distance(*only) <= tolerance,
                _ => world
                    .windows(2)
                    .any(|pair| point_near_segment(point, pair[0], pair[1], tolerance)),
            }
        }
        Shape::Circle { center, radius } => {
            point.distance(crs.to_world(*center)) <= *radius as f32 + tolerance
        }
        Shape::Point(location) => {
            // The pin head sits two radii above the tip
            let radius = POINT_MARKER_RADIUS_PX * scale;
            let tip = crs.to_world(*location);
            let head = tip + Vec2::new(0.0, radius * 2.0);
            point.distance(head) <= radius + tolerance || point.distance(tip) <= tolerance
        }
    }
}

/// A draggable handle on a selected shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditHandle {
    /// A path vertex, by index
    Vertex(usize),
    /// Anywhere on a circle's rim
    Radius,
}

/// The edit handle of `shape` under `point`. Markers have none.
///
/// For paths the closest vertex within reach wins, so two vertices drawn
/// close together can still both be grabbed.
pub fn edit_handle_at<C: Crs + ?Sized>(
    crs: &C,
    shape: &Shape,
    point: Vec2,
    scale: f32,
) -> Option<EditHandle> {
    let tolerance = SHAPE_HIT_TOLERANCE_PX * scale;

    match shape {
        Shape::Path(points) => points
            .iter()
            .enumerate()
            .map(|(index, p)| (index, point.distance(crs.to_world(*p))))
            .filter(|(_, distance)| *distance <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| EditHandle::Vertex(index)),
        Shape::Circle { center, radius } => {
            let from_center = point.distance(crs.to_world(*center));
            ((from_center - *radius as f32).abs() <= tolerance).then_some(EditHandle::Radius)
        }
        Shape::Point(_) => None,
    }
}

/// The most recently drawn shape under `point`, if any
pub fn topmost_shape_at<C: Crs + ?Sized>(
    collection: &AnnotationCollection,
    crs: &C,
    point: Vec2,
    scale: f32,
) -> Option<ShapeId> {
    collection
        .iter()
        .filter(|(_, annotation)| shape_contains(crs, &annotation.shape, point, scale))
        .map(|(id, _)| id)
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::annotate;
    use crate::map::{LatLng, SimpleCrs};

    #[test]
    fn test_path_hit_near_stroke() {
        let path = Shape::Path(vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 100.0)]);
        assert!(shape_contains(&SimpleCrs, &path, Vec2::new(50.0, 5.0), 1.0));
        assert!(!shape_contains(&SimpleCrs, &path, Vec2::new(50.0, 20.0), 1.0));
    }

    #[test]
    fn test_tolerance_scales_with_zoom() {
        let path = Shape::Path(vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 100.0)]);
        // 20 units away is out of reach at scale 1, in reach zoomed out to 4
        assert!(shape_contains(&SimpleCrs, &path, Vec2::new(50.0, 20.0), 4.0));
    }

    #[test]
    fn test_circle_hit_inside() {
        let circle = Shape::Circle {
            center: LatLng::new(0.0, 0.0),
            radius: 50.0,
        };
        assert!(shape_contains(&SimpleCrs, &circle, Vec2::new(10.0, 10.0), 1.0));
        assert!(!shape_contains(&SimpleCrs, &circle, Vec2::new(70.0, 0.0), 1.0));
    }

    #[test]
    fn test_point_hit_on_head_and_tip() {
        let point = Shape::Point(LatLng::new(0.0, 0.0));
        assert!(shape_contains(&SimpleCrs, &point, Vec2::new(0.0, 14.0), 1.0));
        assert!(shape_contains(&SimpleCrs, &point, Vec2::ZERO, 1.0));
        assert!(!shape_contains(&SimpleCrs, &point, Vec2::new(40.0, 0.0), 1.0));
    }

    #[test]
    fn test_vertex_handle_picks_closest() {
        let path = Shape::Path(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 10.0),
            LatLng::new(0.0, 100.0),
        ]);
        assert_eq!(
            edit_handle_at(&SimpleCrs, &path, Vec2::new(7.0, 0.0), 1.0),
            Some(EditHandle::Vertex(1))
        );
        assert_eq!(
            edit_handle_at(&SimpleCrs, &path, Vec2::new(98.0, 3.0), 1.0),
            Some(EditHandle::Vertex(2))
        );
        // On the stroke but away from any vertex
        assert_eq!(edit_handle_at(&SimpleCrs, &path, Vec2::new(50.0, 0.0), 1.0), None);
    }

    #[test]
    fn test_radius_handle_on_rim_only() {
        let circle = Shape::Circle {
            center: LatLng::new(0.0, 0.0),
            radius: 50.0,
        };
        assert_eq!(
            edit_handle_at(&SimpleCrs, &circle, Vec2::new(0.0, 47.0), 1.0),
            Some(EditHandle::Radius)
        );
        assert_eq!(edit_handle_at(&SimpleCrs, &circle, Vec2::new(10.0, 0.0), 1.0), None);
        assert_eq!(
            edit_handle_at(&SimpleCrs, &Shape::Point(LatLng::default()), Vec2::ZERO, 1.0),
            None
        );
    }

    #[test]
    fn test_topmost_prefers_newest() {
        let mut collection = AnnotationCollection::default();
        let older = annotate(
            &mut collection,
            &SimpleCrs,
            Shape::Circle {
                center: LatLng::new(0.0, 0.0),
                radius: 50.0,
            },
        );
        let newer = annotate(
            &mut collection,
            &SimpleCrs,
            Shape::Circle {
                center: LatLng::new(0.0, 10.0),
                radius: 50.0,
            },
        );

        assert_eq!(
            topmost_shape_at(&collection, &SimpleCrs, Vec2::new(5.0, 0.0), 1.0),
            Some(newer)
        );
        assert_eq!(
            topmost_shape_at(&collection, &SimpleCrs, Vec2::new(-55.0, 0.0), 1.0),
            Some(older)
        );
        assert_eq!(
            topmost_shape_at(&collection, &SimpleCrs, Vec2::new(500.0, 500.0), 1.0),
            None
        );
    }
}
