use bevy::prelude::*;

use crate::annotations::{AnnotationCollection, Shape};
use crate::editor::params::MapCameraParams;
use crate::map::{Crs, LatLng};

use super::hit_detection::EditHandle;
use super::{DragHandle, DragState};

/// Apply one drag step from `from` to `to` to the grabbed part of `shape`
fn drag_shape<C: Crs + ?Sized>(
    crs: &C,
    shape: &mut Shape,
    handle: DragHandle,
    from: LatLng,
    to: LatLng,
) {
    match handle {
        DragHandle::Body => shape.translate(LatLng::new(to.lat - from.lat, to.lng - from.lng)),
        DragHandle::Edit(EditHandle::Vertex(index)) => {
            shape.move_vertex(index, to);
        }
        DragHandle::Edit(EditHandle::Radius) => {
            if let Shape::Circle { center, .. } = *shape {
                // Dragging onto the center leaves the last radius
                shape.set_radius(crs.distance(center, to));
            }
        }
    }
}

/// Move the grabbed shape, vertex or rim with the cursor. The label stays as
/// drawn.
pub fn handle_drag(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: MapCameraParams,
    mut drag_state: ResMut<DragState>,
    mut collection: ResMut<AnnotationCollection>,
) {
    let Some(id) = drag_state.moving else {
        return;
    };

    if !mouse_button.pressed(MouseButton::Left) {
        drag_state.end();
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };
    if world_pos == drag_state.last_world {
        return;
    }

    let surface = &*camera.surface;
    let from = surface.from_world(drag_state.last_world);
    let to = surface.from_world(world_pos);
    let handle = drag_state.handle;

    if !collection.edit_geometry(id, |shape| drag_shape(surface, shape, handle, from, to)) {
        // Removed mid-drag
        drag_state.end();
        return;
    }
    drag_state.last_world = world_pos;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::SimpleCrs;

    fn triangle() -> Shape {
        Shape::Path(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 3.0),
            LatLng::new(4.0, 3.0),
        ])
    }

    #[test]
    fn test_body_drag_translates() {
        let mut path = triangle();
        drag_shape(
            &SimpleCrs,
            &mut path,
            DragHandle::Body,
            LatLng::new(1.0, 1.0),
            LatLng::new(2.0, 3.0),
        );
        assert_eq!(
            path,
            Shape::Path(vec![
                LatLng::new(1.0, 2.0),
                LatLng::new(1.0, 5.0),
                LatLng::new(5.0, 5.0),
            ])
        );
    }

    #[test]
    fn test_vertex_drag_follows_cursor() {
        let mut path = triangle();
        drag_shape(
            &SimpleCrs,
            &mut path,
            DragHandle::Edit(EditHandle::Vertex(2)),
            LatLng::new(4.0, 3.0),
            LatLng::new(8.0, 6.0),
        );
        assert_eq!(
            path,
            Shape::Path(vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(0.0, 3.0),
                LatLng::new(8.0, 6.0),
            ])
        );
    }

    #[test]
    fn test_rim_drag_sets_radius_to_cursor() {
        let mut circle = Shape::Circle {
            center: LatLng::new(10.0, 10.0),
            radius: 2.0,
        };
        drag_shape(
            &SimpleCrs,
            &mut circle,
            DragHandle::Edit(EditHandle::Radius),
            LatLng::new(12.0, 10.0),
            LatLng::new(13.0, 14.0),
        );
        assert_eq!(
            circle,
            Shape::Circle {
                center: LatLng::new(10.0, 10.0),
                radius: 5.0,
            }
        );

        // Collapsing onto the center keeps the last radius
        drag_shape(
            &SimpleCrs,
            &mut circle,
            DragHandle::Edit(EditHandle::Radius),
            LatLng::new(13.0, 14.0),
            LatLng::new(10.0, 10.0),
        );
        assert!(matches!(circle, Shape::Circle { radius, .. } if radius == 5.0));
    }
}
