//! Message-level tests for the annotation workflow.

use bevy::prelude::*;

use super::*;
use crate::map::{LatLng, MapSurface, PopupState, PopupTarget};

fn workflow_app() -> App {
    let mut app = App::new();
    app.init_resource::<MapSurface>()
        .init_resource::<PopupState>()
        .add_plugins(AnnotationPlugin);
    app
}

fn draw(app: &mut App, shape: Shape) -> ShapeId {
    app.world_mut().write_message(ShapeCreated::new(shape));
    app.update();

    app.world()
        .resource::<AnnotationCollection>()
        .iter()
        .map(|(id, _)| id)
        .max()
        .expect("shape should have been added")
}

fn label_of(app: &App, id: ShapeId) -> String {
    app.world()
        .resource::<AnnotationCollection>()
        .get(id)
        .map(|a| a.label.to_string())
        .unwrap_or_default()
}

#[test]
fn test_three_point_path_label() {
    let mut app = workflow_app();
    let id = draw(
        &mut app,
        Shape::Path(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 3.0),
            LatLng::new(4.0, 3.0),
        ]),
    );
    assert_eq!(label_of(&app, id), "Distance: 7.00 meters");
}

#[test]
fn test_circle_label() {
    let mut app = workflow_app();
    let id = draw(
        &mut app,
        Shape::Circle {
            center: LatLng::new(100.0, -20.0),
            radius: 50.5,
        },
    );
    assert_eq!(label_of(&app, id), "Radius: 50.50 meters");
}

#[test]
fn test_marker_label() {
    let mut app = workflow_app();
    let id = draw(&mut app, Shape::Point(LatLng::new(12.345, -67.891)));
    assert_eq!(label_of(&app, id), "Coordinates: [12.35, -67.89]");
}

#[test]
fn test_new_shape_popup_opens_immediately() {
    let mut app = workflow_app();
    let id = draw(&mut app, Shape::Point(LatLng::new(1.0, 2.0)));

    let popups = app.world().resource::<PopupState>();
    assert_eq!(popups.current(), Some(PopupTarget::Annotation(id)));
}

#[test]
fn test_each_created_shape_stored_once() {
    let mut app = workflow_app();

    app.world_mut()
        .write_message(ShapeCreated::new(Shape::Point(LatLng::new(0.0, 0.0))));
    app.world_mut().write_message(ShapeCreated::new(Shape::Circle {
        center: LatLng::new(0.0, 0.0),
        radius: 12.0,
    }));
    app.world_mut().write_message(ShapeCreated::new(Shape::Path(vec![
        LatLng::new(0.0, 0.0),
        LatLng::new(10.0, 0.0),
    ])));
    app.update();
    // A second frame must not replay the same messages
    app.update();

    let collection = app.world().resource::<AnnotationCollection>();
    assert_eq!(collection.len(), 3);

    let mut labels: Vec<String> = collection.iter().map(|(_, a)| a.label.to_string()).collect();
    labels.sort();
    assert_eq!(
        labels,
        vec![
            "Coordinates: [0.00, 0.00]",
            "Distance: 10.00 meters",
            "Radius: 12.00 meters",
        ]
    );
}

#[test]
fn test_remove_drops_shape_and_popup() {
    let mut app = workflow_app();
    let id = draw(&mut app, Shape::Point(LatLng::new(5.0, 5.0)));
    app.world_mut().resource_mut::<AnnotationSelection>().selected = Some(id);

    app.world_mut().write_message(RemoveShapeRequest { id });
    app.update();

    assert!(app.world().resource::<AnnotationCollection>().is_empty());
    assert!(app.world().resource::<PopupState>().current().is_none());
    assert!(app.world().resource::<AnnotationSelection>().selected.is_none());
}

#[test]
fn test_remove_keeps_unrelated_popup() {
    let mut app = workflow_app();
    let first = draw(&mut app, Shape::Point(LatLng::new(5.0, 5.0)));
    app.world_mut()
        .resource_mut::<PopupState>()
        .open(PopupTarget::PointOfInterest(0));

    app.world_mut().write_message(RemoveShapeRequest { id: first });
    app.update();

    assert_eq!(
        app.world().resource::<PopupState>().current(),
        Some(PopupTarget::PointOfInterest(0))
    );
}

#[test]
fn test_clear_removes_everything() {
    let mut app = workflow_app();
    draw(&mut app, Shape::Point(LatLng::new(5.0, 5.0)));
    draw(&mut app, Shape::Point(LatLng::new(6.0, 6.0)));

    app.world_mut().write_message(ClearShapesRequest);
    app.update();

    assert!(app.world().resource::<AnnotationCollection>().is_empty());
    assert!(app.world().resource::<PopupState>().current().is_none());
}

#[test]
fn test_label_survives_edit() {
    let mut app = workflow_app();
    let id = draw(
        &mut app,
        Shape::Path(vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 3.0)]),
    );

    app.world_mut()
        .resource_mut::<AnnotationCollection>()
        .edit_geometry(id, |shape| shape.translate(LatLng::new(100.0, 100.0)));

    assert_eq!(label_of(&app, id), "Distance: 3.00 meters");
}

#[test]
fn test_label_survives_vertex_move() {
    let mut app = workflow_app();
    let id = draw(
        &mut app,
        Shape::Path(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 3.0),
            LatLng::new(4.0, 3.0),
        ]),
    );

    // Stretch the last leg from 4 to 40 meters
    let moved = app
        .world_mut()
        .resource_mut::<AnnotationCollection>()
        .edit_geometry(id, |shape| {
            assert!(shape.move_vertex(2, LatLng::new(40.0, 3.0)));
        });
    assert!(moved);

    let collection = app.world().resource::<AnnotationCollection>();
    assert_eq!(
        collection.get(id).map(|a| a.shape.clone()),
        Some(Shape::Path(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 3.0),
            LatLng::new(40.0, 3.0),
        ]))
    );
    assert_eq!(label_of(&app, id), "Distance: 7.00 meters");
}

#[test]
fn test_label_survives_resize() {
    let mut app = workflow_app();
    let id = draw(
        &mut app,
        Shape::Circle {
            center: LatLng::new(100.0, -20.0),
            radius: 50.5,
        },
    );

    app.world_mut()
        .resource_mut::<AnnotationCollection>()
        .edit_geometry(id, |shape| {
            assert!(shape.set_radius(200.0));
        });

    let collection = app.world().resource::<AnnotationCollection>();
    assert!(matches!(
        collection.get(id).map(|a| &a.shape),
        Some(Shape::Circle { radius, .. }) if *radius == 200.0
    ));
    assert_eq!(label_of(&app, id), "Radius: 50.50 meters");
}
