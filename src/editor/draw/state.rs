//! Drawing tool gesture state and stroke settings.

use bevy::prelude::*;

use crate::annotations::Shape;
use crate::config::ViewerConfig;
use crate::constants::SHAPE_STROKE_WIDTH;
use crate::map::{Crs, LatLng};
use crate::theme::{SELECTION_COLOR, SHAPE_STROKE};

/// How drawn shapes are stroked
#[derive(Resource, Debug)]
pub struct AnnotationSettings {
    pub stroke_color: Color,
    pub selection_color: Color,
    pub stroke_width: f32,
}

impl Default for AnnotationSettings {
    fn default() -> Self {
        Self {
            stroke_color: SHAPE_STROKE,
            selection_color: SELECTION_COLOR,
            stroke_width: SHAPE_STROKE_WIDTH,
        }
    }
}

/// Startup system to pick up the configured stroke color
pub fn apply_annotation_settings(
    config: Res<ViewerConfig>,
    mut settings: ResMut<AnnotationSettings>,
) {
    settings.stroke_color = config.data.shape_color();
}

/// What a left click does to the path being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClick {
    AddVertex,
    Finish,
    /// On the only vertex so far; a one-point path cannot finish yet
    Ignore,
}

/// Vertices of the path being drawn
#[derive(Resource, Debug, Default)]
pub struct PathDrawState {
    pub points: Vec<LatLng>,
}

impl PathDrawState {
    pub fn is_drawing(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn push(&mut self, point: LatLng) {
        self.points.push(point);
    }

    /// Drop the most recent vertex
    pub fn undo(&mut self) -> Option<LatLng> {
        self.points.pop()
    }

    pub fn cancel(&mut self) {
        self.points.clear();
    }

    /// Classify a click given whether it landed on the last vertex
    pub fn click_action(&self, on_last_vertex: bool) -> PathClick {
        match (on_last_vertex, self.points.len()) {
            (false, _) => PathClick::AddVertex,
            (true, n) if n >= 2 => PathClick::Finish,
            (true, _) => PathClick::Ignore,
        }
    }

    /// Take the finished path. Fewer than two vertices is discarded.
    pub fn finish(&mut self) -> Option<Shape> {
        let points = std::mem::take(&mut self.points);
        (points.len() >= 2).then_some(Shape::Path(points))
    }
}

/// Center of the circle being dragged out
#[derive(Resource, Debug, Default)]
pub struct CircleDrawState {
    pub center: Option<LatLng>,
}

impl CircleDrawState {
    pub fn begin(&mut self, center: LatLng) {
        self.center = Some(center);
    }

    pub fn cancel(&mut self) {
        self.center = None;
    }

    /// Close the circle at `edge`. A zero radius is discarded.
    pub fn finish<C: Crs + ?Sized>(&mut self, crs: &C, edge: LatLng) -> Option<Shape> {
        let center = self.center.take()?;
        let radius = crs.distance(center, edge);
        (radius > 0.0).then_some(Shape::Circle { center, radius })
    }
}
