//! Which popup is showing. Like a web map, opening one popup closes the other.

use bevy::prelude::*;

use crate::annotations::ShapeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupTarget {
    /// A drawn shape's measurement label
    Annotation(ShapeId),
    /// A point-of-interest marker, by catalogue index
    PointOfInterest(usize),
}

#[derive(Resource, Debug, Default)]
pub struct PopupState {
    open: Option<PopupTarget>,
}

impl PopupState {
    pub fn open(&mut self, target: PopupTarget) {
        self.open = Some(target);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Close the popup only if it belongs to `target`
    pub fn close_if(&mut self, target: PopupTarget) -> bool {
        if self.open == Some(target) {
            self.open = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<PopupTarget> {
        self.open
    }
}
