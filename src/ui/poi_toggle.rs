//! The map control that shows and hides the workbench markers.

use bevy::prelude::*;

use crate::config::ViewerConfig;
use crate::poi::PoiLayer;

use super::controls::{ControlCorner, MapControl, MapControls};

pub const POI_TOGGLE_ID: &str = "poi_toggle";

pub struct PoiToggleControl {
    icon: String,
}

impl PoiToggleControl {
    pub fn new(icon: impl Into<String>) -> Self {
        Self { icon: icon.into() }
    }
}

impl MapControl for PoiToggleControl {
    fn id(&self) -> &'static str {
        POI_TOGGLE_ID
    }

    fn title(&self) -> &str {
        "Show/Hide Workbenches"
    }

    fn corner(&self) -> ControlCorner {
        ControlCorner::TopLeft
    }

    fn icon(&self) -> Option<&str> {
        Some(self.icon.as_str())
    }

    fn on_click(&self, commands: &mut Commands) {
        commands.queue(|world: &mut World| {
            let visible = world.resource_mut::<PoiLayer>().toggle();
            info!(
                "Workbench markers {}",
                if visible { "shown" } else { "hidden" }
            );
        });
    }
}

/// Startup system adding the toggle with the configured icon
pub fn add_poi_toggle(config: Res<ViewerConfig>, mut controls: ResMut<MapControls>) {
    controls.add(PoiToggleControl::new(config.data.toggle_icon.clone()));
}

/// Tint the toggle by the layer's visibility
pub fn sync_poi_toggle_state(layer: Res<PoiLayer>, mut controls: ResMut<MapControls>) {
    controls.set_active(POI_TOGGLE_ID, layer.is_visible());
}
