//! Zoom in and out buttons, one snap step per click.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::editor::step_camera_zoom;

use super::controls::{CONTROL_ICON_SIZE, ControlCorner, MapControl, MapControls};

/// Size of the `+` and `-` glyphs
const ZOOM_GLYPH_SIZE: f32 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    fn steps(&self) -> f64 {
        match self {
            ZoomDirection::In => 1.0,
            ZoomDirection::Out => -1.0,
        }
    }
}

pub struct ZoomControl {
    direction: ZoomDirection,
}

impl ZoomControl {
    pub fn new(direction: ZoomDirection) -> Self {
        Self { direction }
    }
}

impl MapControl for ZoomControl {
    fn id(&self) -> &'static str {
        match self.direction {
            ZoomDirection::In => "zoom_in",
            ZoomDirection::Out => "zoom_out",
        }
    }

    fn title(&self) -> &str {
        match self.direction {
            ZoomDirection::In => "Zoom in",
            ZoomDirection::Out => "Zoom out",
        }
    }

    fn corner(&self) -> ControlCorner {
        ControlCorner::TopLeft
    }

    fn render(
        &self,
        ui: &mut egui::Ui,
        _icon: Option<egui::TextureId>,
        _active: Option<bool>,
    ) -> egui::Response {
        let glyph = match self.direction {
            ZoomDirection::In => "+",
            ZoomDirection::Out => "-",
        };
        let button = egui::Button::new(egui::RichText::new(glyph).size(ZOOM_GLYPH_SIZE).strong())
            .min_size(egui::vec2(CONTROL_ICON_SIZE, CONTROL_ICON_SIZE));
        ui.add(button).on_hover_text(self.title())
    }

    fn on_click(&self, commands: &mut Commands) {
        let steps = self.direction.steps();
        commands.queue(move |world: &mut World| {
            if step_camera_zoom(world, steps).is_none() {
                warn!("Zoom control clicked with no map camera");
            }
        });
    }
}

/// Startup system adding the zoom buttons
pub fn add_zoom_controls(mut controls: ResMut<MapControls>) {
    controls.add(ZoomControl::new(ZoomDirection::In));
    controls.add(ZoomControl::new(ZoomDirection::Out));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::ecs::world::CommandQueue;

    use crate::editor::{CameraZoom, MapCamera};
    use crate::map::MapSurface;

    fn click(control: &ZoomControl, world: &mut World) {
        let mut queue = CommandQueue::default();
        {
            let mut commands = Commands::new(&mut queue, world);
            control.on_click(&mut commands);
        }
        queue.apply(world);
    }

    fn camera_world(level: f64) -> (World, Entity) {
        let mut world = World::new();
        world.init_resource::<MapSurface>();
        let camera = world.spawn((MapCamera, CameraZoom::new(level))).id();
        (world, camera)
    }

    fn level(world: &World, camera: Entity) -> Option<f64> {
        world.get::<CameraZoom>(camera).map(|zoom| zoom.level)
    }

    #[test]
    fn test_zoom_in_steps_one_level() {
        let (mut world, camera) = camera_world(0.0);
        click(&ZoomControl::new(ZoomDirection::In), &mut world);
        assert_eq!(level(&world, camera), Some(1.0));
    }

    #[test]
    fn test_zoom_stops_at_limits() {
        let (mut world, camera) = camera_world(2.0);
        let zoom_in = ZoomControl::new(ZoomDirection::In);
        click(&zoom_in, &mut world);
        click(&zoom_in, &mut world);
        assert_eq!(level(&world, camera), Some(2.5));

        let (mut world, camera) = camera_world(-0.6);
        click(&ZoomControl::new(ZoomDirection::Out), &mut world);
        assert_eq!(level(&world, camera), Some(-0.6));
    }

    #[test]
    fn test_zoom_buttons_registered_top_left() {
        let mut world = World::new();
        world.init_resource::<MapControls>();
        world.run_system_once(add_zoom_controls).unwrap();

        let controls = world.resource::<MapControls>();
        let titles: Vec<&str> = controls
            .in_corner(ControlCorner::TopLeft)
            .map(|c| c.title())
            .collect();
        assert_eq!(titles, vec!["Zoom in", "Zoom out"]);
        assert!(controls.iter().all(|c| c.icon().is_none()));
    }
}
