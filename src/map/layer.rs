/// Sprite layers on the map surface. Drawn shapes are gizmos and always sit
/// above every sprite layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layer {
    /// The background map image
    #[default]
    Overlay,
    /// Workbench markers and other static locations
    PointsOfInterest,
}

impl Layer {
    pub fn z_base(&self) -> f32 {
        match self {
            Layer::Overlay => 0.0,
            Layer::PointsOfInterest => 100.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Layer::Overlay => "Map",
            Layer::PointsOfInterest => "Workbenches",
        }
    }
}
