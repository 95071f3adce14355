use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use crate::annotations::AnnotationSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawTool {
    #[default]
    Select,
    Path,
    Circle,
    Marker,
    Delete,
}

impl DrawTool {
    pub fn display_name(&self) -> &'static str {
        match self {
            DrawTool::Select => "Select (V)",
            DrawTool::Path => "Path (L)",
            DrawTool::Circle => "Circle (C)",
            DrawTool::Marker => "Marker (M)",
            DrawTool::Delete => "Delete (X)",
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        let icon = match self {
            _ if self.creates_shapes() => SystemCursorIcon::Crosshair,
            DrawTool::Delete => SystemCursorIcon::NotAllowed,
            _ => SystemCursorIcon::Default,
        };
        CursorIcon::System(icon)
    }

    pub fn shortcut(&self) -> KeyCode {
        match self {
            DrawTool::Select => KeyCode::KeyV,
            DrawTool::Path => KeyCode::KeyL,
            DrawTool::Circle => KeyCode::KeyC,
            DrawTool::Marker => KeyCode::KeyM,
            DrawTool::Delete => KeyCode::KeyX,
        }
    }

    pub fn all() -> &'static [DrawTool] {
        &[
            DrawTool::Select,
            DrawTool::Path,
            DrawTool::Circle,
            DrawTool::Marker,
            DrawTool::Delete,
        ]
    }

    /// Tools that end in a `ShapeCreated` message
    pub fn creates_shapes(&self) -> bool {
        matches!(self, DrawTool::Path | DrawTool::Circle | DrawTool::Marker)
    }
}

#[derive(Resource, Default)]
pub struct CurrentTool {
    pub tool: DrawTool,
}

pub fn handle_tool_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut current_tool: ResMut<CurrentTool>,
    mut selection: ResMut<AnnotationSelection>,
    mut contexts: EguiContexts,
) {
    // Don't change tools if typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let Some(tool) = DrawTool::all()
        .iter()
        .copied()
        .find(|tool| keyboard.just_pressed(tool.shortcut()))
    else {
        return;
    };

    if tool == current_tool.tool {
        return;
    }

    // Selection only means something in Select mode
    selection.selected = None;
    current_tool.tool = tool;
    debug!("Switched to {}", tool.display_name());
}

pub fn update_cursor_icon(
    current_tool: Res<CurrentTool>,
    window_query: Query<Entity, With<PrimaryWindow>>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok(entity) = window_query.single() else {
        return;
    };

    // Use default cursor over UI, tool cursor over the map
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        commands
            .entity(entity)
            .insert(CursorIcon::System(SystemCursorIcon::Default));
        return;
    }

    commands.entity(entity).insert(current_tool.tool.cursor_icon());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_names_contain_shortcuts() {
        for tool in DrawTool::all() {
            let name = tool.display_name();
            assert!(name.contains('('), "Display name should contain shortcut: {}", name);
            assert!(name.contains(')'), "Display name should contain shortcut: {}", name);
        }
    }

    #[test]
    fn test_shortcuts_are_unique() {
        let keys: HashSet<KeyCode> = DrawTool::all().iter().map(|t| t.shortcut()).collect();
        assert_eq!(keys.len(), DrawTool::all().len());
    }

    #[test]
    fn test_default_tool_is_select() {
        assert_eq!(DrawTool::default(), DrawTool::Select);
        assert_eq!(CurrentTool::default().tool, DrawTool::Select);
    }

    #[test]
    fn test_creates_shapes() {
        assert!(DrawTool::Path.creates_shapes());
        assert!(DrawTool::Circle.creates_shapes());
        assert!(DrawTool::Marker.creates_shapes());
        assert!(!DrawTool::Select.creates_shapes());
        assert!(!DrawTool::Delete.creates_shapes());
    }

    #[test]
    fn test_drawing_tools_have_crosshair() {
        for tool in DrawTool::all().iter().filter(|t| t.creates_shapes()) {
            assert_eq!(
                tool.cursor_icon(),
                CursorIcon::System(SystemCursorIcon::Crosshair)
            );
        }
    }
}
