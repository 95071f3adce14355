use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::annotations::{AnnotationCollection, ClearShapesRequest, ShapeCreated};
use crate::editor::{
    AnnotationSettings, CircleDrawState, CurrentTool, DrawTool, PathDrawState, finish_path,
};
use crate::theme::bevy_to_egui;
use crate::theme::ui::{HINT_TEXT, LABEL_TEXT, PANEL_BACKGROUND};

/// Main toolbar showing the draw tools and the annotation count
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut current_tool: ResMut<CurrentTool>,
    collection: Res<AnnotationCollection>,
    settings: Res<AnnotationSettings>,
    mut clear: MessageWriter<ClearShapesRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                // Tool buttons with keyboard shortcuts
                for tool in DrawTool::all() {
                    let selected = current_tool.tool == *tool;
                    let button = egui::Button::new(
                        egui::RichText::new(tool_button_label(tool)).size(14.0).strong(),
                    )
                    .min_size(egui::vec2(0.0, 28.0))
                    .selected(selected);

                    let response = ui.add(button);
                    if response.clicked() {
                        current_tool.tool = *tool;
                    }
                    response.on_hover_text(tool.display_name());
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                let clear_button = ui.add_enabled(
                    !collection.is_empty(),
                    egui::Button::new("Clear All").min_size(egui::vec2(0.0, 24.0)),
                );
                if clear_button.clicked() {
                    clear.write(ClearShapesRequest);
                }

                // Right-aligned annotation count with the stroke swatch
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(annotation_count_label(collection.len()))
                            .color(LABEL_TEXT),
                    );
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(rect, 2.0, bevy_to_egui(settings.stroke_color));
                });
            });
        });
    Ok(())
}

/// Secondary bar with actions and hints for the active draw tool
pub fn tool_actions_ui(
    mut contexts: EguiContexts,
    current_tool: Res<CurrentTool>,
    mut path_state: ResMut<PathDrawState>,
    mut circle_state: ResMut<CircleDrawState>,
    mut created: MessageWriter<ShapeCreated>,
) -> Result {
    let Some(hint) = tool_hint(current_tool.tool) else {
        return Ok(());
    };

    egui::TopBottomPanel::top("tool_actions")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 6))
                .fill(PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                match current_tool.tool {
                    DrawTool::Path if path_state.is_drawing() => {
                        if ui
                            .add_enabled(path_state.points.len() >= 2, egui::Button::new("Finish"))
                            .clicked()
                        {
                            finish_path(&mut path_state, &mut created);
                        }
                        if ui.button("Delete last point").clicked() {
                            path_state.undo();
                        }
                        if ui.button("Cancel").clicked() {
                            path_state.cancel();
                        }
                        ui.add_space(12.0);
                    }
                    DrawTool::Circle if circle_state.center.is_some() => {
                        if ui.button("Cancel").clicked() {
                            circle_state.cancel();
                        }
                        ui.add_space(12.0);
                    }
                    _ => {}
                }

                ui.label(egui::RichText::new(hint).color(HINT_TEXT).size(11.0));
            });
        });
    Ok(())
}

/// Short name plus shortcut for toolbar buttons
fn tool_button_label(tool: &DrawTool) -> &'static str {
    match tool {
        DrawTool::Select => "Select",
        DrawTool::Path => "Path",
        DrawTool::Circle => "Circle",
        DrawTool::Marker => "Marker",
        DrawTool::Delete => "Delete",
    }
}

fn tool_hint(tool: DrawTool) -> Option<&'static str> {
    match tool {
        DrawTool::Select => None,
        DrawTool::Path => Some(
            "Click to add points. Click the last point or press Enter to finish. Backspace: undo, Esc: cancel",
        ),
        DrawTool::Circle => Some("Press at the center and drag out the radius"),
        DrawTool::Marker => Some("Click to drop a marker"),
        DrawTool::Delete => Some("Click a shape to remove it"),
    }
}

pub fn annotation_count_label(count: usize) -> String {
    match count {
        1 => "1 annotation".to_string(),
        n => format!("{} annotations", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_count_label() {
        assert_eq!(annotation_count_label(0), "0 annotations");
        assert_eq!(annotation_count_label(1), "1 annotation");
        assert_eq!(annotation_count_label(12), "12 annotations");
    }

    #[test]
    fn test_every_tool_has_button_label() {
        for tool in DrawTool::all() {
            assert!(tool.display_name().starts_with(tool_button_label(tool)));
        }
    }

    #[test]
    fn test_select_has_no_action_bar() {
        assert!(tool_hint(DrawTool::Select).is_none());
        assert!(tool_hint(DrawTool::Path).is_some());
    }
}
