use std::collections::HashMap;

use eframe::egui;

use crate::{
    core::{
        Exercise,
        FieldState,
        Mark,
    },
    gui::theme::Theme,
};

/// Renders the page area: the worksheet background stretched into the
/// available rect, with one input box per field placed at its
/// percentage coordinates. Field states are addressed by field id.
pub fn worksheet(
    ui: &mut egui::Ui,
    theme: &Theme,
    exercise: &Exercise,
    states: &mut HashMap<String, FieldState>,
) {
    let page_rect = ui.available_rect_before_wrap();
    ui.allocate_rect(page_rect, egui::Sense::hover());

    match &exercise.background {
        Some(path) => {
            egui::Image::new(format!("file://{}", path)).paint_at(ui, page_rect);
        }
        None => {
            // Blank page stand-in when no image is configured
            ui.painter().rect_filled(page_rect, 4.0, ui.visuals().extreme_bg_color);
            ui.painter().rect_stroke(
                page_rect,
                4.0,
                ui.visuals().widgets.noninteractive.bg_stroke,
                egui::StrokeKind::Inside,
            );
        }
    }

    let page_size = page_rect.size();

    for field in &exercise.fields {
        let min = page_rect.min
            + egui::vec2(field.left / 100.0 * page_size.x, field.top / 100.0 * page_size.y);
        let size = egui::vec2(
            field.width / 100.0 * page_size.x,
            exercise.field_height / 100.0 * page_size.y,
        );
        let rect = egui::Rect::from_min_size(min, size);

        if field.locked {
            // Pre-filled example: shows its answer, never editable
            ui.put(
                rect,
                egui::TextEdit::singleline(&mut field.answer.as_str())
                    .id(egui::Id::new(("field", &field.id)))
                    .interactive(false),
            );
            continue;
        }

        let state = states.entry(field.id.clone()).or_default();
        ui.put(
            rect,
            egui::TextEdit::singleline(&mut state.value)
                .id(egui::Id::new(("field", &field.id)))
                .hint_text("write here"),
        );

        let mark_color = match state.mark {
            Mark::Correct => Some(theme.correct(ui.ctx())),
            Mark::Wrong => Some(theme.wrong(ui.ctx())),
            Mark::Unmarked => None,
        };
        if let Some(color) = mark_color {
            ui.painter().rect_stroke(
                rect.expand(2.0),
                3.0,
                egui::Stroke::new(2.0, color),
                egui::StrokeKind::Outside,
            );
        }
    }
}
