use eframe::egui;
use egui_flex::{
    item,
    Flex,
};

use crate::gui::theme::Theme;

/// Draws the word bank as a wrapping row of inert tag pills, one per
/// entry, in list order. An empty bank draws nothing.
pub fn word_bank(ui: &mut egui::Ui, theme: &Theme, words: &[String]) {
    if words.is_empty() {
        return;
    }

    let heading = theme.heading(ui.ctx(), "Word bank");
    ui.label(heading);
    ui.add_space(4.0);

    Flex::horizontal().wrap(true).show(ui, |flex| {
        for word in words {
            flex.add_ui(item(), |ui| {
                egui::Frame::new()
                    .fill(ui.visuals().widgets.inactive.bg_fill)
                    .stroke(ui.visuals().widgets.inactive.bg_stroke)
                    .corner_radius(4.0)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(word).size(15.0));
                    });
            });
        }
    });
}
