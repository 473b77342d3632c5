use std::path::PathBuf;

use eframe::egui;
use rfd::FileDialog;

/// Open-exercise dialog: browse for a worksheet definition file and
/// confirm. Loading and validation happen in the app so failures land
/// in the error modal.
pub struct ExerciseModal {
    open: bool,
    file_path: String,
}

impl ExerciseModal {
    pub fn new() -> Self {
        Self { open: false, file_path: String::new() }
    }

    pub fn open_dialog(&mut self) {
        self.file_path.clear();
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<PathBuf> {
        if !self.open {
            return None;
        }

        let mut chosen = None;

        let modal = egui::Modal::new(egui::Id::new("exercise_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.label("Select a worksheet to open:");
            ui.add_space(10.0);

            if ui.button("Browse for File").clicked() {
                if let Some(path) =
                    FileDialog::new().add_filter("Worksheet files", &["json"]).pick_file()
                {
                    self.file_path = path.display().to_string();
                }
            }

            if !self.file_path.is_empty() {
                ui.add_space(10.0);
                ui.label(format!(
                    "Selected: {}",
                    std::path::Path::new(&self.file_path)
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                ));
            }

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                let can_confirm = !self.file_path.is_empty();
                if can_confirm && ui.button("Confirm").clicked() {
                    chosen = Some(PathBuf::from(&self.file_path));
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        chosen
    }
}

impl Default for ExerciseModal {
    fn default() -> Self {
        Self::new()
    }
}
