use std::{
    collections::HashMap,
    path::{
        Path,
        PathBuf,
    },
};

use eframe::egui::{
    self,
    containers,
};

use super::{
    error_modal::ErrorModal,
    exercise_modal::ExerciseModal,
    theme::{
        set_theme,
        Theme,
    },
    word_bank::word_bank,
    worksheet::worksheet,
};
use crate::core::{
    exercise::load_exercise,
    grading::{
        grade,
        reset,
        GradeSheet,
    },
    Exercise,
    FieldState,
};

/// A loaded worksheet plus the live state of its inputs, keyed by field
/// id. Replaced wholesale when a new file is opened.
pub struct WorksheetData {
    pub exercise: Exercise,
    pub states: HashMap<String, FieldState>,
}

impl WorksheetData {
    fn new(exercise: Exercise) -> Self {
        let states = exercise
            .fields
            .iter()
            .filter(|f| !f.locked)
            .map(|f| (f.id.clone(), FieldState::default()))
            .collect();

        Self { exercise, states }
    }
}

pub struct GapfillApp {
    worksheet: Option<WorksheetData>,
    score: Option<GradeSheet>,
    theme: Theme,
    exercise_modal: ExerciseModal,
    error_modal: ErrorModal,
}

impl GapfillApp {
    pub fn new(cc: &eframe::CreationContext<'_>, exercise_path: Option<PathBuf>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        let mut app = Self {
            worksheet: None,
            score: None,
            theme,
            exercise_modal: ExerciseModal::new(),
            error_modal: ErrorModal::new(),
        };

        if let Some(path) = exercise_path {
            app.load_worksheet(&path);
        }

        app
    }

    fn load_worksheet(&mut self, path: &Path) {
        match load_exercise(path) {
            Ok(exercise) => {
                println!(
                    "Loaded worksheet '{}' with {} words and {} fields",
                    exercise.title,
                    exercise.word_bank.len(),
                    exercise.fields.len()
                );
                self.worksheet = Some(WorksheetData::new(exercise));
                self.score = None;
            }
            Err(e) => {
                eprintln!("Failed to load worksheet {}: {}", path.display(), e);
                self.error_modal.show_error("Could not open worksheet", e.to_string());
            }
        }
    }

    fn check_answers(&mut self) {
        let Some(data) = &mut self.worksheet else {
            return;
        };

        let sheet = grade(&data.exercise.fields, |id| {
            data.states.get(id).map(|state| state.value.as_str())
        });

        for (id, mark) in &sheet.marks {
            if let Some(state) = data.states.get_mut(id) {
                state.mark = *mark;
            }
        }

        println!("{}", sheet.score_text());
        self.score = Some(sheet);
    }

    fn clear_answers(&mut self) {
        let Some(data) = &mut self.worksheet else {
            return;
        };

        reset(&data.exercise.fields, &mut data.states);
        self.score = None;
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Open Worksheet").clicked() {
                        self.exercise_modal.open_dialog();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(data) = &self.worksheet {
                        if !data.exercise.title.is_empty() {
                            ui.label(self.theme.heading(ctx, &data.exercise.title));
                        }
                    }
                });
            });
        });
    }

    fn show_bottom_panel(&mut self, ctx: &egui::Context) {
        let Some(data) = &self.worksheet else {
            return;
        };
        let words = data.exercise.word_bank.clone();

        egui::TopBottomPanel::bottom("bank_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            word_bank(ui, &self.theme, &words);
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let check = ui.button("Check");
                let clear = ui.button("Clear");

                // Score text stays empty until a check happens
                if let Some(sheet) = &self.score {
                    ui.label(
                        egui::RichText::new(sheet.score_text())
                            .color(self.theme.accent(ctx))
                            .strong(),
                    );
                }

                if check.clicked() {
                    self.check_answers();
                }
                if clear.clicked() {
                    self.clear_answers();
                }
            });
            ui.add_space(6.0);
        });
    }
}

impl eframe::App for GapfillApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_top_bar(ctx);
        self.show_bottom_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            match &mut self.worksheet {
                Some(data) => worksheet(ui, &self.theme, &data.exercise, &mut data.states),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("No worksheet loaded. File → Open Worksheet to begin.");
                    });
                }
            }
        });

        if let Some(path) = self.exercise_modal.show(ctx) {
            println!("Worksheet selected: {}", path.display());
            self.load_worksheet(&path);
        }

        self.error_modal.show(ctx);
    }
}
