use std::path::PathBuf;

use eframe::egui;
use gapfill::gui::GapfillApp;

fn main() -> eframe::Result {
    // Optional path to a worksheet file; otherwise use File -> Open Worksheet.
    let exercise_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_title("Gapfill"),
        ..Default::default()
    };

    eframe::run_native(
        "Gapfill",
        options,
        Box::new(|cc| Ok(Box::new(GapfillApp::new(cc, exercise_path)))),
    )
}
