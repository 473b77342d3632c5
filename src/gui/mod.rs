pub mod app;
pub mod error_modal;
pub mod exercise_modal;
pub mod theme;
pub mod word_bank;
pub mod worksheet;

pub use app::GapfillApp;
