use serde::Deserialize;

/// One answer blank on the worksheet. Coordinates are percentages of the
/// page area, top-left origin.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDefinition {
    pub id: String,             // Unique key, used to address the rendered input
    pub left: f32,              // Percent offset from the left page edge
    pub top: f32,               // Percent offset from the top page edge
    pub width: f32,             // Percent of the page width
    pub answer: String,         // Expected text
    #[serde(default)]
    pub locked: bool,           // Pre-filled example, excluded from grading and reset
}

/// A complete worksheet definition, loaded once from JSON and never
/// mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Exercise {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub background: Option<String>, // Path to the worksheet image, relative to the file
    pub word_bank: Vec<String>,     // Display order only; duplicates permitted
    #[serde(default = "default_field_height")]
    pub field_height: f32,          // Percent of the page height, shared by all fields
    pub fields: Vec<FieldDefinition>,
}

fn default_field_height() -> f32 {
    6.0
}

/// Correctness classification of an unlocked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Unmarked,
    Correct,
    Wrong,
}

/// Live per-field state: what the user has typed and the last grading
/// outcome. Rebuilt from scratch whenever an exercise is loaded.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: String,
    pub mark: Mark,
}
