pub mod errors;
pub mod exercise;
pub mod grading;
pub mod models;
pub mod normalize;

pub use errors::GapfillError;
pub use models::{ Exercise, FieldDefinition, FieldState, Mark };
