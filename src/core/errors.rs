use thiserror::Error;

#[derive(Error, Debug)]
pub enum GapfillError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load exercise file: {0}")]
    FailedToLoadFile(String),

    #[error("Field id must not be empty")]
    EmptyFieldId,

    #[error("Duplicate field id: '{0}'")]
    DuplicateFieldId(String),

    #[error("Field '{id}' does not fit the page area ({detail})")]
    FieldOutOfBounds { id: String, detail: String },

    #[error("Field height must be positive and at most 100, got {0}")]
    InvalidFieldHeight(f32),

    #[error("GapfillError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for GapfillError {
    fn from(error: std::io::Error) -> Self {
        GapfillError::Io(Box::new(error))
    }
}
