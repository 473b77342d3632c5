use std::{
    collections::HashSet,
    fs,
    path::Path,
};

use super::{
    models::Exercise,
    GapfillError,
};

/// Load and validate a worksheet definition. The configuration is
/// rejected up front (fail fast) so the renderers and the grader can
/// assume unique ids and in-bounds coordinates from then on.
pub fn load_exercise(path: &Path) -> Result<Exercise, GapfillError> {
    let content = fs::read_to_string(path).map_err(|e| {
        GapfillError::FailedToLoadFile(format!("{}: {}", path.display(), e))
    })?;

    let mut exercise: Exercise = serde_json::from_str(&content)?;

    // The background path is stored relative to the exercise file.
    if let Some(background) = &exercise.background {
        let background_path = Path::new(background);
        if background_path.is_relative() {
            if let Some(parent) = path.parent() {
                exercise.background =
                    Some(parent.join(background_path).display().to_string());
            }
        }
    }

    validate(&exercise)?;
    Ok(exercise)
}

/// Checks every invariant the rest of the program relies on: unique
/// non-empty field ids, a sane shared field height, and every box fully
/// inside the 0..=100 percent page area.
pub fn validate(exercise: &Exercise) -> Result<(), GapfillError> {
    if !exercise.field_height.is_finite()
        || exercise.field_height <= 0.0
        || exercise.field_height > 100.0
    {
        return Err(GapfillError::InvalidFieldHeight(exercise.field_height));
    }

    let mut seen = HashSet::new();
    for field in &exercise.fields {
        if field.id.is_empty() {
            return Err(GapfillError::EmptyFieldId);
        }
        if !seen.insert(field.id.as_str()) {
            return Err(GapfillError::DuplicateFieldId(field.id.clone()));
        }

        let out_of_bounds = |detail: String| GapfillError::FieldOutOfBounds {
            id: field.id.clone(),
            detail,
        };

        if !field.left.is_finite() || !field.top.is_finite() || !field.width.is_finite() {
            return Err(out_of_bounds("non-finite coordinate".to_string()));
        }
        if field.width <= 0.0 {
            return Err(out_of_bounds(format!("width {} is not positive", field.width)));
        }
        if field.left < 0.0 || field.left + field.width > 100.0 {
            return Err(out_of_bounds(format!(
                "left {} + width {} exceeds the page",
                field.left, field.width
            )));
        }
        if field.top < 0.0 || field.top + exercise.field_height > 100.0 {
            return Err(out_of_bounds(format!(
                "top {} + height {} exceeds the page",
                field.top, exercise.field_height
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Exercise {
        serde_json::from_str(json).expect("test exercise should parse")
    }

    #[test]
    fn test_minimal_exercise_parses_and_validates() {
        let exercise = parse(
            r#"{
                "title": "Things we use",
                "word_bank": ["glue", "soap"],
                "fields": [
                    { "id": "q1", "left": 70.0, "top": 30.0, "width": 25.0, "answer": "glue" }
                ]
            }"#,
        );

        assert_eq!(exercise.field_height, 6.0); // default
        assert!(!exercise.fields[0].locked); // default
        assert!(validate(&exercise).is_ok());
    }

    #[test]
    fn test_empty_exercise_is_valid() {
        // No words and no fields still renders (to nothing) and grades 0/0
        let exercise = parse(r#"{ "word_bank": [], "fields": [] }"#);
        assert!(validate(&exercise).is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let exercise = parse(
            r#"{
                "word_bank": [],
                "fields": [
                    { "id": "q1", "left": 10.0, "top": 10.0, "width": 20.0, "answer": "a" },
                    { "id": "q1", "left": 10.0, "top": 30.0, "width": 20.0, "answer": "b" }
                ]
            }"#,
        );

        match validate(&exercise) {
            Err(GapfillError::DuplicateFieldId(id)) => assert_eq!(id, "q1"),
            other => panic!("Expected DuplicateFieldId, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_id_rejected() {
        let exercise = parse(
            r#"{
                "word_bank": [],
                "fields": [
                    { "id": "", "left": 10.0, "top": 10.0, "width": 20.0, "answer": "a" }
                ]
            }"#,
        );
        assert!(matches!(validate(&exercise), Err(GapfillError::EmptyFieldId)));
    }

    #[test]
    fn test_box_past_bottom_rejected() {
        // The original worksheet data had tops past 100; such a box can
        // never be shown, so the file is refused instead.
        let exercise = parse(
            r#"{
                "word_bank": [],
                "field_height": 6.0,
                "fields": [
                    { "id": "q7", "left": 77.0, "top": 105.5, "width": 26.0, "answer": "maths" }
                ]
            }"#,
        );
        assert!(matches!(validate(&exercise), Err(GapfillError::FieldOutOfBounds { .. })));
    }

    #[test]
    fn test_box_past_right_edge_rejected() {
        let exercise = parse(
            r#"{
                "word_bank": [],
                "fields": [
                    { "id": "q1", "left": 90.0, "top": 10.0, "width": 26.0, "answer": "wool" }
                ]
            }"#,
        );
        assert!(matches!(validate(&exercise), Err(GapfillError::FieldOutOfBounds { .. })));
    }

    #[test]
    fn test_bad_field_height_rejected() {
        let exercise = parse(
            r#"{ "word_bank": [], "field_height": 0.0, "fields": [] }"#,
        );
        assert!(matches!(validate(&exercise), Err(GapfillError::InvalidFieldHeight(_))));
    }
}
