use std::collections::HashMap;

use super::{
    models::{
        FieldDefinition,
        FieldState,
        Mark,
    },
    normalize::{
        normalize,
        normalize_opt,
    },
};

/// Outcome of one grading pass. `marks` carries one entry per unlocked
/// field, in definition order; locked fields never appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeSheet {
    pub marks: Vec<(String, Mark)>,
    pub correct: u32,
    pub total: u32,
}

impl GradeSheet {
    pub fn score_text(&self) -> String {
        format!("Score: {}/{}", self.correct, self.total)
    }
}

/// Grade every unlocked field in definition order. `value_of` looks up
/// the current input text by field id; a missing value grades like an
/// empty string. Each call produces a fresh sheet, so repeated checks
/// never accumulate stale marks.
pub fn grade<'a>(
    fields: &[FieldDefinition],
    value_of: impl Fn(&str) -> Option<&'a str>,
) -> GradeSheet {
    let mut marks = Vec::new();
    let mut correct = 0;
    let mut total = 0;

    for field in fields {
        if field.locked {
            continue;
        }
        total += 1;

        let mark = if normalize_opt(value_of(&field.id)) == normalize(&field.answer) {
            correct += 1;
            Mark::Correct
        } else {
            Mark::Wrong
        };
        marks.push((field.id.clone(), mark));
    }

    GradeSheet { marks, correct, total }
}

/// Clear every unlocked field's value and mark, in definition order.
/// Locked fields are never touched; the caller also empties the score
/// display.
pub fn reset(fields: &[FieldDefinition], states: &mut HashMap<String, FieldState>) {
    for field in fields {
        if field.locked {
            continue;
        }
        if let Some(state) = states.get_mut(&field.id) {
            state.value.clear();
            state.mark = Mark::Unmarked;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(id: &str, answer: &str, locked: bool) -> FieldDefinition {
        FieldDefinition {
            id: id.to_string(),
            left: 10.0,
            top: 10.0,
            width: 20.0,
            answer: answer.to_string(),
            locked,
        }
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_correct_answer_with_noise() {
        // " GLUE " matches "glue" after normalization
        let fields = vec![field("q1", "glue", false), field("q2", "a hotel", true)];
        let vals = values(&[("q1", " GLUE ")]);

        let sheet = grade(&fields, |id| vals.get(id).map(|s| s.as_str()));
        assert_eq!(sheet.marks, vec![("q1".to_string(), Mark::Correct)]);
        assert_eq!(sheet.correct, 1);
        assert_eq!(sheet.total, 1);
        assert_eq!(sheet.score_text(), "Score: 1/1");
    }

    #[test]
    fn test_wrong_answer() {
        let fields = vec![field("q1", "glue", false), field("q2", "a hotel", true)];
        let vals = values(&[("q1", "tape")]);

        let sheet = grade(&fields, |id| vals.get(id).map(|s| s.as_str()));
        assert_eq!(sheet.marks, vec![("q1".to_string(), Mark::Wrong)]);
        assert_eq!(sheet.score_text(), "Score: 0/1");
    }

    #[test]
    fn test_locked_fields_never_counted() {
        // The locked field holds its own answer, but must not enter the score
        let fields = vec![
            field("ex", "a hotel", true),
            field("q1", "glue", false),
            field("q2", "soap", false),
        ];
        let vals = values(&[("ex", "a hotel"), ("q1", "glue")]);

        let sheet = grade(&fields, |id| vals.get(id).map(|s| s.as_str()));
        assert_eq!(sheet.total, 2);
        assert_eq!(sheet.correct, 1);
        assert!(sheet.marks.iter().all(|(id, _)| id != "ex"));
    }

    #[test]
    fn test_missing_value_grades_as_empty() {
        let fields = vec![field("q1", "glue", false), field("q2", "", false)];
        let vals: HashMap<String, String> = HashMap::new();

        let sheet = grade(&fields, |id| vals.get(id).map(|s| s.as_str()));
        // No value against "glue" is wrong; no value against "" matches
        assert_eq!(
            sheet.marks,
            vec![("q1".to_string(), Mark::Wrong), ("q2".to_string(), Mark::Correct)]
        );
        assert_eq!(sheet.correct, 1);
    }

    #[test]
    fn test_repeat_grading_is_deterministic() {
        let fields = vec![field("q1", "glue", false), field("q2", "wool", false)];
        let vals = values(&[("q1", "glue"), ("q2", "cotton")]);

        let first = grade(&fields, |id| vals.get(id).map(|s| s.as_str()));
        let second = grade(&fields, |id| vals.get(id).map(|s| s.as_str()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_clears_unlocked_only() {
        let fields = vec![field("ex", "a hotel", true), field("q1", "glue", false)];
        let mut states = HashMap::new();
        states
            .insert("q1".to_string(), FieldState { value: "glue".to_string(), mark: Mark::Correct });
        // A locked field should never have live state, but guard anyway
        states.insert(
            "ex".to_string(),
            FieldState { value: "a hotel".to_string(), mark: Mark::Unmarked },
        );

        reset(&fields, &mut states);

        assert_eq!(states["q1"].value, "");
        assert_eq!(states["q1"].mark, Mark::Unmarked);
        assert_eq!(states["ex"].value, "a hotel");
    }

    #[test]
    fn test_empty_exercise() {
        let sheet = grade(&[], |_| None);
        assert_eq!(sheet.total, 0);
        assert_eq!(sheet.score_text(), "Score: 0/0");
    }

    #[test]
    fn test_marks_follow_definition_order() {
        let fields =
            vec![field("q3", "wool", false), field("q1", "glue", false), field("q2", "soap", false)];
        let vals = values(&[("q1", "glue"), ("q2", "soap"), ("q3", "wool")]);

        let sheet = grade(&fields, |id| vals.get(id).map(|s| s.as_str()));
        let ids: Vec<&str> = sheet.marks.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["q3", "q1", "q2"]);
    }
}
