use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentSection {
    Technical,
    Behavioral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// One assessment question. `correct` holds a single option for
/// single-select questions and the full expected set for multi-select.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: String,
    pub section: AssessmentSection,
    #[serde(rename = "type")]
    pub mode: SelectionMode,
    pub question: String,
    pub options: Vec<String>,
    pub correct: Vec<String>,
    pub explanation: Option<String>,
}

impl AssessmentQuestion {
    /// Exact match for single-select, set equality for multi-select.
    pub fn is_correct(&self, selected: &[String]) -> bool {
        match self.mode {
            SelectionMode::Single => {
                selected.len() == 1 && self.correct.first() == selected.first()
            }
            SelectionMode::Multiple => {
                selected.len() == self.correct.len()
                    && selected.iter().all(|s| self.correct.contains(s))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi() -> AssessmentQuestion {
        AssessmentQuestion {
            id: "t2".into(),
            section: AssessmentSection::Technical,
            mode: SelectionMode::Multiple,
            question: "Which are JavaScript frameworks or libraries?".into(),
            options: vec!["React".into(), "Python".into(), "Angular".into(), "Java".into()],
            correct: vec!["React".into(), "Angular".into()],
            explanation: None,
        }
    }

    #[test]
    fn multi_select_requires_set_equality() {
        let q = multi();
        assert!(q.is_correct(&["Angular".to_string(), "React".to_string()]));
        assert!(!q.is_correct(&["React".to_string()]));
        assert!(!q.is_correct(&[
            "React".to_string(),
            "Angular".to_string(),
            "Java".to_string()
        ]));
    }
}
