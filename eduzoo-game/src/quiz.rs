//! The panda math question.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Default for MathQuestion {
    fn default() -> Self {
        Self {
            prompt: "O panda tinha 2 bambus e ganhou mais 3. Quantos bambus ele tem agora?"
                .to_string(),
            options: ["3", "4", "5", "6"].map(String::from).to_vec(),
            answer: "5".to_string(),
        }
    }
}

impl MathQuestion {
    /// Compares the `data-answer` value of the clicked option with the answer.
    #[must_use]
    pub fn check(&self, choice: &str) -> bool {
        choice.trim() == self.answer.trim()
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// A question is playable when its answer is one of its options.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.options.iter().any(|option| self.check(option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_answer_is_correct() {
        let question = MathQuestion::default();
        assert!(question.check("5"));
        assert!(question.check(" 5 "));
        for wrong in ["3", "4", "6", "", "five"] {
            assert!(!question.check(wrong), "{wrong} accepted");
        }
    }

    #[test]
    fn default_question_is_playable() {
        let question = MathQuestion::default();
        assert!(question.is_playable());
        let broken = MathQuestion {
            answer: "9".into(),
            ..MathQuestion::default()
        };
        assert!(!broken.is_playable());
    }
}
