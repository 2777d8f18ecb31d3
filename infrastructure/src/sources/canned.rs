//! Canned answer source
//!
//! The classic Magic 8 Ball: a fixed, ordered list of answers, one picked
//! uniformly at random per question. The question itself is ignored.

use async_trait::async_trait;
use eightball_application::{AnswerSource, SourceError};
use eightball_domain::{Answer, DomainError, Question};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// The four answers used throughout the source tutorials.
pub fn default_answers() -> Vec<Answer> {
    vec![
        Answer::new(Answer::SENTINEL),
        Answer::new("Absolutely!"),
        Answer::new("Unlikely"),
        Answer::new("Simply put, no"),
    ]
}

/// Answer source selecting uniformly at random from a configured list.
///
/// The candidate list must be non-empty; its size and members are the
/// caller's choice. The RNG is injected via seed so tests are
/// reproducible. Selection never fails.
pub struct CannedAnswerSource {
    answers: Vec<Answer>,
    rng: Mutex<StdRng>,
}

impl CannedAnswerSource {
    /// Create a source over `answers`, seeding the RNG from entropy.
    pub fn new(answers: Vec<Answer>) -> Result<Self, DomainError> {
        Self::build(answers, StdRng::from_entropy())
    }

    /// Create a source with a fixed RNG seed, for deterministic selection.
    pub fn with_seed(answers: Vec<Answer>, seed: u64) -> Result<Self, DomainError> {
        Self::build(answers, StdRng::seed_from_u64(seed))
    }

    fn build(answers: Vec<Answer>, rng: StdRng) -> Result<Self, DomainError> {
        if answers.is_empty() {
            return Err(DomainError::NoAnswersConfigured);
        }
        Ok(Self {
            answers,
            rng: Mutex::new(rng),
        })
    }

    /// The configured candidate answers, in order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }
}

#[async_trait]
impl AnswerSource for CannedAnswerSource {
    async fn answer(&self, _question: &Question) -> Result<Answer, SourceError> {
        let idx = self.rng.lock().unwrap().gen_range(0..self.answers.len());
        Ok(self.answers[idx].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(
            CannedAnswerSource::new(Vec::new()),
            Err(DomainError::NoAnswersConfigured)
        ));
    }

    #[tokio::test]
    async fn test_single_answer_always_returned() {
        let source =
            CannedAnswerSource::with_seed(vec![Answer::new("Absolutely!")], 7).unwrap();
        for _ in 0..20 {
            let answer = source.answer(&Question::new("Q")).await.unwrap();
            assert_eq!(answer.as_str(), "Absolutely!");
        }
    }

    #[tokio::test]
    async fn test_question_is_ignored() {
        // Same seed, different questions: identical draw sequence.
        let a = CannedAnswerSource::with_seed(default_answers(), 42).unwrap();
        let b = CannedAnswerSource::with_seed(default_answers(), 42).unwrap();
        for i in 0..10 {
            let x = a.answer(&Question::new("Will it rain?")).await.unwrap();
            let y = b.answer(&Question::new(format!("Q{i}"))).await.unwrap();
            assert_eq!(x, y);
        }
    }

    #[tokio::test]
    async fn test_selection_is_roughly_uniform() {
        let source = CannedAnswerSource::with_seed(default_answers(), 42).unwrap();
        let trials = 4000;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..trials {
            let answer = source.answer(&Question::new("Q")).await.unwrap();
            *counts.entry(answer.into_text()).or_default() += 1;
        }

        assert_eq!(counts.len(), 4, "all four answers should appear");
        let expected = trials / 4;
        let tolerance = expected / 5; // 20%
        for (answer, count) in counts {
            assert!(
                count.abs_diff(expected) <= tolerance,
                "answer '{answer}' drawn {count} times, expected ~{expected}"
            );
        }
    }

    #[test]
    fn test_default_answers_shape() {
        let answers = default_answers();
        assert_eq!(answers.len(), 4);
        assert!(answers[0].is_sentinel());
    }
}
