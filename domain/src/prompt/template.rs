//! Prompt template for the Magic 8 Ball persona
//!
//! Prompt text and response cleanup both live here; the resolver never
//! inspects prompt content, and completion adapters never hardcode it.

/// Templates for prompting a text-completion model to act as a Magic 8 Ball
pub struct EightBallPrompt;

impl EightBallPrompt {
    /// The literal prefix the model is instructed to put in front of its
    /// answer, stripped again by [`clean_response`](Self::clean_response).
    pub const ANSWER_PREFIX: &'static str = "Answer:";

    /// System instruction establishing the 8 ball persona
    pub fn system() -> &'static str {
        r#"You are acting as an omniscient Magic 8 Ball that answers users' yes or no questions.
Answer the question that follows the 'User:' prompt with a short response. Prefix your response with 'Answer:'.
If the question is not a yes or no question, reply with 'I can only answer yes or no questions'.
Your tone should be expressive yet polite. Always restrict your answers to 10 words or less.
NEVER continue a prompt by generating a user question."#
    }

    /// Full prompt for a single question: system instruction plus the
    /// user's question.
    pub fn prompt(question: &str) -> String {
        format!("{}\nUser: {}", Self::system(), question)
    }

    /// Clean a raw completion: trim whitespace and strip any leading
    /// `Answer:` prefixes the model echoed back.
    pub fn clean_response(raw: &str) -> String {
        let mut answer = raw.trim();
        while let Some(rest) = answer.strip_prefix(Self::ANSWER_PREFIX) {
            answer = rest.trim();
        }
        answer.to_string()
    }
}
