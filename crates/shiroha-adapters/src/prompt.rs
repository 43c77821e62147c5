//! Non-interactive prompters.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use shiroha_core::{
    application::{ApplicationError, ports::Prompter},
    error::ShirohaResult,
};

/// Answers questions from a queue, recording each question asked.
///
/// Running out of answers is a `PromptFailed` error, like a closed stdin.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    inner: Arc<Mutex<(VecDeque<bool>, Vec<String>)>>,
}

impl ScriptedPrompter {
    pub fn answering<I: IntoIterator<Item = bool>>(answers: I) -> Self {
        Self {
            inner: Arc::new(Mutex::new((answers.into_iter().collect(), Vec::new()))),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .1
            .clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, question: &str) -> ShirohaResult<bool> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.1.push(question.to_string());
        inner.0.pop_front().ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: "no more scripted answers".into(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_order_then_fails() {
        let prompter = ScriptedPrompter::answering([true, false]);
        assert!(prompter.confirm("first?").unwrap());
        assert!(!prompter.confirm("second?").unwrap());
        assert!(prompter.confirm("third?").is_err());
        assert_eq!(prompter.questions().len(), 3);
    }
}
