//! Scripted `TextModel` for tests. Replies are keyed by the exact prompt.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{LlmError, TextModel};

#[derive(Default)]
pub struct ScriptedModel {
    replies: HashMap<String, String>,
    failing: Vec<String>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, prompt: impl Into<String>, text: impl Into<String>) -> Self {
        self.replies.insert(prompt.into(), text.into());
        self
    }

    /// Makes the given prompt fail with an API error.
    pub fn fail(mut self, prompt: impl Into<String>) -> Self {
        self.failing.push(prompt.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextModel for ScriptedModel {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.iter().any(|p| p == prompt) {
            return Err(LlmError::Api {
                status: 500,
                message: "scripted failure".to_string(),
            });
        }

        self.replies.get(prompt).cloned().ok_or(LlmError::Api {
            status: 404,
            message: format!("no scripted reply for prompt: {prompt}"),
        })
    }

    fn model_id(&self) -> &str {
        "scripted"
    }
}
