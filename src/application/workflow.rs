//! Retrieve-then-answer pipeline as an explicit state machine.
//!
//! ```text
//! Start { question } ──retrieve──► Retrieved { question, context } ──answer──► Answered
//! ```
//!
//! [`RagWorkflow::step`] performs exactly one transition, so new stages
//! (re-ranking, tool calls) slot in as new variants without changing
//! [`RagWorkflow::run`].

use crate::domain::entities::answer::Answer;
use crate::domain::error::DomainError;
use crate::domain::ports::document_store::DocumentStore;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use std::sync::Arc;
use tracing::debug;

pub const NO_INFORMATION_ANSWER: &str = "Sorry, I don't know.";

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Start {
        question: String,
    },
    Retrieved {
        question: String,
        context: Vec<String>,
    },
    Answered {
        question: String,
        context: Vec<String>,
        answer: String,
    },
}

impl WorkflowState {
    pub fn start(question: impl Into<String>) -> Self {
        WorkflowState::Start {
            question: question.into(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowState::Answered { .. })
    }

    pub fn question(&self) -> &str {
        match self {
            WorkflowState::Start { question }
            | WorkflowState::Retrieved { question, .. }
            | WorkflowState::Answered { question, .. } => question,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            WorkflowState::Start { .. } => "start",
            WorkflowState::Retrieved { .. } => "retrieved",
            WorkflowState::Answered { .. } => "answered",
        }
    }
}

pub struct RagWorkflow {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn DocumentStore>,
    retrieval_limit: usize,
    excerpt_chars: usize,
}

impl RagWorkflow {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn DocumentStore>,
        retrieval_limit: usize,
        excerpt_chars: usize,
    ) -> Self {
        Self {
            embedder,
            store,
            retrieval_limit,
            excerpt_chars,
        }
    }

    /// Drive a question from `Start` to `Answered`.
    pub async fn run(&self, question: &str) -> Result<Answer, DomainError> {
        let mut state = WorkflowState::start(question);
        while !state.is_terminal() {
            state = self.step(state).await?;
        }
        match state {
            WorkflowState::Answered {
                question,
                context,
                answer,
            } => Ok(Answer {
                question,
                answer,
                context,
            }),
            other => Err(DomainError::InvalidInput(format!(
                "workflow stopped in non-terminal state '{}'",
                other.name()
            ))),
        }
    }

    /// Advance one transition.
    pub async fn step(&self, state: WorkflowState) -> Result<WorkflowState, DomainError> {
        match state {
            WorkflowState::Start { question } => {
                let context = self
                    .retrieve(&question)
                    .await
                    .map_err(|e| DomainError::RetrievalFailed(e.to_string()))?;
                debug!(hits = context.len(), limit = self.retrieval_limit, "retrieved context");
                Ok(WorkflowState::Retrieved { question, context })
            }
            WorkflowState::Retrieved { question, context } => {
                let answer = synthesize_answer(&context, self.excerpt_chars);
                Ok(WorkflowState::Answered {
                    question,
                    context,
                    answer,
                })
            }
            WorkflowState::Answered { .. } => Err(DomainError::InvalidInput(
                "workflow already answered".to_string(),
            )),
        }
    }

    async fn retrieve(&self, question: &str) -> Result<Vec<String>, DomainError> {
        let embedding = self.embedder.embed(question).await?;
        self.store.search(&embedding, self.retrieval_limit).await
    }
}

/// Answer template over the retrieved context. Quotes at most `excerpt_chars`
/// characters of the first item.
pub fn synthesize_answer(context: &[String], excerpt_chars: usize) -> String {
    match context.first() {
        Some(first) => {
            let excerpt: String = first.chars().take(excerpt_chars).collect();
            format!("I found this: '{excerpt}...'")
        }
        None => NO_INFORMATION_ANSWER.to_string(),
    }
}
