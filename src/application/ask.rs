use crate::application::workflow::RagWorkflow;
use crate::domain::entities::answer::Answer;
use crate::domain::error::DomainError;
use std::sync::Arc;

pub struct AskUseCase {
    workflow: Arc<RagWorkflow>,
}

impl AskUseCase {
    pub fn new(workflow: Arc<RagWorkflow>) -> Self {
        Self { workflow }
    }

    pub async fn execute(&self, question: &str) -> Result<Answer, DomainError> {
        self.workflow.run(question).await
    }
}
