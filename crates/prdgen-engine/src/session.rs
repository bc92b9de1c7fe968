//! Session entity and lifecycle
//!
//! A session owns its product context, answers, task graph, and generated
//! document versions. All mutation goes through the methods here so the
//! lifecycle invariants (forward-only status, dependency-gated tasks,
//! append-only documents) cannot be bypassed.

use chrono::{DateTime, Utc};
use prdgen_catalog::Catalog;
use prdgen_core::{
    AnswerValue, Document, PrdError, ProductContext, ProductType, Result, SessionId,
    SessionStatus, Task, TaskDifficulty, TaskId, TaskStatus,
};
use prdgen_graph::{derive_initial, TaskGraph};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::answers::AnswerStore;

/// One PRD-authoring effort
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub name: String,
    pub context: ProductContext,
    pub status: SessionStatus,
    answers: AnswerStore,
    tasks: TaskGraph,
    documents: Vec<Document>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lightweight session row for listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub name: String,
    pub product_type: ProductType,
    pub status: SessionStatus,
    pub answers: usize,
    pub tasks: usize,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a session and seed its task graph from the context
    pub fn new(id: SessionId, name: impl Into<String>, context: ProductContext) -> Result<Self> {
        let tasks = derive_initial(id, &context)?;
        let now = Utc::now();
        Ok(Self {
            id,
            name: name.into(),
            context,
            status: SessionStatus::Draft,
            answers: AnswerStore::new(),
            tasks,
            documents: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn tasks(&self) -> &TaskGraph {
        &self.tasks
    }

    /// Generated document versions, oldest first
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn latest_document(&self) -> Option<&Document> {
        self.documents.last()
    }

    /// Record an interview answer
    ///
    /// Validates the key against the catalog and the value against the
    /// question's answer kind; a rejected answer changes nothing and the
    /// interview continues. The first answer moves a draft session into
    /// `Interviewing`.
    pub fn record_answer(
        &mut self,
        catalog: &Catalog,
        key: &str,
        value: AnswerValue,
    ) -> Result<()> {
        if !matches!(
            self.status,
            SessionStatus::Draft | SessionStatus::Interviewing
        ) {
            return Err(PrdError::InvalidTransition(format!(
                "session {} is {}; reopen it before recording answers",
                self.id, self.status
            )));
        }

        let question = catalog
            .get(key)
            .ok_or_else(|| PrdError::UnknownQuestion(key.to_string()))?;
        question.validate(&value)?;

        debug!("Recording answer for {} in {}", key, self.id);
        self.answers.record(key, value);
        if self.status == SessionStatus::Draft {
            self.status = SessionStatus::Interviewing;
        }
        self.touch();
        Ok(())
    }

    /// Append a generated document version
    ///
    /// When the interview was complete at generation time the session
    /// advances to `Completed`; a partial generation leaves the status
    /// where it was.
    pub fn record_document(&mut self, document: Document, interview_complete: bool) {
        self.documents.push(document);
        if interview_complete
            && matches!(
                self.status,
                SessionStatus::Interviewing | SessionStatus::Generating
            )
        {
            self.status = SessionStatus::Completed;
        }
        self.touch();
    }

    /// Reopen a generated or completed session for editing
    pub fn reopen(&mut self) -> Result<()> {
        match self.status {
            SessionStatus::Generating | SessionStatus::Completed => {
                self.status = SessionStatus::Interviewing;
                self.touch();
                Ok(())
            }
            status => Err(PrdError::InvalidTransition(format!(
                "session {} cannot reopen from {}",
                self.id, status
            ))),
        }
    }

    /// Archive the session
    pub fn archive(&mut self) -> Result<()> {
        if self.status == SessionStatus::Archived {
            return Err(PrdError::InvalidTransition(format!(
                "session {} is already archived",
                self.id
            )));
        }
        self.status = SessionStatus::Archived;
        self.touch();
        Ok(())
    }

    /// Add a task to the session's graph
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        depends_on: Vec<TaskId>,
        difficulty: TaskDifficulty,
        estimated_hours: u32,
    ) -> Result<TaskId> {
        let id = self
            .tasks
            .add_task(title, depends_on, difficulty, estimated_hours)?;
        self.touch();
        Ok(id)
    }

    /// Transition a task, bumping the session's `updated_at` on success
    pub fn transition_task(&mut self, task_id: TaskId, new_status: TaskStatus) -> Result<Task> {
        let task = self.tasks.transition(task_id, new_status)?.clone();
        self.touch();
        Ok(task)
    }

    /// Record hours spent on a completed task
    pub fn record_actual_hours(&mut self, task_id: TaskId, hours: u32) -> Result<Task> {
        let task = self.tasks.record_actual_hours(task_id, hours)?.clone();
        self.touch();
        Ok(task)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            name: self.name.clone(),
            product_type: self.context.product_type,
            status: self.status,
            answers: self.answers.len(),
            tasks: self.tasks.len(),
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
