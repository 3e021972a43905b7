//! In-memory question repository

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::ExamId;
use crate::domain::ports::QuestionRepository;
use crate::error::DomainError;

/// Question store kept in memory, keyed by exam id
///
/// Batches passed to `save_all` are kept apart from the keyed questions since
/// they carry no exam id.
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    by_exam: Arc<RwLock<HashMap<ExamId, Vec<String>>>>,
    batches: Arc<RwLock<Vec<Vec<String>>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the questions of the built-in catalogue
    pub fn seeded() -> Self {
        super::catalogue_questions()
            .into_iter()
            .fold(Self::new(), |repo, (id, questions)| {
                repo.with_questions(id, questions)
            })
    }

    /// Pre-populate the questions of one exam
    pub fn with_questions(self, exam_id: ExamId, questions: Vec<String>) -> Self {
        self.by_exam
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(exam_id, questions);
        self
    }

    /// Batches stored through `save_all`, in call order
    pub fn saved_batches(&self) -> Vec<Vec<String>> {
        self.batches
            .read()
            .map(|batches| batches.clone())
            .unwrap_or_default()
    }

    fn storage_error<E: std::fmt::Display>(e: E) -> DomainError {
        DomainError::Storage(format!("question store lock poisoned: {}", e))
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_exam_id(&self, exam_id: Option<ExamId>) -> Result<Vec<String>, DomainError> {
        let exam_id = match exam_id {
            Some(id) if id.is_positive() => id,
            Some(id) => {
                tracing::warn!(exam_id = %id, "Rejected question lookup for non-positive exam id");
                return Err(DomainError::InvalidArgument(format!(
                    "exam id must be greater than 0, got {}",
                    id
                )));
            }
            None => {
                tracing::warn!("Rejected question lookup without exam id");
                return Err(DomainError::InvalidArgument(
                    "exam id is required".to_string(),
                ));
            }
        };

        let by_exam = self.by_exam.read().map_err(Self::storage_error)?;
        Ok(by_exam.get(&exam_id).cloned().unwrap_or_default())
    }

    async fn save_all(&self, questions: Vec<String>) -> Result<(), DomainError> {
        if questions.is_empty() {
            return Err(DomainError::Validation(
                "at least one question is required".to_string(),
            ));
        }

        let count = questions.len();
        self.batches
            .write()
            .map_err(Self::storage_error)?
            .push(questions);

        tracing::debug!(count, "Stored question batch");
        Ok(())
    }
}
