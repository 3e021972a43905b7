//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record their calls and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Exam, ExamId};
use crate::domain::ports::{ExamRepository, QuestionRepository};
use crate::error::DomainError;

// ============================================================================
// Mock Exam Repository
// ============================================================================

/// Returns a configured exam list and assigns ids from a sequence on save
pub struct MockExamRepository {
    exams: Arc<RwLock<Vec<Exam>>>,
    sequence: Arc<RwLock<i64>>,
    saved: Arc<RwLock<Vec<Exam>>>,
    list_all_calls: Arc<RwLock<usize>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl Default for MockExamRepository {
    fn default() -> Self {
        Self {
            exams: Arc::new(RwLock::new(Vec::new())),
            sequence: Arc::new(RwLock::new(1)),
            saved: Arc::new(RwLock::new(Vec::new())),
            list_all_calls: Arc::new(RwLock::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }
}

impl MockExamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let repo = Self::default();
        *repo.should_fail.write().unwrap() = true;
        repo
    }

    /// Configure the list returned by `list_all`
    pub fn with_exams(self, exams: Vec<Exam>) -> Self {
        *self.exams.write().unwrap() = exams;
        self
    }

    /// Configure the first id handed out by `save`
    pub fn with_sequence(self, start: i64) -> Self {
        *self.sequence.write().unwrap() = start;
        self
    }

    pub fn list_all_calls(&self) -> usize {
        *self.list_all_calls.read().unwrap()
    }

    /// Exams passed to `save`, with their assigned ids
    pub fn saved(&self) -> Vec<Exam> {
        self.saved.read().unwrap().clone()
    }
}

#[async_trait]
impl ExamRepository for MockExamRepository {
    async fn list_all(&self) -> Result<Vec<Exam>, DomainError> {
        *self.list_all_calls.write().unwrap() += 1;
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Storage("Mock failure".to_string()));
        }
        Ok(self.exams.read().unwrap().clone())
    }

    async fn save(&self, mut exam: Exam) -> Result<Exam, DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Storage("Mock failure".to_string()));
        }
        let mut sequence = self.sequence.write().unwrap();
        exam.id = Some(ExamId(*sequence));
        *sequence += 1;
        self.saved.write().unwrap().push(exam.clone());
        Ok(exam)
    }
}

// ============================================================================
// Mock Question Repository
// ============================================================================

/// Answers question lookups from configured lists and records every call
///
/// A missing id is always rejected, like any real question store.
#[derive(Default)]
pub struct MockQuestionRepository {
    by_exam: Arc<RwLock<HashMap<ExamId, Vec<String>>>>,
    fallback: Arc<RwLock<Option<Vec<String>>>>,
    find_calls: Arc<RwLock<Vec<Option<ExamId>>>>,
    save_all_calls: Arc<RwLock<Vec<Vec<String>>>>,
    pub save_all_should_fail: Arc<RwLock<bool>>,
}

impl MockQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `questions` for any id without a specific answer
    pub fn returning(self, questions: Vec<String>) -> Self {
        *self.fallback.write().unwrap() = Some(questions);
        self
    }

    /// Return `questions` for one exam id
    pub fn with_questions(self, exam_id: ExamId, questions: Vec<String>) -> Self {
        self.by_exam.write().unwrap().insert(exam_id, questions);
        self
    }

    /// Make `save_all` reject its input
    pub fn failing_save_all(self) -> Self {
        *self.save_all_should_fail.write().unwrap() = true;
        self
    }

    /// Ids passed to `find_by_exam_id`, in call order
    pub fn find_calls(&self) -> Vec<Option<ExamId>> {
        self.find_calls.read().unwrap().clone()
    }

    /// Batches passed to `save_all`, in call order
    pub fn save_all_calls(&self) -> Vec<Vec<String>> {
        self.save_all_calls.read().unwrap().clone()
    }
}

#[async_trait]
impl QuestionRepository for MockQuestionRepository {
    async fn find_by_exam_id(&self, exam_id: Option<ExamId>) -> Result<Vec<String>, DomainError> {
        self.find_calls.write().unwrap().push(exam_id);

        let Some(exam_id) = exam_id else {
            return Err(DomainError::InvalidArgument(
                "exam id is required".to_string(),
            ));
        };

        if let Some(questions) = self.by_exam.read().unwrap().get(&exam_id) {
            return Ok(questions.clone());
        }
        Ok(self.fallback.read().unwrap().clone().unwrap_or_default())
    }

    async fn save_all(&self, questions: Vec<String>) -> Result<(), DomainError> {
        self.save_all_calls.write().unwrap().push(questions);
        if *self.save_all_should_fail.read().unwrap() {
            return Err(DomainError::InvalidArgument(
                "questions rejected".to_string(),
            ));
        }
        Ok(())
    }
}
