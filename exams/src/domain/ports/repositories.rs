//! Repository port traits
//!
//! These traits define the interface for exam and question data access.
//! Implementations are provided by adapters (e.g., in-memory stores).

use async_trait::async_trait;

use crate::domain::entities::{Exam, ExamId};
use crate::error::DomainError;

/// Repository for Exam entities
#[async_trait]
pub trait ExamRepository: Send + Sync {
    /// List every exam, possibly none
    async fn list_all(&self) -> Result<Vec<Exam>, DomainError>;

    /// Store an exam and return it with a freshly assigned identifier
    async fn save(&self, exam: Exam) -> Result<Exam, DomainError>;
}

/// Repository for the question texts belonging to exams
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Find the questions of an exam
    ///
    /// A missing id is rejected with `DomainError::InvalidArgument`.
    async fn find_by_exam_id(&self, exam_id: Option<ExamId>) -> Result<Vec<String>, DomainError>;

    /// Store a batch of question texts
    async fn save_all(&self, questions: Vec<String>) -> Result<(), DomainError>;
}
