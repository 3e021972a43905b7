//! Exam service
//!
//! Looks exams up by name and enriches them with their questions.
//! Collaborator errors are returned exactly as the repositories produced them.

use std::sync::Arc;

use crate::domain::entities::Exam;
use crate::domain::ports::{ExamRepository, QuestionRepository};
use crate::error::DomainError;

/// Service for finding and saving exams
pub struct ExamService<ER, QR>
where
    ER: ExamRepository,
    QR: QuestionRepository,
{
    exams: Arc<ER>,
    questions: Arc<QR>,
}

impl<ER, QR> ExamService<ER, QR>
where
    ER: ExamRepository,
    QR: QuestionRepository,
{
    pub fn new(exams: Arc<ER>, questions: Arc<QR>) -> Self {
        Self { exams, questions }
    }

    /// Find the first exam whose name matches exactly
    ///
    /// An absent exam is `Ok(None)`, never an error.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Exam>, DomainError> {
        let exam = self
            .exams
            .list_all()
            .await?
            .into_iter()
            .find(|exam| exam.name == name);

        tracing::debug!(name, found = exam.is_some(), "Looked up exam by name");
        Ok(exam)
    }

    /// Find an exam by name and attach its questions
    ///
    /// The exam's id is handed to the question repository as-is, so an exam
    /// without an id surfaces the repository's `InvalidArgument` error.
    pub async fn find_by_name_with_questions(
        &self,
        name: &str,
    ) -> Result<Option<Exam>, DomainError> {
        let Some(mut exam) = self.find_by_name(name).await? else {
            return Ok(None);
        };

        let questions = self.questions.find_by_exam_id(exam.id).await?;
        tracing::debug!(
            exam_id = ?exam.id,
            count = questions.len(),
            "Attached questions to exam"
        );
        exam.set_questions(questions);

        Ok(Some(exam))
    }

    /// Save an exam, then its questions if it carries any
    ///
    /// Not transactional: if saving the questions fails, the exam stays saved
    /// and the error is returned.
    pub async fn save(&self, exam: Exam) -> Result<Exam, DomainError> {
        let questions = exam.has_questions().then(|| exam.questions.clone());

        let saved = self.exams.save(exam).await?;
        tracing::info!(exam_id = ?saved.id, name = %saved.name, "Saved exam");

        if let Some(questions) = questions {
            let count = questions.len();
            self.questions.save_all(questions).await?;
            tracing::info!(exam_id = ?saved.id, count, "Saved exam questions");
        }

        Ok(saved)
    }
}
