//! In-memory exam repository

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::{Exam, ExamId};
use crate::domain::ports::ExamRepository;
use crate::error::DomainError;

/// Exam store kept in memory
///
/// Ids are handed out from a monotonically increasing sequence. An optional
/// latency delays every `list_all` call.
pub struct InMemoryExamRepository {
    exams: Arc<RwLock<Vec<Exam>>>,
    next_id: Arc<RwLock<i64>>,
    list_latency: Duration,
}

impl InMemoryExamRepository {
    pub fn new(sequence_start: i64) -> Self {
        Self {
            exams: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(sequence_start)),
            list_latency: Duration::ZERO,
        }
    }

    /// Store seeded with the built-in catalogue
    pub fn seeded(sequence_start: i64) -> Self {
        Self::new(sequence_start).with_exams(super::catalogue())
    }

    /// Pre-populate with exams, keeping their ids
    pub fn with_exams(self, exams: Vec<Exam>) -> Self {
        self.exams
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .extend(exams);
        self
    }

    pub fn with_list_latency(mut self, latency: Duration) -> Self {
        self.list_latency = latency;
        self
    }

    fn storage_error<E: std::fmt::Display>(e: E) -> DomainError {
        DomainError::Storage(format!("exam store lock poisoned: {}", e))
    }
}

#[async_trait]
impl ExamRepository for InMemoryExamRepository {
    async fn list_all(&self) -> Result<Vec<Exam>, DomainError> {
        if !self.list_latency.is_zero() {
            tracing::debug!(latency = ?self.list_latency, "Delaying exam listing");
            tokio::time::sleep(self.list_latency).await;
        }

        let exams = self.exams.read().map_err(Self::storage_error)?;
        Ok(exams.clone())
    }

    async fn save(&self, mut exam: Exam) -> Result<Exam, DomainError> {
        let id = {
            let mut next_id = self.next_id.write().map_err(Self::storage_error)?;
            let id = ExamId(*next_id);
            *next_id = next_id
                .checked_add(1)
                .ok_or_else(|| DomainError::Storage("exam id sequence exhausted".to_string()))?;
            id
        };
        exam.id = Some(id);

        self.exams
            .write()
            .map_err(Self::storage_error)?
            .push(exam.clone());

        tracing::debug!(exam_id = %id, name = %exam.name, "Stored exam");
        Ok(exam)
    }
}
