//! Exam lookup demo
//!
//! Wires the in-memory stores into the exam service, looks an exam up with
//! its questions and saves a new exam to show id assignment.
//!
//! Usage: `exams [NAME]` (defaults to `EXAMS_LOOKUP_NAME`)

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exams::adapters::{InMemoryExamRepository, InMemoryQuestionRepository};
use exams::config::Config;
use exams::{DomainError, Exam, ExamService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exams=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.lookup_name.clone());

    let exam_repo = Arc::new(
        InMemoryExamRepository::seeded(config.sequence_start)
            .with_list_latency(config.list_latency),
    );
    let question_repo = Arc::new(InMemoryQuestionRepository::seeded());
    let service = ExamService::new(exam_repo, question_repo.clone());

    match service.find_by_name_with_questions(&name).await {
        Ok(Some(exam)) => println!("{}", serde_json::to_string_pretty(&exam)?),
        Ok(None) => tracing::info!(name = %name, "Exam not found"),
        Err(DomainError::InvalidArgument(msg)) => {
            tracing::warn!(name = %name, "Exam cannot be enriched: {}", msg)
        }
        Err(e) => return Err(e.into()),
    }

    let new_exam = Exam::new("Fisica").with_questions(["Cinematica", "Dinamica", "Optica"]);
    let saved = service.save(new_exam).await?;
    tracing::info!(
        exam_id = ?saved.id,
        batches = question_repo.saved_batches().len(),
        "Saved demo exam"
    );
    println!("{}", serde_json::to_string_pretty(&saved)?);

    Ok(())
}
