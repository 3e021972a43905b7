//! In-memory adapters
//!
//! Implementations of the repository traits backed by process memory.
//! Both stores can start from the built-in catalogue.

pub mod exam_repo;
pub mod question_repo;

pub use exam_repo::InMemoryExamRepository;
pub use question_repo::InMemoryQuestionRepository;

use crate::domain::entities::{Exam, ExamId};

/// Built-in exam catalogue
pub fn catalogue() -> Vec<Exam> {
    vec![
        Exam::stored(5, "Matematicas"),
        Exam::stored(6, "Lenguaje"),
        Exam::stored(7, "Historia"),
    ]
}

/// Questions of the built-in catalogue, keyed by exam id
pub fn catalogue_questions() -> Vec<(ExamId, Vec<String>)> {
    vec![(
        ExamId(5),
        ["Aritmetica", "Integrales", "Derivadas", "Trigonometria", "Geometria"]
            .into_iter()
            .map(String::from)
            .collect(),
    )]
}
