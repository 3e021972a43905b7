//! Exam lookup service
//!
//! Finds exams by name and enriches them with their questions.
//! Uses hexagonal (ports & adapters) architecture: the service only sees the
//! repository traits in `domain::ports`, adapters plug the storage in.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;



pub use app::ExamService;
pub use domain::entities::{Exam, ExamId};
pub use error::{ConfigError, DomainError};
