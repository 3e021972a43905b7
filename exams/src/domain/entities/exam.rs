//! Exam domain entity
//!
//! An exam is a named test with an ordered list of question texts. It carries
//! no identifier until a repository stores it.

use serde::{Deserialize, Serialize};

/// Identifier assigned to an exam when it is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamId(pub i64);

impl ExamId {
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for ExamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named exam, optionally enriched with its questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    /// `None` until the exam has been stored
    pub id: Option<ExamId>,
    pub name: String,
    /// Question texts, in the order they were received
    #[serde(default)]
    pub questions: Vec<String>,
}

impl Exam {
    /// Create a new, not yet stored exam
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Create an exam that already carries a stored identifier
    pub fn stored(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(ExamId(id)),
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Attach questions, replacing any previously attached list
    pub fn with_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions = questions.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_questions(&mut self, questions: Vec<String>) {
        self.questions = questions;
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    /// True while the exam has no identifier
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn is_stored(&self) -> bool {
        self.id.is_some()
    }
}

// Questions are not part of an exam's identity.
impl PartialEq for Exam {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for Exam {}
