use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::error::GradeError;

/// The kind of work a grade was earned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Homework assignments.
    Homework,
    /// Exams, midterms and finals.
    Exam,
    /// Quizzes.
    Quiz,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [Category::Homework, Category::Exam, Category::Quiz];

    /// Lowercase name, as used on the command line and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Homework => "homework",
            Category::Exam => "exam",
            Category::Quiz => "quiz",
        }
    }

    /// Maps a 1-based menu choice onto a category.
    pub fn from_menu_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = match self {
            Category::Homework => "Homework",
            Category::Exam => "Exam",
            Category::Quiz => "Quiz",
        };
        write!(f, "{title}")
    }
}

impl FromStr for Category {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "homework" | "hw" => Ok(Category::Homework),
            "exam" => Ok(Category::Exam),
            "quiz" => Ok(Category::Quiz),
            _ => Err(GradeError::UnknownCategory(s.to_string())),
        }
    }
}
