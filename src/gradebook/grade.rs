#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;

use crate::{error::GradeError, types::Category};

/// A single scored assignment.
///
/// Grades are validated on construction and never change afterwards, so
/// `0 <= score <= total_points` and `total_points > 0` always hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grade {
    /// Name of the assignment
    name:         String,
    /// Points earned
    score:        f64,
    /// Points possible
    total_points: f64,
    /// Which category the assignment counts towards
    category:     Category,
}

impl Grade {
    /// Creates a new grade -
    /// * `name` - Name of the assignment
    /// * `score` - Points earned, must be non-negative
    /// * `total_points` - Points possible, must be positive and at least
    ///   `score`
    /// * `category` - Which category the assignment counts towards
    pub fn new(
        name: impl Into<String>,
        score: f64,
        total_points: f64,
        category: Category,
    ) -> Result<Self, GradeError> {
        let invalid = |reason| GradeError::InvalidGrade {
            score,
            total_points,
            reason,
        };

        if score.is_nan() || total_points.is_nan() {
            return Err(invalid("score and total points must be numbers"));
        }
        if score < 0.0 {
            return Err(invalid("score must be non-negative"));
        }
        if total_points <= 0.0 || total_points.is_infinite() {
            return Err(invalid("total points must be positive"));
        }
        if score > total_points {
            return Err(invalid("score cannot exceed total points"));
        }

        Ok(Self {
            name: name.into(),
            score,
            total_points,
            category,
        })
    }

    /// Name of the assignment
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points earned
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Points possible
    pub fn total_points(&self) -> f64 {
        self.total_points
    }

    /// Category this grade counts towards
    pub fn category(&self) -> Category {
        self.category
    }

    /// Score as a percentage of the points possible.
    pub fn percentage(&self) -> f64 {
        self.score / self.total_points * 100.0
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}/{} ({:.2}%)",
            self.name,
            self.score,
            self.total_points,
            self.percentage()
        )
    }
}
