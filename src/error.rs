#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::types::Category;

/// Errors raised by the grade model when an invariant would be violated.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GradeError {
    /// A grade was constructed with an impossible score/total combination.
    #[error("Invalid grade {score}/{total_points}: {reason}")]
    InvalidGrade {
        /// The score that was supplied.
        score:        f64,
        /// The total points that were supplied.
        total_points: f64,
        /// Which rule the pair broke.
        reason:       &'static str,
    },
    /// A grade was added to a category of a different type.
    #[error("Grade type {found} doesn't match category type {expected}")]
    CategoryMismatch {
        /// Tag of the category being added to.
        expected: Category,
        /// Tag carried by the grade.
        found:    Category,
    },
    /// A course was given zero, negative or non-finite credit hours.
    #[error("Credit hours must be a positive number (got {0})")]
    InvalidCreditHours(f64),
    /// A letter label outside the grading scale.
    #[error("Unknown letter grade `{0}`")]
    UnknownLetter(String),
    /// A category name that is not one of homework, exam or quiz.
    #[error("Unknown grade category `{0}` (expected homework, exam or quiz)")]
    UnknownCategory(String),
}
