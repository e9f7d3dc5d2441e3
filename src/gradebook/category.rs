#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;

use super::Grade;
use crate::{error::GradeError, types::Category};

/// All grades of one category within a course, in the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeCategory {
    /// Tag shared by every grade in here
    category: Category,
    /// Grades in insertion order
    grades:   Vec<Grade>,
}

impl GradeCategory {
    /// Creates an empty category for the given tag.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            grades: Vec::new(),
        }
    }

    /// Tag shared by every grade in this category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Appends a grade. Fails without changing anything if the grade belongs
    /// to a different category.
    pub fn add(&mut self, grade: Grade) -> Result<(), GradeError> {
        if grade.category() != self.category {
            return Err(GradeError::CategoryMismatch {
                expected: self.category,
                found:    grade.category(),
            });
        }
        self.grades.push(grade);
        Ok(())
    }

    /// Grades in insertion order.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Iterates over grades in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Grade> {
        self.grades.iter()
    }

    /// Number of grades recorded.
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// True when no grades have been recorded.
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Sum of points earned. Folds from `+0.0` so an empty category prints
    /// as `0`, not `-0`.
    pub fn total_earned(&self) -> f64 {
        self.grades.iter().fold(0.0, |acc, g| acc + g.score())
    }

    /// Sum of points possible.
    pub fn total_possible(&self) -> f64 {
        self.grades.iter().fold(0.0, |acc, g| acc + g.total_points())
    }

    /// Percentage of possible points earned, or 0.0 when nothing has been
    /// graded yet.
    pub fn percentage(&self) -> f64 {
        let possible = self.total_possible();
        if possible == 0.0 {
            return 0.0;
        }
        self.total_earned() / possible * 100.0
    }
}

impl<'a> IntoIterator for &'a GradeCategory {
    type IntoIter = std::slice::Iter<'a, Grade>;
    type Item = &'a Grade;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for GradeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "{}: No grades", self.category);
        }
        write!(
            f,
            "{}: {}/{} ({:.2}%)",
            self.category,
            self.total_earned(),
            self.total_possible(),
            self.percentage()
        )
    }
}
