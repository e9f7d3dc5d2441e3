#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;
use typed_builder::TypedBuilder;

use super::{Grade, GradeCategory, LetterGrade};
use crate::{constants::DEFAULT_CREDIT_HOURS, error::GradeError, types::Category};

/// A course worth some credit hours, with one grade category per
/// [`Category`].
///
/// The three categories are plain fields, so they always exist (possibly
/// empty) and can never be removed.
#[derive(Debug, Clone, PartialEq, Serialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
#[builder(doc)]
#[builder(build_method(into = Result<Course, GradeError>))]
pub struct Course {
    /// * `name`: name of the course, unique within a student
    name:         String,
    /// * `credit_hours`: weight of the course in a GPA
    #[builder(default = DEFAULT_CREDIT_HOURS)]
    credit_hours: f64,
    /// Homework grades
    #[builder(setter(skip), default = GradeCategory::new(Category::Homework))]
    homework:     GradeCategory,
    /// Exam grades
    #[builder(setter(skip), default = GradeCategory::new(Category::Exam))]
    exam:         GradeCategory,
    /// Quiz grades
    #[builder(setter(skip), default = GradeCategory::new(Category::Quiz))]
    quiz:         GradeCategory,
}

impl Course {
    /// Creates a course with no grades yet.
    /// * `name` - Name of the course
    /// * `credit_hours` - Number of credit hours for the course, must be a
    ///   positive finite number
    pub fn new(name: impl Into<String>, credit_hours: f64) -> Result<Self, GradeError> {
        Self::builder()
            .name(name)
            .credit_hours(credit_hours)
            .build()
    }

    /// Name of the course
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credit hours the course is worth
    pub fn credit_hours(&self) -> f64 {
        self.credit_hours
    }

    /// The grade category for a tag.
    pub fn category(&self, category: Category) -> &GradeCategory {
        match category {
            Category::Homework => &self.homework,
            Category::Exam => &self.exam,
            Category::Quiz => &self.quiz,
        }
    }

    /// Mutable access to the grade category for a tag.
    fn category_mut(&mut self, category: Category) -> &mut GradeCategory {
        match category {
            Category::Homework => &mut self.homework,
            Category::Exam => &mut self.exam,
            Category::Quiz => &mut self.quiz,
        }
    }

    /// All three categories, in [`Category::ALL`] order.
    pub fn categories(&self) -> impl Iterator<Item = &GradeCategory> {
        Category::ALL.into_iter().map(|c| self.category(c))
    }

    /// Records a grade in the category matching its own tag.
    pub fn add_grade(&mut self, grade: Grade) {
        let category = self.category_mut(grade.category());
        // Routed by the grade's own tag, so this add cannot mismatch.
        if let Err(e) = category.add(grade) {
            unreachable!("{e}");
        }
    }

    /// Total number of grades across all categories.
    pub fn grade_count(&self) -> usize {
        self.categories().map(GradeCategory::len).sum()
    }

    /// Points earned across all categories.
    pub fn total_earned(&self) -> f64 {
        self.categories()
            .fold(0.0, |acc, c| acc + c.total_earned())
    }

    /// Points possible across all categories.
    pub fn total_possible(&self) -> f64 {
        self.categories()
            .fold(0.0, |acc, c| acc + c.total_possible())
    }

    /// True once at least one point has been graded.
    pub fn has_grades(&self) -> bool {
        self.total_possible() > 0.0
    }

    /// Overall percentage, or 0.0 when nothing has been graded yet.
    pub fn percentage(&self) -> f64 {
        ratio(self.total_earned(), self.total_possible())
    }

    /// Letter grade for the current percentage.
    pub fn letter_grade(&self) -> LetterGrade {
        LetterGrade::from_percentage(self.percentage())
    }

    /// Grade points for the current letter grade.
    pub fn grade_points(&self) -> f64 {
        self.letter_grade().points()
    }

    /// The percentage this course would have if `hypothetical` were added.
    /// Nothing is recorded.
    pub fn what_if(&self, hypothetical: &Grade) -> f64 {
        ratio(
            self.total_earned() + hypothetical.score(),
            self.total_possible() + hypothetical.total_points(),
        )
    }

    /// The letter grade this course would have if `hypothetical` were added.
    pub fn what_if_letter_grade(&self, hypothetical: &Grade) -> LetterGrade {
        LetterGrade::from_percentage(self.what_if(hypothetical))
    }
}

impl From<Course> for Result<Course, GradeError> {
    /// Checks the credit hours of a freshly built course.
    fn from(course: Course) -> Self {
        if !(course.credit_hours.is_finite() && course.credit_hours > 0.0) {
            return Err(GradeError::InvalidCreditHours(course.credit_hours));
        }
        Ok(course)
    }
}

/// `earned / possible` as a percentage, defined as 0.0 when nothing is
/// possible.
fn ratio(earned: f64, possible: f64) -> f64 {
    if possible == 0.0 {
        return 0.0;
    }
    earned / possible * 100.0
}

impl Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Course: {} ({} credit hours)", self.name, self.credit_hours)?;
        writeln!(
            f,
            "Overall: {}/{} ({:.2}%) - {}",
            self.total_earned(),
            self.total_possible(),
            self.percentage(),
            self.letter_grade()
        )?;
        for category in self.categories().filter(|c| !c.is_empty()) {
            writeln!(f)?;
            writeln!(f, "{category}")?;
            for grade in category {
                writeln!(f, "  - {grade}")?;
            }
        }
        Ok(())
    }
}
