#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use indexmap::IndexMap;
use serde::Serialize;

use super::{Course, Grade};
use crate::constants::REPORT_RULE_WIDTH;

/// A student and the courses they are taking, kept in the order they were
/// added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    /// Name of the student
    name:    String,
    /// Courses keyed by their own name
    courses: IndexMap<String, Course>,
}

impl Student {
    /// Creates a student with no courses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:    name.into(),
            courses: IndexMap::new(),
        }
    }

    /// Name of the student
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a course, replacing (and returning) any course with the same name.
    /// A replaced course keeps its position in the listing.
    pub fn add_course(&mut self, course: Course) -> Option<Course> {
        let replaced = self.courses.insert(course.name().to_string(), course);
        if let Some(old) = &replaced {
            if old.grade_count() > 0 {
                tracing::warn!(
                    "Replaced course {} and discarded its {} grade(s)",
                    old.name(),
                    old.grade_count()
                );
            } else {
                tracing::debug!("Replaced course {}", old.name());
            }
        }
        replaced
    }

    /// Removes a course by name. Does nothing if there is no such course.
    pub fn remove_course(&mut self, name: &str) -> Option<Course> {
        let removed = self.courses.shift_remove(name);
        if removed.is_some() {
            tracing::debug!("Removed course {name}");
        }
        removed
    }

    /// Looks up a course by name.
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.get(name)
    }

    /// Mutable lookup of a course by name, for recording grades.
    pub fn course_mut(&mut self, name: &str) -> Option<&mut Course> {
        self.courses.get_mut(name)
    }

    /// True if a course with this name exists.
    pub fn contains_course(&self, name: &str) -> bool {
        self.courses.contains_key(name)
    }

    /// Courses in the order they were added.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Course names in the order they were added.
    pub fn course_names(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// True when the student has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Credit-weighted GPA over every course that has at least one graded
    /// point. Returns 0.0 when no course qualifies.
    pub fn calculate_gpa(&self) -> f64 {
        weighted_gpa(self.courses())
    }

    /// The GPA this student would have if `hypothetical` were added to the
    /// named course, or `None` if there is no such course.
    ///
    /// Works on a copy of the course; the stored course is untouched.
    pub fn what_if_course_grade(&self, course_name: &str, hypothetical: &Grade) -> Option<f64> {
        let original = self.courses.get(course_name)?;

        let mut projected = original.clone();
        projected.add_grade(hypothetical.clone());

        let gpa = weighted_gpa(self.courses().map(|course| {
            if course.name() == course_name {
                &projected
            } else {
                course
            }
        }));
        tracing::debug!(
            "What-if {} in {course_name}: GPA {:.2} -> {gpa:.2}",
            hypothetical.name(),
            self.calculate_gpa()
        );
        Some(gpa)
    }
}

/// Credit-weighted mean of grade points, skipping courses with nothing
/// graded yet.
fn weighted_gpa<'a>(courses: impl IntoIterator<Item = &'a Course>) -> f64 {
    let (points, credits) = courses
        .into_iter()
        .filter(|course| course.has_grades())
        .fold((0.0, 0.0), |(points, credits), course| {
            (
                points + course.grade_points() * course.credit_hours(),
                credits + course.credit_hours(),
            )
        });

    if credits == 0.0 {
        return 0.0;
    }
    points / credits
}

impl Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Student: {}", self.name)?;
        writeln!(f, "GPA: {:.2}", self.calculate_gpa())?;
        for course in self.courses() {
            writeln!(f)?;
            write!(f, "{course}")?;
            writeln!(f, "{}", "-".repeat(REPORT_RULE_WIDTH))?;
        }
        Ok(())
    }
}
