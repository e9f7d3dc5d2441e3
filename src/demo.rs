#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::Write;

use anyhow::{Context, Result};

use crate::{
    error::GradeError,
    gradebook::{Category, Course, Grade, Student},
    report,
};

/// Name of the computer science course in the sample student.
pub const CS_COURSE: &str = "Computer Science 101";
/// Name of the calculus course in the sample student.
pub const MATH_COURSE: &str = "Calculus I";

/// Builds a course from `(name, score, total, category)` rows.
fn course_with(
    name: &str,
    credit_hours: f64,
    grades: &[(&str, f64, f64, Category)],
) -> Result<Course, GradeError> {
    let mut course = Course::new(name, credit_hours)?;
    for &(assignment, score, total, category) in grades {
        course.add_grade(Grade::new(assignment, score, total, category)?);
    }
    Ok(course)
}

/// A student with two partly graded courses.
pub fn sample_student() -> Result<Student, GradeError> {
    use Category::*;

    let cs = course_with(CS_COURSE, 3.0, &[
        ("HW1: Variables and Data Types", 85.0, 100.0, Homework),
        ("HW2: Control Structures", 92.0, 100.0, Homework),
        ("HW3: Functions", 88.0, 100.0, Homework),
        ("Midterm Exam", 78.0, 100.0, Exam),
        ("Quiz 1: Syntax", 18.0, 20.0, Quiz),
        ("Quiz 2: Debugging", 19.0, 20.0, Quiz),
    ])?;

    let math = course_with(MATH_COURSE, 4.0, &[
        ("HW1: Limits", 95.0, 100.0, Homework),
        ("HW2: Derivatives", 88.0, 100.0, Homework),
        ("HW3: Chain Rule", 91.0, 100.0, Homework),
        ("Exam 1", 87.0, 100.0, Exam),
        ("Exam 2", 93.0, 100.0, Exam),
        ("Quiz 1", 28.0, 30.0, Quiz),
    ])?;

    let mut student = Student::new("Alice Johnson");
    student.add_course(cs);
    student.add_course(math);
    Ok(student)
}

/// Writes a banner line framed by rules.
fn banner(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(60))?;
    Ok(())
}

/// Prints the sample student's report, a couple of what-if scenarios and the
/// per-category breakdown.
pub fn run(out: &mut impl Write) -> Result<()> {
    let student = sample_student().context("Failed to build the sample student")?;

    banner(out, "STUDENT GRADE MANAGER - EXAMPLE USAGE")?;
    writeln!(out, "\n{}", report::student_report(&student))?;
    for course in student.courses() {
        writeln!(out, "{}", report::course_table(course))?;
    }

    banner(out, "WHAT-IF SCENARIOS")?;
    let scenarios = [
        (CS_COURSE, Grade::new("Final Exam", 95.0, 100.0, Category::Exam)?),
        (MATH_COURSE, Grade::new("Quiz 2", 30.0, 30.0, Category::Quiz)?),
    ];
    for (course_name, hypothetical) in &scenarios {
        let summary = report::what_if_summary(&student, course_name, hypothetical)
            .with_context(|| format!("Sample student has no course named {course_name}"))?;
        writeln!(out, "\n{summary}")?;
    }

    banner(out, "DETAILED CATEGORY ANALYSIS")?;
    writeln!(out, "\n{}", report::category_breakdown(&student))?;

    writeln!(out, "\n{}", report::gpa_summary(&student))?;
    banner(out, "EXAMPLE COMPLETE!")?;
    Ok(())
}
