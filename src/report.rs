#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use crate::{
    config::{self, TableStyle},
    gradebook::{Course, Grade, Student},
};

#[derive(Tabled)]
/// One row per recorded grade in a course table
struct GradeRow {
    #[tabled(rename = "Category")]
    /// * `category`: category the grade counts towards
    category:   String,
    #[tabled(rename = "Assignment")]
    /// * `assignment`: name of the assignment
    assignment: String,
    #[tabled(rename = "Score")]
    /// * `score`: earned/possible
    score:      String,
    #[tabled(rename = "Percentage")]
    /// * `percentage`: score as a percentage
    percentage: String,
}

impl From<&Grade> for GradeRow {
    fn from(grade: &Grade) -> Self {
        Self {
            category:   grade.category().to_string(),
            assignment: grade.name().to_string(),
            score:      format!("{}/{}", grade.score(), grade.total_points()),
            percentage: format!("{:.2}%", grade.percentage()),
        }
    }
}

#[derive(Tabled)]
/// One row per course in a GPA summary
struct CourseRow {
    #[tabled(rename = "Course")]
    /// * `course`: name of the course
    course:     String,
    #[tabled(rename = "Credits")]
    /// * `credits`: credit hours
    credits:    String,
    #[tabled(rename = "Percentage")]
    /// * `percentage`: overall percentage, or a note when ungraded
    percentage: String,
    #[tabled(rename = "Letter")]
    /// * `letter`: letter grade
    letter:     String,
    #[tabled(rename = "Points")]
    /// * `points`: grade points
    points:     String,
}

impl From<&Course> for CourseRow {
    fn from(course: &Course) -> Self {
        let (percentage, letter, points) = if course.has_grades() {
            (
                format!("{:.2}%", course.percentage()),
                course.letter_grade().to_string(),
                format!("{:.1}", course.grade_points()),
            )
        } else {
            ("No grades yet".to_string(), "-".to_string(), "-".to_string())
        };

        Self {
            course: course.name().to_string(),
            credits: course.credit_hours().to_string(),
            percentage,
            letter,
            points,
        }
    }
}

/// Applies the configured border style and the shared header formatting.
fn finish(table: &mut Table) -> String {
    match config::table_style() {
        TableStyle::Rounded => table.with(Style::rounded()),
        TableStyle::Modern => table.with(Style::modern()),
        TableStyle::Ascii => table.with(Style::ascii()),
        TableStyle::Markdown => table.with(Style::markdown()),
    };
    table
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(32).keep_words(true)))
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// The full text report for a student: GPA, then every course with its
/// grades.
pub fn student_report(student: &Student) -> String {
    student.to_string()
}

/// A table of every grade in a course, with the overall standing in the
/// footer.
pub fn course_table(course: &Course) -> String {
    let rows = course
        .categories()
        .flat_map(|category| category.iter())
        .map(GradeRow::from)
        .collect::<Vec<_>>();

    let mut table = Table::new(rows);
    table
        .with(Panel::header(format!(
            "{} ({} credit hours)",
            course.name(),
            course.credit_hours()
        )))
        .with(Panel::footer(format!(
            "Overall: {}/{} ({:.2}%) - {}",
            course.total_earned(),
            course.total_possible(),
            course.percentage(),
            course.letter_grade()
        )));
    finish(&mut table)
}

/// A table of every course's standing with the GPA in the footer.
pub fn gpa_summary(student: &Student) -> String {
    let rows = student.courses().map(CourseRow::from).collect::<Vec<_>>();

    let mut table = Table::new(rows);
    table
        .with(Panel::header(format!("GPA Summary: {}", student.name())))
        .with(Panel::footer(format!("GPA: {:.2}", student.calculate_gpa())));
    finish(&mut table)
}

/// How adding `hypothetical` to the named course would move the course
/// percentage, its letter and the GPA. `None` if the course doesn't exist.
pub fn what_if_summary(student: &Student, course_name: &str, hypothetical: &Grade) -> Option<String> {
    let course = student.course(course_name)?;
    let new_gpa = student.what_if_course_grade(course_name, hypothetical)?;

    let current_percentage = course.percentage();
    let new_percentage = course.what_if(hypothetical);
    let current_gpa = student.calculate_gpa();

    let lines = [
        format!("Hypothetical Assignment: {}", hypothetical.name()),
        format!(
            "Score: {}/{} ({:.2}%)",
            hypothetical.score(),
            hypothetical.total_points(),
            hypothetical.percentage()
        ),
        String::new(),
        format!("Course Impact ({}):", course.name()),
        format!("  Current: {current_percentage:.2}% ({})", course.letter_grade()),
        format!("  With new grade: {new_percentage:.2}%"),
        format!("  New letter grade: {}", course.what_if_letter_grade(hypothetical)),
        format!(
            "  Change: {:+.2} percentage points",
            new_percentage - current_percentage
        ),
        String::new(),
        "GPA Impact:".to_string(),
        format!("  Current GPA: {current_gpa:.2}"),
        format!("  New GPA: {new_gpa:.2}"),
        format!("  Change: {:+.2} points", new_gpa - current_gpa),
    ];
    Some(lines.join("\n") + "\n")
}

/// Per-course, per-category percentages for every category with grades.
pub fn category_breakdown(student: &Student) -> String {
    student
        .courses()
        .map(|course| {
            let lines = course
                .categories()
                .filter(|category| !category.is_empty())
                .map(|category| {
                    format!(
                        "  {}: {:.1}% ({}/{} points)",
                        category.category(),
                        category.percentage(),
                        category.total_earned(),
                        category.total_possible()
                    )
                })
                .join("\n");
            if lines.is_empty() {
                format!("{}:\n  No grades yet", course.name())
            } else {
                format!("{}:\n{lines}", course.name())
            }
        })
        .join("\n\n")
}
