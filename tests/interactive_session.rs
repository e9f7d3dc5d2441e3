use std::io::Cursor;

use gradebook::{Category, Student, interactive::Session};

/// Runs a session over the given answers, one per line.
fn run(answers: &[&str]) -> (Option<Student>, String) {
    let input = answers.join("\n") + "\n";
    let mut out = Vec::new();
    let student = Session::new(Cursor::new(input), &mut out)
        .with_default_credit_hours(3.0)
        .run()
        .expect("session runs");
    (student, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn empty_name_ends_the_session() {
    let (student, out) = run(&[""]);
    assert!(student.is_none());
    assert!(out.contains("Name cannot be empty"));
}

#[test]
fn adds_a_course_and_a_grade_after_reprompting() {
    let (student, out) = run(&[
        "Alice", // name
        "1", "CS101", "", // course with default credits
        "2", "1", "HW1", "1", // grade in CS101, homework
        "abc", "85", // score
        "50", "100", // total
        "4", // GPA
        "7",
    ]);
    let student = student.expect("student built");

    let course = student.course("CS101").expect("course added");
    assert_eq!(course.credit_hours(), 3.0);
    let hw = course.category(Category::Homework);
    assert_eq!(hw.len(), 1);
    assert_eq!(hw.grades()[0].name(), "HW1");
    assert_eq!(hw.grades()[0].score(), 85.0);
    assert_eq!(hw.grades()[0].total_points(), 100.0);

    assert!(out.contains("Welcome, Alice!"));
    assert!(out.contains("Please enter a valid number."));
    assert!(out.contains("Points earned cannot exceed total points."));
    assert!(out.contains("HW1: 85/100 (85.00%)"));
    assert!(out.contains("Current GPA: 3.00"));
    assert!(out.contains("Thank you for using Student Grade Manager!"));
}

#[test]
fn duplicate_course_names_are_rejected() {
    let (student, out) = run(&["Bob", "1", "CS101", "4", "1", "CS101", "7"]);
    let student = student.expect("student built");

    assert_eq!(student.len(), 1);
    assert_eq!(student.course("CS101").unwrap().credit_hours(), 4.0);
    assert!(out.contains("Course 'CS101' already exists."));
}

#[test]
fn credit_hours_must_be_positive() {
    let (student, out) = run(&["Bob", "1", "CS101", "0", "-1", "two", "2.5", "7"]);
    assert_eq!(student.unwrap().course("CS101").unwrap().credit_hours(), 2.5);
    assert_eq!(out.matches("Credit hours must be positive.").count(), 2);
}

#[test]
fn removal_needs_confirmation() {
    let (student, out) = run(&[
        "Carol", "1", "CS101", "3", "1", "MATH101", "4", // two courses
        "6", "1", "n", // cancelled
        "6", "3", "1", "yes", // out of range, then removed
        "7",
    ]);
    let student = student.expect("student built");

    assert!(out.contains("Course removal cancelled."));
    assert!(out.contains("Please enter a number between 1 and 2."));
    assert!(out.contains("Course 'CS101' removed successfully!"));
    assert_eq!(student.course_names().collect::<Vec<_>>(), ["MATH101"]);
}

#[test]
fn what_if_does_not_record_the_grade() {
    let (student, out) = run(&[
        "Dana", "1", "CS101", "3", //
        "2", "1", "HW1", "1", "85", "100", //
        "5", "1", "", "2", "95", "100", // hypothetical exam
        "7",
    ]);
    let student = student.expect("student built");

    assert!(out.contains("Hypothetical Assignment: Hypothetical Assignment"));
    assert!(out.contains("With new grade: 90.00%"));
    assert!(out.contains("New letter grade: A-"));
    let course = student.course("CS101").unwrap();
    assert_eq!(course.grade_count(), 1);
    assert!(course.category(Category::Exam).is_empty());
}

#[test]
fn menu_options_without_courses_explain_themselves() {
    let (_, out) = run(&["Eve", "2", "3", "5", "6", "9", "7"]);
    assert_eq!(out.matches("No courses available").count(), 4);
    assert!(out.contains("Invalid choice. Please try again."));
}

#[test]
fn running_out_of_input_ends_cleanly() {
    let (student, _) = run(&["Frank", "1", "CS101"]);
    let student = student.expect("student built");
    assert!(student.is_empty());
}

#[test]
fn output_is_plain_text_unless_color_is_requested() {
    let (_, out) = run(&["Gina", "1", "", "9", "1", "CS101", "3", "7"]);
    assert!(out.contains("Course name cannot be empty."));
    assert!(out.contains("Invalid choice. Please try again."));
    assert!(out.contains("Course 'CS101' added successfully!"));
    assert!(out.contains("MAIN MENU"));
    assert!(!out.contains('\x1b'), "escape codes in\n{out}");
}
