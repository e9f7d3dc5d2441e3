use gradebook::{Category, Course, Grade, Student, report};

fn grade(name: &str, score: f64, total: f64, category: Category) -> Grade {
    Grade::new(name, score, total, category).expect("valid grade")
}

fn john() -> Student {
    let mut cs = Course::new("CS101", 3.0).expect("valid course");
    cs.add_grade(grade("HW1", 85.0, 100.0, Category::Homework));
    cs.add_grade(grade("Exam1", 90.0, 100.0, Category::Exam));

    let mut math = Course::new("MATH101", 4.0).expect("valid course");
    math.add_grade(grade("Limits", 95.0, 100.0, Category::Homework));
    math.add_grade(grade("Exam1", 88.0, 100.0, Category::Exam));

    let mut student = Student::new("John Doe");
    student.add_course(cs);
    student.add_course(math);
    student.add_course(Course::new("ART100", 2.0).expect("valid course"));
    student
}

#[test]
fn course_table_lists_every_grade() {
    let student = john();
    let table = report::course_table(student.course("CS101").unwrap());

    for needle in ["CS101", "HW1", "Exam1", "85/100", "90.00%", "Overall: 175/200", "B+"] {
        assert!(table.contains(needle), "missing {needle:?} in\n{table}");
    }
}

#[test]
fn course_table_for_an_empty_course_still_renders() {
    let table = report::course_table(&Course::new("ART100", 2.0).expect("valid course"));
    assert!(table.contains("ART100"));
    assert!(table.contains("Overall: 0/0"));
}

#[test]
fn gpa_summary_has_one_row_per_course_and_the_gpa() {
    let summary = report::gpa_summary(&john());

    for needle in ["CS101", "MATH101", "ART100", "No grades yet", "A-", "GPA: 3.53"] {
        assert!(summary.contains(needle), "missing {needle:?} in\n{summary}");
    }
}

#[test]
fn what_if_summary_reports_course_and_gpa_impact() {
    let student = john();
    let final_exam = grade("Final Exam", 100.0, 100.0, Category::Exam);
    let summary = report::what_if_summary(&student, "CS101", &final_exam).expect("course exists");

    for needle in [
        "Hypothetical Assignment: Final Exam",
        "Current: 87.50% (B+)",
        "With new grade: 91.67%",
        "New letter grade: A-",
        "Change: +4.17 percentage points",
        "Current GPA: 3.53",
        "New GPA: 3.70",
        "Change: +0.17 points",
    ] {
        assert!(summary.contains(needle), "missing {needle:?} in\n{summary}");
    }
}

#[test]
fn what_if_summary_for_a_missing_course_is_none() {
    let hypothetical = grade("Lab", 1.0, 1.0, Category::Quiz);
    assert!(report::what_if_summary(&john(), "PHYS200", &hypothetical).is_none());
}

#[test]
fn category_breakdown_skips_empty_categories() {
    let breakdown = report::category_breakdown(&john());

    assert!(breakdown.contains("CS101:\n  Homework: 85.0% (85/100 points)\n  Exam: 90.0% (90/100 points)"));
    assert!(breakdown.contains("ART100:\n  No grades yet"));
    assert!(!breakdown.contains("Quiz"));
}

#[test]
fn student_report_matches_display() {
    let student = john();
    assert_eq!(report::student_report(&student), student.to_string());
}

#[test]
fn what_if_summary_layout() {
    let mut student = Student::new("Solo");
    let mut cs = Course::new("CS101", 3.0).expect("valid course");
    cs.add_grade(grade("HW1", 80.0, 100.0, Category::Homework));
    student.add_course(cs);

    let quiz = grade("Quiz 1", 10.0, 10.0, Category::Quiz);
    let summary = report::what_if_summary(&student, "CS101", &quiz).expect("course exists");
    assert_eq!(
        summary,
        "Hypothetical Assignment: Quiz 1\n\
         Score: 10/10 (100.00%)\n\
         \n\
         Course Impact (CS101):\n  \
         Current: 80.00% (B-)\n  \
         With new grade: 81.82%\n  \
         New letter grade: B-\n  \
         Change: +1.82 percentage points\n\
         \n\
         GPA Impact:\n  \
         Current GPA: 2.70\n  \
         New GPA: 2.70\n  \
         Change: +0.00 points\n"
    );
}
