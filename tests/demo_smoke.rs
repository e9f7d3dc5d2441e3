use gradebook::{
    Category, Grade,
    demo::{self, CS_COURSE, MATH_COURSE},
};

#[test]
fn sample_student_has_both_courses() {
    let student = demo::sample_student().expect("sample builds");
    assert_eq!(student.name(), "Alice Johnson");
    assert_eq!(student.course_names().collect::<Vec<_>>(), [CS_COURSE, MATH_COURSE]);

    let cs = student.course(CS_COURSE).unwrap();
    assert_eq!(cs.grade_count(), 6);
    assert_eq!(cs.total_earned(), 380.0);
    assert_eq!(cs.total_possible(), 440.0);

    let math = student.course(MATH_COURSE).unwrap();
    assert_eq!(math.credit_hours(), 4.0);
    assert_eq!(math.category(Category::Quiz).len(), 1);
}

#[test]
fn final_exam_scenario_raises_the_gpa() {
    let student = demo::sample_student().unwrap();
    let final_exam = Grade::new("Final Exam", 95.0, 100.0, Category::Exam).unwrap();

    let projected = student
        .what_if_course_grade(CS_COURSE, &final_exam)
        .expect("course exists");
    assert!(projected >= student.calculate_gpa());
    assert_eq!(student.course(CS_COURSE).unwrap().grade_count(), 6);
}

#[test]
fn walkthrough_writes_every_section() {
    let mut out = Vec::new();
    demo::run(&mut out).expect("demo runs");
    let text = String::from_utf8(out).unwrap();

    for needle in [
        "Student: Alice Johnson",
        "WHAT-IF SCENARIOS",
        "Hypothetical Assignment: Final Exam",
        "Hypothetical Assignment: Quiz 2",
        "DETAILED CATEGORY ANALYSIS",
        "EXAMPLE COMPLETE!",
    ] {
        assert!(text.contains(needle), "missing {needle:?}");
    }
}
