use gradebook::{Category, Grade, GradeCategory, GradeError};

#[test]
fn grade_keeps_its_fields() {
    let grade = Grade::new("HW1", 85.0, 100.0, Category::Homework).expect("valid grade");
    assert_eq!(grade.name(), "HW1");
    assert_eq!(grade.score(), 85.0);
    assert_eq!(grade.total_points(), 100.0);
    assert_eq!(grade.category(), Category::Homework);
    assert_eq!(grade.percentage(), 85.0);
}

#[test]
fn grade_percentage_is_score_over_total() {
    for (score, total) in [(18.0, 20.0), (0.0, 10.0), (7.5, 7.5), (1.0, 3.0)] {
        let grade = Grade::new("q", score, total, Category::Quiz).expect("valid grade");
        assert_eq!(grade.percentage(), score / total * 100.0);
    }
    let quiz = Grade::new("Quiz1", 18.0, 20.0, Category::Quiz).expect("valid grade");
    assert_eq!(quiz.percentage(), 90.0);
}

#[test]
fn impossible_grades_are_rejected() {
    for (score, total) in [(-5.0, 100.0), (50.0, 0.0), (110.0, 100.0), (1.0, -4.0)] {
        let err = Grade::new("Invalid", score, total, Category::Homework).unwrap_err();
        assert!(
            matches!(err, GradeError::InvalidGrade { .. }),
            "{score}/{total} gave {err:?}"
        );
    }
}

#[test]
fn nan_is_not_a_grade() {
    assert!(Grade::new("nan", f64::NAN, 10.0, Category::Exam).is_err());
    assert!(Grade::new("nan", 1.0, f64::NAN, Category::Exam).is_err());
}

#[test]
fn grade_display_shows_score_and_percentage() {
    let grade = Grade::new("Quiz 1", 18.0, 20.0, Category::Quiz).expect("valid grade");
    assert_eq!(grade.to_string(), "Quiz 1: 18/20 (90.00%)");
}

#[test]
fn category_accepts_matching_grades_in_order() {
    let mut hw = GradeCategory::new(Category::Homework);
    hw.add(Grade::new("HW1", 85.0, 100.0, Category::Homework).unwrap())
        .expect("matching tag");
    assert_eq!(hw.len(), 1);
    hw.add(Grade::new("HW2", 90.0, 100.0, Category::Homework).unwrap())
        .expect("matching tag");
    assert_eq!(hw.len(), 2);

    let names: Vec<&str> = hw.iter().map(Grade::name).collect();
    assert_eq!(names, ["HW1", "HW2"]);
    assert_eq!(hw.total_earned(), 175.0);
    assert_eq!(hw.total_possible(), 200.0);
    assert_eq!(hw.percentage(), 87.5);
}

#[test]
fn category_rejects_other_tags_without_growing() {
    let mut hw = GradeCategory::new(Category::Homework);
    let exam = Grade::new("Exam1", 80.0, 100.0, Category::Exam).unwrap();

    let err = hw.add(exam).unwrap_err();
    assert_eq!(
        err,
        GradeError::CategoryMismatch {
            expected: Category::Homework,
            found:    Category::Exam,
        }
    );
    assert!(hw.is_empty());
    assert_eq!(hw.len(), 0);
}

#[test]
fn empty_category_is_zero_not_an_error() {
    let quiz = GradeCategory::new(Category::Quiz);
    assert_eq!(quiz.total_earned(), 0.0);
    assert_eq!(quiz.total_possible(), 0.0);
    assert_eq!(quiz.percentage(), 0.0);
    assert_eq!(quiz.to_string(), "Quiz: No grades");
}

#[test]
fn zero_score_is_distinct_from_no_grades() {
    let mut quiz = GradeCategory::new(Category::Quiz);
    quiz.add(Grade::new("Pop quiz", 0.0, 10.0, Category::Quiz).unwrap())
        .unwrap();
    assert_eq!(quiz.percentage(), 0.0);
    assert_eq!(quiz.total_possible(), 10.0);
    assert_eq!(quiz.to_string(), "Quiz: 0/10 (0.00%)");
}

#[test]
fn categories_parse_from_names() {
    assert_eq!("Homework".parse::<Category>(), Ok(Category::Homework));
    assert_eq!("hw".parse::<Category>(), Ok(Category::Homework));
    assert_eq!(" EXAM ".parse::<Category>(), Ok(Category::Exam));
    assert_eq!("quiz".parse::<Category>(), Ok(Category::Quiz));
    assert!(matches!(
        "lab".parse::<Category>(),
        Err(GradeError::UnknownCategory(_))
    ));
    assert_eq!(Category::from_menu_index(2), Some(Category::Exam));
    assert_eq!(Category::from_menu_index(0), None);
    assert_eq!(Category::from_menu_index(4), None);
}
