#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Per-category grade collections.
pub mod category;
/// Courses and their letter grades.
pub mod course;
/// Single assignment grades.
pub mod grade;
/// The letter scale and grade points.
pub mod letter;
/// Students and GPA.
pub mod student;

pub use category::GradeCategory;
pub use course::Course;
pub use grade::Grade;
pub use letter::{LetterGrade, grade_points_for_label};
pub use student::Student;

pub use crate::{error::GradeError, types::Category};
