//! # gradebook
//!
//! Tracks a student's coursework grades, rolls them up into category and
//! course percentages, converts those to letter grades and GPA points, and
//! projects "what-if" scenarios for grades that haven't happened yet.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Settings read from the environment
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// The sample student and scripted walkthrough
pub mod demo;
/// Errors raised by the grade model
pub mod error;
/// Grades, categories, courses and students
pub mod gradebook;
/// Menu-driven session for the command line
pub mod interactive;
/// Table and text renderings of the model
pub mod report;
/// Small shared types
pub mod types;

pub use error::GradeError;
pub use gradebook::{Category, Course, Grade, GradeCategory, LetterGrade, Student};
