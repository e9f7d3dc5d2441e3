#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::gradebook::LetterGrade;

/// Credit hours given to a course when none are specified.
pub const DEFAULT_CREDIT_HOURS: f64 = 3.0;

/// Assignment name used by the what-if calculator when the user leaves it
/// blank.
pub const HYPOTHETICAL_ASSIGNMENT: &str = "Hypothetical Assignment";

/// Percentage lower bounds (inclusive) for each letter, highest first.
/// Anything below the last bound is an `F`.
pub const LETTER_THRESHOLDS: [(f64, LetterGrade); 12] = [
    (97.0, LetterGrade::APlus),
    (93.0, LetterGrade::A),
    (90.0, LetterGrade::AMinus),
    (87.0, LetterGrade::BPlus),
    (83.0, LetterGrade::B),
    (80.0, LetterGrade::BMinus),
    (77.0, LetterGrade::CPlus),
    (73.0, LetterGrade::C),
    (70.0, LetterGrade::CMinus),
    (67.0, LetterGrade::DPlus),
    (63.0, LetterGrade::D),
    (60.0, LetterGrade::DMinus),
];

/// Width of the horizontal rule separating courses in a student report.
pub const REPORT_RULE_WIDTH: usize = 50;
