#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::{constants::LETTER_THRESHOLDS, error::GradeError};

/// A letter on the plus/minus grading scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LetterGrade {
    /// A+
    #[serde(rename = "A+")]
    APlus,
    /// A
    A,
    /// A-
    #[serde(rename = "A-")]
    AMinus,
    /// B+
    #[serde(rename = "B+")]
    BPlus,
    /// B
    B,
    /// B-
    #[serde(rename = "B-")]
    BMinus,
    /// C+
    #[serde(rename = "C+")]
    CPlus,
    /// C
    C,
    /// C-
    #[serde(rename = "C-")]
    CMinus,
    /// D+
    #[serde(rename = "D+")]
    DPlus,
    /// D
    D,
    /// D-
    #[serde(rename = "D-")]
    DMinus,
    /// F
    F,
}

impl LetterGrade {
    /// Buckets a percentage into a letter. Bounds are inclusive, so exactly
    /// 90.0 is an `A-`.
    pub fn from_percentage(percentage: f64) -> Self {
        LETTER_THRESHOLDS
            .iter()
            .find(|(bound, _)| percentage >= *bound)
            .map(|(_, letter)| *letter)
            .unwrap_or(LetterGrade::F)
    }

    /// Grade points this letter contributes to a GPA.
    pub fn points(&self) -> f64 {
        match self {
            LetterGrade::APlus | LetterGrade::A => 4.0,
            LetterGrade::AMinus => 3.7,
            LetterGrade::BPlus => 3.3,
            LetterGrade::B => 3.0,
            LetterGrade::BMinus => 2.7,
            LetterGrade::CPlus => 2.3,
            LetterGrade::C => 2.0,
            LetterGrade::CMinus => 1.7,
            LetterGrade::DPlus => 1.3,
            LetterGrade::D => 1.0,
            LetterGrade::DMinus => 0.7,
            LetterGrade::F => 0.0,
        }
    }

    /// The label as printed on a transcript, eg. `B+`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::DMinus => "D-",
            LetterGrade::F => "F",
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterGrade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        LETTER_THRESHOLDS
            .iter()
            .map(|(_, letter)| *letter)
            .chain(std::iter::once(LetterGrade::F))
            .find(|letter| letter.as_str() == label)
            .ok_or_else(|| GradeError::UnknownLetter(s.to_string()))
    }
}

/// Grade points for a letter label; labels outside the scale count as 0.0.
pub fn grade_points_for_label(label: &str) -> f64 {
    label
        .parse::<LetterGrade>()
        .map(|letter| letter.points())
        .unwrap_or(0.0)
}
