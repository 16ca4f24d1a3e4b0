//! String-comparison graders for expected vs. actual model output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// Supported grading strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraderKind {
    /// Output must equal the expectation after trimming surrounding whitespace.
    #[serde(rename = "exactMatch")]
    ExactMatch,
    /// Output must contain the expectation verbatim.
    #[serde(rename = "partialMatch")]
    PartialMatch,
}

impl GraderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraderKind::ExactMatch => "exactMatch",
            GraderKind::PartialMatch => "partialMatch",
        }
    }

    /// Returns `1.0` when `actual` satisfies this grader, `0.0` otherwise.
    pub fn grade(&self, expected: &str, actual: &str) -> f64 {
        let passed = match self {
            GraderKind::ExactMatch => actual.trim() == expected.trim(),
            GraderKind::PartialMatch => actual.contains(expected),
        };
        if passed {
            1.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for GraderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraderKind {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exactMatch" => Ok(GraderKind::ExactMatch),
            "partialMatch" => Ok(GraderKind::PartialMatch),
            other => Err(EvalError::InvalidRequest(format!(
                "unknown grader type: {other}"
            ))),
        }
    }
}

/// Grades `actual` against `expected` using a grader named by string.
///
/// Unknown grader names score `0.0`.
pub fn grade_response(expected: &str, actual: &str, grader_type: &str) -> f64 {
    match grader_type.parse::<GraderKind>() {
        Ok(kind) => kind.grade(expected, actual),
        Err(err) => {
            log::warn!("{err}, scoring 0");
            0.0
        }
    }
}

/// A grading request as accepted over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRequest {
    pub expected: String,
    pub actual: String,
    pub grader_type: String,
}

/// Outcome of a grading request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    pub score: f64,
}

impl GradeRequest {
    pub fn grade(&self) -> GradeResult {
        GradeResult {
            score: grade_response(&self.expected, &self.actual, &self.grader_type),
        }
    }
}
