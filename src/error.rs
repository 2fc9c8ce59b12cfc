//! Typed errors for category construction.

use std::fmt;
use thiserror::Error;

/// What was wrong with a structured-data category.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MalformedProblem {
    NotAnObject,
    Missing,
    ExpectedString,
    ExpectedArray,
    /// Element at this index of an array field is not a string.
    ExpectedStringElement(usize),
}

impl fmt::Display for MalformedProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedProblem::NotAnObject => f.write_str("expected a JSON object"),
            MalformedProblem::Missing => f.write_str("field is missing"),
            MalformedProblem::ExpectedString => f.write_str("expected a string"),
            MalformedProblem::ExpectedArray => f.write_str("expected an array of strings"),
            MalformedProblem::ExpectedStringElement(index) => {
                write!(f, "element {index} is not a string")
            }
        }
    }
}

/// Structured data that does not match the category schema.
///
/// Raised instead of recovering: a malformed category means the upstream
/// store data is corrupt or its schema drifted.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("malformed category `{field}`: {problem}")]
pub struct MalformedInputError {
    pub field: &'static str,
    pub problem: MalformedProblem,
}

impl MalformedInputError {
    pub(crate) fn new(field: &'static str, problem: MalformedProblem) -> Self {
        Self { field, problem }
    }
}

/// Failure reading a category through a platform bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("undecodable bridge payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("bridge accessor `{accessor}` failed: {message}")]
    Accessor { accessor: String, message: String },
}
