use std::error::Error;
use std::fmt;

/// Custom error type for classification failures
#[derive(Debug, Clone, PartialEq)]
pub enum KnnError {
    InvalidInput(String), // Why the training input was rejected
    DimensionMismatch { expected: usize, found: usize },
    ModelNotTrained,
}

impl fmt::Display for KnnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KnnError::InvalidInput(reason) => write!(f, "invalid training input: {}", reason),
            KnnError::DimensionMismatch { expected, found } => write!(
                f,
                "instances must have {} attributes, found {}",
                expected, found
            ),
            KnnError::ModelNotTrained => {
                write!(f, "no model has been learned yet, call learn_model first")
            }
        }
    }
}

impl Error for KnnError {}
