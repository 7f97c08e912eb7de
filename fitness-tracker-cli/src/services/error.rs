use thiserror::Error;

/// Errors raised while turning a sensor package into a workout
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackageError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("{workout_type} expects {expected} readings, got {actual}")]
    Arity {
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    },
}
