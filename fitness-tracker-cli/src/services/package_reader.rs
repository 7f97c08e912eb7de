use serde_json::Value;

use super::error::PackageError;
use crate::models::{Running, SportsWalking, Swimming, Training, Workout};

/// Workout types known to the sensor unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

/// Sensor codes and the workout each one selects
pub const TRAINING_CODES: [(&str, WorkoutKind); 3] = [
    ("RUN", WorkoutKind::Running),
    ("WLK", WorkoutKind::SportsWalking),
    ("SWM", WorkoutKind::Swimming),
];

impl WorkoutKind {
    /// Look up a sensor code (exact, case-sensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        TRAINING_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, kind)| *kind)
    }

    pub fn training_type(self) -> &'static str {
        match self {
            WorkoutKind::Running => Running::TRAINING_TYPE,
            WorkoutKind::SportsWalking => SportsWalking::TRAINING_TYPE,
            WorkoutKind::Swimming => Swimming::TRAINING_TYPE,
        }
    }

    /// Readings expected in a package, in order
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
        }
    }

    pub fn arity(self) -> usize {
        self.fields().len()
    }

    /// Unpack positional readings into this workout type
    pub fn build(self, data: &[f64]) -> Result<Training, PackageError> {
        if data.len() != self.arity() {
            return Err(PackageError::Arity {
                workout_type: self.training_type(),
                expected: self.arity(),
                actual: data.len(),
            });
        }

        let (action, duration, weight) = (data[0], data[1], data[2]);

        let training = match self {
            WorkoutKind::Running => Running::new(action, duration, weight).into(),
            WorkoutKind::SportsWalking => {
                SportsWalking::new(action, duration, weight, data[3]).into()
            }
            WorkoutKind::Swimming => {
                Swimming::new(action, duration, weight, data[3], data[4]).into()
            }
        };

        Ok(training)
    }
}

/// Read a package received from the sensors.
///
/// Only the type of `workout_type` is checked up front; an unrecognized
/// code is reported separately as an unknown workout type.
pub fn read_package(workout_type: &Value, data: &[f64]) -> Result<Training, PackageError> {
    let code = workout_type.as_str().ok_or_else(|| {
        PackageError::InvalidInput(format!(
            "workout type must be a string, got {}",
            workout_type
        ))
    })?;

    let kind = WorkoutKind::from_code(code)
        .ok_or_else(|| PackageError::UnknownWorkoutType(code.to_string()))?;

    tracing::debug!("Reading {} package with {} readings", code, data.len());

    kind.build(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_each_code() {
        let swim = read_package(&json!("SWM"), &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let run = read_package(&json!("RUN"), &[15000.0, 1.0, 75.0]).unwrap();
        let walk = read_package(&json!("WLK"), &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        assert_eq!(swim, Training::Swimming(Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0)));
        assert_eq!(run, Training::Running(Running::new(15000.0, 1.0, 75.0)));
        assert_eq!(
            walk,
            Training::SportsWalking(SportsWalking::new(9000.0, 1.0, 75.0, 180.0))
        );
    }

    #[test]
    fn test_non_string_type_is_invalid_input() {
        let result = read_package(&json!(42), &[15000.0, 1.0, 75.0]);

        assert!(matches!(result, Err(PackageError::InvalidInput(_))));
    }

    #[test]
    fn test_type_checked_before_arity() {
        let result = read_package(&Value::Null, &[]);

        assert!(matches!(result, Err(PackageError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_code() {
        let result = read_package(&json!("BIKE"), &[1.0, 1.0, 1.0]);

        assert_eq!(
            result,
            Err(PackageError::UnknownWorkoutType("BIKE".to_string()))
        );
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let result = read_package(&json!("run"), &[15000.0, 1.0, 75.0]);

        assert!(matches!(result, Err(PackageError::UnknownWorkoutType(_))));
    }

    #[test]
    fn test_arity_mismatch() {
        let result = read_package(&json!("WLK"), &[9000.0, 1.0, 75.0]);

        assert_eq!(
            result,
            Err(PackageError::Arity {
                workout_type: "SportsWalking",
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_fractional_count_pool_is_reported() {
        let swim = read_package(&json!("SWM"), &[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap();

        assert_eq!(
            swim.show_training_info().get_message(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.012 км/ч; Потрачено ккал: 338.000."
        );
    }

    #[test]
    fn test_fractional_action_is_reported() {
        let run = read_package(&json!("RUN"), &[15000.5, 1.0, 75.0]).unwrap();

        assert_eq!(run.base().action, 15000.5);
        assert!(run
            .show_training_info()
            .get_message()
            .ends_with("Потрачено ккал: 797.831."));
    }

    #[test]
    fn test_huge_action_is_not_truncated() {
        let run = read_package(&json!("RUN"), &[1e30, 1.0, 75.0]).unwrap();

        assert_eq!(run.distance(), 1e30 * 0.65 / 1000.0);
        assert!(run
            .show_training_info()
            .get_message()
            .contains("Дистанция: 650000000000000022380806144.000 км"));
    }

    #[test]
    fn test_code_table_lookup() {
        for (code, kind) in TRAINING_CODES {
            assert_eq!(WorkoutKind::from_code(code), Some(kind));
        }
    }
}
