use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw sensor package: workout type code plus positional readings.
///
/// Deserializes from either `["RUN", [15000, 1, 75]]` or
/// `{"workout_type": "RUN", "data": [15000, 1, 75]}`. The workout type is
/// kept as an arbitrary JSON value so a malformed type can be reported by
/// the package reader rather than by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: Value,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<Value>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Packages bundled with the tracker for demonstration runs
    pub fn samples() -> Vec<Package> {
        vec![
            Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}
