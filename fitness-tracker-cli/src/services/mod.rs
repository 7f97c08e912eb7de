pub mod driver;
pub mod error;
pub mod package_reader;

pub use driver::{render, run_packages};
pub use error::PackageError;
pub use package_reader::{read_package, WorkoutKind, TRAINING_CODES};
