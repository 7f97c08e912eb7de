pub mod info_message;
pub mod package;
pub mod training;

pub use info_message::InfoMessage;
pub use package::Package;
pub use training::{Running, SportsWalking, Swimming, Training, TrainingBase, Workout};
