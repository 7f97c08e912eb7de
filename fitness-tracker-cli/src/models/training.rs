use serde::Serialize;

use super::info_message::InfoMessage;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_HOUR: f64 = 60.0;

/// Readings shared by every workout type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrainingBase {
    pub action: f64,   // steps or strokes
    pub duration: f64, // hours
    pub weight: f64,   // kg
}

impl TrainingBase {
    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Summary calculations shared by all workout types.
///
/// Distance and mean speed have step-based defaults; calories have no
/// default so every workout type must supply its own formula.
pub trait Workout {
    /// Label printed in the report
    const TRAINING_TYPE: &'static str;

    /// Length of one step or stroke in meters
    const LEN_STEP: f64 = 0.65;

    fn base(&self) -> &TrainingBase;

    /// Distance in km
    fn distance(&self) -> f64 {
        self.base().action * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    /// Spent calories in kcal
    fn spent_calories(&self) -> f64;

    /// Build the report for a completed workout
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            Self::TRAINING_TYPE,
            self.base().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Running {
    #[serde(flatten)]
    pub base: TrainingBase,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
        }
    }
}

impl Workout for Running {
    const TRAINING_TYPE: &'static str = "Running";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * self.base.duration
            * MIN_IN_HOUR
    }
}

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SportsWalking {
    #[serde(flatten)]
    pub base: TrainingBase,
    pub height: f64, // cm
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            height,
        }
    }
}

impl Workout for SportsWalking {
    const TRAINING_TYPE: &'static str = "SportsWalking";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.base.weight
            + ((self.mean_speed() * Self::KMH_IN_MSEC).powi(2) / (self.height / Self::CM_IN_M))
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.base.weight)
            * self.base.duration
            * MIN_IN_HOUR
    }
}

/// Swimming workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swimming {
    #[serde(flatten)]
    pub base: TrainingBase,
    pub length_pool: f64, // m
    pub count_pool: f64,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: f64, duration: f64, weight: f64, length_pool: f64, count_pool: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Workout for Swimming {
    const TRAINING_TYPE: &'static str = "Swimming";
    const LEN_STEP: f64 = 1.38;

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    // Pool laps, not strokes
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
            * self.base.duration
    }
}

/// A workout built from one sensor package
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "training_type")]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn training_type(&self) -> &'static str {
        match self {
            Training::Running(_) => Running::TRAINING_TYPE,
            Training::SportsWalking(_) => SportsWalking::TRAINING_TYPE,
            Training::Swimming(_) => Swimming::TRAINING_TYPE,
        }
    }

    pub fn base(&self) -> &TrainingBase {
        match self {
            Training::Running(w) => w.base(),
            Training::SportsWalking(w) => w.base(),
            Training::Swimming(w) => w.base(),
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            Training::Running(w) => w.distance(),
            Training::SportsWalking(w) => w.distance(),
            Training::Swimming(w) => w.distance(),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Running(w) => w.mean_speed(),
            Training::SportsWalking(w) => w.mean_speed(),
            Training::Swimming(w) => w.mean_speed(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Training::Running(w) => w.spent_calories(),
            Training::SportsWalking(w) => w.spent_calories(),
            Training::Swimming(w) => w.spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Training::Running(w) => w.show_training_info(),
            Training::SportsWalking(w) => w.show_training_info(),
            Training::Swimming(w) => w.show_training_info(),
        }
    }
}

impl From<Running> for Training {
    fn from(w: Running) -> Self {
        Training::Running(w)
    }
}

impl From<SportsWalking> for Training {
    fn from(w: SportsWalking) -> Self {
        Training::SportsWalking(w)
    }
}

impl From<Swimming> for Training {
    fn from(w: Swimming) -> Self {
        Training::Swimming(w)
    }
}
