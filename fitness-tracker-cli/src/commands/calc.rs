use anyhow::Result;
use clap::Args;
use std::io;

use super::Settings;
use crate::models::Package;
use crate::services::run_packages;

#[derive(Args)]
pub struct CalcCommand {
    /// Workout code (RUN, WLK or SWM)
    workout_type: String,

    /// Sensor readings in package order (see `fitness-tracker types`)
    #[arg(num_args = 1.., allow_negative_numbers = true, required = true)]
    data: Vec<f64>,
}

impl CalcCommand {
    pub fn execute(&self, settings: &Settings) -> Result<()> {
        let package = Package::new(self.workout_type.as_str(), self.data.clone());

        let stdout = io::stdout();
        run_packages(&[package], settings.format, &mut stdout.lock())?;

        Ok(())
    }
}
