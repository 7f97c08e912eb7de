use anyhow::{Context, Result};

use crate::models::Package;
use crate::services::TRAINING_CODES;

pub fn print_samples() -> Result<()> {
    let json = serde_json::to_string_pretty(&Package::samples())
        .context("Failed to serialize sample packages")?;

    println!("{}", json);

    Ok(())
}

pub fn print_types() -> Result<()> {
    println!("Workout Types");
    println!("────────────────────────────────");

    for (code, kind) in TRAINING_CODES {
        println!(
            "  {}  {:<14} {}",
            code,
            kind.training_type(),
            kind.fields().join(", ")
        );
    }

    Ok(())
}
