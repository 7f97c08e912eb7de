use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::models::Package;
use crate::services::run_packages;

#[derive(Args, Default)]
pub struct ReportCommand {
    /// JSON file with packages, e.g. [["RUN", [15000, 1, 75]]]
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl ReportCommand {
    pub fn execute(&self, settings: &Settings) -> Result<()> {
        let input = self
            .input
            .as_deref()
            .or(settings.config.packages.input.as_deref());

        let packages = match input {
            Some(path) => load_packages(path)?,
            None => {
                tracing::debug!("No package file given, using built-in samples");
                Package::samples()
            }
        };

        let stdout = io::stdout();
        run_packages(&packages, settings.format, &mut stdout.lock())?;

        Ok(())
    }
}

/// Read a JSON array of packages from disk
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read package file {}", path.display()))?;

    let packages: Vec<Package> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse package file {}", path.display()))?;

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_mixed_forms() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("packages.json");
        fs::write(
            &path,
            r#"[["RUN", [15000, 1, 75]], {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}]"#,
        )
        .unwrap();

        let packages = load_packages(&path).unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1], Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_packages(&dir.path().join("nope.json")).unwrap_err();

        assert!(err.to_string().contains("Failed to read package file"));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("packages.json");
        fs::write(&path, r#"[["RUN", ["fast"]]]"#).unwrap();

        assert!(load_packages(&path).is_err());
    }
}
