//! CLI route: single dispatch table from parsed commands to replay runs.

use super::parse::{Commands, OutputMode};
use super::presentation::{format_failures, format_summary};
use super::replay::replay_file;
use crate::config::{Settings, SettingsLoader};
use crate::instance::MachineModel;
use anyhow::{bail, Context};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Loaded settings for one CLI invocation.
pub struct RunContext {
    settings: Settings,
}

impl RunContext {
    pub fn new(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let settings = SettingsLoader::load(config_path).context("Failed to load settings")?;
        Ok(Self { settings })
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Execute a CLI command and return the text for stdout.
    pub fn execute(&self, command: &Commands) -> anyhow::Result<String> {
        let started = Instant::now();
        let result = match command {
            Commands::Replay {
                file,
                strict,
                output,
            } => self.handle_replay(file, *strict, *output),
            Commands::Check { file } => self.handle_check(file),
        };
        info!(
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn handle_replay(&self, file: &Path, strict: bool, output: OutputMode) -> anyhow::Result<String> {
        let model = MachineModel::new(self.settings.merge.clone());
        let stats = replay_file(file, &model, strict)?;

        if strict {
            if let Some(failure) = stats.failures.first() {
                bail!("Line {}: {}", failure.line, failure.error);
            }
        }

        match output {
            OutputMode::Model => {
                let rendered = serde_json::to_string_pretty(&*model.read())
                    .context("Failed to render model")?;
                if stats.is_clean() {
                    Ok(rendered)
                } else {
                    Ok(format!("{}\n{}", rendered, format_failures(&stats.failures)))
                }
            }
            OutputMode::Summary => Ok(format_summary(&model.read(), &stats)),
        }
    }

    fn handle_check(&self, file: &Path) -> anyhow::Result<String> {
        let model = MachineModel::new(self.settings.merge.clone());
        let stats = replay_file(file, &model, false)?;

        if !stats.is_clean() {
            bail!(
                "{} of {} deltas failed\n{}",
                stats.failures.len(),
                stats.applied + stats.failures.len(),
                format_failures(&stats.failures)
            );
        }
        Ok(format!(
            "{} deltas applied, {} warnings",
            stats.applied, stats.warnings
        ))
    }
}
