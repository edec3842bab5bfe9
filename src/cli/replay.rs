//! Delta replay: feeds recorded delta documents into a model in order.

use crate::error::ModelError;
use crate::instance::MachineModel;
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// A delta line that could not be applied.
#[derive(Debug)]
pub struct ReplayFailure {
    /// 1-based line number in the input.
    pub line: usize,
    pub error: ModelError,
}

/// Counters for one replay run.
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub applied: usize,
    pub skipped: usize,
    pub warnings: usize,
    pub failures: Vec<ReplayFailure>,
}

impl ReplayStats {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Replay every delta in `path` into `model`.
pub fn replay_file(path: &Path, model: &MachineModel, strict: bool) -> anyhow::Result<ReplayStats> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    replay_lines(BufReader::new(file), model, strict)
}

/// Replay newline-delimited deltas. Blank lines and lines starting with `#` are skipped.
///
/// A failing line is recorded and replay continues, unless `strict` is set, in which
/// case replay stops after recording it.
pub fn replay_lines<R: BufRead>(
    reader: R,
    model: &MachineModel,
    strict: bool,
) -> anyhow::Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            stats.skipped += 1;
            continue;
        }

        match model.apply_delta_str(trimmed) {
            Ok(report) => {
                for warning in &report.warnings {
                    debug!(line = line_no, %warning, "Delta warning");
                }
                stats.applied += 1;
                stats.warnings += report.warnings.len();
            }
            Err(error) => {
                warn!(line = line_no, error = %error, "Delta failed");
                stats.failures.push(ReplayFailure {
                    line: line_no,
                    error,
                });
                if strict {
                    break;
                }
            }
        }
    }

    Ok(stats)
}
