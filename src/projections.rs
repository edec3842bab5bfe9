//! Derived Projections
//!
//! Read-only values computed from the tree on every call. Nothing is cached, so a
//! projection can never disagree with the tree it was read from.

use crate::model::{MachineStatus, ObjectModel, Tool};

impl ObjectModel {
    /// Tool selected by `state.currentTool`, if that index exists.
    pub fn current_tool(&self) -> Option<&Tool> {
        usize::try_from(self.state.current_tool)
            .ok()
            .and_then(|index| self.tools.get(index))
    }

    /// File position over file size, or 0 when the size is unknown.
    pub fn fraction_printed(&self) -> f64 {
        let size = self.job.file.size;
        if size == 0 {
            return 0.0;
        }
        self.job.file_position.unwrap_or(0) as f64 / size as f64
    }

    /// Highest configured `max` across all heaters; `None` without heaters.
    pub fn max_heater_temperature(&self) -> Option<f64> {
        self.heat
            .heaters
            .iter()
            .map(|heater| heater.max)
            .fold(None, |acc, max| match acc {
                Some(current) if current >= max => Some(current),
                _ => Some(max),
            })
    }

    /// Progress of the current job in `[0, 1]`.
    ///
    /// While simulating with a known filament total, extruded filament over expected
    /// filament is used; otherwise the file fraction. Without an active job this is
    /// 1 if a previous job ran, else 0.
    pub fn job_progress(&self) -> f64 {
        let status = self.state.status;
        if !status.is_printing() {
            let ran_before = self
                .job
                .last_file_name
                .as_deref()
                .is_some_and(|name| !name.is_empty());
            return if ran_before { 1.0 } else { 0.0 };
        }

        if status == MachineStatus::Simulating {
            let needed: f64 = self.job.file.filament.iter().sum();
            if needed > 0.0 {
                let extruded: f64 = self
                    .motion
                    .extruders
                    .iter()
                    .map(|extruder| extruder.raw_position)
                    .sum();
                return (extruded / needed).clamp(0.0, 1.0);
            }
        }
        self.fraction_printed().clamp(0.0, 1.0)
    }
}
