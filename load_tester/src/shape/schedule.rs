//!
//! The staged traffic shape schedule.
//!

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::shape::stage::Stage;
use crate::shape::target::Target;
use crate::shape::Shape;

///
/// The staged traffic shape schedule.
///
/// Stages are evaluated in order against the elapsed run time. The run stops
/// once the elapsed time reaches the last stage threshold.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// The stages, with strictly increasing thresholds.
    stages: Vec<Stage>,
}

impl Schedule {
    ///
    /// A shortcut constructor, validating the stages.
    ///
    pub fn new(stages: Vec<Stage>) -> anyhow::Result<Self> {
        if stages.is_empty() {
            anyhow::bail!("Traffic shape schedule must contain at least one stage");
        }

        let mut previous = 0.0;
        for (index, stage) in stages.iter().enumerate() {
            if !stage.until.is_finite() || stage.until <= previous {
                anyhow::bail!(
                    "Traffic shape stage #{index} threshold {}s must be finite and greater than {previous}s",
                    stage.until
                );
            }
            if !stage.spawn_rate.is_finite() || stage.spawn_rate <= 0.0 {
                anyhow::bail!(
                    "Traffic shape stage #{index} spawn rate {} must be finite and positive",
                    stage.spawn_rate
                );
            }
            previous = stage.until;
        }

        Ok(Self { stages })
    }

    ///
    /// The spike schedule: warm-up, spike, cool-down, then stop at two minutes.
    ///
    pub fn spike() -> Self {
        Self {
            stages: vec![
                Stage::new(30.0, 25, 25.0),
                Stage::new(90.0, 125, 125.0),
                Stage::new(120.0, 25, 25.0),
            ],
        }
    }

    ///
    /// A single-stage schedule holding `users` for `run_time`.
    ///
    pub fn constant(users: usize, spawn_rate: f64, run_time: Duration) -> anyhow::Result<Self> {
        Self::new(vec![Stage::new(run_time.as_secs_f64(), users, spawn_rate)])
    }

    ///
    /// Returns the stages.
    ///
    pub fn stages(&self) -> &[Stage] {
        self.stages.as_slice()
    }

    ///
    /// Returns the total run duration.
    ///
    pub fn duration(&self) -> Duration {
        self.stages
            .last()
            .map(|stage| Duration::from_secs_f64(stage.until))
            .unwrap_or_default()
    }
}

impl Shape for Schedule {
    fn tick(&self, elapsed: Duration) -> Option<Target> {
        let seconds = elapsed.as_secs_f64();
        self.stages
            .iter()
            .find(|stage| stage.is_active(seconds))
            .map(Stage::target)
    }
}

impl TryFrom<&Path> for Schedule {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Traffic shape file {path:?} reading: {error}"))?;
        let schedule: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Traffic shape file {path:?} parsing: {error}"))?;
        Self::new(schedule.stages)
            .map_err(|error| anyhow::anyhow!("Traffic shape file {path:?} validation: {error}"))
    }
}
