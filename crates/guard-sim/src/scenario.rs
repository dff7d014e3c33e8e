use std::path::Path;

use ai::guard::GuardConfig;
use ai::nav::Vec3;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Everything needed to set up one simulated guard and its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub guard: GuardConfig,
    pub guard_start: Vec3,
    /// Base movement speed in units per second, before state multipliers.
    pub guard_speed: f32,
    pub route: Vec<Vec3>,
    pub target: TargetScript,
}

/// A target that walks a fixed path at constant speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetScript {
    pub path: Vec<Vec3>,
    pub speed: f32,
    /// Start over from the first point after the last one.
    pub looped: bool,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            guard: GuardConfig::default(),
            guard_start: Vec3::ZERO,
            guard_speed: 3.0,
            route: vec![
                Vec3::new(0.0, 0.0, 10.0),
                Vec3::new(10.0, 0.0, 10.0),
                Vec3::new(10.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 0.0),
            ],
            target: TargetScript::default(),
        }
    }
}

impl Default for TargetScript {
    fn default() -> Self {
        Self {
            path: vec![
                Vec3::new(-6.0, 0.0, 16.0),
                Vec3::new(2.0, 0.0, 16.0),
                Vec3::new(30.0, 0.0, 40.0),
            ],
            speed: 2.0,
            looped: false,
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        let scenario: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        self.guard.validate().context("invalid guard section")?;
        anyhow::ensure!(
            self.guard_speed.is_finite() && self.guard_speed > 0.0,
            "guard_speed must be positive"
        );
        anyhow::ensure!(
            self.target.speed.is_finite() && self.target.speed >= 0.0,
            "target.speed must not be negative"
        );
        Ok(())
    }
}
