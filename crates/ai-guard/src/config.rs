//! Guard tuning, loadable from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{GuardError, Result};

/// Tuning knobs for one guard. Distances are world units, durations seconds, angles degrees.
///
/// Every field has a default, so a YAML file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Maximum distance at which the target can be seen.
    pub view_distance: f32,

    /// Full opening angle of the vision cone.
    pub view_angle: f32,

    /// Target closer than this is caught.
    pub catch_distance: f32,

    /// Arrival radius hosts hand to their navigator for waypoints and search points.
    pub waypoint_reach_distance: f32,

    /// How long a chase continues after the target was last perceived.
    pub chase_persistence: f32,

    /// How long the guard searches around the last known position.
    pub search_duration: f32,

    /// Turn rate while looking around during a search.
    pub look_around_speed: f32,

    /// How far the guard turns either way before reversing while looking around.
    pub look_around_sweep: f32,

    pub patrol_speed_multiplier: f32,
    pub chase_speed_multiplier: f32,
    pub search_speed_multiplier: f32,
    pub return_speed_multiplier: f32,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            view_distance: 10.0,
            view_angle: 60.0,
            catch_distance: 1.5,
            waypoint_reach_distance: 0.5,
            chase_persistence: 3.0,
            search_duration: 3.0,
            look_around_speed: 90.0,
            look_around_sweep: 90.0,
            patrol_speed_multiplier: 1.0,
            chase_speed_multiplier: 1.5,
            search_speed_multiplier: 0.8,
            return_speed_multiplier: 1.0,
        }
    }
}

impl GuardConfig {
    /// Load and validate a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GuardError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content, &path.display().to_string())
    }

    /// Parse and validate YAML text. `origin` names the source in error messages.
    pub fn from_yaml(content: &str, origin: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|source| GuardError::ParseConfig {
                origin: origin.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        positive("catch_distance", self.catch_distance)?;
        positive("view_distance", self.view_distance)?;
        non_negative("waypoint_reach_distance", self.waypoint_reach_distance)?;
        non_negative("chase_persistence", self.chase_persistence)?;
        non_negative("search_duration", self.search_duration)?;
        non_negative("look_around_speed", self.look_around_speed)?;
        non_negative("look_around_sweep", self.look_around_sweep)?;
        non_negative("patrol_speed_multiplier", self.patrol_speed_multiplier)?;
        non_negative("chase_speed_multiplier", self.chase_speed_multiplier)?;
        non_negative("search_speed_multiplier", self.search_speed_multiplier)?;
        non_negative("return_speed_multiplier", self.return_speed_multiplier)?;

        if !(self.view_angle > 0.0 && self.view_angle <= 360.0) {
            return Err(GuardError::InvalidConfig {
                field: "view_angle",
                reason: "must be in (0, 360]",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GuardError::InvalidConfig {
            field,
            reason: "must be a positive number",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GuardError::InvalidConfig {
            field,
            reason: "must be zero or a positive number",
        })
    }
}
