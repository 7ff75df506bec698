//! Daily goals and traffic-light adherence classification.
//!
//! Energy and protein are classified by different policies because "over
//! goal" has opposite connotations: exceeding the energy goal is an alert,
//! exceeding the protein goal is never penalized.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_ENERGY_GOAL: u32 = 2000;
const DEFAULT_PROTEIN_GOAL: u32 = 150;

const GOOD_THRESHOLD: f64 = 0.80;
const MODERATE_THRESHOLD: f64 = 0.50;

/// User-configurable daily goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    /// Daily energy goal in kilocalories.
    #[serde(rename = "energyGoal")]
    pub energy_goal: u32,
    /// Daily protein goal in grams.
    #[serde(rename = "proteinGoal")]
    pub protein_goal: u32,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            energy_goal: DEFAULT_ENERGY_GOAL,
            protein_goal: DEFAULT_PROTEIN_GOAL,
        }
    }
}

impl Goals {
    /// Build goals, rejecting non-positive values.
    ///
    /// # Errors
    /// [`ConfigError::NonPositiveGoal`] if either goal is zero. Callers are
    /// expected to fall back to [`Goals::default`] rather than proceed.
    pub fn new(energy_goal: u32, protein_goal: u32) -> Result<Self, ConfigError> {
        if energy_goal == 0 {
            return Err(ConfigError::NonPositiveGoal {
                metric: "energy",
                value: f64::from(energy_goal),
            });
        }
        if protein_goal == 0 {
            return Err(ConfigError::NonPositiveGoal {
                metric: "protein",
                value: f64::from(protein_goal),
            });
        }
        Ok(Self {
            energy_goal,
            protein_goal,
        })
    }
}

/// Traffic-light adherence band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// Over the goal where that is the unsafe side (energy only)
    Over,
    /// At least 80% of goal
    Good,
    /// At least 50% of goal
    Moderate,
    /// Below 50% of goal
    Low,
}

/// Progress fraction toward a goal, capped at 1.0.
///
/// # Errors
/// [`ConfigError::NonPositiveGoal`] if `goal` is not strictly positive.
pub fn progress(current: f64, goal: f64) -> Result<f64, ConfigError> {
    check_goal("goal", goal)?;
    Ok((current / goal).min(1.0))
}

/// Coarse binary over-goal flag, independent of the four-band classification.
/// Strictly greater than the goal counts as over; exactly at goal does not.
///
/// # Errors
/// [`ConfigError::NonPositiveGoal`] if `goal` is not strictly positive.
pub fn exceeds(current: f64, goal: f64) -> Result<bool, ConfigError> {
    check_goal("goal", goal)?;
    Ok(current > goal)
}

/// Classify energy intake, where lower is the safe side.
///
/// Anything strictly over the goal is [`Band::Over`] regardless of the capped
/// percentage; below that the 80%/50% thresholds apply.
///
/// # Errors
/// [`ConfigError::NonPositiveGoal`] if `goal` is zero.
pub fn energy_band(current: u32, goal: u32) -> Result<Band, ConfigError> {
    check_goal("energy", f64::from(goal))?;
    if current > goal {
        return Ok(Band::Over);
    }
    Ok(band_from_ratio(f64::from(current) / f64::from(goal)))
}

/// Classify protein intake, where higher is the safe side: exceeding the goal
/// is never penalized, so there is no over band.
///
/// # Errors
/// [`ConfigError::NonPositiveGoal`] if `goal` is zero.
pub fn protein_band(current: f64, goal: u32) -> Result<Band, ConfigError> {
    check_goal("protein", f64::from(goal))?;
    Ok(band_from_ratio(current / f64::from(goal)))
}

fn band_from_ratio(ratio: f64) -> Band {
    if ratio >= GOOD_THRESHOLD {
        Band::Good
    } else if ratio >= MODERATE_THRESHOLD {
        Band::Moderate
    } else {
        Band::Low
    }
}

fn check_goal(metric: &'static str, goal: f64) -> Result<(), ConfigError> {
    if goal <= 0.0 {
        return Err(ConfigError::NonPositiveGoal {
            metric,
            value: goal,
        });
    }
    Ok(())
}
