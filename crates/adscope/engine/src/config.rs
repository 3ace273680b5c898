//! Engine tunables.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Every tunable constant of the belief engine in one place.
///
/// Defaults match the reference calibration; `validate` rejects values
/// that would break the update mathematics or the loop bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Learning rate for belief updates, within `(0.0, 1.0]`.
    pub alpha: f64,

    /// Belief every hypothesis starts from.
    pub base_belief: f64,

    /// Bonus added at initialization to hypotheses relevant to the
    /// scenario goal.
    pub goal_bonus: f64,

    /// Minimum exploration floor: termination never fires before this
    /// many steps.
    pub min_steps: u32,

    /// Hard cap on loop iterations.
    pub max_steps: u32,

    /// Belief at which the loop stops unconditionally.
    pub confidence_high: f64,

    /// Belief at which the loop stops once every probe relevant to the
    /// top hypothesis has executed successfully.
    pub confidence_medium: f64,

    /// Top-belief gains below this mark the previous probe as
    /// unproductive, suppressing its re-selection.
    pub gain_epsilon: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            base_belief: 0.30,
            goal_bonus: 0.05,
            min_steps: 3,
            max_steps: 5,
            confidence_high: 0.8,
            confidence_medium: 0.7,
            gain_epsilon: 0.05,
        }
    }
}

impl EngineConfig {
    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        for (name, value) in [
            ("base_belief", self.base_belief),
            ("goal_bonus", self.goal_bonus),
            ("confidence_high", self.confidence_high),
            ("confidence_medium", self.confidence_medium),
            ("gain_epsilon", self.gain_epsilon),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if self.base_belief + self.goal_bonus > 1.0 {
            return Err(EngineError::InvalidConfig(
                "base_belief + goal_bonus must not exceed 1.0".into(),
            ));
        }
        if self.min_steps > self.max_steps {
            return Err(EngineError::InvalidConfig(format!(
                "min_steps ({}) must not exceed max_steps ({})",
                self.min_steps, self.max_steps
            )));
        }
        if self.confidence_medium > self.confidence_high {
            return Err(EngineError::InvalidConfig(
                "confidence_medium must not exceed confidence_high".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        EngineConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_alpha_is_rejected() {
        let config = EngineConfig {
            alpha: 0.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_step_bounds_are_rejected() {
        let config = EngineConfig {
            min_steps: 9,
            max_steps: 5,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
