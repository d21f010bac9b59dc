//! Startup configuration
//!
//! All tunables live in a single immutable [`Config`] value constructed once
//! in `main` and passed by reference to the components that need it. Invalid
//! values are rejected by [`Config::validate`] before the terminal is touched:
//! the bar-height scale divides by the value span, so a degenerate range must
//! abort startup rather than be papered over.

use std::fmt;

/// Immutable startup configuration for the visualizer
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of elements in the generated array
    pub array_len: usize,

    /// Inclusive lower bound of generated values
    pub min_value: u32,

    /// Inclusive upper bound of generated values
    pub max_value: u32,

    /// Redraw rate (frames per second) while no sort is running
    pub idle_fps: u32,

    /// Initial sorting speed (stepper resumptions per second)
    pub initial_speed: u32,

    /// Lower clamp for the adjustable speed
    pub speed_min: u32,

    /// Upper clamp for the adjustable speed
    pub speed_max: u32,

    /// Speed change per keypress
    pub speed_step: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            array_len: 50,
            min_value: 0,
            max_value: 100,
            idle_fps: 60,
            initial_speed: 60,
            speed_min: 1,
            speed_max: 200,
            speed_step: 10,
        }
    }
}

impl Config {
    /// Check the configuration for values the rest of the system cannot
    /// operate on. Called once at startup; a failure here is fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.array_len == 0 {
            return Err(ConfigError::EmptyArray);
        }
        if self.min_value >= self.max_value {
            // Equal bounds would give the bar chart a zero value span.
            return Err(ConfigError::InvalidValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.idle_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.speed_min == 0 || self.speed_min > self.speed_max {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.speed_min,
                max: self.speed_max,
            });
        }
        if self.initial_speed < self.speed_min || self.initial_speed > self.speed_max {
            return Err(ConfigError::InitialSpeedOutOfRange {
                speed: self.initial_speed,
                min: self.speed_min,
                max: self.speed_max,
            });
        }
        Ok(())
    }
}

/// Configuration errors detected at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Array length of zero
    EmptyArray,

    /// min_value >= max_value (zero or negative value span)
    InvalidValueRange { min: u32, max: u32 },

    /// Idle frame rate of zero would stall the render loop
    ZeroFrameRate,

    /// Speed clamp bounds are empty or start at zero
    InvalidSpeedRange { min: u32, max: u32 },

    /// Initial speed outside the clamp bounds
    InitialSpeedOutOfRange { speed: u32, min: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyArray => {
                write!(f, "Array length must be at least 1")
            }
            ConfigError::InvalidValueRange { min, max } => {
                write!(
                    f,
                    "Value range [{}, {}] is degenerate: min must be strictly below max",
                    min, max
                )
            }
            ConfigError::ZeroFrameRate => {
                write!(f, "Idle frame rate must be at least 1")
            }
            ConfigError::InvalidSpeedRange { min, max } => {
                write!(f, "Speed bounds [{}, {}] are invalid", min, max)
            }
            ConfigError::InitialSpeedOutOfRange { speed, min, max } => {
                write!(
                    f,
                    "Initial speed {} is outside the configured bounds [{}, {}]",
                    speed, min, max
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_length_rejected() {
        let config = Config {
            array_len: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyArray));
    }

    #[test]
    fn test_equal_range_rejected() {
        let config = Config {
            min_value: 42,
            max_value: 42,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidValueRange { min: 42, max: 42 })
        );
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = Config {
            min_value: 100,
            max_value: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_initial_speed_must_be_within_bounds() {
        let config = Config {
            initial_speed: 500,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialSpeedOutOfRange { .. })
        ));
    }
}
