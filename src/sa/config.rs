//! Annealing run configuration.

use super::error::ConfigError;

/// Per-run parameters for [`Annealer::run`](super::Annealer::run).
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, applied once per
/// outer iteration.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.99)
///     .with_initial_x(0.0)
///     .with_bounds(-2.0, 2.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Its integer part is also the number of trials
    /// in the first outer iteration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Starting input value.
    pub initial_x: f64,

    /// Lower bound of the search interval.
    pub lower: f64,

    /// Upper bound of the search interval.
    pub upper: f64,

    /// Random seed for reproducibility.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.99,
            initial_x: 0.0,
            lower: -1.0,
            upper: 1.0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, a: f64) -> Self {
        self.cooling_rate = a;
        self
    }

    pub fn with_initial_x(mut self, x0: f64) -> Self {
        self.initial_x = x0;
        self
    }

    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// `initial_x` may lie outside the bounds; only sampled candidates are
    /// confined to `[lower, upper]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.initial_temperature;
        if !t.is_finite() || t <= 0.0 {
            return Err(ConfigError::Temperature(t));
        }
        let a = self.cooling_rate;
        if !(a > 0.0 && a < 1.0) {
            return Err(ConfigError::CoolingRate(a));
        }
        if !self.initial_x.is_finite() {
            return Err(ConfigError::InitialX(self.initial_x));
        }
        if !self.lower.is_finite() || !self.upper.is_finite() || self.lower >= self.upper {
            return Err(ConfigError::Bounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.99).abs() < 1e-10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(0.0);
        assert_eq!(config.validate(), Err(ConfigError::Temperature(0.0)));

        let config = SaConfig::default().with_initial_temperature(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        for a in [0.0, 1.0, 1.5, -0.3, f64::NAN] {
            let config = SaConfig::default().with_cooling_rate(a);
            assert!(
                matches!(config.validate(), Err(ConfigError::CoolingRate(_))),
                "cooling rate {a} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let config = SaConfig::default().with_bounds(2.0, -2.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Bounds {
                lower: 2.0,
                upper: -2.0
            })
        );
    }

    #[test]
    fn test_validate_empty_interval() {
        let config = SaConfig::default().with_bounds(1.0, 1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_initial_x() {
        let config = SaConfig::default().with_initial_x(f64::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::InitialX(_))));
    }

    #[test]
    fn test_error_message() {
        let err = SaConfig::default()
            .with_cooling_rate(1.5)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "cooling_rate must be in (0, 1), got 1.5");
    }
}
