use crate::error::{check_damping, check_tolerance, InvalidInput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Probability of following an out-link instead of jumping to a random page.
    pub damping: f64,
    /// Length of the random walk.
    pub sample_count: usize,
    /// Power iteration stops once no page moves by more than this.
    pub convergence_tolerance: f64,
    /// Hard cap on power-iteration passes.
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            sample_count: 10_000,
            convergence_tolerance: 1e-3,
            max_iterations: 10_000,
        }
    }
}

impl Config {
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_convergence_tolerance(mut self, tolerance: f64) -> Self {
        self.convergence_tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_damping(self.damping)?;
        check_tolerance(self.convergence_tolerance)?;
        if self.sample_count == 0 {
            return Err(InvalidInput::SampleCount);
        }
        if self.max_iterations == 0 {
            return Err(InvalidInput::IterationCap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.damping, 0.85);
        assert_eq!(cfg.sample_count, 10_000);
        assert_eq!(cfg.convergence_tolerance, 1e-3);
        assert_eq!(cfg.max_iterations, 10_000);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = Config::default();
        assert_eq!(
            cfg.clone().with_damping(1.0).validate(),
            Err(InvalidInput::Damping(1.0))
        );
        assert_eq!(
            cfg.clone().with_sample_count(0).validate(),
            Err(InvalidInput::SampleCount)
        );
        assert_eq!(
            cfg.clone().with_convergence_tolerance(0.0).validate(),
            Err(InvalidInput::Tolerance(0.0))
        );
        assert_eq!(
            cfg.with_max_iterations(0).validate(),
            Err(InvalidInput::IterationCap)
        );
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: Config = serde_json::from_str(r#"{"damping": 0.5}"#).unwrap();
        assert_eq!(cfg, Config::default().with_damping(0.5));
    }
}
