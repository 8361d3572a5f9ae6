use crate::RankVector;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error<P> {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Power iteration hit its cap. `last` is the vector produced by the final pass.
    #[error("power iteration did not converge within {iterations} iterations (delta={delta})")]
    NumericDivergence {
        iterations: usize,
        delta: f64,
        last: RankVector<P>,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("the graph has no pages")]
    EmptyGraph,

    #[error("damping factor must lie strictly between 0 and 1, got {0}")]
    Damping(f64),

    #[error("sample count must be at least 1")]
    SampleCount,

    #[error("convergence tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("iteration cap must be at least 1")]
    IterationCap,

    #[error("page is not part of the graph")]
    UnknownPage,
}

pub type Result<T, P> = std::result::Result<T, Error<P>>;

impl<P> Error<P> {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_divergence(&self) -> bool {
        matches!(self, Self::NumericDivergence { .. })
    }
}

pub(crate) fn check_damping(damping: f64) -> std::result::Result<(), InvalidInput> {
    if damping.is_finite() && damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(InvalidInput::Damping(damping))
    }
}

pub(crate) fn check_tolerance(tolerance: f64) -> std::result::Result<(), InvalidInput> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        Err(InvalidInput::Tolerance(tolerance))
    }
}
