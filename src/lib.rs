mod common;
pub use self::common::*;
pub mod config;
pub use self::config::Config;
pub mod error;
pub use self::error::{Error, InvalidInput, Result};
pub mod graph;
pub use self::graph::LinkGraph;

pub mod page_rank;
pub use self::page_rank::{iterative_rank, sample_rank, sample_rank_seeded, transition};

use self::page_rank::{IteratedPageRank, SampledPageRank};
use rand::Rng;
use std::hash::Hash;

/// The two independent estimates produced for one graph.
#[derive(Debug, Clone)]
pub struct Rankings<P> {
    pub sampled: RankVector<P>,
    pub iterated: RankVector<P>,
}

/// Runs both estimators over `graph` under `config`.
///
/// The walk draws from `rng`. Nothing is merged: each vector is returned as
/// its estimator produced it.
pub fn rank<P, R>(graph: &LinkGraph<P>, config: &Config, rng: &mut R) -> Result<Rankings<P>, P>
where
    P: Clone + Eq + Hash + Ord,
    R: Rng,
{
    config.validate()?;
    let sampled = SampledPageRank::new(graph, config)?.calc(rng).page_rank;
    let iterated = IteratedPageRank::new(graph, config)?.calc()?.page_rank;
    Ok(Rankings { sampled, iterated })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::corpus;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn both_estimates_cover_every_page() {
        let g = corpus(&[("A", &["B", "C"]), ("B", &["C"]), ("C", &["A"]), ("D", &["C"])]);
        let mut rng = SmallRng::seed_from_u64(3407);
        let rankings = rank(&g, &Config::default(), &mut rng).unwrap();
        for p in g.pages().iter() {
            assert!(rankings.sampled.contains_key(p));
            assert!(rankings.iterated.contains_key(p));
        }
        assert!((norm_1(&rankings.sampled) - 1.0).abs() < 1e-9);
        assert!((norm_1(&rankings.iterated) - 1.0).abs() < 1e-9);
        assert!(rankings.iterated["C"] > rankings.iterated["D"]);
    }

    #[test]
    fn single_page_from_config() {
        let g = corpus(&[("A", &[])]);
        let mut rng = SmallRng::seed_from_u64(3407);
        let rankings = rank(&g, &Config::default(), &mut rng).unwrap();
        assert_eq!(rankings.sampled["A"], 1.0);
        assert_eq!(rankings.iterated["A"], 1.0);
    }

    #[test]
    fn invalid_config_is_reported() {
        let g = corpus(&[("A", &[])]);
        let mut rng = SmallRng::seed_from_u64(3407);
        let cfg = Config::default().with_damping(f64::NAN);
        let err = rank(&g, &cfg, &mut rng).unwrap_err();
        assert!(err.is_invalid_input(), "{err:?}");
    }
}
