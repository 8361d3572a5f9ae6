use super::{transition::weights_into, *};
use crate::{
    common::keyed,
    error::{check_damping, InvalidInput, Result},
    Config, LinkGraph, RankVector,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{collections::HashMap, hash::Hash};
use tracing::debug;

/// Monte Carlo estimate of PageRank: the visit frequencies of one random walk.
pub struct SampledPageRank<'a, P> {
    graph: &'a LinkGraph<P>,
    damping: f64,
    sample_count: usize,
}

#[derive(Debug, Clone)]
pub struct Outcome<P> {
    pub page_rank: RankVector<P>,
    /// Raw visit counts. They sum to the walk length.
    pub visits: HashMap<P, usize, ahash::RandomState>,
}

impl<'a, P> SampledPageRank<'a, P>
where
    P: Clone + Eq + Hash + Ord,
{
    pub fn new(graph: &'a LinkGraph<P>, config: &Config) -> Result<Self, P> {
        check_damping(config.damping)?;
        if config.sample_count == 0 {
            return Err(InvalidInput::SampleCount.into());
        }
        if graph.is_empty() {
            return Err(InvalidInput::EmptyGraph.into());
        }
        Ok(Self {
            graph,
            damping: config.damping,
            sample_count: config.sample_count,
        })
    }

    /// Walks `sample_count` pages, starting from a uniformly chosen one.
    ///
    /// All randomness comes from `rng`, so a seeded generator replays the same walk.
    pub fn calc<R: Rng>(&self, rng: &mut R) -> Outcome<P> {
        let n = self.graph.len();
        let mut visits = vec![0usize; n];
        if n == 1 {
            // nowhere else to go
            visits[0] = self.sample_count;
        } else {
            let mut weights = Vec::with_capacity(n);
            let mut cumulative = Vec::with_capacity(n);
            let mut cur = rng.random_range(0..n);
            visits[cur] += 1;
            for _ in 1..self.sample_count {
                weights_into(self.graph, cur, self.damping, &mut weights);
                cur = weighted_choice(&weights, &mut cumulative, rng);
                visits[cur] += 1;
            }
        }
        debug!(
            pages = n,
            samples = self.sample_count,
            damping = self.damping,
            "random walk finished"
        );

        let total = self.sample_count as f64;
        let ranks: Vec<f64> = visits.iter().map(|c| *c as f64 / total).collect();
        Outcome {
            page_rank: keyed(self.graph, &ranks),
            visits: keyed(self.graph, &visits),
        }
    }
}

/// Picks an index with probability proportional to its weight.
///
/// `cumulative` is scratch space, reused across calls.
fn weighted_choice<R: Rng>(weights: &[f64], cumulative: &mut Vec<f64>, rng: &mut R) -> usize {
    cumulative.clear();
    let mut acc = 0.0;
    for w in weights.iter() {
        acc += w;
        cumulative.push(acc);
    }
    let x = rng.random::<f64>() * acc;
    let i = cumulative.partition_point(|c| *c <= x);
    i.min(weights.len() - 1)
}

/// Estimates PageRank from a random walk of `n` pages.
pub fn sample_rank<P, R>(
    graph: &LinkGraph<P>,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> Result<RankVector<P>, P>
where
    P: Clone + Eq + Hash + Ord,
    R: Rng,
{
    let cfg = Config::default()
        .with_damping(damping)
        .with_sample_count(n);
    let spr = SampledPageRank::new(graph, &cfg)?;
    Ok(spr.calc(rng).page_rank)
}

/// [`sample_rank`] driven by a [`StdRng`] seeded with `seed`.
pub fn sample_rank_seeded<P>(
    graph: &LinkGraph<P>,
    damping: f64,
    n: usize,
    seed: u64,
) -> Result<RankVector<P>, P>
where
    P: Clone + Eq + Hash + Ord,
{
    let mut rng = StdRng::seed_from_u64(seed);
    sample_rank(graph, damping, n, &mut rng)
}

impl<P> PageRankResult<P> for Outcome<P>
where
    P: std::fmt::Debug + Eq + Hash,
{
    fn page_rank(&self) -> &RankVector<P> {
        &self.page_rank
    }

    fn into_page_rank(self) -> RankVector<P> {
        self.page_rank
    }

    fn debug<'a>(&'a self, graph: &'a LinkGraph<P>) -> impl std::fmt::Debug + 'a {
        OutcomeDebug {
            graph,
            outcome: self,
        }
    }
}

pub struct OutcomeDebug<'a, P> {
    graph: &'a LinkGraph<P>,
    outcome: &'a Outcome<P>,
}

impl<P> std::fmt::Debug for OutcomeDebug<'_, P>
where
    P: std::fmt::Debug + Eq + Hash,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.pages().iter() {
            let p = self.outcome.page_rank.get(v).copied().unwrap_or_default();
            let c = self.outcome.visits.get(v).copied().unwrap_or_default();
            writeln!(f, "{v:?}: {p:?}, {c:?}")?;
        }
        Ok(())
    }
}
