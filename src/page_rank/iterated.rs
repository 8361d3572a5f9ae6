use super::*;
use crate::{
    common::{keyed, norm_inf_diff},
    error::{check_damping, check_tolerance, Error, InvalidInput, Result},
    Config, LinkGraph, RankVector,
};
use std::hash::Hash;
use tracing::debug;

/// PageRank by power iteration.
///
/// The rank mass of dangling pages is spread uniformly over all pages, so every
/// iterate sums to 1.
pub struct IteratedPageRank<'a, P> {
    graph: &'a LinkGraph<P>,
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
    in_links: Vec<Vec<usize>>,
    // 0 for dangling pages
    inv_out_degree: Vec<f64>,
    dangling: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Outcome<P> {
    pub page_rank: RankVector<P>,
    /// Per-page change made by the final pass.
    pub delta: RankVector<P>,
    pub iterations: usize,
}

impl<'a, P> IteratedPageRank<'a, P>
where
    P: Clone + Eq + Hash + Ord,
{
    pub fn new(graph: &'a LinkGraph<P>, config: &Config) -> Result<Self, P> {
        check_damping(config.damping)?;
        check_tolerance(config.convergence_tolerance)?;
        if config.max_iterations == 0 {
            return Err(InvalidInput::IterationCap.into());
        }
        if graph.is_empty() {
            return Err(InvalidInput::EmptyGraph.into());
        }
        let n = graph.len();
        let in_links = (0..n)
            .map(|v| {
                let mut us: Vec<_> = graph.in_indices(v).collect();
                us.sort_unstable();
                us
            })
            .collect();
        let mut inv_out_degree = Vec::with_capacity(n);
        let mut dangling = vec![];
        for u in 0..n {
            let d = graph.out_degree_at(u);
            if d == 0 {
                dangling.push(u);
                inv_out_degree.push(0.0);
            } else {
                inv_out_degree.push(1.0 / d as f64);
            }
        }
        Ok(Self {
            graph,
            damping: config.damping,
            tolerance: config.convergence_tolerance,
            max_iterations: config.max_iterations,
            in_links,
            inv_out_degree,
            dangling,
        })
    }

    /// Iterates from the uniform vector until no page moves by more than the
    /// tolerance, or fails with [`Error::NumericDivergence`] at the iteration cap.
    pub fn calc(&self) -> Result<Outcome<P>, P> {
        let n = self.graph.len();
        if n == 1 {
            return Ok(Outcome {
                page_rank: keyed(self.graph, &[1.0]),
                delta: keyed(self.graph, &[0.0]),
                iterations: 0,
            });
        }

        let nf = n as f64;
        let teleport = (1.0 - self.damping) / nf;
        let mut p = vec![1.0 / nf; n];
        let mut r = vec![0.0; n];
        let mut iterations = 0;
        loop {
            iterations += 1;
            let dangling_mass: f64 = self.dangling.iter().map(|u| p[*u]).sum();
            let base = teleport + self.damping * dangling_mass / nf;
            self.step(&p, &mut r, base);

            let delta = norm_inf_diff(&p, &r);
            if delta <= self.tolerance {
                debug!(pages = n, iterations, delta, "power iteration converged");
                let diff: Vec<f64> = r.iter().zip(p.iter()).map(|(a, b)| a - b).collect();
                return Ok(Outcome {
                    page_rank: keyed(self.graph, &r),
                    delta: keyed(self.graph, &diff),
                    iterations,
                });
            }
            if iterations >= self.max_iterations {
                debug!(
                    pages = n,
                    iterations,
                    delta,
                    tolerance = self.tolerance,
                    "power iteration hit its cap"
                );
                return Err(Error::NumericDivergence {
                    iterations,
                    delta,
                    last: keyed(self.graph, &r),
                });
            }

            std::mem::swap(&mut p, &mut r);
        }
    }

    /// Computes the next iterate of `p` into `r`. `p` is never written.
    fn step(&self, p: &[f64], r: &mut [f64], base: f64) {
        let damping = self.damping;
        let in_links = &self.in_links;
        let inv_out_degree = &self.inv_out_degree;
        let update = |v: usize| -> f64 {
            let inflow: f64 = in_links[v]
                .iter()
                .map(|u| p[*u] * inv_out_degree[*u])
                .sum();
            base + damping * inflow
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            r.par_iter_mut()
                .enumerate()
                .for_each(|(v, x)| *x = update(v));
        }
        #[cfg(not(feature = "parallel"))]
        for (v, x) in r.iter_mut().enumerate() {
            *x = update(v);
        }
    }
}

/// PageRank by power iteration, capped at the default number of passes.
pub fn iterative_rank<P>(
    graph: &LinkGraph<P>,
    damping: f64,
    tolerance: f64,
) -> Result<RankVector<P>, P>
where
    P: Clone + Eq + Hash + Ord,
{
    let cfg = Config::default()
        .with_damping(damping)
        .with_convergence_tolerance(tolerance);
    let ipr = IteratedPageRank::new(graph, &cfg)?;
    Ok(ipr.calc()?.page_rank)
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
            let d = self.outcome.delta.get(v).copied().unwrap_or_default();
            writeln!(f, "{v:?}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
