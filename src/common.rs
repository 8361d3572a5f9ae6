use crate::LinkGraph;
use std::{collections::HashMap, hash::Hash};

/// Page → probability. Sums to 1 within 1e-9.
pub type Distribution<P> = HashMap<P, f64, ahash::RandomState>;

/// Page → estimated importance.
pub type RankVector<P> = HashMap<P, f64, ahash::RandomState>;

pub fn norm_1<K: Eq + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub(crate) fn norm_inf_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

pub(crate) fn keyed<P, T>(graph: &LinkGraph<P>, values: &[T]) -> HashMap<P, T, ahash::RandomState>
where
    P: Clone + Eq + Hash,
    T: Copy,
{
    graph
        .pages()
        .iter()
        .cloned()
        .zip(values.iter().copied())
        .collect()
}
