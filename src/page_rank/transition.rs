use crate::{
    common::keyed,
    error::{check_damping, InvalidInput, Result},
    Distribution, LinkGraph,
};
use std::hash::Hash;

/// Distribution over the page a random surfer visits after `page`.
///
/// With probability `damping` the surfer follows one of `page`'s out-links,
/// chosen uniformly; otherwise it jumps to any page of the graph. A dangling
/// page always jumps.
pub fn transition<P>(graph: &LinkGraph<P>, page: &P, damping: f64) -> Result<Distribution<P>, P>
where
    P: Clone + Eq + Hash + Ord,
{
    check_damping(damping)?;
    if graph.is_empty() {
        return Err(InvalidInput::EmptyGraph.into());
    }
    let u = graph.index_of(page).ok_or(InvalidInput::UnknownPage)?;
    let mut weights = Vec::with_capacity(graph.len());
    weights_into(graph, u, damping, &mut weights);
    Ok(keyed(graph, &weights))
}

/// Writes the transition weights out of page `u` into `buf`, indexed by page.
pub(crate) fn weights_into<P>(graph: &LinkGraph<P>, u: usize, damping: f64, buf: &mut Vec<f64>) {
    let n = graph.len();
    let out_degree = graph.out_degree_at(u);
    buf.clear();
    if out_degree == 0 {
        buf.resize(n, 1.0 / n as f64);
        return;
    }
    buf.resize(n, (1.0 - damping) / n as f64);
    let unit = damping / out_degree as f64;
    for v in graph.out_indices(u) {
        buf[v] += unit;
    }
}
