use algograph::graph::*;
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
    hash::Hash,
};
use tracing::debug;

/// An immutable directed link graph over pages of type `P`.
///
/// Every out-link target is itself a page of the graph and no page links to
/// itself. Pages are enumerated in ascending order.
pub struct LinkGraph<P> {
    graph: directed::TreeBackedGraph,
    pages: Vec<P>,
    vertices: Vec<VertexId>,
    index: HashMap<P, usize, ahash::RandomState>,
    vertex_index: HashMap<VertexId, usize, ahash::RandomState>,
}

impl<P> LinkGraph<P>
where
    P: Clone + Eq + Hash + Ord,
{
    /// Builds a graph from raw link data.
    ///
    /// Self-references and references to pages that are not keys of `raw` are
    /// dropped. A page listed more than once gets the union of its link sets.
    pub fn from_links<I, L>(raw: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        L: IntoIterator<Item = P>,
    {
        let mut merged: BTreeMap<P, BTreeSet<P>> = BTreeMap::new();
        for (page, links) in raw {
            merged.entry(page).or_default().extend(links);
        }

        let pages: Vec<P> = merged.keys().cloned().collect();
        let index: HashMap<_, _, ahash::RandomState> = pages
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, p)| (p, i))
            .collect();
        let mut graph = directed::TreeBackedGraph::new();
        let vertices: Vec<_> = pages.iter().map(|_| graph.add_vertex()).collect();
        let vertex_index: HashMap<_, _, ahash::RandomState> = vertices
            .iter()
            .copied()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();

        let mut dropped = 0usize;
        for (u, links) in merged.values().enumerate() {
            for link in links.iter() {
                match index.get(link) {
                    Some(&v) if v != u => {
                        graph.add_edge(vertices[u], vertices[v]);
                    }
                    _ => dropped += 1,
                }
            }
        }
        debug!(
            pages = pages.len(),
            edges = graph.edge_size(),
            dropped,
            "normalized link graph"
        );

        Self {
            graph,
            pages,
            vertices,
            index,
            vertex_index,
        }
    }

    pub fn contains(&self, page: &P) -> bool {
        self.index.contains_key(page)
    }

    pub fn out_links<'a>(&'a self, page: &P) -> Option<impl Iterator<Item = &'a P> + 'a> {
        let i = self.index_of(page)?;
        Some(self.out_indices(i).map(|v| &self.pages[v]))
    }

    pub fn in_links<'a>(&'a self, page: &P) -> Option<impl Iterator<Item = &'a P> + 'a> {
        let i = self.index_of(page)?;
        Some(self.in_indices(i).map(|u| &self.pages[u]))
    }

    pub fn out_degree(&self, page: &P) -> Option<usize> {
        self.index_of(page).map(|i| self.out_degree_at(i))
    }

    pub(crate) fn index_of(&self, page: &P) -> Option<usize> {
        self.index.get(page).copied()
    }
}

impl<P> LinkGraph<P> {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All pages, in ascending order.
    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_size()
    }

    pub fn dangling_pages(&self) -> impl Iterator<Item = &P> + '_ {
        (0..self.len())
            .filter(|i| self.out_degree_at(*i) == 0)
            .map(|i| &self.pages[i])
    }

    pub(crate) fn out_indices(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .out_edges(&self.vertices[i])
            .map(|e| self.vertex_index[&e.sink])
    }

    pub(crate) fn in_indices(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .in_edges(&self.vertices[i])
            .map(|e| self.vertex_index[&e.source])
    }

    pub(crate) fn out_degree_at(&self, i: usize) -> usize {
        self.graph.out_edges(&self.vertices[i]).count()
    }
}

impl<P, L> FromIterator<(P, L)> for LinkGraph<P>
where
    P: Clone + Eq + Hash + Ord,
    L: IntoIterator<Item = P>,
{
    fn from_iter<I: IntoIterator<Item = (P, L)>>(iter: I) -> Self {
        Self::from_links(iter)
    }
}

impl<P: fmt::Debug> fmt::Debug for LinkGraph<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (i, page) in self.pages.iter().enumerate() {
            let mut links: Vec<_> = self.out_indices(i).collect();
            links.sort_unstable();
            let links: Vec<_> = links.into_iter().map(|v| &self.pages[v]).collect();
            map.entry(page, &links);
        }
        map.finish()
    }
}
