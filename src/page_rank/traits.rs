use crate::{LinkGraph, RankVector};

pub trait PageRankResult<P> {
    fn page_rank(&self) -> &RankVector<P>;
    fn into_page_rank(self) -> RankVector<P>;
    /// Per-page dump in page order, for diagnostics.
    fn debug<'a>(&'a self, graph: &'a LinkGraph<P>) -> impl std::fmt::Debug + 'a;
}
