pub mod iterated;
pub mod sampled;
pub mod transition;
mod traits;
pub use self::traits::*;

pub use self::iterated::{iterative_rank, IteratedPageRank};
pub use self::sampled::{sample_rank, sample_rank_seeded, SampledPageRank};
pub use self::transition::transition;
