//! The stateful operator runtime (spec §4.6-§4.7, system overview L2):
//! the persistent-index join and the ordered top-K maintainer. Unlike
//! `operators` (stateless, recomputed from scratch every call), these
//! operators own mutable state across calls and are the reason incremental
//! view maintenance is cheaper than batch recomputation.

pub mod distinct;
pub mod join;
pub mod topk;

pub use distinct::StatefulDistinct;
pub use join::StatefulJoin;
pub use topk::StatefulTopK;
