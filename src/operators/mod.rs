//! Stateless relational operators over Z-sets (spec §4.1). Every function
//! here is a pure function: inputs are Z-sets, outputs are canonical
//! Z-sets, no state is retained between calls. One operator per file,
//! matching the teacher crate's `operator/{filter,join,distinct,...}.rs`
//! layout.

pub mod aggregate;
pub mod cartesian;
pub mod distinct;
pub mod filter;
pub mod group_by;
pub mod join;
pub mod project;
pub mod topk;

pub use aggregate::{average, count, sum};
pub use cartesian::cartesian_product;
pub use distinct::{difference, distinct, union};
pub use filter::filter;
pub use group_by::group_by;
pub use join::{equi_join, intersect};
pub use project::project;
pub use topk::top_k;
