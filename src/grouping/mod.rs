// file: src/grouping/mod.rs
// description: group key parsing, ordering and tree building exports
// reference: internal module structure

pub mod collation;
pub mod order;
pub mod patterns;
pub mod tree;

pub use collation::CollationKey;
pub use order::{OrderingRules, compare_labels};
pub use tree::{CategoryGroup, DocumentTree, FlatGroup, YearGroup};
