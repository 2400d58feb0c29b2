mod generic_path;
pub use generic_path::Path;

/// The unit of traversal costs.
pub type Cost = usize;
