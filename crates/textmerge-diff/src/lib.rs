//! Textmerge Diff - the sequence-alignment engine
//!
//! Computes line-level differences between two texts and three-way merges
//! between a base text and two divergent revisions (local/remote):
//! - **LCS core** - dense dynamic-programming tables, two- and
//!   three-sequence variants with an injectable equality policy
//! - **Solution iterators** - single-pass conversion of match lists into
//!   typed, gap-free spans
//! - **Entry points** - [`diff`], [`diff3`] and their slice-level variants
//! - **Directory diffing** - [`diff_dirs`] classification of two trees
//!
//! The engine is synchronous and pure: every call allocates its own result,
//! nothing is retained between calls, and the only mutation a result
//! supports afterwards is the caller-side resolution state on merge
//! segments.

pub mod dirdiff;
pub mod engine;
pub mod error;
pub mod lcs;
pub mod solution;

// Re-export the public surface
pub use dirdiff::{diff_dirs, DirDiffResult};
pub use engine::{
    diff, diff3, diff3_slices, diff3_with_options, diff_slices, diff_with_options, Diff2Result,
    Diff3Result,
};
pub use error::DirDiffError;
