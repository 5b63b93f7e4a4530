//! Textmerge Core - Domain model for the alignment engine
//!
//! This crate contains the data model shared between the diff engine and
//! its presentation-layer consumers:
//! - **Text model** - [`domain::Text`], [`domain::LineEnding`], lossless line splitting
//! - **Segment model** - [`domain::DiffSegment`], [`domain::MergeSegment`] and the
//!   per-segment conflict-resolution state with its derived queries
//! - **Typed options** - [`config::DiffOptions`], the injectable line-equality policy
//!
//! # Architecture
//!
//! The domain module contains pure data types with no I/O and no external
//! collaborators. The engine crate (`textmerge-diff`) produces these types;
//! view layers consume them and mutate only the resolution state of merge
//! segments, through [`domain::MergeSegment::set_merge_type`].

pub mod config;
pub mod domain;
