//! Segment model for two-way diffs and three-way merges
//!
//! Segments partition the compared inputs into contiguous typed runs. A
//! [`DiffSegment`] is plain data; a [`MergeSegment`] additionally carries
//! the consumer-assigned resolution state that drives the merged output.
//! Text fields never change after construction. Only the resolution state
//! of a merge segment is mutable, through [`MergeSegment::set_merge_type`].

use serde::{Deserialize, Serialize};

use super::types::{MergeType, SegmentType};

/// A contiguous run of lines, as a start index and length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRange {
    pub start: usize,
    pub size: usize,
}

impl SegmentRange {
    pub fn new(start: usize, size: usize) -> Self {
        Self { start, size }
    }

    /// End index, one past the last covered line
    pub fn end(&self) -> usize {
        self.start + self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// One typed span of a two-way comparison
///
/// Concatenating `old_text` across a diff's segments reproduces the left
/// line list, and `new_text` the right one; every line is covered exactly
/// once. The `left`/`right` ranges locate the segment within those lists
/// for render layers that need line numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: SegmentType,
    /// Lines of the left (old) side covered by this segment
    pub old_text: Vec<String>,
    /// Lines of the right (new) side covered by this segment
    pub new_text: Vec<String>,
    /// Position of `old_text` within the left line list
    pub left: SegmentRange,
    /// Position of `new_text` within the right line list
    pub right: SegmentRange,
}

/// One typed span of a three-way comparison, carrying its resolution state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSegment {
    kind: SegmentType,
    base: Vec<String>,
    local: Vec<String>,
    remote: Vec<String>,
    merge_type: MergeType,
}

impl MergeSegment {
    /// Creates a segment in its initial resolution state.
    ///
    /// Every kind other than [`SegmentType::SameOnBoth`] starts
    /// [`MergeType::Unresolved`]; identical runs need no resolution.
    pub fn new(
        kind: SegmentType,
        base: Vec<String>,
        local: Vec<String>,
        remote: Vec<String>,
    ) -> Self {
        Self {
            kind,
            base,
            local,
            remote,
            merge_type: MergeType::Unresolved,
        }
    }

    pub fn kind(&self) -> SegmentType {
        self.kind
    }

    pub fn base(&self) -> &[String] {
        &self.base
    }

    pub fn local(&self) -> &[String] {
        &self.local
    }

    pub fn remote(&self) -> &[String] {
        &self.remote
    }

    pub fn merge_type(&self) -> &MergeType {
        &self.merge_type
    }

    /// Assigns the resolution for this segment.
    ///
    /// Ignored on [`SegmentType::SameOnBoth`] segments; identical runs are
    /// not conflicts and always keep their common content.
    pub fn set_merge_type(&mut self, merge_type: MergeType) {
        if self.kind == SegmentType::SameOnBoth {
            return;
        }
        self.merge_type = merge_type;
    }

    /// Whether this segment still blocks the merge from completing
    pub fn is_conflict(&self) -> bool {
        self.kind == SegmentType::DifferentOnBoth
            && matches!(self.merge_type, MergeType::Unresolved)
    }

    /// The lines this segment contributes to the merged output under its
    /// current resolution.
    ///
    /// Unresolved segments materialize by kind: identical runs yield the
    /// agreed content, one-sided changes yield the divergent side, and
    /// undecided conflicts keep the base lines until the consumer picks a
    /// resolution.
    pub fn materialize(&self) -> Vec<String> {
        match &self.merge_type {
            MergeType::KeepLocal => self.local.clone(),
            MergeType::KeepRemote => self.remote.clone(),
            MergeType::KeepLocalThenRemote => concat(&self.local, &self.remote),
            MergeType::KeepRemoteThenLocal => concat(&self.remote, &self.local),
            MergeType::Custom(lines) => lines.clone(),
            MergeType::Unresolved => self.materialize_unresolved(),
        }
    }

    fn materialize_unresolved(&self) -> Vec<String> {
        match self.kind {
            // local == remote here; for match runs it equals base as well
            SegmentType::SameOnBoth => self.local.clone(),
            // one-sided changes apply automatically until overridden
            SegmentType::OnlyOnLeft => self.local.clone(),
            SegmentType::OnlyOnRight => self.remote.clone(),
            SegmentType::DifferentOnBoth => self.base.clone(),
        }
    }
}

fn concat(first: &[String], second: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(first.len() + second.len());
    out.extend_from_slice(first);
    out.extend_from_slice(second);
    out
}

/// True when no segment is an unresolved conflict
pub fn is_fully_resolved(segments: &[MergeSegment]) -> bool {
    segments.iter().all(|segment| !segment.is_conflict())
}

/// Number of unresolved conflicts remaining
pub fn conflict_count(segments: &[MergeSegment]) -> usize {
    segments.iter().filter(|segment| segment.is_conflict()).count()
}

/// Assembles the merged document from each segment's current resolution
pub fn merged_lines(segments: &[MergeSegment]) -> Vec<String> {
    segments.iter().flat_map(MergeSegment::materialize).collect()
}
