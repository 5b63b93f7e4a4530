//! Conversion of LCS match lists into typed, contiguous spans
//!
//! The iterators walk a match list in a single forward pass, emitting one
//! span per maximal run of consecutive matches and one span per gap between
//! runs (including the gap before the first match and after the last).
//! Spans cover every input line exactly once, with no gaps and no overlaps.

use textmerge_core::domain::{SegmentRange, SegmentType};

use crate::lcs::{Match, Match3};

/// A typed span of a two-way comparison, as ranges into the two line lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffSpan {
    pub left: SegmentRange,
    pub right: SegmentRange,
    pub kind: SegmentType,
}

/// A typed span of a three-way comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSpan {
    pub base: SegmentRange,
    pub local: SegmentRange,
    pub remote: SegmentRange,
    pub kind: SegmentType,
}

/// Walks a two-way match list, yielding spans in input order
pub struct SolutionIterator<'a> {
    matches: &'a [Match],
    next_match: usize,
    left_cursor: usize,
    right_cursor: usize,
    left_len: usize,
    right_len: usize,
}

impl<'a> SolutionIterator<'a> {
    pub fn new(matches: &'a [Match], left_len: usize, right_len: usize) -> Self {
        Self {
            matches,
            next_match: 0,
            left_cursor: 0,
            right_cursor: 0,
            left_len,
            right_len,
        }
    }
}

impl Iterator for SolutionIterator<'_> {
    type Item = DiffSpan;

    fn next(&mut self) -> Option<DiffSpan> {
        if let Some(m) = self.matches.get(self.next_match).copied() {
            if m.left == self.left_cursor && m.right == self.right_cursor {
                // maximal run of consecutive matches
                let left_start = self.left_cursor;
                let right_start = self.right_cursor;
                while self
                    .matches
                    .get(self.next_match)
                    .is_some_and(|m| m.left == self.left_cursor && m.right == self.right_cursor)
                {
                    self.left_cursor += 1;
                    self.right_cursor += 1;
                    self.next_match += 1;
                }
                return Some(DiffSpan {
                    left: SegmentRange::new(left_start, self.left_cursor - left_start),
                    right: SegmentRange::new(right_start, self.right_cursor - right_start),
                    kind: SegmentType::SameOnBoth,
                });
            }

            // gap before the next match
            let left = SegmentRange::new(self.left_cursor, m.left - self.left_cursor);
            let right = SegmentRange::new(self.right_cursor, m.right - self.right_cursor);
            self.left_cursor = m.left;
            self.right_cursor = m.right;
            return Some(DiffSpan {
                left,
                right,
                kind: classify_gap(left, right),
            });
        }

        // trailing gap after the last match
        if self.left_cursor < self.left_len || self.right_cursor < self.right_len {
            let left = SegmentRange::new(self.left_cursor, self.left_len - self.left_cursor);
            let right = SegmentRange::new(self.right_cursor, self.right_len - self.right_cursor);
            self.left_cursor = self.left_len;
            self.right_cursor = self.right_len;
            return Some(DiffSpan {
                left,
                right,
                kind: classify_gap(left, right),
            });
        }

        None
    }
}

fn classify_gap(left: SegmentRange, right: SegmentRange) -> SegmentType {
    if left.is_empty() {
        SegmentType::OnlyOnRight
    } else if right.is_empty() {
        SegmentType::OnlyOnLeft
    } else {
        SegmentType::DifferentOnBoth
    }
}

/// Walks a three-way match list, yielding spans in input order.
///
/// Gap spans are classified by comparing each revision's gap content
/// against the base region under the engine's equality policy: agreement
/// between local and remote is `SameOnBoth`, a region where only one
/// revision diverged becomes a one-sided span, and everything else is a
/// conflict. The iterator therefore borrows the line slices in addition to
/// the match triples.
pub struct SolutionIterator3<'a, T, F> {
    matches: &'a [Match3],
    base: &'a [T],
    local: &'a [T],
    remote: &'a [T],
    equals: F,
    next_match: usize,
    base_cursor: usize,
    local_cursor: usize,
    remote_cursor: usize,
}

impl<'a, T, F> SolutionIterator3<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(
        matches: &'a [Match3],
        base: &'a [T],
        local: &'a [T],
        remote: &'a [T],
        equals: F,
    ) -> Self {
        Self {
            matches,
            base,
            local,
            remote,
            equals,
            next_match: 0,
            base_cursor: 0,
            local_cursor: 0,
            remote_cursor: 0,
        }
    }

    fn regions_equal(&self, first: &[T], second: &[T]) -> bool {
        first.len() == second.len()
            && first.iter().zip(second).all(|(a, b)| (self.equals)(a, b))
    }

    fn classify_gap(
        &self,
        base: SegmentRange,
        local: SegmentRange,
        remote: SegmentRange,
    ) -> SegmentType {
        let base_region = &self.base[base.start..base.end()];
        let local_region = &self.local[local.start..local.end()];
        let remote_region = &self.remote[remote.start..remote.end()];

        if self.regions_equal(local_region, remote_region) {
            // both revisions made the same change
            SegmentType::SameOnBoth
        } else if self.regions_equal(local_region, base_region) {
            SegmentType::OnlyOnRight
        } else if self.regions_equal(remote_region, base_region) {
            SegmentType::OnlyOnLeft
        } else {
            SegmentType::DifferentOnBoth
        }
    }
}

impl<T, F> Iterator for SolutionIterator3<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = MergeSpan;

    fn next(&mut self) -> Option<MergeSpan> {
        if let Some(m) = self.matches.get(self.next_match).copied() {
            if m.base == self.base_cursor
                && m.local == self.local_cursor
                && m.remote == self.remote_cursor
            {
                let base_start = self.base_cursor;
                let local_start = self.local_cursor;
                let remote_start = self.remote_cursor;
                while self.matches.get(self.next_match).is_some_and(|m| {
                    m.base == self.base_cursor
                        && m.local == self.local_cursor
                        && m.remote == self.remote_cursor
                }) {
                    self.base_cursor += 1;
                    self.local_cursor += 1;
                    self.remote_cursor += 1;
                    self.next_match += 1;
                }
                return Some(MergeSpan {
                    base: SegmentRange::new(base_start, self.base_cursor - base_start),
                    local: SegmentRange::new(local_start, self.local_cursor - local_start),
                    remote: SegmentRange::new(remote_start, self.remote_cursor - remote_start),
                    kind: SegmentType::SameOnBoth,
                });
            }

            let base = SegmentRange::new(self.base_cursor, m.base - self.base_cursor);
            let local = SegmentRange::new(self.local_cursor, m.local - self.local_cursor);
            let remote = SegmentRange::new(self.remote_cursor, m.remote - self.remote_cursor);
            self.base_cursor = m.base;
            self.local_cursor = m.local;
            self.remote_cursor = m.remote;
            return Some(MergeSpan {
                base,
                local,
                remote,
                kind: self.classify_gap(base, local, remote),
            });
        }

        if self.base_cursor < self.base.len()
            || self.local_cursor < self.local.len()
            || self.remote_cursor < self.remote.len()
        {
            let base = SegmentRange::new(self.base_cursor, self.base.len() - self.base_cursor);
            let local = SegmentRange::new(self.local_cursor, self.local.len() - self.local_cursor);
            let remote =
                SegmentRange::new(self.remote_cursor, self.remote.len() - self.remote_cursor);
            self.base_cursor = self.base.len();
            self.local_cursor = self.local.len();
            self.remote_cursor = self.remote.len();
            return Some(MergeSpan {
                base,
                local,
                remote,
                kind: self.classify_gap(base, local, remote),
            });
        }

        None
    }
}
