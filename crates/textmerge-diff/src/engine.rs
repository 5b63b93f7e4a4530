//! Diff and merge entry points
//!
//! Wraps the LCS core and the solution iterators behind string-level and
//! slice-level functions. Degenerate inputs (equal sequences, one side
//! empty) are resolved before the LCS engine runs at all.

use serde::{Deserialize, Serialize};
use tracing::debug;

use textmerge_core::config::DiffOptions;
use textmerge_core::domain::{
    conflict_count, split_lines, DiffSegment, MergeSegment, SegmentRange, SegmentType, Text,
};

use crate::lcs::{longest_common_subsequence, longest_common_subsequence3};
use crate::solution::{DiffSpan, MergeSpan, SolutionIterator, SolutionIterator3};

/// Outcome of a two-way comparison
///
/// Line endings of the two inputs travel with their [`Text`] halves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff2Result {
    pub left: Text,
    pub right: Text,
    pub segments: Vec<DiffSegment>,
}

/// Outcome of a three-way comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff3Result {
    pub base: Text,
    pub local: Text,
    pub remote: Text,
    pub segments: Vec<MergeSegment>,
}

/// Compares two texts line by line with exact equality
pub fn diff(old_text: &str, new_text: &str) -> Diff2Result {
    diff_with_options(old_text, new_text, &DiffOptions::default())
}

/// Compares two texts line by line under the given equality policy
pub fn diff_with_options(old_text: &str, new_text: &str, options: &DiffOptions) -> Diff2Result {
    let left = split_lines(old_text);
    let right = split_lines(new_text);
    let segments = diff_slices(&left.lines, &right.lines, options);

    debug!(
        left_lines = left.lines.len(),
        right_lines = right.lines.len(),
        segments = segments.len(),
        "computed two-way diff"
    );

    Diff2Result {
        left,
        right,
        segments,
    }
}

/// Compares two line lists, returning typed segments covering both inputs
/// exactly once each.
pub fn diff_slices(
    old_lines: &[String],
    new_lines: &[String],
    options: &DiffOptions,
) -> Vec<DiffSegment> {
    if regions_equal(old_lines, new_lines, options) {
        return vec![full_segment(SegmentType::SameOnBoth, old_lines, new_lines)];
    }
    if old_lines.is_empty() {
        return vec![full_segment(SegmentType::OnlyOnRight, old_lines, new_lines)];
    }
    if new_lines.is_empty() {
        return vec![full_segment(SegmentType::OnlyOnLeft, old_lines, new_lines)];
    }

    let matches = longest_common_subsequence(old_lines, new_lines, |a: &String, b: &String| {
        options.equals(a, b)
    });

    SolutionIterator::new(&matches, old_lines.len(), new_lines.len())
        .map(|span| segment_from_span(span, old_lines, new_lines))
        .collect()
}

/// Merges two revisions of a text against their common base, with exact
/// line equality
pub fn diff3(base: &str, local: &str, remote: &str) -> Diff3Result {
    diff3_with_options(base, local, remote, &DiffOptions::default())
}

/// Merges two revisions of a text against their common base under the
/// given equality policy
pub fn diff3_with_options(
    base: &str,
    local: &str,
    remote: &str,
    options: &DiffOptions,
) -> Diff3Result {
    let base_text = split_lines(base);
    let local_text = split_lines(local);
    let remote_text = split_lines(remote);
    let segments = diff3_slices(
        &base_text.lines,
        &local_text.lines,
        &remote_text.lines,
        options,
    );

    debug!(
        base_lines = base_text.lines.len(),
        local_lines = local_text.lines.len(),
        remote_lines = remote_text.lines.len(),
        segments = segments.len(),
        conflicts = conflict_count(&segments),
        "computed three-way diff"
    );

    Diff3Result {
        base: base_text,
        local: local_text,
        remote: remote_text,
        segments,
    }
}

/// Merges two line-list revisions against their base.
///
/// With an empty base the comparison degrades to a two-way diff between
/// local and remote; there is no real common ancestor, so the agreed
/// content of `SameOnBoth` segments doubles as the base.
pub fn diff3_slices(
    base: &[String],
    local: &[String],
    remote: &[String],
    options: &DiffOptions,
) -> Vec<MergeSegment> {
    if base.is_empty() {
        return diff_slices(local, remote, options)
            .into_iter()
            .map(merge_segment_from_pairwise)
            .collect();
    }

    let matches = longest_common_subsequence3(base, local, remote, |a: &String, b: &String| {
        options.equals(a, b)
    });

    SolutionIterator3::new(&matches, base, local, remote, |a: &String, b: &String| {
        options.equals(a, b)
    })
    .map(|span| merge_segment_from_span(span, base, local, remote))
    .collect()
}

fn regions_equal(old_lines: &[String], new_lines: &[String], options: &DiffOptions) -> bool {
    old_lines.len() == new_lines.len()
        && old_lines
            .iter()
            .zip(new_lines)
            .all(|(a, b)| options.equals(a, b))
}

fn full_segment(kind: SegmentType, old_lines: &[String], new_lines: &[String]) -> DiffSegment {
    DiffSegment {
        kind,
        old_text: old_lines.to_vec(),
        new_text: new_lines.to_vec(),
        left: SegmentRange::new(0, old_lines.len()),
        right: SegmentRange::new(0, new_lines.len()),
    }
}

fn segment_from_span(span: DiffSpan, old_lines: &[String], new_lines: &[String]) -> DiffSegment {
    DiffSegment {
        kind: span.kind,
        old_text: old_lines[span.left.start..span.left.end()].to_vec(),
        new_text: new_lines[span.right.start..span.right.end()].to_vec(),
        left: span.left,
        right: span.right,
    }
}

fn merge_segment_from_span(
    span: MergeSpan,
    base: &[String],
    local: &[String],
    remote: &[String],
) -> MergeSegment {
    MergeSegment::new(
        span.kind,
        base[span.base.start..span.base.end()].to_vec(),
        local[span.local.start..span.local.end()].to_vec(),
        remote[span.remote.start..span.remote.end()].to_vec(),
    )
}

/// Lifts a local-vs-remote diff segment into a merge segment for the
/// empty-base fast path
fn merge_segment_from_pairwise(segment: DiffSegment) -> MergeSegment {
    let base = if segment.kind == SegmentType::SameOnBoth {
        segment.old_text.clone()
    } else {
        Vec::new()
    };
    MergeSegment::new(segment.kind, base, segment.old_text, segment.new_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_equal_inputs_fast_path() {
        let segments = diff_slices(&lines(&["a", "b"]), &lines(&["a", "b"]), &DiffOptions::default());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentType::SameOnBoth);
        assert_eq!(segments[0].old_text, segments[0].new_text);
    }

    #[test]
    fn test_empty_left_fast_path() {
        let segments = diff_slices(&[], &lines(&["a"]), &DiffOptions::default());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentType::OnlyOnRight);
        assert!(segments[0].old_text.is_empty());
    }

    #[test]
    fn test_empty_right_fast_path() {
        let segments = diff_slices(&lines(&["a"]), &[], &DiffOptions::default());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentType::OnlyOnLeft);
        assert!(segments[0].new_text.is_empty());
    }

    #[test]
    fn test_both_empty_is_single_same_segment() {
        let segments = diff_slices(&[], &[], &DiffOptions::default());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentType::SameOnBoth);
        assert!(segments[0].old_text.is_empty());
    }

    #[test]
    fn test_middle_replacement_scenario() {
        let segments = diff_slices(
            &lines(&["a", "b", "c"]),
            &lines(&["a", "x", "c"]),
            &DiffOptions::default(),
        );
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].kind, SegmentType::SameOnBoth);
        assert_eq!(segments[0].old_text, lines(&["a"]));
        assert_eq!(segments[1].kind, SegmentType::DifferentOnBoth);
        assert_eq!(segments[1].old_text, lines(&["b"]));
        assert_eq!(segments[1].new_text, lines(&["x"]));
        assert_eq!(segments[2].kind, SegmentType::SameOnBoth);
        assert_eq!(segments[2].old_text, lines(&["c"]));
    }

    #[test]
    fn test_segment_ranges_locate_lines() {
        let segments = diff_slices(
            &lines(&["a", "b", "c"]),
            &lines(&["a", "c"]),
            &DiffOptions::default(),
        );
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].kind, SegmentType::OnlyOnLeft);
        assert_eq!(segments[1].left, SegmentRange::new(1, 1));
        assert_eq!(segments[1].right, SegmentRange::new(1, 0));
        assert_eq!(segments[2].left, SegmentRange::new(2, 1));
        assert_eq!(segments[2].right, SegmentRange::new(1, 1));
    }

    #[test]
    fn test_empty_base_copies_agreed_content() {
        let segments = diff3_slices(
            &[],
            &lines(&["shared", "mine"]),
            &lines(&["shared", "theirs"]),
            &DiffOptions::default(),
        );
        assert_eq!(segments[0].kind(), SegmentType::SameOnBoth);
        assert_eq!(segments[0].base(), segments[0].local());
        assert_eq!(segments[1].kind(), SegmentType::DifferentOnBoth);
        assert!(segments[1].base().is_empty());
    }

    #[test]
    fn test_options_reach_the_matcher() {
        let options = DiffOptions {
            ignore_case: true,
            ignore_whitespace: true,
        };
        let segments = diff_slices(&lines(&["  Hello "]), &lines(&["hello"]), &options);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentType::SameOnBoth);
    }
}
