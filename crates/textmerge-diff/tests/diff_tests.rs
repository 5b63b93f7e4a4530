//! Integration tests for the two-way diff engine
//!
//! These verify the coverage/partition invariant (every input line appears
//! exactly once across the produced segments), the degenerate fast paths,
//! and the golden segment boundaries pinned by the backtracking tie-break.

use textmerge_core::config::DiffOptions;
use textmerge_core::domain::{DiffSegment, LineEnding, SegmentType};
use textmerge_diff::{diff, diff_slices, diff_with_options};

// ============================================================================
// Test helpers
// ============================================================================

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Asserts that concatenating the segments reproduces both inputs exactly
fn assert_covers(segments: &[DiffSegment], old_lines: &[String], new_lines: &[String]) {
    let old_concat: Vec<String> = segments
        .iter()
        .flat_map(|s| s.old_text.iter().cloned())
        .collect();
    let new_concat: Vec<String> = segments
        .iter()
        .flat_map(|s| s.new_text.iter().cloned())
        .collect();
    assert_eq!(old_concat, old_lines);
    assert_eq!(new_concat, new_lines);
}

// ============================================================================
// Coverage and degenerate cases
// ============================================================================

#[test]
fn diff_of_identical_text_is_one_same_segment() {
    let result = diff("alpha\nbeta\n", "alpha\nbeta\n");
    assert_eq!(result.segments.len(), 1);
    assert_eq!(result.segments[0].kind, SegmentType::SameOnBoth);
    assert_eq!(result.segments[0].old_text, result.segments[0].new_text);
    assert_covers(&result.segments, &result.left.lines, &result.right.lines);
}

#[test]
fn diff_detects_each_side_line_ending() {
    let result = diff("a\r\nb\r\n", "a\nb\nc\n");
    assert_eq!(result.left.line_ending, LineEnding::CrLf);
    assert_eq!(result.right.line_ending, LineEnding::Lf);
    assert_covers(&result.segments, &result.left.lines, &result.right.lines);
}

#[test]
fn diff_covers_inputs_for_mixed_edits() {
    let old_lines = lines(&["a", "b", "c", "d", "e", "f"]);
    let new_lines = lines(&["a", "x", "c", "e", "f", "g"]);
    let segments = diff_slices(&old_lines, &new_lines, &DiffOptions::default());
    assert_covers(&segments, &old_lines, &new_lines);
}

#[test]
fn segment_ranges_partition_both_sides() {
    let old_lines = lines(&["a", "b", "c", "d"]);
    let new_lines = lines(&["b", "c", "x", "d"]);
    let segments = diff_slices(&old_lines, &new_lines, &DiffOptions::default());

    let mut old_cursor = 0;
    let mut new_cursor = 0;
    for segment in &segments {
        assert_eq!(segment.left.start, old_cursor);
        assert_eq!(segment.right.start, new_cursor);
        assert_eq!(segment.left.size, segment.old_text.len());
        assert_eq!(segment.right.size, segment.new_text.len());
        old_cursor = segment.left.end();
        new_cursor = segment.right.end();
    }
    assert_eq!(old_cursor, old_lines.len());
    assert_eq!(new_cursor, new_lines.len());
}

// ============================================================================
// Golden scenarios
// ============================================================================

#[test]
fn middle_replacement_yields_three_segments() {
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
fn remove_from_last_yields_trailing_only_on_left() {
    let segments = diff_slices(
        &lines(&["a", "b", "c"]),
        &lines(&["a", "b"]),
        &DiffOptions::default(),
    );
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].kind, SegmentType::SameOnBoth);
    assert_eq!(segments[0].old_text, lines(&["a", "b"]));
    assert_eq!(segments[1].kind, SegmentType::OnlyOnLeft);
    assert_eq!(segments[1].old_text, lines(&["c"]));
    assert!(segments[1].new_text.is_empty());
}

#[test]
fn missing_line_in_long_text() {
    let removed = 50;
    let old_lines: Vec<String> = (0..100).map(|n| n.to_string()).collect();
    let mut new_lines = old_lines.clone();
    new_lines.remove(removed);

    let segments = diff_slices(&old_lines, &new_lines, &DiffOptions::default());
    assert_covers(&segments, &old_lines, &new_lines);

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].kind, SegmentType::SameOnBoth);
    assert_eq!(segments[0].old_text.len(), removed);
    assert_eq!(segments[1].kind, SegmentType::OnlyOnLeft);
    assert_eq!(segments[1].old_text, lines(&["50"]));
    assert_eq!(segments[2].kind, SegmentType::SameOnBoth);
    assert_eq!(segments[2].old_text.len(), 100 - removed - 1);
}

#[test]
fn single_removal_at_every_position() {
    let full: Vec<String> = (b'a'..=b'j').map(|c| (c as char).to_string()).collect();
    let total = full.len();

    for i in 0..total {
        for removed_from_old in [false, true] {
            let mut old_lines = full.clone();
            let mut new_lines = full.clone();
            if removed_from_old {
                old_lines.remove(i);
            } else {
                new_lines.remove(i);
            }

            let segments = diff_slices(&old_lines, &new_lines, &DiffOptions::default());
            assert_covers(&segments, &old_lines, &new_lines);

            let in_the_middle = i > 0 && i < total - 1;
            assert_eq!(segments.len(), if in_the_middle { 3 } else { 2 });
        }
    }
}

// ============================================================================
// Tie-break determinism
// ============================================================================

#[test]
fn swapped_lines_pin_the_tie_break() {
    // "a b" vs "b a" admits two equally long subsequences; the backtrack
    // prefers decrementing the left index, so the kept line is "a".
    let segments = diff_slices(&lines(&["a", "b"]), &lines(&["b", "a"]), &DiffOptions::default());
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].kind, SegmentType::OnlyOnRight);
    assert_eq!(segments[0].new_text, lines(&["b"]));
    assert_eq!(segments[1].kind, SegmentType::SameOnBoth);
    assert_eq!(segments[1].old_text, lines(&["a"]));
    assert_eq!(segments[2].kind, SegmentType::OnlyOnLeft);
    assert_eq!(segments[2].old_text, lines(&["b"]));
}

#[test]
fn diff_is_not_symmetric_under_ties() {
    // Swapping the inputs keeps the other line; the two directions are not
    // mirror images, which is the documented consequence of the fixed
    // backtracking order.
    let segments = diff_slices(&lines(&["b", "a"]), &lines(&["a", "b"]), &DiffOptions::default());
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].kind, SegmentType::OnlyOnRight);
    assert_eq!(segments[0].new_text, lines(&["a"]));
    assert_eq!(segments[1].kind, SegmentType::SameOnBoth);
    assert_eq!(segments[1].old_text, lines(&["b"]));
    assert_eq!(segments[2].kind, SegmentType::OnlyOnLeft);
    assert_eq!(segments[2].old_text, lines(&["a"]));
}

#[test]
fn mirrored_inputs_swap_one_sided_segments() {
    // Without ambiguity the two directions are exact mirror images.
    let old_lines = lines(&["a", "b", "c"]);
    let new_lines = lines(&["a", "c"]);

    let forward = diff_slices(&old_lines, &new_lines, &DiffOptions::default());
    let backward = diff_slices(&new_lines, &old_lines, &DiffOptions::default());

    assert_eq!(forward.len(), backward.len());
    for (f, b) in forward.iter().zip(&backward) {
        assert_eq!(f.old_text, b.new_text);
        assert_eq!(f.new_text, b.old_text);
        let mirrored = match f.kind {
            SegmentType::OnlyOnLeft => SegmentType::OnlyOnRight,
            SegmentType::OnlyOnRight => SegmentType::OnlyOnLeft,
            other => other,
        };
        assert_eq!(b.kind, mirrored);
    }
}

// ============================================================================
// Equality policy
// ============================================================================

#[test]
fn loose_equality_merges_case_and_whitespace_variants() {
    let options = DiffOptions {
        ignore_case: true,
        ignore_whitespace: true,
    };
    let result = diff_with_options("  A  \n   b\nC   \nd", "a\nb\nc\nd", &options);
    assert_eq!(result.segments.len(), 1);
    assert_eq!(result.segments[0].kind, SegmentType::SameOnBoth);
}
