//! Classification enums shared across the comparison engines

use serde::{Deserialize, Serialize};

/// Line-ending style of a text, detected from the first separator found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    /// Empty input, or non-empty input containing no recognized separator
    #[default]
    None,
    /// Classic Mac `\r`
    Cr,
    /// Unix `\n`
    Lf,
    /// Windows `\r\n`
    CrLf,
}

impl LineEnding {
    /// The literal separator string, empty for [`LineEnding::None`]
    pub fn separator(&self) -> &'static str {
        match self {
            LineEnding::None => "",
            LineEnding::Cr => "\r",
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Classification of a file path when comparing two directory trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffType {
    /// Present in both trees with identical content
    Unchanged,
    /// Present only in the second tree
    Added,
    /// Present only in the first tree
    Removed,
    /// Present in both trees with differing content
    Modified,
}

impl std::fmt::Display for DiffType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DiffType::Unchanged => "unchanged",
            DiffType::Added => "added",
            DiffType::Removed => "removed",
            DiffType::Modified => "modified",
        };
        write!(f, "{}", s)
    }
}

/// Classification of a contiguous run of lines across the compared texts
///
/// In a three-way comparison the left side is the local revision and the
/// right side is the remote revision; `OnlyOnLeft` therefore reads as
/// "only the local side diverged from the base".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    /// The compared sides agree on this run
    SameOnBoth,
    /// Only the left (local) side carries a divergence
    OnlyOnLeft,
    /// Only the right (remote) side carries a divergence
    OnlyOnRight,
    /// Both sides diverged, in different ways
    DifferentOnBoth,
}

impl std::fmt::Display for SegmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SegmentType::SameOnBoth => "same_on_both",
            SegmentType::OnlyOnLeft => "only_on_left",
            SegmentType::OnlyOnRight => "only_on_right",
            SegmentType::DifferentOnBoth => "different_on_both",
        };
        write!(f, "{}", s)
    }
}

/// Consumer-assigned resolution of a merge segment
///
/// The engine creates every non-identical segment as `Unresolved`; only the
/// consumer moves a segment out of that state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeType {
    /// No decision has been made yet
    Unresolved,
    /// Take the local side
    KeepLocal,
    /// Take the remote side
    KeepRemote,
    /// Take the local side followed by the remote side
    KeepLocalThenRemote,
    /// Take the remote side followed by the local side
    KeepRemoteThenLocal,
    /// Replacement lines supplied by the consumer (hand-edited result)
    Custom(Vec<String>),
}

impl std::fmt::Display for MergeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MergeType::Unresolved => "unresolved",
            MergeType::KeepLocal => "keep_local",
            MergeType::KeepRemote => "keep_remote",
            MergeType::KeepLocalThenRemote => "keep_local_then_remote",
            MergeType::KeepRemoteThenLocal => "keep_remote_then_local",
            MergeType::Custom(_) => "custom",
        };
        write!(f, "{}", s)
    }
}
