//! Typed options for the comparison engines

use serde::{Deserialize, Serialize};

/// Equality policy applied when matching lines.
///
/// Both flags are independent and combinable. Whitespace-insensitive
/// comparison trims leading and trailing whitespace from both lines before
/// comparing; case-insensitive comparison folds ASCII case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    pub ignore_case: bool,
    pub ignore_whitespace: bool,
}

impl DiffOptions {
    /// Whether two lines are equal under this policy
    pub fn equals(&self, left: &str, right: &str) -> bool {
        let (left, right) = if self.ignore_whitespace {
            (left.trim(), right.trim())
        } else {
            (left, right)
        };

        if self.ignore_case {
            left.eq_ignore_ascii_case(right)
        } else {
            left == right
        }
    }
}
