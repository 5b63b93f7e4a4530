//! Longest-common-subsequence core
//!
//! Dense dynamic-programming tables over two or three sequences. This is
//! the engine's dominant cost center: O(n*m) cells for the two-way table
//! and O(n*m*k) for the three-way one. Backtracking uses a fixed tie-break
//! order so that segment boundaries are reproducible across runs; callers
//! observe those boundaries directly in rendered output, which makes the
//! order part of the contract.

/// A matched pair: `left[left]` equals `right[right]` under the equality
/// policy in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub left: usize,
    pub right: usize,
}

/// A matched triple across base, local and remote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match3 {
    pub base: usize,
    pub local: usize,
    pub remote: usize,
}

/// Dense (rows x cols) table of u32 cells backed by a flat vector
struct Grid2 {
    cols: usize,
    cells: Vec<u32>,
}

impl Grid2 {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![0; rows * cols],
        }
    }

    fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row * self.cols + col] = value;
    }
}

/// Dense (rows x cols x layers) table of u32 cells backed by a flat vector
struct Grid3 {
    cols: usize,
    layers: usize,
    cells: Vec<u32>,
}

impl Grid3 {
    fn new(rows: usize, cols: usize, layers: usize) -> Self {
        Self {
            cols,
            layers,
            cells: vec![0; rows * cols * layers],
        }
    }

    fn get(&self, row: usize, col: usize, layer: usize) -> u32 {
        self.cells[(row * self.cols + col) * self.layers + layer]
    }

    fn set(&mut self, row: usize, col: usize, layer: usize, value: u32) {
        self.cells[(row * self.cols + col) * self.layers + layer] = value;
    }
}

/// Computes the longest common subsequence of `left` and `right`, as an
/// ordered list of index pairs strictly increasing in both coordinates.
///
/// `equals` injects the equality policy. When several backtracking moves
/// tie on table value, the decrement order is: left index, then right
/// index, then both.
pub fn longest_common_subsequence<T, F>(left: &[T], right: &[T], equals: F) -> Vec<Match>
where
    F: Fn(&T, &T) -> bool,
{
    let rows = left.len() + 1;
    let cols = right.len() + 1;
    let mut table = Grid2::new(rows, cols);

    for i in 1..rows {
        for j in 1..cols {
            let cell = if equals(&left[i - 1], &right[j - 1]) {
                table.get(i - 1, j - 1) + 1
            } else {
                table.get(i - 1, j).max(table.get(i, j - 1))
            };
            table.set(i, j, cell);
        }
    }

    let mut matches = Vec::with_capacity(table.get(rows - 1, cols - 1) as usize);
    let mut i = left.len();
    let mut j = right.len();

    while i > 0 && j > 0 {
        if equals(&left[i - 1], &right[j - 1]) {
            matches.push(Match {
                left: i - 1,
                right: j - 1,
            });
            i -= 1;
            j -= 1;
        } else {
            let up = table.get(i - 1, j);
            let back = table.get(i, j - 1);
            let diagonal = table.get(i - 1, j - 1);

            if up >= back && up >= diagonal {
                i -= 1;
            } else if back >= diagonal {
                j -= 1;
            } else {
                i -= 1;
                j -= 1;
            }
        }
    }

    matches.reverse();
    matches
}

/// Three-sequence variant: finds the longest chain of triples equal across
/// base, local and remote.
///
/// Backtracking enumerates the candidate moves as single decrements (base,
/// local, remote), then pair decrements (base+local, local+remote,
/// base+remote), then the triple decrement, and takes the first candidate
/// attaining the maximum table value.
pub fn longest_common_subsequence3<T, F>(
    base: &[T],
    local: &[T],
    remote: &[T],
    equals: F,
) -> Vec<Match3>
where
    F: Fn(&T, &T) -> bool,
{
    let mut table = Grid3::new(base.len() + 1, local.len() + 1, remote.len() + 1);

    for i in 1..=base.len() {
        for j in 1..=local.len() {
            for k in 1..=remote.len() {
                let cell = if equals(&base[i - 1], &local[j - 1])
                    && equals(&base[i - 1], &remote[k - 1])
                {
                    table.get(i - 1, j - 1, k - 1) + 1
                } else {
                    table
                        .get(i - 1, j, k)
                        .max(table.get(i, j - 1, k))
                        .max(table.get(i, j, k - 1))
                };
                table.set(i, j, k, cell);
            }
        }
    }

    let mut matches = Vec::new();
    let mut i = base.len();
    let mut j = local.len();
    let mut k = remote.len();

    while i > 0 && j > 0 && k > 0 {
        if equals(&base[i - 1], &local[j - 1]) && equals(&base[i - 1], &remote[k - 1]) {
            matches.push(Match3 {
                base: i - 1,
                local: j - 1,
                remote: k - 1,
            });
            i -= 1;
            j -= 1;
            k -= 1;
        } else {
            let candidates = [
                table.get(i - 1, j, k),
                table.get(i, j - 1, k),
                table.get(i, j, k - 1),
                table.get(i - 1, j - 1, k),
                table.get(i, j - 1, k - 1),
                table.get(i - 1, j, k - 1),
                table.get(i - 1, j - 1, k - 1),
            ];

            let mut best = 0;
            for (n, &value) in candidates.iter().enumerate() {
                if value > candidates[best] {
                    best = n;
                }
            }

            match best {
                0 => i -= 1,
                1 => j -= 1,
                2 => k -= 1,
                3 => {
                    i -= 1;
                    j -= 1;
                }
                4 => {
                    j -= 1;
                    k -= 1;
                }
                5 => {
                    i -= 1;
                    k -= 1;
                }
                _ => {
                    i -= 1;
                    j -= 1;
                    k -= 1;
                }
            }
        }
    }

    matches.reverse();
    matches
}
