// Iterative subset enumeration in size-then-lexicographic order

/// Walks every non-empty subset of `0..n`.
///
/// Subsets come out grouped by size (1, 2, ..., n) and, within one size, in
/// lexicographic order of their positions: for n = 3 the sequence is
/// `[0] [1] [2] [0,1] [0,2] [1,2] [0,1,2]`. The current subset is borrowed
/// from an internal buffer, so the walk allocates once per size.
#[derive(Debug, Clone)]
pub struct SubsetEnumerator {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl SubsetEnumerator {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            indices: Vec::with_capacity(n),
            started: false,
            done: n == 0,
        }
    }

    /// Advance to the next subset, returning its positions in ascending order
    pub fn next_subset(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            self.indices.push(0);
            return Some(self.indices.as_slice());
        }

        let n = self.n;
        let k = self.indices.len();

        // rightmost position that can still move right
        if let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) {
            self.indices[i] += 1;
            for j in i + 1..k {
                self.indices[j] = self.indices[j - 1] + 1;
            }
            return Some(self.indices.as_slice());
        }

        if k == n {
            self.done = true;
            return None;
        }

        // next size starts from the lexicographically smallest pattern
        self.indices.clear();
        self.indices.extend(0..=k);
        Some(self.indices.as_slice())
    }
}

/// Number of non-empty subsets of `n` items, `None` if it exceeds `u64`
pub fn subset_count(n: usize) -> Option<u64> {
    let n = u32::try_from(n).ok()?;
    1u64.checked_shl(n).map(|total| total - 1)
}
