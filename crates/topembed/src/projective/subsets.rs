//! Lazy k-subsets in lexicographic index order.

/// All `k`-element subsets of `items`, lexicographic by position.
///
/// `k == 0` yields the empty subset once; `k > items.len()` yields nothing.
pub(crate) struct Subsets<'a, T> {
    items: &'a [T],
    idxs: Vec<usize>,
    done: bool,
}

impl<'a, T: Copy> Subsets<'a, T> {
    pub(crate) fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            idxs: (0..k).collect(),
            done: k > items.len(),
        }
    }
}

impl<T: Copy> Iterator for Subsets<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let out = self.idxs.iter().map(|&i| self.items[i]).collect();
        // Advance the rightmost index that still has room, reset the tail behind it.
        let (n, k) = (self.items.len(), self.idxs.len());
        match (0..k).rev().find(|&i| self.idxs[i] != i + n - k) {
            Some(i) => {
                self.idxs[i] += 1;
                for j in i + 1..k {
                    self.idxs[j] = self.idxs[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(out)
    }
}

/// Number of `k`-subsets of an `n`-set, saturating.
pub(crate) fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1usize, |acc, i| acc.saturating_mul(n - i) / (i + 1))
}
