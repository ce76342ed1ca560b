//! Lazy lexicographic permutations.

/// Rearranges `perm` into the next permutation in lexicographic order.
///
/// Returns `false` (leaving `perm` sorted ascending again) when `perm`
/// was the last permutation.
///
/// # Examples
///
/// ```
/// use u_colony::exhaustive::next_permutation;
///
/// let mut perm = [0, 2, 1];
/// assert!(next_permutation(&mut perm));
/// assert_eq!(perm, [1, 0, 2]);
/// ```
pub fn next_permutation<T: Ord>(perm: &mut [T]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`.
    let Some(pivot) = (0..n - 1).rev().find(|&i| perm[i] < perm[i + 1]) else {
        perm.reverse();
        return false;
    };

    let successor = (pivot + 1..n)
        .rev()
        .find(|&j| perm[j] > perm[pivot])
        .unwrap_or(pivot + 1);
    perm.swap(pivot, successor);
    perm[pivot + 1..].reverse();
    true
}

/// Every permutation of `0..n` in lexicographic order, generated one at a
/// time.
///
/// Memory stays `O(n)` regardless of how many permutations are consumed.
/// [`reset`](Permutations::reset) rewinds to the first permutation.
///
/// A standalone utility for callers that want to walk or sample the search
/// space themselves. [`ExhaustiveRunner`](super::ExhaustiveRunner) drives
/// [`next_permutation`] in place per first-element branch instead, which
/// visits the same sequence without cloning each permutation.
///
/// # Examples
///
/// ```
/// use u_colony::exhaustive::Permutations;
///
/// let all: Vec<Vec<usize>> = Permutations::new(3).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1, 2]);
/// assert_eq!(all[5], vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    exhausted: bool,
}

impl Permutations {
    /// Starts at the identity permutation of `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            exhausted: false,
        }
    }

    /// Rewinds to the identity permutation.
    pub fn reset(&mut self) {
        self.current.sort_unstable();
        self.exhausted = false;
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        let item = self.current.clone();
        self.exhausted = !next_permutation(&mut self.current);
        Some(item)
    }
}
