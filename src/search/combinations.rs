//! Lexicographic enumeration of fixed-size index subsets.
//!
//! [`Combinations`] walks every K-sized subset of `0..N` exactly once, in
//! lexicographic order, holding O(K) state. Nothing is materialized up
//! front, so `C(N,K)` can be astronomically large without memory growing —
//! each subset is produced, consumed, and dropped before the next exists.
//!
//! The order is the same one Python's `itertools.combinations` uses:
//! `[0,1]`, `[0,2]`, ..., `[0,N-1]`, `[1,2]`, ... Every subset keeps its
//! indices in ascending order. Two enumerators over the same `(N,K)` yield
//! identical sequences, which is what makes tie-breaking in the search
//! reproducible.

/// Iterator over all K-sized index subsets of `0..N` in lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    /// Current subset; the next call to `next` advances it in place.
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Create an enumerator over K-sized subsets of `0..N`.
    ///
    /// `k > n` yields nothing; `k == 0` yields a single empty subset
    /// (there is exactly one way to choose nothing).
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    /// Advance `indices` to the lexicographic successor. Returns false when
    /// the current subset is the last one.
    fn advance(&mut self) -> bool {
        // Find the rightmost index that can still move right, bump it, and
        // reset everything after it to a contiguous run.
        for i in (0..self.k).rev() {
            if self.indices[i] < self.n - self.k + i {
                self.indices[i] += 1;
                for j in (i + 1)..self.k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }
        if self.advance() {
            Some(self.indices.clone())
        } else {
            self.done = true;
            None
        }
    }
}

/// Exact binomial coefficient `C(n, k)`.
///
/// Computed with stepwise multiply-then-divide, which stays exact because
/// every prefix product `C(n-k+i, i)` is itself an integer.
pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k {
        result = result * (n - k + i) as u128 / i as u128;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_count_matches_binomial() {
        for n in 0..=8 {
            for k in 0..=n {
                let count = Combinations::new(n, k).count() as u128;
                assert_eq!(count, binomial(n, k), "C({n},{k})");
            }
        }
    }

    #[test]
    fn test_lexicographic_order() {
        let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_subsets_distinct_and_sized() {
        let mut seen = HashSet::new();
        for combo in Combinations::new(7, 3) {
            assert_eq!(combo.len(), 3);
            // Strictly ascending, so no duplicate index within a subset.
            assert!(combo.windows(2).all(|w| w[0] < w[1]));
            assert!(combo.iter().all(|&i| i < 7));
            assert!(seen.insert(combo), "duplicate subset");
        }
        assert_eq!(seen.len(), 35);
    }

    #[test]
    fn test_restartable() {
        let first: Vec<_> = Combinations::new(6, 3).collect();
        let second: Vec<_> = Combinations::new(6, 3).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exhaustion_is_permanent() {
        let mut combos = Combinations::new(3, 2);
        for _ in 0..3 {
            assert!(combos.next().is_some());
        }
        assert_eq!(combos.next(), None);
        assert_eq!(combos.next(), None);
    }

    #[test]
    fn test_k_equals_n() {
        let all: Vec<_> = Combinations::new(4, 4).collect();
        assert_eq!(all, vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_k_greater_than_n() {
        assert_eq!(Combinations::new(3, 5).next(), None);
    }

    #[test]
    fn test_k_zero() {
        let all: Vec<_> = Combinations::new(5, 0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(6, 2), 15);
        assert_eq!(binomial(50, 3), 19_600);
        assert_eq!(binomial(3, 5), 0);
        // Symmetry.
        assert_eq!(binomial(20, 7), binomial(20, 13));
    }
}
