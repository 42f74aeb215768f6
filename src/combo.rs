use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{fmt, iter::FusedIterator, str::FromStr};

//////////
// Hold //
//////////

/// An action: the set of 0-based die indices to hold during a roll. Stored
/// sorted so membership and equality ignore input order. Duplicate indices
/// are preserved as given, which makes such a hold fail action-space
/// membership checks instead of being silently collapsed.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hold(Vec<u8>);

impl Hold {
    pub fn new(mut idxs: Vec<u8>) -> Self {
        idxs.sort_unstable();
        Self(idxs)
    }

    /// The indexes must already be sorted.
    pub(crate) fn from_sorted(idxs: Vec<u8>) -> Self {
        debug_assert!(crate::is_sorted_by(idxs.iter(), |i1, i2| Some(i1.cmp(i2))));
        Self(idxs)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn idxs(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> u8 {
        self.0.len() as u8
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn contains(&self, idx: u8) -> bool {
        self.0.binary_search(&idx).is_ok()
    }
}

impl fmt::Debug for Hold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for Hold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(","))
    }
}

/// Parse a comma/space/tab separated list of die indices into a `Hold`.
/// Enclosing brackets ('[' or ']') optional. An empty string parses to the
/// empty hold (reroll everything).
impl FromStr for Hold {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start_matches('[');
        let s = s.trim_end_matches(']');

        let splitters = &[',', ' ', '\n', '\t'];

        let idxs = s
            .split(splitters)
            .filter(|s| !s.is_empty())
            .map(|idx_str| {
                idx_str
                    .parse::<u8>()
                    .map_err(|err| format!("die index is not a valid integer: {}", err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(idxs))
    }
}

///////////////////
// IndexSubsets //
///////////////////

/// Iterator over all size-`k` subsets of `0..n`, in lexicographic order.
pub struct IndexSubsets {
    n: u8,
    /// the current combination, always sorted ascending.
    comb: Vec<u8>,
    done: bool,
}

impl IndexSubsets {
    pub fn new(n: u8, k: u8) -> Self {
        Self {
            n,
            comb: (0..k).collect(),
            done: k > n,
        }
    }

    /// Step `comb` to the next lexicographic combination. Returns `false`
    /// when the current combination is the last one.
    fn update_to_next_combination(&mut self) -> bool {
        let k = self.comb.len();

        // find the right-most entry we can still bump
        let pivot = (0..k)
            .rev()
            .find(|&idx| self.comb[idx] < self.n - (k as u8) + (idx as u8));

        match pivot {
            Some(pivot) => {
                self.comb[pivot] += 1;
                for idx in (pivot + 1)..k {
                    self.comb[idx] = self.comb[idx - 1] + 1;
                }
                true
            }
            None => false,
        }
    }
}

impl Iterator for IndexSubsets {
    type Item = Hold;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let out = Hold::from_sorted(self.comb.clone());
        self.done = !self.update_to_next_combination();
        Some(out)
    }
}

impl FusedIterator for IndexSubsets {}

/// All subsets of `0..n` grouped by size (empty set first, full set last),
/// lexicographic within each size. This is the canonical action-space order.
pub fn subsets_by_size(n: u8) -> impl Iterator<Item = Hold> {
    (0..=n).flat_map(move |k| IndexSubsets::new(n, k))
}

///////////////////
// FaceMultisets //
///////////////////

/// Iterator over all non-decreasing `k`-tuples of face indexes drawn from
/// `0..nfaces` (combinations with replacement), in lexicographic order.
/// These are exactly the canonical outcomes of rolling `k` unordered dice.
pub struct FaceMultisets {
    nfaces: u8,
    comb: Vec<u8>,
    done: bool,
}

impl FaceMultisets {
    pub fn new(nfaces: u8, k: u8) -> Self {
        Self {
            nfaces,
            comb: vec![0; k as usize],
            done: nfaces == 0 && k > 0,
        }
    }

    fn update_to_next_combination(&mut self) -> bool {
        let k = self.comb.len();

        let pivot = (0..k).rev().find(|&idx| self.comb[idx] < self.nfaces - 1);

        match pivot {
            Some(pivot) => {
                let next = self.comb[pivot] + 1;
                for idx in pivot..k {
                    self.comb[idx] = next;
                }
                true
            }
            None => false,
        }
    }
}

impl Iterator for FaceMultisets {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let out = self.comb.clone();
        self.done = !self.update_to_next_combination();
        Some(out)
    }
}

impl FusedIterator for FaceMultisets {}

///////////
// Tests //
///////////

#[cfg(test)]
mod test {
    use super::*;
    use crate::{is_sorted_by, num_combinations, num_multisets};
    use proptest::prelude::*;
    use std::cmp;

    #[test]
    fn test_hold_basics() {
        let hold = Hold::new(vec![2, 0]);
        assert_eq!(&[0, 2], hold.idxs());
        assert!(hold.contains(0));
        assert!(!hold.contains(1));
        assert_eq!("[0,2]", hold.to_string());

        assert!(Hold::empty().is_empty());
        assert_eq!("[]", Hold::empty().to_string());
    }

    #[test]
    fn test_hold_parse() {
        assert_eq!(Hold::new(vec![0, 2]), "[2,0]".parse::<Hold>().unwrap());
        assert_eq!(Hold::new(vec![1]), "1".parse::<Hold>().unwrap());
        assert_eq!(Hold::empty(), "".parse::<Hold>().unwrap());
        assert_eq!(Hold::empty(), "[]".parse::<Hold>().unwrap());
        assert!("0,x".parse::<Hold>().is_err());
    }

    #[test]
    fn test_index_subsets_order() {
        let subsets = IndexSubsets::new(4, 2).collect::<Vec<_>>();
        let expected = [
            [0, 1],
            [0, 2],
            [0, 3],
            [1, 2],
            [1, 3],
            [2, 3],
        ];
        assert_eq!(expected.len(), subsets.len());
        for (subset, expected) in subsets.iter().zip(expected.iter()) {
            assert_eq!(expected.as_slice(), subset.idxs());
        }
    }

    #[test]
    fn test_index_subsets_count() {
        proptest!(|(n in 0_u8..=8, k in 0_u8..=8)| {
            let count = IndexSubsets::new(n, k).count() as u64;
            if k <= n {
                prop_assert_eq!(num_combinations(n as u64, k as u64), count);
            } else {
                prop_assert_eq!(0, count);
            }
        });
    }

    #[test]
    fn test_subsets_by_size() {
        // 2^n subsets total, sizes non-decreasing, lexicographic within a size
        let all = subsets_by_size(5).collect::<Vec<_>>();
        assert_eq!(1 << 5, all.len());
        assert_eq!(Hold::empty(), all[0]);
        assert_eq!(Hold::new(vec![0, 1, 2, 3, 4]), all[all.len() - 1]);

        assert!(is_sorted_by(all.iter(), |h1, h2| {
            match h1.len().cmp(&h2.len()) {
                cmp::Ordering::Equal => Some(h1.idxs().cmp(h2.idxs())),
                ord => Some(ord),
            }
        }));
    }

    #[test]
    fn test_face_multisets_order() {
        let multisets = FaceMultisets::new(3, 2).collect::<Vec<_>>();
        let expected = [[0, 0], [0, 1], [0, 2], [1, 1], [1, 2], [2, 2]];
        assert_eq!(expected.len(), multisets.len());
        for (multiset, expected) in multisets.iter().zip(expected.iter()) {
            assert_eq!(expected.as_slice(), multiset.as_slice());
        }

        // k = 0 yields exactly one empty tuple
        assert_eq!(vec![Vec::<u8>::new()], FaceMultisets::new(3, 0).collect::<Vec<_>>());
    }

    #[test]
    fn test_face_multisets_count() {
        proptest!(|(nfaces in 1_u8..=8, k in 0_u8..=6)| {
            let count = FaceMultisets::new(nfaces, k).count() as u64;
            prop_assert_eq!(num_multisets(nfaces as u64, k as u64), count);
        });
    }

    #[test]
    fn test_face_multisets_lexicographic() {
        let all = FaceMultisets::new(6, 3).collect::<Vec<_>>();
        assert!(is_sorted_by(all.iter(), |m1, m2| Some(m1.cmp(m2))));
        // each tuple is itself non-decreasing
        for multiset in &all {
            assert!(is_sorted_by(multiset.iter(), |f1, f2| Some(f1.cmp(f2))));
        }
    }
}
