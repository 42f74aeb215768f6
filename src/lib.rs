//! # flipdice
//!
//! An exact model of the "duplicate flip" dice game, built for planners.
//!
//! ## Rules
//!
//! A player rolls a handful of (possibly biased) dice, then repeatedly
//! chooses a set of dice to hold while rerolling the rest, paying a small
//! penalty per reroll. Holding every die ends the game and scores the final
//! dice: values that appear exactly once score at face value, while any
//! duplicated value is "flipped" to its mirror in the face-value list before
//! being weighted by its count.
//!
//! ## Explanation
//!
//! The interesting part is the transition model: for any `(hold, state)`
//! pair, [`mdp::DiceMdp::next_states`] enumerates every canonical next state
//! together with its exact multinomial probability, so a planner (e.g. value
//! iteration) can solve the game without ever sampling a die. The action and
//! state spaces are finite, enumerated eagerly at construction, and stable
//! for the lifetime of the model. A mutable [`game::LiveGame`] session rolls
//! real dice from the same distribution for interactive play.

#[macro_use]
mod macros;

pub mod cli;
pub mod combo;
pub mod dice;
pub mod game;
pub mod mdp;
pub(crate) mod stats;

use std::{cmp, fmt};

///////////////////
// Combinatorics //
///////////////////

/// The number of factorials to precompute in our static lookup table. Note
/// this number is chosen so as not to overflow a u64 (`20! < 2^64 <= 21!`),
/// which also bounds the number of dice a [`dice::DiceRules`] will accept.
pub(crate) const NUM_FACTORIALS: usize = 21;

/// A precomputed lookup table of factorials from `0 <= n < NUM_FACTORIALS`.
/// `FACTORIAL_LT[n] = n!`.
const FACTORIAL_LT: [u64; NUM_FACTORIALS] = precompute_factorials();

const fn precompute_factorials() -> [u64; NUM_FACTORIALS] {
    let mut factorials: [u64; NUM_FACTORIALS] = [1; NUM_FACTORIALS];

    // need ghetto for-loop in const fn...
    let mut idx = 1;
    loop {
        if idx >= NUM_FACTORIALS {
            break;
        }
        factorials[idx] = (idx as u64) * factorials[idx - 1];
        idx += 1;
    }

    factorials
}

pub(crate) const fn factorial(n: u32) -> u64 {
    FACTORIAL_LT[n as usize]
}

/// count `n choose k` without replacement. uses the multiplicative formula
/// rather than the factorial table since `n` here can exceed the table bound
/// (e.g. many-sided dice). saturates at `u64::MAX` for counts too large to
/// represent, so capacity hints for unenumerably huge spaces stay finite.
pub(crate) const fn num_combinations(n: u64, k: u64) -> u64 {
    let k = if k > n - k { n - k } else { k };

    let mut out: u128 = 1;
    let mut idx: u128 = 0;
    loop {
        if idx >= k as u128 {
            break;
        }
        // exact: out is always a binomial coefficient times a partial product
        out = out * (n as u128 - idx) / (idx + 1);
        idx += 1;
    }

    if out > u64::MAX as u128 {
        u64::MAX
    } else {
        out as u64
    }
}

/// count `n choose k` with replacement. also known as `n multichoose k`.
#[inline]
pub(crate) const fn num_multisets(n: u64, k: u64) -> u64 {
    num_combinations(n + k - 1, k)
}

////////////////////////////
// Unstable std functions //
////////////////////////////

/// Returns `true` if the iterator `iter` is sorted, according to the comparator
/// function `compare`, i.e., `x_1 <= x2 <= ... <= x_n`.
// TODO(flipdice): use `std::slice::is_sorted_by` when it stabilizes.
pub(crate) fn is_sorted_by<T, F>(mut iter: impl Iterator<Item = T>, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Option<cmp::Ordering>,
{
    let mut prev = match iter.next() {
        Some(first) => first,
        None => return true,
    };

    for next in iter {
        if let Some(cmp::Ordering::Greater) | None = compare(&prev, &next) {
            return false;
        }
        prev = next;
    }

    true
}

cfg_test! {
    /// A small, fast, seedable RNG for deterministic tests.
    pub(crate) fn test_rng(seed: u64) -> rand_xoshiro::Xoroshiro64Star {
        use rand::SeedableRng;
        rand_xoshiro::Xoroshiro64Star::seed_from_u64(seed)
    }
}

////////////
// Errors //
////////////

/// Everything that can go wrong when constructing or querying the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The dice configuration itself is malformed (e.g. `values` or `bias`
    /// length doesn't match the number of sides). Fatal to construction.
    InvalidRules(String),
    /// The given hold is not a member of the precomputed action space:
    /// out-of-range or duplicate die indices. Nothing is mutated.
    InvalidHold(combo::Hold),
    /// The given dice state is not a member of the precomputed state space:
    /// wrong length or values outside the face-value list. Nothing is mutated.
    InvalidState(dice::DiceState),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRules(msg) => write!(f, "invalid dice rules: {}", msg),
            Self::InvalidHold(hold) => {
                write!(f, "hold {} is not a valid set of die indices", hold)
            }
            Self::InvalidState(state) => {
                write!(f, "dice state {} is not in the state space", state)
            }
        }
    }
}

impl std::error::Error for Error {}

///////////
// Tests //
///////////

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn factorial_ref(n: u32) -> u64 {
        (1..=n as u64).product()
    }

    #[test]
    fn test_factorial_lt() {
        for n in 0..NUM_FACTORIALS as u32 {
            assert_eq!(factorial_ref(n), factorial(n));
        }
    }

    fn num_combinations_ref(n: u64, k: u64) -> u64 {
        factorial_ref(n as u32) / (factorial_ref(k as u32) * factorial_ref((n - k) as u32))
    }

    #[test]
    fn test_num_combinations() {
        proptest!(|(n in 0_u64..=20, k in 0_u64..=20)| {
            prop_assume!(k <= n);
            prop_assert_eq!(num_combinations_ref(n, k), num_combinations(n, k));
        });

        // past the factorial table bound
        assert_eq!(1, num_combinations(64, 0));
        assert_eq!(64, num_combinations(64, 1));
        assert_eq!(2016, num_combinations(64, 2));

        // the largest count a 255-sided, 20-dice state space can ask for
        // saturates instead of overflowing
        assert_eq!(u64::MAX, num_combinations(274, 20));
        assert_eq!(u64::MAX, num_multisets(255, 20));
    }

    #[test]
    fn test_num_multisets() {
        // 6 multichoose 3 = C(8, 3) = 56
        assert_eq!(56, num_multisets(6, 3));
        assert_eq!(1, num_multisets(6, 0));
        assert_eq!(6, num_multisets(6, 1));
    }

    #[test]
    fn test_is_sorted_by() {
        let cmp = |a: &u8, b: &u8| Some(a.cmp(b));
        assert!(is_sorted_by([].into_iter(), cmp));
        assert!(is_sorted_by([1, 1, 2, 5].into_iter(), cmp));
        assert!(!is_sorted_by([1, 2, 1].into_iter(), cmp));
    }
}
