use crate::{factorial, is_sorted_by, Error, NUM_FACTORIALS};
use itertools::Itertools;
use rand::{
    distributions::{Distribution, Open01},
    Rng,
};
use serde::{Deserialize, Serialize};
use std::{cmp, fmt, str::FromStr};

/// A die face label. Labels are arbitrary integers; only their position in
/// the face-value list matters for probability and flipping.
pub type Face = i64;

////////////////
// Dice rules //
////////////////

/// The immutable configuration of a game: how many dice, their faces, the
/// per-face probabilities, and the per-reroll penalty.
///
/// The flip map is derived at construction: the value at face index `i` flips
/// to the value at the mirrored index `nsides - 1 - i`, so applying it twice
/// is the identity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiceRules {
    ndice: u8,
    nsides: u8,
    values: Vec<Face>,
    bias: Vec<f64>,
    /// `flip[i]` = the value the i'th face turns into when duplicated.
    flip: Vec<Face>,
    penalty: i64,
}

impl DiceRules {
    /// 3 fair six-sided dice with faces `1..=6` and a penalty of 1 per reroll.
    pub fn standard() -> Self {
        Self::build(3, 6, (1..=6).collect(), vec![1.0 / 6.0; 6], 1)
    }

    /// `ndice` fair dice with `nsides` sides labeled `1..=nsides`, penalty 1.
    /// Use the `with_*` builders to customize labels, bias, and penalty.
    pub fn new(ndice: u8, nsides: u8) -> Result<Self, Error> {
        if ndice == 0 || nsides == 0 {
            return Err(Error::InvalidRules(
                "need at least one die and one side".to_string(),
            ));
        }
        if (ndice as usize) >= NUM_FACTORIALS {
            return Err(Error::InvalidRules(format!(
                "at most {} dice are supported, got {}",
                NUM_FACTORIALS - 1,
                ndice,
            )));
        }

        let values = (1..=Face::from(nsides)).collect();
        let bias = vec![1.0 / (nsides as f64); nsides as usize];
        Ok(Self::build(ndice, nsides, values, bias, 1))
    }

    fn build(ndice: u8, nsides: u8, values: Vec<Face>, bias: Vec<f64>, penalty: i64) -> Self {
        let flip = (0..nsides as usize)
            .map(|idx| values[nsides as usize - 1 - idx])
            .collect();
        Self {
            ndice,
            nsides,
            values,
            bias,
            flip,
            penalty,
        }
    }

    /// Replace the face labels. There must be exactly `nsides` of them and
    /// they must be distinct (the flip map is not well-defined otherwise).
    pub fn with_values(self, values: Vec<Face>) -> Result<Self, Error> {
        if values.len() != self.nsides as usize {
            return Err(Error::InvalidRules(format!(
                "expected {} face values, got {}",
                self.nsides,
                values.len(),
            )));
        }
        if !values.iter().all_unique() {
            return Err(Error::InvalidRules(
                "face values must be distinct".to_string(),
            ));
        }
        Ok(Self::build(
            self.ndice,
            self.nsides,
            values,
            self.bias,
            self.penalty,
        ))
    }

    /// Replace the per-face probabilities, aligned positionally with the face
    /// values. They must be non-negative and should sum to 1 for the model's
    /// probabilities to be meaningful (the sum is not enforced).
    pub fn with_bias(mut self, bias: Vec<f64>) -> Result<Self, Error> {
        if bias.len() != self.nsides as usize {
            return Err(Error::InvalidRules(format!(
                "expected {} face probabilities, got {}",
                self.nsides,
                bias.len(),
            )));
        }
        if bias.iter().any(|&p| p < 0.0 || !p.is_finite()) {
            return Err(Error::InvalidRules(
                "face probabilities must be non-negative and finite".to_string(),
            ));
        }
        self.bias = bias;
        Ok(self)
    }

    /// Replace the per-reroll penalty. Must be non-negative.
    pub fn with_penalty(mut self, penalty: i64) -> Result<Self, Error> {
        if penalty < 0 {
            return Err(Error::InvalidRules(format!(
                "penalty must be non-negative, got {}",
                penalty,
            )));
        }
        self.penalty = penalty;
        Ok(self)
    }

    #[inline]
    pub fn ndice(&self) -> u8 {
        self.ndice
    }

    #[inline]
    pub fn nsides(&self) -> u8 {
        self.nsides
    }

    #[inline]
    pub fn values(&self) -> &[Face] {
        &self.values
    }

    #[inline]
    pub fn bias(&self) -> &[f64] {
        &self.bias
    }

    #[inline]
    pub fn penalty(&self) -> i64 {
        self.penalty
    }

    /// The label of the i'th face.
    #[inline]
    pub fn value(&self, face_idx: u8) -> Face {
        self.values[face_idx as usize]
    }

    /// The face index of a label, if the label exists.
    pub fn face_idx(&self, value: Face) -> Option<u8> {
        self.values
            .iter()
            .position(|&other| other == value)
            .map(|idx| idx as u8)
    }

    /// The mirrored face index, `nsides - 1 - idx`.
    #[inline]
    pub(crate) fn mirror_idx(&self, face_idx: u8) -> u8 {
        self.nsides - 1 - face_idx
    }

    /// What a duplicated value flips to. Involutive: `flipped(flipped(v)) == v`.
    pub fn flipped(&self, value: Face) -> Option<Face> {
        self.face_idx(value).map(|idx| self.flip[idx as usize])
    }

    /// The sampling distribution over face indexes induced by `bias`.
    pub fn die_distr(&self) -> DieDistr {
        DieDistr::from_pmf(&self.bias)
    }

    /// The terminal score of a full dice outcome: values that occur exactly
    /// once score at face value, duplicated values are flipped to their
    /// mirror and weighted by their count. Permutation invariant.
    pub fn score(&self, dice: &[Face]) -> Result<i64, Error> {
        let counts = self.counts_of(dice)?;
        Ok(self.score_counts(&counts))
    }

    pub(crate) fn score_counts(&self, counts: &FaceCounts) -> i64 {
        (0..self.nsides)
            .map(|face_idx| {
                let count = counts.get_count(face_idx) as i64;
                match count {
                    0 => 0,
                    1 => self.values[face_idx as usize],
                    _ => self.flip[face_idx as usize] * count,
                }
            })
            .sum()
    }

    /// Histogram a raw dice outcome by face index. Fails if the outcome has
    /// the wrong length or contains an unknown label.
    pub(crate) fn counts_of(&self, dice: &[Face]) -> Result<FaceCounts, Error> {
        if dice.len() != self.ndice as usize {
            return Err(Error::InvalidState(DiceState::from_values(dice.to_vec())));
        }
        let mut counts = FaceCounts::new(self.nsides);
        for &value in dice {
            match self.face_idx(value) {
                Some(face_idx) => counts.add_count(face_idx, 1),
                None => return Err(Error::InvalidState(DiceState::from_values(dice.to_vec()))),
            }
        }
        Ok(counts)
    }

    /// Apply the duplicate-flip-and-sort normalization to a histogram,
    /// producing the final dice array as face indexes sorted by face value.
    pub(crate) fn flip_duplicates(&self, counts: &FaceCounts) -> Vec<u8> {
        let mut dice = Vec::with_capacity(counts.len() as usize);
        for face_idx in 0..self.nsides {
            let count = counts.get_count(face_idx);
            match count {
                0 => {}
                1 => dice.push(face_idx),
                _ => dice.extend(std::iter::repeat(self.mirror_idx(face_idx)).take(count as usize)),
            }
        }
        self.sort_idxs(&mut dice);
        dice
    }

    /// Sort face indexes by their face value (labels need not be monotonic
    /// in their index).
    pub(crate) fn sort_idxs(&self, idxs: &mut [u8]) {
        idxs.sort_unstable_by_key(|&idx| self.values[idx as usize]);
    }

    /// The canonical state named by a list of face indexes.
    pub(crate) fn state_from_idxs(&self, idxs: &[u8]) -> DiceState {
        DiceState::from_values(idxs.iter().map(|&idx| self.value(idx)).collect())
    }
}

impl Default for DiceRules {
    fn default() -> Self {
        Self::standard()
    }
}

///////////////////////
// Die distributions //
///////////////////////

/// A die's face distribution, as a cumulative distribution function (CDF)
/// over face indexes for more efficient sampling.
#[derive(Clone)]
pub struct DieDistr(Vec<f64>);

impl DieDistr {
    pub(crate) fn from_pmf(pmf: &[f64]) -> Self {
        let mut cdf = Vec::with_capacity(pmf.len());
        let mut acc = 0.0;
        for &p in pmf {
            acc += p;
            cdf.push(acc);
        }
        // clamp the top end so float drift can't push a sample out of range
        if let Some(last) = cdf.last_mut() {
            *last = 1.0;
        }
        Self(cdf)
    }

    /// convert a standard sample r ∈ (0, 1) to a face index, according to
    /// this CDF.
    #[inline]
    fn sample_to_face_idx(&self, r: f64) -> u8 {
        let idx = self.0.partition_point(|&c| c < r);
        cmp::min(idx, self.0.len() - 1) as u8
    }
}

impl Distribution<u8> for DieDistr {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        // sample r ∈ (0, 1)
        let r = Open01.sample(rng);
        self.sample_to_face_idx(r)
    }
}

impl fmt::Debug for DieDistr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DieDistr(cdf: {:?})", self.0)
    }
}

/////////////////
// Face counts //
/////////////////

/// A histogram of rolled dice, as counts per face index. Order invariant by
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceCounts(Vec<u8>);

impl FaceCounts {
    pub(crate) fn new(nsides: u8) -> Self {
        Self(vec![0; nsides as usize])
    }

    pub(crate) fn from_face_idxs(nsides: u8, face_idxs: &[u8]) -> Self {
        let mut counts = Self::new(nsides);
        for &face_idx in face_idxs {
            counts.add_count(face_idx, 1);
        }
        counts
    }

    /// The number of dice in this histogram.
    #[inline]
    pub(crate) fn len(&self) -> u8 {
        self.0.iter().sum()
    }

    #[inline]
    pub(crate) fn get_count(&self, face_idx: u8) -> u8 {
        self.0[face_idx as usize]
    }

    #[inline]
    pub(crate) fn add_count(&mut self, face_idx: u8, count: u8) {
        self.0[face_idx as usize] += count;
    }

    /// The exact multinomial probability of rolling exactly this histogram
    /// with `len()` independent draws under per-face probabilities `bias`:
    ///
    /// `P = n! / (∏_i c_i!) · ∏_i bias_i^{c_i}`
    pub(crate) fn p_roll_with_bias(&self, bias: &[f64]) -> f64 {
        debug_assert_eq!(self.0.len(), bias.len());

        let n = self.len() as u32;

        let (prod, p_joint) = self.0.iter().zip(bias.iter()).fold(
            (1_u64, 1.0_f64),
            |(prod, p_joint), (&count, &p_face)| {
                let prod = prod * factorial(count as u32);
                let p_joint = p_joint * p_face.powi(count as i32);
                (prod, p_joint)
            },
        );

        ((factorial(n) / prod) as f64) * p_joint
    }
}

/////////////////
// Dice states //
/////////////////

/// A canonical dice outcome: the rolled values in non-decreasing order.
/// Two rolls that are permutations of each other share one `DiceState`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiceState(Vec<Face>);

impl DiceState {
    /// Canonicalize an unordered list of rolled values.
    pub fn from_values(mut values: Vec<Face>) -> Self {
        values.sort_unstable();
        let state = Self(values);
        debug_assert!(state.invariant());
        state
    }

    #[inline]
    pub fn values(&self) -> &[Face] {
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

    fn invariant(&self) -> bool {
        is_sorted_by(self.0.iter(), |v1, v2| Some(v1.cmp(v2)))
    }
}

impl fmt::Debug for DiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for DiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(","))
    }
}

/// Parse a comma/space/tab separated list of face values into a `DiceState`.
/// Enclosing brackets ('[' or ']') optional.
impl FromStr for DiceState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start_matches('[');
        let s = s.trim_end_matches(']');

        let splitters = &[',', ' ', '\n', '\t'];

        let values = s
            .split(splitters)
            .filter(|s| !s.is_empty())
            .map(|value_str| {
                value_str
                    .parse::<Face>()
                    .map_err(|err| format!("die value is not a valid integer: {}", err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_values(values))
    }
}

///////////
// Tests //
///////////

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_rng;
    use approx::assert_relative_eq;
    use claim::{assert_ge, assert_lt};
    use proptest::prelude::*;

    #[test]
    fn test_rules_validation() {
        assert!(DiceRules::new(0, 6).is_err());
        assert!(DiceRules::new(3, 0).is_err());
        assert!(DiceRules::new(21, 6).is_err());
        assert!(DiceRules::new(20, 6).is_ok());

        let rules = DiceRules::standard();
        assert!(rules.clone().with_values(vec![1, 2, 3]).is_err());
        assert!(rules.clone().with_values(vec![1, 1, 2, 3, 4, 5]).is_err());
        assert!(rules.clone().with_bias(vec![0.5, 0.5]).is_err());
        assert!(rules
            .clone()
            .with_bias(vec![0.5, -0.5, 0.2, 0.2, 0.3, 0.3])
            .is_err());
        assert!(rules.clone().with_penalty(-1).is_err());
        assert!(rules
            .with_values(vec![10, 20, 30, 40, 50, 60])
            .and_then(|rules| rules.with_penalty(0))
            .is_ok());
    }

    #[test]
    fn test_flip_involution() {
        let rules = DiceRules::standard();
        for value in 1..=6 {
            let flipped = rules.flipped(value).unwrap();
            assert_eq!(Some(value), rules.flipped(flipped));
        }
        // 1 <-> 6, 2 <-> 5, 3 <-> 4
        assert_eq!(Some(6), rules.flipped(1));
        assert_eq!(Some(4), rules.flipped(3));
        assert_eq!(None, rules.flipped(7));
    }

    #[test]
    fn test_flip_involution_prop() {
        proptest!(|(mut values in proptest::collection::hash_set(-50_i64..50, 2..=8))| {
            let values = values.drain().collect::<Vec<_>>();
            let nsides = values.len() as u8;
            let rules = DiceRules::new(2, nsides)
                .unwrap()
                .with_values(values.clone())
                .unwrap();

            for &value in &values {
                let flipped = rules.flipped(value).unwrap();
                prop_assert_eq!(Some(value), rules.flipped(flipped));
            }
        });
    }

    #[test]
    fn test_score() {
        let rules = DiceRules::standard();

        // all singles score at face value
        assert_eq!(12, rules.score(&[2, 4, 6]).unwrap());
        // duplicated 3s flip to 4: 5 + 4*2 = 13
        assert_eq!(13, rules.score(&[3, 3, 5]).unwrap());
        // triple 1 flips to 6: 6*3 = 18
        assert_eq!(18, rules.score(&[1, 1, 1]).unwrap());
        // triple 6 flips to 1: 1*3 = 3
        assert_eq!(3, rules.score(&[6, 6, 6]).unwrap());

        // wrong length and unknown labels are rejected
        assert!(rules.score(&[1, 2]).is_err());
        assert!(rules.score(&[1, 2, 7]).is_err());
    }

    #[test]
    fn test_score_permutation_invariant() {
        let rules = DiceRules::standard();
        proptest!(|(dice in proptest::collection::vec(1_i64..=6, 3), seed in any::<u64>())| {
            let mut shuffled = dice.clone();
            let mut rng = test_rng(seed);
            // fisher-yates
            for idx in (1..shuffled.len()).rev() {
                let other = rng.gen_range(0..=idx);
                shuffled.swap(idx, other);
            }
            prop_assert_eq!(rules.score(&dice).unwrap(), rules.score(&shuffled).unwrap());
        });
    }

    #[test]
    fn test_flip_duplicates() {
        let rules = DiceRules::standard();

        // (3, 3, 5) -> (4, 4, 5)
        let counts = rules.counts_of(&[3, 3, 5]).unwrap();
        let state = rules.state_from_idxs(&rules.flip_duplicates(&counts));
        assert_eq!("[4,4,5]", state.to_string());

        // flipped duplicates can collide with a held single: (3, 3, 4) -> (4, 4, 4)
        let counts = rules.counts_of(&[3, 3, 4]).unwrap();
        let state = rules.state_from_idxs(&rules.flip_duplicates(&counts));
        assert_eq!("[4,4,4]", state.to_string());

        let score = rules.score(&[3, 3, 4]).unwrap();
        assert_eq!(12, score);
    }

    #[test]
    fn test_p_roll_with_bias() {
        let bias = [1.0 / 6.0; 6];

        // all three dice on one face: (1/6)^3
        let counts = FaceCounts::from_face_idxs(6, &[0, 0, 0]);
        assert_relative_eq!(1.0 / 216.0, counts.p_roll_with_bias(&bias));

        // three distinct faces: 3! * (1/6)^3
        let counts = FaceCounts::from_face_idxs(6, &[0, 1, 2]);
        assert_relative_eq!(6.0 / 216.0, counts.p_roll_with_bias(&bias));

        // a pair: 3 * (1/6)^3
        let counts = FaceCounts::from_face_idxs(6, &[0, 0, 1]);
        assert_relative_eq!(3.0 / 216.0, counts.p_roll_with_bias(&bias));
    }

    #[test]
    fn test_die_distr_sampling() {
        let rules = DiceRules::standard();
        let distr = rules.die_distr();
        let mut rng = test_rng(0xd1ce);

        let mut counts = [0_u32; 6];
        for face_idx in distr.sample_iter(&mut rng).take(6_000) {
            assert_lt!(face_idx, 6);
            counts[face_idx as usize] += 1;
        }
        // every face of a fair die should show up plenty of times
        for count in counts {
            assert_ge!(count, 800);
        }
    }

    #[test]
    fn test_die_distr_degenerate() {
        // all mass on face index 2
        let distr = DieDistr::from_pmf(&[0.0, 0.0, 1.0, 0.0]);
        let mut rng = test_rng(42);
        for face_idx in distr.sample_iter(&mut rng).take(100) {
            assert_eq!(2, face_idx);
        }
    }

    #[test]
    fn test_dice_state_parse() {
        assert_eq!(
            DiceState::from_values(vec![1, 1, 3]),
            "[1,1,3]".parse::<DiceState>().unwrap()
        );
        // parsing canonicalizes order
        assert_eq!(
            DiceState::from_values(vec![1, 2, 3]),
            "3 1 2".parse::<DiceState>().unwrap()
        );
        assert!("1,x,3".parse::<DiceState>().is_err());
    }
}
