use crate::{
    combo::{self, FaceMultisets, Hold},
    dice::{DiceRules, DiceState, FaceCounts},
    game::LiveGame,
    num_multisets, Error,
};
use approx::relative_eq;
use ndarray::Array1;
use rand::Rng;
use std::collections::HashMap;

/////////////
// DiceMdp //
/////////////

/// The finite MDP induced by a [`DiceRules`] configuration.
///
/// The action space (all holds, grouped by size) and state space (all
/// canonical dice outcomes) are enumerated eagerly at construction and never
/// change, so planners can index into [`actions`](Self::actions) /
/// [`states`](Self::states) by position. Final scores are precomputed for
/// every state.
///
/// All queries are pure: the model never mutates and never samples.
pub struct DiceMdp {
    rules: DiceRules,
    actions: Vec<Hold>,
    states: Vec<DiceState>,
    /// face-index representation of each state, sorted by face value,
    /// parallel with `states`.
    state_faces: Vec<Vec<u8>>,
    action_idxs: HashMap<Hold, usize>,
    state_idxs: HashMap<DiceState, usize>,
    final_scores: Vec<i64>,
}

impl DiceMdp {
    pub fn new(rules: DiceRules) -> Self {
        let ndice = rules.ndice();
        let nsides = rules.nsides();

        let actions = combo::subsets_by_size(ndice).collect::<Vec<_>>();

        let num_states = num_multisets(nsides as u64, ndice as u64) as usize;
        let mut states = Vec::with_capacity(num_states);
        let mut state_faces = Vec::with_capacity(num_states);
        let mut final_scores = Vec::with_capacity(num_states);

        for mut face_idxs in FaceMultisets::new(nsides, ndice) {
            let counts = FaceCounts::from_face_idxs(nsides, &face_idxs);
            final_scores.push(rules.score_counts(&counts));

            rules.sort_idxs(&mut face_idxs);
            states.push(rules.state_from_idxs(&face_idxs));
            state_faces.push(face_idxs);
        }

        let action_idxs = actions
            .iter()
            .enumerate()
            .map(|(idx, action)| (action.clone(), idx))
            .collect::<HashMap<_, _>>();
        let state_idxs = states
            .iter()
            .enumerate()
            .map(|(idx, state)| (state.clone(), idx))
            .collect::<HashMap<_, _>>();

        Self {
            rules,
            actions,
            states,
            state_faces,
            action_idxs,
            state_idxs,
            final_scores,
        }
    }

    #[inline]
    pub fn rules(&self) -> &DiceRules {
        &self.rules
    }

    /// The full action space: every subset of die indices, grouped by size
    /// (empty hold first, hold-everything last), lexicographic within a size.
    #[inline]
    pub fn actions(&self) -> &[Hold] {
        &self.actions
    }

    /// The full state space: every canonical dice outcome, in generator
    /// order.
    #[inline]
    pub fn states(&self) -> &[DiceState] {
        &self.states
    }

    pub fn action_idx(&self, action: &Hold) -> Option<usize> {
        self.action_idxs.get(action).copied()
    }

    pub fn state_idx(&self, state: &DiceState) -> Option<usize> {
        self.state_idxs.get(state).copied()
    }

    /// The terminal score of a state, from the precomputed table.
    pub fn final_score(&self, state: &DiceState) -> Result<i64, Error> {
        let state_idx = self
            .state_idx(state)
            .ok_or_else(|| Error::InvalidState(state.clone()))?;
        Ok(self.final_scores[state_idx])
    }

    /// Start an interactive game session against this model's dice.
    pub fn new_game<R: Rng>(&self, rng: &mut R) -> LiveGame<'_> {
        LiveGame::new(self, rng)
    }

    /// The exact transition dynamics of taking `action` in `state`.
    ///
    /// Holding every die is terminal: the single pseudo-outcome `None` with
    /// probability 1 and the state's final score as reward. Otherwise every
    /// canonical outcome of rerolling the non-held dice is enumerated, in
    /// lexicographic face-index order, with its exact multinomial probability
    ///
    /// `P = r! / (∏_i c_i!) · ∏_i bias_i^{c_i}`
    ///
    /// where `r` dice are rerolled and `c_i` counts face `i` among them. The
    /// reward of every non-terminal transition is `-penalty`.
    pub fn next_states(&self, action: &Hold, state: &DiceState) -> Result<Transitions, Error> {
        if !self.action_idxs.contains_key(action) {
            return Err(Error::InvalidHold(action.clone()));
        }
        let state_idx = self
            .state_idx(state)
            .ok_or_else(|| Error::InvalidState(state.clone()))?;

        let ndice = self.rules.ndice();

        // holding everything ends the game
        if action.len() == ndice {
            return Ok(Transitions {
                outcomes: vec![None],
                probs: Array1::from_elem(1, 1.0),
                reward: self.final_scores[state_idx],
                terminal: true,
            });
        }

        let nsides = self.rules.nsides();
        let num_reroll = ndice - action.len();

        let held_faces = action
            .idxs()
            .iter()
            .map(|&die_idx| self.state_faces[state_idx][die_idx as usize])
            .collect::<Vec<_>>();

        let num_outcomes = num_multisets(nsides as u64, num_reroll as u64) as usize;
        let mut outcomes = Vec::with_capacity(num_outcomes);
        let mut probs = Vec::with_capacity(num_outcomes);

        for reroll_faces in FaceMultisets::new(nsides, num_reroll) {
            let counts = FaceCounts::from_face_idxs(nsides, &reroll_faces);
            probs.push(counts.p_roll_with_bias(self.rules.bias()));

            let mut next_faces = reroll_faces;
            next_faces.extend_from_slice(&held_faces);
            self.rules.sort_idxs(&mut next_faces);
            outcomes.push(Some(self.rules.state_from_idxs(&next_faces)));
        }

        let probs = Array1::from_vec(probs);
        debug_assert!(relative_eq!(probs.sum(), 1.0, epsilon = 1.0e-9));

        Ok(Transitions {
            outcomes,
            probs,
            reward: -self.rules.penalty(),
            terminal: false,
        })
    }

    /// Like [`next_states`](Self::next_states), but outcomes naming the same
    /// canonical state are merged into one entry (probabilities summed),
    /// keeping first-occurrence order.
    pub fn next_states_merged(
        &self,
        action: &Hold,
        state: &DiceState,
    ) -> Result<Transitions, Error> {
        let raw = self.next_states(action, state)?;

        let mut merged_idxs: HashMap<Option<DiceState>, usize> = HashMap::new();
        let mut outcomes = Vec::with_capacity(raw.outcomes.len());
        let mut probs = Vec::with_capacity(raw.outcomes.len());

        for (outcome, &p) in raw.outcomes.into_iter().zip(raw.probs.iter()) {
            match merged_idxs.get(&outcome) {
                Some(&merged_idx) => probs[merged_idx] += p,
                None => {
                    merged_idxs.insert(outcome.clone(), outcomes.len());
                    outcomes.push(outcome);
                    probs.push(p);
                }
            }
        }

        Ok(Transitions {
            outcomes,
            probs: Array1::from_vec(probs),
            reward: raw.reward,
            terminal: raw.terminal,
        })
    }
}

/////////////////
// Transitions //
/////////////////

/// The result of a transition query: parallel outcome/probability arrays
/// plus the (deterministic) reward and terminal flag.
///
/// `None` is the pseudo-outcome of the terminal hold-everything action.
#[derive(Clone, Debug)]
pub struct Transitions {
    pub outcomes: Vec<Option<DiceState>>,
    pub probs: Array1<f64>,
    pub reward: i64,
    pub terminal: bool,
}

impl Transitions {
    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.probs.sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Option<&DiceState>, f64)> + '_ {
        self.outcomes
            .iter()
            .map(Option::as_ref)
            .zip(self.probs.iter().copied())
    }
}

///////////
// Tests //
///////////
