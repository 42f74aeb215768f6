use crate::{
    combo::Hold,
    dice::{DiceState, DieDistr, FaceCounts},
    mdp::DiceMdp,
    Error,
};
use rand::{distributions::Distribution, Rng};

//////////////
// LiveGame //
//////////////

/// A mutable, single-trajectory game session: rolls real dice from the same
/// distribution the transition model integrates over.
///
/// The dice are kept sorted by face value after every mutation, so
/// [`current_state`](Self::current_state) is always a member of the model's
/// state space.
pub struct LiveGame<'a> {
    mdp: &'a DiceMdp,
    distr: DieDistr,
    /// face indexes of the current dice, sorted by face value.
    dice: Vec<u8>,
    score: i64,
    game_over: bool,
}

/// What one call to [`LiveGame::roll`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    /// the score delta: the final score on a terminal roll, `-penalty` on a
    /// reroll, `0` after the game is over.
    pub reward: i64,
    /// the dice after the roll.
    pub dice: DiceState,
    pub game_over: bool,
}

impl<'a> LiveGame<'a> {
    /// Start a fresh session, rolling the opening dice.
    pub fn new<R: Rng>(mdp: &'a DiceMdp, rng: &mut R) -> Self {
        let mut game = Self {
            mdp,
            distr: mdp.rules().die_distr(),
            dice: Vec::new(),
            score: 0,
            game_over: false,
        };
        game.reset(rng);
        game
    }

    #[inline]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The current dice as a canonical state.
    pub fn current_state(&self) -> DiceState {
        self.mdp.rules().state_from_idxs(&self.dice)
    }

    /// Restart: re-enter the active phase with the score set to `penalty`
    /// and all dice rerolled. The opening roll is free.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> DiceState {
        let rules = self.mdp.rules();

        self.score = rules.penalty();
        self.game_over = false;
        self.dice = (&self.distr)
            .sample_iter(&mut *rng)
            .take(rules.ndice() as usize)
            .collect();
        rules.sort_idxs(&mut self.dice);

        self.current_state()
    }

    /// Take one turn: hold the dice at the given (sorted-state) positions and
    /// reroll the rest.
    ///
    /// Holding every die ends the game: duplicates flip in place and the dice
    /// sum is added to the score. Any smaller hold rerolls the remaining dice
    /// i.i.d. and deducts the penalty.
    ///
    /// A hold outside the action space fails without touching the session.
    /// Rolling after the game is over is a no-op with zero reward.
    pub fn roll<R: Rng>(&mut self, hold: &Hold, rng: &mut R) -> Result<RollOutcome, Error> {
        if self.mdp.action_idx(hold).is_none() {
            return Err(Error::InvalidHold(hold.clone()));
        }

        if self.game_over {
            return Ok(RollOutcome {
                reward: 0,
                dice: self.current_state(),
                game_over: true,
            });
        }

        let rules = self.mdp.rules();

        if hold.len() == rules.ndice() {
            let counts = FaceCounts::from_face_idxs(rules.nsides(), &self.dice);
            let gained = rules.score_counts(&counts);

            self.dice = rules.flip_duplicates(&counts);
            self.score += gained;
            self.game_over = true;

            return Ok(RollOutcome {
                reward: gained,
                dice: self.current_state(),
                game_over: true,
            });
        }

        for die_idx in 0..rules.ndice() {
            if !hold.contains(die_idx) {
                self.dice[die_idx as usize] = self.distr.sample(rng);
            }
        }
        rules.sort_idxs(&mut self.dice);
        self.score -= rules.penalty();

        Ok(RollOutcome {
            reward: -rules.penalty(),
            dice: self.current_state(),
            game_over: false,
        })
    }
}

///////////
// Tests //
///////////
