use crate::{
    combo::Hold,
    dice::{DiceRules, DiceState, Face},
    mdp::DiceMdp,
    stats,
};
use ndarray::Array1;
use rand::SeedableRng;
use rand_xoshiro::Xoroshiro64Star;
use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
    time::{Instant, SystemTime},
};
use tabular::{row, Table};

///////////////////////////
// String parser helpers //
///////////////////////////

fn parse_req<T>(label: &'static str, s: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    T::from_str(s).map_err(|err| format!("invalid {label}: {err}"))
}

fn parse_opt<T>(label: &'static str, opt_s: Option<&str>) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    opt_s
        .map(T::from_str)
        .transpose()
        .map_err(|err| format!("invalid {label}: {err}"))
}

/// Parse a comma/space separated list (brackets optional), preserving order.
fn parse_list<T>(label: &'static str, s: &str) -> Result<Vec<T>, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let s = s.trim_start_matches('[');
    let s = s.trim_end_matches(']');

    s.split([',', ' ', '\t'])
        .filter(|s| !s.is_empty())
        .map(|entry| parse_req(label, entry))
        .collect()
}

//////////////////////
// CLI Args Wrapper //
//////////////////////

pub struct Args(pico_args::Arguments);

impl Args {
    pub fn new(inner: pico_args::Arguments) -> Self {
        Self(inner)
    }

    fn subcommand(&mut self) -> Result<Option<String>, String> {
        self.0.subcommand().map_err(|err| err.to_string())
    }

    fn contains(&mut self, keys: impl Into<pico_args::Keys>) -> bool {
        self.0.contains(keys)
    }

    fn opt_value(&mut self, keys: impl Into<pico_args::Keys>) -> Result<Option<String>, String> {
        self.0
            .opt_value_from_fn(keys, |s| Result::<_, pico_args::Error>::Ok(s.to_owned()))
            .map_err(|err| err.to_string())
    }

    fn free_value(&mut self) -> Result<String, String> {
        self.0
            .free_from_fn(|s| Result::<_, pico_args::Error>::Ok(s.to_owned()))
            .map_err(|err| err.to_string())
    }

    fn expect_finished(self) -> Result<(), String> {
        let remaining = self.0.finish();
        if !remaining.is_empty() {
            Err(format!("unexpected arguments left: '{:?}'", remaining))
        } else {
            Ok(())
        }
    }

    fn maybe_help(&mut self, usage: &str) {
        if self.0.contains(["-h", "--help"]) {
            print!("{}", usage);
            std::process::exit(0);
        }
    }
}

//////////////////
// Shared flags //
//////////////////

/// Build a [`DiceRules`] from the shared `--dice`/`--sides`/`--values`/
/// `--bias`/`--penalty` flags.
fn rules_from_args(args: &mut Args) -> Result<DiceRules, String> {
    let ndice = parse_opt("dice count", args.opt_value(["-d", "--dice"])?.as_deref())?.unwrap_or(3);
    let nsides =
        parse_opt("side count", args.opt_value(["-s", "--sides"])?.as_deref())?.unwrap_or(6);
    let values = args.opt_value("--values")?;
    let bias = args.opt_value("--bias")?;
    let penalty = parse_opt(
        "penalty",
        args.opt_value(["-p", "--penalty"])?.as_deref(),
    )?;

    let mut rules = DiceRules::new(ndice, nsides).map_err(|err| err.to_string())?;
    if let Some(values) = values {
        let values = parse_list::<Face>("face value", &values)?;
        rules = rules.with_values(values).map_err(|err| err.to_string())?;
    }
    if let Some(bias) = bias {
        let bias = parse_list::<f64>("face probability", &bias)?;
        rules = rules.with_bias(bias).map_err(|err| err.to_string())?;
    }
    if let Some(penalty) = penalty {
        rules = rules.with_penalty(penalty).map_err(|err| err.to_string())?;
    }

    Ok(rules)
}

fn seed_from_args(args: &mut Args) -> Result<u64, String> {
    let seed = parse_opt("seed", args.opt_value("--seed")?.as_deref())?;
    match seed {
        Some(seed) => Ok(seed),
        None => {
            let elapsed = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map_err(|err| err.to_string())?;
            Ok(elapsed.as_nanos() as u64)
        }
    }
}

/////////////
// Metrics //
/////////////

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Metrics(pub Vec<(String, String)>);

impl Metrics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.push((label.into(), value.into()));
        self
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new("{:>}  {:<}");

        for (label, value) in &self.0 {
            table.add_row(row!(label, value));
        }

        table
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}", self.to_table())
    }
}

///////////////////
// Command trait //
///////////////////

pub trait Command: Sized {
    const USAGE: &'static str;

    type Output: fmt::Display;

    fn try_from_cli_args(args: Args) -> Result<Self, String>;
    fn run(self) -> Result<Self::Output, String>;
}

/////////////////
// PlayCommand //
/////////////////

#[derive(Clone, Debug)]
pub struct PlayCommand {
    rules: DiceRules,
    seed: u64,
}

impl Command for PlayCommand {
    const USAGE: &'static str = "\
flipdice play - play the dice game interactively

USAGE:
    flipdice play [option ...]

EXAMPLES:
    flipdice play
    flipdice play -d 4 --bias [0.3,0.14,0.14,0.14,0.14,0.14]

Each turn, enter the positions of the dice to hold (e.g. '0,2'). A blank
line rerolls everything; 'all' holds every die and ends the game.

OPTIONS:
    · --seed n (default: wall clock)
      The RNG seed, for reproducible games.

    · --dice / -d n (default: 3)
      The number of dice rolled each turn.

    · --sides / -s n (default: 6)
      The number of sides on each die.

    · --values [v1,v2,..] (default: [1,2,..,sides])
      The face labels, one per side, in face order. Distinct integers.

    · --bias [p1,p2,..] (default: uniform)
      The per-face probabilities, aligned with --values. Must sum to 1.

    · --penalty / -p n (default: 1)
      The score deducted per reroll.
";

    type Output = String;

    fn try_from_cli_args(mut args: Args) -> Result<Self, String> {
        args.maybe_help(Self::USAGE);

        let rules = rules_from_args(&mut args)?;
        let seed = seed_from_args(&mut args)?;
        args.expect_finished()?;

        Ok(Self { rules, seed })
    }

    fn run(self) -> Result<Self::Output, String> {
        let mdp = DiceMdp::new(self.rules);
        let mut rng = Xoroshiro64Star::seed_from_u64(self.seed);

        let hold_all = Hold::new((0..mdp.rules().ndice()).collect());

        let stdin = io::stdin();
        let mut stdin = stdin.lock();
        let mut line = String::new();

        'session: loop {
            let mut game = mdp.new_game(&mut rng);
            println!("\ndice: {}  score: {}", game.current_state(), game.score());

            while !game.is_over() {
                print!("hold> ");
                io::stdout().flush().map_err(|err| err.to_string())?;

                line.clear();
                let nread = stdin.read_line(&mut line).map_err(|err| err.to_string())?;
                if nread == 0 {
                    break 'session;
                }

                let input = line.trim();
                let hold = if input == "all" {
                    Ok(hold_all.clone())
                } else {
                    input.parse::<Hold>()
                };

                let outcome = hold.and_then(|hold| {
                    game.roll(&hold, &mut rng).map_err(|err| err.to_string())
                });
                match outcome {
                    Ok(outcome) => {
                        println!("dice: {}  score: {}", outcome.dice, game.score())
                    }
                    Err(msg) => println!("{msg}"),
                }
            }

            println!("game over! final score: {}", game.score());
            print!("play again? [y/N] ");
            io::stdout().flush().map_err(|err| err.to_string())?;

            line.clear();
            let nread = stdin.read_line(&mut line).map_err(|err| err.to_string())?;
            if nread == 0 || !line.trim().eq_ignore_ascii_case("y") {
                break 'session;
            }
        }

        Ok("goodbye!".to_string())
    }
}

//////////////////
// ScoreCommand //
//////////////////

#[derive(Clone, Debug)]
pub struct ScoreCommand {
    rules: DiceRules,
    dice: DiceState,
}

impl ScoreCommand {
    fn try_from_str_args(rules: DiceRules, dice: &str) -> Result<Self, String> {
        Ok(Self {
            rules,
            dice: parse_req("dice", dice)?,
        })
    }
}

impl Command for ScoreCommand {
    const USAGE: &'static str = "\
flipdice score - the terminal score of a dice outcome

USAGE:
    flipdice score [option ...] <dice>

EXAMPLES:
    flipdice score [3,3,5]
    flipdice score -d 4 [2,2,6,6]

OPTIONS:
    · --dice / -d n (default: 3)
      The number of dice rolled each turn.

    · --sides / -s n (default: 6)
      The number of sides on each die.

    · --values [v1,v2,..] (default: [1,2,..,sides])
      The face labels, one per side, in face order. Distinct integers.

    · --bias [p1,p2,..] (default: uniform)
      The per-face probabilities, aligned with --values. Must sum to 1.

    · --penalty / -p n (default: 1)
      The score deducted per reroll.
";

    type Output = String;

    fn try_from_cli_args(mut args: Args) -> Result<Self, String> {
        args.maybe_help(Self::USAGE);

        let rules = rules_from_args(&mut args)?;
        let dice = args.free_value()?;
        args.expect_finished()?;

        Self::try_from_str_args(rules, &dice)
    }

    fn run(self) -> Result<Self::Output, String> {
        if self.dice.len() != self.rules.ndice() {
            return Err(format!(
                "expected {} dice, got {} in {}",
                self.rules.ndice(),
                self.dice.len(),
                self.dice,
            ));
        }

        let score = self
            .rules
            .score(self.dice.values())
            .map_err(|err| err.to_string())?;
        Ok(format!("score({}) = {}", self.dice, score))
    }
}

////////////////////////
// TransitionsCommand //
////////////////////////

#[derive(Clone, Debug)]
pub struct TransitionsCommand {
    rules: DiceRules,
    hold: Hold,
    state: DiceState,
    merged: bool,
}

impl TransitionsCommand {
    fn try_from_str_args(
        rules: DiceRules,
        hold: &str,
        state: &str,
        merged: bool,
    ) -> Result<Self, String> {
        Ok(Self {
            rules,
            hold: parse_req("hold", hold)?,
            state: parse_req("state", state)?,
            merged,
        })
    }
}

impl Command for TransitionsCommand {
    const USAGE: &'static str = "\
flipdice transitions - the exact transition distribution of one (hold, state)

USAGE:
    flipdice transitions [option ...] <hold> <state>

EXAMPLES:
    # reroll everything from (1,1,1)
    flipdice transitions [] [1,1,1]

    # hold the last two dice
    flipdice transitions [1,2] [1,4,6]

OPTIONS:
    · --merged
      Merge outcomes naming the same canonical state.

    · --dice / -d n (default: 3)
      The number of dice rolled each turn.

    · --sides / -s n (default: 6)
      The number of sides on each die.

    · --values [v1,v2,..] (default: [1,2,..,sides])
      The face labels, one per side, in face order. Distinct integers.

    · --bias [p1,p2,..] (default: uniform)
      The per-face probabilities, aligned with --values. Must sum to 1.

    · --penalty / -p n (default: 1)
      The score deducted per reroll.
";

    type Output = TransitionsCommandOutput;

    fn try_from_cli_args(mut args: Args) -> Result<Self, String> {
        args.maybe_help(Self::USAGE);

        let merged = args.contains("--merged");
        let rules = rules_from_args(&mut args)?;
        let hold = args.free_value()?;
        let state = args.free_value()?;
        args.expect_finished()?;

        Self::try_from_str_args(rules, &hold, &state, merged)
    }

    fn run(self) -> Result<Self::Output, String> {
        let mdp = DiceMdp::new(self.rules);

        let start_time = Instant::now();
        let trans = if self.merged {
            mdp.next_states_merged(&self.hold, &self.state)
        } else {
            mdp.next_states(&self.hold, &self.state)
        }
        .map_err(|err| err.to_string())?;
        let query_duration = start_time.elapsed();

        let mut table = Table::new("{:>}  {:<}").with_row(row!("next state", "probability"));
        for (outcome, p) in trans.iter() {
            match outcome {
                Some(state) => table.add_row(row!(state, p)),
                None => table.add_row(row!("(game over)", p)),
            };
        }

        let mut metrics = Metrics::new();
        metrics.push("query duration", format!("{:.2?}", query_duration));
        metrics.push("outcomes", trans.len().to_string());
        metrics.push("total mass", trans.total_mass().to_string());
        metrics.push("reward", trans.reward.to_string());
        metrics.push("terminal", trans.terminal.to_string());

        Ok(TransitionsCommandOutput { table, metrics })
    }
}

pub struct TransitionsCommandOutput {
    table: Table,
    metrics: Metrics,
}

impl fmt::Display for TransitionsCommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n{}", self.table, self.metrics.to_table())
    }
}

///////////////////
// SpacesCommand //
///////////////////

#[derive(Clone, Debug)]
pub struct SpacesCommand {
    rules: DiceRules,
}

impl Command for SpacesCommand {
    const USAGE: &'static str = "\
flipdice spaces - enumerate the action and state spaces

USAGE:
    flipdice spaces [option ...]

EXAMPLES:
    flipdice spaces
    flipdice spaces -d 2 -s 4

OPTIONS:
    · --dice / -d n (default: 3)
      The number of dice rolled each turn.

    · --sides / -s n (default: 6)
      The number of sides on each die.

    · --values [v1,v2,..] (default: [1,2,..,sides])
      The face labels, one per side, in face order. Distinct integers.

    · --bias [p1,p2,..] (default: uniform)
      The per-face probabilities, aligned with --values. Must sum to 1.

    · --penalty / -p n (default: 1)
      The score deducted per reroll.
";

    type Output = SpacesCommandOutput;

    fn try_from_cli_args(mut args: Args) -> Result<Self, String> {
        args.maybe_help(Self::USAGE);

        let rules = rules_from_args(&mut args)?;
        args.expect_finished()?;

        Ok(Self { rules })
    }

    fn run(self) -> Result<Self::Output, String> {
        let mdp = DiceMdp::new(self.rules);

        let mut actions = Table::new("{:>}  {:<}").with_row(row!("#", "hold"));
        for (idx, action) in mdp.actions().iter().enumerate() {
            actions.add_row(row!(idx, action));
        }

        let mut states = Table::new("{:>}  {:<}  {:>}").with_row(row!("#", "state", "final score"));
        for (idx, state) in mdp.states().iter().enumerate() {
            // every enumerated state is in the table
            let final_score = mdp.final_score(state).map_err(|err| err.to_string())?;
            states.add_row(row!(idx, state, final_score));
        }

        let mut metrics = Metrics::new();
        metrics.push("actions", mdp.actions().len().to_string());
        metrics.push("states", mdp.states().len().to_string());

        Ok(SpacesCommandOutput {
            actions,
            states,
            metrics,
        })
    }
}

pub struct SpacesCommandOutput {
    actions: Table,
    states: Table,
    metrics: Metrics,
}

impl fmt::Display for SpacesCommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n{}\n{}\n{}",
            self.actions,
            self.states,
            self.metrics.to_table()
        )
    }
}

/////////////////////
// SimulateCommand //
/////////////////////

#[derive(Clone, Debug)]
pub struct SimulateCommand {
    rules: DiceRules,
    rounds: usize,
    seed: u64,
}

impl Command for SimulateCommand {
    const USAGE: &'static str = "\
flipdice simulate - sanity check the live dice against the exact model

USAGE:
    flipdice simulate [option ...]

Rolls many opening hands and G-tests the empirical state distribution
against the model's exact transition probabilities.

EXAMPLES:
    flipdice simulate
    flipdice simulate -n 100000 --bias [0.3,0.14,0.14,0.14,0.14,0.14]

OPTIONS:
    · --rounds / -n n (default: 10000)
      The number of opening hands to roll.

    · --seed n (default: wall clock)
      The RNG seed, for reproducible runs.

    · --dice / -d n (default: 3)
      The number of dice rolled each turn.

    · --sides / -s n (default: 6)
      The number of sides on each die.

    · --values [v1,v2,..] (default: [1,2,..,sides])
      The face labels, one per side, in face order. Distinct integers.

    · --bias [p1,p2,..] (default: uniform)
      The per-face probabilities, aligned with --values. Must sum to 1.

    · --penalty / -p n (default: 1)
      The score deducted per reroll.
";

    type Output = Metrics;

    fn try_from_cli_args(mut args: Args) -> Result<Self, String> {
        args.maybe_help(Self::USAGE);

        let rounds = parse_opt("rounds", args.opt_value(["-n", "--rounds"])?.as_deref())?
            .unwrap_or(10_000);
        let rules = rules_from_args(&mut args)?;
        let seed = seed_from_args(&mut args)?;
        args.expect_finished()?;

        Ok(Self {
            rules,
            rounds,
            seed,
        })
    }

    fn run(self) -> Result<Self::Output, String> {
        let mdp = DiceMdp::new(self.rules);
        let mut rng = Xoroshiro64Star::seed_from_u64(self.seed);

        // exact opening-hand distribution: reroll everything, any origin
        let trans = mdp
            .next_states_merged(&Hold::empty(), &mdp.states()[0])
            .map_err(|err| err.to_string())?;

        let mut p = Array1::zeros(mdp.states().len());
        for (outcome, p_outcome) in trans.iter() {
            let outcome = outcome.ok_or_else(|| "unexpected terminal outcome".to_string())?;
            let state_idx = mdp
                .state_idx(outcome)
                .ok_or_else(|| format!("model produced unknown state: {outcome}"))?;
            p[state_idx] = p_outcome;
        }

        let start_time = Instant::now();
        let mut counts = vec![0_usize; mdp.states().len()];
        let mut game = mdp.new_game(&mut rng);
        for _ in 0..self.rounds {
            let state = game.reset(&mut rng);
            let state_idx = mdp
                .state_idx(&state)
                .ok_or_else(|| format!("live game produced unknown state: {state}"))?;
            counts[state_idx] += 1;
        }
        let sample_duration = start_time.elapsed();

        let p_hat = Array1::from_iter(
            counts
                .iter()
                .map(|&count| (count as f64) / (self.rounds as f64)),
        );

        let pvalue = stats::multinomial_test(self.rounds, p.view(), p_hat.view());

        let mut metrics = Metrics::new();
        metrics.push("sample duration", format!("{:.2?}", sample_duration));
        metrics.push("rounds", self.rounds.to_string());
        metrics.push("states", mdp.states().len().to_string());
        metrics.push("G-test p-value", format!("{pvalue:0.4}"));
        metrics.push(
            "verdict",
            if pvalue > 0.01 {
                "samples match the model"
            } else {
                "samples DO NOT match the model"
            },
        );

        Ok(metrics)
    }
}

/////////////////
// BaseCommand //
/////////////////

pub enum BaseCommand {
    Play(PlayCommand),
    Score(ScoreCommand),
    Transitions(TransitionsCommand),
    Spaces(SpacesCommand),
    Simulate(SimulateCommand),
}

impl Command for BaseCommand {
    const USAGE: &'static str = "\
flipdice - an exact MDP model of the duplicate-flip dice game

USAGE:
    flipdice [option ...] <subcommand>

SUBCOMMANDS:
    · flipdice play - play the dice game interactively
    · flipdice score - the terminal score of a dice outcome
    · flipdice transitions - the exact transition distribution of one (hold, state)
    · flipdice spaces - enumerate the action and state spaces
    · flipdice simulate - sanity check the live dice against the exact model
";

    type Output = String;

    fn try_from_cli_args(mut args: Args) -> Result<Self, String> {
        let maybe_subcommand = args.subcommand()?;

        match maybe_subcommand.as_deref() {
            Some("play") => Ok(Self::Play(PlayCommand::try_from_cli_args(args)?)),
            Some("score") => Ok(Self::Score(ScoreCommand::try_from_cli_args(args)?)),
            Some("transitions") => Ok(Self::Transitions(TransitionsCommand::try_from_cli_args(
                args,
            )?)),
            Some("spaces") => Ok(Self::Spaces(SpacesCommand::try_from_cli_args(args)?)),
            Some("simulate") => Ok(Self::Simulate(SimulateCommand::try_from_cli_args(args)?)),
            Some(command) => Err(format!("'{}' is not a recognized command", command)),
            None => {
                args.maybe_help(Self::USAGE);
                Err("no subcommand specified".to_string())
            }
        }
    }

    fn run(self) -> Result<String, String> {
        match self {
            Self::Play(cmd) => cmd.run().map(|out| out.to_string()),
            Self::Score(cmd) => cmd.run().map(|out| out.to_string()),
            Self::Transitions(cmd) => cmd.run().map(|out| out.to_string()),
            Self::Spaces(cmd) => cmd.run().map(|out| out.to_string()),
            Self::Simulate(cmd) => cmd.run().map(|out| out.to_string()),
        }
    }
}

///////////
// Tests //
///////////

#[cfg(test)]
mod test {
    use super::*;

    fn args_from(strs: &[&str]) -> Args {
        let args = strs
            .iter()
            .map(|s| s.to_string().into())
            .collect::<Vec<std::ffi::OsString>>();
        Args::new(pico_args::Arguments::from_vec(args))
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(vec![1, 2, 3], parse_list::<Face>("v", "[1,2,3]").unwrap());
        assert_eq!(vec![3, 1], parse_list::<Face>("v", "3 1").unwrap());
        assert!(parse_list::<Face>("v", "[1,x]").is_err());
        assert!(parse_list::<Face>("v", "").unwrap().is_empty());
    }

    #[test]
    fn test_rules_from_args() {
        let mut args = args_from(&[]);
        let rules = rules_from_args(&mut args).unwrap();
        assert_eq!(3, rules.ndice());
        assert_eq!(6, rules.nsides());
        assert_eq!(1, rules.penalty());

        let mut args = args_from(&[
            "-d",
            "2",
            "-s",
            "3",
            "--values",
            "[10,20,30]",
            "--bias",
            "[0.5,0.3,0.2]",
            "-p",
            "0",
        ]);
        let rules = rules_from_args(&mut args).unwrap();
        assert_eq!(2, rules.ndice());
        assert_eq!(&[10, 20, 30], rules.values());
        assert_eq!(0, rules.penalty());

        // mismatched --values length is rejected
        let mut args = args_from(&["--values", "[1,2]"]);
        assert!(rules_from_args(&mut args).is_err());
    }

    #[test]
    fn test_score_command() {
        let cmd =
            ScoreCommand::try_from_str_args(DiceRules::standard(), "[3,3,5]").unwrap();
        assert_eq!("score([3,3,5]) = 13", cmd.run().unwrap());

        // wrong dice count gets an arity-specific message, not a bare
        // state-space rejection
        let cmd =
            ScoreCommand::try_from_str_args(DiceRules::standard(), "[1,2,3,4]").unwrap();
        let err = cmd.run().unwrap_err();
        assert!(err.contains("expected 3 dice, got 4"));
    }

    #[test]
    fn test_transitions_command() {
        let cmd = TransitionsCommand::try_from_str_args(
            DiceRules::standard(),
            "[0,1,2]",
            "[2,4,6]",
            false,
        )
        .unwrap();
        let out = cmd.run().unwrap();
        let rendered = out.to_string();
        assert!(rendered.contains("(game over)"));
        assert!(rendered.contains("reward"));
    }

    #[test]
    fn test_simulate_command() {
        let cmd = SimulateCommand {
            rules: DiceRules::standard(),
            rounds: 20_000,
            seed: 0x5eed,
        };
        let metrics = cmd.run().unwrap();
        assert!(metrics.to_table().to_string().contains("p-value"));
        assert!(metrics
            .0
            .iter()
            .any(|(label, value)| label == "verdict" && value == "samples match the model"));
    }
}
