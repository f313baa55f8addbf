//! One trial: a single game scored under both strategies.

use crate::door::{DoorContent, DoorPosition, GameAssignment, Outcome, Strategy};
use crate::error::GameError;
use crate::game::{change_door, create_game, determine_winner, open_goat_door, select_door};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One row of a result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrialResult {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

impl TrialResult {
    pub fn new(strategy: Strategy, outcome: Outcome) -> Self {
        Self { strategy, outcome }
    }
}

/// Full record of a trial.
///
/// Both strategies are scored against the same assignment, pick and reveal,
/// so the two rows are counterfactuals of one game rather than two games.
/// Deserializing re-scores from the game state; any stored rows are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrialRecord")]
pub struct Trial {
    /// Hidden layout
    pub assignment: GameAssignment,

    /// Contestant's first choice
    pub pick: DoorPosition,

    /// Door the host opened
    pub opened: DoorPosition,

    /// Rows in `Strategy::ALL` order
    results: [TrialResult; 2],
}

impl Trial {
    /// Scores an already-played game under both strategies.
    pub fn score(assignment: GameAssignment, pick: DoorPosition, opened: DoorPosition) -> Self {
        let results = Strategy::ALL.map(|strategy| {
            let final_pick = change_door(strategy, opened, pick);
            TrialResult::new(strategy, determine_winner(final_pick, &assignment))
        });
        Self {
            assignment,
            pick,
            opened,
            results,
        }
    }

    /// The two-row table: stay first, then switch.
    pub fn results(&self) -> [TrialResult; 2] {
        self.results
    }

    /// Outcome recorded for `strategy`.
    pub fn outcome(&self, strategy: Strategy) -> Outcome {
        match strategy {
            Strategy::Stay => self.results[0].outcome,
            Strategy::Switch => self.results[1].outcome,
        }
    }

    /// True when the first pick was the car, i.e. the host had two doors to choose from.
    pub fn host_had_choice(&self) -> bool {
        self.assignment.car_position() == self.pick
    }
}

/// Serialized game state of a [`Trial`], before scoring.
#[derive(Deserialize)]
struct TrialRecord {
    assignment: GameAssignment,
    pick: DoorPosition,
    opened: DoorPosition,
}

impl TryFrom<TrialRecord> for Trial {
    type Error = GameError;

    fn try_from(record: TrialRecord) -> Result<Self, Self::Error> {
        let TrialRecord { assignment, pick, opened } = record;
        if opened == pick || assignment.content_at(opened) != DoorContent::Goat {
            return Err(GameError::InvalidReveal {
                pick: pick.number(),
                opened: opened.number(),
            });
        }
        Ok(Trial::score(assignment, pick, opened))
    }
}

/// Plays one game and returns the full record.
///
/// Draw order from `rng`: layout, pick, then the host's coin (only when the
/// pick is the car).
pub fn simulate_trial<R: Rng + ?Sized>(rng: &mut R) -> Trial {
    let assignment = create_game(rng);
    let pick = select_door(rng);
    let opened = open_goat_door(&assignment, pick, rng);
    Trial::score(assignment, pick, opened)
}

/// Plays one game and returns its two result rows.
pub fn play_game<R: Rng + ?Sized>(rng: &mut R) -> [TrialResult; 2] {
    simulate_trial(rng).results()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_play_game_returns_both_strategies() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let rows = play_game(&mut rng);
        assert_eq!(rows[0].strategy, Strategy::Stay);
        assert_eq!(rows[1].strategy, Strategy::Switch);
    }

    #[test]
    fn test_trial_strategies_share_game_state() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..500 {
            let trial = simulate_trial(&mut rng);
            assert_ne!(trial.opened, trial.pick);
            assert_eq!(trial.assignment.content_at(trial.opened), DoorContent::Goat);
            // Exactly one of the two counterfactuals wins
            assert_ne!(trial.outcome(Strategy::Stay), trial.outcome(Strategy::Switch));
            assert_eq!(trial.outcome(Strategy::Stay).is_win(), trial.host_had_choice());
        }
    }

    #[test]
    fn test_score_known_game() {
        let game = GameAssignment::from_contents([DoorContent::Car, DoorContent::Goat, DoorContent::Goat]).unwrap();
        let trial = Trial::score(game, DoorPosition::ONE, DoorPosition::TWO);
        assert_eq!(
            trial.results(),
            [
                TrialResult::new(Strategy::Stay, Outcome::Win),
                TrialResult::new(Strategy::Switch, Outcome::Lose),
            ]
        );
    }

    #[test]
    fn test_simulate_trial_deterministic() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(123);
        let mut rng2 = ChaCha8Rng::seed_from_u64(123);
        for _ in 0..50 {
            assert_eq!(simulate_trial(&mut rng1), simulate_trial(&mut rng2));
        }
    }

    #[test]
    fn test_deserialize_rescores_rows() {
        let game = GameAssignment::with_car_at(DoorPosition::TWO);
        let trial = Trial::score(game, DoorPosition::ONE, DoorPosition::THREE);

        let mut value = serde_json::to_value(trial).unwrap();
        // Claim stay won, which contradicts the layout
        value["results"][0]["outcome"] = serde_json::json!("win");
        value["results"][1]["outcome"] = serde_json::json!("lose");

        let restored: Trial = serde_json::from_value(value).unwrap();
        assert_eq!(restored, trial);
        assert_eq!(restored.outcome(Strategy::Switch), Outcome::Win);
    }

    #[test]
    fn test_deserialize_rejects_impossible_reveal() {
        let opened_pick = serde_json::json!({
            "assignment": ["goat", "car", "goat"],
            "pick": 1,
            "opened": 1,
        });
        assert!(serde_json::from_value::<Trial>(opened_pick).is_err());

        let opened_car = serde_json::json!({
            "assignment": ["goat", "car", "goat"],
            "pick": 1,
            "opened": 2,
        });
        assert!(serde_json::from_value::<Trial>(opened_car).is_err());
    }
}
