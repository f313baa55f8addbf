//! The five steps of a single game.
//!
//! Setup and selection draw from the caller's generator; the host draws only
//! when it has a real choice; decision and verdict are deterministic.

use crate::door::{DoorContent, DoorPosition, GameAssignment, Outcome, Strategy, DOOR_COUNT};
use rand::seq::SliceRandom;
use rand::Rng;

/// Hides the car behind a uniformly random door.
///
/// Shuffles the multiset `{goat, goat, car}`, so each of the three distinct
/// layouts comes up with probability 1/3.
pub fn create_game<R: Rng + ?Sized>(rng: &mut R) -> GameAssignment {
    let mut doors = [DoorContent::Goat, DoorContent::Goat, DoorContent::Car];
    doors.shuffle(rng);
    GameAssignment::with_car_at(car_slot(&doors))
}

fn car_slot(doors: &[DoorContent; DOOR_COUNT]) -> DoorPosition {
    let index = doors
        .iter()
        .position(|&d| d == DoorContent::Car)
        .unwrap_or_else(|| unreachable!("shuffle preserves the car"));
    DoorPosition::from_index(index)
}

/// Picks the contestant's first door uniformly at random.
pub fn select_door<R: Rng + ?Sized>(rng: &mut R) -> DoorPosition {
    DoorPosition::from_index(rng.gen_range(0..DOOR_COUNT))
}

/// Returns the door the host opens: a goat, and never the contestant's pick.
///
/// When the pick hides the car both other doors qualify and the host flips a
/// fair coin. When the pick hides a goat the car blocks one door, leaving
/// exactly one candidate and no draw from `rng`.
pub fn open_goat_door<R: Rng + ?Sized>(
    game: &GameAssignment,
    pick: DoorPosition,
    rng: &mut R,
) -> DoorPosition {
    let mut candidates = DoorPosition::ALL
        .into_iter()
        .filter(|&door| door != pick && game.content_at(door) == DoorContent::Goat);

    match (candidates.next(), candidates.next()) {
        (Some(first), Some(second)) => {
            if rng.gen_bool(0.5) {
                first
            } else {
                second
            }
        }
        (Some(only), None) => only,
        _ => unreachable!("a one-car game always leaves the host a goat door"),
    }
}

/// Returns the contestant's final door.
///
/// `Stay` keeps `pick`. `Switch` takes the door that is neither `opened` nor
/// `pick`.
///
/// # Panics
/// On `Switch` when `opened == pick`; the host never opens the picked door.
pub fn change_door(strategy: Strategy, opened: DoorPosition, pick: DoorPosition) -> DoorPosition {
    match strategy {
        Strategy::Stay => pick,
        Strategy::Switch => DoorPosition::remaining(opened, pick),
    }
}

/// Boolean form of [`change_door`]: `stay == true` keeps the pick.
pub fn change_door_flag(stay: bool, opened: DoorPosition, pick: DoorPosition) -> DoorPosition {
    change_door(Strategy::from_stay_flag(stay), opened, pick)
}

/// Wins iff `final_pick` hides the car.
pub fn determine_winner(final_pick: DoorPosition, game: &GameAssignment) -> Outcome {
    match game.content_at(final_pick) {
        DoorContent::Car => Outcome::Win,
        DoorContent::Goat => Outcome::Lose,
    }
}
