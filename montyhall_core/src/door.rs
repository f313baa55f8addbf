//! Doors, their contents, and the labels attached to a finished game.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of doors on stage.
pub const DOOR_COUNT: usize = 3;

// ============================================================================
// DOOR POSITION
// ============================================================================

/// A 1-indexed door slot, always in `1..=3`.
///
/// Out-of-range values are rejected at construction, so every
/// `DoorPosition` in circulation can address a [`GameAssignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DoorPosition(u8);

impl DoorPosition {
    pub const ONE: DoorPosition = DoorPosition(1);
    pub const TWO: DoorPosition = DoorPosition(2);
    pub const THREE: DoorPosition = DoorPosition(3);

    /// All positions in stage order.
    pub const ALL: [DoorPosition; DOOR_COUNT] = [Self::ONE, Self::TWO, Self::THREE];

    /// Creates a position from a door number.
    pub fn new(number: u8) -> Result<Self, GameError> {
        if (1..=DOOR_COUNT as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(GameError::InvalidDoor(number))
        }
    }

    /// Creates a position from a 0-based index.
    ///
    /// # Panics
    /// If `index >= 3`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < DOOR_COUNT, "door index {} out of range", index);
        Self(index as u8 + 1)
    }

    /// Returns the door number (1, 2 or 3).
    pub fn number(self) -> u8 {
        self.0
    }

    /// Returns the 0-based index into a [`GameAssignment`].
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the one position that is neither `a` nor `b`.
    ///
    /// Door numbers sum to 6, so the third door is whatever is left over.
    ///
    /// # Panics
    /// If `a == b`.
    pub fn remaining(a: DoorPosition, b: DoorPosition) -> DoorPosition {
        assert_ne!(a, b, "remaining door is only defined for two distinct doors");
        DoorPosition(6 - a.0 - b.0)
    }
}

impl TryFrom<u8> for DoorPosition {
    type Error = GameError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<DoorPosition> for u8 {
    fn from(door: DoorPosition) -> u8 {
        door.0
    }
}

impl fmt::Display for DoorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// DOOR CONTENT & ASSIGNMENT
// ============================================================================

/// What stands behind a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorContent {
    Car,
    Goat,
}

impl fmt::Display for DoorContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoorContent::Car => write!(f, "car"),
            DoorContent::Goat => write!(f, "goat"),
        }
    }
}

/// The hidden truth of one game: which door holds the car.
///
/// Always exactly one [`DoorContent::Car`] and two goats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[DoorContent; 3]", into = "[DoorContent; 3]")]
pub struct GameAssignment {
    doors: [DoorContent; DOOR_COUNT],
}

impl GameAssignment {
    /// Validates and wraps a door layout.
    pub fn from_contents(doors: [DoorContent; DOOR_COUNT]) -> Result<Self, GameError> {
        let cars = doors.iter().filter(|&&d| d == DoorContent::Car).count();
        if cars != 1 {
            return Err(GameError::MalformedAssignment { cars });
        }
        Ok(Self { doors })
    }

    /// Places the car behind `car` and goats everywhere else.
    pub fn with_car_at(car: DoorPosition) -> Self {
        let mut doors = [DoorContent::Goat; DOOR_COUNT];
        doors[car.index()] = DoorContent::Car;
        Self { doors }
    }

    /// Every valid layout, ordered by car position.
    pub fn all() -> [GameAssignment; DOOR_COUNT] {
        DoorPosition::ALL.map(Self::with_car_at)
    }

    /// Returns what is behind `door`.
    pub fn content_at(&self, door: DoorPosition) -> DoorContent {
        self.doors[door.index()]
    }

    /// Returns the position of the car.
    pub fn car_position(&self) -> DoorPosition {
        DoorPosition::ALL
            .into_iter()
            .find(|&d| self.content_at(d) == DoorContent::Car)
            .unwrap_or_else(|| unreachable!("assignment invariant: exactly one car"))
    }

    /// Returns the raw layout in stage order.
    pub fn contents(&self) -> [DoorContent; DOOR_COUNT] {
        self.doors
    }
}

impl TryFrom<[DoorContent; DOOR_COUNT]> for GameAssignment {
    type Error = GameError;

    fn try_from(doors: [DoorContent; DOOR_COUNT]) -> Result<Self, Self::Error> {
        Self::from_contents(doors)
    }
}

impl From<GameAssignment> for [DoorContent; DOOR_COUNT] {
    fn from(game: GameAssignment) -> Self {
        game.doors
    }
}

// ============================================================================
// STRATEGY & OUTCOME
// ============================================================================

/// The contestant's policy once the host has opened a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Keep the original pick
    Stay,
    /// Take the remaining closed door
    Switch,
}

impl Strategy {
    /// Both strategies, in table order.
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    /// Returns the label used in tables.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Stay => "stay",
            Strategy::Switch => "switch",
        }
    }

    /// Maps a boolean stay/switch selector (`true` = stay).
    pub fn from_stay_flag(stay: bool) -> Self {
        if stay {
            Strategy::Stay
        } else {
            Strategy::Switch
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether the contestant drove home in the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Returns the label used in tables.
    pub fn name(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_position_range() {
        assert!(DoorPosition::new(0).is_err());
        assert_eq!(DoorPosition::new(1), Ok(DoorPosition::ONE));
        assert_eq!(DoorPosition::new(3), Ok(DoorPosition::THREE));
        assert_eq!(DoorPosition::new(4), Err(GameError::InvalidDoor(4)));
    }

    #[test]
    fn test_door_position_index_roundtrip() {
        for (i, door) in DoorPosition::ALL.into_iter().enumerate() {
            assert_eq!(door.index(), i);
            assert_eq!(DoorPosition::from_index(i), door);
        }
    }

    #[test]
    fn test_remaining_door() {
        assert_eq!(DoorPosition::remaining(DoorPosition::ONE, DoorPosition::TWO), DoorPosition::THREE);
        assert_eq!(DoorPosition::remaining(DoorPosition::THREE, DoorPosition::ONE), DoorPosition::TWO);
        assert_eq!(DoorPosition::remaining(DoorPosition::TWO, DoorPosition::THREE), DoorPosition::ONE);
    }

    #[test]
    #[should_panic]
    fn test_remaining_door_same_input_panics() {
        DoorPosition::remaining(DoorPosition::TWO, DoorPosition::TWO);
    }

    #[test]
    fn test_assignment_rejects_wrong_car_count() {
        use crate::door::DoorContent::*;
        assert_eq!(
            GameAssignment::from_contents([Goat, Goat, Goat]),
            Err(GameError::MalformedAssignment { cars: 0 })
        );
        assert_eq!(
            GameAssignment::from_contents([Car, Car, Goat]),
            Err(GameError::MalformedAssignment { cars: 2 })
        );
        assert!(GameAssignment::from_contents([Goat, Car, Goat]).is_ok());
    }

    #[test]
    fn test_car_position() {
        for door in DoorPosition::ALL {
            let game = GameAssignment::with_car_at(door);
            assert_eq!(game.car_position(), door);
            assert_eq!(game.content_at(door), DoorContent::Car);
        }
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(Strategy::Stay.to_string(), "stay");
        assert_eq!(Strategy::Switch.to_string(), "switch");
        assert_eq!(Strategy::from_stay_flag(true), Strategy::Stay);
        assert_eq!(Strategy::from_stay_flag(false), Strategy::Switch);
    }
}
