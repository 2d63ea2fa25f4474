use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One grid cell: static terrain (floor/wall/target) combined with its
/// current occupant (none/player/box). Walls never carry an occupant, so
/// these seven variants are the only legal combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Floor,
    Target,
    BoxOnFloor,
    BoxOnTarget,
    PlayerOnFloor,
    PlayerOnTarget,
}

impl Cell {
    pub fn has_box(self) -> bool {
        self == Cell::BoxOnFloor || self == Cell::BoxOnTarget
    }

    pub fn has_player(self) -> bool {
        self == Cell::PlayerOnFloor || self == Cell::PlayerOnTarget
    }

    pub fn is_target(self) -> bool {
        matches!(self, Cell::Target | Cell::BoxOnTarget | Cell::PlayerOnTarget)
    }
}

/// Grid coordinates. `x` runs along columns, `y` along rows; `grid[y][x]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Quit,
}

/// Which character table `parse_level` reads the input with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMode {
    /// `' ' # @ $ . + *`
    Glyph,
    /// ASCII `0`..`6`, same semantics in numeric order.
    Digit,
}

/// The whole simulation state. Built once by the loader, then mutated in
/// place by `step`; `goals` is fixed after load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Vec<Vec<Cell>>,
    pub player: Vec2,
    pub goals: HashSet<Vec2>,
}

/// What a single `step` call did to the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Whether the player (and possibly a box) actually moved.
    pub moved: bool,
    /// Whether every target currently holds a box. Recomputed each call.
    pub solved: bool,
}

/// Why a level failed to load. Loading is all-or-nothing: no `GameState`
/// is produced on any of these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("unrecognized character {glyph:?} at row {row}, column {col}")]
    ParseError { glyph: char, row: usize, col: usize },
    #[error("the level does not include a player")]
    MissingPlayer,
    #[error("the level includes multiple players")]
    MultiplePlayers,
    #[error("the level does not include any goals")]
    NoGoals,
    #[error("the numbers of boxes ({boxes}) and goals ({goals}) do not match")]
    BoxGoalMismatch { boxes: usize, goals: usize },
}
