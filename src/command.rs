use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use lib::input::W;
use thiserror::Error;

use crate::location::Move;


/// Error raised when decoding a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown direction `{0}`, expected one of `U`, `D`, `L` or `R`")]
    UnknownDirection(Box<str>),
    #[error("move count must be positive")]
    ZeroCount,
}

/// Direction the head is dragged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The unit move corresponding to this direction.
    #[inline]
    pub fn unit(self) -> Move {
        match self {
            Direction::Up => Move::UP,
            Direction::Down => Move::DOWN,
            Direction::Left => Move::LEFT,
            Direction::Right => Move::RIGHT,
        }
    }
}

impl FromStr for Direction {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "U" => Direction::Up,
            "D" => Direction::Down,
            "L" => Direction::Left,
            "R" => Direction::Right,
            other => return Err(CommandError::UnknownDirection(other.into())),
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "U",
            Direction::Down => "D",
            Direction::Left => "L",
            Direction::Right => "R",
        };

        f.write_str(s)
    }
}

lib::from_input! {
    |(W(word)): W<&'static str>| -> Direction {
        Ok(word.parse()?)
    }
}

/// Drag the head `count` cells in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    pub count: NonZeroU32,
}

impl Command {
    /// Construct a new command, errors if `count` is zero.
    pub fn new(direction: Direction, count: u32) -> Result<Self, CommandError> {
        let count = NonZeroU32::new(count).ok_or(CommandError::ZeroCount)?;
        Ok(Self { direction, count })
    }

    /// The unit moves this command expands into.
    pub fn moves(self) -> impl Iterator<Item = Move> {
        core::iter::repeat(self.direction.unit()).take(self.count.get() as usize)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.count)
    }
}

lib::from_input! {
    |((direction, count)): (Direction, u32)| -> Command {
        Ok(Command::new(direction, count)?)
    }
}
