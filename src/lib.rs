//! Simulation of a rope made out of knots being dragged around an unbounded
//! grid, tracking every cell visited by the last knot.

mod chain;
mod command;
mod location;
mod location_set;
mod simulation;

pub use self::chain::{catch_up, Chain};
pub use self::command::{Command, CommandError, Direction};
pub use self::location::{Location, Move};
pub use self::location_set::LocationSet;
pub use self::simulation::{run, Simulation};
