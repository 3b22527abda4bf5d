use anyhow::Result;
use lib::input::IStr;

use crate::chain::Chain;
use crate::command::Command;

#[cfg(test)]
mod tests;

/// Two ropes dragged by the same commands, one with 2 knots and one with 10.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    short: Chain<2>,
    long: Chain<10>,
}

impl Simulation {
    /// Construct a new simulation with both ropes at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single command to both ropes.
    pub fn apply(&mut self, command: Command) {
        for m in command.moves() {
            self.short.step(m);
            self.long.step(m);
        }
    }

    /// The rope with 2 knots.
    pub fn short(&self) -> &Chain<2> {
        &self.short
    }

    /// The rope with 10 knots.
    pub fn long(&self) -> &Chain<10> {
        &self.long
    }

    /// Number of cells visited by the tail of each rope.
    pub fn counts(&self) -> (usize, usize) {
        (self.short.visited().len(), self.long.visited().len())
    }
}

impl Extend<Command> for Simulation {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Command>,
    {
        for command in iter {
            self.apply(command);
        }
    }
}

/// Run every command in the input, one per line, and return how many cells
/// the tail of the short and the long rope visited.
///
/// Processing stops at the first malformed line.
pub fn run(mut input: IStr) -> Result<(usize, usize)> {
    let mut simulation = Simulation::new();
    let mut n = 0usize;

    while let Some(command) = input.try_line::<Command>()? {
        log::debug!("{command}");
        simulation.apply(command);
        n += 1;
    }

    input.finish()?;

    let (part1, part2) = simulation.counts();
    log::debug!("{n} commands, tails visited {part1} and {part2} cells");
    Ok((part1, part2))
}
