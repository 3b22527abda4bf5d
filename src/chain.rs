use crate::location::{Location, Move};
use crate::location_set::LocationSet;

#[cfg(test)]
mod tests;

/// A rope of `N` knots, where the knot at index 0 is the head and the last
/// knot is the tail.
///
/// After every [`Chain::step`] each knot is within one cell of the knot ahead
/// of it, diagonals included.
#[derive(Debug, Clone)]
pub struct Chain<const N: usize> {
    knots: [Location; N],
    visited: LocationSet,
}

impl<const N: usize> Chain<N> {
    const NON_EMPTY: () = assert!(N > 0, "a chain needs at least one knot");

    /// Construct a chain with every knot at the origin, which also counts as
    /// visited by the tail.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        let mut visited = LocationSet::new();
        visited.add(Location::ORIGIN);

        Self {
            knots: [Location::ORIGIN; N],
            visited,
        }
    }

    /// Move the head one cell and let the rest of the chain catch up.
    pub fn step(&mut self, m: Move) {
        debug_assert!(m.is_unit(), "not a unit move: {m:?}");

        self.knots[0] = self.knots[0].translate(m);

        for n in 1..N {
            let Some(next) = catch_up(self.knots[n - 1], self.knots[n]) else {
                // NB: nothing behind a knot which stays put can move.
                break;
            };

            self.knots[n] = next;
        }

        self.visited.add(self.tail());
    }

    /// Location of the head.
    #[inline]
    pub fn head(&self) -> Location {
        self.knots[0]
    }

    /// Location of the tail.
    #[inline]
    pub fn tail(&self) -> Location {
        self.knots[N - 1]
    }

    /// Every knot in the chain, from head to tail.
    #[inline]
    pub fn knots(&self) -> &[Location; N] {
        &self.knots
    }

    /// Every cell the tail has visited.
    #[inline]
    pub fn visited(&self) -> &LocationSet {
        &self.visited
    }
}

impl<const N: usize> Default for Chain<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate where `follower` moves to stay adjacent to `leader`, or `None`
/// if it's already adjacent.
///
/// A follower which has fallen behind steps one cell towards the leader along
/// each axis where they differ, which is a diagonal step unless they share a
/// row or column.
#[inline]
pub fn catch_up(leader: Location, follower: Location) -> Option<Location> {
    let x = leader.col - follower.col;
    let y = leader.row - follower.row;

    if x.abs() < 2 && y.abs() < 2 {
        return None;
    }

    Some(follower.translate(Move::new(x.signum(), y.signum())))
}
