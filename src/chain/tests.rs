use super::{catch_up, Chain};
use crate::location::{Location, Move};

const MOVES: [Move; 4] = [Move::UP, Move::DOWN, Move::LEFT, Move::RIGHT];

fn assert_adjacent<const N: usize>(chain: &Chain<N>) {
    for pair in chain.knots().windows(2) {
        assert!(
            pair[0].distance(pair[1]) <= 1,
            "knots too far apart: {:?}",
            chain.knots()
        );
    }
}

/// Tiny deterministic generator so that long walks are reproducible.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn test_new_chain() {
    let chain = Chain::<10>::new();
    assert_eq!(chain.knots(), &[Location::ORIGIN; 10]);
    assert_eq!(chain.visited().len(), 1);
    assert!(chain.visited().contains(&Location::ORIGIN));
}

#[test]
fn test_follower_within_reach_stays() {
    let leader = Location::new(0, 0);

    for row in -1..=1 {
        for col in -1..=1 {
            let follower = Location::new(row, col);
            assert_eq!(catch_up(leader, follower), None);
        }
    }
}

#[test]
fn test_straight_catch_up() {
    assert_eq!(
        catch_up(Location::new(0, 2), Location::new(0, 0)),
        Some(Location::new(0, 1))
    );
    assert_eq!(
        catch_up(Location::new(-2, 0), Location::new(0, 0)),
        Some(Location::new(-1, 0))
    );

    let mut chain = Chain::<2>::new();
    chain.step(Move::RIGHT);
    assert_eq!(chain.tail(), Location::ORIGIN);
    chain.step(Move::RIGHT);
    assert_eq!(chain.tail(), Location::new(0, 1));
    chain.step(Move::RIGHT);
    assert_eq!(chain.tail(), Location::new(0, 2));
}

#[test]
fn test_diagonal_catch_up() {
    let follower = Location::ORIGIN;

    for (row, col) in [
        (2, 1),
        (2, -1),
        (-2, 1),
        (-2, -1),
        (1, 2),
        (-1, 2),
        (1, -2),
        (-1, -2),
    ] {
        let leader = Location::new(row, col);
        let expected = Location::new(row.signum(), col.signum());
        let moved = catch_up(leader, follower).unwrap();
        assert_eq!(moved, expected, "leader at {leader}");
        assert_eq!(leader.distance(moved), 1);
    }

    // Only reachable when the leader itself moved diagonally.
    assert_eq!(
        catch_up(Location::new(2, 2), follower),
        Some(Location::new(1, 1))
    );
}

#[test]
fn test_diagonal_step_in_chain() {
    let mut chain = Chain::<2>::new();
    chain.step(Move::UP);
    chain.step(Move::RIGHT);
    assert_eq!(chain.head(), Location::new(1, 1));
    assert_eq!(chain.tail(), Location::ORIGIN);

    chain.step(Move::UP);
    assert_eq!(chain.head(), Location::new(2, 1));
    assert_eq!(chain.tail(), Location::new(1, 1));
    assert_eq!(chain.visited().len(), 2);
}

#[test]
fn test_single_knot_chain() {
    let mut chain = Chain::<1>::new();
    chain.step(Move::LEFT);
    chain.step(Move::LEFT);
    assert_eq!(chain.tail(), Location::new(0, -2));
    assert_eq!(chain.visited().len(), 3);
}

#[test]
fn test_random_walk_invariants() {
    let mut rng = Rng(0x5eed);
    let mut chain = Chain::<10>::new();
    let mut visited = chain.visited().len();

    for _ in 0..10_000 {
        let before = *chain.knots();
        chain.step(MOVES[(rng.next() % 4) as usize]);

        for (a, b) in before.iter().zip(chain.knots()) {
            assert!((a.row - b.row).abs() <= 1 && (a.col - b.col).abs() <= 1);
        }

        assert_adjacent(&chain);
        assert!(chain.visited().contains(&chain.tail()));
        assert!(chain.visited().len() >= visited);
        visited = chain.visited().len();
    }
}

#[test]
fn test_diagonal_moves_keep_invariant() {
    let diagonals = [
        Move::new(1, 1),
        Move::new(1, -1),
        Move::new(-1, 1),
        Move::new(-1, -1),
    ];

    let mut rng = Rng(7);
    let mut chain = Chain::<6>::new();

    for _ in 0..2_000 {
        let m = if rng.next() % 2 == 0 {
            diagonals[(rng.next() % 4) as usize]
        } else {
            MOVES[(rng.next() % 4) as usize]
        };

        chain.step(m);
        assert_adjacent(&chain);
    }
}
