use lib::input::IStr;

use super::{run, Simulation};
use crate::command::{Command, Direction};
use crate::location::Location;

const SMALL: &[u8] = b"R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n";
const SHORTENED: &[u8] = b"R 4\nU 3\nL 1\nD 1\nR 4\nD 1\nL 5\nR 2\n";
const LARGE: &[u8] = b"R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n";

fn commands(commands: &[(Direction, u32)]) -> Vec<Command> {
    commands
        .iter()
        .map(|&(direction, count)| Command::new(direction, count).unwrap())
        .collect()
}

#[test]
fn test_small_example() {
    assert_eq!(run(IStr::from_static(SMALL)).unwrap(), (13, 1));
}

#[test]
fn test_shortened_example() {
    assert_eq!(run(IStr::from_static(SHORTENED)).unwrap(), (10, 1));
}

#[test]
fn test_large_example() {
    let (_, part2) = run(IStr::from_static(LARGE)).unwrap();
    assert_eq!(part2, 36);
}

#[test]
fn test_apply_commands() {
    use Direction::*;

    let mut simulation = Simulation::new();
    simulation.extend(commands(&[
        (Right, 4),
        (Up, 4),
        (Left, 3),
        (Down, 1),
        (Right, 4),
        (Down, 1),
        (Left, 5),
        (Right, 2),
    ]));

    assert_eq!(simulation.counts(), (13, 1));
    assert_eq!(simulation.short().head(), Location::new(2, 2));
    assert_eq!(simulation.short().tail(), Location::new(2, 1));
    assert_eq!(simulation.long().tail(), Location::ORIGIN);
}

#[test]
fn test_deterministic() {
    let first = run(IStr::from_static(LARGE)).unwrap();
    let second = run(IStr::from_static(LARGE)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_input() {
    assert_eq!(run(IStr::from_static(b"")).unwrap(), (1, 1));
    assert_eq!(run(IStr::from_static(b"\n\n  \n")).unwrap(), (1, 1));
}

#[test]
fn test_trailing_blank_lines() {
    let input = b"R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n\n\n";
    assert_eq!(run(IStr::from_static(input)).unwrap(), (13, 1));
}

#[test]
fn test_malformed_input_rejected() {
    for input in [
        &b"R 4\nQ 3\n"[..],
        b"R 4\nU\n",
        b"R 4\nU three\n",
        b"R 4\nU 0\n",
        b"R 4\nU 3 3\n",
        b"R 4\n\nU 3\n",
    ] {
        assert!(
            run(IStr::from_static(input)).is_err(),
            "accepted {:?}",
            String::from_utf8_lossy(input)
        );
    }
}
