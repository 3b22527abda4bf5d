use lib::cli::{self, Bencher, Mode, Opts, OutputEq};
use lib::prelude::*;

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    opts.init_logging()?;

    let path = opts.input();
    let input = lib::env::read(path)?;
    let expected = opts.expect::<(usize, usize)>()?;

    match opts.mode {
        Mode::Default => {
            let (part1, part2) = match rope::run(input) {
                Ok(value) => value,
                Err(error) => return Err(cli::error_context(path, input, error)),
            };

            if let Some(expected) = expected {
                ensure!(
                    (part1, part2).output_eq(&expected),
                    "{:?} (value) != {expected:?} (expected)",
                    (part1, part2)
                );
            }

            cli::answer(&opts, part1, part2)?;
        }
        Mode::Bench => {
            let mut b = Bencher::new();
            b.iter(&opts, expected, || rope::run(input))?;
        }
    }

    Ok(())
}
