use core::fmt;
use core::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Error, Result};

use crate::cli::{Opts, Output, OutputEq, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default time limit in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn.
    ///
    /// Failures are reported as error messages on the output before being
    /// returned.
    #[inline]
    pub fn iter<T, O, C, E>(&mut self, opts: &Opts, expected: Option<C>, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
        Error: From<E>,
    {
        let stdout = std::io::stdout();
        let mut o = Output::new(stdout.lock(), opts.output_kind());

        if let Err(e) = self.inner_iter(&mut o, opts, expected, iter) {
            o.error(&e)?;
            return Err(e);
        }

        Ok(())
    }

    fn inner_iter<T, O, C, E>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        expected: Option<C>,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
        Error: From<E>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        let mut sample = || -> Result<Duration> {
            let before = Instant::now();
            let value = iter()?;
            let after = Instant::now();

            if let Some(expect) = &expected {
                if !value.output_eq(expect) {
                    bail!("{value:?} (value) != {expect:?} (expected)");
                }
            }

            let _ = black_box(value);
            Ok(after.duration_since(before))
        };

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            while start.elapsed() < warmup {
                sample()?;
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                samples.push(sample()?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                samples.push(sample()?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        samples.sort();

        let report = Report::from_sorted(&samples);
        o.report(&report)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use anyhow::{bail, Result};

    use super::Bencher;
    use crate::cli::Opts;

    #[test]
    fn test_bench_count() {
        let opts = Opts::parse_from(["--bench", "--warmup", "0", "--count", "5", "--json"]).unwrap();
        let calls = Cell::new(0);

        Bencher::new()
            .iter(&opts, Some((3usize, 4usize)), || -> Result<_> {
                calls.set(calls.get() + 1);
                Ok((3usize, 4usize))
            })
            .unwrap();

        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_bench_mismatch_stops() {
        let opts = Opts::parse_from(["--bench", "--warmup", "0", "--count", "5", "--json"]).unwrap();
        let calls = Cell::new(0);

        let result = Bencher::new().iter(&opts, Some((3usize, 4usize)), || -> Result<_> {
            calls.set(calls.get() + 1);
            Ok((3usize, 5usize))
        });

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_bench_failed_run() {
        let opts = Opts::parse_from(["--bench", "--warmup", "0", "--count", "5", "--json"]).unwrap();

        let result = Bencher::new().iter(&opts, None::<(usize, usize)>, || -> Result<(usize, usize)> {
            bail!("unknown direction `Q`")
        });

        let error = result.unwrap_err();
        assert_eq!(error.to_string(), "unknown direction `Q`");
    }
}
