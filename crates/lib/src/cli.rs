//! CLI helpers.

mod bencher;
mod error;
mod output;
mod output_eq;
mod stderr_logger;

use core::fmt;
use core::time::Duration;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

pub use self::bencher::Bencher;
pub use self::error::{error_context, LineCol};
pub(self) use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

use crate::input::{FromInput, IStr};

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Input file used when `--input` is not specified.
const DEFAULT_INPUT: &str = "input.txt";

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
    /// Path to the input.
    input: Option<PathBuf>,
    /// Expected answer.
    expect: Option<&'static str>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args_os().skip(1))
    }

    fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<std::ffi::OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter().map(Into::into);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    let warmup = it.next().context("missing argument to `--warmup`")?;
                    let warmup = warmup
                        .to_str()
                        .context("missing string argument to `--warmup`")?;
                    opts.warmup = Some(warmup.parse().context("bad argument to `--warmup`")?);
                }
                "--time-limit" => {
                    let time_limit = it.next().context("missing argument to `--time-limit`")?;
                    let time_limit = time_limit
                        .to_str()
                        .context("missing string argument to `--time-limit`")?;
                    opts.time_limit = Some(
                        time_limit
                            .parse()
                            .context("bad argument to `--time-limit`")?,
                    );
                }
                "--count" => {
                    let count = it.next().context("missing argument to `--count`")?;
                    let count = count
                        .to_str()
                        .context("missing string argument to `--count`")?;
                    opts.count = Some(count.parse().context("bad argument to `--count`")?);
                }
                "--input" => {
                    let input = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--expect" => {
                    let expect = it.next().context("missing argument to `--expect`")?;
                    let expect = expect
                        .into_string()
                        .map_err(|_| anyhow!("missing string argument to `--expect`"))?;
                    opts.expect = Some(Box::leak(expect.into_boxed_str()));
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    /// Install the log backend unless output is in JSON.
    pub fn init_logging(&self) -> Result<()> {
        if self.json {
            return Ok(());
        }

        log::set_max_level(if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });

        log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;
        Ok(())
    }

    /// Path to the input to process.
    pub fn input(&self) -> &Path {
        self.input.as_deref().unwrap_or(Path::new(DEFAULT_INPUT))
    }

    /// Parse the expected answer, if one was provided.
    pub fn expect<T>(&self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(expect) = self.expect else {
            return Ok(None);
        };

        let mut input = IStr::from_static(expect.as_bytes());
        let value = input.next::<T>().context("bad argument to `--expect`")?;
        input.finish().context("bad argument to `--expect`")?;
        Ok(Some(value))
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Write the answer for both parts.
pub fn answer<A, B>(opts: &Opts, part1: A, part2: B) -> Result<()>
where
    A: fmt::Display + Serialize,
    B: fmt::Display + Serialize,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());
    o.answer(part1, part2)?;
    Ok(())
}

#[derive(Default, Debug, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Construct a report out of sorted samples.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();
        let sum = samples.iter().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(
                u64::try_from((sum.as_nanos()) / (count as u128)).unwrap_or_default(),
            )
        };

        Self {
            p50: percentile(samples, 5000),
            p95: percentile(samples, 9500),
            p99: percentile(samples, 9900),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

/// Get the percentile expressed in basis points out of sorted samples.
fn percentile(samples: &[Duration], bps: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples
        .get(last * bps / 10000)
        .copied()
        .unwrap_or_default()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}
