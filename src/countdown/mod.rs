//! The countdown emitter.
//!
//! Writes the transcript from [`script`] to any [`Write`] sink, pausing on a
//! [`Pacer`] after every count line. The binary drives it with standard output
//! and [`ThreadPacer`]; tests substitute an in-memory buffer and a pacer that
//! only records what it was asked to do.

pub mod script;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::CountdownError;
use crate::models::{CountdownState, Stage, COUNTDOWN_START};
use crate::runtime;
use script::Line;

/// Pause after each count line.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Blocking pause between countdown steps.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the calling thread. Scheduler jitter is not corrected for.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

/// Parameters of a run. The binary always uses [`CountdownConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownConfig {
    /// First value counted; the countdown runs down to 1.
    pub start: u32,
    /// Pause after each count line.
    pub interval: Duration,
    /// Text shown after `Python version: `.
    pub version: String,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            start: COUNTDOWN_START,
            interval: DEFAULT_INTERVAL,
            version: runtime::version_string(),
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Lines written, including header and footer.
    pub lines: usize,
    /// Count lines written.
    pub counts: usize,
    pub elapsed: Duration,
}

pub struct CountdownEmitter<W, P> {
    out: W,
    pacer: P,
    config: CountdownConfig,
}

impl CountdownEmitter<io::Stdout, ThreadPacer> {
    /// Emitter writing to standard output with real one second pauses.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), ThreadPacer, CountdownConfig::default())
    }
}

impl<W: Write, P: Pacer> CountdownEmitter<W, P> {
    pub fn new(out: W, pacer: P, config: CountdownConfig) -> Self {
        Self { out, pacer, config }
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    /// Emit the whole transcript, blocking for each pause.
    ///
    /// Every line is flushed as soon as it is written. The first write or
    /// flush failure aborts the run; nothing is retried.
    pub fn run(self) -> Result<RunReport, CountdownError> {
        let Self {
            mut out,
            mut pacer,
            config,
        } = self;

        let started = Instant::now();
        let mut counter = CountdownState::starting_at(config.start);
        let mut stage = Stage::Start;
        let mut lines = 0;
        let mut counts = 0;

        info!(
            start = config.start,
            interval_ms = config.interval.as_millis() as u64,
            "Starting countdown"
        );

        while !stage.is_terminal() {
            stage = stage.next(&mut counter);
            debug!(%stage, "Entering stage");

            match stage {
                Stage::Start | Stage::Terminated => {}
                Stage::Banner => {
                    for line in [Line::Banner, Line::Version(&config.version), Line::Starting] {
                        write_line(&mut out, line)?;
                        lines += 1;
                    }
                }
                Stage::Countdown(value) => {
                    write_line(&mut out, Line::Count(value))?;
                    lines += 1;
                    counts += 1;
                    pacer.pause(config.interval);
                }
                Stage::Closing => {
                    for line in [Line::Done, Line::Colors] {
                        write_line(&mut out, line)?;
                        lines += 1;
                    }
                }
            }
        }

        let report = RunReport {
            lines,
            counts,
            elapsed: started.elapsed(),
        };
        info!(
            lines = report.lines,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Countdown finished"
        );
        Ok(report)
    }
}

fn write_line<W: Write>(out: &mut W, line: Line<'_>) -> Result<(), CountdownError> {
    writeln!(out, "{}", line)
        .and_then(|()| out.flush())
        .map_err(|e| CountdownError::write(line.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingPacer {
        pauses: Vec<Duration>,
    }

    impl Pacer for CountingPacer {
        fn pause(&mut self, duration: Duration) {
            self.pauses.push(duration);
        }
    }

    fn config() -> CountdownConfig {
        CountdownConfig {
            version: "1.0.0 (test)".to_string(),
            ..CountdownConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = CountdownConfig::default();
        assert_eq!(config.start, 5);
        assert_eq!(config.interval, Duration::from_secs(1));
        assert!(!config.version.is_empty());
    }

    #[test]
    fn test_run_writes_transcript() {
        let mut out = Vec::new();
        let mut pacer = CountingPacer::default();

        let report = CountdownEmitter::new(&mut out, &mut pacer, config())
            .run()
            .expect("run failed");

        let text = String::from_utf8(out).expect("not utf-8");
        assert_eq!(
            text,
            "=== WOFL IDE Python Test ===\n\
             Python version: 1.0.0 (test)\n\
             Starting countdown...\n\
             Count: 5\n\
             Count: 4\n\
             Count: 3\n\
             Count: 2\n\
             Count: 1\n\
             Done! Your IDE is working perfectly.\n\
             Output colors should be visible now.\n"
        );
        assert_eq!(report.lines, 10);
        assert_eq!(report.counts, 5);
        assert_eq!(pacer.pauses, vec![Duration::from_secs(1); 5]);
    }

    #[test]
    fn test_zero_start_skips_pauses() {
        let mut out = Vec::new();
        let mut pacer = CountingPacer::default();
        let config = CountdownConfig {
            start: 0,
            ..config()
        };

        let report = CountdownEmitter::new(&mut out, &mut pacer, config)
            .run()
            .expect("run failed");

        assert_eq!(report.lines, 5);
        assert_eq!(report.counts, 0);
        assert!(pacer.pauses.is_empty());
    }
}
