//! Utilities for measuring performance.

use std::time::{Duration, Instant};

use log::Level;

/// Where a `Timer` sends its report when dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerSink {
    Stdout,
    /// Through the `log` facade, with target `starks::perf`.
    Log(Level),
    Silent,
}
impl Default for TimerSink {
    fn default() -> Self { TimerSink::Stdout }
}

/// Formats a report line, e.g. `(squared_ints  1.5000 s)`.
pub fn format_report(name: &str, elapsed: Duration) -> String {
    format!("({:12.12} {:7.4} s)", name, elapsed.as_secs_f64())
}

/**
 * Reports how long it lived when dropped.
 *
 * # Usage
 *
 * ```
 * use starks::perf::{timer, TimerSink};
 *
 * {
 *     let _t = timer("squared_ints").with_sink(TimerSink::Silent);
 *     let _: Vec<u64> = (0..10000u64).map(|i| i * i).collect();
 * }
 * ```
 * */
#[derive(Debug)]
pub struct Timer {
    name: String,
    start: Instant,
    sink: TimerSink,
}
impl Timer {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Timer {
            name: name.into(),
            start: Instant::now(),
            sink: TimerSink::default(),
        }
    }

    pub fn with_sink(mut self, sink: TimerSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The line that will be reported if the timer were dropped now.
    pub fn report(&self) -> String {
        format_report(&self.name, self.elapsed())
    }
}
impl Default for Timer {
    fn default() -> Self {
        Timer::new("block")
    }
}
impl Drop for Timer {
    fn drop(&mut self) {
        match self.sink {
            TimerSink::Stdout => println!("{}", self.report()),
            TimerSink::Log(level) => log!(target: "starks::perf", level, "{}", self.report()),
            TimerSink::Silent => (),
        }
    }
}

/// Starts a `Timer` that prints to stdout.
pub fn timer<S: Into<String>>(name: S) -> Timer {
    Timer::new(name)
}

/// Runs `f` under a `Timer` named `name` that prints to stdout.
pub fn timed<T, F: FnOnce() -> T>(name: &str, f: F) -> T {
    timed_with(name, TimerSink::Stdout, f)
}

/// Runs `f` under a `Timer` reporting to `sink`.
pub fn timed_with<T, F: FnOnce() -> T>(name: &str, sink: TimerSink, f: F) -> T {
    let _timer = Timer::new(name).with_sink(sink);
    f()
}
