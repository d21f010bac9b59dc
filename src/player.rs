//! Playback driver for the visualizer
//!
//! [`Player`] is the control state machine between the input source and the
//! step sequences. It is deliberately terminal-free: the UI shell maps key
//! events to [`Command`]s and calls [`Player::tick`] once per frame, which
//! makes the whole driver testable without a terminal.
//!
//! States: `Idle` (no active stepper, redraw at the idle rate) and `Running`
//! (a stepper exists and is resumed once per tick at the current speed).
//! Algorithm, direction and speed changes are accepted only while Idle;
//! reset is always accepted and discards any in-progress stepper.

use crate::config::Config;
use crate::model::{ModelError, SortArray};
use crate::sorts::{Algorithm, Highlights, StepOutcome, Stepper};
use std::time::{Duration, Instant};

/// Discrete input commands produced by the input source. The UI shell maps
/// key presses to these; tests feed them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Discard any run and regenerate a fresh random array
    Reset,

    /// Start the selected algorithm against the current array
    StartSort,

    /// Choose ascending (`true`) or descending order
    SetDirection(bool),

    /// Choose the algorithm for the next run
    SelectAlgorithm(Algorithm),

    SpeedUp,
    SpeedDown,
}

/// Playback driver state machine
pub struct Player {
    config: Config,
    array: SortArray,
    algorithm: Algorithm,
    ascending: bool,
    speed: u32,

    /// Some while Running, None while Idle
    stepper: Option<Box<dyn Stepper>>,

    /// Highlight set from the most recent step, consumed by the renderer
    highlights: Highlights,

    /// Stopwatch for the current (or last finished) run
    run_started: Option<Instant>,
    elapsed: Duration,
}

impl Player {
    /// Build an idle player with a freshly generated array. The config must
    /// already be validated; generation itself can still fail on a
    /// degenerate range and is fatal per the startup error policy.
    pub fn new(config: Config) -> Result<Self, ModelError> {
        let array = SortArray::random(&config)?;
        let speed = config.initial_speed;
        Ok(Player {
            config,
            array,
            algorithm: Algorithm::Bubble,
            ascending: true,
            speed,
            stepper: None,
            highlights: Highlights::default(),
            run_started: None,
            elapsed: Duration::ZERO,
        })
    }

    /// Install an externally supplied array (the reset-with-known-values
    /// path); discards any active run like a reset does.
    pub fn load(&mut self, values: Vec<u32>) -> Result<(), ModelError> {
        self.array.replace(values)?;
        self.stop_run();
        self.elapsed = Duration::ZERO;
        Ok(())
    }

    /// Dispatch one input command. Commands that are invalid in the current
    /// state are silently ignored.
    pub fn apply(&mut self, command: Command) -> Result<(), ModelError> {
        match command {
            Command::Reset => {
                self.array = SortArray::random(&self.config)?;
                self.stop_run();
                self.elapsed = Duration::ZERO;
            }
            Command::StartSort => {
                if self.stepper.is_none() {
                    self.stepper = Some(
                        self.algorithm
                            .stepper(self.array.len(), self.ascending),
                    );
                    self.run_started = Some(Instant::now());
                    self.elapsed = Duration::ZERO;
                }
            }
            Command::SetDirection(ascending) => {
                if self.stepper.is_none() {
                    self.ascending = ascending;
                }
            }
            Command::SelectAlgorithm(algorithm) => {
                if self.stepper.is_none() {
                    self.algorithm = algorithm;
                }
            }
            Command::SpeedUp => {
                if self.stepper.is_none() {
                    self.speed =
                        (self.speed + self.config.speed_step).min(self.config.speed_max);
                }
            }
            Command::SpeedDown => {
                if self.stepper.is_none() {
                    self.speed = self
                        .speed
                        .saturating_sub(self.config.speed_step)
                        .max(self.config.speed_min);
                }
            }
        }
        Ok(())
    }

    /// Advance one frame: resume the active stepper at most once. Returns to
    /// Idle automatically when the sequence reports exhaustion.
    pub fn tick(&mut self) {
        if let Some(stepper) = self.stepper.as_mut() {
            match stepper.step(self.array.values_mut()) {
                StepOutcome::Step(highlights) => {
                    self.highlights = highlights;
                    if let Some(started) = self.run_started {
                        self.elapsed = started.elapsed();
                    }
                }
                StepOutcome::Done => {
                    if let Some(started) = self.run_started {
                        self.elapsed = started.elapsed();
                    }
                    self.stop_run();
                }
            }
        }
    }

    fn stop_run(&mut self) {
        self.stepper = None;
        self.run_started = None;
        self.highlights.clear();
    }

    pub fn is_running(&self) -> bool {
        self.stepper.is_some()
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    /// Elapsed time of the current run, frozen at its final value once the
    /// run completes and zeroed by reset.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
