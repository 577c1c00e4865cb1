//! Run control shared by every algorithm engine
//!
//! An engine allows one active run at a time. `run` hands back a lazy
//! [`Run`] that performs work inside `next()` and buffers the step events a
//! unit of work produces. State lives in a single atomic word so a
//! [`CancelHandle`] can be used from a signal handler.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::error::{GraphError, Result};

const STATE_BITS: u64 = 2;
const STATE_MASK: u64 = (1 << STATE_BITS) - 1;

/// Lifecycle of an engine's current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Cancelled,
}

impl RunState {
    fn bits(self) -> u64 {
        match self {
            RunState::Idle => 0,
            RunState::Running => 1,
            RunState::Completed => 2,
            RunState::Cancelled => 3,
        }
    }

    fn from_bits(bits: u64) -> Self {
        match bits & STATE_MASK {
            0 => RunState::Idle,
            1 => RunState::Running,
            2 => RunState::Completed,
            _ => RunState::Cancelled,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

fn pack(generation: u64, state: RunState) -> u64 {
    (generation << STATE_BITS) | state.bits()
}

fn unpack(word: u64) -> (u64, RunState) {
    (word >> STATE_BITS, RunState::from_bits(word))
}

/// Generation counter and state for one engine instance
#[derive(Debug, Clone)]
pub struct RunControl {
    engine: &'static str,
    word: Arc<AtomicU64>,
}

impl RunControl {
    pub fn new(engine: &'static str) -> Self {
        RunControl {
            engine,
            word: Arc::new(AtomicU64::new(pack(0, RunState::Idle))),
        }
    }

    pub fn engine(&self) -> &'static str {
        self.engine
    }

    pub fn state(&self) -> RunState {
        unpack(self.word.load(Ordering::Acquire)).1
    }

    pub fn generation(&self) -> u64 {
        unpack(self.word.load(Ordering::Acquire)).0
    }

    /// Start a new run, returning its generation.
    ///
    /// Fails with `AlreadyRunning` while another run is active.
    pub fn begin(&self) -> Result<u64> {
        let mut current = self.word.load(Ordering::Acquire);
        loop {
            let (generation, state) = unpack(current);
            if state == RunState::Running {
                return Err(GraphError::AlreadyRunning {
                    engine: self.engine,
                });
            }
            let next_generation = generation + 1;
            match self.word.compare_exchange(
                current,
                pack(next_generation, RunState::Running),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    tracing::debug!(engine = self.engine, generation = next_generation, "run started");
                    return Ok(next_generation);
                }
                Err(actual) => current = actual,
            }
        }
    }

    /// Cancel whichever run is active
    pub fn cancel(&self) -> bool {
        let (generation, state) = unpack(self.word.load(Ordering::Acquire));
        state == RunState::Running && self.cancel_generation(generation)
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            control: self.clone(),
            generation: None,
        }
    }

    fn is_running(&self, generation: u64) -> bool {
        self.word.load(Ordering::Acquire) == pack(generation, RunState::Running)
    }

    fn transition(&self, generation: u64, to: RunState) -> bool {
        let moved = self
            .word
            .compare_exchange(
                pack(generation, RunState::Running),
                pack(generation, to),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();
        if moved {
            tracing::debug!(engine = self.engine, generation, state = %to, "run finished");
        }
        moved
    }

    fn cancel_generation(&self, generation: u64) -> bool {
        self.transition(generation, RunState::Cancelled)
    }

    fn complete(&self, generation: u64) -> bool {
        self.transition(generation, RunState::Completed)
    }
}

/// Cloneable, thread-safe handle that cancels a run
#[derive(Debug, Clone)]
pub struct CancelHandle {
    control: RunControl,
    /// `None` targets whichever run is active when `cancel` is called
    generation: Option<u64>,
}

impl CancelHandle {
    /// Returns true when a running run was moved to `Cancelled`
    pub fn cancel(&self) -> bool {
        match self.generation {
            Some(generation) => self.control.cancel_generation(generation),
            None => self.control.cancel(),
        }
    }
}

/// Outcome of one unit of algorithm work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Continue,
    Done,
}

/// Incremental algorithm state driven by a [`Run`]
pub trait Stepper {
    type Step;
    type Output;

    /// Perform one unit of work, pushing any step events it produces
    fn advance(&mut self, steps: &mut VecDeque<Self::Step>) -> Progress;

    /// Final result, available once `advance` has returned `Done`
    fn into_output(self) -> Self::Output;
}

/// Access to an engine's run control
pub trait Engine {
    fn control(&self) -> &RunControl;

    fn state(&self) -> RunState {
        self.control().state()
    }

    /// Cancel the active run, if any
    fn cancel(&self) -> bool {
        self.control().cancel()
    }

    fn cancel_handle(&self) -> CancelHandle {
        self.control().cancel_handle()
    }
}

/// One execution of an engine, yielding step events lazily
pub struct Run<S: Stepper> {
    stepper: Option<S>,
    pending: VecDeque<S::Step>,
    done: bool,
    control: RunControl,
    generation: u64,
}

impl<S: Stepper> Run<S> {
    /// Claim the engine and wrap `stepper` in a run
    pub(crate) fn start(control: &RunControl, stepper: S) -> Result<Self> {
        let generation = control.begin()?;
        Ok(Run {
            stepper: Some(stepper),
            pending: VecDeque::new(),
            done: false,
            control: control.clone(),
            generation,
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle that cancels this run and no later one
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            control: self.control.clone(),
            generation: Some(self.generation),
        }
    }

    pub fn cancel(&self) -> bool {
        self.control.cancel_generation(self.generation)
    }

    /// Drain the remaining steps and return the final result
    pub fn finish(mut self) -> Result<S::Output> {
        while self.next().is_some() {}
        if !self.done {
            return Err(GraphError::Cancelled);
        }
        self.stepper.take().map(Stepper::into_output).ok_or(GraphError::Cancelled)
    }
}

impl<S: Stepper> Iterator for Run<S> {
    type Item = S::Step;

    fn next(&mut self) -> Option<S::Step> {
        loop {
            if self.done && self.pending.is_empty() {
                self.control.complete(self.generation);
                return None;
            }
            if !self.control.is_running(self.generation) {
                if self.stepper.take().is_some() {
                    tracing::debug!(
                        engine = self.control.engine(),
                        generation = self.generation,
                        "discarding cancelled run"
                    );
                }
                self.pending.clear();
                self.done = false;
                return None;
            }
            if let Some(step) = self.pending.pop_front() {
                return Some(step);
            }
            let stepper = self.stepper.as_mut()?;
            if stepper.advance(&mut self.pending) == Progress::Done {
                self.done = true;
            }
        }
    }
}

impl<S: Stepper> Drop for Run<S> {
    fn drop(&mut self) {
        if self.done && self.pending.is_empty() {
            self.control.complete(self.generation);
        } else {
            self.control.cancel_generation(self.generation);
        }
    }
}

impl<S: Stepper> fmt::Debug for Run<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Run")
            .field("engine", &self.control.engine())
            .field("generation", &self.generation)
            .field("pending", &self.pending.len())
            .field("done", &self.done)
            .finish()
    }
}
