//! Resumable step sequences for the sorting algorithms
//!
//! Each algorithm is an explicit state machine implementing [`Stepper`]: the
//! loop counters that an ordinary implementation would keep on the stack live
//! in struct fields instead, so the driver can resume the computation one
//! externally visible unit of work at a time. A resumption performs at most
//! one comparison-and-swap (or one merge placement), reports which indices to
//! recolor, and suspends. That suspension boundary is the animation frame
//! boundary: the driver resumes exactly once per tick while a sort is active.
//!
//! Discarding a stepper mid-run is always safe; it holds no resources beyond
//! its own counters. Resuming an exhausted stepper keeps reporting
//! [`StepOutcome::Done`] without touching the array.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod selection;

use rustc_hash::FxHashMap;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use selection::SelectionSort;

/// Semantic role of a highlighted bar for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The element just written into place (green)
    Placed,

    /// The element under comparison this step (red)
    Compared,

    /// A tracked candidate, e.g. the running extremum or a committed
    /// merge cursor (blue)
    Candidate,

    /// An element finalized by the merge writeback (green)
    Settled,
}

/// Transient index -> role mapping produced by one step and consumed
/// immediately by the renderer
pub type Highlights = FxHashMap<usize, Role>;

/// Result of resuming a step sequence once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// One unit of work was performed; recolor these bars and redraw
    Step(Highlights),

    /// The sequence is exhausted; the array is fully sorted
    Done,
}

/// A suspendable sorting computation.
///
/// The stepper does not own the array; the driver lends it the buffer for
/// each resumption, so there is exactly one writer at any time.
pub trait Stepper {
    fn step(&mut self, values: &mut [u32]) -> StepOutcome;
}

/// The selectable algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
}

impl Algorithm {
    /// Display name used in the header pane
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Instantiate a fresh step sequence for an array of length `len`.
    /// The direction is captured here and cannot change mid-run.
    pub fn stepper(self, len: usize, ascending: bool) -> Box<dyn Stepper> {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort::new(ascending)),
            Algorithm::Insertion => Box::new(InsertionSort::new(ascending)),
            Algorithm::Selection => Box::new(SelectionSort::new(ascending)),
            Algorithm::Merge => Box::new(MergeSort::new(len, ascending)),
        }
    }
}

/// True when `left` and `right` violate the requested order and must swap.
pub(crate) fn out_of_order(left: u32, right: u32, ascending: bool) -> bool {
    if ascending {
        left > right
    } else {
        left < right
    }
}

/// True when `candidate` beats `best` for the selection-sort extremum.
pub(crate) fn more_extreme(candidate: u32, best: u32, ascending: bool) -> bool {
    if ascending {
        candidate < best
    } else {
        candidate > best
    }
}
