//! Merge sort as a resumable step sequence
//!
//! The recursion is flattened at construction time into a post-order queue of
//! tasks: every node `[lo, hi]` contributes its left half, its right half,
//! a merge of the two (when `lo < hi`), and one trailing pause suspension.
//! A merge task is itself a small state machine: each comparison first marks
//! the two cursor positions, suspends, re-marks them as committed, suspends,
//! and only then moves the winning element into the temporary buffer. The
//! array is untouched until the writeback phase, which copies the buffer back
//! one slot per suspension.

use super::{Highlights, Role, StepOutcome, Stepper};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
enum Task {
    /// Merge the sorted runs `[lo, mid]` and `[mid + 1, hi]`
    Merge { lo: usize, mid: usize, hi: usize },

    /// The unconditional suspension closing a recursion node; no highlights,
    /// no array access
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Highlight the active cursor(s) as under comparison
    Mark,

    /// Re-highlight as committed, then move the winner into the buffer
    Commit,

    /// Copy the buffer back into the range, one slot per suspension
    Writeback,
}

/// In-progress merge of two adjacent sorted runs
struct ActiveMerge {
    lo: usize,
    mid: usize,
    hi: usize,
    /// Left-run cursor, in `lo..=mid`
    left: usize,
    /// Right-run cursor, in `mid + 1..=hi`
    right: usize,
    buffer: Vec<u32>,
    /// Next buffer slot to copy back
    write: usize,
    phase: Phase,
}

impl ActiveMerge {
    fn new(lo: usize, mid: usize, hi: usize) -> Self {
        ActiveMerge {
            lo,
            mid,
            hi,
            left: lo,
            right: mid + 1,
            buffer: Vec::with_capacity(hi - lo + 1),
            write: 0,
            phase: Phase::Mark,
        }
    }
}

pub struct MergeSort {
    ascending: bool,
    tasks: VecDeque<Task>,
    active: Option<ActiveMerge>,
    finished: bool,
}

impl MergeSort {
    pub fn new(len: usize, ascending: bool) -> Self {
        let mut tasks = VecDeque::new();
        if len > 0 {
            plan(0, len - 1, &mut tasks);
        }
        MergeSort {
            ascending,
            tasks,
            active: None,
            finished: false,
        }
    }
}

/// Pick the cursor whose element merges next, favoring the right run on
/// ties like the original comparison.
fn take_left(ascending: bool, left_value: u32, right_value: u32) -> bool {
    if ascending {
        left_value < right_value
    } else {
        left_value > right_value
    }
}

/// Flatten the recursion tree: left half, right half, merge, trailing pause.
/// Leaf nodes (`lo >= hi`) contribute only the pause.
fn plan(lo: usize, hi: usize, tasks: &mut VecDeque<Task>) {
    if lo < hi {
        let mid = (lo + hi) / 2;
        plan(lo, mid, tasks);
        plan(mid + 1, hi, tasks);
        tasks.push_back(Task::Merge { lo, mid, hi });
    }
    tasks.push_back(Task::Pause);
}

impl Stepper for MergeSort {
    fn step(&mut self, values: &mut [u32]) -> StepOutcome {
        if self.finished {
            return StepOutcome::Done;
        }
        let ascending = self.ascending;

        loop {
            let merge = match self.active {
                Some(ref mut merge) => merge,
                None => match self.tasks.pop_front() {
                    Some(Task::Merge { lo, mid, hi }) => {
                        self.active = Some(ActiveMerge::new(lo, mid, hi));
                        continue;
                    }
                    Some(Task::Pause) => {
                        return StepOutcome::Step(Highlights::default());
                    }
                    None => {
                        self.finished = true;
                        return StepOutcome::Done;
                    }
                },
            };

            let left_live = merge.left <= merge.mid;
            let right_live = merge.right <= merge.hi;

            match merge.phase {
                Phase::Mark => {
                    if !left_live && !right_live {
                        merge.phase = Phase::Writeback;
                        continue;
                    }
                    let mut highlights = Highlights::default();
                    if left_live {
                        highlights.insert(merge.left, Role::Compared);
                    }
                    if right_live {
                        highlights.insert(merge.right, Role::Compared);
                    }
                    merge.phase = Phase::Commit;
                    return StepOutcome::Step(highlights);
                }
                Phase::Commit => {
                    let mut highlights = Highlights::default();
                    if left_live {
                        highlights.insert(merge.left, Role::Candidate);
                    }
                    if right_live {
                        highlights.insert(merge.right, Role::Candidate);
                    }

                    // The cursors cannot both be exhausted here: Commit is
                    // only entered from a Mark with a live cursor.
                    let pick_left = if left_live && right_live {
                        take_left(ascending, values[merge.left], values[merge.right])
                    } else {
                        left_live
                    };
                    if pick_left {
                        merge.buffer.push(values[merge.left]);
                        merge.left += 1;
                    } else {
                        merge.buffer.push(values[merge.right]);
                        merge.right += 1;
                    }

                    merge.phase = Phase::Mark;
                    return StepOutcome::Step(highlights);
                }
                Phase::Writeback => {
                    if merge.write > merge.hi - merge.lo {
                        self.active = None;
                        continue;
                    }
                    let target = merge.lo + merge.write;
                    values[target] = merge.buffer[merge.write];
                    merge.write += 1;

                    let mut highlights = Highlights::default();
                    highlights.insert(target, Role::Settled);
                    return StepOutcome::Step(highlights);
                }
            }
        }
    }
}
