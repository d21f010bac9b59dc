//! Selection sort as a resumable step sequence
//!
//! Suspends on every inner comparison, including ones that leave the running
//! extremum unchanged. The swap that closes an outer round is bundled into
//! the following resumption and is not separately animated.

use super::{more_extreme, Highlights, Role, StepOutcome, Stepper};

pub struct SelectionSort {
    ascending: bool,
    /// Boundary of the sorted prefix
    outer: usize,
    /// Index of the running extremum in `outer..len`
    best: usize,
    /// Next index to compare against the extremum
    inner: usize,
    finished: bool,
}

impl SelectionSort {
    pub fn new(ascending: bool) -> Self {
        SelectionSort {
            ascending,
            outer: 0,
            best: 0,
            inner: 1,
            finished: false,
        }
    }
}

impl Stepper for SelectionSort {
    fn step(&mut self, values: &mut [u32]) -> StepOutcome {
        if self.finished {
            return StepOutcome::Done;
        }
        let len = values.len();

        loop {
            if self.outer >= len {
                self.finished = true;
                return StepOutcome::Done;
            }
            if self.inner >= len {
                // Inner scan complete: commit the extremum and open the
                // next round without suspending.
                values.swap(self.outer, self.best);
                self.outer += 1;
                self.best = self.outer;
                self.inner = self.outer + 1;
                continue;
            }

            if more_extreme(values[self.inner], values[self.best], self.ascending) {
                self.best = self.inner;
            }

            // Later inserts win when indices collide, matching the original
            // highlight precedence (scan cursor over extremum over boundary).
            let mut highlights = Highlights::default();
            highlights.insert(self.outer, Role::Placed);
            highlights.insert(self.best, Role::Candidate);
            highlights.insert(self.inner, Role::Compared);

            self.inner += 1;
            return StepOutcome::Step(highlights);
        }
    }
}
