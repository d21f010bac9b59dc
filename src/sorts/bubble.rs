//! Bubble sort as a resumable step sequence
//!
//! Suspends once per swap. Comparisons that leave the pair in order are not
//! separately animated, so an already-sorted array exhausts without a single
//! suspension.

use super::{out_of_order, Highlights, Role, StepOutcome, Stepper};

pub struct BubbleSort {
    ascending: bool,
    /// Completed passes; pass `i` bubbles over `0..len-1-i`
    pass: usize,
    /// Next pair to compare within the current pass
    cursor: usize,
    finished: bool,
}

impl BubbleSort {
    pub fn new(ascending: bool) -> Self {
        BubbleSort {
            ascending,
            pass: 0,
            cursor: 0,
            finished: false,
        }
    }
}

impl Stepper for BubbleSort {
    fn step(&mut self, values: &mut [u32]) -> StepOutcome {
        if self.finished {
            return StepOutcome::Done;
        }
        let len = values.len();

        loop {
            if len < 2 || self.pass >= len - 1 {
                self.finished = true;
                return StepOutcome::Done;
            }
            if self.cursor >= len - 1 - self.pass {
                self.cursor = 0;
                self.pass += 1;
                continue;
            }

            let j = self.cursor;
            self.cursor += 1;

            if out_of_order(values[j], values[j + 1], self.ascending) {
                values.swap(j, j + 1);
                let mut highlights = Highlights::default();
                highlights.insert(j, Role::Placed);
                highlights.insert(j + 1, Role::Compared);
                return StepOutcome::Step(highlights);
            }
        }
    }
}
