//! Insertion sort as a resumable step sequence
//!
//! Each suspension is one shift of the held element toward its slot. The
//! failed guard that ends an insertion round is not animated; the stepper
//! silently advances to the next outer index and keeps working until it finds
//! the next shift (or exhausts).

use super::{out_of_order, Highlights, Role, StepOutcome, Stepper};

pub struct InsertionSort {
    ascending: bool,
    /// Next unsorted element to insert
    outer: usize,
    /// Current slot of the element being inserted
    inner: usize,
    finished: bool,
}

impl InsertionSort {
    pub fn new(ascending: bool) -> Self {
        InsertionSort {
            ascending,
            outer: 1,
            inner: 1,
            finished: false,
        }
    }
}

impl Stepper for InsertionSort {
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

            // values[inner] is the element being inserted; its round ends
            // when the predecessor no longer violates the order.
            if self.inner == 0
                || !out_of_order(values[self.inner - 1], values[self.inner], self.ascending)
            {
                self.outer += 1;
                self.inner = self.outer;
                continue;
            }

            values.swap(self.inner - 1, self.inner);
            self.inner -= 1;

            let mut highlights = Highlights::default();
            highlights.insert(self.inner, Role::Placed);
            if self.inner > 0 {
                highlights.insert(self.inner - 1, Role::Compared);
            }
            return StepOutcome::Step(highlights);
        }
    }
}
