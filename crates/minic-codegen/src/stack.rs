//! Operand-stack depth tracking.
//!
//! Lowering never simulates the emitted code. Instead every construct reports
//! its stack effect as a sequence of [`push`](StackTracker::push) and
//! [`pop`](StackTracker::pop) calls in post-order, and the tracker keeps the
//! highest depth seen. Because children report before their parent consumes
//! them, the recorded watermark can only over-approximate the real one.
//!
//! Watermarks are archived in a FIFO when a function body completes and are
//! consumed, in the same order, by the prologue of that function.

use std::collections::VecDeque;

use tracing::{trace, warn};

/// Running current/maximum operand-stack depth for the function being lowered.
#[derive(Debug)]
pub struct StackTracker {
    current: i32,
    maximum: i32,
    /// Archived watermarks awaiting their prologue.
    archived: VecDeque<usize>,
    /// Returned by [`max_for_next_prologue`](Self::max_for_next_prologue)
    /// when nothing has been archived.
    default_limit: usize,
}

impl StackTracker {
    pub fn new(default_limit: usize) -> Self {
        Self {
            current: 0,
            maximum: 0,
            archived: VecDeque::new(),
            default_limit,
        }
    }

    /// One value was pushed.
    pub fn push(&mut self) {
        self.current += 1;
        self.raise_watermark();
    }

    /// One value was consumed.
    ///
    /// The watermark is compared against the new depth here as well as in
    /// [`push`](Self::push). Under consistent accounting this never raises it.
    pub fn pop(&mut self) {
        self.current -= 1;
        self.raise_watermark();
    }

    fn raise_watermark(&mut self) {
        if self.current > self.maximum {
            self.maximum = self.current;
        }
    }

    /// Reset both counters for a new function body.
    pub fn enter_function(&mut self) {
        self.current = 0;
        self.maximum = 0;
    }

    /// Queue the watermark of the body that just finished and reset the counters.
    pub fn archive_and_reset(&mut self) -> usize {
        let watermark = self.maximum.max(0) as usize;
        trace!(watermark, pending = self.archived.len(), "archiving stack watermark");
        self.archived.push_back(watermark);
        self.current = 0;
        self.maximum = 0;
        watermark
    }

    /// Take the oldest archived watermark, or the default limit if none is queued.
    pub fn max_for_next_prologue(&mut self) -> usize {
        match self.archived.pop_front() {
            Some(watermark) => watermark,
            None => {
                warn!(
                    default = self.default_limit,
                    "no archived stack watermark, using default limit"
                );
                self.default_limit
            }
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Number of archived watermarks not yet consumed.
    pub fn pending(&self) -> usize {
        self.archived.len()
    }
}
