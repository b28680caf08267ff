//! Touch trigger latch shared between the edge task and the control loop.
//!
//! The touch sensor's rising edges arrive on an async task; the control
//! loop consumes them at its own pace. The latch is all atomics so it can
//! live in a `static` and be shared without a critical section. Edges that
//! arrive faster than the debounce window count as contact bounce and do
//! not arm the latch again.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::config::TOUCH_DEBOUNCE_MS;

/// Lock-free touch latch.
///
/// Timestamps are kept in 32-bit milliseconds, which wraps after ~49 days.
/// The quiet-window arithmetic uses wrapping subtraction so a wrap only
/// risks one misclassified debounce decision, not a stuck latch.
#[derive(Debug)]
pub struct TriggerLatch {
    /// Armed flag the control loop consumes with [`take`](Self::take).
    pending: AtomicBool,
    /// Edges seen since the last [`clear`](Self::clear). Nonzero means the
    /// finger may still be on the pad.
    edges: AtomicU32,
    /// Timestamp of the most recent edge.
    last_edge_ms: AtomicU32,
}

impl TriggerLatch {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            edges: AtomicU32::new(0),
            last_edge_ms: AtomicU32::new(0),
        }
    }

    /// Record a rising edge at `now_ms`.
    ///
    /// The first edge after a [`clear`](Self::clear) always arms the latch;
    /// later edges re-arm only once the debounce window has passed.
    pub fn notify(&self, now_ms: u32) {
        let previous = self.last_edge_ms.swap(now_ms, Ordering::Relaxed);
        let first = self.edges.fetch_add(1, Ordering::Relaxed) == 0;
        if first || now_ms.wrapping_sub(previous) >= TOUCH_DEBOUNCE_MS {
            self.pending.store(true, Ordering::Release);
        }
    }

    /// Consume the armed flag. Returns true at most once per arming.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::Acquire)
    }

    /// Reset the edge counter and the armed flag after a greeting completes.
    pub fn clear(&self) {
        self.pending.store(false, Ordering::Release);
        self.edges.store(0, Ordering::Relaxed);
    }

    /// Edges recorded since the last clear.
    pub fn edges(&self) -> u32 {
        self.edges.load(Ordering::Relaxed)
    }

    /// Timestamp of the most recent edge, in wrapped milliseconds.
    pub fn last_edge_ms(&self) -> u32 {
        self.last_edge_ms.load(Ordering::Relaxed)
    }
}

impl Default for TriggerLatch {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
