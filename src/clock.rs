//! Monotonic millisecond time for frame pacing and debouncing.

/// Millisecond timestamp taken from a monotonic clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Millis(pub u64);

impl Millis {
    /// Milliseconds elapsed since `earlier`, saturating at zero so a stale
    /// or equal timestamp never reads as elapsed time.
    #[inline]
    pub const fn since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Monotonic millisecond clock with a blocking pause.
///
/// The firmware implements this over the embassy time driver; tests use a
/// fake whose `pause` advances `now`, which keeps the blocking greeting
/// sequence fully deterministic on the host.
pub trait Clock {
    /// Current monotonic time.
    fn now(&self) -> Millis;

    /// Block the control loop for `ms` milliseconds.
    fn pause(&mut self, ms: u32);
}

// =============================================================================
// Unit Tests
// =============================================================================
