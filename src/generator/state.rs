//! Mutable generation state guarded by the generator's lock

/// Time slot of the most recent ID and the sequence used within it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    last_time_slot: i64,
    sequence: i64,
    behind: bool,
}

impl State {
    /// Before the first mint. Slot -1 is below every clock reading, so the
    /// first ID always starts a fresh slot at sequence 0.
    pub const INITIAL: Self = Self::new(-1, 0);

    #[inline(always)]
    pub const fn new(last_time_slot: i64, sequence: i64) -> Self {
        Self {
            last_time_slot,
            sequence,
            behind: false,
        }
    }

    /// Mark whether the clock read behind `last_time_slot` for this mint
    #[inline(always)]
    pub const fn with_behind(mut self, behind: bool) -> Self {
        self.behind = behind;
        self
    }

    /// Milliseconds since epoch at which the last ID was minted
    #[inline(always)]
    pub const fn last_time_slot(self) -> i64 {
        self.last_time_slot
    }

    #[inline(always)]
    pub const fn sequence(self) -> i64 {
        self.sequence
    }

    #[inline(always)]
    pub const fn is_behind(self) -> bool {
        self.behind
    }
}

impl Default for State {
    fn default() -> Self {
        Self::INITIAL
    }
}
