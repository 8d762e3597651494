//! ID generation logic
//!
//! The clock-and-sequence state machine behind `next_id()`

use tracing::{debug, trace, warn};

use super::state::State;
use super::time::Clock;
use super::FlakeNode;
use crate::config::ClockRegression;
use crate::error::FlakeError;
use crate::id::FlakeId;

impl<C: Clock> FlakeNode<C> {
    /// Mint the next ID.
    ///
    /// IDs from one node strictly increase while the clock moves forward
    /// (and under [`ClockRegression::Hold`], also when it does not). Once
    /// every sequence value of the current millisecond is used, the call
    /// blocks until the clock reaches the next millisecond.
    ///
    /// # Panics
    ///
    /// Panics when the elapsed time since the epoch no longer fits the time
    /// field. Use [`FlakeNode::try_next_id`] to handle that as an error.
    #[inline]
    pub fn next_id(&self) -> FlakeId {
        match self.try_next_id() {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Mint the next ID, reporting time field overflow as
    /// [`FlakeError::TimeOverflow`] instead of panicking.
    pub fn try_next_id(&self) -> Result<FlakeId, FlakeError> {
        let mut state = self.state.lock();
        let last = state.last_time_slot();

        let mut now = self.now_ms();
        let behind = now < last;
        if behind {
            now = self.clock_behind(now, last, state.is_behind());
        }

        let (slot, sequence) = if now == last {
            let sequence = (state.sequence() + 1) & self.config.max_sequence_id();
            if sequence == 0 {
                // Every sequence value of this slot is taken
                (now + 1, sequence)
            } else {
                (now, sequence)
            }
        } else {
            (now, 0)
        };

        let max = self.layout().time_max();
        if slot > max {
            return Err(FlakeError::TimeOverflow { elapsed: slot, max });
        }

        if slot > now {
            self.stall_until(now);
        }

        *state = State::new(slot, sequence).with_behind(behind);
        Ok(FlakeId::from_i64(self.assemble_id(slot, sequence)))
    }

    /// Pick the slot to mint in when the clock reads earlier than `last`.
    /// Warns once per regression; later mints while still behind only debug.
    #[cold]
    #[inline(never)]
    fn clock_behind(&self, now: i64, last: i64, already_behind: bool) -> i64 {
        let policy = self.config.clock_regression();
        if already_behind {
            debug!(
                node_id = self.node_id,
                behind_ms = last - now,
                "clock still behind last slot"
            );
        } else {
            warn!(
                node_id = self.node_id,
                behind_ms = last - now,
                ?policy,
                "clock moved backwards"
            );
        }
        match policy {
            ClockRegression::Hold => last,
            ClockRegression::Reset => now,
        }
    }

    /// Hold the lock until the clock has moved past `exhausted_slot`
    #[cold]
    #[inline(never)]
    fn stall_until(&self, exhausted_slot: i64) {
        trace!(
            node_id = self.node_id,
            slot = exhausted_slot,
            "sequence exhausted, waiting for next millisecond"
        );
        self.wait_next_millis(exhausted_slot);
    }
}
