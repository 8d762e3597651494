//! Core FlakeID generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last time slot and sequence, guarded by one lock
//! - `time` - Monotonic and system clock sources
//! - `wait` - Spin and backoff strategies
//! - `generate` - ID generation logic

mod base62_methods;
mod generate;
mod state;
mod time;
mod wait;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::debug;

use crate::config::FlakeConfig;
use crate::error::FlakeError;
use crate::layout::FlakeLayout;

use state::State;
pub use time::{Clock, MonotonicClock, SystemClock};
use wait::{sleep_until_next_ms, spin_wait};

/// A single ID-minting node.
///
/// One long-lived instance per node identifier. Share it across threads
/// behind an `Arc`; every call to [`FlakeNode::next_id`] runs in one short
/// critical section.
///
/// Two instances running with the same node ID, or one restarted within
/// the same millisecond, can mint colliding IDs. Node ID assignment is the
/// caller's responsibility.
#[derive(Debug)]
#[repr(align(64))]
pub struct FlakeNode<C = MonotonicClock> {
    // === Hot path fields ===
    pub(crate) state: Mutex<State>,
    node_prefix: i64,
    ts_shift: u8,

    // === Cold path fields ===
    node_id: i64,
    config: FlakeConfig,
    clock: C,
}

impl FlakeNode<MonotonicClock> {
    /// Create a generator for `node_id` with the given epoch and field widths.
    ///
    /// Fails with [`FlakeError::InvalidNodeId`] when `node_id` is outside
    /// `0..=2^node_bits - 1`, [`FlakeError::InvalidLayout`] when the
    /// widths leave no room for the time field, or
    /// [`FlakeError::EpochInFuture`] when `epoch` has not been reached yet.
    pub fn new(
        node_id: i64,
        epoch: DateTime<Utc>,
        node_bits: u8,
        sequence_bits: u8,
    ) -> Result<Self, FlakeError> {
        let config = FlakeConfig::builder()
            .epoch(epoch)
            .node_bits(node_bits)
            .sequence_bits(sequence_bits)
            .build()?;
        Self::with_config(node_id, config)
    }

    /// Create with custom configuration
    pub fn with_config(node_id: i64, config: FlakeConfig) -> Result<Self, FlakeError> {
        Self::with_clock(node_id, config, MonotonicClock::new())
    }
}

impl<C: Clock> FlakeNode<C> {
    /// Create with custom configuration and time source
    pub fn with_clock(node_id: i64, config: FlakeConfig, clock: C) -> Result<Self, FlakeError> {
        Self::validate_node_id(node_id, &config)?;
        Self::validate_epoch(&config, &clock)?;
        debug!(
            node_id,
            node_bits = config.node_bits(),
            sequence_bits = config.sequence_bits(),
            epoch = %config.epoch(),
            "created flake node"
        );
        Ok(Self::build(node_id, config, clock))
    }

    fn validate_node_id(node_id: i64, config: &FlakeConfig) -> Result<(), FlakeError> {
        let max = config.max_node_id();
        if !(0..=max).contains(&node_id) {
            return Err(FlakeError::InvalidNodeId { node_id, max });
        }
        Ok(())
    }

    fn validate_epoch(config: &FlakeConfig, clock: &C) -> Result<(), FlakeError> {
        let ahead_ms = config
            .layout()
            .epoch_millis()
            .saturating_sub(clock.now().timestamp_millis());
        if ahead_ms > 0 {
            return Err(FlakeError::EpochInFuture { ahead_ms });
        }
        Ok(())
    }

    fn build(node_id: i64, config: FlakeConfig, clock: C) -> Self {
        Self {
            state: Mutex::new(State::default()),
            node_prefix: node_id << config.layout().node_shift(),
            ts_shift: config.layout().time_shift(),
            node_id,
            config,
            clock,
        }
    }

    #[inline(always)]
    pub const fn node_id(&self) -> i64 {
        self.node_id
    }

    #[inline(always)]
    pub const fn config(&self) -> &FlakeConfig {
        &self.config
    }

    /// Field layout needed to decode this node's IDs
    #[inline(always)]
    pub const fn layout(&self) -> &FlakeLayout {
        self.config.layout()
    }

    #[inline(always)]
    pub fn epoch(&self) -> DateTime<Utc> {
        self.layout().epoch()
    }

    #[inline(always)]
    pub const fn time_shift(&self) -> u8 {
        self.layout().time_shift()
    }

    #[inline(always)]
    pub const fn node_shift(&self) -> u8 {
        self.layout().node_shift()
    }

    #[inline(always)]
    pub const fn node_mask(&self) -> i64 {
        self.layout().node_mask()
    }

    #[inline(always)]
    pub const fn sequence_mask(&self) -> i64 {
        self.layout().sequence_mask()
    }

    /// Current time in milliseconds since the epoch
    #[inline(always)]
    pub(crate) fn now_ms(&self) -> i64 {
        self.layout().millis_since_epoch(self.clock.now())
    }

    /// Block until the clock reads past `from_ts`
    pub(crate) fn wait_next_millis(&self, from_ts: i64) -> i64 {
        if let Some(new_ts) = spin_wait(from_ts, &self.config, || self.now_ms()) {
            return new_ts;
        }
        sleep_until_next_ms(from_ts, 1, || self.now_ms())
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, time_slot: i64, sequence: i64) -> i64 {
        (time_slot << self.ts_shift) | self.node_prefix | sequence
    }
}
