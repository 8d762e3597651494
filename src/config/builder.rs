//! FlakeConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::{default_epoch, ClockRegression, FlakeConfig};
use crate::error::FlakeError;

/// Default configuration values
pub(super) const DEFAULT_NODE_BITS: u8 = 10;
pub(super) const DEFAULT_SEQUENCE_BITS: u8 = 12;
pub(super) const DEFAULT_EPOCH_MILLIS: i64 = 1704067200000; // January 1, 2024 UTC
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for FlakeConfig
#[derive(Debug, Clone)]
pub struct FlakeConfigBuilder {
    pub(super) node_bits: u8,
    pub(super) sequence_bits: u8,
    pub(super) epoch: DateTime<Utc>,
    pub(super) clock_regression: ClockRegression,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
}

impl FlakeConfigBuilder {
    /// Create a new FlakeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            node_bits: DEFAULT_NODE_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            epoch: default_epoch(),
            clock_regression: ClockRegression::Hold,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set the number of bits for the node ID field
    pub const fn node_bits(mut self, bits: u8) -> Self {
        self.node_bits = bits;
        self
    }

    /// Set the number of bits for the per-millisecond sequence field
    pub const fn sequence_bits(mut self, bits: u8) -> Self {
        self.sequence_bits = bits;
        self
    }

    /// Set the epoch that timestamps are measured from
    pub fn epoch(mut self, epoch: DateTime<Utc>) -> Self {
        self.epoch = epoch;
        self
    }

    /// Choose how a backwards-moving clock is handled
    pub const fn clock_regression(mut self, policy: ClockRegression) -> Self {
        self.clock_regression = policy;
        self
    }

    /// Enable or disable micro spin before sleep on sequence exhaustion
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final FlakeConfig
    ///
    /// Fails with [`FlakeError::InvalidLayout`] when the node and sequence
    /// widths leave no bit for the time field.
    pub fn build(self) -> Result<FlakeConfig, FlakeError> {
        FlakeConfig::from_builder(self)
    }
}

impl Default for FlakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
