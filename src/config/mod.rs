//! Configuration for FlakeID generator

mod builder;

use chrono::{DateTime, Utc};

pub use builder::FlakeConfigBuilder;
use builder::{
    DEFAULT_EPOCH_MILLIS, DEFAULT_NODE_BITS, DEFAULT_SEQUENCE_BITS, DEFAULT_SPIN_ENABLED,
    DEFAULT_SPIN_LOOPS, DEFAULT_SPIN_YIELD_EVERY,
};

use crate::error::FlakeError;
use crate::layout::FlakeLayout;

/// What the generator does when the clock reads earlier than the last
/// time slot it minted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockRegression {
    /// Keep minting in the last time slot until the clock catches up.
    /// IDs stay strictly increasing.
    #[default]
    Hold,
    /// Reset the sequence and encode the earlier timestamp. IDs issued
    /// after the regression may sort before earlier ones.
    Reset,
}

/// Configuration for FlakeID generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlakeConfig {
    layout: FlakeLayout,
    clock_regression: ClockRegression,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
}

/// Default epoch: January 1, 2024 UTC
pub fn default_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(DEFAULT_EPOCH_MILLIS).unwrap_or(DateTime::UNIX_EPOCH)
}

impl FlakeConfig {
    /// Create config with the given layout and default tuning
    pub fn new(layout: FlakeLayout) -> Self {
        Self {
            layout,
            clock_regression: ClockRegression::default(),
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: FlakeConfigBuilder) -> Result<Self, FlakeError> {
        let layout = FlakeLayout::new(b.epoch, b.node_bits, b.sequence_bits)?;
        let mut cfg = Self::new(layout);
        cfg.clock_regression = b.clock_regression;
        cfg.spin_enabled = b.spin_enabled;
        cfg.spin_loops = b.spin_loops;
        cfg.spin_yield_every = b.spin_yield_every;
        Ok(cfg)
    }

    /// Create a new configuration builder
    pub fn builder() -> FlakeConfigBuilder {
        FlakeConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn layout(&self) -> &FlakeLayout {
        &self.layout
    }

    #[inline(always)]
    pub fn epoch(&self) -> DateTime<Utc> {
        self.layout.epoch()
    }

    #[inline(always)]
    pub const fn node_bits(&self) -> u8 {
        self.layout.node_bits()
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.layout.sequence_bits()
    }

    #[inline(always)]
    pub const fn max_node_id(&self) -> i64 {
        self.layout.node_max()
    }

    #[inline(always)]
    pub const fn max_sequence_id(&self) -> i64 {
        self.layout.sequence_mask()
    }

    #[inline(always)]
    pub const fn clock_regression(&self) -> ClockRegression {
        self.clock_regression
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for FlakeConfig {
    fn default() -> Self {
        Self::new(FlakeLayout::derive(
            default_epoch(),
            DEFAULT_NODE_BITS,
            DEFAULT_SEQUENCE_BITS,
        ))
    }
}
