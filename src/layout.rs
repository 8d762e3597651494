//! Bit layout of a FlakeID
//!
//! ```text
//!  63  62 ........ time_shift | .... node_shift | ........ 0
//! [ 0 ][     elapsed ms      ][     node id    ][ sequence ]
//! ```
//!
//! The sign bit is always zero so IDs order correctly as `i64`.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::FlakeError;

/// Bits available to the time, node and sequence fields together
pub const PAYLOAD_BITS: u8 = 63;

/// Immutable description of how an ID packs its fields, plus the epoch
/// its time field is measured from.
///
/// IDs do not carry their own layout; decoding with a layout other than
/// the one the ID was minted with silently yields wrong values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlakeLayout {
    epoch: DateTime<Utc>,
    epoch_millis: i64,
    node_bits: u8,
    sequence_bits: u8,
    time_shift: u8,
    node_shift: u8,
    node_max: i64,
    node_mask: i64,
    sequence_mask: i64,
    time_max: i64,
}

impl FlakeLayout {
    /// Derive shifts and masks for the given field widths.
    ///
    /// Fails with [`FlakeError::InvalidLayout`] unless
    /// `node_bits + sequence_bits` leaves at least one bit of time field.
    pub fn new(epoch: DateTime<Utc>, node_bits: u8, sequence_bits: u8) -> Result<Self, FlakeError> {
        let total = u16::from(node_bits) + u16::from(sequence_bits);
        if total >= u16::from(PAYLOAD_BITS) {
            return Err(FlakeError::InvalidLayout {
                node_bits,
                sequence_bits,
            });
        }
        Ok(Self::derive(epoch, node_bits, sequence_bits))
    }

    /// Caller guarantees `node_bits + sequence_bits < 63`.
    pub(crate) fn derive(epoch: DateTime<Utc>, node_bits: u8, sequence_bits: u8) -> Self {
        let node_max = Self::calculate_mask(node_bits);
        let time_shift = node_bits + sequence_bits;
        Self {
            epoch,
            epoch_millis: epoch.timestamp_millis(),
            node_bits,
            sequence_bits,
            time_shift,
            node_shift: sequence_bits,
            node_max,
            node_mask: node_max << sequence_bits,
            sequence_mask: Self::calculate_mask(sequence_bits),
            time_max: i64::MAX >> time_shift,
        }
    }

    /// Calculate mask for given number of bits
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> i64 {
        (1i64 << bits) - 1
    }

    #[inline(always)]
    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    #[inline(always)]
    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    #[inline(always)]
    pub const fn node_bits(&self) -> u8 {
        self.node_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    #[inline(always)]
    pub const fn time_bits(&self) -> u8 {
        PAYLOAD_BITS - self.time_shift
    }

    #[inline(always)]
    pub const fn time_shift(&self) -> u8 {
        self.time_shift
    }

    #[inline(always)]
    pub const fn node_shift(&self) -> u8 {
        self.node_shift
    }

    /// Largest node ID this layout can encode
    #[inline(always)]
    pub const fn node_max(&self) -> i64 {
        self.node_max
    }

    /// `node_max << sequence_bits`
    #[inline(always)]
    pub const fn node_mask(&self) -> i64 {
        self.node_mask
    }

    #[inline(always)]
    pub const fn sequence_mask(&self) -> i64 {
        self.sequence_mask
    }

    /// Largest elapsed-millisecond value the time field can hold
    #[inline(always)]
    pub const fn time_max(&self) -> i64 {
        self.time_max
    }

    /// Milliseconds from the epoch to `instant`, clamped at zero
    #[inline]
    pub fn millis_since_epoch(&self, instant: DateTime<Utc>) -> i64 {
        instant
            .timestamp_millis()
            .saturating_sub(self.epoch_millis)
            .max(0)
    }

    /// Pack fields into a raw ID. Fields are masked to their widths.
    #[inline(always)]
    pub const fn pack(&self, elapsed: i64, node: i64, sequence: i64) -> i64 {
        ((elapsed & self.time_max) << self.time_shift)
            | ((node << self.node_shift) & self.node_mask)
            | (sequence & self.sequence_mask)
    }

    /// Extract elapsed milliseconds since the epoch
    #[inline(always)]
    pub const fn elapsed_millis(&self, id: i64) -> i64 {
        id >> self.time_shift
    }

    /// Extract the mint time as an absolute instant
    #[inline]
    pub fn time(&self, id: i64) -> DateTime<Utc> {
        offset_epoch(self.epoch, self.elapsed_millis(id))
    }

    /// Extract node component
    #[inline(always)]
    pub const fn node(&self, id: i64) -> i64 {
        (id & self.node_mask) >> self.node_shift
    }

    /// Extract sequence component
    #[inline(always)]
    pub const fn sequence(&self, id: i64) -> i64 {
        id & self.sequence_mask
    }

    /// Decompose into elapsed milliseconds, node ID and sequence
    #[inline]
    pub const fn decompose(&self, id: i64) -> (i64, i64, i64) {
        (self.elapsed_millis(id), self.node(id), self.sequence(id))
    }
}

/// `epoch + millis`, saturating at the representable range
#[inline]
pub(crate) fn offset_epoch(epoch: DateTime<Utc>, millis: i64) -> DateTime<Utc> {
    TimeDelta::try_milliseconds(millis)
        .and_then(|delta| epoch.checked_add_signed(delta))
        .unwrap_or(if millis < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}
