//! The FlakeID value type and its textual forms

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::base62;
use crate::error::FlakeError;
use crate::layout::{offset_epoch, FlakeLayout};

/// A packed 64-bit identifier.
///
/// Ordering is numeric, which for IDs from one generator is mint order.
/// Decoding needs the layout the ID was minted with; see [`FlakeLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct FlakeId(i64);

impl FlakeId {
    /// Wrap a raw integer. Always succeeds.
    #[inline(always)]
    pub const fn from_i64(raw: i64) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Base-10 rendering, identical to `Display`
    pub fn to_decimal_string(self) -> String {
        self.0.to_string()
    }

    /// Base-2 rendering without leading zeros
    pub fn to_binary_string(self) -> String {
        format!("{:b}", self.0)
    }

    /// Base62 rendering of the raw bits
    pub fn to_base62(self) -> String {
        base62::encode(self.0 as u64)
    }

    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self(i64::from_be_bytes(bytes))
    }

    /// Parse the output of [`FlakeId::to_decimal_string`]
    pub fn parse_decimal(input: &str) -> Result<Self, FlakeError> {
        let raw = input
            .parse::<i64>()
            .map_err(|err| FlakeError::malformed(input, err))?;
        Self::checked(input, raw)
    }

    /// Parse the output of [`FlakeId::to_binary_string`]
    pub fn parse_binary(input: &str) -> Result<Self, FlakeError> {
        let raw = i64::from_str_radix(input, 2).map_err(|err| FlakeError::malformed(input, err))?;
        Self::checked(input, raw)
    }

    /// Parse the output of [`FlakeId::to_base62`]
    pub fn parse_base62(input: &str) -> Result<Self, FlakeError> {
        let raw = base62::decode(input).map_err(|err| FlakeError::malformed(input, err))?;
        let raw = i64::try_from(raw)
            .map_err(|_| FlakeError::malformed(input, "sign bit is reserved"))?;
        Ok(Self(raw))
    }

    fn checked(input: &str, raw: i64) -> Result<Self, FlakeError> {
        if raw < 0 {
            return Err(FlakeError::malformed(input, "sign bit is reserved"));
        }
        Ok(Self(raw))
    }

    /// `epoch + (id >> time_shift)` milliseconds. A shift of 64 or more
    /// shifts every bit out and decodes to `epoch`.
    #[inline]
    pub fn decoded_time(self, epoch: DateTime<Utc>, time_shift: u8) -> DateTime<Utc> {
        offset_epoch(epoch, shift_right(self.0, time_shift))
    }

    /// `(id & node_mask) >> node_shift`, zero for shifts of 64 or more
    #[inline(always)]
    pub const fn decoded_node(self, node_mask: i64, node_shift: u8) -> i64 {
        shift_right(self.0 & node_mask, node_shift)
    }

    /// `id & sequence_mask`
    #[inline(always)]
    pub const fn decoded_sequence(self, sequence_mask: i64) -> i64 {
        self.0 & sequence_mask
    }

    /// Mint time under `layout`
    #[inline]
    pub fn time(self, layout: &FlakeLayout) -> DateTime<Utc> {
        layout.time(self.0)
    }

    /// Node ID under `layout`
    #[inline(always)]
    pub const fn node(self, layout: &FlakeLayout) -> i64 {
        layout.node(self.0)
    }

    /// Sequence under `layout`
    #[inline(always)]
    pub const fn sequence(self, layout: &FlakeLayout) -> i64 {
        layout.sequence(self.0)
    }
}

/// Arithmetic right shift that saturates instead of overflowing
#[inline(always)]
const fn shift_right(value: i64, shift: u8) -> i64 {
    match value.checked_shr(shift as u32) {
        Some(shifted) => shifted,
        None if value < 0 => -1,
        None => 0,
    }
}

impl fmt::Display for FlakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Binary for FlakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl FromStr for FlakeId {
    type Err = FlakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_decimal(s)
    }
}

impl From<i64> for FlakeId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<FlakeId> for i64 {
    fn from(id: FlakeId) -> Self {
        id.0
    }
}
