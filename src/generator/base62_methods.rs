//! Base62 convenience methods for FlakeNode

use super::time::Clock;
use super::FlakeNode;
use crate::error::FlakeError;
use crate::id::FlakeId;

impl<C: Clock> FlakeNode<C> {
    /// Mint the next ID and render it as base62
    pub fn next_base62(&self) -> String {
        self.next_id().to_base62()
    }

    /// Decompose a base62 encoded ID into elapsed milliseconds, node ID
    /// and sequence under this node's layout
    pub fn decompose_base62(&self, encoded: &str) -> Result<(i64, i64, i64), FlakeError> {
        let id = FlakeId::parse_base62(encoded)?;
        Ok(self.layout().decompose(id.as_i64()))
    }
}
