use thiserror::Error;

/// Represents errors that can occur during FlakeID operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlakeError {
    /// Node ID falls outside `[0, max]` for the configured node width
    #[error("Node ID {node_id} is invalid. Allowed range is 0..={max}")]
    InvalidNodeId { node_id: i64, max: i64 },

    /// Node and sequence widths leave no room for the time field
    #[error(
        "Invalid layout: {node_bits} node bits + {sequence_bits} sequence bits exceed the 62 bits available"
    )]
    InvalidLayout { node_bits: u8, sequence_bits: u8 },

    /// The epoch lies ahead of the generator's clock
    #[error("Epoch is {ahead_ms} ms ahead of the clock")]
    EpochInFuture { ahead_ms: i64 },

    /// Text could not be parsed back into an ID
    #[error("Malformed ID {input:?}: {reason}")]
    MalformedId { input: String, reason: String },

    /// Elapsed time since the epoch no longer fits into the time field
    #[error("Time overflow: {elapsed} ms since epoch exceeds the time field maximum of {max} ms")]
    TimeOverflow { elapsed: i64, max: i64 },
}

impl FlakeError {
    pub(crate) fn malformed(input: &str, reason: impl ToString) -> Self {
        FlakeError::MalformedId {
            input: input.to_owned(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let invalid_node = FlakeError::InvalidNodeId {
            node_id: 1024,
            max: 1023,
        };
        assert_eq!(
            invalid_node.to_string(),
            "Node ID 1024 is invalid. Allowed range is 0..=1023"
        );

        let layout = FlakeError::InvalidLayout {
            node_bits: 40,
            sequence_bits: 23,
        };
        assert_eq!(
            layout.to_string(),
            "Invalid layout: 40 node bits + 23 sequence bits exceed the 62 bits available"
        );

        let future = FlakeError::EpochInFuture { ahead_ms: 1500 };
        assert_eq!(future.to_string(), "Epoch is 1500 ms ahead of the clock");

        let overflow = FlakeError::TimeOverflow {
            elapsed: 300,
            max: 255,
        };
        assert_eq!(
            overflow.to_string(),
            "Time overflow: 300 ms since epoch exceeds the time field maximum of 255 ms"
        );
    }

    #[test]
    fn test_malformed_display() {
        let err = FlakeError::malformed("12x", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "Malformed ID \"12x\": invalid digit found in string"
        );
    }

    #[test]
    fn test_error_clone() {
        let original = FlakeError::InvalidNodeId {
            node_id: -1,
            max: 1023,
        };
        let cloned = original.clone();
        assert_eq!(original, cloned);
        assert!(format!("{:?}", cloned).contains("InvalidNodeId"));
    }
}
