//! Node ID and field-width limits

#[cfg(test)]
mod tests {
    use crate::*;
    use chrono::{TimeZone, Utc};

    fn epoch() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 7, 1, 16, 10, 54).unwrap()
    }

    #[test]
    fn test_invalid_node_id() {
        match FlakeNode::new(1024, epoch(), 10, 12) {
            Err(FlakeError::InvalidNodeId { node_id, max }) => {
                assert_eq!(node_id, 1024);
                assert_eq!(max, 1023);
            }
            other => panic!("Expected InvalidNodeId error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_node_id() {
        assert_eq!(
            FlakeNode::new(-1, epoch(), 10, 12).unwrap_err(),
            FlakeError::InvalidNodeId {
                node_id: -1,
                max: 1023
            }
        );
    }

    #[test]
    fn test_node_id_boundaries() {
        for node_bits in [0u8, 1, 5, 10, 16, 20] {
            let max = (1i64 << node_bits) - 1;

            let low = FlakeNode::new(0, epoch(), node_bits, 12).unwrap();
            assert_eq!(low.next_id().node(low.layout()), 0);

            let high = FlakeNode::new(max, epoch(), node_bits, 12).unwrap();
            assert_eq!(high.next_id().node(high.layout()), max);

            assert!(matches!(
                FlakeNode::new(max + 1, epoch(), node_bits, 12),
                Err(FlakeError::InvalidNodeId { .. })
            ));
        }
    }

    #[test]
    fn test_layout_rejected_before_node() {
        assert_eq!(
            FlakeNode::new(0, epoch(), 40, 30).unwrap_err(),
            FlakeError::InvalidLayout {
                node_bits: 40,
                sequence_bits: 30
            }
        );
    }

    #[test]
    fn test_component_max_values() {
        let node = FlakeNode::new(1023, epoch(), 10, 12).unwrap();
        let id = node.next_id();
        let (elapsed, node_id, sequence) = node.layout().decompose(id.as_i64());

        assert!(elapsed > 0);
        assert!(elapsed <= node.layout().time_max());
        assert_eq!(node_id, 1023);
        assert!(sequence <= 4095);
    }

    #[test]
    fn test_all_width_splits() {
        for node_bits in 0..=22u8 {
            let sequence_bits = 22 - node_bits;
            let node = FlakeNode::new(0, epoch(), node_bits, sequence_bits).unwrap();
            let max_node = node.layout().node_max();
            let node = FlakeNode::new(max_node, epoch(), node_bits, sequence_bits).unwrap();

            let id = node.next_id();
            assert_eq!(id.node(node.layout()), max_node);
            assert!(id.sequence(node.layout()) <= node.sequence_mask());
            assert!(id.as_i64() >= 0);
        }
    }
}
