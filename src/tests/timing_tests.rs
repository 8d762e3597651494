//! Waiting for the next millisecond

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_wait_next_millis_progresses() {
        let generator = FlakeNode::with_config(1, FlakeConfig::default()).unwrap();
        let from = generator.now_ms();
        let next = generator.wait_next_millis(from);
        assert!(next > from);
    }

    #[test]
    fn test_wait_next_millis_progresses_no_spin() {
        let cfg = FlakeConfig::builder()
            .enable_spin(false)
            .spin_loops(0)
            .spin_yield_every(0)
            .build()
            .unwrap();
        let generator = FlakeNode::with_config(1, cfg).unwrap();
        let from = generator.now_ms();
        let next = generator.wait_next_millis(from);
        assert!(next > from);
    }

    #[test]
    fn test_lock_is_released_after_minting() {
        let generator = FlakeNode::with_config(1, FlakeConfig::default()).unwrap();
        generator.next_id();
        assert!(generator.state.try_lock().is_some());
    }
}
