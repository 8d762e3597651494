use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use flakeid::{FlakeConfig, FlakeNode};

fn main() {
    // One generator per node, each shared by two worker threads
    let config = FlakeConfig::builder()
        .node_bits(8)
        .sequence_bits(14)
        .build()
        .unwrap();
    let nodes: Vec<Arc<FlakeNode>> = (0..3)
        .map(|node_id| Arc::new(FlakeNode::with_config(node_id, config).unwrap()))
        .collect();

    let mut handles = vec![];
    for (worker, node) in nodes.iter().cycle().take(6).enumerate() {
        let node = Arc::clone(node);
        handles.push(thread::spawn(move || {
            let mut ids = Vec::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = node.next_id();
                let (elapsed, node_id, seq) = node.layout().decompose(id.as_i64());

                println!(
                    "Worker {} generated ID {} = {} (ts={}, node={}, seq={})",
                    worker, i, id, elapsed, node_id, seq
                );
                ids.push(id);

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        let ids = handle.join().unwrap();
        // Each worker sees its own IDs increase
        assert!(ids.windows(2).all(|pair| pair[1] > pair[0]));
        for id in ids {
            assert!(all_ids.insert(id), "Duplicate ID generated!");
        }
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    println!("All IDs are unique across nodes and increasing per worker!");
}
