use chrono::{TimeZone, Utc};
use flakeid::{FlakeId, FlakeNode};

fn main() {
    // Node 123 with 10 node bits and 12 sequence bits
    let epoch = Utc.with_ymd_and_hms(2022, 7, 1, 16, 10, 54).unwrap();
    let generator = FlakeNode::new(123, epoch, 10, 12).unwrap();

    let id1 = generator.next_id();
    let id2 = generator.next_id();
    let id3 = generator.next_id();

    println!("Generated IDs (guaranteed to be monotonic):");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Decode with the raw parameters instead of the layout
    println!("\nComponents of ID3 (extracted individually):");
    println!(
        "  Time: {}",
        id3.decoded_time(generator.epoch(), generator.time_shift())
    );
    println!(
        "  Node ID: {}",
        id3.decoded_node(generator.node_mask(), generator.node_shift())
    );
    println!("  Sequence: {}", id3.decoded_sequence(generator.sequence_mask()));

    println!("\nText forms of ID3:");
    println!("  Decimal: {}", id3.to_decimal_string());
    println!("  Binary:  {}", id3.to_binary_string());
    println!("  Base62:  {}", id3.to_base62());

    let parsed = FlakeId::parse_binary(&id3.to_binary_string()).unwrap();
    assert_eq!(parsed, id3);
}

fn print_id(id: FlakeId, generator: &FlakeNode) {
    let layout = generator.layout();
    let (elapsed, node, sequence) = layout.decompose(id.as_i64());

    println!(
        "  ID: {id}, Elapsed: {elapsed} ms, Human date: {}, Node ID: {node}, Sequence: {sequence}",
        id.time(layout)
    );
}
