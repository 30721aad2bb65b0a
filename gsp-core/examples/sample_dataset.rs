//! Mine the three-transaction demonstration dataset
//!
//! Run with: cargo run --example sample_dataset

use gsp_core::{Element, Miner, MinerConfig};

fn main() -> gsp_core::Result<()> {
    let transactions = vec![
        vec![
            Element::item("a"),
            Element::item("b"),
            Element::item("c"),
            Element::set(["c", "d"]),
            Element::item("d"),
        ],
        vec![
            Element::item("a"),
            Element::item("a"),
            Element::item("b"),
            Element::set(["c", "d"]),
        ],
        vec![Element::item("a"), Element::item("a")],
    ];

    let config = MinerConfig::builder().min_support(0.1).build()?;
    let miner = Miner::with_config(transactions, config)?;
    let report = miner.run_report()?;

    println!("Threshold: {}", report.metadata.threshold);
    for summary in &report.metadata.levels {
        println!(
            "Level {}: {} candidates, {} frequent",
            summary.level, summary.candidates, summary.survivors
        );
    }

    println!("\nFrequent patterns:");
    for (pattern, support) in report.patterns.sorted() {
        println!("  {pattern}  support={support}");
    }

    Ok(())
}
