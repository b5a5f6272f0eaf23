//! Simple search example: find resistor networks for a target and print them.
//! Run with: cargo run --example simple_search [target]

use resfinder::prelude::*;
use resfinder::{format_resistance, parse_resistance};

fn main() -> Result<(), ResFinderError> {
    let text = std::env::args().nth(1).unwrap_or_else(|| "4k7".to_string());
    let target = parse_resistance(&text)?;

    let options = SearchOptions {
        series: ESeries::E24,
        tolerance: 0.05,
        ..SearchOptions::default()
    };

    let report = ResFinderCore::search(target, &options)?;

    println!("Best {} matches for {} ohms:", report.series, target);
    for m in &report.results {
        let parts: Vec<String> = m.resistors.iter().map(|r| format_resistance(*r)).collect();
        println!(
            "  {:<8} {:<14} nominal {:>10.2}  score {:.3e}",
            m.config.as_str(),
            parts.join(", "),
            m.nominal,
            m.score
        );
    }
    Ok(())
}
