//! Binary Remainder
//!
//! This example runs the mod-three automaton over binary strings given on
//! the command line and prints the path through the states.
//!
//! Key concepts:
//! - Folding a symbol sequence through a transition table
//! - Mapping the final state to a domain answer
//! - Empty or non-binary input is rejected
//!
//! Run with: cargo run --example binary_remainder -- 1101 1110 1111

use automata::mod_three::{binary_remainder_traced, digits_from_string};
use automata::State;

fn main() {
    println!("=== Binary Remainder Example ===\n");

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        ["1101", "1110", "01111", "1021", ""]
            .into_iter()
            .map(String::from)
            .collect()
    } else {
        inputs
    };

    for input in &inputs {
        let result = digits_from_string(input).and_then(|bits| binary_remainder_traced(&bits));
        match result {
            Ok((remainder, trace)) => {
                let path: Vec<&str> = trace.get_path().into_iter().map(|s| s.name()).collect();
                println!("{input:>8}  {}  remainder {remainder}", path.join(" -> "));
            }
            Err(e) => println!("{input:>8}  rejected: {e}"),
        }
    }

    println!("\n=== Example Complete ===");
}
