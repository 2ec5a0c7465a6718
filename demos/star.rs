//! Example: decode, validate and render a built-in automaton.
//!
//! Run with: cargo run --example star

use nfa_star::*;

const DOCUMENT: &str = r#"{
    "States": ["q0", "q1", "q2"],
    "Alphabet": ["a", "b"],
    "Transitions": [
        ["q0", "a", ["q1"]],
        ["q1", "b", ["q1", "q2"]],
        ["q2", "a", []]
    ],
    "Start State": ["q0"],
    "Accept States": ["q2"]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let doc = AutomatonDoc::from_json_str(DOCUMENT)?;

    match validate(&doc) {
        Ok(()) => println!("Document is well-formed."),
        Err(violation) => {
            println!("Document rejected: {violation}");
            return Ok(());
        }
    }

    let star = augment(&doc);
    println!("New start state: {}", star.start);
    println!();
    print!("{}", star.render());

    Ok(())
}
