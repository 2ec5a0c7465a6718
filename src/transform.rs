//! Kleene-star construction over a validated automaton document.
//!
//! Adds a fresh start state that is also accepting, plus epsilon moves from
//! every accept state and from the fresh state back to the original start:
//!
//! ```text
//!   Q_new --e--> q0 ... q_acc --e--> q0
//! ```
//!
//! The result is rendered once in a fixed, human-readable layout. It is not
//! meant to be parsed back.

use crate::document::{AutomatonDoc, Transition};
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Symbol used for empty-string transitions.
pub const EPSILON: &str = "e";

/// Preferred name for the synthesized start state.
pub const FRESH_STATE: &str = "Q_new";

/// Name tried when [`FRESH_STATE`] is already taken. Further collisions get a
/// numeric suffix (`Q_newStart1`, `Q_newStart2`, ...).
pub const FRESH_STATE_FALLBACK: &str = "Q_newStart";

const INDENT: &str = "    ";

/// The automaton produced by [`augment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedAutomaton {
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub transitions: Vec<Transition>,
    pub start: String,
    pub accepts: Vec<String>,
}

/// Pick a state name that does not occur in `states`.
pub fn fresh_state_name(states: &[String]) -> String {
    let taken = |name: &str| states.iter().any(|s| s == name);

    if !taken(FRESH_STATE) {
        return FRESH_STATE.to_string();
    }
    if !taken(FRESH_STATE_FALLBACK) {
        return FRESH_STATE_FALLBACK.to_string();
    }
    let mut n = 1usize;
    loop {
        let name = format!("{FRESH_STATE_FALLBACK}{n}");
        if !taken(&name) {
            return name;
        }
        n += 1;
    }
}

/// Build the star automaton for `doc`.
///
/// `doc` must already have passed [`crate::validate`]; in particular it must
/// declare exactly one start state. If it does not, the original start is
/// taken to be the first listed entry (or the empty string when there is
/// none) rather than panicking.
pub fn augment(doc: &AutomatonDoc) -> AugmentedAutomaton {
    let fresh = fresh_state_name(&doc.states);
    let start = doc.start.first().cloned().unwrap_or_default();

    let mut states = doc.states.clone();
    states.push(fresh.clone());

    let mut alphabet = doc.alphabet.clone();
    if !alphabet.iter().any(|s| s == EPSILON) {
        alphabet.push(EPSILON.to_string());
    }

    let mut transitions = doc.transitions.clone();
    transitions.extend(
        doc.accepts
            .iter()
            .chain(std::iter::once(&fresh))
            .map(|from| Transition::new(from.as_str(), EPSILON, [start.as_str()])),
    );

    let mut accepts = doc.accepts.clone();
    accepts.push(fresh.clone());

    debug!(
        fresh = %fresh,
        original_start = %start,
        added_transitions = doc.accepts.len() + 1,
        "Built star automaton"
    );

    AugmentedAutomaton {
        states,
        alphabet,
        transitions,
        start: fresh,
        accepts,
    }
}

/// Augment `doc` and render it as text.
pub fn transform_and_render(doc: &AutomatonDoc) -> String {
    augment(doc).render()
}

impl AugmentedAutomaton {
    /// The rendered document, one entry per output line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.transitions.len() + 5);
        lines.push(format!("States: {}", quoted(&self.states, '"')));
        lines.push(format!("Alphabet: {}", quoted(&self.alphabet, '\'')));
        lines.push("Transitions: ".to_string());
        lines.extend(self.transitions.iter().map(|t| format!("{INDENT}{t}")));
        lines.push(format!("Start State: \"{}\"", self.start));
        lines.push(format!("Accept States: {}", quoted(&self.accepts, '"')));
        lines
    }

    /// The rendered document as a single string, newline-terminated.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write the rendered document to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

impl fmt::Display for AugmentedAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn quoted(items: &[String], quote: char) -> String {
    items
        .iter()
        .map(|item| format!("{quote}{item}{quote}"))
        .collect::<Vec<_>>()
        .join(", ")
}
