//! Well-formedness checks for an automaton document.
//!
//! [`validate`] runs every rule in a fixed order and reports the first one
//! the document breaks. The order is observable: a document with several
//! defects always gets the same diagnostic.

use crate::document::{AutomatonDoc, Transition};
use crate::error::Violation;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

/// Check `doc` against every well-formedness rule.
///
/// Rules, in order:
/// 1. exactly one start state
/// 2. the start state is a declared state
/// 3. every accept state is a declared state
/// 4. no repeated states
/// 5. no repeated alphabet symbols
/// 6. no repeated transitions
/// 7. no repeated accept states
/// 8. every transition leaves a declared state
/// 9. every transition reads an alphabet symbol
/// 10. every transition target is a declared state
///
/// Rules 8 to 10 each scan the whole transition list before the next rule
/// starts.
pub fn validate(doc: &AutomatonDoc) -> Result<(), Violation> {
    let states: HashSet<&str> = doc.states.iter().map(String::as_str).collect();
    let alphabet: HashSet<&str> = doc.alphabet.iter().map(String::as_str).collect();

    let start = doc.start_state().ok_or(Violation::WrongStartCount {
        found: doc.start.len(),
    })?;

    if !states.contains(start) {
        return Err(Violation::StartNotInStates {
            state: start.to_string(),
        });
    }

    if let Some(state) = doc.accepts.iter().find(|s| !states.contains(s.as_str())) {
        return Err(Violation::AcceptNotInStates {
            state: state.clone(),
        });
    }

    if let Some(state) = first_duplicate(&doc.states) {
        return Err(Violation::DuplicateStates {
            state: state.clone(),
        });
    }
    if let Some(symbol) = first_duplicate(&doc.alphabet) {
        return Err(Violation::DuplicateAlphabet {
            symbol: symbol.clone(),
        });
    }
    if let Some(transition) = first_duplicate(&doc.transitions) {
        return Err(Violation::DuplicateTransitions {
            transition: transition.clone(),
        });
    }
    if let Some(state) = first_duplicate(&doc.accepts) {
        return Err(Violation::DuplicateAccepts {
            state: state.clone(),
        });
    }

    check_transitions(&doc.transitions, &states, &alphabet)?;

    debug!(
        states = doc.states.len(),
        symbols = doc.alphabet.len(),
        transitions = doc.transitions.len(),
        "Automaton document is well-formed"
    );
    Ok(())
}

/// First element already seen earlier in `items`, scanning front to back.
fn first_duplicate<T: Eq + Hash>(items: &[T]) -> Option<&T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().find(|item| !seen.insert(*item))
}

fn check_transitions(
    transitions: &[Transition],
    states: &HashSet<&str>,
    alphabet: &HashSet<&str>,
) -> Result<(), Violation> {
    if let Some(t) = transitions.iter().find(|t| !states.contains(t.from.as_str())) {
        return Err(Violation::TransitionFromInvalid {
            transition: t.clone(),
            state: t.from.clone(),
        });
    }

    if let Some(t) = transitions
        .iter()
        .find(|t| !alphabet.contains(t.symbol.as_str()))
    {
        return Err(Violation::TransitionSymbolInvalid {
            transition: t.clone(),
            symbol: t.symbol.clone(),
        });
    }

    for t in transitions {
        if let Some(target) = t.to.iter().find(|s| !states.contains(s.as_str())) {
            return Err(Violation::TransitionToInvalid {
                transition: t.clone(),
                state: target.clone(),
            });
        }
    }

    Ok(())
}
