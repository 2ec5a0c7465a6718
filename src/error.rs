//! Typed errors for nfa-star.
//!
//! Every failure class is terminal: the run either renders the augmented
//! automaton or reports exactly one of these and writes nothing.

use crate::document::Transition;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for nfa-star operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input document could not be read.
    #[error("Failed to read automaton document {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not JSON at all.
    #[error("Error parsing input: {0}")]
    ParseMalformed(#[from] serde_json::Error),

    /// The input is JSON but does not follow the automaton schema.
    #[error("Tags in input file either missing or incorrectly named: {0}")]
    Schema(#[from] SchemaError),

    /// The document is well-formed JSON but describes an invalid automaton.
    #[error("Invalid input: {0}")]
    Violation(#[from] Violation),

    /// Invalid run configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] BuilderError),

    /// IO error while producing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The document does not have the shape of an automaton description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// The top-level JSON value is not an object.
    #[error("expected a JSON object, got: {found}")]
    NotAnObject { found: String },

    /// A required key is absent.
    #[error("missing field '{field}'")]
    MissingField { field: &'static str },

    /// A required key holds a value of the wrong shape.
    #[error("field '{field}' has the wrong shape: {reason}")]
    WrongShape { field: &'static str, reason: String },
}

/// A well-formedness rule the automaton breaks.
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Violation {
    /// The document does not declare exactly one start state.
    #[error("Incorrect number of start states (found {found})")]
    WrongStartCount { found: usize },

    /// The start state is not a declared state.
    #[error("Start state {state} not in set of states")]
    StartNotInStates { state: String },

    /// An accept state is not a declared state.
    #[error("{state} in Accept States not in set of states")]
    AcceptNotInStates { state: String },

    /// A state name appears twice.
    #[error("Input contains repeated state names: {state} is a duplicate")]
    DuplicateStates { state: String },

    /// An alphabet symbol appears twice.
    #[error("Input contains repeated alphabet characters: {symbol} is a duplicate")]
    DuplicateAlphabet { symbol: String },

    /// A transition appears twice.
    #[error("Input contains repeated transitions: {transition} is a duplicate")]
    DuplicateTransitions { transition: Transition },

    /// An accept state appears twice.
    #[error("Input contains repeated accept state names: {state} is a duplicate")]
    DuplicateAccepts { state: String },

    /// A transition leaves an undeclared state.
    #[error("{transition}, {state} not in set of states")]
    TransitionFromInvalid { transition: Transition, state: String },

    /// A transition reads a symbol outside the alphabet.
    #[error("{transition}, {symbol} not in alphabet")]
    TransitionSymbolInvalid { transition: Transition, symbol: String },

    /// A transition targets an undeclared state.
    #[error("{transition}, {state} not in set of states")]
    TransitionToInvalid { transition: Transition, state: String },
}

/// Error from a configuration builder.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuilderError {
    /// A required field was not set before `build()`.
    #[error("{builder}: missing required field '{field}'")]
    MissingRequiredField {
        builder: &'static str,
        field: &'static str,
    },
}

/// Result type alias using nfa-star's Error.
pub type NfaResult<T> = std::result::Result<T, Error>;
