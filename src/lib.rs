//! nfa-star: validate a JSON finite-automaton description and emit its
//! Kleene-star construction.
//!
//! The pipeline has two stages:
//!
//! 1. **Validation**: [`validate`] checks an [`AutomatonDoc`] against a fixed
//!    list of well-formedness rules and reports the first [`Violation`].
//! 2. **Transformation**: [`augment`] adds a fresh accepting start state and
//!    epsilon moves back to the original start, and the resulting
//!    [`AugmentedAutomaton`] is rendered in a fixed text layout.
//!
//! [`run`] ties both stages to a source file and an output file.
//!
//! # Quick Start
//!
//! ```
//! use nfa_star::{transform_and_render, validate, AutomatonDoc};
//!
//! let doc = AutomatonDoc::from_json_str(r#"{
//!     "States": ["q0", "q1"],
//!     "Alphabet": ["a"],
//!     "Transitions": [["q0", "a", ["q1"]]],
//!     "Start State": ["q0"],
//!     "Accept States": ["q1"]
//! }"#)?;
//!
//! validate(&doc)?;
//! let text = transform_and_render(&doc);
//! assert!(text.starts_with(r#"States: "q0", "q1", "Q_new""#));
//! # Ok::<(), nfa_star::Error>(())
//! ```

mod builder;
pub mod document;
pub mod error;
pub mod runner;
pub mod transform;
pub mod validator;

// Re-export core types for convenience
pub use document::{AutomatonDoc, Transition};
pub use error::{BuilderError, Error, NfaResult, SchemaError, Violation};
pub use runner::{load_augmented, render_file, run, RunConfig, RunConfigBuilder, RunReport};
pub use transform::{augment, fresh_state_name, transform_and_render, AugmentedAutomaton, EPSILON};
pub use validator::validate;
