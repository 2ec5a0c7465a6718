//! End-to-end run: read, decode, validate, augment, write.
//!
//! The source and sink paths come from [`RunConfig`]; nothing is read from or
//! written to a fixed location.

use crate::builder::config_builder;
use crate::document::AutomatonDoc;
use crate::error::{Error, NfaResult};
use crate::transform::{augment, AugmentedAutomaton};
use crate::validator::validate;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default input file name used by the command-line tool.
pub const DEFAULT_INPUT: &str = "DFA1.json";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Where to read the automaton document and where to write the result.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RunConfig {
    /// Path to the JSON automaton document.
    pub input: PathBuf,

    /// Path of the rendered star automaton (default: "output.txt").
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: DEFAULT_OUTPUT.into(),
        }
    }
}

config_builder! {
    /// Builder for [`RunConfig`]; `input` is required.
    RunConfig => RunConfigBuilder {
        required { input: PathBuf }
        optional { output: PathBuf }
    }
}

impl From<PathBuf> for RunConfig {
    fn from(input: PathBuf) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }
}

impl From<&str> for RunConfig {
    fn from(input: &str) -> Self {
        Self {
            input: PathBuf::from(input),
            ..Default::default()
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Name given to the synthesized start state.
    pub fresh_state: String,

    /// Number of states in the written automaton.
    pub states: usize,

    /// Number of transitions in the written automaton.
    pub transitions: usize,

    /// Where the result was written.
    pub output: PathBuf,
}

/// Read, validate and augment the document at `input` without writing
/// anything.
pub fn load_augmented(input: &Path) -> NfaResult<AugmentedAutomaton> {
    let json = std::fs::read_to_string(input).map_err(|source| Error::SourceUnavailable {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = json.len(), "Read automaton document");

    let doc = AutomatonDoc::from_json_str(&json)?;

    if let Err(violation) = validate(&doc) {
        warn!(path = %input.display(), %violation, "Automaton document rejected");
        return Err(violation.into());
    }

    Ok(augment(&doc))
}

/// Render the star automaton of the document at `input` as text.
pub fn render_file(input: &Path) -> NfaResult<String> {
    Ok(load_augmented(input)?.render())
}

/// Run the whole pipeline described by `config`.
///
/// The output file is only created once the document has passed validation.
/// It is written to a temporary file next to the destination and moved into
/// place at the end, so a failed run never leaves a partial output behind.
pub fn run(config: &RunConfig) -> NfaResult<RunReport> {
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        "Building star automaton"
    );

    let star = load_augmented(&config.input)?;

    let dir = match config.output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".nfa_star_")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    star.write_to(BufWriter::new(tmp.as_file_mut()))?;
    tmp.persist(&config.output).map_err(|e| Error::Io(e.error))?;

    info!(
        output = %config.output.display(),
        fresh_state = %star.start,
        "Wrote star automaton"
    );

    Ok(RunReport {
        fresh_state: star.start,
        states: star.states.len(),
        transitions: star.transitions.len(),
        output: config.output.clone(),
    })
}
