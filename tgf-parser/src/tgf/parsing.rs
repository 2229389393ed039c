//! TGF parser
//!
//!     This module drives the parse: it reads the input line by line, hands
//!     each line to [`line_classification`] and applies the resulting token
//!     to the two-state machine:
//!
//!         Nodes --(`#` line)--> Edges
//!
//!     The initial state is `Nodes` (the grammar always expects a node
//!     section first, even an empty one). Once in `Edges`, further `#`
//!     lines are no-ops; the machine never transitions back. Empty lines
//!     and the comment markers `--` and `'` are skipped in either state.
//!
//!     Malformed edge lines (fewer than two fields) abort the parse with a
//!     line-numbered [`ParseError::MalformedEdge`]. Content is otherwise
//!     never rejected; missing names and labels default to the empty
//!     string, and edge endpoints are not checked against the node section.

pub mod line_classification;

use crate::tgf::model::TgfModel;
use line_classification::{classify_line, LineToken};
use std::fmt;
use std::io::BufRead;

/// The two parsing states of the TGF grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Reading the node section (initial state).
    Nodes,
    /// Reading the edge section; terminal, persists until end of input.
    Edges,
}

/// Errors that can occur while parsing TGF input.
#[derive(Debug)]
pub enum ParseError {
    /// The underlying stream failed.
    Io(std::io::Error),
    /// An edge line had fewer than two whitespace-delimited fields.
    MalformedEdge { line_number: usize, line: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(err) => write!(f, "I/O error while reading TGF input: {}", err),
            ParseError::MalformedEdge { line_number, line } => {
                write!(
                    f,
                    "Malformed edge line {}: expected 'from_id to_id [label]', got \"{}\"",
                    line_number, line
                )
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(err) => Some(err),
            ParseError::MalformedEdge { .. } => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io(err)
    }
}

/// Parser for the trivial graph format.
#[derive(Debug, Default)]
pub struct TgfParser;

impl TgfParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a buffered reader to completion, producing a [`TgfModel`].
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<TgfModel, ParseError> {
        let mut model = TgfModel::new();
        let mut state = ParserState::Nodes;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let token = classify_line(state, &line).map_err(|malformed| {
                ParseError::MalformedEdge {
                    line_number: index + 1,
                    line: malformed.line,
                }
            })?;
            match token {
                LineToken::Empty => {}
                LineToken::SectionMark => {
                    if state == ParserState::Nodes {
                        state = ParserState::Edges;
                    }
                }
                LineToken::Node(node) => model.add_node(node),
                LineToken::Edge(edge) => model.add_edge(edge),
            }
        }
        Ok(model)
    }

    /// Parse already-decoded text.
    pub fn parse_str(&self, source: &str) -> Result<TgfModel, ParseError> {
        self.parse(source.as_bytes())
    }
}
