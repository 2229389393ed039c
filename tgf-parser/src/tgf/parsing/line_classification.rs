//! Line Classification
//!
//! Core classification logic for turning a raw input line into a parser
//! token. Classification is context-sensitive: the same content line is a
//! node record in the node section and an edge record in the edge section,
//! so the current [`ParserState`] is an input here.

use crate::tgf::model::{TgfEdge, TgfNode};
use crate::tgf::parsing::ParserState;
use once_cell::sync::Lazy;
use regex::Regex;

/// Splitter for runs of whitespace between record fields.
static FIELD_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lines that equal one of these after trimming are comments.
const COMMENT_MARKERS: [&str; 2] = ["--", "'"];

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineToken {
    /// Blank line or comment marker; does not affect parser state.
    Empty,
    /// A line whose trimmed content starts with `#`.
    SectionMark,
    /// A node record (node section only).
    Node(TgfNode),
    /// An edge record (edge section only).
    Edge(TgfEdge),
}

/// An edge line with fewer than two whitespace-delimited fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line: String,
}

/// Classify a single input line under the given parser state.
pub fn classify_line(state: ParserState, line: &str) -> Result<LineToken, MalformedLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() || COMMENT_MARKERS.contains(&trimmed) {
        return Ok(LineToken::Empty);
    }
    if trimmed.starts_with('#') {
        return Ok(LineToken::SectionMark);
    }
    match state {
        ParserState::Nodes => Ok(LineToken::Node(split_node_line(trimmed))),
        ParserState::Edges => split_edge_line(trimmed).map(LineToken::Edge),
    }
}

/// Split `node_id WS+ [node_name]`; a missing name defaults to empty.
fn split_node_line(trimmed: &str) -> TgfNode {
    let mut fields = FIELD_SEPARATOR.splitn(trimmed, 2);
    let id = fields.next().unwrap_or_default().trim();
    let name = fields.next().unwrap_or_default().trim();
    TgfNode::new(id, name)
}

/// Split `from_id WS+ to_id WS+ [edge_label]`; a missing label defaults to
/// empty, a missing `to` field is malformed.
fn split_edge_line(trimmed: &str) -> Result<TgfEdge, MalformedLine> {
    let mut fields = FIELD_SEPARATOR.splitn(trimmed, 3);
    let from = fields.next().unwrap_or_default().trim();
    let to = match fields.next() {
        Some(to) => to.trim(),
        None => {
            return Err(MalformedLine {
                line: trimmed.to_string(),
            })
        }
    };
    let label = fields.next().unwrap_or_default().trim();
    Ok(TgfEdge::new(from, to, label))
}
