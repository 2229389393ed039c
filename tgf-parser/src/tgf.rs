//! TGF parsing pipeline
//!
//!     The grammar is line-oriented and has exactly two sections:
//!
//!         file      := node_line* '#' edge_line*
//!         node_line := node_id WS+ [node_name]
//!         edge_line := from_id WS+ to_id WS+ [edge_label]
//!
//!     A simple example with 2 nodes and 1 edge:
//!
//!         1 Alice
//!         2 Bob
//!         #
//!         2 1 hello
//!
//!     Parsing is a single forward pass. Each raw line is classified by
//!     [`parsing::line_classification`] into an empty line, the section
//!     separator, a node record or an edge record, and the two-state machine
//!     in [`parsing`] feeds the records into a [`model::TgfModel`]. Edge
//!     endpoints are never validated against the node section; dangling
//!     references are legal and flow through to the converters untouched.
//!
//!     [`leveling`] derives an integer hierarchy level per node from the
//!     edge list. It is deliberately a single O(E) pass in edge insertion
//!     order, not a fixed-point computation; see the module docs for the
//!     consequences.

pub mod leveling;
pub mod model;
pub mod parsing;
