//! # tgf-parser
//!
//! A parser for the trivial graph format (TGF).
//!
//! TGF is a two-section, line-oriented graph description: node lines, a `#`
//! separator, then edge lines. This crate turns such text into a
//! [`TgfModel`](tgf::model::TgfModel) and derives the hierarchy levels that
//! outline-style renderers consume.

pub mod tgf;

pub use tgf::leveling::{calculate_node_levels, LevelMap, ROOT_ID};
pub use tgf::model::{TgfEdge, TgfModel, TgfNode};
pub use tgf::parsing::{ParseError, TgfParser};
