//! Node level mapping
//!
//!     Derives an integer hierarchy level per node for the outline-style
//!     converters. A synthetic root sits at level 0 and every real node
//!     starts at level 1; a single forward pass over the edges in insertion
//!     order then lifts `to` to `level(from) + 1` whenever that is larger.
//!
//!     This is deliberately not a longest-path or fixed-point computation:
//!     each edge is visited exactly once, in model order. If a later edge
//!     raises the level of some node, earlier edges out of that node are
//!     not revisited, so out-of-order edge lists and cycles can end up with
//!     smaller levels than a full relaxation would produce. The outline
//!     outputs depend on exactly this ordering-sensitive result for
//!     reproducibility, so keep the single pass as-is.

use crate::tgf::model::TgfModel;
use std::collections::HashMap;

/// Synthetic root id used by the level mapping; treated as reserved and
/// not expected to appear as a real node id.
pub const ROOT_ID: &str = "@root@";

/// Insertion-ordered mapping from node id to hierarchy level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMap {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl LevelMap {
    fn insert(&mut self, id: &str, level: u32) {
        match self.index.get(id) {
            Some(&i) => self.entries[i].1 = level,
            None => {
                self.index.insert(id.to_string(), self.entries.len());
                self.entries.push((id.to_string(), level));
            }
        }
    }

    /// Level of the given id, if present.
    pub fn level(&self, id: &str) -> Option<u32> {
        self.index.get(id).map(|&i| self.entries[i].1)
    }

    /// Entries in insertion order (root first, then nodes in model order).
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(id, level)| (id.as_str(), *level))
    }

    /// Entries sorted ascending by level; ties keep insertion order.
    pub fn by_level(&self) -> Vec<(&str, u32)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by_key(|&(_, level)| level);
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute the level map for a model.
///
/// Edges whose `from` or `to` id does not appear in the model are skipped
/// by this pass (the model itself keeps them untouched).
pub fn calculate_node_levels(model: &TgfModel) -> LevelMap {
    let mut levels = LevelMap::default();
    levels.insert(ROOT_ID, 0);
    for node in model.nodes() {
        levels.insert(&node.id, 1);
    }
    for edge in model.edges() {
        let (Some(from_level), Some(to_level)) = (levels.level(&edge.from), levels.level(&edge.to))
        else {
            continue;
        };
        let candidate = from_level + 1;
        if candidate > to_level {
            levels.insert(&edge.to, candidate);
        }
    }
    levels
}
