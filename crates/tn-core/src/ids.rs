//! Dense node index used by the graph arena.
//!
//! Identifiers in the public API are strings; internally every node is
//! addressed by a `NodeId` assigned in insertion order so the solver's hot
//! loop indexes `Vec`s instead of hashing strings.

use std::fmt;

use crate::CoreError;

/// Index of a node in `NetworkGraph` storage.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel meaning "no valid node", used for "no predecessor".
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for NodeId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Fails for indices that do not fit in `u32` or that would equal
/// [`NodeId::INVALID`].
impl TryFrom<usize> for NodeId {
    type Error = CoreError;
    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n)
            .ok()
            .map(NodeId)
            .filter(|id| id.is_valid())
            .ok_or(CoreError::IndexOverflow(n))
    }
}
