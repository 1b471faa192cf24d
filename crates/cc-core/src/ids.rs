//! Strongly typed, zero-cost identifier wrappers.
//!
//! Every agent lives on exactly one network node and the two indices are
//! equal: `AgentId(i)` sits on `NodeId(i)`.  The `From` conversions make that
//! correspondence explicit at call sites instead of passing raw integers.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in SoA storage.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a node in the contact network.
    pub struct NodeId(u32);
}

impl From<NodeId> for AgentId {
    #[inline(always)]
    fn from(node: NodeId) -> AgentId {
        AgentId(node.0)
    }
}

impl From<AgentId> for NodeId {
    #[inline(always)]
    fn from(agent: AgentId) -> NodeId {
        NodeId(agent.0)
    }
}
