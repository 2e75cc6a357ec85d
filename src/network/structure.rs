//! Structural query contracts: sizes, node classification, handle
//! conversions, and in-place substitution.

use super::base::NetworkHandles;
use crate::function::TruthTableLike;

/// Total number of nodes, constants and primary inputs included.
pub trait Size: NetworkHandles {
    fn size(&self) -> usize;
}

/// Number of primary inputs.
pub trait NumPis: NetworkHandles {
    fn num_pis(&self) -> usize;
}

/// Number of primary outputs.
pub trait NumPos: NetworkHandles {
    fn num_pos(&self) -> usize;
}

/// Number of gates, excluding constants and primary inputs.
pub trait NumGates: NetworkHandles {
    fn num_gates(&self) -> usize;
}

/// Number of fanins of a node.
pub trait FaninSize: NetworkHandles {
    fn fanin_size(&self, n: Self::Node) -> usize;
}

/// Number of nodes (and outputs) a node drives.
pub trait FanoutSize: NetworkHandles {
    fn fanout_size(&self, n: Self::Node) -> usize;
}

/// Length of the longest path from any primary input to any primary
/// output.
pub trait Depth: NetworkHandles {
    fn depth(&self) -> usize;
}

/// Level of a node: length of the longest path from any primary input.
pub trait Level: NetworkHandles {
    fn level(&self, n: Self::Node) -> usize;
}

macro_rules! node_predicate_contract {
    ($(#[$doc:meta])* $name:ident, $method:ident) => {
        $(#[$doc])*
        pub trait $name: NetworkHandles {
            fn $method(&self, n: Self::Node) -> bool;
        }
    };
}

node_predicate_contract!(
    /// Whether a node is a constant.
    IsConstant,
    is_constant
);
node_predicate_contract!(
    /// Whether a node is a primary input.
    IsPi,
    is_pi
);
node_predicate_contract!(
    /// Whether a node is a majority gate.
    IsMaj,
    is_maj
);
node_predicate_contract!(
    /// Whether a node is an if-then-else gate.
    IsIte,
    is_ite
);

/// Function descriptor of a gate, over its fanins in order.
pub trait NodeFunction: NetworkHandles {
    /// Function representation this network reports.
    type Function: TruthTableLike;

    fn node_function(&self, n: Self::Node) -> Self::Function;
}

/// Whether a signal references its node's output in complemented polarity.
pub trait IsComplemented: NetworkHandles {
    fn is_complemented(&self, f: Self::Signal) -> bool;
}

/// Value of a constant node.
pub trait ConstantValue: NetworkHandles {
    fn constant_value(&self, n: Self::Node) -> bool;
}

/// Node a signal points at, polarity stripped.
pub trait GetNode: NetworkHandles {
    fn get_node(&self, f: Self::Signal) -> Self::Node;
}

/// Canonical non-complemented signal of a node.
pub trait MakeSignal: NetworkHandles {
    fn make_signal(&self, n: Self::Node) -> Self::Signal;
}

/// Maps a node to its dense index. Indices are contiguous in
/// `0..size()`.
pub trait NodeToIndex: NetworkHandles {
    fn node_to_index(&self, n: Self::Node) -> usize;
}

/// Maps a dense index back to its node.
pub trait IndexToNode: NetworkHandles {
    fn index_to_node(&self, index: usize) -> Self::Node;
}

/// Replaces every reference to `n` with `new_signal`, leaving `n` dangling.
pub trait SubstituteNode: NetworkHandles {
    fn substitute_node(&mut self, n: Self::Node, new_signal: Self::Signal);
}
