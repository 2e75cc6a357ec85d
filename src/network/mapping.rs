//! Technology-mapping contracts.
//!
//! A mapping associates subsets of nodes with implementation cells for
//! downstream synthesis. Each cell is identified by its root node; the
//! mapping algorithms themselves live outside this layer.

use super::base::NetworkHandles;
use crate::function::TruthTableLike;

/// Whether any mapping is currently stored.
pub trait HasMapping: NetworkHandles {
    fn has_mapping(&self) -> bool;
}

/// Whether a node is the root of a mapped cell.
pub trait IsCellRoot: NetworkHandles {
    fn is_cell_root(&self, n: Self::Node) -> bool;
}

/// Removes the entire mapping.
pub trait ClearMapping: NetworkHandles {
    fn clear_mapping(&mut self);
}

/// Number of mapped cells.
pub trait NumCells: NetworkHandles {
    fn num_cells(&self) -> usize;
}

/// Maps `n` as a cell root over the given leaf nodes.
pub trait AddToMapping: NetworkHandles {
    fn add_to_mapping<I>(&mut self, n: Self::Node, leaves: I)
    where
        I: IntoIterator<Item = Self::Node>;
}

/// Removes the cell rooted at `n` from the mapping.
pub trait RemoveFromMapping: NetworkHandles {
    fn remove_from_mapping(&mut self, n: Self::Node);
}

/// Function descriptor of the cell rooted at `n`, over its leaves in
/// order.
pub trait CellFunction: NetworkHandles {
    /// Function representation this network reports for cells.
    type Function: TruthTableLike;

    fn cell_function(&self, n: Self::Node) -> Self::Function;
}

/// Stores the function descriptor of the cell rooted at `n`.
pub trait SetCellFunction: NetworkHandles {
    /// Function representation this network accepts for cells.
    type Function: TruthTableLike;

    fn set_cell_function(&mut self, n: Self::Node, function: Self::Function);
}

/// Enumerates the leaf nodes of the cell rooted at `n`.
pub trait ForEachCellFanin: NetworkHandles {
    fn foreach_cell_fanin<F>(&self, n: Self::Node, f: F)
    where
        F: FnMut(Self::Node, usize);
}
