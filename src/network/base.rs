//! Minimal structural requirements a type must meet before it can be
//! treated as a network, plus the topological-order marker.
//!
//! Each requirement is a separate trait so the composite admission gate
//! ([`is_network_type!`](crate::is_network_type)) can report exactly which
//! combination holds, and so partial stubs can declare their handle types
//! without committing to the rest.

/// Carrier for the two handle types every operation signature names.
///
/// `Node` identifies a vertex (gate, primary input, or constant);
/// `Signal` identifies a directed, possibly complemented reference to a
/// node's output. Conforming networks additionally provide
/// `Signal: From<Node>`: every node has a canonical, non-complemented
/// signal. That constructibility is checked by the composite gate rather
/// than required here.
pub trait NetworkHandles {
    type Node;
    type Signal;
}

/// Shorthand for the node handle of `N`.
pub type NodeOf<N> = <N as NetworkHandles>::Node;

/// Shorthand for the signal handle of `N`.
pub type SignalOf<N> = <N as NetworkHandles>::Signal;

/// Declares the backing storage type. Existence only; no shape is imposed
/// on it by this layer.
pub trait NetworkStorage {
    type Storage;
}

/// Declares the largest fanin a single gate of the network may have.
pub trait MaxFaninSize {
    const MAX_FANIN_SIZE: u32;
}

/// Declares the smallest fanin a single gate of the network may have.
pub trait MinFaninSize {
    const MIN_FANIN_SIZE: u32;
}

/// Promise that every enumeration the network produces already respects
/// dependency order: no element references a later-enumerated element as an
/// input. Consumers rely on it to skip redundant ordering passes.
///
/// Purely structural: nothing in this layer verifies the promise at
/// runtime. Absence of the impl means "not sorted"; see
/// [`is_topologically_sorted!`](crate::is_topologically_sorted).
pub trait TopologicalOrder {
    const IS_TOPOLOGICALLY_SORTED: bool;
}
