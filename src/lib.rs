//! Static capability introspection for polymorphic logic-network types.
//!
//! A network type represents a directed graph of logic gates: vertices are
//! addressed by an opaque `Node` handle, their outputs by a possibly
//! complemented `Signal` handle. Many concrete representations of that idea
//! coexist, and generic algorithms need to know, without executing
//! anything and without runtime type inspection, which operations a given
//! representation supports, so they can select specialized code paths or
//! fail the build early with a readable diagnostic.
//!
//! This crate provides:
//! - a [catalog](catalog) of canonical operation contracts (names, ordered
//!   parameter kinds, return expectations) as immutable static data;
//! - one contract [trait](network) per cataloged operation. A network opts
//!   in to a capability by implementing the trait; there is no registration
//!   step;
//! - one compile-time predicate per contract (`has_<operation>!`), plus the
//!   composite admission gate [`is_network_type!`], the order marker
//!   [`is_topologically_sorted!`], and the value-typed [`has_compute!`].
//!   Every predicate is a const-evaluable `bool` with no runtime trace;
//! - build-failure assertions ([`assert_network_type!`],
//!   [`require_capability!`]) whose diagnostics name the missing operation
//!   and its expected signature;
//! - [iterator guards](guards) constraining generic overloads to iterators
//!   of an exact element type or of truth-table-like descriptors.
//!
//! Predicates test *presence*, never behavior: whether a `create_maj` impl
//! actually computes majority is a different layer's concern.
//!
//! # Example
//!
//! ```
//! use netcaps::network::{CreateAnd, NetworkHandles};
//!
//! #[derive(Clone, Copy)]
//! struct Node(u32);
//! #[derive(Clone, Copy)]
//! struct Signal(u32);
//! impl From<Node> for Signal {
//!     fn from(n: Node) -> Self {
//!         Signal(n.0 << 1)
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Aig {
//!     gates: Vec<(Signal, Signal)>,
//! }
//! impl NetworkHandles for Aig {
//!     type Node = Node;
//!     type Signal = Signal;
//! }
//! impl CreateAnd for Aig {
//!     fn create_and(&mut self, a: Signal, b: Signal) -> Signal {
//!         self.gates.push((a, b));
//!         Signal::from(Node(self.gates.len() as u32))
//!     }
//! }
//!
//! // Queried against the type, not a value.
//! assert!(netcaps::has_create_and!(Aig));
//! assert!(!netcaps::has_create_or!(Aig));
//! assert!(!netcaps::is_network_type!(Aig)); // Storage and fanin bounds absent
//! ```
//!
//! # Conventions
//!
//! - `foreach_*` callbacks take the enumerated element first and a
//!   zero-based positional index second.
//! - `IS_TOPOLOGICALLY_SORTED`, `MAX_FANIN_SIZE`, and `MIN_FANIN_SIZE` are
//!   associated constants, evaluable without constructing an instance.
//! - Predicate names follow `has_<operation>!` for optional capabilities;
//!   the two composite checks keep their bare descriptive names.

pub mod catalog;
pub mod function;
pub mod guards;
pub mod introspection;
pub mod network;

pub use catalog::{
    contract, contracts_in, export_json, CatalogError, ContractGroup, OperationContract,
    ParamKind, ReturnKind, CATALOG,
};
pub use function::TruthTableLike;
pub use guards::{IteratesOver, IteratesOverTruthTable};
pub use network::{
    Compute, MaxFaninSize, MinFaninSize, NetworkHandles, NetworkStorage, NodeOf, SignalOf,
    TopologicalOrder,
};
