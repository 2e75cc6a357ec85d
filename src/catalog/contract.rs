//! Descriptor types for the canonical contract catalog.
//!
//! A contract is the cataloged shape of one operation: name, ordered
//! parameter kinds, return expectation, and receiver mutability. The
//! descriptors are plain immutable data; the predicate bank in
//! [`introspection`](crate::introspection) is their compile-time
//! projection.

use serde::Serialize;
use smallvec::SmallVec;
use thiserror::Error;

/// Operation families of the network interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContractGroup {
    IdentityConversion,
    ConstantIo,
    GateConstruction,
    Cloning,
    StructuralQuery,
    Iteration,
    TechnologyMapping,
    TraversalBookkeeping,
    PostMutationHook,
    GenericCompute,
}

/// Parameter kinds a contract can declare, excluding the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamKind {
    /// A node handle.
    Node,
    /// A signal handle.
    Signal,
    /// An ordered, owned collection of signals.
    SignalList,
    /// An ordered collection of nodes, taken by iterator.
    NodeList,
    Bool,
    /// A dense node index.
    Index,
    /// A `u32` bookkeeping value.
    Counter,
    /// An optional human-readable name.
    OptionalName,
    /// A truth-table-like function descriptor.
    FunctionDescriptor,
    /// Another network of the same type, borrowed.
    SourceNetwork,
    /// An iterator of fanin values of the compute value type.
    FaninValues,
    /// A `FnMut(Node, usize)` callback, element first, index second.
    NodeCallback,
    /// A `FnMut(Signal, usize)` callback, element first, index second.
    SignalCallback,
}

impl ParamKind {
    /// Rendered type name, as used in signatures and diagnostics.
    pub fn type_name(self) -> &'static str {
        match self {
            ParamKind::Node => "Node",
            ParamKind::Signal => "Signal",
            ParamKind::SignalList => "Vec<Signal>",
            ParamKind::NodeList => "impl IntoIterator<Item = Node>",
            ParamKind::Bool => "bool",
            ParamKind::Index => "usize",
            ParamKind::Counter => "u32",
            ParamKind::OptionalName => "Option<&str>",
            ParamKind::FunctionDescriptor => "Self::Function",
            ParamKind::SourceNetwork => "&Self",
            ParamKind::FaninValues => "impl Iterator<Item = V>",
            ParamKind::NodeCallback => "impl FnMut(Node, usize)",
            ParamKind::SignalCallback => "impl FnMut(Signal, usize)",
        }
    }
}

/// Return expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReturnKind {
    Unit,
    Node,
    Signal,
    Bool,
    /// A `usize` count or index.
    Count,
    /// A `u32` bookkeeping value.
    Counter,
    FunctionDescriptor,
    /// The compute value type `V`.
    ComputedValue,
}

impl ReturnKind {
    /// Rendered type name, as used in signatures and diagnostics.
    pub fn type_name(self) -> &'static str {
        match self {
            ReturnKind::Unit => "()",
            ReturnKind::Node => "Node",
            ReturnKind::Signal => "Signal",
            ReturnKind::Bool => "bool",
            ReturnKind::Count => "usize",
            ReturnKind::Counter => "u32",
            ReturnKind::FunctionDescriptor => "Self::Function",
            ReturnKind::ComputedValue => "V",
        }
    }
}

/// One immutable catalog entry: the single source of truth for the
/// operation's expected shape. Exactly one predicate in the bank consumes
/// each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationContract {
    pub name: &'static str,
    pub group: ContractGroup,
    /// Ordered parameter kinds, excluding the receiver.
    pub params: &'static [ParamKind],
    pub returns: ReturnKind,
    /// Whether the operation takes `&mut self`.
    pub mutates: bool,
}

impl OperationContract {
    /// Renders the expected signature for diagnostics, e.g.
    /// `create_and(&mut self, Signal, Signal) -> Signal`.
    pub fn expected_signature(&self) -> String {
        let mut parts: SmallVec<[&str; 4]> =
            SmallVec::from_slice(&[if self.mutates { "&mut self" } else { "&self" }]);
        for p in self.params {
            parts.push(p.type_name());
        }
        format!(
            "{}({}) -> {}",
            self.name,
            parts.join(", "),
            self.returns.type_name()
        )
    }
}

/// Catalog lookup failures. A predicate evaluating to `false` is never an
/// error; only asking the catalog about an operation it has never defined
/// is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("operation `{0}` is not in the contract catalog")]
    UnknownOperation(String),
}
