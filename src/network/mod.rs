//! Operation contracts for network types.
//!
//! One trait per cataloged operation, organized into one module per
//! catalog group. A concrete network opts in to a capability by
//! implementing the trait (there is no registration step) and generic
//! algorithms observe the opt-in through the predicates in
//! [`introspection`](crate::introspection).

mod base;
mod bookkeeping;
mod compute;
mod construction;
mod iteration;
mod mapping;
mod structure;

pub use base::{
    MaxFaninSize, MinFaninSize, NetworkHandles, NetworkStorage, NodeOf, SignalOf,
    TopologicalOrder,
};
pub use bookkeeping::{
    ClearValues, ClearVisited, DecrValue, IncrValue, SetValue, SetVisited, Update, Value, Visited,
};
pub use compute::Compute;
pub use construction::{
    CloneNode, CreateAnd, CreateBuf, CreateGe, CreateGt, CreateIte, CreateLe, CreateLt, CreateMaj,
    CreateNand, CreateNode, CreateNor, CreateNot, CreateOr, CreatePi, CreatePo, CreateXnor,
    CreateXor, GetConstant,
};
pub use iteration::{ForEachFanin, ForEachGate, ForEachNode, ForEachParent, ForEachPi, ForEachPo};
pub use mapping::{
    AddToMapping, CellFunction, ClearMapping, ForEachCellFanin, HasMapping, IsCellRoot, NumCells,
    RemoveFromMapping, SetCellFunction,
};
pub use structure::{
    ConstantValue, Depth, FaninSize, FanoutSize, GetNode, IndexToNode, IsComplemented, IsConstant,
    IsIte, IsMaj, IsPi, Level, MakeSignal, NodeFunction, NodeToIndex, NumGates, NumPis, NumPos,
    Size, SubstituteNode,
};
