//! The canonical contract catalog: immutable descriptors of every
//! operation a network type may implement, plus lookup and export.

mod contract;
mod entries;

pub use contract::{CatalogError, ContractGroup, OperationContract, ParamKind, ReturnKind};
pub use entries::{contract, contracts_in, export_json, CATALOG};
