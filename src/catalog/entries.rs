//! The fixed contract catalog.
//!
//! One entry per cataloged operation, grouped and ordered as the network
//! interface presents them. The catalog is immutable static data: entries
//! are only ever added, and adding one never changes what an existing
//! predicate reports.

use super::contract::{CatalogError, ContractGroup, OperationContract, ParamKind, ReturnKind};
use super::contract::{ContractGroup as G, ParamKind as P, ReturnKind as R};

const fn op(
    name: &'static str,
    group: ContractGroup,
    params: &'static [ParamKind],
    returns: ReturnKind,
    mutates: bool,
) -> OperationContract {
    OperationContract {
        name,
        group,
        params,
        returns,
        mutates,
    }
}

/// The canonical contract catalog.
pub static CATALOG: &[OperationContract] = &[
    // identity conversions
    op("get_node", G::IdentityConversion, &[P::Signal], R::Node, false),
    op("make_signal", G::IdentityConversion, &[P::Node], R::Signal, false),
    op("node_to_index", G::IdentityConversion, &[P::Node], R::Count, false),
    op("index_to_node", G::IdentityConversion, &[P::Index], R::Node, false),
    // constant / IO construction
    op("get_constant", G::ConstantIo, &[P::Bool], R::Signal, false),
    op("create_pi", G::ConstantIo, &[P::OptionalName], R::Signal, true),
    op("create_po", G::ConstantIo, &[P::Signal, P::OptionalName], R::Unit, true),
    // primitive gate construction
    op("create_buf", G::GateConstruction, &[P::Signal], R::Signal, true),
    op("create_not", G::GateConstruction, &[P::Signal], R::Signal, true),
    op("create_and", G::GateConstruction, &[P::Signal, P::Signal], R::Signal, true),
    op("create_nand", G::GateConstruction, &[P::Signal, P::Signal], R::Signal, true),
    op("create_or", G::GateConstruction, &[P::Signal, P::Signal], R::Signal, true),
    op("create_nor", G::GateConstruction, &[P::Signal, P::Signal], R::Signal, true),
    op("create_lt", G::GateConstruction, &[P::Signal, P::Signal], R::Signal, true),
    op("create_le", G::GateConstruction, &[P::Signal, P::Signal], R::Signal, true),
    op("create_gt", G::GateConstruction, &[P::Signal, P::Signal], R::Signal, true),
    op("create_ge", G::GateConstruction, &[P::Signal, P::Signal], R::Signal, true),
    op("create_xor", G::GateConstruction, &[P::Signal, P::Signal], R::Signal, true),
    op("create_xnor", G::GateConstruction, &[P::Signal, P::Signal], R::Signal, true),
    op("create_maj", G::GateConstruction, &[P::Signal, P::Signal, P::Signal], R::Signal, true),
    op("create_ite", G::GateConstruction, &[P::Signal, P::Signal, P::Signal], R::Signal, true),
    op("create_node", G::GateConstruction, &[P::SignalList, P::FunctionDescriptor], R::Signal, true),
    // cloning
    op("clone_node", G::Cloning, &[P::SourceNetwork, P::Node, P::SignalList], R::Signal, true),
    // structural queries
    op("size", G::StructuralQuery, &[], R::Count, false),
    op("num_pis", G::StructuralQuery, &[], R::Count, false),
    op("num_pos", G::StructuralQuery, &[], R::Count, false),
    op("num_gates", G::StructuralQuery, &[], R::Count, false),
    op("fanin_size", G::StructuralQuery, &[P::Node], R::Count, false),
    op("fanout_size", G::StructuralQuery, &[P::Node], R::Count, false),
    op("depth", G::StructuralQuery, &[], R::Count, false),
    op("level", G::StructuralQuery, &[P::Node], R::Count, false),
    op("is_constant", G::StructuralQuery, &[P::Node], R::Bool, false),
    op("is_pi", G::StructuralQuery, &[P::Node], R::Bool, false),
    op("is_maj", G::StructuralQuery, &[P::Node], R::Bool, false),
    op("is_ite", G::StructuralQuery, &[P::Node], R::Bool, false),
    op("node_function", G::StructuralQuery, &[P::Node], R::FunctionDescriptor, false),
    op("is_complemented", G::StructuralQuery, &[P::Signal], R::Bool, false),
    op("constant_value", G::StructuralQuery, &[P::Node], R::Bool, false),
    op("substitute_node", G::StructuralQuery, &[P::Node, P::Signal], R::Unit, true),
    // iteration
    op("foreach_node", G::Iteration, &[P::NodeCallback], R::Unit, false),
    op("foreach_pi", G::Iteration, &[P::NodeCallback], R::Unit, false),
    op("foreach_po", G::Iteration, &[P::SignalCallback], R::Unit, false),
    op("foreach_gate", G::Iteration, &[P::NodeCallback], R::Unit, false),
    op("foreach_fanin", G::Iteration, &[P::Node, P::SignalCallback], R::Unit, false),
    op("foreach_parent", G::Iteration, &[P::Node, P::NodeCallback], R::Unit, false),
    // technology mapping
    op("has_mapping", G::TechnologyMapping, &[], R::Bool, false),
    op("is_cell_root", G::TechnologyMapping, &[P::Node], R::Bool, false),
    op("clear_mapping", G::TechnologyMapping, &[], R::Unit, true),
    op("num_cells", G::TechnologyMapping, &[], R::Count, false),
    op("add_to_mapping", G::TechnologyMapping, &[P::Node, P::NodeList], R::Unit, true),
    op("remove_from_mapping", G::TechnologyMapping, &[P::Node], R::Unit, true),
    op("cell_function", G::TechnologyMapping, &[P::Node], R::FunctionDescriptor, false),
    op("set_cell_function", G::TechnologyMapping, &[P::Node, P::FunctionDescriptor], R::Unit, true),
    op("foreach_cell_fanin", G::TechnologyMapping, &[P::Node, P::NodeCallback], R::Unit, false),
    // traversal bookkeeping
    op("clear_values", G::TraversalBookkeeping, &[], R::Unit, true),
    op("value", G::TraversalBookkeeping, &[P::Node], R::Counter, false),
    op("set_value", G::TraversalBookkeeping, &[P::Node, P::Counter], R::Unit, true),
    op("incr_value", G::TraversalBookkeeping, &[P::Node], R::Counter, true),
    op("decr_value", G::TraversalBookkeeping, &[P::Node], R::Counter, true),
    op("clear_visited", G::TraversalBookkeeping, &[], R::Unit, true),
    op("visited", G::TraversalBookkeeping, &[P::Node], R::Counter, false),
    op("set_visited", G::TraversalBookkeeping, &[P::Node, P::Counter], R::Unit, true),
    // post-mutation hook
    op("update", G::PostMutationHook, &[], R::Unit, true),
    // generic compute
    op("compute", G::GenericCompute, &[P::Node, P::FaninValues], R::ComputedValue, false),
];

/// Looks up a contract by operation name.
pub fn contract(name: &str) -> Result<&'static OperationContract, CatalogError> {
    CATALOG
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| CatalogError::UnknownOperation(name.to_string()))
}

/// All contracts of one group, in catalog order.
pub fn contracts_in(group: ContractGroup) -> impl Iterator<Item = &'static OperationContract> {
    CATALOG.iter().filter(move |c| c.group == group)
}

/// Serializes the whole catalog to JSON for external tooling.
pub fn export_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(CATALOG)
}
