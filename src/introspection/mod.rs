//! Compile-time capability introspection.
//!
//! [`queries`](self) holds the predicate bank (`has_*!`,
//! [`is_network_type!`](crate::is_network_type),
//! [`is_topologically_sorted!`](crate::is_topologically_sorted),
//! [`has_compute!`](crate::has_compute)); `assert` holds the build-failure
//! surface ([`assert_network_type!`](crate::assert_network_type),
//! [`require_capability!`](crate::require_capability)). All macros live at
//! the crate root.

mod assert;
mod queries;

#[cfg(test)]
mod tests {
    use crate::function::TruthTableLike;
    use crate::network::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Nd(usize);
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Sg(usize);

    impl From<Nd> for Sg {
        fn from(n: Nd) -> Self {
            Sg(n.0 << 1)
        }
    }

    /// A signal type with no conversion from `Nd`.
    #[derive(Debug, Clone, Copy)]
    #[allow(dead_code)]
    struct DetachedSg(usize);

    struct Table;
    impl TruthTableLike for Table {
        fn num_vars(&self) -> u32 {
            0
        }
        fn bit(&self, _index: u64) -> bool {
            false
        }
    }

    // ---- scenario: one constructor and one lookup, nothing else ----------

    struct AndOnlyNetwork;

    impl NetworkHandles for AndOnlyNetwork {
        type Node = Nd;
        type Signal = Sg;
    }
    impl CreateAnd for AndOnlyNetwork {
        fn create_and(&mut self, a: Sg, _b: Sg) -> Sg {
            a
        }
    }
    impl GetNode for AndOnlyNetwork {
        fn get_node(&self, f: Sg) -> Nd {
            Nd(f.0 >> 1)
        }
    }

    #[test]
    fn implementing_one_operation_implies_nothing_else() {
        assert!(crate::has_create_and!(AndOnlyNetwork));
        assert!(crate::has_get_node!(AndOnlyNetwork));
        assert!(!crate::has_create_or!(AndOnlyNetwork));
        assert!(!crate::has_foreach_node!(AndOnlyNetwork));
        // Storage and fanin bounds are absent.
        assert!(!crate::is_network_type!(AndOnlyNetwork));
    }

    // ---- scenario: structurally complete, operationally empty ------------

    struct BareNetwork;

    impl NetworkHandles for BareNetwork {
        type Node = Nd;
        type Signal = Sg;
    }
    impl NetworkStorage for BareNetwork {
        type Storage = ();
    }
    impl MaxFaninSize for BareNetwork {
        const MAX_FANIN_SIZE: u32 = 2;
    }
    impl MinFaninSize for BareNetwork {
        const MIN_FANIN_SIZE: u32 = 2;
    }

    #[test]
    fn structural_conformance_grants_no_operation() {
        assert!(crate::is_network_type!(BareNetwork));

        assert!(!crate::has_get_node!(BareNetwork));
        assert!(!crate::has_make_signal!(BareNetwork));
        assert!(!crate::has_node_to_index!(BareNetwork));
        assert!(!crate::has_index_to_node!(BareNetwork));
        assert!(!crate::has_get_constant!(BareNetwork));
        assert!(!crate::has_create_pi!(BareNetwork));
        assert!(!crate::has_create_po!(BareNetwork));
        assert!(!crate::has_create_buf!(BareNetwork));
        assert!(!crate::has_create_not!(BareNetwork));
        assert!(!crate::has_create_and!(BareNetwork));
        assert!(!crate::has_create_nand!(BareNetwork));
        assert!(!crate::has_create_or!(BareNetwork));
        assert!(!crate::has_create_nor!(BareNetwork));
        assert!(!crate::has_create_lt!(BareNetwork));
        assert!(!crate::has_create_le!(BareNetwork));
        assert!(!crate::has_create_gt!(BareNetwork));
        assert!(!crate::has_create_ge!(BareNetwork));
        assert!(!crate::has_create_xor!(BareNetwork));
        assert!(!crate::has_create_xnor!(BareNetwork));
        assert!(!crate::has_create_maj!(BareNetwork));
        assert!(!crate::has_create_ite!(BareNetwork));
        assert!(!crate::has_create_node!(BareNetwork));
        assert!(!crate::has_clone_node!(BareNetwork));
        assert!(!crate::has_size!(BareNetwork));
        assert!(!crate::has_num_pis!(BareNetwork));
        assert!(!crate::has_num_pos!(BareNetwork));
        assert!(!crate::has_num_gates!(BareNetwork));
        assert!(!crate::has_fanin_size!(BareNetwork));
        assert!(!crate::has_fanout_size!(BareNetwork));
        assert!(!crate::has_depth!(BareNetwork));
        assert!(!crate::has_level!(BareNetwork));
        assert!(!crate::has_is_constant!(BareNetwork));
        assert!(!crate::has_is_pi!(BareNetwork));
        assert!(!crate::has_is_maj!(BareNetwork));
        assert!(!crate::has_is_ite!(BareNetwork));
        assert!(!crate::has_node_function!(BareNetwork));
        assert!(!crate::has_is_complemented!(BareNetwork));
        assert!(!crate::has_constant_value!(BareNetwork));
        assert!(!crate::has_substitute_node!(BareNetwork));
        assert!(!crate::has_foreach_node!(BareNetwork));
        assert!(!crate::has_foreach_pi!(BareNetwork));
        assert!(!crate::has_foreach_po!(BareNetwork));
        assert!(!crate::has_foreach_gate!(BareNetwork));
        assert!(!crate::has_foreach_fanin!(BareNetwork));
        assert!(!crate::has_foreach_parent!(BareNetwork));
        assert!(!crate::has_has_mapping!(BareNetwork));
        assert!(!crate::has_is_cell_root!(BareNetwork));
        assert!(!crate::has_clear_mapping!(BareNetwork));
        assert!(!crate::has_num_cells!(BareNetwork));
        assert!(!crate::has_add_to_mapping!(BareNetwork));
        assert!(!crate::has_remove_from_mapping!(BareNetwork));
        assert!(!crate::has_cell_function!(BareNetwork));
        assert!(!crate::has_set_cell_function!(BareNetwork));
        assert!(!crate::has_foreach_cell_fanin!(BareNetwork));
        assert!(!crate::has_clear_values!(BareNetwork));
        assert!(!crate::has_value!(BareNetwork));
        assert!(!crate::has_set_value!(BareNetwork));
        assert!(!crate::has_incr_value!(BareNetwork));
        assert!(!crate::has_decr_value!(BareNetwork));
        assert!(!crate::has_clear_visited!(BareNetwork));
        assert!(!crate::has_visited!(BareNetwork));
        assert!(!crate::has_set_visited!(BareNetwork));
        assert!(!crate::has_update!(BareNetwork));
        assert!(!crate::has_compute!(BareNetwork, bool));
    }

    // ---- structural single-omission variants ------------------------------

    struct NoCanonicalSignal;
    impl NetworkHandles for NoCanonicalSignal {
        type Node = Nd;
        type Signal = DetachedSg;
    }
    impl NetworkStorage for NoCanonicalSignal {
        type Storage = ();
    }
    impl MaxFaninSize for NoCanonicalSignal {
        const MAX_FANIN_SIZE: u32 = 2;
    }
    impl MinFaninSize for NoCanonicalSignal {
        const MIN_FANIN_SIZE: u32 = 2;
    }

    struct NoStorage;
    impl NetworkHandles for NoStorage {
        type Node = Nd;
        type Signal = Sg;
    }
    impl MaxFaninSize for NoStorage {
        const MAX_FANIN_SIZE: u32 = 2;
    }
    impl MinFaninSize for NoStorage {
        const MIN_FANIN_SIZE: u32 = 2;
    }

    struct NoMaxBound;
    impl NetworkHandles for NoMaxBound {
        type Node = Nd;
        type Signal = Sg;
    }
    impl NetworkStorage for NoMaxBound {
        type Storage = ();
    }
    impl MinFaninSize for NoMaxBound {
        const MIN_FANIN_SIZE: u32 = 2;
    }

    struct NoMinBound;
    impl NetworkHandles for NoMinBound {
        type Node = Nd;
        type Signal = Sg;
    }
    impl NetworkStorage for NoMinBound {
        type Storage = ();
    }
    impl MaxFaninSize for NoMinBound {
        const MAX_FANIN_SIZE: u32 = 2;
    }

    #[test]
    fn any_single_structural_omission_fails_the_gate() {
        assert!(!crate::is_network_type!(NoCanonicalSignal));
        assert!(!crate::is_network_type!(NoStorage));
        assert!(!crate::is_network_type!(NoMaxBound));
        assert!(!crate::is_network_type!(NoMinBound));
    }

    // ---- topological-order marker ----------------------------------------

    struct SortedNetwork;
    impl TopologicalOrder for SortedNetwork {
        const IS_TOPOLOGICALLY_SORTED: bool = true;
    }

    struct UnsortedNetwork;
    impl TopologicalOrder for UnsortedNetwork {
        const IS_TOPOLOGICALLY_SORTED: bool = false;
    }

    #[test]
    fn marker_reflects_the_declared_constant_and_defaults_to_false() {
        assert!(crate::is_topologically_sorted!(SortedNetwork));
        assert!(!crate::is_topologically_sorted!(UnsortedNetwork));
        // No declaration at all.
        assert!(!crate::is_topologically_sorted!(BareNetwork));
    }

    // ---- negative match: same names, wrong shapes -------------------------

    struct MismatchedShapes;
    impl NetworkHandles for MismatchedShapes {
        type Node = Nd;
        type Signal = Sg;
    }
    #[allow(dead_code)]
    impl MismatchedShapes {
        // Inherent methods are not contract impls; no predicate may report
        // them, whatever their names.
        fn create_and(&mut self, a: Sg) -> Sg {
            a
        }
        fn get_constant(&self) -> bool {
            true
        }
        fn size(&self) -> u64 {
            0
        }
    }

    #[test]
    fn mismatched_inherent_methods_do_not_satisfy_contracts() {
        assert!(!crate::has_create_and!(MismatchedShapes));
        assert!(!crate::has_get_constant!(MismatchedShapes));
        assert!(!crate::has_size!(MismatchedShapes));
    }

    // ---- compute is per value type ----------------------------------------

    struct BoolSimulator;
    impl NetworkHandles for BoolSimulator {
        type Node = Nd;
        type Signal = Sg;
    }
    impl Compute<bool> for BoolSimulator {
        fn compute<I>(&self, _n: Nd, fanin_values: I) -> bool
        where
            I: Iterator<Item = bool>,
        {
            fanin_values.fold(true, |acc, v| acc & v)
        }
    }

    #[test]
    fn compute_capability_is_independent_per_value_type() {
        assert!(crate::has_compute!(BoolSimulator, bool));
        assert!(!crate::has_compute!(BoolSimulator, u64));
        assert!(!crate::has_compute!(BareNetwork, bool));
    }

    // ---- full coverage: every contract implemented ------------------------

    struct Omni;

    impl NetworkHandles for Omni {
        type Node = Nd;
        type Signal = Sg;
    }
    impl NetworkStorage for Omni {
        type Storage = ();
    }
    impl MaxFaninSize for Omni {
        const MAX_FANIN_SIZE: u32 = 3;
    }
    impl MinFaninSize for Omni {
        const MIN_FANIN_SIZE: u32 = 1;
    }

    impl GetNode for Omni {
        fn get_node(&self, f: Sg) -> Nd {
            Nd(f.0 >> 1)
        }
    }
    impl MakeSignal for Omni {
        fn make_signal(&self, n: Nd) -> Sg {
            Sg::from(n)
        }
    }
    impl NodeToIndex for Omni {
        fn node_to_index(&self, n: Nd) -> usize {
            n.0
        }
    }
    impl IndexToNode for Omni {
        fn index_to_node(&self, index: usize) -> Nd {
            Nd(index)
        }
    }
    impl GetConstant for Omni {
        fn get_constant(&self, value: bool) -> Sg {
            Sg(value as usize)
        }
    }
    impl CreatePi for Omni {
        fn create_pi(&mut self, _name: Option<&str>) -> Sg {
            Sg(0)
        }
    }
    impl CreatePo for Omni {
        fn create_po(&mut self, _f: Sg, _name: Option<&str>) {}
    }
    impl CreateBuf for Omni {
        fn create_buf(&mut self, a: Sg) -> Sg {
            a
        }
    }
    impl CreateNot for Omni {
        fn create_not(&mut self, a: Sg) -> Sg {
            Sg(a.0 ^ 1)
        }
    }
    impl CreateAnd for Omni {
        fn create_and(&mut self, a: Sg, _b: Sg) -> Sg {
            a
        }
    }
    impl CreateNand for Omni {
        fn create_nand(&mut self, a: Sg, _b: Sg) -> Sg {
            a
        }
    }
    impl CreateOr for Omni {
        fn create_or(&mut self, a: Sg, _b: Sg) -> Sg {
            a
        }
    }
    impl CreateNor for Omni {
        fn create_nor(&mut self, a: Sg, _b: Sg) -> Sg {
            a
        }
    }
    impl CreateLt for Omni {
        fn create_lt(&mut self, a: Sg, _b: Sg) -> Sg {
            a
        }
    }
    impl CreateLe for Omni {
        fn create_le(&mut self, a: Sg, _b: Sg) -> Sg {
            a
        }
    }
    impl CreateGt for Omni {
        fn create_gt(&mut self, a: Sg, _b: Sg) -> Sg {
            a
        }
    }
    impl CreateGe for Omni {
        fn create_ge(&mut self, a: Sg, _b: Sg) -> Sg {
            a
        }
    }
    impl CreateXor for Omni {
        fn create_xor(&mut self, a: Sg, _b: Sg) -> Sg {
            a
        }
    }
    impl CreateXnor for Omni {
        fn create_xnor(&mut self, a: Sg, _b: Sg) -> Sg {
            a
        }
    }
    impl CreateMaj for Omni {
        fn create_maj(&mut self, a: Sg, _b: Sg, _c: Sg) -> Sg {
            a
        }
    }
    impl CreateIte for Omni {
        fn create_ite(&mut self, a: Sg, _b: Sg, _c: Sg) -> Sg {
            a
        }
    }
    impl CreateNode for Omni {
        type Function = Table;
        fn create_node(&mut self, _children: Vec<Sg>, _function: Table) -> Sg {
            Sg(0)
        }
    }
    impl CloneNode for Omni {
        fn clone_node(&mut self, _source: &Self, _n: Nd, _children: Vec<Sg>) -> Sg {
            Sg(0)
        }
    }
    impl Size for Omni {
        fn size(&self) -> usize {
            0
        }
    }
    impl NumPis for Omni {
        fn num_pis(&self) -> usize {
            0
        }
    }
    impl NumPos for Omni {
        fn num_pos(&self) -> usize {
            0
        }
    }
    impl NumGates for Omni {
        fn num_gates(&self) -> usize {
            0
        }
    }
    impl FaninSize for Omni {
        fn fanin_size(&self, _n: Nd) -> usize {
            0
        }
    }
    impl FanoutSize for Omni {
        fn fanout_size(&self, _n: Nd) -> usize {
            0
        }
    }
    impl Depth for Omni {
        fn depth(&self) -> usize {
            0
        }
    }
    impl Level for Omni {
        fn level(&self, _n: Nd) -> usize {
            0
        }
    }
    impl IsConstant for Omni {
        fn is_constant(&self, _n: Nd) -> bool {
            false
        }
    }
    impl IsPi for Omni {
        fn is_pi(&self, _n: Nd) -> bool {
            false
        }
    }
    impl IsMaj for Omni {
        fn is_maj(&self, _n: Nd) -> bool {
            false
        }
    }
    impl IsIte for Omni {
        fn is_ite(&self, _n: Nd) -> bool {
            false
        }
    }
    impl NodeFunction for Omni {
        type Function = Table;
        fn node_function(&self, _n: Nd) -> Table {
            Table
        }
    }
    impl IsComplemented for Omni {
        fn is_complemented(&self, f: Sg) -> bool {
            f.0 & 1 == 1
        }
    }
    impl ConstantValue for Omni {
        fn constant_value(&self, _n: Nd) -> bool {
            false
        }
    }
    impl SubstituteNode for Omni {
        fn substitute_node(&mut self, _n: Nd, _new_signal: Sg) {}
    }
    impl ForEachNode for Omni {
        fn foreach_node<F>(&self, _f: F)
        where
            F: FnMut(Nd, usize),
        {
        }
    }
    impl ForEachPi for Omni {
        fn foreach_pi<F>(&self, _f: F)
        where
            F: FnMut(Nd, usize),
        {
        }
    }
    impl ForEachPo for Omni {
        fn foreach_po<F>(&self, _f: F)
        where
            F: FnMut(Sg, usize),
        {
        }
    }
    impl ForEachGate for Omni {
        fn foreach_gate<F>(&self, _f: F)
        where
            F: FnMut(Nd, usize),
        {
        }
    }
    impl ForEachFanin for Omni {
        fn foreach_fanin<F>(&self, _n: Nd, _f: F)
        where
            F: FnMut(Sg, usize),
        {
        }
    }
    impl ForEachParent for Omni {
        fn foreach_parent<F>(&self, _n: Nd, _f: F)
        where
            F: FnMut(Nd, usize),
        {
        }
    }
    impl HasMapping for Omni {
        fn has_mapping(&self) -> bool {
            false
        }
    }
    impl IsCellRoot for Omni {
        fn is_cell_root(&self, _n: Nd) -> bool {
            false
        }
    }
    impl ClearMapping for Omni {
        fn clear_mapping(&mut self) {}
    }
    impl NumCells for Omni {
        fn num_cells(&self) -> usize {
            0
        }
    }
    impl AddToMapping for Omni {
        fn add_to_mapping<I>(&mut self, _n: Nd, _leaves: I)
        where
            I: IntoIterator<Item = Nd>,
        {
        }
    }
    impl RemoveFromMapping for Omni {
        fn remove_from_mapping(&mut self, _n: Nd) {}
    }
    impl CellFunction for Omni {
        type Function = Table;
        fn cell_function(&self, _n: Nd) -> Table {
            Table
        }
    }
    impl SetCellFunction for Omni {
        type Function = Table;
        fn set_cell_function(&mut self, _n: Nd, _function: Table) {}
    }
    impl ForEachCellFanin for Omni {
        fn foreach_cell_fanin<F>(&self, _n: Nd, _f: F)
        where
            F: FnMut(Nd, usize),
        {
        }
    }
    impl ClearValues for Omni {
        fn clear_values(&mut self) {}
    }
    impl Value for Omni {
        fn value(&self, _n: Nd) -> u32 {
            0
        }
    }
    impl SetValue for Omni {
        fn set_value(&mut self, _n: Nd, _value: u32) {}
    }
    impl IncrValue for Omni {
        fn incr_value(&mut self, _n: Nd) -> u32 {
            0
        }
    }
    impl DecrValue for Omni {
        fn decr_value(&mut self, _n: Nd) -> u32 {
            0
        }
    }
    impl ClearVisited for Omni {
        fn clear_visited(&mut self) {}
    }
    impl Visited for Omni {
        fn visited(&self, _n: Nd) -> u32 {
            0
        }
    }
    impl SetVisited for Omni {
        fn set_visited(&mut self, _n: Nd, _mark: u32) {}
    }
    impl Update for Omni {
        fn update(&mut self) {}
    }
    impl Compute<bool> for Omni {
        fn compute<I>(&self, _n: Nd, fanin_values: I) -> bool
        where
            I: Iterator<Item = bool>,
        {
            fanin_values.fold(false, |acc, v| acc | v)
        }
    }

    /// Drift guard: one assertion per catalog entry, with the catalog
    /// length pinned so a new entry cannot land without a predicate and a
    /// line here.
    #[test]
    fn every_cataloged_operation_has_a_satisfied_predicate() {
        assert_eq!(crate::catalog::CATALOG.len(), 64);

        assert!(crate::is_network_type!(Omni));

        assert!(crate::has_get_node!(Omni));
        assert!(crate::has_make_signal!(Omni));
        assert!(crate::has_node_to_index!(Omni));
        assert!(crate::has_index_to_node!(Omni));
        assert!(crate::has_get_constant!(Omni));
        assert!(crate::has_create_pi!(Omni));
        assert!(crate::has_create_po!(Omni));
        assert!(crate::has_create_buf!(Omni));
        assert!(crate::has_create_not!(Omni));
        assert!(crate::has_create_and!(Omni));
        assert!(crate::has_create_nand!(Omni));
        assert!(crate::has_create_or!(Omni));
        assert!(crate::has_create_nor!(Omni));
        assert!(crate::has_create_lt!(Omni));
        assert!(crate::has_create_le!(Omni));
        assert!(crate::has_create_gt!(Omni));
        assert!(crate::has_create_ge!(Omni));
        assert!(crate::has_create_xor!(Omni));
        assert!(crate::has_create_xnor!(Omni));
        assert!(crate::has_create_maj!(Omni));
        assert!(crate::has_create_ite!(Omni));
        assert!(crate::has_create_node!(Omni));
        assert!(crate::has_clone_node!(Omni));
        assert!(crate::has_size!(Omni));
        assert!(crate::has_num_pis!(Omni));
        assert!(crate::has_num_pos!(Omni));
        assert!(crate::has_num_gates!(Omni));
        assert!(crate::has_fanin_size!(Omni));
        assert!(crate::has_fanout_size!(Omni));
        assert!(crate::has_depth!(Omni));
        assert!(crate::has_level!(Omni));
        assert!(crate::has_is_constant!(Omni));
        assert!(crate::has_is_pi!(Omni));
        assert!(crate::has_is_maj!(Omni));
        assert!(crate::has_is_ite!(Omni));
        assert!(crate::has_node_function!(Omni));
        assert!(crate::has_is_complemented!(Omni));
        assert!(crate::has_constant_value!(Omni));
        assert!(crate::has_substitute_node!(Omni));
        assert!(crate::has_foreach_node!(Omni));
        assert!(crate::has_foreach_pi!(Omni));
        assert!(crate::has_foreach_po!(Omni));
        assert!(crate::has_foreach_gate!(Omni));
        assert!(crate::has_foreach_fanin!(Omni));
        assert!(crate::has_foreach_parent!(Omni));
        assert!(crate::has_has_mapping!(Omni));
        assert!(crate::has_is_cell_root!(Omni));
        assert!(crate::has_clear_mapping!(Omni));
        assert!(crate::has_num_cells!(Omni));
        assert!(crate::has_add_to_mapping!(Omni));
        assert!(crate::has_remove_from_mapping!(Omni));
        assert!(crate::has_cell_function!(Omni));
        assert!(crate::has_set_cell_function!(Omni));
        assert!(crate::has_foreach_cell_fanin!(Omni));
        assert!(crate::has_clear_values!(Omni));
        assert!(crate::has_value!(Omni));
        assert!(crate::has_set_value!(Omni));
        assert!(crate::has_incr_value!(Omni));
        assert!(crate::has_decr_value!(Omni));
        assert!(crate::has_clear_visited!(Omni));
        assert!(crate::has_visited!(Omni));
        assert!(crate::has_set_visited!(Omni));
        assert!(crate::has_update!(Omni));
        assert!(crate::has_compute!(Omni, bool));

        // Opting in to everything still does not declare an enumeration
        // order promise.
        assert!(!crate::is_topologically_sorted!(Omni));
    }

    /// Predicates are usable in const context; static branching needs no
    /// instance and leaves no runtime trace.
    #[test]
    fn predicates_evaluate_in_const_context() {
        const GATE: bool = crate::has_create_and!(AndOnlyNetwork);
        const NET: bool = crate::is_network_type!(BareNetwork);
        const SORTED: bool = crate::is_topologically_sorted!(SortedNetwork);
        assert!(GATE && NET && SORTED);
    }
}
