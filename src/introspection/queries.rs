//! The capability predicate bank.
//!
//! One query macro per cataloged operation, each expanding to a
//! const-evaluable `bool` that is `true` iff the candidate type implements
//! the operation's contract trait. Queries never execute the operation,
//! never require an instance, and are mutually independent: implementing
//! one operation never changes what another predicate reports.
//!
//! The probe works by shadowing: a blanket trait impl supplies `false` for
//! every type, and a bounded inherent impl supplies `true` exactly when the
//! contract bound holds. Resolution happens at the concrete query site, so
//! the result is usable in `const` items and static assertions.

/// Probe core: `true` iff `$subject` satisfies the trait bound.
#[doc(hidden)]
#[macro_export]
macro_rules! __netcaps_probe {
    ($subject:ty => $($bound:tt)+) => {{
        trait Fallback {
            const VALUE: bool = false;
        }
        impl<T: ?Sized> Fallback for T {}
        struct Probe<T: ?Sized>(::core::marker::PhantomData<T>);
        #[allow(dead_code)]
        impl<T> Probe<T>
        where
            T: ?Sized + $($bound)+,
        {
            const VALUE: bool = true;
        }
        <Probe<$subject>>::VALUE
    }};
}

/// `true` iff `$ntk` meets the minimal admission gate for network types:
/// it declares `Node`/`Signal` handle types with `Signal: From<Node>`, a
/// `Storage` type, and both fanin bounds, all simultaneously.
#[macro_export]
macro_rules! is_network_type {
    ($ntk:ty) => {{
        trait Fallback {
            const VALUE: bool = false;
        }
        impl<T: ?Sized> Fallback for T {}
        struct Probe<T: ?Sized>(::core::marker::PhantomData<T>);
        #[allow(dead_code)]
        impl<T> Probe<T>
        where
            T: $crate::network::NetworkHandles
                + $crate::network::NetworkStorage
                + $crate::network::MaxFaninSize
                + $crate::network::MinFaninSize,
            <T as $crate::network::NetworkHandles>::Signal:
                ::core::convert::From<<T as $crate::network::NetworkHandles>::Node>,
        {
            const VALUE: bool = true;
        }
        <Probe<$ntk>>::VALUE
    }};
}

/// Reads the topological-order promise of `$ntk`: the declared
/// `IS_TOPOLOGICALLY_SORTED` constant when the marker is implemented,
/// `false` when it is absent. Absence is not an error.
#[macro_export]
macro_rules! is_topologically_sorted {
    ($ntk:ty) => {{
        trait Fallback {
            const VALUE: bool = false;
        }
        impl<T: ?Sized> Fallback for T {}
        struct Probe<T: ?Sized>(::core::marker::PhantomData<T>);
        #[allow(dead_code)]
        impl<T> Probe<T>
        where
            T: ?Sized + $crate::network::TopologicalOrder,
        {
            const VALUE: bool =
                <T as $crate::network::TopologicalOrder>::IS_TOPOLOGICALLY_SORTED;
        }
        <Probe<$ntk>>::VALUE
    }};
}

/// `true` iff `$ntk` propagates fanin values of type `$value`:
/// `compute(&self, Node, impl Iterator<Item = V>) -> V`. Distinct value
/// types are independent.
#[macro_export]
macro_rules! has_compute {
    ($ntk:ty, $value:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::Compute<$value>)
    };
}

// --- identity conversions ---------------------------------------------

/// `true` iff `$ntk` implements `get_node(&self, Signal) -> Node`.
#[macro_export]
macro_rules! has_get_node {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::GetNode)
    };
}

/// `true` iff `$ntk` implements `make_signal(&self, Node) -> Signal`.
#[macro_export]
macro_rules! has_make_signal {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::MakeSignal)
    };
}

/// `true` iff `$ntk` implements `node_to_index(&self, Node) -> usize`.
#[macro_export]
macro_rules! has_node_to_index {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::NodeToIndex)
    };
}

/// `true` iff `$ntk` implements `index_to_node(&self, usize) -> Node`.
#[macro_export]
macro_rules! has_index_to_node {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::IndexToNode)
    };
}

// --- constant / IO construction ---------------------------------------

/// `true` iff `$ntk` implements `get_constant(&self, bool) -> Signal`.
#[macro_export]
macro_rules! has_get_constant {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::GetConstant)
    };
}

/// `true` iff `$ntk` implements `create_pi(&mut self, Option<&str>) -> Signal`.
#[macro_export]
macro_rules! has_create_pi {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreatePi)
    };
}

/// `true` iff `$ntk` implements `create_po(&mut self, Signal, Option<&str>)`.
#[macro_export]
macro_rules! has_create_po {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreatePo)
    };
}

// --- primitive gate construction --------------------------------------

/// `true` iff `$ntk` implements `create_buf(&mut self, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_buf {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateBuf)
    };
}

/// `true` iff `$ntk` implements `create_not(&mut self, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_not {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateNot)
    };
}

/// `true` iff `$ntk` implements `create_and(&mut self, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_and {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateAnd)
    };
}

/// `true` iff `$ntk` implements `create_nand(&mut self, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_nand {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateNand)
    };
}

/// `true` iff `$ntk` implements `create_or(&mut self, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_or {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateOr)
    };
}

/// `true` iff `$ntk` implements `create_nor(&mut self, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_nor {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateNor)
    };
}

/// `true` iff `$ntk` implements `create_lt(&mut self, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_lt {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateLt)
    };
}

/// `true` iff `$ntk` implements `create_le(&mut self, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_le {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateLe)
    };
}

/// `true` iff `$ntk` implements `create_gt(&mut self, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_gt {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateGt)
    };
}

/// `true` iff `$ntk` implements `create_ge(&mut self, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_ge {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateGe)
    };
}

/// `true` iff `$ntk` implements `create_xor(&mut self, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_xor {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateXor)
    };
}

/// `true` iff `$ntk` implements `create_xnor(&mut self, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_xnor {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateXnor)
    };
}

/// `true` iff `$ntk` implements `create_maj(&mut self, Signal, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_maj {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateMaj)
    };
}

/// `true` iff `$ntk` implements `create_ite(&mut self, Signal, Signal, Signal) -> Signal`.
#[macro_export]
macro_rules! has_create_ite {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateIte)
    };
}

/// `true` iff `$ntk` implements `create_node(&mut self, Vec<Signal>, Self::Function) -> Signal`.
#[macro_export]
macro_rules! has_create_node {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CreateNode)
    };
}

// --- cloning -----------------------------------------------------------

/// `true` iff `$ntk` implements `clone_node(&mut self, &Self, Node, Vec<Signal>) -> Signal`.
#[macro_export]
macro_rules! has_clone_node {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CloneNode)
    };
}

// --- structural queries ------------------------------------------------

/// `true` iff `$ntk` implements `size(&self) -> usize`.
#[macro_export]
macro_rules! has_size {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::Size)
    };
}

/// `true` iff `$ntk` implements `num_pis(&self) -> usize`.
#[macro_export]
macro_rules! has_num_pis {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::NumPis)
    };
}

/// `true` iff `$ntk` implements `num_pos(&self) -> usize`.
#[macro_export]
macro_rules! has_num_pos {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::NumPos)
    };
}

/// `true` iff `$ntk` implements `num_gates(&self) -> usize`.
#[macro_export]
macro_rules! has_num_gates {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::NumGates)
    };
}

/// `true` iff `$ntk` implements `fanin_size(&self, Node) -> usize`.
#[macro_export]
macro_rules! has_fanin_size {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::FaninSize)
    };
}

/// `true` iff `$ntk` implements `fanout_size(&self, Node) -> usize`.
#[macro_export]
macro_rules! has_fanout_size {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::FanoutSize)
    };
}

/// `true` iff `$ntk` implements `depth(&self) -> usize`.
#[macro_export]
macro_rules! has_depth {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::Depth)
    };
}

/// `true` iff `$ntk` implements `level(&self, Node) -> usize`.
#[macro_export]
macro_rules! has_level {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::Level)
    };
}

/// `true` iff `$ntk` implements `is_constant(&self, Node) -> bool`.
#[macro_export]
macro_rules! has_is_constant {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::IsConstant)
    };
}

/// `true` iff `$ntk` implements `is_pi(&self, Node) -> bool`.
#[macro_export]
macro_rules! has_is_pi {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::IsPi)
    };
}

/// `true` iff `$ntk` implements `is_maj(&self, Node) -> bool`.
#[macro_export]
macro_rules! has_is_maj {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::IsMaj)
    };
}

/// `true` iff `$ntk` implements `is_ite(&self, Node) -> bool`.
#[macro_export]
macro_rules! has_is_ite {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::IsIte)
    };
}

/// `true` iff `$ntk` implements `node_function(&self, Node) -> Self::Function`.
#[macro_export]
macro_rules! has_node_function {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::NodeFunction)
    };
}

/// `true` iff `$ntk` implements `is_complemented(&self, Signal) -> bool`.
#[macro_export]
macro_rules! has_is_complemented {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::IsComplemented)
    };
}

/// `true` iff `$ntk` implements `constant_value(&self, Node) -> bool`.
#[macro_export]
macro_rules! has_constant_value {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::ConstantValue)
    };
}

/// `true` iff `$ntk` implements `substitute_node(&mut self, Node, Signal)`.
#[macro_export]
macro_rules! has_substitute_node {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::SubstituteNode)
    };
}

// --- iteration ---------------------------------------------------------

/// `true` iff `$ntk` implements `foreach_node(&self, impl FnMut(Node, usize))`.
#[macro_export]
macro_rules! has_foreach_node {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::ForEachNode)
    };
}

/// `true` iff `$ntk` implements `foreach_pi(&self, impl FnMut(Node, usize))`.
#[macro_export]
macro_rules! has_foreach_pi {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::ForEachPi)
    };
}

/// `true` iff `$ntk` implements `foreach_po(&self, impl FnMut(Signal, usize))`.
#[macro_export]
macro_rules! has_foreach_po {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::ForEachPo)
    };
}

/// `true` iff `$ntk` implements `foreach_gate(&self, impl FnMut(Node, usize))`.
#[macro_export]
macro_rules! has_foreach_gate {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::ForEachGate)
    };
}

/// `true` iff `$ntk` implements `foreach_fanin(&self, Node, impl FnMut(Signal, usize))`.
#[macro_export]
macro_rules! has_foreach_fanin {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::ForEachFanin)
    };
}

/// `true` iff `$ntk` implements `foreach_parent(&self, Node, impl FnMut(Node, usize))`.
#[macro_export]
macro_rules! has_foreach_parent {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::ForEachParent)
    };
}

// --- technology mapping ------------------------------------------------

/// `true` iff `$ntk` implements `has_mapping(&self) -> bool`.
#[macro_export]
macro_rules! has_has_mapping {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::HasMapping)
    };
}

/// `true` iff `$ntk` implements `is_cell_root(&self, Node) -> bool`.
#[macro_export]
macro_rules! has_is_cell_root {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::IsCellRoot)
    };
}

/// `true` iff `$ntk` implements `clear_mapping(&mut self)`.
#[macro_export]
macro_rules! has_clear_mapping {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::ClearMapping)
    };
}

/// `true` iff `$ntk` implements `num_cells(&self) -> usize`.
#[macro_export]
macro_rules! has_num_cells {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::NumCells)
    };
}

/// `true` iff `$ntk` implements `add_to_mapping(&mut self, Node, impl IntoIterator<Item = Node>)`.
#[macro_export]
macro_rules! has_add_to_mapping {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::AddToMapping)
    };
}

/// `true` iff `$ntk` implements `remove_from_mapping(&mut self, Node)`.
#[macro_export]
macro_rules! has_remove_from_mapping {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::RemoveFromMapping)
    };
}

/// `true` iff `$ntk` implements `cell_function(&self, Node) -> Self::Function`.
#[macro_export]
macro_rules! has_cell_function {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::CellFunction)
    };
}

/// `true` iff `$ntk` implements `set_cell_function(&mut self, Node, Self::Function)`.
#[macro_export]
macro_rules! has_set_cell_function {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::SetCellFunction)
    };
}

/// `true` iff `$ntk` implements `foreach_cell_fanin(&self, Node, impl FnMut(Node, usize))`.
#[macro_export]
macro_rules! has_foreach_cell_fanin {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::ForEachCellFanin)
    };
}

// --- traversal bookkeeping ---------------------------------------------

/// `true` iff `$ntk` implements `clear_values(&mut self)`.
#[macro_export]
macro_rules! has_clear_values {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::ClearValues)
    };
}

/// `true` iff `$ntk` implements `value(&self, Node) -> u32`.
#[macro_export]
macro_rules! has_value {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::Value)
    };
}

/// `true` iff `$ntk` implements `set_value(&mut self, Node, u32)`.
#[macro_export]
macro_rules! has_set_value {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::SetValue)
    };
}

/// `true` iff `$ntk` implements `incr_value(&mut self, Node) -> u32`.
#[macro_export]
macro_rules! has_incr_value {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::IncrValue)
    };
}

/// `true` iff `$ntk` implements `decr_value(&mut self, Node) -> u32`.
#[macro_export]
macro_rules! has_decr_value {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::DecrValue)
    };
}

/// `true` iff `$ntk` implements `clear_visited(&mut self)`.
#[macro_export]
macro_rules! has_clear_visited {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::ClearVisited)
    };
}

/// `true` iff `$ntk` implements `visited(&self, Node) -> u32`.
#[macro_export]
macro_rules! has_visited {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::Visited)
    };
}

/// `true` iff `$ntk` implements `set_visited(&mut self, Node, u32)`.
#[macro_export]
macro_rules! has_set_visited {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::SetVisited)
    };
}

// --- post-mutation hook ------------------------------------------------

/// `true` iff `$ntk` implements `update(&mut self)`.
#[macro_export]
macro_rules! has_update {
    ($ntk:ty) => {
        $crate::__netcaps_probe!($ntk => $crate::network::Update)
    };
}
