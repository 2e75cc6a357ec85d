//! Build-failure assertions over the capability predicates.
//!
//! Consumers that require a capability assert it up front, so an unmet
//! requirement fails the build with a diagnostic naming the missing
//! operation and its contracted signature, instead of the opaque trait
//! resolution error a direct call would produce.

#[doc(hidden)]
#[macro_export]
macro_rules! __netcaps_require {
    ($ntk:ty, $cond:expr, $sig:literal) => {
        const _: () = ::core::assert!(
            $cond,
            ::core::concat!(
                "network type `",
                ::core::stringify!($ntk),
                "` is missing `",
                $sig,
                "`"
            )
        );
    };
}

/// Asserts at compile time that `$ntk` passes
/// [`is_network_type!`](crate::is_network_type); otherwise the build fails
/// naming the structural requirements.
#[macro_export]
macro_rules! assert_network_type {
    ($ntk:ty) => {
        const _: () = ::core::assert!(
            $crate::is_network_type!($ntk),
            ::core::concat!(
                "`",
                ::core::stringify!($ntk),
                "` is not a network type: it must declare Node/Signal handle types with \
                 `Signal: From<Node>`, a `Storage` type, and the \
                 `MAX_FANIN_SIZE`/`MIN_FANIN_SIZE` bounds"
            )
        );
    };
}

/// Asserts at compile time that `$ntk` implements the named cataloged
/// operation; otherwise the build fails with the operation's expected
/// signature.
///
/// The accepted operation names are exactly the catalog's; an unknown name
/// is itself a compile error.
#[macro_export]
macro_rules! require_capability {
    ($ntk:ty, get_node) => {
        $crate::__netcaps_require!($ntk, $crate::has_get_node!($ntk),
            "get_node(&self, Signal) -> Node");
    };
    ($ntk:ty, make_signal) => {
        $crate::__netcaps_require!($ntk, $crate::has_make_signal!($ntk),
            "make_signal(&self, Node) -> Signal");
    };
    ($ntk:ty, node_to_index) => {
        $crate::__netcaps_require!($ntk, $crate::has_node_to_index!($ntk),
            "node_to_index(&self, Node) -> usize");
    };
    ($ntk:ty, index_to_node) => {
        $crate::__netcaps_require!($ntk, $crate::has_index_to_node!($ntk),
            "index_to_node(&self, usize) -> Node");
    };
    ($ntk:ty, get_constant) => {
        $crate::__netcaps_require!($ntk, $crate::has_get_constant!($ntk),
            "get_constant(&self, bool) -> Signal");
    };
    ($ntk:ty, create_pi) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_pi!($ntk),
            "create_pi(&mut self, Option<&str>) -> Signal");
    };
    ($ntk:ty, create_po) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_po!($ntk),
            "create_po(&mut self, Signal, Option<&str>) -> ()");
    };
    ($ntk:ty, create_buf) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_buf!($ntk),
            "create_buf(&mut self, Signal) -> Signal");
    };
    ($ntk:ty, create_not) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_not!($ntk),
            "create_not(&mut self, Signal) -> Signal");
    };
    ($ntk:ty, create_and) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_and!($ntk),
            "create_and(&mut self, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_nand) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_nand!($ntk),
            "create_nand(&mut self, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_or) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_or!($ntk),
            "create_or(&mut self, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_nor) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_nor!($ntk),
            "create_nor(&mut self, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_lt) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_lt!($ntk),
            "create_lt(&mut self, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_le) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_le!($ntk),
            "create_le(&mut self, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_gt) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_gt!($ntk),
            "create_gt(&mut self, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_ge) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_ge!($ntk),
            "create_ge(&mut self, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_xor) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_xor!($ntk),
            "create_xor(&mut self, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_xnor) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_xnor!($ntk),
            "create_xnor(&mut self, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_maj) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_maj!($ntk),
            "create_maj(&mut self, Signal, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_ite) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_ite!($ntk),
            "create_ite(&mut self, Signal, Signal, Signal) -> Signal");
    };
    ($ntk:ty, create_node) => {
        $crate::__netcaps_require!($ntk, $crate::has_create_node!($ntk),
            "create_node(&mut self, Vec<Signal>, Self::Function) -> Signal");
    };
    ($ntk:ty, clone_node) => {
        $crate::__netcaps_require!($ntk, $crate::has_clone_node!($ntk),
            "clone_node(&mut self, &Self, Node, Vec<Signal>) -> Signal");
    };
    ($ntk:ty, size) => {
        $crate::__netcaps_require!($ntk, $crate::has_size!($ntk),
            "size(&self) -> usize");
    };
    ($ntk:ty, num_pis) => {
        $crate::__netcaps_require!($ntk, $crate::has_num_pis!($ntk),
            "num_pis(&self) -> usize");
    };
    ($ntk:ty, num_pos) => {
        $crate::__netcaps_require!($ntk, $crate::has_num_pos!($ntk),
            "num_pos(&self) -> usize");
    };
    ($ntk:ty, num_gates) => {
        $crate::__netcaps_require!($ntk, $crate::has_num_gates!($ntk),
            "num_gates(&self) -> usize");
    };
    ($ntk:ty, fanin_size) => {
        $crate::__netcaps_require!($ntk, $crate::has_fanin_size!($ntk),
            "fanin_size(&self, Node) -> usize");
    };
    ($ntk:ty, fanout_size) => {
        $crate::__netcaps_require!($ntk, $crate::has_fanout_size!($ntk),
            "fanout_size(&self, Node) -> usize");
    };
    ($ntk:ty, depth) => {
        $crate::__netcaps_require!($ntk, $crate::has_depth!($ntk),
            "depth(&self) -> usize");
    };
    ($ntk:ty, level) => {
        $crate::__netcaps_require!($ntk, $crate::has_level!($ntk),
            "level(&self, Node) -> usize");
    };
    ($ntk:ty, is_constant) => {
        $crate::__netcaps_require!($ntk, $crate::has_is_constant!($ntk),
            "is_constant(&self, Node) -> bool");
    };
    ($ntk:ty, is_pi) => {
        $crate::__netcaps_require!($ntk, $crate::has_is_pi!($ntk),
            "is_pi(&self, Node) -> bool");
    };
    ($ntk:ty, is_maj) => {
        $crate::__netcaps_require!($ntk, $crate::has_is_maj!($ntk),
            "is_maj(&self, Node) -> bool");
    };
    ($ntk:ty, is_ite) => {
        $crate::__netcaps_require!($ntk, $crate::has_is_ite!($ntk),
            "is_ite(&self, Node) -> bool");
    };
    ($ntk:ty, node_function) => {
        $crate::__netcaps_require!($ntk, $crate::has_node_function!($ntk),
            "node_function(&self, Node) -> Self::Function");
    };
    ($ntk:ty, is_complemented) => {
        $crate::__netcaps_require!($ntk, $crate::has_is_complemented!($ntk),
            "is_complemented(&self, Signal) -> bool");
    };
    ($ntk:ty, constant_value) => {
        $crate::__netcaps_require!($ntk, $crate::has_constant_value!($ntk),
            "constant_value(&self, Node) -> bool");
    };
    ($ntk:ty, substitute_node) => {
        $crate::__netcaps_require!($ntk, $crate::has_substitute_node!($ntk),
            "substitute_node(&mut self, Node, Signal) -> ()");
    };
    ($ntk:ty, foreach_node) => {
        $crate::__netcaps_require!($ntk, $crate::has_foreach_node!($ntk),
            "foreach_node(&self, impl FnMut(Node, usize)) -> ()");
    };
    ($ntk:ty, foreach_pi) => {
        $crate::__netcaps_require!($ntk, $crate::has_foreach_pi!($ntk),
            "foreach_pi(&self, impl FnMut(Node, usize)) -> ()");
    };
    ($ntk:ty, foreach_po) => {
        $crate::__netcaps_require!($ntk, $crate::has_foreach_po!($ntk),
            "foreach_po(&self, impl FnMut(Signal, usize)) -> ()");
    };
    ($ntk:ty, foreach_gate) => {
        $crate::__netcaps_require!($ntk, $crate::has_foreach_gate!($ntk),
            "foreach_gate(&self, impl FnMut(Node, usize)) -> ()");
    };
    ($ntk:ty, foreach_fanin) => {
        $crate::__netcaps_require!($ntk, $crate::has_foreach_fanin!($ntk),
            "foreach_fanin(&self, Node, impl FnMut(Signal, usize)) -> ()");
    };
    ($ntk:ty, foreach_parent) => {
        $crate::__netcaps_require!($ntk, $crate::has_foreach_parent!($ntk),
            "foreach_parent(&self, Node, impl FnMut(Node, usize)) -> ()");
    };
    ($ntk:ty, has_mapping) => {
        $crate::__netcaps_require!($ntk, $crate::has_has_mapping!($ntk),
            "has_mapping(&self) -> bool");
    };
    ($ntk:ty, is_cell_root) => {
        $crate::__netcaps_require!($ntk, $crate::has_is_cell_root!($ntk),
            "is_cell_root(&self, Node) -> bool");
    };
    ($ntk:ty, clear_mapping) => {
        $crate::__netcaps_require!($ntk, $crate::has_clear_mapping!($ntk),
            "clear_mapping(&mut self) -> ()");
    };
    ($ntk:ty, num_cells) => {
        $crate::__netcaps_require!($ntk, $crate::has_num_cells!($ntk),
            "num_cells(&self) -> usize");
    };
    ($ntk:ty, add_to_mapping) => {
        $crate::__netcaps_require!($ntk, $crate::has_add_to_mapping!($ntk),
            "add_to_mapping(&mut self, Node, impl IntoIterator<Item = Node>) -> ()");
    };
    ($ntk:ty, remove_from_mapping) => {
        $crate::__netcaps_require!($ntk, $crate::has_remove_from_mapping!($ntk),
            "remove_from_mapping(&mut self, Node) -> ()");
    };
    ($ntk:ty, cell_function) => {
        $crate::__netcaps_require!($ntk, $crate::has_cell_function!($ntk),
            "cell_function(&self, Node) -> Self::Function");
    };
    ($ntk:ty, set_cell_function) => {
        $crate::__netcaps_require!($ntk, $crate::has_set_cell_function!($ntk),
            "set_cell_function(&mut self, Node, Self::Function) -> ()");
    };
    ($ntk:ty, foreach_cell_fanin) => {
        $crate::__netcaps_require!($ntk, $crate::has_foreach_cell_fanin!($ntk),
            "foreach_cell_fanin(&self, Node, impl FnMut(Node, usize)) -> ()");
    };
    ($ntk:ty, clear_values) => {
        $crate::__netcaps_require!($ntk, $crate::has_clear_values!($ntk),
            "clear_values(&mut self) -> ()");
    };
    ($ntk:ty, value) => {
        $crate::__netcaps_require!($ntk, $crate::has_value!($ntk),
            "value(&self, Node) -> u32");
    };
    ($ntk:ty, set_value) => {
        $crate::__netcaps_require!($ntk, $crate::has_set_value!($ntk),
            "set_value(&mut self, Node, u32) -> ()");
    };
    ($ntk:ty, incr_value) => {
        $crate::__netcaps_require!($ntk, $crate::has_incr_value!($ntk),
            "incr_value(&mut self, Node) -> u32");
    };
    ($ntk:ty, decr_value) => {
        $crate::__netcaps_require!($ntk, $crate::has_decr_value!($ntk),
            "decr_value(&mut self, Node) -> u32");
    };
    ($ntk:ty, clear_visited) => {
        $crate::__netcaps_require!($ntk, $crate::has_clear_visited!($ntk),
            "clear_visited(&mut self) -> ()");
    };
    ($ntk:ty, visited) => {
        $crate::__netcaps_require!($ntk, $crate::has_visited!($ntk),
            "visited(&self, Node) -> u32");
    };
    ($ntk:ty, set_visited) => {
        $crate::__netcaps_require!($ntk, $crate::has_set_visited!($ntk),
            "set_visited(&mut self, Node, u32) -> ()");
    };
    ($ntk:ty, update) => {
        $crate::__netcaps_require!($ntk, $crate::has_update!($ntk),
            "update(&mut self) -> ()");
    };
    ($ntk:ty, compute, $value:ty) => {
        $crate::__netcaps_require!($ntk, $crate::has_compute!($ntk, $value),
            "compute(&self, Node, impl Iterator<Item = V>) -> V");
    };
    ($ntk:ty, compute) => {
        ::core::compile_error!(
            "`compute` takes a value type: `require_capability!(Ntk, compute, V)`"
        );
    };
    ($ntk:ty, $unknown:ident) => {
        ::core::compile_error!(::core::concat!(
            "`",
            ::core::stringify!($unknown),
            "` is not a cataloged operation"
        ));
    };
}
