//! Shape contract for node function descriptors.
//!
//! Truth-table representation and Boolean algebra live outside this crate.
//! Operations that exchange a function descriptor (`create_node`,
//! `node_function`, `cell_function`, `set_cell_function`) fix only the
//! *shape* of that descriptor through [`TruthTableLike`]; any encoding that
//! can answer these questions qualifies.

/// A truth-table-like function descriptor.
///
/// Deliberately minimal: variable count, bit count, and single-bit lookup.
/// Nothing here performs or verifies Boolean algebra.
pub trait TruthTableLike {
    /// Number of input variables of the function.
    fn num_vars(&self) -> u32;

    /// Number of rows in the table, i.e. `2^num_vars()`.
    fn num_bits(&self) -> u64 {
        1u64 << self.num_vars()
    }

    /// Output value of the row at `index`.
    ///
    /// Implementations may panic when `index >= num_bits()`.
    fn bit(&self, index: u64) -> bool;
}
