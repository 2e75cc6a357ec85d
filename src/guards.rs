//! Iterator value-type guards for generic algorithm overloads.
//!
//! These traits have blanket impls, so any iterator satisfying the
//! underlying bounds implements them automatically. They are zero-cost and
//! only constrain the *element type* of an iterable source, never its
//! size or mutability.

use crate::function::TruthTableLike;

/// Satisfied only by iterators whose element type is exactly `T`.
///
/// Generic overloads name this guard in a `where` clause to reject
/// iterators over any other element type, including reference-qualified
/// variants of `T`.
pub trait IteratesOver<T>: Iterator<Item = T> {}

impl<I, T> IteratesOver<T> for I where I: Iterator<Item = T> {}

/// Satisfied only by iterators whose element type is a truth-table-like
/// function descriptor (see [`TruthTableLike`]).
///
/// `TruthTable` names the element type, so overloads can refer to it
/// without repeating the projection.
pub trait IteratesOverTruthTable: Iterator<Item = Self::TruthTable> {
    type TruthTable: TruthTableLike;
}

impl<I> IteratesOverTruthTable for I
where
    I: Iterator,
    I::Item: TruthTableLike,
{
    type TruthTable = I::Item;
}

/// `true` iff `$iter` is an iterator whose element type is exactly `$item`.
#[macro_export]
macro_rules! iterates_over {
    ($iter:ty, $item:ty) => {
        $crate::__netcaps_probe!($iter => $crate::guards::IteratesOver<$item>)
    };
}

/// `true` iff `$iter` is an iterator whose element type satisfies
/// [`TruthTableLike`](crate::function::TruthTableLike).
#[macro_export]
macro_rules! iterates_over_truth_table {
    ($iter:ty) => {
        $crate::__netcaps_probe!($iter => $crate::guards::IteratesOverTruthTable)
    };
}
