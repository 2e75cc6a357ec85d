//! Constant/IO and gate-construction contracts.
//!
//! Constructors take `&mut self` and hand back the signal of the created
//! gate. None of these contracts says anything about *what* the gate
//! computes; only the shape of the operation is fixed here.

use super::base::NetworkHandles;
use crate::function::TruthTableLike;

/// Constant-signal access. `get_constant(false)` and `get_constant(true)`
/// are the network's two constant signals; they may share one node with
/// opposite polarity.
pub trait GetConstant: NetworkHandles {
    fn get_constant(&self, value: bool) -> Self::Signal;
}

/// Primary-input construction.
pub trait CreatePi: NetworkHandles {
    fn create_pi(&mut self, name: Option<&str>) -> Self::Signal;
}

/// Primary-output construction. The driven signal is recorded; outputs have
/// no node of their own.
pub trait CreatePo: NetworkHandles {
    fn create_po(&mut self, f: Self::Signal, name: Option<&str>);
}

macro_rules! unary_gate_contract {
    ($(#[$doc:meta])* $name:ident, $method:ident) => {
        $(#[$doc])*
        pub trait $name: NetworkHandles {
            fn $method(&mut self, a: Self::Signal) -> Self::Signal;
        }
    };
}

macro_rules! binary_gate_contract {
    ($(#[$doc:meta])* $name:ident, $method:ident) => {
        $(#[$doc])*
        pub trait $name: NetworkHandles {
            fn $method(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal;
        }
    };
}

macro_rules! ternary_gate_contract {
    ($(#[$doc:meta])* $name:ident, $method:ident) => {
        $(#[$doc])*
        pub trait $name: NetworkHandles {
            fn $method(
                &mut self,
                a: Self::Signal,
                b: Self::Signal,
                c: Self::Signal,
            ) -> Self::Signal;
        }
    };
}

unary_gate_contract!(
    /// Buffer gate.
    CreateBuf,
    create_buf
);
unary_gate_contract!(
    /// Inverter gate.
    CreateNot,
    create_not
);

binary_gate_contract!(
    /// AND gate.
    CreateAnd,
    create_and
);
binary_gate_contract!(
    /// NAND gate.
    CreateNand,
    create_nand
);
binary_gate_contract!(
    /// OR gate.
    CreateOr,
    create_or
);
binary_gate_contract!(
    /// NOR gate.
    CreateNor,
    create_nor
);
binary_gate_contract!(
    /// Less-than gate (`!a & b`).
    CreateLt,
    create_lt
);
binary_gate_contract!(
    /// Less-or-equal gate (`!a | b`).
    CreateLe,
    create_le
);
binary_gate_contract!(
    /// Greater-than gate (`a & !b`).
    CreateGt,
    create_gt
);
binary_gate_contract!(
    /// Greater-or-equal gate (`a | !b`).
    CreateGe,
    create_ge
);
binary_gate_contract!(
    /// XOR gate.
    CreateXor,
    create_xor
);
binary_gate_contract!(
    /// XNOR gate.
    CreateXnor,
    create_xnor
);

ternary_gate_contract!(
    /// Majority-of-three gate.
    CreateMaj,
    create_maj
);
ternary_gate_contract!(
    /// If-then-else gate (`a ? b : c`).
    CreateIte,
    create_ite
);

/// Generic gate construction from an ordered fanin list and a function
/// descriptor: the fallback every specialized constructor can be lowered
/// to.
pub trait CreateNode: NetworkHandles {
    /// Function representation this network accepts.
    type Function: TruthTableLike;

    fn create_node(
        &mut self,
        children: Vec<Self::Signal>,
        function: Self::Function,
    ) -> Self::Signal;
}

/// Copies a node from another network of the same type, re-expressed over
/// fanin signals already mapped into `self`.
pub trait CloneNode: NetworkHandles {
    fn clone_node(
        &mut self,
        source: &Self,
        n: Self::Node,
        children: Vec<Self::Signal>,
    ) -> Self::Signal;
}
