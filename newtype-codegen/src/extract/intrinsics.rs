//! Language-defined operators of the well-known primitives.
//!
//! `int` has no `op_Addition` member, yet `a + b` compiles. These tables
//! stand in for the missing declarations so primitive aliases get the same
//! forwarding as types with user-defined operators. `==` and `!=` are left
//! out: equality has its own section.

use newtype_core::PrimitiveKind;
use newtype_model::{BinaryOperatorInfo, OperatorKind, UnaryOperatorInfo};

const ARITHMETIC: [OperatorKind; 5] = [
    OperatorKind::Addition,
    OperatorKind::Subtraction,
    OperatorKind::Multiply,
    OperatorKind::Division,
    OperatorKind::Modulus,
];

const BITWISE: [OperatorKind; 3] = [
    OperatorKind::BitwiseAnd,
    OperatorKind::BitwiseOr,
    OperatorKind::ExclusiveOr,
];

const SHIFTS: [OperatorKind; 2] = [OperatorKind::LeftShift, OperatorKind::RightShift];

/// Intrinsic operator set of one primitive.
#[derive(Debug, Default)]
pub(crate) struct IntrinsicOperators {
    pub binary: Vec<BinaryOperatorInfo>,
    pub unary: Vec<UnaryOperatorInfo>,
}

impl IntrinsicOperators {
    fn binary(&mut self, kind: OperatorKind, this: &str, right: &str, result: &str) {
        self.binary.push(BinaryOperatorInfo {
            kind,
            left_type: this.to_string(),
            right_type: right.to_string(),
            return_type: result.to_string(),
            left_is_underlying: true,
            right_is_underlying: right == this,
            return_is_underlying: result == this,
        });
    }

    fn unary(&mut self, kind: OperatorKind, this: &str, result: &str) {
        self.unary.push(UnaryOperatorInfo {
            kind,
            return_type: result.to_string(),
            return_is_underlying: result == this,
        });
    }
}

/// The operators C# defines for `kind` without declaring them.
pub(crate) fn intrinsic_operators(kind: PrimitiveKind) -> IntrinsicOperators {
    let this = kind.keyword();
    let mut ops = IntrinsicOperators::default();

    match kind {
        k if k.is_integer() => {
            // Narrow integers promote to int before the operator applies
            let result = if k.is_small_integer() { "int" } else { this };
            for op in ARITHMETIC.into_iter().chain(BITWISE) {
                ops.binary(op, this, this, result);
            }
            for op in SHIFTS {
                ops.binary(op, this, "int", result);
            }
            ops.unary(OperatorKind::UnaryPlus, this, result);
            ops.unary(OperatorKind::OnesComplement, this, result);
            match k {
                PrimitiveKind::UInt32 => ops.unary(OperatorKind::UnaryNegation, this, "long"),
                PrimitiveKind::UInt64 => {}
                _ => ops.unary(OperatorKind::UnaryNegation, this, result),
            }
        }
        PrimitiveKind::Single | PrimitiveKind::Double | PrimitiveKind::Decimal => {
            for op in ARITHMETIC {
                ops.binary(op, this, this, this);
            }
            ops.unary(OperatorKind::UnaryPlus, this, this);
            ops.unary(OperatorKind::UnaryNegation, this, this);
        }
        PrimitiveKind::Boolean => {
            for op in BITWISE {
                ops.binary(op, this, this, this);
            }
            ops.unary(OperatorKind::LogicalNot, this, this);
        }
        PrimitiveKind::String => ops.binary(OperatorKind::Addition, this, this, this),
        _ => {}
    }

    ops
}
