//! Forwarded operators.
//!
//! Binary operators follow the symmetric rule: with `T` the underlying type
//! and `F` any other type,
//!
//! | declared on `T` | generated on the alias |
//! |---|---|
//! | `T ⊕ T` | `Alias ⊕ Alias`, `Alias ⊕ T` |
//! | `T ⊕ F` | `Alias ⊕ F` |
//! | `F ⊕ T` | `F ⊕ Alias` |
//!
//! `T ⊕ Alias` is never generated. Two aliases of the same `T` would both
//! offer it, and `Alias1 + Alias2` would become ambiguous.

use std::collections::HashSet;

use newtype_codegen::builder::CodeFragment;
use newtype_model::{BinaryOperatorInfo, UnaryOperatorInfo};

use super::{Alias, Block};

pub(super) fn operators(alias: &Alias) -> Vec<Block> {
    let mut seen = HashSet::new();
    let mut blocks = Vec::new();

    for op in alias.d.binary_operators.iter() {
        // Owned by the equality section
        if op.kind.is_equality() {
            continue;
        }
        for (left_alias, right_alias) in binary_forms(op) {
            let left = operand_type(alias, left_alias, &op.left_type);
            let right = operand_type(alias, right_alias, &op.right_type);
            if !seen.insert((op.kind, left.clone(), right.clone())) {
                tracing::debug!(kind = %op.kind, %left, %right, "skipping duplicate operator signature");
                continue;
            }

            let expr = format!(
                "{} {} {}",
                operand(left_alias, "left"),
                op.kind.symbol(),
                operand(right_alias, "right")
            );
            let (returns, body) = result(alias, op.return_is_underlying, &op.return_type, expr);
            blocks.push(alias.attributed(format!(
                "public static {returns} operator {}({left} left, {right} right) => {body};",
                op.kind.symbol()
            )));
        }
    }

    for op in alias.d.unary_operators.iter() {
        if let Some(block) = unary(alias, op) {
            blocks.push(block);
        }
    }

    blocks
}

/// Which operand positions take the alias, per the symmetric rule.
fn binary_forms(op: &BinaryOperatorInfo) -> Vec<(bool, bool)> {
    match (op.left_is_underlying, op.right_is_underlying) {
        (true, true) => vec![(true, true), (true, false)],
        (true, false) => vec![(true, false)],
        (false, true) => vec![(false, true)],
        (false, false) => Vec::new(),
    }
}

fn operand_type(alias: &Alias, is_alias: bool, declared: &str) -> String {
    if is_alias {
        alias.name().to_string()
    } else {
        declared.to_string()
    }
}

fn operand(is_alias: bool, name: &str) -> String {
    if is_alias {
        format!("{name}._value")
    } else {
        name.to_string()
    }
}

/// Return type and body, re-wrapping results of the underlying type.
fn result(alias: &Alias, wraps: bool, return_type: &str, expr: String) -> (String, String) {
    if wraps {
        (alias.name().to_string(), alias.wrap(&expr))
    } else {
        (return_type.to_string(), expr)
    }
}

fn unary(alias: &Alias, op: &UnaryOperatorInfo) -> Option<Block> {
    let n = alias.name();
    let symbol = op.kind.symbol();

    if op.kind.is_step() {
        // `++`/`--` must return the containing type
        if !op.return_is_underlying {
            tracing::debug!(kind = %op.kind, "skipping step operator that does not return the underlying type");
            return None;
        }
        let mut block: Block = alias.method_impl().map(CodeFragment::line).into_iter().collect();
        block.push(CodeFragment::braced(
            format!("public static {n} operator {symbol}({n} value)"),
            vec![
                CodeFragment::line("var tmp = value._value;"),
                CodeFragment::line(format!("tmp{symbol};")),
                CodeFragment::line(format!("return new {n}(tmp);")),
            ],
        ));
        return Some(block);
    }

    let expr = format!("{symbol}value._value");
    let (returns, body) = result(alias, op.return_is_underlying, &op.return_type, expr);
    Some(alias.attributed(format!(
        "public static {returns} operator {symbol}({n} value) => {body};"
    )))
}
