//! Defines the AST for predicate expressions.

use model::core::value::Value;
use serde::{Deserialize, Serialize};

/// A predicate over named columns.
///
/// Identifiers are emitted verbatim and must come from trusted input.
/// Values are never emitted as text; each one is bound through a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// `ident = $n`
    Eq { ident: String, value: Value },

    /// `ident <> $n`
    Neq { ident: String, value: Value },

    /// `ident = ANY($n)`, with `values` bound as one wrapped argument.
    EqAny { ident: String, values: Vec<Value> },

    /// `ident <> ALL($n)`, with `values` bound as one wrapped argument.
    NeqAll { ident: String, values: Vec<Value> },

    /// `ident < $n`
    Lt { ident: String, value: Value },

    /// `ident IS NULL`
    IsNull { ident: String },

    /// `ident IS NOT NULL`
    IsNotNull { ident: String },

    /// Conjunction of the children, in order. Renders `()` when empty.
    And(Vec<Expr>),

    /// Disjunction of the children, in order. Renders `()` when empty.
    Or(Vec<Expr>),
}

/// Operator rendered between an identifier and a single placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Eq,    // =
    NotEq, // <>
    Lt,    // <
}

impl ComparisonOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => " = ",
            ComparisonOp::NotEq => " <> ",
            ComparisonOp::Lt => " < ",
        }
    }
}

/// Operator rendered between an identifier and a wrapped sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    EqAny,  // = ANY
    NeqAll, // <> ALL
}

impl SetOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SetOp::EqAny => " = ANY(",
            SetOp::NeqAll => " <> ALL(",
        }
    }
}

/// Joiner rendered between the children of a logical group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            LogicalOp::And => " AND ",
            LogicalOp::Or => " OR ",
        }
    }
}
