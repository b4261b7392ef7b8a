// Copyright (C) 2024-2026 The Logic Lang Authors.
// This file is part of the Logic Lang library.

// The Logic Lang library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Logic Lang library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Logic Lang library. If not, see <https://www.gnu.org/licenses/>.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in a propositional-logic formula's abstract syntax tree.
///
/// An `Expression` is a finite, value-owned tree: children are
/// `Box`ed, nothing is shared, and two expressions are the same
/// value iff they are the same tree — the only identity this crate
/// ever needs. `PartialEq`/`Eq` are the *strict*, order-sensitive
/// structural identity used by the sub-expression extractor; the
/// commutativity-aware equality rule detectors need lives in
/// [`crate::structurally_equivalent`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// An atomic propositional variable, e.g. `P`.
    Var(String),
    /// Negation, `¬A`.
    Not(Box<Expression>),
    /// Conjunction, `A∧B`.
    And(Box<Expression>, Box<Expression>),
    /// Disjunction, `A∨B`.
    Or(Box<Expression>, Box<Expression>),
    /// Exclusive or, `A⊕B`.
    Xor(Box<Expression>, Box<Expression>),
    /// Material implication, `A→B`.
    Implies(Box<Expression>, Box<Expression>),
    /// Biconditional, `A↔B`.
    Iff(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Shorthand constructors so call sites in the parser and rule
    /// detectors read like the grammar they build.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn not(inner: Expression) -> Self {
        Self::Not(Box::new(inner))
    }

    pub fn and(l: Expression, r: Expression) -> Self {
        Self::And(Box::new(l), Box::new(r))
    }

    pub fn or(l: Expression, r: Expression) -> Self {
        Self::Or(Box::new(l), Box::new(r))
    }

    pub fn xor(l: Expression, r: Expression) -> Self {
        Self::Xor(Box::new(l), Box::new(r))
    }

    pub fn implies(l: Expression, r: Expression) -> Self {
        Self::Implies(Box::new(l), Box::new(r))
    }

    pub fn iff(l: Expression, r: Expression) -> Self {
        Self::Iff(Box::new(l), Box::new(r))
    }

    /// Returns `true` for compound (non-atomic) nodes.
    pub fn is_compound(&self) -> bool {
        !matches!(self, Expression::Var(_))
    }

    /// AST depth: atoms are `0`, `Not(x)` is `1 + depth(x)`, a binary
    /// node is `1 + max(depth(left), depth(right))`. Used to order
    /// sub-expressions for the truth-table analyser.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Var(_) => 0,
            Expression::Not(inner) => 1 + inner.depth(),
            Expression::And(l, r)
            | Expression::Or(l, r)
            | Expression::Xor(l, r)
            | Expression::Implies(l, r)
            | Expression::Iff(l, r) => 1 + l.depth().max(r.depth()),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::to_string(self))
    }
}
