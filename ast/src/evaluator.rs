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

use crate::{Assignment, Expression};

/// Evaluates `expr` under `assignment` using the classical truth
/// tables: `Implies(l, r)` is `¬l ∨ r`, `Iff(l, r)` is `l == r`, and
/// `Xor(l, r)` is `l != r`.
pub fn evaluate(expr: &Expression, assignment: &Assignment) -> bool {
    match expr {
        Expression::Var(name) => assignment.get(name),
        Expression::Not(inner) => !evaluate(inner, assignment),
        Expression::And(l, r) => evaluate(l, assignment) && evaluate(r, assignment),
        Expression::Or(l, r) => evaluate(l, assignment) || evaluate(r, assignment),
        Expression::Xor(l, r) => evaluate(l, assignment) != evaluate(r, assignment),
        Expression::Implies(l, r) => !evaluate(l, assignment) || evaluate(r, assignment),
        Expression::Iff(l, r) => evaluate(l, assignment) == evaluate(r, assignment),
    }
}
