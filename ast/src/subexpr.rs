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

use crate::Expression;

/// Post-order traversal collecting every compound (non-`Var`) node,
/// de-duplicated by structural identity and returned in first-
/// encountered order. Used by the truth-table analyser to build the
/// `per_subexpr` table.
pub fn collect_subexpressions(expr: &Expression) -> Vec<Expression> {
    let mut out = Vec::new();
    walk(expr, &mut out);
    out
}

fn walk(expr: &Expression, out: &mut Vec<Expression>) {
    match expr {
        Expression::Var(_) => {}
        Expression::Not(inner) => {
            walk(inner, out);
            push_unique(out, expr);
        }
        Expression::And(l, r)
        | Expression::Or(l, r)
        | Expression::Xor(l, r)
        | Expression::Implies(l, r)
        | Expression::Iff(l, r) => {
            walk(l, out);
            walk(r, out);
            push_unique(out, expr);
        }
    }
}

fn push_unique(out: &mut Vec<Expression>, expr: &Expression) {
    if !out.iter().any(|e| e == expr) {
        out.push(expr.clone());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Expression as E;

    #[test]
    fn dedups_repeated_subexpression() {
        // (P ∧ Q) ∨ (P ∧ Q)
        let pq = E::and(E::var("P"), E::var("Q"));
        let expr = E::or(pq.clone(), pq.clone());
        let subs = collect_subexpressions(&expr);
        assert_eq!(subs, vec![pq, expr]);
    }

    #[test]
    fn excludes_atoms() {
        let expr = E::not(E::var("P"));
        let subs = collect_subexpressions(&expr);
        assert_eq!(subs, vec![expr]);
    }

    #[test]
    fn post_order_depth_first() {
        // (P ∧ Q) → R
        let pq = E::and(E::var("P"), E::var("Q"));
        let expr = E::implies(pq.clone(), E::var("R"));
        let subs = collect_subexpressions(&expr);
        assert_eq!(subs, vec![pq, expr]);
    }
}
