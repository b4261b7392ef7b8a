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

use logic_ast::{structurally_equivalent, Expression, ProofLine};

/// Resolves a line's `cited_refs` to the actual cited [`ProofLine`]s,
/// in citation order. Fails the whole lookup, rather than silently
/// dropping the bad citation, if any reference cannot be found.
pub fn resolve_refs<'a>(line: &ProofLine, context: &'a [ProofLine]) -> Option<Vec<&'a ProofLine>> {
    line.cited_refs
        .iter()
        .map(|n| context.iter().find(|l| l.line == *n))
        .collect()
}

/// `true` if `expr` is a top-level contradiction pattern `A ∧ ¬A`
/// (either operand order).
pub fn is_contradiction(expr: &Expression) -> bool {
    if let Expression::And(a, b) = expr {
        let b_negates_a = matches!(&**b, Expression::Not(inner) if structurally_equivalent(inner, a));
        let a_negates_b = matches!(&**a, Expression::Not(inner) if structurally_equivalent(inner, b));
        return b_negates_a || a_negates_b;
    }
    false
}

#[cfg(test)]
mod test {
    use super::*;
    use logic_ast::AutoType;

    fn line(n: u32, cited: Vec<u32>) -> ProofLine {
        let ast = Expression::var("P");
        ProofLine {
            line: n,
            assumptions: vec![],
            formula: logic_ast::to_string(&ast),
            ast,
            cited_refs: cited,
            user_rule: None,
            auto_type: AutoType::None,
            detected_rule: None,
        }
    }

    #[test]
    fn detects_contradiction_either_order() {
        let p = Expression::var("P");
        assert!(is_contradiction(&Expression::and(p.clone(), Expression::not(p.clone()))));
        assert!(is_contradiction(&Expression::and(Expression::not(p.clone()), p)));
    }

    #[test]
    fn resolve_refs_fails_on_unresolved_citation() {
        let ctx = vec![line(1, vec![])];
        let target = line(2, vec![1, 99]);
        assert_eq!(resolve_refs(&target, &ctx), None);
    }

    #[test]
    fn resolve_refs_succeeds_when_every_citation_resolves() {
        let ctx = vec![line(1, vec![])];
        let target = line(2, vec![1]);
        assert_eq!(resolve_refs(&target, &ctx).map(|refs| refs.len()), Some(1));
    }
}
