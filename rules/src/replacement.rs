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

use crate::code::RuleCode;
use crate::helpers::resolve_refs;
use logic_ast::{structurally_equivalent, to_string, Expression, ProofLine};

/// A replacement rule holds between `ref_line` and `line` if rewriting
/// one by `rewrite` (applied at the top level only, as these line-by-
/// line proof checkers do) yields the other.
fn matches_replacement(
    ref_line: &ProofLine,
    line: &ProofLine,
    rewrite: impl Fn(&Expression) -> Option<Expression>,
) -> bool {
    if let Some(rewritten) = rewrite(&ref_line.ast) {
        if structurally_equivalent(&rewritten, &line.ast) {
            return true;
        }
    }
    if let Some(rewritten) = rewrite(&line.ast) {
        if structurally_equivalent(&rewritten, &ref_line.ast) {
            return true;
        }
    }
    false
}

fn single_ref_detect(
    line: &ProofLine,
    context: &[ProofLine],
    rewrite: impl Fn(&Expression) -> Option<Expression>,
) -> bool {
    let Some(refs) = resolve_refs(line, context) else {
        return false;
    };
    if refs.len() != 1 {
        return false;
    }
    matches_replacement(refs[0], line, rewrite)
}

fn rewrite_comm(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::And(a, b) => Some(Expression::and((**b).clone(), (**a).clone())),
        Expression::Or(a, b) => Some(Expression::or((**b).clone(), (**a).clone())),
        Expression::Iff(a, b) => Some(Expression::iff((**b).clone(), (**a).clone())),
        _ => None,
    }
}

pub fn detect_comm(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let refs = resolve_refs(line, context)?;
    if refs.len() != 1 {
        return None;
    }
    // Distinct from plain restatement: only fires when order actually changed.
    if refs[0].ast == line.ast {
        return None;
    }
    matches_replacement(refs[0], line, rewrite_comm).then_some(RuleCode::Comm)
}

/// `A∧(B∨C) ⇔ (A∧B)∨(A∧C)` and `A∨(B∧C) ⇔ (A∨B)∧(A∨C)`, with the
/// shared factor allowed on either side of the outer node.
fn rewrite_dist(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::And(l, r) => {
            for (p, rest) in [(l, r), (r, l)] {
                if let Expression::Or(q, s) = &**rest {
                    return Some(Expression::or(
                        Expression::and((**p).clone(), (**q).clone()),
                        Expression::and((**p).clone(), (**s).clone()),
                    ));
                }
            }
            None
        }
        Expression::Or(l, r) => {
            for (p, rest) in [(l, r), (r, l)] {
                if let Expression::And(q, s) = &**rest {
                    return Some(Expression::and(
                        Expression::or((**p).clone(), (**q).clone()),
                        Expression::or((**p).clone(), (**s).clone()),
                    ));
                }
            }
            None
        }
        _ => None,
    }
}

pub fn detect_dist(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    single_ref_detect(line, context, rewrite_dist).then_some(RuleCode::Dist)
}

#[derive(PartialEq)]
enum ChainOp {
    And,
    Or,
    Other,
}

fn flatten_chain_into(expr: &Expression, op: &ChainOp, leaves: &mut Vec<Expression>) {
    match (op, expr) {
        (ChainOp::And, Expression::And(l, r)) => {
            flatten_chain_into(l, op, leaves);
            flatten_chain_into(r, op, leaves);
        }
        (ChainOp::Or, Expression::Or(l, r)) => {
            flatten_chain_into(l, op, leaves);
            flatten_chain_into(r, op, leaves);
        }
        _ => leaves.push(expr.clone()),
    }
}

fn flatten_chain(expr: &Expression) -> (ChainOp, Vec<Expression>) {
    let op = match expr {
        Expression::And(_, _) => ChainOp::And,
        Expression::Or(_, _) => ChainOp::Or,
        _ => ChainOp::Other,
    };
    let mut leaves = Vec::new();
    flatten_chain_into(expr, &op, &mut leaves);
    (op, leaves)
}

/// The current expression's flattened `∧`/`∨` leaf multiset equals the
/// reference's, under a total order over leaves (here, their
/// canonical printed form), with matching top operator — tolerating
/// any re-association (and, incidentally, any reordering) of the
/// chain.
pub fn detect_assoc(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let refs = resolve_refs(line, context)?;
    if refs.len() != 1 {
        return None;
    }
    let reference = refs[0];
    if reference.ast == line.ast {
        return None;
    }
    let (op_a, mut leaves_a) = flatten_chain(&reference.ast);
    let (op_b, mut leaves_b) = flatten_chain(&line.ast);
    if op_a == ChainOp::Other || !matches!((op_a, op_b), (ChainOp::And, ChainOp::And) | (ChainOp::Or, ChainOp::Or)) {
        return None;
    }
    if leaves_a.len() != leaves_b.len() || leaves_a.len() < 2 {
        return None;
    }
    leaves_a.sort_by_key(to_string);
    leaves_b.sort_by_key(to_string);
    let equal = leaves_a.iter().zip(leaves_b.iter()).all(|(a, b)| structurally_equivalent(a, b));
    equal.then_some(RuleCode::Assoc)
}

/// `(A∧B)→C ⇔ A→(B→C)`, tolerating either order of the antecedent
/// conjunction's conjuncts.
pub fn detect_exp(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let refs = resolve_refs(line, context)?;
    if refs.len() != 1 {
        return None;
    }
    let candidates = [(&refs[0].ast, &line.ast), (&line.ast, &refs[0].ast)];
    for (exported, target) in candidates {
        if let Expression::Implies(ante, r) = exported {
            if let Expression::And(p, q) = &**ante {
                for (p1, q1) in [(p, q), (q, p)] {
                    let candidate =
                        Expression::implies((**p1).clone(), Expression::implies((**q1).clone(), (**r).clone()));
                    if structurally_equivalent(&candidate, target) {
                        return Some(RuleCode::Exp);
                    }
                }
            }
        }
    }
    None
}

fn rewrite_dn(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::Not(inner) => match &**inner {
            Expression::Not(innermost) => Some((**innermost).clone()),
            _ => None,
        },
        _ => None,
    }
}

pub fn detect_dn(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    single_ref_detect(line, context, rewrite_dn).then_some(RuleCode::Dn)
}

/// Both duals implemented symmetrically: `¬(A∧B) ⇔ ¬A∨¬B` and
/// `¬(A∨B) ⇔ ¬A∧¬B`.
fn rewrite_de_morgan(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::Not(inner) => match &**inner {
            Expression::And(a, b) => Some(Expression::or(Expression::not((**a).clone()), Expression::not((**b).clone()))),
            Expression::Or(a, b) => Some(Expression::and(Expression::not((**a).clone()), Expression::not((**b).clone()))),
            _ => None,
        },
        _ => None,
    }
}

pub fn detect_de_morgan(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    single_ref_detect(line, context, rewrite_de_morgan).then_some(RuleCode::DeMorgan)
}

fn rewrite_contra(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::Implies(p, q) => Some(Expression::implies(
            Expression::not((**q).clone()),
            Expression::not((**p).clone()),
        )),
        _ => None,
    }
}

pub fn detect_contra(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    single_ref_detect(line, context, rewrite_contra).then_some(RuleCode::Contra)
}

/// Material implication: `A→B ⇔ ¬A∨B`.
fn rewrite_material_implication(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::Implies(p, q) => Some(Expression::or(Expression::not((**p).clone()), (**q).clone())),
        _ => None,
    }
}

pub fn detect_simp(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    single_ref_detect(line, context, rewrite_material_implication).then_some(RuleCode::Simp)
}

fn rewrite_be(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::Iff(p, q) => Some(Expression::and(
            Expression::implies((**p).clone(), (**q).clone()),
            Expression::implies((**q).clone(), (**p).clone()),
        )),
        _ => None,
    }
}

pub fn detect_be(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    single_ref_detect(line, context, rewrite_be).then_some(RuleCode::Be)
}

/// Idempotence, labelled `T` for "tautology" in the rule catalogue:
/// `A∧A ⇔ A`, `A∨A ⇔ A`.
fn rewrite_idempotence(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::And(a, b) if structurally_equivalent(a, b) => Some((**a).clone()),
        Expression::Or(a, b) if structurally_equivalent(a, b) => Some((**a).clone()),
        _ => None,
    }
}

pub fn detect_taut(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    single_ref_detect(line, context, rewrite_idempotence).then_some(RuleCode::Taut)
}

#[cfg(test)]
mod test {
    use super::*;
    use logic_ast::AutoType;

    fn line(n: u32, ast: Expression, cited: Vec<u32>) -> ProofLine {
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
    fn comm_detects_swapped_and() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![line(1, Expression::and(p.clone(), q.clone()), vec![])];
        let target = line(2, Expression::and(q, p), vec![1]);
        assert_eq!(detect_comm(&target, &ctx), Some(RuleCode::Comm));
    }

    #[test]
    fn de_morgan_and_dual() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![line(1, Expression::not(Expression::and(p.clone(), q.clone())), vec![])];
        let target = line(2, Expression::or(Expression::not(p), Expression::not(q)), vec![1]);
        assert_eq!(detect_de_morgan(&target, &ctx), Some(RuleCode::DeMorgan));
    }

    #[test]
    fn de_morgan_or_dual() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![line(1, Expression::not(Expression::or(p.clone(), q.clone())), vec![])];
        let target = line(2, Expression::and(Expression::not(p), Expression::not(q)), vec![1]);
        assert_eq!(detect_de_morgan(&target, &ctx), Some(RuleCode::DeMorgan));
    }

    #[test]
    fn double_negation_either_direction() {
        let p = Expression::var("P");
        let ctx = vec![line(1, p.clone(), vec![])];
        let target = line(2, Expression::not(Expression::not(p)), vec![1]);
        assert_eq!(detect_dn(&target, &ctx), Some(RuleCode::Dn));
    }

    #[test]
    fn material_implication() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![line(1, Expression::implies(p.clone(), q.clone()), vec![])];
        let target = line(2, Expression::or(Expression::not(p), q), vec![1]);
        assert_eq!(detect_simp(&target, &ctx), Some(RuleCode::Simp));
    }

    #[test]
    fn idempotence_is_t() {
        let p = Expression::var("P");
        let ctx = vec![line(1, Expression::and(p.clone(), p.clone()), vec![])];
        let target = line(2, p, vec![1]);
        assert_eq!(detect_taut(&target, &ctx), Some(RuleCode::Taut));
    }

    #[test]
    fn exportation_either_conjunct_order() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let r = Expression::var("R");
        let ctx = vec![line(1, Expression::implies(Expression::and(q.clone(), p.clone()), r.clone()), vec![])];
        let target = line(2, Expression::implies(p, Expression::implies(q, r)), vec![1]);
        assert_eq!(detect_exp(&target, &ctx), Some(RuleCode::Exp));
    }

    #[test]
    fn associativity_of_a_three_way_and() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let r = Expression::var("R");
        let ctx = vec![line(1, Expression::and(Expression::and(p.clone(), q.clone()), r.clone()), vec![])];
        let target = line(2, Expression::and(p, Expression::and(q, r)), vec![1]);
        assert_eq!(detect_assoc(&target, &ctx), Some(RuleCode::Assoc));
    }
}
