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
use crate::helpers::{is_contradiction, resolve_refs};
use logic_ast::{structurally_equivalent, AutoType, Expression, ProofLine};

fn two_refs<'a>(line: &ProofLine, context: &'a [ProofLine]) -> Option<(&'a ProofLine, &'a ProofLine)> {
    let refs = resolve_refs(line, context)?;
    match refs.as_slice() {
        [a, b] => Some((a, b)),
        _ => None,
    }
}

pub fn detect_mp(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let (a, b) = two_refs(line, context)?;
    for (imp, ante) in [(a, b), (b, a)] {
        if let Expression::Implies(p, q) = &imp.ast {
            if structurally_equivalent(p, &ante.ast) && structurally_equivalent(q, &line.ast) {
                return Some(RuleCode::Mp);
            }
        }
    }
    None
}

pub fn detect_mt(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let (a, b) = two_refs(line, context)?;
    for (imp, negated_consequent) in [(a, b), (b, a)] {
        if let Expression::Implies(p, q) = &imp.ast {
            let not_q = Expression::not((**q).clone());
            if structurally_equivalent(&not_q, &negated_consequent.ast) {
                let not_p = Expression::not((**p).clone());
                if structurally_equivalent(&not_p, &line.ast) {
                    return Some(RuleCode::Mt);
                }
            }
        }
    }
    None
}

/// Shared shape of `MPT` and `DS`: one ref is `A∨B`, the other is
/// `¬X` matching one disjunct; the current line is the other
/// disjunct. The catalogue keeps both rule names over this identical
/// contract — whichever comes first in dispatch order wins.
fn disjunctive_syllogism_shape(line: &ProofLine, context: &[ProofLine]) -> bool {
    let Some((a, b)) = two_refs(line, context) else {
        return false;
    };
    for (disj, negated) in [(a, b), (b, a)] {
        if let Expression::Or(p, q) = &disj.ast {
            if let Expression::Not(x) = &negated.ast {
                if structurally_equivalent(x, p) && structurally_equivalent(q, &line.ast) {
                    return true;
                }
                if structurally_equivalent(x, q) && structurally_equivalent(p, &line.ast) {
                    return true;
                }
            }
        }
    }
    false
}

pub fn detect_mpt(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    disjunctive_syllogism_shape(line, context).then_some(RuleCode::Mpt)
}

pub fn detect_ds(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    disjunctive_syllogism_shape(line, context).then_some(RuleCode::Ds)
}

pub fn detect_hs(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let (a, b) = two_refs(line, context)?;
    for (first, second) in [(a, b), (b, a)] {
        if let (Expression::Implies(p, q), Expression::Implies(q2, r)) = (&first.ast, &second.ast) {
            if structurally_equivalent(q, q2) {
                let expected = Expression::implies((**p).clone(), (**r).clone());
                if structurally_equivalent(&expected, &line.ast) {
                    return Some(RuleCode::Hs);
                }
            }
        }
    }
    None
}

pub fn detect_cd(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let refs = resolve_refs(line, context)?;
    if refs.len() != 3 {
        return None;
    }
    let implications: Vec<(&Expression, &Expression)> = refs
        .iter()
        .filter_map(|r| match &r.ast {
            Expression::Implies(p, q) => Some((p.as_ref(), q.as_ref())),
            _ => None,
        })
        .collect();
    let disjunction = refs.iter().find_map(|r| match &r.ast {
        Expression::Or(p, q) => Some((p.as_ref(), q.as_ref())),
        _ => None,
    });
    if implications.len() != 2 {
        return None;
    }
    let (p, r) = implications[0];
    let (s, u) = implications[1];
    let Some((d1, d2)) = disjunction else {
        return None;
    };
    let forward = structurally_equivalent(p, d1) && structurally_equivalent(s, d2);
    let crossed = structurally_equivalent(p, d2) && structurally_equivalent(s, d1);
    if !forward && !crossed {
        return None;
    }
    let expected = Expression::or((*r).clone(), (*u).clone());
    structurally_equivalent(&expected, &line.ast).then_some(RuleCode::Cd)
}

/// `(A→C)∧(B→D)` as one ref, `¬C∨¬D` as the other; current `¬A∨¬B`.
pub fn detect_dd(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let (x, y) = two_refs(line, context)?;
    for (conj, disj) in [(x, y), (y, x)] {
        let Expression::And(left, right) = &conj.ast else { continue };
        let Expression::Or(nc, nd) = &disj.ast else { continue };
        for (imp1, imp2) in [(left, right), (right, left)] {
            let (Expression::Implies(a, c), Expression::Implies(b, d)) = (&**imp1, &**imp2) else { continue };
            let not_c = Expression::not((**c).clone());
            let not_d = Expression::not((**d).clone());
            let forward = structurally_equivalent(&not_c, nc) && structurally_equivalent(&not_d, nd);
            let crossed = structurally_equivalent(&not_c, nd) && structurally_equivalent(&not_d, nc);
            if !forward && !crossed {
                continue;
            }
            let expected = Expression::or(Expression::not((**a).clone()), Expression::not((**b).clone()));
            if structurally_equivalent(&expected, &line.ast) {
                return Some(RuleCode::Dd);
            }
        }
    }
    None
}

pub fn detect_and_intro(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let (a, b) = two_refs(line, context)?;
    let expected = Expression::and(a.ast.clone(), b.ast.clone());
    structurally_equivalent(&expected, &line.ast).then_some(RuleCode::AndIntro)
}

pub fn detect_and_elim(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let refs = resolve_refs(line, context)?;
    let [only] = refs.as_slice() else { return None };
    if let Expression::And(p, q) = &only.ast {
        if structurally_equivalent(p, &line.ast) || structurally_equivalent(q, &line.ast) {
            return Some(RuleCode::AndElim);
        }
    }
    None
}

pub fn detect_or_intro(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let refs = resolve_refs(line, context)?;
    let [only] = refs.as_slice() else { return None };
    if let Expression::Or(p, q) = &line.ast {
        if structurally_equivalent(p, &only.ast) || structurally_equivalent(q, &only.ast) {
            return Some(RuleCode::OrIntro);
        }
    }
    None
}

/// Disjunction elimination (case analysis). Refs must appear in the
/// fixed order `[disj, assumeA, conclA, assumeB, conclB]`: `disj` is
/// `A∨B`; both assumption lines must have `auto_type = Assume` and
/// match the two disjuncts (either assignment); both conclusions must
/// equal the current line.
pub fn detect_or_elim(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let refs = resolve_refs(line, context)?;
    let [disj, assume_a, concl_a, assume_b, concl_b] = refs.as_slice() else {
        return None;
    };
    let Expression::Or(a, b) = &disj.ast else { return None };

    let assumptions_match = assume_a.auto_type == AutoType::Assume
        && assume_b.auto_type == AutoType::Assume
        && ((structurally_equivalent(&assume_a.ast, a) && structurally_equivalent(&assume_b.ast, b))
            || (structurally_equivalent(&assume_a.ast, b) && structurally_equivalent(&assume_b.ast, a)));

    if assumptions_match
        && structurally_equivalent(&concl_a.ast, &line.ast)
        && structurally_equivalent(&concl_b.ast, &line.ast)
    {
        return Some(RuleCode::OrElim);
    }
    None
}

pub fn detect_abs(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let refs = resolve_refs(line, context)?;
    let [only] = refs.as_slice() else { return None };
    if let Expression::Implies(p, q) = &only.ast {
        let expected = Expression::implies((**p).clone(), Expression::and((**p).clone(), (**q).clone()));
        if structurally_equivalent(&expected, &line.ast) {
            return Some(RuleCode::Abs);
        }
    }
    None
}

/// Negation introduction, over an arbitrary number of refs: flatten
/// any ref that is a conjunction of two implications into its two
/// conjuncts, then (among all the implications so gathered) find two
/// sharing an antecedent `A` whose consequents are direct negations
/// of each other; the current line must be `¬A`.
pub fn detect_not_intro(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let refs = resolve_refs(line, context)?;
    if refs.is_empty() {
        return None;
    }
    let mut implications: Vec<(Expression, Expression)> = Vec::new();
    for r in &refs {
        match &r.ast {
            Expression::And(l, rr) => {
                if let (Expression::Implies(p1, q1), Expression::Implies(p2, q2)) = (&**l, &**rr) {
                    implications.push(((**p1).clone(), (**q1).clone()));
                    implications.push(((**p2).clone(), (**q2).clone()));
                }
            }
            Expression::Implies(p, q) => implications.push(((**p).clone(), (**q).clone())),
            _ => {}
        }
    }

    for i in 0..implications.len() {
        for j in 0..implications.len() {
            if i == j {
                continue;
            }
            let (a1, x1) = &implications[i];
            let (a2, x2) = &implications[j];
            if !structurally_equivalent(a1, a2) {
                continue;
            }
            let not_x1 = Expression::not(x1.clone());
            if structurally_equivalent(&not_x1, x2) {
                let expected = Expression::not(a1.clone());
                if structurally_equivalent(&expected, &line.ast) {
                    return Some(RuleCode::NotIntro);
                }
            }
        }
    }
    None
}

/// Conditional proof, over an arbitrary number of refs: the current
/// line must be `A→B`; some ref must be an `Assume` line equal to
/// `A`, and some (other) ref must equal `B`.
pub fn detect_cpa(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let Expression::Implies(a, b) = &line.ast else {
        return None;
    };
    let refs = resolve_refs(line, context)?;
    let has_assumption = refs.iter().any(|r| r.auto_type == AutoType::Assume && structurally_equivalent(&r.ast, a));
    let has_consequent = refs.iter().any(|r| structurally_equivalent(&r.ast, b));
    (has_assumption && has_consequent).then_some(RuleCode::Cpa)
}

/// Reductio: two refs, one an `Assume` line `A`, the other a
/// contradiction `X∧¬X`; the current line must be `¬A`.
pub fn detect_raa(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    let (a, b) = two_refs(line, context)?;
    for (assumed, contradiction) in [(a, b), (b, a)] {
        if assumed.auto_type == AutoType::Assume && is_contradiction(&contradiction.ast) {
            let expected = Expression::not(assumed.ast.clone());
            if structurally_equivalent(&expected, &line.ast) {
                return Some(RuleCode::Raa);
            }
        }
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

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

    fn assume(n: u32, ast: Expression) -> ProofLine {
        ProofLine::self_justifying(n, logic_ast::to_string(&ast), ast, AutoType::Assume)
    }

    #[test]
    fn modus_ponens() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![
            line(1, Expression::implies(p.clone(), q.clone()), vec![]),
            line(2, p, vec![]),
        ];
        let target = line(3, q, vec![1, 2]);
        assert_eq!(detect_mp(&target, &ctx), Some(RuleCode::Mp));
    }

    #[test]
    fn modus_tollens() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![
            line(1, Expression::implies(p.clone(), q.clone()), vec![]),
            line(2, Expression::not(q), vec![]),
        ];
        let target = line(3, Expression::not(p), vec![1, 2]);
        assert_eq!(detect_mt(&target, &ctx), Some(RuleCode::Mt));
    }

    #[test]
    fn disjunctive_syllogism_matches_both_rule_names() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![
            line(1, Expression::or(p.clone(), q.clone()), vec![]),
            line(2, Expression::not(p), vec![]),
        ];
        let target = line(3, q, vec![1, 2]);
        assert_eq!(detect_ds(&target, &ctx), Some(RuleCode::Ds));
        assert_eq!(detect_mpt(&target, &ctx), Some(RuleCode::Mpt));
    }

    #[test]
    fn hypothetical_syllogism() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let r = Expression::var("R");
        let ctx = vec![
            line(1, Expression::implies(p.clone(), q.clone()), vec![]),
            line(2, Expression::implies(q, r.clone()), vec![]),
        ];
        let target = line(3, Expression::implies(p, r), vec![1, 2]);
        assert_eq!(detect_hs(&target, &ctx), Some(RuleCode::Hs));
    }

    #[test]
    fn conditional_proof() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![assume(1, p.clone()), line(2, q.clone(), vec![1])];
        let target = line(3, Expression::implies(p, q), vec![1, 2]);
        assert_eq!(detect_cpa(&target, &ctx), Some(RuleCode::Cpa));
    }

    #[test]
    fn reductio_ad_absurdum() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![
            assume(1, p.clone()),
            line(2, Expression::and(q.clone(), Expression::not(q)), vec![1]),
        ];
        let target = line(3, Expression::not(p), vec![1, 2]);
        assert_eq!(detect_raa(&target, &ctx), Some(RuleCode::Raa));
    }

    #[test]
    fn negation_introduction_from_two_implications() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![
            line(1, Expression::implies(p.clone(), q.clone()), vec![]),
            line(2, Expression::implies(p.clone(), Expression::not(q)), vec![]),
        ];
        let target = line(3, Expression::not(p), vec![1, 2]);
        assert_eq!(detect_not_intro(&target, &ctx), Some(RuleCode::NotIntro));
    }

    #[test]
    fn constructive_dilemma() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let r = Expression::var("R");
        let s = Expression::var("S");
        let ctx = vec![
            line(1, Expression::implies(p.clone(), q.clone()), vec![]),
            line(2, Expression::implies(r.clone(), s.clone()), vec![]),
            line(3, Expression::or(p, r), vec![]),
        ];
        let target = line(4, Expression::or(q, s), vec![1, 2, 3]);
        assert_eq!(detect_cd(&target, &ctx), Some(RuleCode::Cd));
    }

    #[test]
    fn destructive_dilemma() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let r = Expression::var("R");
        let s = Expression::var("S");
        let ctx = vec![
            line(
                1,
                Expression::and(Expression::implies(p.clone(), q.clone()), Expression::implies(r.clone(), s.clone())),
                vec![],
            ),
            line(2, Expression::or(Expression::not(q), Expression::not(s)), vec![]),
        ];
        let target = line(3, Expression::or(Expression::not(p), Expression::not(r)), vec![1, 2]);
        assert_eq!(detect_dd(&target, &ctx), Some(RuleCode::Dd));
    }

    #[test]
    fn cpa_rejects_a_bad_citation_even_if_remaining_refs_would_satisfy_it() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![assume(1, p.clone()), line(2, q.clone(), vec![1])];
        // Line 3 cites a nonexistent line 99 alongside the two real refs.
        let target = line(3, Expression::implies(p, q), vec![1, 2, 99]);
        assert_eq!(detect_cpa(&target, &ctx), None);
    }

    #[test]
    fn not_intro_rejects_a_bad_citation_even_if_remaining_refs_would_satisfy_it() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let ctx = vec![
            line(1, Expression::implies(p.clone(), q.clone()), vec![]),
            line(2, Expression::implies(p.clone(), Expression::not(q)), vec![]),
        ];
        let target = line(3, Expression::not(p), vec![1, 2, 99]);
        assert_eq!(detect_not_intro(&target, &ctx), None);
    }

    #[test]
    fn disjunction_elimination_fixed_order() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let r = Expression::var("R");
        let ctx = vec![
            line(1, Expression::or(p.clone(), q.clone()), vec![]),
            assume(2, p.clone()),
            line(3, r.clone(), vec![2]),
            assume(4, q.clone()),
            line(5, r.clone(), vec![4]),
        ];
        let target = line(6, r, vec![1, 2, 3, 4, 5]);
        assert_eq!(detect_or_elim(&target, &ctx), Some(RuleCode::OrElim));
    }
}
