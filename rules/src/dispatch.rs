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
use crate::inference::{
    detect_abs, detect_and_elim, detect_and_intro, detect_cd, detect_cpa, detect_dd, detect_ds, detect_hs,
    detect_mp, detect_mpt, detect_mt, detect_not_intro, detect_or_elim, detect_or_intro, detect_raa,
};
use crate::replacement::{
    detect_assoc, detect_be, detect_comm, detect_contra, detect_de_morgan, detect_dist, detect_dn, detect_exp,
    detect_simp, detect_taut,
};
use logic_ast::ProofLine;
use tracing::trace;

type Detector = fn(&ProofLine, &[ProofLine]) -> Option<RuleCode>;

/// The fixed detector dispatch order: a static table of function
/// pointers rather than the dynamic `"detect" + rule` method-name
/// dispatch this replaces.
const DETECTORS: &[Detector] = &[
    detect_dist,
    detect_comm,
    detect_assoc,
    detect_exp,
    detect_dn,
    detect_de_morgan,
    detect_contra,
    detect_simp,
    detect_be,
    detect_taut,
    detect_cpa,
    detect_raa,
    detect_not_intro,
    detect_mp,
    detect_mt,
    detect_mpt,
    detect_hs,
    detect_ds,
    detect_cd,
    detect_dd,
    detect_and_intro,
    detect_and_elim,
    detect_or_intro,
    detect_or_elim,
    detect_abs,
];

/// Runs every detector against `line` in the fixed priority order,
/// returning the first rule that matches.
pub fn detect(line: &ProofLine, context: &[ProofLine]) -> Option<RuleCode> {
    if line.is_self_justifying() {
        return None;
    }
    let found = DETECTORS.iter().find_map(|detector| detector(line, context));
    trace!(line = line.line, rule = ?found, "rule detection");
    found
}

/// Checks whether the rule name the user actually wrote for `line`
/// (after alias normalisation) matches what the detectors find.
pub fn check_user_rule_is_valid(line: &ProofLine, context: &[ProofLine]) -> bool {
    let Some(raw) = &line.user_rule else {
        return false;
    };
    let Some(claimed) = RuleCode::from_alias(raw) else {
        return false;
    };
    detect(line, context) == Some(claimed)
}

#[cfg(test)]
mod test {
    use super::*;
    use logic_ast::{AutoType, Expression};

    #[test]
    fn dispatch_finds_modus_ponens() {
        let p = Expression::var("P");
        let q = Expression::var("Q");
        let premise1 = ProofLine::self_justifying(1, "P → Q".into(), Expression::implies(p.clone(), q.clone()), AutoType::Premise);
        let premise2 = ProofLine::self_justifying(2, "P".into(), p, AutoType::Premise);
        let target = ProofLine {
            line: 3,
            assumptions: vec![1, 2],
            formula: "Q".into(),
            ast: q,
            cited_refs: vec![1, 2],
            user_rule: Some("MP".into()),
            auto_type: AutoType::None,
            detected_rule: None,
        };
        let ctx = vec![premise1, premise2];
        assert_eq!(detect(&target, &ctx), Some(RuleCode::Mp));
        assert!(check_user_rule_is_valid(&target, &ctx));
    }

    #[test]
    fn self_justifying_lines_never_detect() {
        let line = ProofLine::self_justifying(1, "P".into(), Expression::var("P"), AutoType::Premise);
        assert_eq!(detect(&line, &[]), None);
    }
}
