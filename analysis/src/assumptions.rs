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

use logic_ast::ProofLine;
use std::collections::{HashMap, HashSet};

/// Checks that every derived line's `assumptions` set is contained in
/// the union of the `assumptions` of the lines it cites — i.e. a line
/// never depends on an assumption it cannot trace back through its
/// citations.
///
/// This is a stricter check than the rule detectors themselves run:
/// it is opt-in and never invoked implicitly by rule detection.
/// Returns the line numbers that fail the check.
pub fn verify_assumption_discharge(lines: &[ProofLine]) -> Vec<u32> {
    let by_line: HashMap<u32, &ProofLine> = lines.iter().map(|l| (l.line, l)).collect();
    let mut violations = Vec::new();

    for line in lines {
        if line.is_self_justifying() {
            continue;
        }
        let mut allowed: HashSet<u32> = HashSet::new();
        for cited in &line.cited_refs {
            if let Some(cited_line) = by_line.get(cited) {
                allowed.extend(cited_line.assumptions.iter().copied());
            }
        }
        if !line.assumptions.iter().all(|a| allowed.contains(a)) {
            violations.push(line.line);
        }
    }

    violations
}

#[cfg(test)]
mod test {
    use super::*;
    use logic_ast::{AutoType, Expression};

    fn premise(line: u32) -> ProofLine {
        ProofLine::self_justifying(line, "P".into(), Expression::var("P"), AutoType::Premise)
    }

    fn derived(line: u32, assumptions: Vec<u32>, cited_refs: Vec<u32>) -> ProofLine {
        ProofLine {
            line,
            assumptions,
            formula: "P".into(),
            ast: Expression::var("P"),
            cited_refs,
            user_rule: Some("mp".into()),
            auto_type: AutoType::None,
            detected_rule: Some("mp".into()),
        }
    }

    #[test]
    fn traceable_assumptions_pass() {
        let lines = vec![premise(1), derived(2, vec![1], vec![1])];
        assert!(verify_assumption_discharge(&lines).is_empty());
    }

    #[test]
    fn untraceable_assumption_fails() {
        let lines = vec![premise(1), derived(2, vec![99], vec![1])];
        assert_eq!(verify_assumption_discharge(&lines), vec![2]);
    }
}
