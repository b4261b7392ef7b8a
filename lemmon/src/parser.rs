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

use logic_ast::{to_string, AutoType, ProofLine};
use logic_errors::{LogicError, Result};
use logic_parser::parse_formula;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*\[([^\]]*)\]\s*\((\d+)\)\s*(.+?)\s*\[([^\]]*)\]\s*$").expect("valid regex")
    })
}

fn parse_refs(raw: &str) -> Vec<u32> {
    raw.split(',').filter_map(|s| s.trim().parse().ok()).collect()
}

/// Splits the `[...]`-bracketed detail column into cited references,
/// the rule name, and the self-justification type: zero-or-more
/// comma-separated line numbers followed by a trailing rule token,
/// which is either the literal word `Premise`, the literal word
/// `Assume`, or a rule alias. A line self-justifies when its only
/// dependency is its own line number and the trailing token is
/// `Premise` or `Assume`; otherwise the leading numbers are the line's
/// citations and the trailing token is the rule it invokes.
fn parse_detail(detail: &str, own_line: u32) -> Result<(Vec<u32>, Option<String>, AutoType)> {
    let trimmed = detail.trim();
    let (refs_part, rule_part) = match trimmed.find(char::is_whitespace) {
        Some(idx) => (trimmed[..idx].trim(), trimmed[idx..].trim()),
        None => ("", trimmed),
    };
    let cited_refs = parse_refs(refs_part);
    let only_dependency_is_own_line = cited_refs.is_empty() || cited_refs == [own_line];

    if only_dependency_is_own_line && rule_part.eq_ignore_ascii_case("Premise") {
        return Ok((vec![own_line], None, AutoType::Premise));
    }
    if only_dependency_is_own_line && rule_part.eq_ignore_ascii_case("Assume") {
        return Ok((vec![own_line], None, AutoType::Assume));
    }

    if cited_refs.is_empty() || rule_part.is_empty() {
        return Err(LogicError::LemmonParseError(detail.to_string()));
    }
    Ok((cited_refs, Some(rule_part.to_string()), AutoType::None))
}

/// Parses a full Lemmon-style proof, one line per
/// `[assumptions] (n) formula [refs rule]`, skipping blank lines.
/// Rule detection runs against each non-self-justifying line as it is
/// parsed, against the lines already built.
pub fn parse_lemmon(text: &str) -> Result<Vec<ProofLine>> {
    let pattern = line_pattern();
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            continue;
        }
        let captures = pattern
            .captures(raw_line)
            .ok_or_else(|| LogicError::LemmonParseError(raw_line.to_string()))?;

        let assumptions_str = &captures[1];
        let line_num: u32 = captures[2]
            .parse()
            .map_err(|_| LogicError::LemmonParseError(raw_line.to_string()))?;
        let formula_text = captures[3].trim();
        let detail_str = &captures[4];

        let assumptions = if assumptions_str.trim().is_empty() {
            Vec::new()
        } else {
            parse_refs(assumptions_str)
        };

        // Propositional variables are conventionally upper case; this
        // keeps `p` and `P` in different lines referring to the same
        // variable.
        let normalized = formula_text.to_uppercase();
        let ast = parse_formula(&normalized)?;
        let formula = to_string(&ast);

        let (cited_refs, user_rule, auto_type) = parse_detail(detail_str, line_num)?;

        let mut proof_line = ProofLine {
            line: line_num,
            assumptions,
            formula,
            ast,
            cited_refs,
            user_rule,
            auto_type,
            detected_rule: None,
        };

        if !proof_line.is_self_justifying() {
            proof_line.detected_rule = logic_rules::detect(&proof_line, &lines).map(|code| code.to_string());
            if proof_line.detected_rule.is_none() {
                warn!(line = line_num, formula = %proof_line.formula, "no rule detector matched");
            }
        }

        debug!(line = line_num, formula = %proof_line.formula, "parsed proof line");
        lines.push(proof_line);
    }

    Ok(lines)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_premises_and_modus_ponens() {
        let proof = "\
[1] (1) P → Q [Premise]
[2] (2) P [Premise]
[1,2] (3) Q [1,2 MP]";
        let lines = parse_lemmon(proof).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].auto_type, AutoType::Premise);
        assert_eq!(lines[1].auto_type, AutoType::Premise);
        assert_eq!(lines[2].cited_refs, vec![1, 2]);
        assert_eq!(lines[2].detected_rule.as_deref(), Some("MP"));
    }

    #[test]
    fn parses_assumption_and_conditional_proof() {
        let proof = "\
[1] (1) P [Assume]
[1] (2) P [1 T]
[] (3) P → P [1,2 CPA]";
        let lines = parse_lemmon(proof).unwrap();
        assert_eq!(lines[0].auto_type, AutoType::Assume);
        assert_eq!(lines[2].detected_rule.as_deref(), Some("CPA"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let proof = "[1] (1) P [Premise]\n\n[1] (2) P [1 T]";
        assert_eq!(parse_lemmon(proof).unwrap().len(), 2);
    }

    #[test]
    fn malformed_line_errors() {
        assert!(parse_lemmon("not a valid lemmon line").is_err());
    }

    #[test]
    fn lowercase_variables_are_normalized() {
        let lines = parse_lemmon("[1] (1) p [Premise]").unwrap();
        assert_eq!(lines[0].formula, "P");
    }

    #[test]
    fn spec_literal_refs_with_own_line_still_self_justifies() {
        let lines = parse_lemmon("[1] (1) P [1 Premise]").unwrap();
        assert_eq!(lines[0].auto_type, AutoType::Premise);
        assert_eq!(lines[0].cited_refs, vec![1]);
    }
}
