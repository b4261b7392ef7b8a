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

//! `logic-lang`: a classical propositional logic analyser.
//!
//! Parses formulas, one-line sequents, and Lemmon-style natural-
//! deduction proofs into a typed AST; evaluates, classifies, and
//! validity-checks them via truth tables; and verifies each proof
//! line's cited rule against a catalogue of replacement and inference
//! detectors. This crate re-exports the workspace's result surface —
//! the individual crates (`logic-ast`, `logic-parser`,
//! `logic-analysis`, `logic-rules`, `logic-lemmon`) can also be
//! depended on directly.

pub use logic_analysis::{analyse, verify_assumption_discharge, Classification, TruthTableResult};
pub use logic_ast::{evaluate, structurally_equivalent, Assignment, AutoType, Expression, ProofLine, Sequent};
pub use logic_errors::{LogicError, Result};
pub use logic_lemmon::parse_lemmon;
pub use logic_parser::{parse_formula, parse_sequent};
pub use logic_rules::{check_user_rule_is_valid, detect as detect_rule, RuleCode};

#[cfg(test)]
mod test {
    use super::*;

    /// The argument-validity worked example from the proof-checking
    /// core: `P→Q, P ⊢ Q` is valid with no counter-example.
    #[test]
    fn end_to_end_sequent_validity() {
        let sequent = parse_sequent("P → Q, P ⊢ Q").unwrap();
        let result = analyse(&sequent.lines());
        assert!(result.valid);
        assert!(result.counter_examples.is_empty());
    }

    #[test]
    fn expression_round_trips_through_json() {
        let ast = parse_formula("P ∧ ¬Q").unwrap();
        let json = serde_json::to_string(&ast).unwrap();
        let restored: Expression = serde_json::from_str(&json).unwrap();
        assert_eq!(ast, restored);
    }

    #[test]
    fn end_to_end_lemmon_proof() {
        let proof = "\
[1] (1) P → Q [Premise]
[2] (2) P [Premise]
[1,2] (3) Q [1,2 MP]";
        let lines = parse_lemmon(proof).unwrap();
        assert_eq!(lines[2].detected_rule.as_deref(), Some("MP"));
        let result = analyse(&lines);
        assert!(result.valid);
    }
}
