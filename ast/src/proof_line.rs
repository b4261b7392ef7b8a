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
use serde::{Deserialize, Serialize};

/// How a proof line justifies itself, independent of the rule
/// detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoType {
    /// An undischarged premise of the argument.
    Premise,
    /// A subproof-opening assumption.
    Assume,
    /// An ordinary derived line, justified by citing earlier lines.
    None,
}

/// One line of a natural-deduction proof, or one premise/conclusion of
/// a one-line sequent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofLine {
    /// 1-based line number, unique within the deduction.
    pub line: u32,
    /// The line numbers of open assumptions this line depends on (the
    /// bracketed `[...]` set on the left of a Lemmon line).
    pub assumptions: Vec<u32>,
    /// The canonicalised formula string, post-parse.
    pub formula: String,
    /// The parsed AST for `formula`.
    pub ast: Expression,
    /// The numeric citations inside the trailing `[...]` — the other
    /// lines used to derive this one.
    pub cited_refs: Vec<u32>,
    /// The rule name the user wrote, normalised via alias lookup.
    pub user_rule: Option<String>,
    /// Whether this line self-justifies as a premise or assumption.
    pub auto_type: AutoType,
    /// The rule key the detector found, if any.
    pub detected_rule: Option<String>,
}

impl ProofLine {
    /// Builds a self-justifying line (`Premise` or `Assume`):
    /// `cited_refs` is just `[line]` and no detection ever runs
    /// against it.
    pub fn self_justifying(line: u32, formula: String, ast: Expression, auto_type: AutoType) -> Self {
        Self {
            line,
            assumptions: vec![line],
            formula,
            ast,
            cited_refs: vec![line],
            user_rule: None,
            auto_type,
            detected_rule: None,
        }
    }

    pub fn is_self_justifying(&self) -> bool {
        matches!(self.auto_type, AutoType::Premise | AutoType::Assume)
    }
}
