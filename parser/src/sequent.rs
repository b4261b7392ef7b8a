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

use crate::parse_formula;
use logic_ast::{to_string, AutoType, ProofLine, Sequent};
use logic_errors::{LogicError, Result};

const TURNSTILES: [char; 2] = ['⊢', '∴'];

/// Splits `text` into premises and a conclusion on a single turnstile
/// (`⊢` or `∴`), comma-splits the premises, and parses each side into
/// a [`ProofLine`].
pub fn parse_sequent(text: &str) -> Result<Sequent> {
    let turnstile_positions: Vec<usize> = text
        .char_indices()
        .filter(|(_, c)| TURNSTILES.contains(c))
        .map(|(i, _)| i)
        .collect();

    if turnstile_positions.len() != 1 {
        return Err(LogicError::InvalidConclusion(text.to_string()));
    }
    let split_at = turnstile_positions[0];
    let turnstile_len = text[split_at..].chars().next().unwrap().len_utf8();
    let premises_part = &text[..split_at];
    let conclusion_part = &text[split_at + turnstile_len..];

    let mut premises = Vec::new();
    for (i, premise_text) in premises_part.split(',').enumerate() {
        let trimmed = premise_text.trim();
        if trimmed.is_empty() {
            continue;
        }
        let ast = parse_formula(trimmed)?;
        let formula = to_string(&ast);
        premises.push(ProofLine::self_justifying(
            (i + 1) as u32,
            formula,
            ast,
            AutoType::Premise,
        ));
    }

    let conclusion_trimmed = conclusion_part.trim();
    if conclusion_trimmed.is_empty() {
        return Err(LogicError::InvalidConclusion(text.to_string()));
    }
    let conclusion_ast = parse_formula(conclusion_trimmed)?;
    let conclusion_line = (premises.len() + 1) as u32;
    let conclusion = ProofLine {
        line: conclusion_line,
        assumptions: premises.iter().map(|p| p.line).collect(),
        formula: to_string(&conclusion_ast),
        ast: conclusion_ast,
        cited_refs: premises.iter().map(|p| p.line).collect(),
        user_rule: None,
        auto_type: AutoType::None,
        detected_rule: None,
    };

    Ok(Sequent { premises, conclusion })
}
