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

use indexmap::IndexSet;
use logic_ast::{collect_subexpressions, evaluate, Assignment, AutoType, Expression, ProofLine};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a formula's values behave across every row of its truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Tautology,
    Contradiction,
    Contingent,
}

/// Classifies a column of truth values: all `true` is a tautology, all
/// `false` a contradiction, anything mixed is contingent.
pub fn classify(values: &[bool]) -> Classification {
    if values.iter().all(|v| *v) {
        Classification::Tautology
    } else if values.iter().all(|v| !*v) {
        Classification::Contradiction
    } else {
        Classification::Contingent
    }
}

/// One named sub-expression column alongside its values across every
/// assignment row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubexprColumn {
    pub formula: String,
    pub values: Vec<bool>,
}

/// One proof line's truth values across every assignment row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineColumn {
    pub line: u32,
    pub values: Vec<bool>,
}

/// The full analysis of an argument or proof: every variable's truth
/// table row, every line's and sub-expression's values across those
/// rows, and the validity verdict with any counter-examples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruthTableResult {
    /// Variables in first-seen order; index 0 is the most significant
    /// bit of each combination's row index.
    pub variables: Vec<String>,
    /// One row per assignment, `2^variables.len()` rows in total,
    /// each row ordered to match `variables`.
    pub combinations: Vec<Vec<bool>>,
    pub per_line: Vec<LineColumn>,
    pub per_subexpr: Vec<SubexprColumn>,
    /// `true` iff every row with all premises true also has the
    /// conclusion true.
    pub valid: bool,
    /// Rows (as assignments) where every premise holds but the
    /// conclusion does not.
    pub counter_examples: Vec<Assignment>,
}

impl TruthTableResult {
    pub fn classify_line(&self, line: u32) -> Option<Classification> {
        self.per_line.iter().find(|c| c.line == line).map(|c| classify(&c.values))
    }
}

fn collect_variables(lines: &[ProofLine]) -> IndexSet<String> {
    let mut vars = IndexSet::new();
    for line in lines {
        collect_variables_in(&line.ast, &mut vars);
    }
    vars
}

fn collect_variables_in(expr: &Expression, vars: &mut IndexSet<String>) {
    match expr {
        Expression::Var(name) => {
            vars.insert(name.clone());
        }
        Expression::Not(inner) => collect_variables_in(inner, vars),
        Expression::And(l, r)
        | Expression::Or(l, r)
        | Expression::Xor(l, r)
        | Expression::Implies(l, r)
        | Expression::Iff(l, r) => {
            collect_variables_in(l, vars);
            collect_variables_in(r, vars);
        }
    }
}

/// Enumerates every combination of `n` booleans, variable 0 as the
/// most significant bit, in ascending row-index order.
fn enumerate_combinations(n: usize) -> Vec<Vec<bool>> {
    let total = 1usize << n;
    (0..total)
        .map(|row| (0..n).map(|i| (row >> (n - 1 - i)) & 1 == 1).collect())
        .collect()
}

fn assignment_for(variables: &IndexSet<String>, combination: &[bool]) -> Assignment {
    variables
        .iter()
        .cloned()
        .zip(combination.iter().copied())
        .collect()
}

/// Runs the full truth-table analysis over `lines`: variable
/// collection, `2^n` assignment enumeration, per-line and
/// per-sub-expression evaluation, and validity with counter-examples.
///
/// Premises are the lines with `auto_type == Premise`; the conclusion
/// is the *last* line in `lines`, regardless of its `auto_type`.
pub fn analyse(lines: &[ProofLine]) -> TruthTableResult {
    let variables = collect_variables(lines);
    let combinations = enumerate_combinations(variables.len());
    debug!(lines = lines.len(), variables = variables.len(), rows = combinations.len(), "analysing");
    let assignments: Vec<Assignment> =
        combinations.iter().map(|row| assignment_for(&variables, row)).collect();

    let per_line: Vec<LineColumn> = lines
        .iter()
        .map(|line| LineColumn {
            line: line.line,
            values: assignments.iter().map(|a| evaluate(&line.ast, a)).collect(),
        })
        .collect();

    let mut subexprs: Vec<Expression> = Vec::new();
    for line in lines {
        for sub in collect_subexpressions(&line.ast) {
            if !subexprs.contains(&sub) {
                subexprs.push(sub);
            }
        }
    }
    subexprs.sort_by_key(|e| e.depth());

    let per_subexpr: Vec<SubexprColumn> = subexprs
        .iter()
        .map(|expr| SubexprColumn {
            formula: logic_ast::to_string(expr),
            values: assignments.iter().map(|a| evaluate(expr, a)).collect(),
        })
        .collect();

    let premise_columns: Vec<&LineColumn> = lines
        .iter()
        .zip(per_line.iter())
        .filter(|(line, _)| line.auto_type == AutoType::Premise)
        .map(|(_, col)| col)
        .collect();
    let conclusion_column = per_line.last();

    let mut counter_examples = Vec::new();
    if let Some(conclusion) = conclusion_column {
        for (row_idx, assignment) in assignments.iter().enumerate() {
            let all_premises_true = premise_columns.iter().all(|col| col.values[row_idx]);
            if all_premises_true && !conclusion.values[row_idx] {
                counter_examples.push(assignment.clone());
            }
        }
    }

    debug!(valid = counter_examples.is_empty(), counter_examples = counter_examples.len(), "validity computed");

    TruthTableResult {
        variables: variables.into_iter().collect(),
        combinations,
        per_line,
        per_subexpr,
        valid: counter_examples.is_empty(),
        counter_examples,
    }
}
