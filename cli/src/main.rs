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

//! Command-line front-end: parses a formula, sequent, or Lemmon proof
//! from the command line and prints its truth table / validity
//! verdict to the console.

use clap::{Parser, Subcommand};
use logic_analysis::analyse;
use logic_ast::{AutoType, ProofLine};
use logic_errors::Result;
use logic_lemmon::parse_lemmon;
use logic_parser::{parse_formula, parse_sequent};
use tracing::info;

#[derive(Parser)]
#[command(name = "logic", about = "Classical propositional logic analyser")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the truth table and classification of a single formula.
    Formula { text: String },
    /// Check the validity of a one-line argument, e.g. "P → Q, P ⊢ Q".
    Sequent { text: String },
    /// Check a full Lemmon-style natural-deduction proof from a file.
    Proof { path: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Formula { text } => run_formula(&text),
        Command::Sequent { text } => run_sequent(&text),
        Command::Proof { path } => run_proof(&path),
    }
}

fn run_formula(text: &str) -> Result<()> {
    let ast = parse_formula(text)?;
    let line = ProofLine::self_justifying(1, logic_ast::to_string(&ast), ast, AutoType::None);
    info!(formula = %line.formula, "analysing formula");
    print_table(&[line]);
    Ok(())
}

fn run_sequent(text: &str) -> Result<()> {
    let sequent = parse_sequent(text)?;
    info!(premises = sequent.premises.len(), "analysing sequent");
    print_table(&sequent.lines());
    Ok(())
}

fn run_proof(path: &str) -> Result<()> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        logic_errors::LogicError::LemmonParseError(format!("could not read '{path}': {e}"))
    })?;
    let lines = parse_lemmon(&text)?;
    info!(lines = lines.len(), "checked proof");
    for line in &lines {
        let rule = line.user_rule.as_deref().unwrap_or("-");
        let detected = line.detected_rule.as_deref().unwrap_or("UNVERIFIED");
        println!("({}) {}  [{} -> {}]", line.line, line.formula, rule, detected);
    }
    Ok(())
}

fn print_table(lines: &[ProofLine]) {
    let result = analyse(lines);
    print!("   ");
    for var in &result.variables {
        print!("{var} ");
    }
    for line in lines {
        print!("| {} ", line.formula);
    }
    println!("| valid");

    for (row_idx, combination) in result.combinations.iter().enumerate() {
        print!("   ");
        for value in combination {
            print!("{} ", if *value { "T" } else { "F" });
        }
        for col in &result.per_line {
            print!("| {} ", if col.values[row_idx] { "T" } else { "F" });
        }
        println!();
    }

    println!("valid: {}", result.valid);
    for counter in &result.counter_examples {
        println!("counter-example: {counter:?}");
    }
}
