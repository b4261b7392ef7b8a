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

//! Error types shared across the `logic-lang` workspace.
//!
//! A single `thiserror` enum covers every failure mode, with a
//! crate-wide `Result` alias so downstream crates can propagate with
//! `?` instead of inventing their own error type.

use thiserror::Error;

/// The error codes surfaced across `logic-lang`'s public interfaces
/// (tokenizing, parsing, sequent splitting, and Lemmon proof parsing).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// A sequent did not contain exactly one turnstile (`⊢` or `∴`).
    #[error("invalid conclusion: expected exactly one '⊢' or '∴' in '{0}'")]
    InvalidConclusion(String),

    /// A Lemmon proof line did not match the expected line grammar.
    #[error("could not parse Lemmon proof line: '{0}'")]
    LemmonParseError(String),

    /// A `)` had no matching `(`, or a `(` was left unclosed at end of input.
    #[error("unbalanced parentheses in '{0}'")]
    UnbalancedParens(String),

    /// `¬` appeared with no operand available on the output stack.
    #[error("'¬' has no operand")]
    MissingNotOperand,

    /// A binary operator popped fewer than two operands off the output stack.
    #[error("'{0}' requires two operands")]
    InsufficientOperands(String),

    /// The tokenizer produced a token the parser does not recognise as an operator.
    ///
    /// Unreachable as long as the tokenizer only emits the canonical
    /// operator set of §4.1; kept as a guard against future additions.
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    /// The output stack did not reduce to exactly one expression.
    #[error("malformed expression: '{0}'")]
    MalformedExpression(String),

    /// A character could not be lexed as whitespace, a parenthesis, an
    /// operator alias, or a variable identifier.
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LogicError>;
