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

use std::fmt;

/// A canonical lexical token: a parenthesis, one of the six operator
/// symbols, or a variable identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LeftParen,
    RightParen,
    Not,
    And,
    Or,
    Xor,
    Implies,
    Iff,
    Var(String),
}

impl Token {
    /// The binding power used by the Shunting-Yard algorithm: higher
    /// binds tighter. Only operators carry a precedence.
    pub fn precedence(&self) -> Option<u8> {
        Some(match self {
            Token::Not => 5,
            Token::And => 4,
            Token::Or | Token::Xor => 3,
            Token::Implies => 2,
            Token::Iff => 1,
            _ => return None,
        })
    }

    /// `true` for `¬` and `→`, which are right-associative; all other
    /// operators are left-associative.
    pub fn is_right_associative(&self) -> bool {
        matches!(self, Token::Not | Token::Implies)
    }

    pub fn is_operator(&self) -> bool {
        self.precedence().is_some()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Not => write!(f, "¬"),
            Token::And => write!(f, "∧"),
            Token::Or => write!(f, "∨"),
            Token::Xor => write!(f, "⊕"),
            Token::Implies => write!(f, "→"),
            Token::Iff => write!(f, "↔"),
            Token::Var(name) => write!(f, "{name}"),
        }
    }
}
