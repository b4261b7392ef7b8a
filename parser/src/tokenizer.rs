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

use crate::Token;
use logic_errors::{LogicError, Result};
use std::iter::Peekable;
use std::str::CharIndices;

/// Operator aliases normalised to canonical symbols, case-insensitive
/// for the word forms.
fn keyword_operator(word: &str) -> Option<Token> {
    Some(match word.to_ascii_uppercase().as_str() {
        "NOT" => Token::Not,
        "AND" => Token::And,
        "OR" => Token::Or,
        "XOR" => Token::Xor,
        "IMP" => Token::Implies,
        "EQ" => Token::Iff,
        _ => return None,
    })
}

/// Splits `text` into canonical tokens: parentheses, the six operator
/// symbols (after alias normalisation), and variable identifiers.
/// Whitespace is skipped; anything else is a lexical error.
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        match c {
            '(' => {
                chars.next();
                tokens.push(Token::LeftParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RightParen);
            }
            '¬' | '~' | '!' => {
                chars.next();
                tokens.push(Token::Not);
            }
            '∧' => {
                chars.next();
                tokens.push(Token::And);
            }
            '∨' => {
                chars.next();
                tokens.push(Token::Or);
            }
            '⊕' | '⊻' => {
                chars.next();
                tokens.push(Token::Xor);
            }
            '→' => {
                chars.next();
                tokens.push(Token::Implies);
            }
            '↔' | '≡' => {
                chars.next();
                tokens.push(Token::Iff);
            }
            '&' => {
                chars.next();
                eat_optional(&mut chars, '&');
                tokens.push(Token::And);
            }
            '|' => {
                chars.next();
                eat_optional(&mut chars, '|');
                tokens.push(Token::Or);
            }
            '/' => {
                chars.next();
                expect_next(&mut chars, '\\', pos)?;
                tokens.push(Token::And);
            }
            '\\' => {
                chars.next();
                expect_next(&mut chars, '/', pos)?;
                tokens.push(Token::Or);
            }
            '-' => {
                chars.next();
                expect_next(&mut chars, '>', pos)?;
                tokens.push(Token::Implies);
            }
            '<' => {
                chars.next();
                expect_next(&mut chars, '-', pos)?;
                expect_next(&mut chars, '>', pos)?;
                tokens.push(Token::Iff);
            }
            c if c.is_alphanumeric() || c == '_' => {
                let ident = eat_identifier(&mut chars);
                tokens.push(keyword_operator(&ident).unwrap_or(Token::Var(ident)));
            }
            other => return Err(LogicError::UnexpectedChar(other, pos)),
        }
    }

    Ok(tokens)
}

fn eat_optional(chars: &mut Peekable<CharIndices>, expected: char) {
    if chars.peek().map(|&(_, c)| c) == Some(expected) {
        chars.next();
    }
}

fn expect_next(chars: &mut Peekable<CharIndices>, expected: char, start: usize) -> Result<()> {
    match chars.next() {
        Some((_, c)) if c == expected => Ok(()),
        Some((pos, c)) => Err(LogicError::UnexpectedChar(c, pos)),
        None => Err(LogicError::UnexpectedChar(expected, start)),
    }
}

fn eat_identifier(chars: &mut Peekable<CharIndices>) -> String {
    let mut ident = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if c.is_alphanumeric() || c == '_' {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn word_aliases_case_insensitive() {
        let tokens = tokenize("P and Q").unwrap();
        assert_eq!(tokens, vec![Token::Var("P".into()), Token::And, Token::Var("Q".into())]);
    }

    #[test]
    fn symbol_aliases() {
        assert_eq!(tokenize("P && Q").unwrap(), vec![Token::Var("P".into()), Token::And, Token::Var("Q".into())]);
        assert_eq!(tokenize("P -> Q").unwrap(), vec![Token::Var("P".into()), Token::Implies, Token::Var("Q".into())]);
        assert_eq!(tokenize("P <-> Q").unwrap(), vec![Token::Var("P".into()), Token::Iff, Token::Var("Q".into())]);
        assert_eq!(tokenize("P /\\ Q").unwrap(), vec![Token::Var("P".into()), Token::And, Token::Var("Q".into())]);
        assert_eq!(tokenize("P \\/ Q").unwrap(), vec![Token::Var("P".into()), Token::Or, Token::Var("Q".into())]);
    }

    #[test]
    fn unknown_char_errors() {
        assert!(tokenize("P @ Q").is_err());
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(tokenize("  P  ").unwrap(), vec![Token::Var("P".into())]);
    }
}
