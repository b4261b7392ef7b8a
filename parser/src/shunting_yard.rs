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

use crate::{tokenize, Token};
use logic_ast::Expression;
use logic_errors::{LogicError, Result};

/// Parses `text` into a typed [`Expression`] tree using the
/// Shunting-Yard algorithm: tokens are reduced to RPN with two
/// explicit stacks, then a second pass builds the AST.
pub fn parse_formula(text: &str) -> Result<Expression> {
    let tokens = tokenize(text)?;
    let rpn = to_rpn(tokens, text)?;
    build_ast(rpn, text)
}

/// Reduces `tokens` to reverse-Polish order using the classic
/// two-stack Shunting-Yard algorithm, with the standard
/// precedence/associativity popping rule.
fn to_rpn(tokens: Vec<Token>, source: &str) -> Result<Vec<Token>> {
    let mut output = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Var(_) => output.push(token),
            Token::LeftParen => operators.push(token),
            Token::RightParen => {
                loop {
                    match operators.pop() {
                        Some(Token::LeftParen) => break,
                        Some(op) => output.push(op),
                        None => return Err(LogicError::UnbalancedParens(source.to_string())),
                    }
                }
            }
            ref op_token => {
                let incoming_prec = op_token.precedence().expect("operator token");
                while let Some(top) = operators.last() {
                    if !top.is_operator() {
                        break;
                    }
                    let top_prec = top.precedence().expect("operator token");
                    let should_pop = top_prec > incoming_prec
                        || (top_prec == incoming_prec && !op_token.is_right_associative());
                    if !should_pop {
                        break;
                    }
                    output.push(operators.pop().unwrap());
                }
                operators.push(token);
            }
        }
    }

    while let Some(op) = operators.pop() {
        if op == Token::LeftParen {
            return Err(LogicError::UnbalancedParens(source.to_string()));
        }
        output.push(op);
    }

    Ok(output)
}

/// Builds an [`Expression`] tree from an RPN token sequence: `¬` pops
/// one operand, binary operators pop right then left.
fn build_ast(rpn: Vec<Token>, source: &str) -> Result<Expression> {
    let mut stack: Vec<Expression> = Vec::new();

    for token in rpn {
        match token {
            Token::Var(name) => stack.push(Expression::Var(name)),
            Token::Not => {
                let operand = stack.pop().ok_or(LogicError::MissingNotOperand)?;
                stack.push(Expression::not(operand));
            }
            Token::LeftParen | Token::RightParen => {
                return Err(LogicError::UnknownOperator(token.to_string()));
            }
            op_token => {
                let right = stack
                    .pop()
                    .ok_or_else(|| LogicError::InsufficientOperands(op_token.to_string()))?;
                let left = stack
                    .pop()
                    .ok_or_else(|| LogicError::InsufficientOperands(op_token.to_string()))?;
                stack.push(match op_token {
                    Token::And => Expression::and(left, right),
                    Token::Or => Expression::or(left, right),
                    Token::Xor => Expression::xor(left, right),
                    Token::Implies => Expression::implies(left, right),
                    Token::Iff => Expression::iff(left, right),
                    _ => unreachable!("non-binary token handled above"),
                });
            }
        }
    }

    if stack.len() != 1 {
        return Err(LogicError::MalformedExpression(source.to_string()));
    }
    Ok(stack.pop().unwrap())
}

#[cfg(test)]
mod test {
    use super::*;
    use logic_ast::{evaluate, to_string, Assignment};

    #[test]
    fn precedence_and_binds_tighter_than_or() {
        let expr = parse_formula("P ∨ Q ∧ R").unwrap();
        assert_eq!(to_string(&expr), "P ∨ (Q ∧ R)");
    }

    #[test]
    fn implies_is_right_associative() {
        let expr = parse_formula("P → Q → R").unwrap();
        assert_eq!(to_string(&expr), "P → (Q → R)");
    }

    #[test]
    fn and_is_left_associative() {
        let expr = parse_formula("P ∧ Q ∧ R").unwrap();
        assert_eq!(to_string(&expr), "(P ∧ Q) ∧ R");
    }

    #[test]
    fn double_negation() {
        let expr = parse_formula("¬¬P").unwrap();
        assert_eq!(to_string(&expr), "¬¬P");
    }

    #[test]
    fn parens_override_precedence() {
        let expr = parse_formula("(P ∨ Q) ∧ R").unwrap();
        assert_eq!(to_string(&expr), "(P ∨ Q) ∧ R");
    }

    #[test]
    fn unbalanced_parens_errors() {
        assert!(matches!(parse_formula("(P ∧ Q"), Err(LogicError::UnbalancedParens(_))));
        assert!(matches!(parse_formula("P ∧ Q)"), Err(LogicError::UnbalancedParens(_))));
    }

    #[test]
    fn missing_not_operand_errors() {
        assert!(matches!(parse_formula("¬"), Err(LogicError::MissingNotOperand)));
    }

    #[test]
    fn insufficient_operands_errors() {
        assert!(matches!(parse_formula("P ∧"), Err(LogicError::InsufficientOperands(_))));
    }

    #[test]
    fn e1_end_to_end() {
        let expr = parse_formula("(P ∧ ¬(Q → (R ↔ S))) → T").unwrap();
        let mut a = Assignment::new();
        a.set("P", true).set("Q", false).set("R", true).set("S", false).set("T", true);
        assert!(evaluate(&expr, &a));
    }
}
