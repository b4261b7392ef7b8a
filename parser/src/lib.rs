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

//! Tokenizer and Shunting-Yard parser turning formula/sequent text
//! into the typed AST defined by `logic-ast`.

mod sequent;
mod shunting_yard;
mod token;
mod tokenizer;

pub use sequent::parse_sequent;
pub use shunting_yard::parse_formula;
pub use token::Token;
pub use tokenizer::tokenize;
