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

//! The typed expression tree at the center of `logic-lang`, plus the
//! evaluator, structural comparator, canonical printer, and
//! sub-expression extractor that operate on it.
//!
//! Expressions are value-owned trees (`Box`ed children, no sharing,
//! no identity beyond structural equality) — see `DESIGN.md` for why
//! this departs from the source system's reference-passing model.

mod assignment;
mod comparator;
mod expression;
mod evaluator;
mod printer;
mod proof_line;
mod sequent;
mod subexpr;

pub use assignment::Assignment;
pub use comparator::structurally_equivalent;
pub use expression::Expression;
pub use evaluator::evaluate;
pub use printer::{format_spacing, to_string};
pub use proof_line::{AutoType, ProofLine};
pub use sequent::Sequent;
pub use subexpr::collect_subexpressions;

#[cfg(test)]
mod test;
