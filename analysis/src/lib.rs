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

//! Truth-table enumeration, classification, and validity checking
//! over a sequence of parsed proof lines.

mod assumptions;
mod truth_table;

pub use assumptions::verify_assumption_discharge;
pub use truth_table::{analyse, Classification, TruthTableResult};
