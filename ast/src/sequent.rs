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

use crate::ProofLine;

/// A one-line argument: a list of premises and a conclusion, each
/// already parsed into a self-justifying [`ProofLine`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sequent {
    pub premises: Vec<ProofLine>,
    pub conclusion: ProofLine,
}

impl Sequent {
    /// All lines of the sequent in argument order: premises then the
    /// conclusion, ready to feed straight into the truth-table analyser.
    pub fn lines(&self) -> Vec<ProofLine> {
        let mut lines = self.premises.clone();
        lines.push(self.conclusion.clone());
        lines
    }
}
