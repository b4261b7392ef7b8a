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

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A total function from variable name to boolean, implemented as a
/// partial map: any name absent from the map evaluates to `false`.
///
/// This default-false convention is deliberate and documented (spec
/// §3, §9) — callers depend on it, so it must never become an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment(HashMap<String, bool>);

impl Assignment {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) -> &mut Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Looks up `name`, defaulting to `false` if it is unassigned.
    pub fn get(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }
}

impl FromIterator<(String, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
