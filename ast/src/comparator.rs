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

use crate::Expression;

/// Structural equality modulo commutativity of `∧`, `∨`, and `↔`.
/// `→` and `⊕` are commutative in the classical semantics but are
/// treated as ordered here on purpose.
pub fn structurally_equivalent(a: &Expression, b: &Expression) -> bool {
    use Expression::*;
    match (a, b) {
        (Var(x), Var(y)) => x == y,
        (Not(x), Not(y)) => structurally_equivalent(x, y),
        (And(al, ar), And(bl, br)) | (Or(al, ar), Or(bl, br)) | (Iff(al, ar), Iff(bl, br)) => {
            (structurally_equivalent(al, bl) && structurally_equivalent(ar, br))
                || (structurally_equivalent(al, br) && structurally_equivalent(ar, bl))
        }
        (Implies(al, ar), Implies(bl, br)) | (Xor(al, ar), Xor(bl, br)) => {
            structurally_equivalent(al, bl) && structurally_equivalent(ar, br)
        }
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Expression as E;

    #[test]
    fn and_is_commutative() {
        let a = E::and(E::var("P"), E::var("Q"));
        let b = E::and(E::var("Q"), E::var("P"));
        assert!(structurally_equivalent(&a, &b));
    }

    #[test]
    fn implies_is_ordered() {
        let a = E::implies(E::var("P"), E::var("Q"));
        let b = E::implies(E::var("Q"), E::var("P"));
        assert!(!structurally_equivalent(&a, &b));
    }

    #[test]
    fn xor_is_ordered_by_design() {
        let a = E::xor(E::var("P"), E::var("Q"));
        let b = E::xor(E::var("Q"), E::var("P"));
        assert!(!structurally_equivalent(&a, &b));
    }

    #[test]
    fn distinct_variants_never_equal() {
        let a = E::and(E::var("P"), E::var("Q"));
        let b = E::or(E::var("P"), E::var("Q"));
        assert!(!structurally_equivalent(&a, &b));
    }
}
