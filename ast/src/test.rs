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

use crate::{evaluate, Assignment, Expression as E};

#[test]
fn evaluator_implies_and_iff() {
    // (P ∧ ¬(Q → (R ↔ S))) → T   under {P:T, Q:F, R:T, S:F, T:T}  => true  (E1)
    let expr = E::implies(
        E::and(
            E::var("P"),
            E::not(E::implies(E::var("Q"), E::iff(E::var("R"), E::var("S")))),
        ),
        E::var("T"),
    );
    let mut a = Assignment::new();
    a.set("P", true).set("Q", false).set("R", true).set("S", false).set("T", true);
    assert!(evaluate(&expr, &a));
}

#[test]
fn missing_variable_defaults_to_false() {
    let a = Assignment::new();
    assert!(!evaluate(&E::var("Z"), &a));
}

#[test]
fn depth_matches_spec_definition() {
    assert_eq!(E::var("P").depth(), 0);
    assert_eq!(E::not(E::var("P")).depth(), 1);
    let pq = E::and(E::var("P"), E::var("Q"));
    assert_eq!(pq.depth(), 1);
    assert_eq!(E::not(pq).depth(), 2);
}
