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

/// One of the ~25 replacement/inference rules this crate can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCode {
    Dist,
    Comm,
    Assoc,
    Exp,
    Dn,
    DeMorgan,
    Contra,
    Simp,
    Be,
    Taut,
    Cpa,
    Raa,
    NotIntro,
    Mp,
    Mt,
    Mpt,
    Hs,
    Ds,
    Cd,
    Dd,
    AndIntro,
    AndElim,
    OrIntro,
    OrElim,
    Abs,
}

impl RuleCode {
    /// The canonical short code as written in a Lemmon proof's rule
    /// column.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::Dist => "Dist",
            RuleCode::Comm => "Comm",
            RuleCode::Assoc => "Assoc",
            RuleCode::Exp => "Exp",
            RuleCode::Dn => "DN",
            RuleCode::DeMorgan => "DeM",
            RuleCode::Contra => "Contra",
            RuleCode::Simp => "Simp",
            RuleCode::Be => "BE",
            RuleCode::Taut => "T",
            RuleCode::Cpa => "CPA",
            RuleCode::Raa => "RAA",
            RuleCode::NotIntro => "¬I",
            RuleCode::Mp => "MP",
            RuleCode::Mt => "MT",
            RuleCode::Mpt => "MPT",
            RuleCode::Hs => "HS",
            RuleCode::Ds => "DS",
            RuleCode::Cd => "CD",
            RuleCode::Dd => "DD",
            RuleCode::AndIntro => "∧I",
            RuleCode::AndElim => "∧E",
            RuleCode::OrIntro => "∨I",
            RuleCode::OrElim => "∨E",
            RuleCode::Abs => "Abs",
        }
    }

    /// Looks up a rule by any of its accepted spellings, case- and
    /// whitespace-insensitive.
    pub fn from_alias(raw: &str) -> Option<RuleCode> {
        let key: String = raw.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_lowercase();
        Some(match key.as_str() {
            "dist" | "distribution" => RuleCode::Dist,
            "comm" | "commutativity" | "commutation" => RuleCode::Comm,
            "assoc" | "association" | "associativity" => RuleCode::Assoc,
            "exp" | "exportation" => RuleCode::Exp,
            "dn" | "doublenegation" | "dneg" => RuleCode::Dn,
            "dem" | "demorgan" | "demorgan's" | "¬∧∨" => RuleCode::DeMorgan,
            "contra" | "contraposition" => RuleCode::Contra,
            "simp" | "simplification" => RuleCode::Simp,
            "be" | "bicondexchange" | "biconditionalexchange" => RuleCode::Be,
            "t" | "taut" | "tautology" => RuleCode::Taut,
            "cpa" | "cp" | "conditionalproof" => RuleCode::Cpa,
            "raa" | "reductio" | "indirectproof" | "ip" => RuleCode::Raa,
            "¬i" | "noti" | "negintro" | "negationintroduction" => RuleCode::NotIntro,
            "mp" | "modusponens" => RuleCode::Mp,
            "mt" | "modustollens" => RuleCode::Mt,
            "mpt" | "modusponendotollens" => RuleCode::Mpt,
            "hs" | "hypotheticalsyllogism" => RuleCode::Hs,
            "ds" | "disjunctivesyllogism" => RuleCode::Ds,
            "cd" | "constructivedilemma" => RuleCode::Cd,
            "dd" | "destructivedilemma" => RuleCode::Dd,
            "∧i" | "andi" | "conjintro" | "conjunctionintroduction" => RuleCode::AndIntro,
            "∧e" | "ande" | "conje" | "conjunctionelimination" | "simplification(∧e)" => RuleCode::AndElim,
            "∨i" | "ori" | "addition" | "disjunctionintroduction" => RuleCode::OrIntro,
            "∨e" | "ore" | "disjunctionelimination" | "casesrule" => RuleCode::OrElim,
            "abs" | "absorption" => RuleCode::Abs,
            _ => return None,
        })
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn aliases_are_case_and_space_insensitive() {
        assert_eq!(RuleCode::from_alias("Modus Ponens"), Some(RuleCode::Mp));
        assert_eq!(RuleCode::from_alias("  mp "), Some(RuleCode::Mp));
        assert_eq!(RuleCode::from_alias("MODUSPONENS"), Some(RuleCode::Mp));
    }

    #[test]
    fn unknown_alias_is_none() {
        assert_eq!(RuleCode::from_alias("not-a-rule"), None);
    }

    #[test]
    fn round_trips_through_as_str() {
        for code in [RuleCode::Mp, RuleCode::DeMorgan, RuleCode::Cpa, RuleCode::AndElim] {
            assert_eq!(RuleCode::from_alias(code.as_str()), Some(code));
        }
    }
}
