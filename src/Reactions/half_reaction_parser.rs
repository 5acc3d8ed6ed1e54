//! Text form of half-reactions: "MnO₄⁻ + 8H⁺ + 5e⁻".
//!
//! The engine never computes with text; the parser is used to check that the display
//! text of a catalog entry agrees with its structured form, and by tools that want to
//! turn typed text into a [`HalfReaction`].
//!
//! A `+` separates terms unless it directly follows an ASCII letter, digit or `^`; there
//! it is an ASCII charge and stays with its species. "2H+ + 2e-" is two terms, "H+" and
//! "2e-", and so is "Ag⁺+e⁻".
use crate::Catalogs::ions::{HalfReaction, Species};
use crate::chem_errors::ChemError;
use regex::Regex;
use std::sync::LazyLock;

// the character before the `+` belongs to the previous term
static TERM_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^A-Za-z0-9^])\+").expect("static regex"));
static COEFF_AND_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d*)\s*(.*)$").expect("static regex"));
// e, e-, e⁻, e^-, e–, e− in any case
static ELECTRON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^e\s*\^?\s*[-⁻–−]?$").expect("static regex"));

const EQUATION_SEPARATORS: [&str; 5] = ["⇌", "⇄", "→", "->", "="];

/// one side of a half-reaction: electrons removed from the species list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHalfReaction {
    /// 0 when the text has no electron term
    pub electrons: u32,
    pub species: Vec<Species>,
}

fn parse_term(term: &str) -> Result<Option<(u32, String)>, ChemError> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(None);
    }
    let caps = COEFF_AND_LABEL
        .captures(term)
        .ok_or_else(|| ChemError::ParseError(format!("cannot read term '{}'", term)))?;
    let digits = caps.get(1).map_or("", |m| m.as_str());
    let label = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
    let coeff = if digits.is_empty() {
        1
    } else {
        digits
            .parse::<u32>()
            .map_err(|e| ChemError::ParseError(format!("coefficient '{}': {}", digits, e)))?
    };
    if label.is_empty() {
        return Err(ChemError::ParseError(format!("term '{}' has no species", term)));
    }
    Ok(Some((coeff, label)))
}

fn split_terms(text: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut start = 0;
    for m in TERM_SEPARATOR.find_iter(text) {
        let plus = m.end() - 1;
        terms.push(&text[start..plus]);
        start = m.end();
    }
    terms.push(&text[start..]);
    terms
}

pub fn is_electron_token(label: &str) -> bool {
    ELECTRON.is_match(label.trim())
}

/// Splits one side of a half-reaction into electrons and species.
/// Missing electron term gives `electrons == 0`; callers that balance must reject that
pub fn parse_half_reaction(text: &str) -> Result<ParsedHalfReaction, ChemError> {
    let mut electrons: u32 = 0;
    let mut species = Vec::new();
    for term in split_terms(text) {
        if let Some((coeff, label)) = parse_term(term)? {
            if is_electron_token(&label) {
                electrons = electrons.checked_add(coeff).ok_or_else(|| {
                    ChemError::ParseError(format!("too many electrons in '{}'", text))
                })?;
            } else {
                species.push(Species {
                    species: label,
                    coeff,
                });
            }
        }
    }
    Ok(ParsedHalfReaction { electrons, species })
}

/// Full reduction half-reaction "Ox + n e⁻ ⇌ Red" into its structured form
pub fn parse_half_equation(text: &str) -> Result<HalfReaction, ChemError> {
    let (left, right) = EQUATION_SEPARATORS
        .iter()
        .find_map(|sep| text.split_once(sep))
        .ok_or_else(|| ChemError::ParseError(format!("no reaction arrow in '{}'", text)))?;
    let left = parse_half_reaction(left)?;
    let right = parse_half_reaction(right)?;
    if right.electrons > 0 {
        return Err(ChemError::ParseError(format!(
            "electrons on the product side of '{}', expected a reduction",
            text
        )));
    }
    if left.electrons == 0 {
        return Err(ChemError::MissingElectronTerm(text.to_string()));
    }
    if left.species.is_empty() || right.species.is_empty() {
        return Err(ChemError::EmptyHalfReaction(text.to_string()));
    }
    Ok(HalfReaction {
        electrons: left.electrons,
        reactants: left.species,
        products: right.species,
    })
}
