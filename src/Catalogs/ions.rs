//! Ions, redox half-reaction descriptors and the ion catalog.
//!
//! Every half-reaction is stored in the reduction direction: `Ox + n e⁻ ⇌ Red`.
//! The structured form ([`HalfReaction`]) is the only thing the engine computes with,
//! the raw text is kept for display and for consistency checks.
use crate::Reactions::half_reaction_parser::parse_half_equation;
use crate::chem_errors::ChemError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// species with its stoichiometric coefficient, e.g. ("H⁺", 8)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub species: String,
    pub coeff: u32,
}

impl Species {
    pub fn new(species: &str, coeff: u32) -> Self {
        Self {
            species: species.to_string(),
            coeff,
        }
    }
    pub fn normalized(&self) -> String {
        normalize_species(&self.species)
    }
}

/// structured half-reaction written as a reduction: reactants + electrons -> products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfReaction {
    pub electrons: u32,
    pub reactants: Vec<Species>,
    pub products: Vec<Species>,
}

impl HalfReaction {
    pub fn new(electrons: u32, reactants: &[(&str, u32)], products: &[(&str, u32)]) -> Self {
        Self {
            electrons,
            reactants: reactants.iter().map(|(s, c)| Species::new(s, *c)).collect(),
            products: products.iter().map(|(s, c)| Species::new(s, *c)).collect(),
        }
    }
    /// checks the structural invariants: electrons > 0, both sides non-empty, coefficients > 0
    pub fn validate(&self, label: &str) -> Result<(), ChemError> {
        if self.electrons == 0 {
            return Err(ChemError::MissingElectronTerm(label.to_string()));
        }
        if self.reactants.is_empty() || self.products.is_empty() {
            return Err(ChemError::EmptyHalfReaction(label.to_string()));
        }
        if let Some(bad) = self
            .reactants
            .iter()
            .chain(self.products.iter())
            .find(|s| s.coeff == 0 || s.species.trim().is_empty())
        {
            return Err(ChemError::ParseError(format!(
                "invalid species term '{}' (coefficient {}) in '{}'",
                bad.species, bad.coeff, label
            )));
        }
        Ok(())
    }
    /// same chemistry regardless of state annotations, glyph variants and term order
    pub fn is_equivalent_to(&self, other: &HalfReaction) -> bool {
        fn side(species: &[Species]) -> Vec<(String, u32)> {
            let mut v: Vec<(String, u32)> = species.iter().map(|s| (s.normalized(), s.coeff)).collect();
            v.sort();
            v
        }
        self.electrons == other.electrons
            && side(&self.reactants) == side(&other.reactants)
            && side(&self.products) == side(&other.products)
    }
}

/// role tag as it is written in the reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedoxType {
    Oxidator,
    Reductor,
    Both,
}

/// one redox couple of an ion or reagent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedoxEntry {
    /// standard potential, V
    pub v0: f64,
    #[serde(rename = "type")]
    pub role: RedoxType,
    /// human-readable text, display only
    pub half_reaction: String,
    pub structured: HalfReaction,
}

impl RedoxEntry {
    pub fn new(v0: f64, role: RedoxType, half_reaction: &str, structured: HalfReaction) -> Self {
        Self {
            v0,
            role,
            half_reaction: half_reaction.to_string(),
            structured,
        }
    }
    /// expands the role tag: `both` gives an oxidizer and a reductor
    pub fn roles(&self) -> Vec<RedoxRole<'_>> {
        match self.role {
            RedoxType::Oxidator => vec![RedoxRole::Oxidizer(self)],
            RedoxType::Reductor => vec![RedoxRole::Reductor(self)],
            RedoxType::Both => vec![RedoxRole::Oxidizer(self), RedoxRole::Reductor(self)],
        }
    }
    /// Ok(true) when the display text describes the same half-reaction as the structured form
    pub fn text_matches_structure(&self) -> Result<bool, ChemError> {
        let parsed = parse_half_equation(&self.half_reaction)?;
        Ok(parsed.is_equivalent_to(&self.structured))
    }
}

/// a redox entry acting in one direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RedoxRole<'a> {
    /// gets reduced: consumes the reactant side of the half-reaction
    Oxidizer(&'a RedoxEntry),
    /// gets oxidized: consumes the product side of the half-reaction
    Reductor(&'a RedoxEntry),
}

impl<'a> RedoxRole<'a> {
    pub fn entry(&self) -> &'a RedoxEntry {
        match self {
            RedoxRole::Oxidizer(e) | RedoxRole::Reductor(e) => e,
        }
    }
    pub fn potential(&self) -> f64 {
        self.entry().v0
    }
    /// species that must be present in solution for this role to act
    pub fn consumed_species(&self) -> &'a [Species] {
        match self {
            RedoxRole::Oxidizer(e) => &e.structured.reactants,
            RedoxRole::Reductor(e) => &e.structured.products,
        }
    }
    pub fn is_oxidizer(&self) -> bool {
        matches!(self, RedoxRole::Oxidizer(_))
    }
}

/// keeps the entries that satisfy the half-reaction invariants, logs the rest
pub fn retain_valid_redox(owner: &str, entries: Vec<RedoxEntry>) -> Vec<RedoxEntry> {
    entries
        .into_iter()
        .filter(|entry| {
            if let Err(e) = entry.structured.validate(&entry.half_reaction) {
                warn!("{}: dropping redox entry '{}': {}", owner, entry.half_reaction, e);
                return false;
            }
            match entry.text_matches_structure() {
                Ok(true) => {}
                Ok(false) => warn!(
                    "{}: text '{}' differs from its structured form, the structured form is used",
                    owner, entry.half_reaction
                ),
                Err(e) => debug!("{}: text '{}' not checked: {}", owner, entry.half_reaction, e),
            }
            true
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ion {
    pub id: String,
    /// display formula with charge glyphs, e.g. "SO₄²⁻"
    pub formula: String,
    pub charge: i32,
    pub name: String,
    #[serde(default = "transparent")]
    pub color: String,
    #[serde(default)]
    pub redox: Vec<RedoxEntry>,
}

pub(crate) fn transparent() -> String {
    "transparent".to_string()
}

impl Ion {
    pub fn new(id: &str, formula: &str, charge: i32, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            formula: formula.to_string(),
            charge,
            name: name.to_string(),
            color: color.to_string(),
            redox: Vec::new(),
        }
    }
    pub fn with_redox(mut self, redox: Vec<RedoxEntry>) -> Self {
        self.redox = redox;
        self
    }
    /// formula without charge glyphs and with ASCII digits: "SO₄²⁻" -> "SO4"
    pub fn core_formula(&self) -> String {
        core_formula(&self.formula)
    }
    pub fn is_colored(&self) -> bool {
        self.color != "transparent"
    }
}

/// serializable form of the ion catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IonTable {
    #[serde(default)]
    pub cations: Vec<Ion>,
    #[serde(default)]
    pub anions: Vec<Ion>,
}

/// Immutable map of cations and anions. Constructed once from an [`IonTable`];
/// ions with a zero or wrongly signed charge never get in.
#[derive(Debug, Clone, Default)]
pub struct IonCatalog {
    cations: HashMap<String, Ion>,
    anions: HashMap<String, Ion>,
    cation_order: Vec<String>,
    anion_order: Vec<String>,
}

fn check_charge(ion: &Ion, cation: bool) -> Result<(), ChemError> {
    if ion.charge == 0 {
        return Err(ChemError::ZeroCharge(ion.id.clone()));
    }
    if cation && ion.charge < 0 {
        return Err(ChemError::ChargeSignMismatch {
            id: ion.id.clone(),
            charge: ion.charge,
            expected: "positive",
        });
    }
    if !cation && ion.charge > 0 {
        return Err(ChemError::ChargeSignMismatch {
            id: ion.id.clone(),
            charge: ion.charge,
            expected: "negative",
        });
    }
    Ok(())
}

impl IonCatalog {
    pub fn from_table(table: IonTable) -> Self {
        let mut catalog = IonCatalog::default();
        for (ions, is_cation) in [(table.cations, true), (table.anions, false)] {
            for mut ion in ions {
                if let Err(e) = check_charge(&ion, is_cation) {
                    warn!("skipping ion {}: {}", ion.id, e);
                    continue;
                }
                ion.redox = retain_valid_redox(&ion.id, std::mem::take(&mut ion.redox));
                let (map, order) = if is_cation {
                    (&mut catalog.cations, &mut catalog.cation_order)
                } else {
                    (&mut catalog.anions, &mut catalog.anion_order)
                };
                if map.contains_key(&ion.id) {
                    warn!("duplicate ion {}, keeping the first definition", ion.id);
                    continue;
                }
                order.push(ion.id.clone());
                map.insert(ion.id.clone(), ion);
            }
        }
        catalog
    }
    /// built-in reference ions
    pub fn standard() -> Self {
        Self::from_table(super::standard_data::standard_ion_table())
    }
    pub fn from_json_str(json: &str) -> Result<Self, ChemError> {
        let table: IonTable = serde_json::from_str(json)?;
        Ok(Self::from_table(table))
    }
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ChemError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
    pub fn to_table(&self) -> IonTable {
        IonTable {
            cations: self.cations().cloned().collect(),
            anions: self.anions().cloned().collect(),
        }
    }
    pub fn cation(&self, id: &str) -> Option<&Ion> {
        self.cations.get(id)
    }
    pub fn anion(&self, id: &str) -> Option<&Ion> {
        self.anions.get(id)
    }
    /// cations in definition order
    pub fn cations(&self) -> impl Iterator<Item = &Ion> {
        self.cation_order.iter().filter_map(|id| self.cations.get(id))
    }
    pub fn anions(&self) -> impl Iterator<Item = &Ion> {
        self.anion_order.iter().filter_map(|id| self.anions.get(id))
    }
    pub fn len(&self) -> usize {
        self.cations.len() + self.anions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//////////////////////////////FORMULA TEXT HELPERS////////////////////////////////////////
const SUBSCRIPTS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const STATE_MARKS: [&str; 8] = ["(aq)", "(l)", "(g)", "(s)", "(AQ)", "(L)", "(G)", "(S)"];

fn subscript_digit(c: char) -> Option<char> {
    SUBSCRIPTS
        .iter()
        .position(|&s| s == c)
        .and_then(|d| char::from_digit(d as u32, 10))
}

fn superscript_digit(c: char) -> Option<char> {
    SUPERSCRIPTS
        .iter()
        .position(|&s| s == c)
        .and_then(|d| char::from_digit(d as u32, 10))
}

fn is_minus_glyph(c: char) -> bool {
    matches!(c, '-' | '⁻' | '–' | '−')
}

/// removes physical state annotations: "Cu(s)" -> "Cu"
pub fn strip_state(label: &str) -> String {
    let mut label = label.trim().to_string();
    for mark in STATE_MARKS {
        label = label.replace(mark, "");
    }
    label.trim().to_string()
}

/// Matching key of a species label: state annotations removed, whitespace removed,
/// subscript/superscript digits turned into ASCII, charge glyphs into '+'/'-'.
/// "H₂O(l)" and "H2O" give the same key, as do "Cu²⁺" and "Cu2+".
pub fn normalize_species(label: &str) -> String {
    strip_state(label)
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '^')
        .map(|c| {
            if let Some(d) = subscript_digit(c).or_else(|| superscript_digit(c)) {
                d
            } else if c == '⁺' {
                '+'
            } else if is_minus_glyph(c) {
                '-'
            } else {
                c
            }
        })
        .collect()
}

/// Formula of an ion without its charge, ASCII digits:
/// "NO₃⁻" -> "NO3", "Fe³⁺" -> "Fe", "SO4^2-" -> "SO4"
pub fn core_formula(display: &str) -> String {
    let mut core: String = display
        .trim()
        .chars()
        .filter(|&c| superscript_digit(c).is_none() && c != '⁺' && c != '⁻')
        .map(|c| subscript_digit(c).unwrap_or(c))
        .collect();
    // ASCII charge suffix
    if core.ends_with('+') || core.ends_with('-') {
        while core.ends_with('+') || core.ends_with('-') {
            core.pop();
        }
        if let Some(caret) = core.rfind('^') {
            if core[caret + 1..].chars().all(|c| c.is_ascii_digit()) {
                core.truncate(caret);
            }
        }
    }
    core
}

/// ASCII formula for display: "Ca3(PO4)2" -> "Ca₃(PO₄)₂"
pub fn to_display_formula(formula: &str) -> String {
    formula
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => SUBSCRIPTS[d as usize],
            None => c,
        })
        .collect()
}
