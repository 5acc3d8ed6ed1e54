//! Reactions the rule engines cannot derive: complexes, indicators and a few named lab
//! reactions, plus the acid–base rules for a strong acid against basic anions.
use super::reaction_result::{ReactionResult, ReactionType};
use super::salt_formula::synthesize_formula;
use super::solubility::is_insoluble;
use crate::Catalogs::ions::IonCatalog;
use crate::Catalogs::reagents::Reagent;
use log::debug;

/// hand-authored outcome of one unordered reagent pair
#[derive(Debug, Clone, Copy)]
pub struct ExceptionalReaction {
    pub pair: [&'static str; 2],
    pub reaction_type: ReactionType,
    pub products: &'static str,
    pub observation: &'static str,
    pub observation_key: &'static str,
    pub equation: &'static str,
    pub color: Option<&'static str>,
}

impl ExceptionalReaction {
    fn involves(&self, id_a: &str, id_b: &str) -> bool {
        let [p, q] = self.pair;
        (p == id_a && q == id_b) || (p == id_b && q == id_a)
    }
    pub fn to_result(&self) -> ReactionResult {
        let result = ReactionResult::new(
            &self.pair,
            self.reaction_type,
            self.products.to_string(),
            self.observation.to_string(),
            self.equation.to_string(),
        )
        .with_key(self.observation_key);
        match self.color {
            Some(color) => result.with_color(color),
            None => result,
        }
    }
}

pub const EXCEPTIONAL_REACTIONS: [ExceptionalReaction; 8] = [
    ExceptionalReaction {
        pair: ["cuso4", "nh3"],
        reaction_type: ReactionType::Complexation,
        products: "[Cu(NH3)4]SO4",
        observation: "The light blue solution turns deep dark blue.",
        observation_key: "complex_formed_copper",
        equation: "Cu²⁺ + 4NH₃ → [Cu(NH₃)₄]²⁺",
        color: Some("dark-blue"),
    },
    ExceptionalReaction {
        pair: ["hcl", "mg_s"],
        reaction_type: ReactionType::Redox,
        products: "MgCl2 + H2(g)",
        observation: "Fizzing, a gas is given off (hydrogen).",
        observation_key: "gas_formation_hydrogen",
        equation: "Mg + 2H⁺ → Mg²⁺ + H₂(g)",
        color: None,
    },
    ExceptionalReaction {
        pair: ["kmno4", "naso3"],
        reaction_type: ReactionType::Redox,
        products: "Mn²⁺ + SO₄²⁻",
        observation: "The purple colour disappears. A brown precipitate may form in neutral solution.",
        observation_key: "redox_detected",
        equation: "2MnO₄⁻ + 5SO₃²⁻ + 6H⁺ → 2Mn²⁺ + 5SO₄²⁻ + 3H₂O (acidic)",
        color: None,
    },
    ExceptionalReaction {
        pair: ["i2", "nas2o3"],
        reaction_type: ReactionType::Redox,
        products: "I⁻ + S₄O₆²⁻",
        observation: "The brown iodine colour disappears, the solution becomes colourless.",
        observation_key: "redox_detected",
        equation: "I₂ + 2S₂O₃²⁻ → 2I⁻ + S₄O₆²⁻",
        color: None,
    },
    ExceptionalReaction {
        pair: ["i2", "starch"],
        reaction_type: ReactionType::Complexation,
        products: "iodine-starch complex",
        observation: "Intense blue-black colour.",
        observation_key: "iodine_starch_complex",
        equation: "I₂ + starch → blue complex",
        color: Some("blue-black"),
    },
    ExceptionalReaction {
        pair: ["nh3", "hcl"],
        reaction_type: ReactionType::Neutralization,
        products: "NH₄Cl (white smoke)",
        observation: "White smoke appears (when concentrated) or the mixture warms up.",
        observation_key: "white_smoke_detected",
        equation: "NH₃ + HCl → NH₄Cl",
        color: Some("white"),
    },
    ExceptionalReaction {
        pair: ["ch3cooh", "naoh"],
        reaction_type: ReactionType::Neutralization,
        products: "NaCH₃COO + H₂O",
        observation: "The temperature rises (neutralization), nothing else is visible.",
        observation_key: "neutralization_detected",
        equation: "CH₃COOH + OH⁻ → CH₃COO⁻ + H₂O",
        color: None,
    },
    ExceptionalReaction {
        pair: ["caoh2", "co2"],
        reaction_type: ReactionType::Precipitation,
        products: "CaCO₃(s) + H₂O",
        observation: "Limewater turns milky (white precipitate).",
        observation_key: "limewater_turbid",
        equation: "Ca²⁺(aq) + 2OH⁻(aq) + CO₂(g) → CaCO₃(s) + H₂O(l)",
        color: Some("white"),
    },
];

/// table entry for the unordered pair, if any
pub fn lookup_exceptional(id_a: &str, id_b: &str) -> Option<ReactionResult> {
    EXCEPTIONAL_REACTIONS
        .iter()
        .find(|r| r.involves(id_a, id_b))
        .map(|r| r.to_result())
}

//////////////////////////////////ACID–BASE RULES///////////////////////////////////////////
/// net ionic outcome of H⁺ meeting a basic anion
struct AcidBaseRule {
    anion: &'static str,
    reaction_type: ReactionType,
    products: &'static str,
    observation: &'static str,
    observation_key: &'static str,
    equation: &'static str,
}

const ACID_BASE_RULES: [AcidBaseRule; 8] = [
    AcidBaseRule {
        anion: "CO3",
        reaction_type: ReactionType::GasFormation,
        products: "H₂O + CO₂(g)",
        observation: "Fizzing (carbon dioxide).",
        observation_key: "gas_formation_detected",
        equation: "2H⁺ + CO₃²⁻ → H₂O + CO₂(g)",
    },
    AcidBaseRule {
        anion: "HCO3",
        reaction_type: ReactionType::GasFormation,
        products: "H₂O + CO₂(g)",
        observation: "Fizzing (carbon dioxide).",
        observation_key: "gas_formation_detected",
        equation: "H⁺ + HCO₃⁻ → H₂O + CO₂(g)",
    },
    AcidBaseRule {
        anion: "SO3",
        reaction_type: ReactionType::GasFormation,
        products: "H₂O + SO₂(g)",
        observation: "A gas with a pungent smell is given off.",
        observation_key: "gas_formation_detected",
        equation: "2H⁺ + SO₃²⁻ → H₂O + SO₂(g)",
    },
    AcidBaseRule {
        anion: "HSO3",
        reaction_type: ReactionType::GasFormation,
        products: "H₂O + SO₂(g)",
        observation: "A gas with a pungent smell is given off.",
        observation_key: "gas_formation_detected",
        equation: "H⁺ + HSO₃⁻ → H₂O + SO₂(g)",
    },
    AcidBaseRule {
        anion: "S",
        reaction_type: ReactionType::GasFormation,
        products: "H₂S(g)",
        observation: "A gas smelling of rotten eggs is given off.",
        observation_key: "gas_formation_detected",
        equation: "2H⁺ + S²⁻ → H₂S(g)",
    },
    AcidBaseRule {
        anion: "HS",
        reaction_type: ReactionType::GasFormation,
        products: "H₂S(g)",
        observation: "A gas smelling of rotten eggs is given off.",
        observation_key: "gas_formation_detected",
        equation: "H⁺ + HS⁻ → H₂S(g)",
    },
    AcidBaseRule {
        anion: "PO4",
        reaction_type: ReactionType::Neutralization,
        products: "H₃PO₄",
        observation: "The temperature rises slightly, the solution stays clear.",
        observation_key: "neutralization_detected",
        equation: "3H⁺ + PO₄³⁻ → H₃PO₄",
    },
    AcidBaseRule {
        anion: "OH",
        reaction_type: ReactionType::Neutralization,
        products: "H₂O",
        observation: "The temperature rises (neutralization).",
        observation_key: "neutralization_detected",
        equation: "H⁺ + OH⁻ → H₂O",
    },
];

pub const ACID_CATION: &str = "H";

/// Strong acid (cation H) against a basic anion of the other reagent.
/// The remaining ions are listed as the salt they form; an insoluble salt is marked (s)
pub fn acid_base_reaction(ions: &IonCatalog, a: &Reagent, b: &Reagent) -> Option<ReactionResult> {
    let (pair_a, pair_b) = (a.ions.as_ref()?, b.ions.as_ref()?);
    let (acid, other) = if pair_a.cation == ACID_CATION {
        (pair_a, pair_b)
    } else if pair_b.cation == ACID_CATION {
        (pair_b, pair_a)
    } else {
        return None;
    };
    let rule = ACID_BASE_RULES.iter().find(|r| r.anion == other.anion)?;
    let mut products = rule.products.to_string();
    if let (Some(cation), Some(anion)) = (ions.cation(&other.cation), ions.anion(&acid.anion)) {
        let state = if is_insoluble(&cation.id, &anion.id) { "s" } else { "aq" };
        products = format!("{} + {}({})", products, synthesize_formula(cation, anion), state);
    }
    debug!("acid–base rule {} for {} + {}", rule.anion, a.id, b.id);
    Some(
        ReactionResult::new(
            &[&a.id, &b.id],
            rule.reaction_type,
            products,
            rule.observation.to_string(),
            rule.equation.to_string(),
        )
        .with_key(rule.observation_key),
    )
}
