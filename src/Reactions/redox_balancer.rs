//! Combines two reduction half-reactions into one balanced redox equation.
//!
//! The oxidizer half-reaction runs forward (it is reduced), the reductor half-reaction runs
//! backward (it is oxidized). Both are scaled so that the electrons given and taken are equal,
//! added up species by species, and water, H⁺ and OH⁻ appearing on both sides are cancelled.
use super::salt_formula::lcm;
use crate::Catalogs::ions::{RedoxEntry, Species, normalize_species};
use crate::chem_errors::ChemError;
use log::debug;
use serde::{Deserialize, Serialize};

/// species that may appear on both sides and cancel, compared by normalized label
const CANCELLABLE: [&str; 3] = ["H2O", "H+", "OH-"];

pub const NO_SPONTANEOUS_REACTION: &str = "no spontaneous reaction";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub ox: u32,
    pub red: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedoxBalance {
    /// ΔV > 0
    pub can_occur: bool,
    /// E°(oxidizer) − E°(reductor), V
    pub delta_v: f64,
    pub scale_factors: ScaleFactors,
    /// electrons exchanged after scaling, 0 when no reaction
    pub common_electrons: u32,
    pub combined_equation: String,
    /// right-hand side after cancellation, empty when no reaction
    pub products: Vec<Species>,
    /// human-readable trace of the balancing
    pub steps: Vec<String>,
}

/// Ordered multiset of species keyed by normalized label.
/// The first label seen for a key is the one displayed
#[derive(Debug, Default)]
struct SpeciesTally {
    entries: Vec<(String, String, u32)>,
}

impl SpeciesTally {
    fn add(&mut self, species: &[Species], factor: u32) -> Result<(), ChemError> {
        let overflow = |s: &Species| ChemError::Overflow(format!("{} × {}", s.species, factor));
        for s in species {
            let key = s.normalized();
            let amount = s.coeff.checked_mul(factor).ok_or_else(|| overflow(s))?;
            match self.entries.iter_mut().find(|(k, _, _)| *k == key) {
                Some((_, _, coeff)) => {
                    *coeff = coeff.checked_add(amount).ok_or_else(|| overflow(s))?
                }
                None => self.entries.push((key, s.species.clone(), amount)),
            }
        }
        Ok(())
    }
    fn count(&self, key: &str) -> u32 {
        self.entries
            .iter()
            .find(|(k, _, _)| k == key)
            .map_or(0, |(_, _, c)| *c)
    }
    fn remove(&mut self, key: &str, amount: u32) {
        if let Some((_, _, coeff)) = self.entries.iter_mut().find(|(k, _, _)| k == key) {
            *coeff -= amount.min(*coeff);
        }
    }
    fn label(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _, _)| k == key)
            .map(|(_, l, _)| l.as_str())
    }
    fn render(&self) -> String {
        self.entries
            .iter()
            .filter(|(_, _, c)| *c > 0)
            .map(|(_, label, c)| {
                if *c == 1 {
                    label.clone()
                } else {
                    format!("{}{}", c, label)
                }
            })
            .collect::<Vec<_>>()
            .join(" + ")
    }
    fn species(&self) -> Vec<Species> {
        self.entries
            .iter()
            .filter(|(_, _, c)| *c > 0)
            .map(|(_, label, c)| Species::new(label, *c))
            .collect()
    }
}

/// both sides of the combined equation after cancellation
#[derive(Debug, Default)]
struct CombinedEquation {
    left: SpeciesTally,
    right: SpeciesTally,
}

fn combine(
    oxidizer: &RedoxEntry,
    reductor: &RedoxEntry,
    factors: ScaleFactors,
    steps: &mut Vec<String>,
) -> Result<CombinedEquation, ChemError> {
    let mut eq = CombinedEquation::default();
    eq.left.add(&oxidizer.structured.reactants, factors.ox)?;
    eq.left.add(&reductor.structured.products, factors.red)?;
    eq.right.add(&oxidizer.structured.products, factors.ox)?;
    eq.right.add(&reductor.structured.reactants, factors.red)?;
    for key in CANCELLABLE {
        let common = eq.left.count(key).min(eq.right.count(key));
        if common > 0 {
            let label = eq.left.label(key).unwrap_or(key).to_string();
            eq.left.remove(key, common);
            eq.right.remove(key, common);
            steps.push(format!("cancel {} {} on both sides", common, label));
        }
    }
    Ok(eq)
}

/// Balances oxidizer (reduced) against reductor (oxidized).
/// Err when either half-reaction carries no electrons or the scaled coefficients overflow u32;
/// `can_occur == false` when ΔV ≤ 0
pub fn balance_redox(oxidizer: &RedoxEntry, reductor: &RedoxEntry) -> Result<RedoxBalance, ChemError> {
    let e_ox = oxidizer.structured.electrons;
    let e_red = reductor.structured.electrons;
    if e_ox == 0 {
        return Err(ChemError::MissingElectronTerm(oxidizer.half_reaction.clone()));
    }
    if e_red == 0 {
        return Err(ChemError::MissingElectronTerm(reductor.half_reaction.clone()));
    }
    let delta_v = oxidizer.v0 - reductor.v0;
    let mut steps = vec![
        format!(
            "oxidizer: {} (E° = {:.2} V, {} e⁻)",
            oxidizer.half_reaction, oxidizer.v0, e_ox
        ),
        format!(
            "reductor: {} (E° = {:.2} V, {} e⁻)",
            reductor.half_reaction, reductor.v0, e_red
        ),
        format!(
            "ΔV = {:.2} − ({:.2}) = {:.2} V",
            oxidizer.v0, reductor.v0, delta_v
        ),
    ];
    if delta_v <= 0.0 {
        steps.push("ΔV ≤ 0, the reaction is not spontaneous".to_string());
        debug!(
            "no spontaneous reaction between '{}' and '{}'",
            oxidizer.half_reaction, reductor.half_reaction
        );
        return Ok(RedoxBalance {
            can_occur: false,
            delta_v,
            scale_factors: ScaleFactors { ox: 1, red: 1 },
            common_electrons: 0,
            combined_equation: NO_SPONTANEOUS_REACTION.to_string(),
            products: Vec::new(),
            steps,
        });
    }
    let common_electrons = lcm(e_ox, e_red)
        .ok_or_else(|| ChemError::Overflow(format!("lcm({}, {})", e_ox, e_red)))?;
    let scale_factors = ScaleFactors {
        ox: common_electrons / e_ox,
        red: common_electrons / e_red,
    };
    steps.push(format!(
        "lcm({}, {}) = {} electrons exchanged",
        e_ox, e_red, common_electrons
    ));
    steps.push(format!(
        "oxidizer half-reaction × {}, reductor half-reaction × {}",
        scale_factors.ox, scale_factors.red
    ));
    let eq = combine(oxidizer, reductor, scale_factors, &mut steps)?;
    let combined_equation = format!("{} → {}", eq.left.render(), eq.right.render());
    steps.push(combined_equation.clone());
    debug!("balanced redox: {}", combined_equation);
    Ok(RedoxBalance {
        can_occur: true,
        delta_v,
        scale_factors,
        common_electrons,
        combined_equation,
        products: eq.right.species(),
        steps,
    })
}

/// true if a normalized species label occurs among the species
pub fn contains_species(species: &[Species], label: &str) -> bool {
    let key = normalize_species(label);
    species.iter().any(|s| s.normalized() == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalogs::ions::{HalfReaction, RedoxType};
    use approx::assert_relative_eq;

    fn copper() -> RedoxEntry {
        RedoxEntry::new(
            0.34,
            RedoxType::Oxidator,
            "Cu²⁺ + 2e⁻ ⇌ Cu",
            HalfReaction::new(2, &[("Cu²⁺", 1)], &[("Cu(s)", 1)]),
        )
    }

    fn zinc() -> RedoxEntry {
        RedoxEntry::new(
            -0.76,
            RedoxType::Reductor,
            "Zn²⁺ + 2e⁻ ⇌ Zn",
            HalfReaction::new(2, &[("Zn²⁺", 1)], &[("Zn(s)", 1)]),
        )
    }

    fn permanganate() -> RedoxEntry {
        RedoxEntry::new(
            1.51,
            RedoxType::Oxidator,
            "MnO₄⁻ + 8H⁺ + 5e⁻ ⇌ Mn²⁺ + 4H₂O",
            HalfReaction::new(5, &[("MnO₄⁻", 1), ("H⁺", 8)], &[("Mn²⁺", 1), ("H₂O", 4)]),
        )
    }

    fn sulfite() -> RedoxEntry {
        RedoxEntry::new(
            0.17,
            RedoxType::Reductor,
            "SO₄²⁻ + 2H⁺ + 2e⁻ ⇌ SO₃²⁻ + H₂O",
            HalfReaction::new(2, &[("SO₄²⁻", 1), ("H⁺", 2)], &[("SO₃²⁻", 1), ("H₂O", 1)]),
        )
    }

    #[test]
    fn test_copper_zinc_cell() {
        let balance = balance_redox(&copper(), &zinc()).unwrap();
        assert!(balance.can_occur);
        assert_relative_eq!(balance.delta_v, 1.10, epsilon = 1e-9);
        assert_eq!(balance.scale_factors, ScaleFactors { ox: 1, red: 1 });
        assert_eq!(balance.common_electrons, 2);
        assert_eq!(balance.combined_equation, "Cu²⁺ + Zn(s) → Cu(s) + Zn²⁺");
    }

    #[test]
    fn test_reversed_cell_is_not_spontaneous() {
        let balance = balance_redox(&zinc(), &copper()).unwrap();
        assert!(!balance.can_occur);
        assert_relative_eq!(balance.delta_v, -1.10, epsilon = 1e-9);
        assert_eq!(balance.combined_equation, NO_SPONTANEOUS_REACTION);
    }

    #[test]
    fn test_equal_potentials_do_not_react() {
        let balance = balance_redox(&copper(), &copper()).unwrap();
        assert!(!balance.can_occur);
    }

    #[test]
    fn test_permanganate_sulfite_cancels_water_and_protons() {
        let balance = balance_redox(&permanganate(), &sulfite()).unwrap();
        assert!(balance.can_occur);
        assert_eq!(balance.scale_factors, ScaleFactors { ox: 2, red: 5 });
        assert_eq!(balance.common_electrons, 10);
        assert_eq!(
            balance.combined_equation,
            "2MnO₄⁻ + 6H⁺ + 5SO₃²⁻ → 2Mn²⁺ + 3H₂O + 5SO₄²⁻"
        );
        assert!(balance.steps.iter().any(|s| s.starts_with("lcm(5, 2) = 10")));
        assert!(balance.steps.iter().any(|s| s == "cancel 5 H₂O on both sides"));
        assert!(balance.steps.iter().any(|s| s == "cancel 10 H⁺ on both sides"));
    }

    #[test]
    fn test_products_of_balanced_equation() {
        let products = balance_redox(&permanganate(), &sulfite()).unwrap().products;
        assert_eq!(
            products,
            vec![
                Species::new("Mn²⁺", 2),
                Species::new("H₂O", 3),
                Species::new("SO₄²⁻", 5)
            ]
        );
        assert!(contains_species(&products, "H2O(l)"));
        assert!(!contains_species(&products, "H⁺"));
        assert!(balance_redox(&zinc(), &copper()).unwrap().products.is_empty());
    }

    #[test]
    fn test_electron_lcm_overflow_is_an_error() {
        let mut ox = copper();
        ox.structured.electrons = u32::MAX;
        let mut red = zinc();
        red.structured.electrons = u32::MAX - 1;
        assert!(matches!(balance_redox(&ox, &red), Err(ChemError::Overflow(_))));
    }

    #[test]
    fn test_coefficient_overflow_is_an_error() {
        // factor 2 on the oxidizer side pushes MnO₄⁻ past u32::MAX
        let mut ox = permanganate();
        ox.structured.electrons = 1;
        ox.structured.reactants[0].coeff = u32::MAX;
        assert!(matches!(balance_redox(&ox, &sulfite()), Err(ChemError::Overflow(_))));
        // two large terms of one species overflow when summed
        let mut red = sulfite();
        red.structured.products = vec![Species::new("H₂O", u32::MAX), Species::new("H2O", 1)];
        red.structured.electrons = 5;
        assert!(matches!(balance_redox(&permanganate(), &red), Err(ChemError::Overflow(_))));
    }

    #[test]
    fn test_missing_electrons_is_an_error() {
        let mut broken = zinc();
        broken.structured.electrons = 0;
        assert!(matches!(
            balance_redox(&copper(), &broken),
            Err(ChemError::MissingElectronTerm(_))
        ));
        assert!(matches!(
            balance_redox(&broken, &copper()),
            Err(ChemError::MissingElectronTerm(_))
        ));
    }
}
