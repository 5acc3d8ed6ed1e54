use super::exceptional::ACID_CATION;
use super::reaction_result::{ReactionResult, ReactionType};
use super::salt_formula::{charge_per_formula_unit, gcd, lcm, synthesize_formula};
use super::solubility::is_insoluble;
use crate::Catalogs::ions::{Ion, IonCatalog};
use crate::Catalogs::reagents::Reagent;
use log::{debug, warn};

fn coeff_prefix(n: u32) -> String {
    if n == 1 { String::new() } else { n.to_string() }
}

/// Coefficients of c1a1 + c2a2 -> c1a2 + c2a1.
/// Each salt gets lcm(charges per formula unit) / its own charge per formula unit,
/// then everything is reduced by the common divisor.
/// None when the charges are too large for u32 arithmetic
fn metathesis_coefficients(salts: [(&Ion, &Ion); 4]) -> Option<[u32; 4]> {
    let mut charges = [1; 4];
    for (q, (c, a)) in charges.iter_mut().zip(salts) {
        *q = charge_per_formula_unit(c, a)?.max(1);
    }
    let total = charges.iter().try_fold(1, |acc, &q| lcm(acc, q))?;
    let mut coeffs = charges.map(|q| total / q);
    let common = coeffs.iter().fold(0, |acc, &k| gcd(acc, k)).max(1);
    for k in coeffs.iter_mut() {
        *k /= common;
    }
    Some(coeffs)
}

/// Double displacement: if one of the swapped salts is insoluble a precipitate forms.
/// Both reagents must be ionic; otherwise, or when both swapped salts dissolve, None.
/// An acid (cation H) swapped onto a basic anion is never a precipitate
pub fn predict_precipitation(
    ions: &IonCatalog,
    a: &Reagent,
    b: &Reagent,
) -> Option<ReactionResult> {
    let (pair_a, pair_b) = (a.ions.as_ref()?, b.ions.as_ref()?);
    let cation_a = ions.cation(&pair_a.cation)?;
    let anion_a = ions.anion(&pair_a.anion)?;
    let cation_b = ions.cation(&pair_b.cation)?;
    let anion_b = ions.anion(&pair_b.anion)?;

    let s1 = cation_a.id != ACID_CATION && is_insoluble(&cation_a.id, &anion_b.id);
    let s2 = cation_b.id != ACID_CATION && is_insoluble(&cation_b.id, &anion_a.id);
    if !s1 && !s2 {
        debug!("no precipitate between {} and {}", a.id, b.id);
        return None;
    }
    let state = |insoluble: bool| if insoluble { "s" } else { "aq" };
    let p1 = format!("{}({})", synthesize_formula(cation_a, anion_b), state(s1));
    let p2 = format!("{}({})", synthesize_formula(cation_b, anion_a), state(s2));

    let Some([k1, k2, k3, k4]) = metathesis_coefficients([
        (cation_a, anion_a),
        (cation_b, anion_b),
        (cation_a, anion_b),
        (cation_b, anion_a),
    ]) else {
        warn!("charges of {} and {} are too large to balance", a.id, b.id);
        return None;
    };
    let equation = format!(
        "{}{} + {}{} → {}{} + {}{}",
        coeff_prefix(k1),
        synthesize_formula(cation_a, anion_a),
        coeff_prefix(k2),
        synthesize_formula(cation_b, anion_b),
        coeff_prefix(k3),
        p1,
        coeff_prefix(k4),
        p2
    );
    let precipitates: Vec<&str> = [(s1, p1.as_str()), (s2, p2.as_str())]
        .iter()
        .filter(|(insoluble, _)| *insoluble)
        .map(|(_, p)| *p)
        .collect();
    // colour of the first precipitate; colourless cations give a white solid
    let source = if s1 { cation_a } else { cation_b };
    let color = if source.is_colored() {
        source.color.as_str()
    } else {
        "white"
    };
    debug!("precipitate {:?} from {} + {}", precipitates, a.id, b.id);
    Some(
        ReactionResult::new(
            &[&a.id, &b.id],
            ReactionType::Precipitation,
            format!("{} + {}", p1, p2),
            format!("Precipitate formed: {}.", precipitates.join(" and ")),
            equation,
        )
        .with_key("precipitation_formed")
        .with_color(color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalogs::Catalog;
    use crate::Catalogs::ions::IonTable;
    use crate::Catalogs::reagents::Category;

    fn mix(a: &str, b: &str) -> Option<ReactionResult> {
        let catalog = Catalog::standard();
        predict_precipitation(
            catalog.ions(),
            catalog.reagent(a).unwrap(),
            catalog.reagent(b).unwrap(),
        )
    }

    #[test]
    fn test_silver_chloride() {
        let result = mix("agno3", "nacl").unwrap();
        assert_eq!(result.reaction_type, ReactionType::Precipitation);
        assert_eq!(result.products, "AgCl(s) + NaNO3(aq)");
        assert_eq!(result.equation, "AgNO3 + NaCl → AgCl(s) + NaNO3(aq)");
        assert_eq!(result.observation, "Precipitate formed: AgCl(s).");
        assert_eq!(result.color.as_deref(), Some("white"));
        assert_eq!(result.reactants, vec!["agno3", "nacl"]);
    }

    #[test]
    fn test_balanced_coefficients() {
        let result = mix("pbno3", "ki").unwrap();
        assert_eq!(result.equation, "Pb(NO3)2 + 2KI → PbI2(s) + 2KNO3(aq)");
        let result = mix("alcl", "naoh").unwrap();
        assert_eq!(result.equation, "AlCl3 + 3NaOH → Al(OH)3(s) + 3NaCl(aq)");
        let result = mix("also4", "baoh").unwrap();
        assert_eq!(
            result.equation,
            "Al2(SO4)3 + 3Ba(OH)2 → 2Al(OH)3(s) + 3BaSO4(s)"
        );
        assert_eq!(
            result.observation,
            "Precipitate formed: Al(OH)3(s) and BaSO4(s)."
        );
    }

    #[test]
    fn test_colored_precipitate() {
        let result = mix("cuso4", "naoh").unwrap();
        assert_eq!(result.products, "Cu(OH)2(s) + Na2SO4(aq)");
        assert_eq!(result.color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_soluble_pair_gives_none() {
        assert!(mix("nano3", "kno3").is_none());
        assert!(mix("nacl", "cuso4").is_none());
    }

    #[test]
    fn test_acid_salt_is_never_a_precipitate() {
        assert!(mix("hcl", "napo4").is_none());
        assert!(mix("naco3", "hno3").is_none());
        // the acid side dissolves, the other swapped salt still precipitates
        let result = mix("hso4", "bano3").unwrap();
        assert_eq!(result.products, "HNO3(aq) + BaSO4(s)");
        assert_eq!(result.equation, "H2SO4 + Ba(NO3)2 → 2HNO3(aq) + BaSO4(s)");
        assert_eq!(result.observation, "Precipitate formed: BaSO4(s).");
    }

    #[test]
    fn test_huge_charges_give_none() {
        let ions = IonCatalog::from_table(IonTable {
            cations: vec![
                Ion::new("Ag", "Ag⁺", 2_000_000_000, "Silver", "transparent"),
                Ion::new("Na", "Na⁺", 1, "Sodium", "transparent"),
            ],
            anions: vec![
                Ion::new("Cl", "Cl³⁻", -3, "Chloride", "transparent"),
                Ion::new("NO3", "NO₃⁻", -1, "Nitrate", "transparent"),
            ],
        });
        let silver = Reagent::from_ions(
            ions.cation("Ag").unwrap(),
            ions.anion("NO3").unwrap(),
            Category::Salt,
        );
        let salt = Reagent::from_ions(
            ions.cation("Na").unwrap(),
            ions.anion("Cl").unwrap(),
            Category::Salt,
        );
        assert!(is_insoluble("Ag", "Cl"));
        assert!(predict_precipitation(&ions, &silver, &salt).is_none());
    }

    #[test]
    fn test_molecular_reagent_gives_none() {
        assert!(mix("kmno4", "agno3").is_none());
        assert!(mix("mg_s", "nacl").is_none());
    }
}
