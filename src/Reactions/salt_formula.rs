use crate::Catalogs::ions::Ion;

/// named formulas that read better than the generic construction
const FORMULA_OVERRIDES: [(&str, &str, &str); 3] = [
    ("H", "Cl", "HCl"),
    ("H", "OH", "H2O"),
    ("Na", "Cl", "NaCl"),
];

pub fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// least common multiple; 0 if either argument is 0, None if it does not fit in u32
pub fn lcm(a: u32, b: u32) -> Option<u32> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// more than one element symbol or an embedded digit: "OH", "NO3", "NH4" but not "Cl" or "Fe"
pub fn is_polyatomic(core: &str) -> bool {
    core.chars().filter(|c| c.is_ascii_uppercase()).count() > 1
        || core.chars().any(|c| c.is_ascii_digit())
}

/// (cation subscript, anion subscript) of the neutral salt: charge ratio reduced by gcd
pub fn salt_subscripts(cation: &Ion, anion: &Ion) -> (u32, u32) {
    let cq = cation.charge.unsigned_abs();
    let aq = anion.charge.unsigned_abs();
    let common = gcd(cq, aq).max(1);
    (aq / common, cq / common)
}

/// positive charge carried by one formula unit of the salt, e.g. 6 for Al2(SO4)3.
/// None on u32 overflow
pub fn charge_per_formula_unit(cation: &Ion, anion: &Ion) -> Option<u32> {
    let (cation_sub, _) = salt_subscripts(cation, anion);
    cation_sub.checked_mul(cation.charge.unsigned_abs())
}

fn with_subscript(core: &str, subscript: u32) -> String {
    if subscript <= 1 {
        core.to_string()
    } else if is_polyatomic(core) {
        format!("({}){}", core, subscript)
    } else {
        format!("{}{}", core, subscript)
    }
}

/// Formula of the neutral salt of a cation and an anion, ASCII digits.
/// Only charge arithmetic is done: the result is not checked against real-world chemistry
pub fn synthesize_formula(cation: &Ion, anion: &Ion) -> String {
    if let Some((_, _, named)) = FORMULA_OVERRIDES
        .iter()
        .find(|(c, a, _)| *c == cation.id && *a == anion.id)
    {
        return named.to_string();
    }
    let (cation_sub, anion_sub) = salt_subscripts(cation, anion);
    format!(
        "{}{}",
        with_subscript(&cation.core_formula(), cation_sub),
        with_subscript(&anion.core_formula(), anion_sub)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalogs::ions::IonCatalog;

    fn formula(cation: &str, anion: &str) -> String {
        let ions = IonCatalog::standard();
        synthesize_formula(ions.cation(cation).unwrap(), ions.anion(anion).unwrap())
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(lcm(2, 5), Some(10));
        assert_eq!(lcm(4, 2), Some(4));
        assert_eq!(lcm(0, 3), Some(0));
        assert_eq!(lcm(u32::MAX, u32::MAX), Some(u32::MAX));
        assert_eq!(lcm(u32::MAX, u32::MAX - 1), None);
    }

    #[test]
    fn test_calcium_phosphate() {
        assert_eq!(formula("Ca", "PO4"), "Ca3(PO4)2");
    }

    #[test]
    fn test_named_overrides() {
        assert_eq!(formula("H", "Cl"), "HCl");
        assert_eq!(formula("H", "OH"), "H2O");
        assert_eq!(formula("Na", "Cl"), "NaCl");
    }

    #[test]
    fn test_parentheses_only_for_polyatomic_ions() {
        assert_eq!(formula("Ca", "Cl"), "CaCl2");
        assert_eq!(formula("Ca", "OH"), "Ca(OH)2");
        assert_eq!(formula("Al", "SO4"), "Al2(SO4)3");
        assert_eq!(formula("NH4", "CO3"), "(NH4)2CO3");
        assert_eq!(formula("Fe3", "Cl"), "FeCl3");
        assert_eq!(formula("Cu", "SO4"), "CuSO4");
        assert_eq!(formula("Na", "S2O3"), "Na2S2O3");
        assert_eq!(formula("Pb", "Acetate"), "Pb(CH3COO)2");
    }

    #[test]
    fn test_charge_per_formula_unit() {
        let ions = IonCatalog::standard();
        let al = ions.cation("Al").unwrap();
        let so4 = ions.anion("SO4").unwrap();
        assert_eq!(salt_subscripts(al, so4), (2, 3));
        assert_eq!(charge_per_formula_unit(al, so4), Some(6));
    }

    #[test]
    fn test_charge_per_formula_unit_overflow() {
        let cation = Ion::new("X", "X⁺", 2_000_000_000, "Heavy", "transparent");
        let anion = Ion::new("Y", "Y³⁻", -3, "Triple", "transparent");
        assert_eq!(salt_subscripts(&cation, &anion), (3, 2_000_000_000));
        assert_eq!(charge_per_formula_unit(&cation, &anion), None);
    }
}
