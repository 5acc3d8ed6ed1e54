//! Solubility rules for salts in water, as taught at school.
//! Pure function of the (cation id, anion id) pair; unknown ids fall through to "soluble".
const ALWAYS_SOLUBLE_CATIONS: [&str; 6] = ["Li", "Na", "K", "Rb", "Cs", "NH4"];
const ALWAYS_SOLUBLE_ANIONS: [&str; 2] = ["NO3", "Acetate"];
const HALIDES: [&str; 3] = ["Cl", "Br", "I"];
const INSOLUBLE_HALIDE_CATIONS: [&str; 3] = ["Ag", "Pb", "Hg"];
const INSOLUBLE_SULFATE_CATIONS: [&str; 3] = ["Ba", "Pb", "Sr"];
// moderately soluble, shown as a precipitate in the lab
const SPARINGLY_SOLUBLE_SULFATE_CATIONS: [&str; 2] = ["Ca", "Ag"];
const SOLUBLE_HYDROXIDE_CATIONS: [&str; 3] = ["Ba", "Sr", "Ca"];
const INSOLUBLE_ANIONS: [&str; 4] = ["CO3", "PO4", "S", "SO3"];

/// true if the salt of this cation and anion precipitates; first matching rule wins
pub fn is_insoluble(cation_id: &str, anion_id: &str) -> bool {
    if ALWAYS_SOLUBLE_CATIONS.contains(&cation_id) {
        return false;
    }
    if ALWAYS_SOLUBLE_ANIONS.contains(&anion_id) {
        return false;
    }
    if HALIDES.contains(&anion_id) {
        return INSOLUBLE_HALIDE_CATIONS.contains(&cation_id);
    }
    if anion_id == "SO4" {
        return INSOLUBLE_SULFATE_CATIONS.contains(&cation_id)
            || SPARINGLY_SOLUBLE_SULFATE_CATIONS.contains(&cation_id);
    }
    if anion_id == "OH" {
        return !SOLUBLE_HYDROXIDE_CATIONS.contains(&cation_id);
    }
    INSOLUBLE_ANIONS.contains(&anion_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalogs::ions::IonCatalog;

    #[test]
    fn test_alkali_and_ammonium_salts_always_dissolve() {
        let ions = IonCatalog::standard();
        for cation in ["Li", "Na", "K", "NH4"] {
            for anion in ions.anions() {
                assert!(!is_insoluble(cation, &anion.id), "{} {}", cation, anion.id);
            }
        }
    }

    #[test]
    fn test_nitrates_and_acetates_dissolve() {
        let ions = IonCatalog::standard();
        for cation in ions.cations() {
            assert!(!is_insoluble(&cation.id, "NO3"));
            assert!(!is_insoluble(&cation.id, "Acetate"));
        }
    }

    #[test]
    fn test_halides() {
        assert!(is_insoluble("Ag", "Cl"));
        assert!(is_insoluble("Pb", "I"));
        assert!(is_insoluble("Hg", "Br"));
        assert!(!is_insoluble("Cu", "Cl"));
        assert!(!is_insoluble("Ba", "Br"));
    }

    #[test]
    fn test_sulfates() {
        for c in ["Ba", "Pb", "Sr", "Ca", "Ag"] {
            assert!(is_insoluble(c, "SO4"), "{}", c);
        }
        assert!(!is_insoluble("Cu", "SO4"));
        assert!(!is_insoluble("Mg", "SO4"));
    }

    #[test]
    fn test_hydroxides() {
        assert!(!is_insoluble("Ba", "OH"));
        assert!(!is_insoluble("Ca", "OH"));
        assert!(is_insoluble("Cu", "OH"));
        assert!(is_insoluble("Fe3", "OH"));
        assert!(is_insoluble("Al", "OH"));
    }

    #[test]
    fn test_carbonates_phosphates_sulfides_sulfites() {
        for a in ["CO3", "PO4", "S", "SO3"] {
            assert!(is_insoluble("Ca", a));
            assert!(!is_insoluble("Na", a));
        }
        // not covered by any rule
        assert!(!is_insoluble("Cu", "S2O3"));
        assert!(!is_insoluble("Zn", "HCO3"));
    }
}
