// reference data: ions, bottles and hand-authored molecular reagents of the lab
use super::catalog_config::{BottleSpec, CatalogConfig};
use super::ions::{HalfReaction, Ion, IonTable, RedoxEntry, RedoxType};
use super::reagents::{Category, PhysicalState, Reagent};

fn redox(
    v0: f64,
    role: RedoxType,
    text: &str,
    electrons: u32,
    reactants: &[(&str, u32)],
    products: &[(&str, u32)],
) -> RedoxEntry {
    RedoxEntry::new(v0, role, text, HalfReaction::new(electrons, reactants, products))
}

fn ion(id: &str, formula: &str, charge: i32, name: &str, color: &str) -> Ion {
    Ion::new(id, formula, charge, name, color)
}

pub fn standard_ion_table() -> IonTable {
    use RedoxType::*;
    let cations = vec![
        ion("Ag", "Ag⁺", 1, "Silver(I)", "transparent").with_redox(vec![redox(
            0.80,
            Oxidator,
            "Ag⁺ + e⁻ ⇌ Ag",
            1,
            &[("Ag⁺", 1)],
            &[("Ag(s)", 1)],
        )]),
        ion("Pb", "Pb²⁺", 2, "Lead(II)", "transparent").with_redox(vec![redox(
            -0.13,
            Oxidator,
            "Pb²⁺ + 2e⁻ ⇌ Pb",
            2,
            &[("Pb²⁺", 1)],
            &[("Pb(s)", 1)],
        )]),
        ion("Cu", "Cu²⁺", 2, "Copper(II)", "blue").with_redox(vec![redox(
            0.34,
            Oxidator,
            "Cu²⁺ + 2e⁻ ⇌ Cu",
            2,
            &[("Cu²⁺", 1)],
            &[("Cu(s)", 1)],
        )]),
        ion("Fe2", "Fe²⁺", 2, "Iron(II)", "pale-green").with_redox(vec![
            redox(
                0.77,
                Reductor,
                "Fe³⁺ + e⁻ ⇌ Fe²⁺",
                1,
                &[("Fe³⁺", 1)],
                &[("Fe²⁺", 1)],
            ),
            redox(
                -0.44,
                Oxidator,
                "Fe²⁺ + 2e⁻ ⇌ Fe",
                2,
                &[("Fe²⁺", 1)],
                &[("Fe(s)", 1)],
            ),
        ]),
        ion("Fe3", "Fe³⁺", 3, "Iron(III)", "yellow").with_redox(vec![redox(
            0.77,
            Oxidator,
            "Fe³⁺ + e⁻ ⇌ Fe²⁺",
            1,
            &[("Fe³⁺", 1)],
            &[("Fe²⁺", 1)],
        )]),
        ion("Na", "Na⁺", 1, "Sodium", "transparent"),
        ion("K", "K⁺", 1, "Potassium", "transparent"),
        ion("Li", "Li⁺", 1, "Lithium", "transparent"),
        ion("Ca", "Ca²⁺", 2, "Calcium", "transparent"),
        ion("Ba", "Ba²⁺", 2, "Barium", "transparent"),
        ion("Sr", "Sr²⁺", 2, "Strontium", "transparent"),
        ion("Mg", "Mg²⁺", 2, "Magnesium", "transparent"),
        ion("Zn", "Zn²⁺", 2, "Zinc", "transparent").with_redox(vec![redox(
            -0.76,
            Oxidator,
            "Zn²⁺ + 2e⁻ ⇌ Zn",
            2,
            &[("Zn²⁺", 1)],
            &[("Zn(s)", 1)],
        )]),
        ion("Hg", "Hg²⁺", 2, "Mercury(II)", "transparent").with_redox(vec![redox(
            0.85,
            Oxidator,
            "Hg²⁺ + 2e⁻ ⇌ Hg",
            2,
            &[("Hg²⁺", 1)],
            &[("Hg(l)", 1)],
        )]),
        ion("Al", "Al³⁺", 3, "Aluminium", "transparent"),
        ion("NH4", "NH₄⁺", 1, "Ammonium", "transparent"),
        ion("H", "H⁺", 1, "Hydrogen", "transparent").with_redox(vec![redox(
            0.0,
            Oxidator,
            "2H⁺ + 2e⁻ ⇌ H₂",
            2,
            &[("H⁺", 2)],
            &[("H₂(g)", 1)],
        )]),
    ];
    let anions = vec![
        ion("NO3", "NO₃⁻", -1, "Nitrate", "transparent"),
        ion("Cl", "Cl⁻", -1, "Chloride", "transparent").with_redox(vec![redox(
            1.36,
            Reductor,
            "Cl₂ + 2e⁻ ⇌ 2Cl⁻",
            2,
            &[("Cl₂", 1)],
            &[("Cl⁻", 2)],
        )]),
        ion("SO4", "SO₄²⁻", -2, "Sulfate", "transparent"),
        ion("CO3", "CO₃²⁻", -2, "Carbonate", "transparent"),
        // basic medium
        ion("OH", "OH⁻", -1, "Hydroxide", "transparent").with_redox(vec![redox(
            0.40,
            Reductor,
            "O₂ + 2H₂O + 4e⁻ ⇌ 4OH⁻",
            4,
            &[("O₂", 1), ("H₂O", 2)],
            &[("OH⁻", 4)],
        )]),
        ion("PO4", "PO₄³⁻", -3, "Phosphate", "transparent"),
        ion("Br", "Br⁻", -1, "Bromide", "transparent").with_redox(vec![redox(
            1.07,
            Reductor,
            "Br₂ + 2e⁻ ⇌ 2Br⁻",
            2,
            &[("Br₂", 1)],
            &[("Br⁻", 2)],
        )]),
        ion("I", "I⁻", -1, "Iodide", "transparent").with_redox(vec![redox(
            0.62,
            Reductor,
            "I₂ + 2e⁻ ⇌ 2I⁻",
            2,
            &[("I₂", 1)],
            &[("I⁻", 2)],
        )]),
        ion("S", "S²⁻", -2, "Sulfide", "transparent").with_redox(vec![redox(
            -0.48,
            Reductor,
            "S(s) + 2e⁻ ⇌ S²⁻",
            2,
            &[("S(s)", 1)],
            &[("S²⁻", 1)],
        )]),
        ion("SO3", "SO₃²⁻", -2, "Sulfite", "transparent").with_redox(vec![redox(
            0.17,
            Reductor,
            "SO₄²⁻ + 2H⁺ + 2e⁻ ⇌ SO₃²⁻ + H₂O",
            2,
            &[("SO₄²⁻", 1), ("H⁺", 2)],
            &[("SO₃²⁻", 1), ("H₂O", 1)],
        )]),
        ion("S2O3", "S₂O₃²⁻", -2, "Thiosulfate", "transparent").with_redox(vec![redox(
            0.08,
            Reductor,
            "S₄O₆²⁻ + 2e⁻ ⇌ 2S₂O₃²⁻",
            2,
            &[("S₄O₆²⁻", 1)],
            &[("S₂O₃²⁻", 2)],
        )]),
        ion("Acetate", "CH₃COO⁻", -1, "Acetate", "transparent"),
        ion("HCO3", "HCO₃⁻", -1, "Hydrogen carbonate", "transparent"),
        ion("HSO3", "HSO₃⁻", -1, "Hydrogen sulfite", "transparent"),
        ion("HS", "HS⁻", -1, "Hydrogen sulfide", "transparent"),
    ];
    IonTable { cations, anions }
}

fn bottle(cation: &str, anion: &str, category: Category) -> BottleSpec {
    BottleSpec {
        cation: cation.to_string(),
        anion: anion.to_string(),
        category,
    }
}

/// (cation, anion, category) triples of the generated aqueous reagents
pub fn standard_bottles() -> Vec<BottleSpec> {
    let mut bottles = vec![
        // acids
        bottle("H", "Cl", Category::Acid),
        bottle("H", "NO3", Category::Acid),
        bottle("H", "SO4", Category::Acid),
        // bases
        bottle("Na", "OH", Category::Base),
        bottle("K", "OH", Category::Base),
        bottle("Ba", "OH", Category::Base),
    ];
    // nitrates are always soluble
    for c in [
        "Ag", "Pb", "Cu", "Fe2", "Fe3", "Na", "K", "Li", "Ca", "Ba", "Sr", "Mg", "Zn", "Hg", "Al",
        "NH4",
    ] {
        bottles.push(bottle(c, "NO3", Category::Salt));
    }
    for c in ["Na", "K", "Mg", "Ca", "Ba", "Zn", "Fe2", "Fe3", "Cu", "Al"] {
        bottles.push(bottle(c, "Cl", Category::Salt));
    }
    for c in ["Na", "K", "Mg", "Zn", "Fe2", "Cu", "Al"] {
        bottles.push(bottle(c, "SO4", Category::Salt));
    }
    // soluble carbonates, then the redox/gas active salts
    for (c, a) in [
        ("Na", "CO3"),
        ("K", "CO3"),
        ("Na", "PO4"),
        ("Na", "S"),
        ("Na", "SO3"),
        ("Na", "HCO3"),
        ("K", "HCO3"),
        ("Na", "S2O3"),
        ("Na", "Acetate"),
        ("K", "I"),
        ("K", "Br"),
    ] {
        bottles.push(bottle(c, a, Category::Salt));
    }
    bottles
}

fn molecular(
    id: &str,
    name: &str,
    formula: &str,
    state: PhysicalState,
    category: Category,
    color: &str,
    tags: &[&str],
    particles: &[&str],
    redox: Vec<RedoxEntry>,
) -> Reagent {
    Reagent {
        id: id.to_string(),
        name: name.to_string(),
        formula: formula.to_string(),
        state,
        category,
        ions: None,
        redox,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        particles: particles.iter().map(|p| p.to_string()).collect(),
        color: color.to_string(),
    }
}

fn metal(id: &str, name: &str, symbol: &str, ion_formula: &str, electrons: u32, v0: f64) -> Reagent {
    let text = format!("{} + {}e⁻ ⇌ {}", ion_formula, electrons, symbol);
    molecular(
        id,
        name,
        symbol,
        PhysicalState::Solid,
        Category::Metal,
        "grey",
        &["metal"],
        &[],
        vec![redox(
            v0,
            RedoxType::Reductor,
            &text,
            electrons,
            &[(ion_formula, 1)],
            &[(symbol, 1)],
        )],
    )
}

/// hand-authored reagents that are not a simple cation/anion bottle
pub fn standard_molecular_reagents() -> Vec<Reagent> {
    use Category::*;
    use PhysicalState::*;
    use RedoxType::*;
    vec![
        metal("mg_s", "Magnesium", "Mg", "Mg²⁺", 2, -2.37),
        metal("zn_s", "Zinc", "Zn", "Zn²⁺", 2, -0.76),
        metal("cu_s", "Copper", "Cu", "Cu²⁺", 2, 0.34),
        metal("fe_s", "Iron", "Fe", "Fe²⁺", 2, -0.44),
        metal("pb_s", "Lead", "Pb", "Pb²⁺", 2, -0.13),
        metal("al_s", "Aluminium", "Al", "Al³⁺", 3, -1.66),
        // weak acids and bases
        molecular(
            "ch3cooh",
            "Acetic acid",
            "CH3COOH",
            Aqueous,
            Acid,
            "transparent",
            &["acid", "vinegar", "weak"],
            &[],
            vec![],
        ),
        molecular(
            "nh3",
            "Ammonia",
            "NH3",
            Aqueous,
            Base,
            "transparent",
            &["base", "ammonia", "weak", "cleaning"],
            &[],
            vec![],
        ),
        molecular(
            "caoh2",
            "Limewater",
            "Ca(OH)2",
            Aqueous,
            Base,
            "white",
            &["base", "lime", "turbid"],
            &["Ca²⁺", "OH⁻"],
            vec![],
        ),
        molecular(
            "co2",
            "Carbon dioxide",
            "CO2",
            Gas,
            Oxide,
            "transparent",
            &["gas", "limewater", "indicator"],
            &[],
            vec![],
        ),
        // redox reagents
        molecular(
            "kmno4",
            "Potassium permanganate",
            "KMnO4",
            Aqueous,
            Other,
            "purple",
            &["oxidator", "purple", "violet", "strong"],
            &["K⁺", "MnO₄⁻"],
            vec![
                redox(
                    1.51,
                    Oxidator,
                    "MnO₄⁻ + 8H⁺ + 5e⁻ ⇌ Mn²⁺ + 4H₂O",
                    5,
                    &[("MnO₄⁻", 1), ("H⁺", 8)],
                    &[("Mn²⁺", 1), ("H₂O", 4)],
                ),
                redox(
                    0.59,
                    Oxidator,
                    "MnO₄⁻ + 2H₂O + 3e⁻ ⇌ MnO₂ + 4OH⁻",
                    3,
                    &[("MnO₄⁻", 1), ("H₂O", 2)],
                    &[("MnO₂", 1), ("OH⁻", 4)],
                ),
            ],
        ),
        molecular(
            "i2",
            "Iodine water",
            "I2(aq)",
            Aqueous,
            Other,
            "brown",
            &["oxidator", "brown", "yellow", "indicator"],
            &["I₂"],
            vec![redox(
                0.62,
                Oxidator,
                "I₂ + 2e⁻ ⇌ 2I⁻",
                2,
                &[("I₂", 1)],
                &[("I⁻", 2)],
            )],
        ),
        molecular(
            "h2o2",
            "Hydrogen peroxide",
            "H2O2",
            Aqueous,
            Other,
            "transparent",
            &["oxidator", "bleach", "peroxide"],
            &["H₂O₂"],
            vec![
                // acidic medium
                redox(
                    1.77,
                    Oxidator,
                    "H₂O₂ + 2H⁺ + 2e⁻ ⇌ 2H₂O",
                    2,
                    &[("H₂O₂", 1), ("H⁺", 2)],
                    &[("H₂O", 2)],
                ),
                // neutral medium
                redox(
                    0.88,
                    Oxidator,
                    "H₂O₂ + 2e⁻ ⇌ 2OH⁻",
                    2,
                    &[("H₂O₂", 1)],
                    &[("OH⁻", 2)],
                ),
            ],
        ),
        molecular(
            "starch",
            "Starch",
            "(C6H10O5)n",
            Aqueous,
            Other,
            "white",
            &["indicator", "potato", "white"],
            &[],
            vec![],
        ),
        // environment particles
        molecular(
            "h_plus",
            "Hydrogen ion",
            "H⁺",
            Aqueous,
            Other,
            "transparent",
            &["environment"],
            &[],
            vec![redox(
                0.0,
                Oxidator,
                "2H⁺ + 2e⁻ ⇌ H₂",
                2,
                &[("H⁺", 2)],
                &[("H₂", 1)],
            )],
        ),
        molecular(
            "oh_minus",
            "Hydroxide ion",
            "OH⁻",
            Aqueous,
            Other,
            "transparent",
            &["environment"],
            &[],
            vec![redox(
                -0.83,
                Reductor,
                "2H₂O + 2e⁻ ⇌ H₂ + 2OH⁻",
                2,
                &[("H₂O", 2)],
                &[("H₂", 1), ("OH⁻", 2)],
            )],
        ),
        molecular(
            "h2o_l",
            "Water",
            "H₂O(l)",
            Liquid,
            Other,
            "transparent",
            &["environment"],
            &[],
            vec![redox(
                1.23,
                Both,
                "O₂ + 4H⁺ + 4e⁻ ⇌ 2H₂O",
                4,
                &[("O₂", 1), ("H⁺", 4)],
                &[("H₂O", 2)],
            )],
        ),
    ]
}

pub fn standard_config() -> CatalogConfig {
    CatalogConfig {
        bottles: standard_bottles(),
        molecular: standard_molecular_reagents(),
    }
}
