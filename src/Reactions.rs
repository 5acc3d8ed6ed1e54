/// result of mixing two reagents and the medium they are mixed in
pub mod reaction_result;
/// solubility rules for a (cation, anion) pair
///
///  # Examples
/// ```
/// use ReactLab::Reactions::solubility::is_insoluble;
/// assert!(is_insoluble("Ag", "Cl"));
/// assert!(!is_insoluble("Na", "Cl"));
/// ```
pub mod solubility;
/// formula of the neutral salt of a cation and an anion
///
///  # Examples
/// ```
/// use ReactLab::Catalogs::ions::IonCatalog;
/// use ReactLab::Reactions::salt_formula::synthesize_formula;
/// let ions = IonCatalog::standard();
/// let formula = synthesize_formula(ions.cation("Ca").unwrap(), ions.anion("PO4").unwrap());
/// assert_eq!(formula, "Ca3(PO4)2");
/// ```
pub mod salt_formula;
/// double displacement with an insoluble product
pub mod precipitation;
/// text form of half-reactions, used to check catalog data
pub mod half_reaction_parser;
/// combination of two half-reactions into one balanced redox equation
///
///  # Examples
/// ```
/// use ReactLab::Catalogs::ions::{HalfReaction, RedoxEntry, RedoxType};
/// use ReactLab::Reactions::redox_balancer::balance_redox;
/// let silver = RedoxEntry::new(0.80, RedoxType::Oxidator, "Ag⁺ + e⁻ ⇌ Ag",
///     HalfReaction::new(1, &[("Ag⁺", 1)], &[("Ag", 1)]));
/// let copper = RedoxEntry::new(0.34, RedoxType::Reductor, "Cu²⁺ + 2e⁻ ⇌ Cu",
///     HalfReaction::new(2, &[("Cu²⁺", 1)], &[("Cu", 1)]));
/// let balance = balance_redox(&silver, &copper).unwrap();
/// assert_eq!(balance.combined_equation, "2Ag⁺ + Cu → 2Ag + Cu²⁺");
/// ```
pub mod redox_balancer;
/// choice of the oxidizer and reductor that react in a mixture
pub mod redox_predictor;
/// hand-authored reactions and acid–base rules
pub mod exceptional;
/// entry point: which of the engines describes the mixture
///
///  # Examples
/// ```
/// use ReactLab::Catalogs::Catalog;
/// use ReactLab::Reactions::dispatcher::analyze_reaction;
/// use ReactLab::Reactions::reaction_result::{Environment, ReactionType};
/// let catalog = Catalog::standard();
/// let result = analyze_reaction(&catalog, "hcl", "naoh", Environment::Neutral).unwrap();
/// assert_eq!(result.reaction_type, ReactionType::Neutralization);
/// assert!(analyze_reaction(&catalog, "hcl", "unobtainium", Environment::Neutral).is_none());
/// ```
pub mod dispatcher;
