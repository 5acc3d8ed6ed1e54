/// ions, redox couples, the ion catalog and formula text helpers
///
///  # Examples
/// ```
/// use ReactLab::Catalogs::ions::IonCatalog;
/// let ions = IonCatalog::standard();
/// let phosphate = ions.anion("PO4").unwrap();
/// assert_eq!(phosphate.charge, -3);
/// assert_eq!(phosphate.core_formula(), "PO4");
/// ```
pub mod ions;
/// reagents (bottles on the shelf) and the reagent catalog generator
pub mod reagents;
/// JSON configuration of bottles and molecular reagents
pub mod catalog_config;
/// built-in reference data
pub mod standard_data;
/// tests
pub mod catalog_tests;

use crate::chem_errors::ChemError;
use catalog_config::CatalogConfig;
use ions::IonCatalog;
use reagents::{Reagent, ReagentCatalog};

/// Ion catalog together with the reagents built from it. Built once at start-up and
/// passed by reference to every engine function; there is no way to mutate it afterwards.
///
///  # Examples
/// ```
/// use ReactLab::Catalogs::Catalog;
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.reagent("naso3").unwrap().formula, "Na2SO3");
/// assert!(catalog.reagent("no_such_bottle").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    ions: IonCatalog,
    reagents: ReagentCatalog,
}

impl Catalog {
    pub fn build(ions: IonCatalog, config: &CatalogConfig) -> Self {
        let reagents = ReagentCatalog::build(&ions, config);
        Self { ions, reagents }
    }
    /// built-in ions and the default lab shelf
    pub fn standard() -> Self {
        Self::build(IonCatalog::standard(), &CatalogConfig::default())
    }
    pub fn ions(&self) -> &IonCatalog {
        &self.ions
    }
    pub fn reagents(&self) -> &ReagentCatalog {
        &self.reagents
    }
    pub fn reagent(&self, id: &str) -> Option<&Reagent> {
        self.reagents.get(id)
    }
    pub fn require(&self, id: &str) -> Result<&Reagent, ChemError> {
        self.reagent(id)
            .ok_or_else(|| ChemError::UnknownReagent(id.to_string()))
    }
}
