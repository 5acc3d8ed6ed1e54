use super::catalog_config::{BottleSpec, CatalogConfig};
use super::ions::{Ion, IonCatalog, RedoxEntry, normalize_species, retain_valid_redox, transparent};
use crate::Reactions::salt_formula::synthesize_formula;
use crate::chem_errors::ChemError;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicalState {
    #[serde(rename = "s")]
    Solid,
    #[serde(rename = "l")]
    Liquid,
    #[serde(rename = "g")]
    Gas,
    #[serde(rename = "aq")]
    Aqueous,
}

impl PhysicalState {
    pub fn mark(&self) -> &'static str {
        match self {
            PhysicalState::Solid => "s",
            PhysicalState::Liquid => "l",
            PhysicalState::Gas => "g",
            PhysicalState::Aqueous => "aq",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Acid,
    Base,
    Salt,
    Metal,
    Oxide,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Acid => "acid",
            Category::Base => "base",
            Category::Salt => "salt",
            Category::Metal => "metal",
            Category::Oxide => "oxide",
            Category::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// reference to the ions of an ionic reagent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IonPair {
    pub cation: String,
    pub anion: String,
}

/// a bottle on the lab shelf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reagent {
    pub id: String,
    pub name: String,
    /// ASCII formula, e.g. "Na2SO3"
    pub formula: String,
    pub state: PhysicalState,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ions: Option<IonPair>,
    #[serde(default)]
    pub redox: Vec<RedoxEntry>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// species the reagent brings into solution besides its formula
    #[serde(default)]
    pub particles: Vec<String>,
    #[serde(default = "transparent")]
    pub color: String,
}

impl Reagent {
    /// Aqueous ionic reagent made of one cation and one anion. Redox entries are inherited from both ions
    pub fn from_ions(cation: &Ion, anion: &Ion, category: Category) -> Self {
        let mut redox = cation.redox.clone();
        redox.extend(anion.redox.iter().cloned());
        Self {
            id: format!("{}{}", cation.id.to_lowercase(), anion.id.to_lowercase()),
            name: format!("{} {}", cation.name, anion.name.to_lowercase()),
            formula: synthesize_formula(cation, anion),
            state: PhysicalState::Aqueous,
            category,
            ions: Some(IonPair {
                cation: cation.id.clone(),
                anion: anion.id.clone(),
            }),
            redox,
            tags: vec![
                cation.name.clone(),
                anion.name.clone(),
                category.to_string(),
                "solution".to_string(),
            ],
            particles: vec![cation.formula.clone(), anion.formula.clone()],
            color: cation.color.clone(),
        }
    }
    /// normalized labels of everything this reagent puts into the mixture
    pub fn present_species(&self) -> Vec<String> {
        std::iter::once(&self.formula)
            .chain(self.particles.iter())
            .map(|s| normalize_species(s))
            .collect()
    }
    /// carries at least one redox couple
    pub fn is_redox_active(&self) -> bool {
        !self.redox.is_empty()
    }
    /// cation id of an ionic reagent
    pub fn cation_id(&self) -> Option<&str> {
        self.ions.as_ref().map(|p| p.cation.as_str())
    }
    pub fn anion_id(&self) -> Option<&str> {
        self.ions.as_ref().map(|p| p.anion.as_str())
    }
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.id.contains(&q)
            || self.name.to_lowercase().contains(&q)
            || self.formula.to_lowercase().contains(&q)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&q))
    }
}

fn resolve_bottle<'a>(ions: &'a IonCatalog, bottle: &BottleSpec) -> Result<(&'a Ion, &'a Ion), ChemError> {
    let cation = ions
        .cation(&bottle.cation)
        .ok_or_else(|| ChemError::UnknownIon(bottle.cation.clone()))?;
    let anion = ions
        .anion(&bottle.anion)
        .ok_or_else(|| ChemError::UnknownIon(bottle.anion.clone()))?;
    Ok((cation, anion))
}

/// Immutable reagent catalog, built exactly once from the ion catalog and a configuration
#[derive(Debug, Clone, Default)]
pub struct ReagentCatalog {
    reagents: HashMap<String, Reagent>,
    order: Vec<String>,
}

impl ReagentCatalog {
    /// Generates the ionic bottles and adds the molecular reagents.
    /// Entries referencing unknown ions or repeating an id are logged and skipped
    pub fn build(ions: &IonCatalog, config: &CatalogConfig) -> Self {
        let mut catalog = ReagentCatalog::default();
        for bottle in &config.bottles {
            match resolve_bottle(ions, bottle) {
                Ok((cation, anion)) => {
                    catalog.insert(Reagent::from_ions(cation, anion, bottle.category));
                }
                Err(e) => warn!(
                    "skipping bottle ({}, {}): {}",
                    bottle.cation, bottle.anion, e
                ),
            }
        }
        for reagent in &config.molecular {
            let mut reagent = reagent.clone();
            reagent.redox = retain_valid_redox(&reagent.id, std::mem::take(&mut reagent.redox));
            if let Some(pair) = &reagent.ions {
                if ions.cation(&pair.cation).is_none() || ions.anion(&pair.anion).is_none() {
                    warn!(
                        "reagent {} references unknown ions ({}, {}), ion pair dropped",
                        reagent.id, pair.cation, pair.anion
                    );
                    reagent.ions = None;
                }
            }
            catalog.insert(reagent);
        }
        info!(
            "reagent catalog built: {} reagents from {} bottles and {} molecular entries",
            catalog.len(),
            config.bottles.len(),
            config.molecular.len()
        );
        catalog
    }
    fn insert(&mut self, reagent: Reagent) {
        if self.reagents.contains_key(&reagent.id) {
            warn!("duplicate reagent id {}, keeping the first definition", reagent.id);
            return;
        }
        self.order.push(reagent.id.clone());
        self.reagents.insert(reagent.id.clone(), reagent);
    }
    pub fn get(&self, id: &str) -> Option<&Reagent> {
        self.reagents.get(id)
    }
    /// reagents in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Reagent> {
        self.order.iter().filter_map(|id| self.reagents.get(id))
    }
    pub fn search(&self, query: &str) -> Vec<&Reagent> {
        self.iter().filter(|r| r.matches(query)).collect()
    }
    pub fn len(&self) -> usize {
        self.reagents.len()
    }
    pub fn is_empty(&self) -> bool {
        self.reagents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalogs::ions::IonCatalog;

    #[test]
    fn test_bottle_from_ions() {
        let ions = IonCatalog::standard();
        let r = Reagent::from_ions(
            ions.cation("Al").unwrap(),
            ions.anion("SO4").unwrap(),
            Category::Salt,
        );
        assert_eq!(r.id, "also4");
        assert_eq!(r.formula, "Al2(SO4)3");
        assert_eq!(r.state, PhysicalState::Aqueous);
        assert_eq!(r.cation_id(), Some("Al"));
        assert_eq!(r.anion_id(), Some("SO4"));
        assert!(r.present_species().contains(&"Al3+".to_string()));
        assert!(r.present_species().contains(&"SO42-".to_string()));
    }

    #[test]
    fn test_redox_inherited_from_both_ions() {
        let ions = IonCatalog::standard();
        let r = Reagent::from_ions(
            ions.cation("Fe3").unwrap(),
            ions.anion("Cl").unwrap(),
            Category::Salt,
        );
        assert_eq!(r.redox.len(), 2);
        assert!(r.is_redox_active());
        assert_eq!(r.redox[0].v0, 0.77);
        assert_eq!(r.redox[1].v0, 1.36);
        let nitrate = Reagent::from_ions(
            ions.cation("Na").unwrap(),
            ions.anion("NO3").unwrap(),
            Category::Salt,
        );
        assert!(!nitrate.is_redox_active());
    }

    #[test]
    fn test_unknown_ion_bottle_is_skipped() {
        let ions = IonCatalog::standard();
        let config = CatalogConfig {
            bottles: vec![
                BottleSpec {
                    cation: "Na".to_string(),
                    anion: "Cl".to_string(),
                    category: Category::Salt,
                },
                BottleSpec {
                    cation: "Unobtainium".to_string(),
                    anion: "Cl".to_string(),
                    category: Category::Salt,
                },
            ],
            ..CatalogConfig::empty()
        };
        let catalog = ReagentCatalog::build(&ions, &config);
        assert_eq!(catalog.len(), 1);
        let nacl = catalog.get("nacl").unwrap();
        assert_eq!(nacl.formula, "NaCl");
        // Cl₂/Cl⁻ comes with the chloride
        assert!(nacl.is_redox_active());
    }

    #[test]
    fn test_empty_config_builds_empty_shelf() {
        let catalog = ReagentCatalog::build(&IonCatalog::standard(), &CatalogConfig::empty());
        assert!(catalog.is_empty());
        assert!(catalog.search("").is_empty());
    }

    #[test]
    fn test_search_by_tag_and_formula() {
        let catalog = ReagentCatalog::build(&IonCatalog::standard(), &CatalogConfig::default());
        let hits: Vec<&str> = catalog.search("permanganate").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(hits, vec!["kmno4"]);
        assert!(catalog.search("na2so3").iter().any(|r| r.id == "naso3"));
    }
}
