use super::exceptional::{acid_base_reaction, lookup_exceptional};
use super::precipitation::predict_precipitation;
use super::reaction_result::{Environment, ReactionResult, ReactionType};
use super::redox_predictor::predict_redox;
use crate::Catalogs::Catalog;
use crate::Catalogs::reagents::Reagent;
use log::{debug, info, warn};

fn physical_mixture(a: &Reagent, b: &Reagent) -> ReactionResult {
    ReactionResult::new(
        &[&a.id, &b.id],
        ReactionType::PhysicalMixture,
        format!("{} + {}", a.formula, b.formula),
        "No observable reaction.".to_string(),
        format!("{} + {} → no reaction", a.formula, b.formula),
    )
    .with_key("no_reaction")
}

/// Outcome of mixing two reagents in the given medium. Rules are tried in order:
/// hand-authored table, acid–base rules, redox, precipitation; a plain physical mixture otherwise.
/// Unknown ids give None
pub fn analyze_reaction(
    catalog: &Catalog,
    id_a: &str,
    id_b: &str,
    environment: Environment,
) -> Option<ReactionResult> {
    if let Some(result) = lookup_exceptional(id_a, id_b) {
        debug!("{} + {}: hand-authored reaction", id_a, id_b);
        return Some(result);
    }
    let (a, b) = match (catalog.require(id_a), catalog.require(id_b)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            warn!("cannot analyze {} + {}: {}", id_a, id_b, e);
            return None;
        }
    };
    if let Some(result) = acid_base_reaction(catalog.ions(), a, b) {
        return Some(result);
    }
    if let Some(result) = predict_redox(&[a, b], environment, catalog) {
        return Some(result);
    }
    if let Some(result) = predict_precipitation(catalog.ions(), a, b) {
        return Some(result);
    }
    debug!("{} + {}: physical mixture", id_a, id_b);
    Some(physical_mixture(a, b))
}

/// Engine bound to one catalog
///
///  # Examples
/// ```
/// use ReactLab::Catalogs::Catalog;
/// use ReactLab::Reactions::dispatcher::ReactionEngine;
/// use ReactLab::Reactions::reaction_result::{Environment, ReactionType};
/// let catalog = Catalog::standard();
/// let engine = ReactionEngine::new(&catalog);
/// let result = engine.analyze("agno3", "nacl", Environment::Neutral).unwrap();
/// assert_eq!(result.reaction_type, ReactionType::Precipitation);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReactionEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> ReactionEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
    pub fn analyze(&self, id_a: &str, id_b: &str, environment: Environment) -> Option<ReactionResult> {
        analyze_reaction(self.catalog, id_a, id_b, environment)
    }
    /// every unordered pair of the list that actually reacts
    pub fn analyze_all_pairs(&self, ids: &[&str], environment: Environment) -> Vec<ReactionResult> {
        let mut results = Vec::new();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                if let Some(result) = self.analyze(a, b, environment) {
                    if result.is_reaction() {
                        results.push(result);
                    }
                }
            }
        }
        info!(
            "{} of {} pairs react in {} medium",
            results.len(),
            ids.len() * ids.len().saturating_sub(1) / 2,
            environment
        );
        results
    }
}
