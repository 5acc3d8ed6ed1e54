//! Picks the strongest oxidizer and the strongest reductor that can act in a mixture and
//! decides whether they react.
//!
//! The mixture is the selected reagents plus what the medium brings: H⁺ in acid, OH⁻ in base,
//! and always water. A role can only act if every species it consumes is present.
use super::reaction_result::{Environment, ReactionResult, ReactionType};
use super::redox_balancer::{balance_redox, contains_species};
use crate::Catalogs::Catalog;
use crate::Catalogs::ions::RedoxRole;
use crate::Catalogs::reagents::Reagent;
use log::{debug, warn};
use std::collections::HashSet;

pub const ACID_PARTICLE: &str = "h_plus";
pub const BASE_PARTICLE: &str = "oh_minus";
pub const WATER: &str = "h2o_l";

/// a redox role together with the reagent that carries it
#[derive(Debug, Clone, Copy)]
pub struct RoleCandidate<'a> {
    pub reagent: &'a Reagent,
    pub role: RedoxRole<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct RedoxPair<'a> {
    pub oxidizer: RoleCandidate<'a>,
    pub reductor: RoleCandidate<'a>,
    pub delta_v: f64,
}

/// selected reagents followed by the particles of the medium, in that order
pub fn candidate_pool<'a>(
    selected: &[&'a Reagent],
    environment: Environment,
    catalog: &'a Catalog,
) -> Vec<&'a Reagent> {
    let mut pool: Vec<&'a Reagent> = selected.to_vec();
    let mut medium = Vec::new();
    match environment {
        Environment::Acid => medium.push(ACID_PARTICLE),
        Environment::Base => medium.push(BASE_PARTICLE),
        Environment::Neutral => {}
    }
    medium.push(WATER);
    for id in medium {
        match catalog.reagent(id) {
            Some(r) => pool.push(r),
            None => debug!("medium particle {} is not in the catalog, skipped", id),
        }
    }
    pool
}

/// Every eligible role in pool order. Electron tokens never appear in structured sides,
/// so only real species are checked
fn eligible_roles<'a>(pool: &[&'a Reagent]) -> Vec<RoleCandidate<'a>> {
    let present: HashSet<String> = pool.iter().flat_map(|r| r.present_species()).collect();
    pool.iter()
        .filter(|r| r.is_redox_active())
        .flat_map(|&reagent| {
            reagent
                .redox
                .iter()
                .flat_map(|entry| entry.roles())
                .map(move |role| RoleCandidate { reagent, role })
        })
        .filter(|c| {
            c.role
                .consumed_species()
                .iter()
                .all(|s| present.contains(&s.normalized()))
        })
        .collect()
}

/// Highest-potential oxidizer against lowest-potential reductor.
/// On equal potentials the role met first in pool order is kept. None if ΔV ≤ 0
pub fn find_redox_pair<'a>(pool: &[&'a Reagent]) -> Option<RedoxPair<'a>> {
    let roles = eligible_roles(pool);
    let mut oxidizer: Option<RoleCandidate> = None;
    let mut reductor: Option<RoleCandidate> = None;
    for c in roles {
        if c.role.is_oxidizer() {
            if oxidizer.is_none_or(|best| c.role.potential() > best.role.potential()) {
                oxidizer = Some(c);
            }
        } else if reductor.is_none_or(|best| c.role.potential() < best.role.potential()) {
            reductor = Some(c);
        }
    }
    let (oxidizer, reductor) = (oxidizer?, reductor?);
    let delta_v = oxidizer.role.potential() - reductor.role.potential();
    debug!(
        "best oxidizer {} ({:.2} V), best reductor {} ({:.2} V)",
        oxidizer.reagent.id,
        oxidizer.role.potential(),
        reductor.reagent.id,
        reductor.role.potential()
    );
    if delta_v <= 0.0 {
        return None;
    }
    Some(RedoxPair {
        oxidizer,
        reductor,
        delta_v,
    })
}

/// (observation key, colour) shown for well-known lab redox reactions
fn visual_cue(pair: &RedoxPair, environment: Environment) -> (&'static str, &'static str) {
    let ox_id = pair.oxidizer.reagent.id.as_str();
    let red_id = pair.reductor.reagent.id.as_str();
    let ox_products = &pair.oxidizer.role.entry().structured.products;
    match (ox_id, red_id) {
        ("kmno4", _) if environment == Environment::Base => ("redox_permanganate_brown", "brown"),
        ("kmno4", _) => ("redox_permanganate_clear", "transparent"),
        ("i2", _) => ("redox_iodine_clear", "transparent"),
        (_, "ki") => ("redox_iodine_formed", "brown"),
        (_, "kbr") => ("redox_bromine_formed", "orange"),
        _ if contains_species(ox_products, "H₂") => ("gas_formation_hydrogen", "transparent"),
        _ => ("redox_detected", "pale-blue"),
    }
}

/// Redox outcome of a mixture, or None when no spontaneous pair exists
pub fn predict_redox(
    selected: &[&Reagent],
    environment: Environment,
    catalog: &Catalog,
) -> Option<ReactionResult> {
    let pool = candidate_pool(selected, environment, catalog);
    let pair = find_redox_pair(&pool)?;
    let (ox_entry, red_entry) = (pair.oxidizer.role.entry(), pair.reductor.role.entry());
    let balance = match balance_redox(ox_entry, red_entry) {
        Ok(b) => b,
        Err(e) => {
            warn!(
                "cannot balance {} against {}: {}",
                pair.oxidizer.reagent.id, pair.reductor.reagent.id, e
            );
            return None;
        }
    };
    let products = balance
        .products
        .iter()
        .map(|s| s.species.clone())
        .collect::<Vec<_>>()
        .join(" + ");
    let (key, color) = visual_cue(&pair, environment);
    let reactants: Vec<&str> = selected.iter().map(|r| r.id.as_str()).collect();
    let result = ReactionResult::new(
        &reactants,
        ReactionType::Redox,
        products,
        format!(
            "Spontaneous redox reaction between {} and {}. ΔV = {:.2} V.",
            pair.oxidizer.reagent.formula, pair.reductor.reagent.formula, pair.delta_v
        ),
        format!("{} (ΔV = {:.2} V)", balance.combined_equation, pair.delta_v),
    )
    .with_key(key)
    .with_color(color);
    Some(result)
}
