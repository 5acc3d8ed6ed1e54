use crate::chem_errors::ChemError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// aqueous medium the reagents are mixed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Neutral,
    Acid,
    Base,
}

impl FromStr for Environment {
    type Err = ChemError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "neutral" | "" => Ok(Environment::Neutral),
            "acid" | "acidic" => Ok(Environment::Acid),
            "base" | "basic" | "alkaline" => Ok(Environment::Base),
            other => Err(ChemError::ParseError(format!("unknown environment: {}", other))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Environment::Neutral => "neutral",
            Environment::Acid => "acid",
            Environment::Base => "base",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionType {
    Precipitation,
    GasFormation,
    Neutralization,
    Redox,
    Complexation,
    PhysicalMixture,
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReactionType::Precipitation => "precipitation",
            ReactionType::GasFormation => "gas_formation",
            ReactionType::Neutralization => "neutralization",
            ReactionType::Redox => "redox",
            ReactionType::Complexation => "complexation",
            ReactionType::PhysicalMixture => "physical_mixture",
        };
        write!(f, "{}", s)
    }
}

/// what happens when two reagents are mixed. Created fresh for every call and owned by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionResult {
    pub reactants: Vec<String>,
    pub products: String,
    /// what a person at the bench would see
    pub observation: String,
    /// stable key of the observation, for translation by a front end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation_key: Option<String>,
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,
    pub equation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ReactionResult {
    pub fn new<S: AsRef<str>>(
        reactants: &[S],
        reaction_type: ReactionType,
        products: String,
        observation: String,
        equation: String,
    ) -> Self {
        Self {
            reactants: reactants.iter().map(|r| r.as_ref().to_string()).collect(),
            products,
            observation,
            observation_key: None,
            reaction_type,
            equation,
            color: None,
        }
    }
    pub fn with_key(mut self, key: &str) -> Self {
        self.observation_key = Some(key.to_string());
        self
    }
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
    /// anything but a plain physical mixture
    pub fn is_reaction(&self) -> bool {
        self.reaction_type != ReactionType::PhysicalMixture
    }
}
