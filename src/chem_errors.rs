/////////////////////ERROR HANDLING////////////////////////////////////////////////////////
use std::io;
use thiserror::Error;

/// errors of catalog construction, configuration loading and half-reaction handling.
/// "No reaction" is never an error: predictors return None for that
#[derive(Debug, Error)]
pub enum ChemError {
    #[error("Unknown ion: {0}")]
    UnknownIon(String),
    #[error("Unknown reagent: {0}")]
    UnknownReagent(String),
    #[error("Ion {0} has zero charge")]
    ZeroCharge(String),
    #[error("Ion {id} has charge {charge}, expected a {expected} charge")]
    ChargeSignMismatch {
        id: String,
        charge: i32,
        expected: &'static str,
    },
    #[error("Half-reaction '{0}' has no electron term")]
    MissingElectronTerm(String),
    #[error("Half-reaction '{0}' has an empty side")]
    EmptyHalfReaction(String),
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
