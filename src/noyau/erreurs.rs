// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau
// ------------------------------
// - Domain         : argument hors domaine (√ négatif, log ≤ 0, asin hors [-1,1], tan asymptote)
//                    + résultat non fini (débordement, NaN)
// - DivisionByZero : `/` avec diviseur nul (combine)
// - Parse          : texte d’affichage illisible (récupéré localement : 0.0)
//
// Aucune erreur n’est fatale : l’Evaluator ne mute rien quand une erreur remonte.

use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("erreur de domaine : {reason}")]
    Domain { reason: String },

    #[error("division par zéro")]
    DivisionByZero,

    #[error("texte illisible : {text:?}")]
    Parse { text: String },
}

/// Catégorie exposée à l’hôte (Outcome.error.kind).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Domain,
    DivisionByZero,
    Parse,
}

impl CalcError {
    pub fn domain(reason: impl Into<String>) -> Self {
        CalcError::Domain {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Domain { .. } => ErrorKind::Domain,
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
            CalcError::Parse { .. } => ErrorKind::Parse,
        }
    }
}

/// Garde-fou : un résultat inf/NaN ne doit jamais entrer dans l’état.
pub fn fini(v: f64) -> CalcResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CalcError::domain("résultat non fini"))
    }
}
