//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - actions.rs     : Action (entrée) / Outcome (sortie) + étiquettes typées
//! - erreurs.rs     : CalcError (domaine, division par zéro, lecture)
//! - format.rs      : affichage f64 <-> texte
//! - angle.rs       : degrés <-> radians
//! - fonctions.rs   : sin/cos/tan, inverses, log, puissances, racines, constantes
//! - memoire.rs     : registre MC/MR/M+/M-/MS
//! - parentheses.rs : pile des groupes ouverts
//! - eval.rs        : machine d’évaluation gauche -> droite

pub mod actions;
pub mod angle;
pub mod erreurs;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod memoire;
pub mod parentheses;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use actions::{Action, ConstantTag, FunctionTag, MemoryCommand, Operator, Outcome};
pub use eval::Evaluator;
