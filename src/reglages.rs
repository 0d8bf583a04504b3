//! src/reglages.rs
//!
//! Réglages utilisateur (facultatifs) : `<config>/calculatrice-sci/reglages.toml`
//!
//! ```toml
//! radians = false   # mode d’angle au démarrage
//! journal = "info"  # filtre tracing si RUST_LOG est absent
//! ```
//!
//! Contrats :
//! - fichier absent => valeurs par défaut, sans bruit
//! - fichier illisible / invalide => valeurs par défaut + avertissement (jamais fatal)

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

const DOSSIER: &str = "calculatrice-sci";
const FICHIER: &str = "reglages.toml";

#[derive(Error, Debug)]
pub enum ReglagesError {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntaxe TOML: {0}")]
    Syntaxe(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    /// Mode d’angle initial (false = degrés, comme la case décochée).
    pub radians: bool,

    /// Filtre de journalisation (syntaxe EnvFilter).
    pub journal: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            radians: false,
            journal: "info".to_string(),
        }
    }
}

impl Reglages {
    pub fn depuis_toml(texte: &str) -> Result<Self, ReglagesError> {
        Ok(toml::from_str(texte)?)
    }

    pub fn chemin() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DOSSIER).join(FICHIER))
    }

    /// Charge le fichier s’il existe. Ok(None) si absent.
    pub fn lire() -> Result<Option<Self>, ReglagesError> {
        let Some(chemin) = Self::chemin() else {
            return Ok(None);
        };
        if !chemin.exists() {
            return Ok(None);
        }
        let texte = std::fs::read_to_string(&chemin).map_err(|source| ReglagesError::Lecture {
            chemin: chemin.clone(),
            source,
        })?;
        Self::depuis_toml(&texte).map(Some)
    }

    /// Version "jamais fatale" : toute erreur retombe sur les valeurs par défaut.
    /// L’erreur est rendue à l’appelant, qui la journalise une fois tracing prêt.
    pub fn charger() -> (Self, Option<ReglagesError>) {
        match Self::lire() {
            Ok(Some(r)) => (r, None),
            Ok(None) => (Self::default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
