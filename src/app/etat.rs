//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’Evaluator du noyau et garder le dernier Outcome à afficher
//! (écran, indicateur mémoire, erreur passagère).
//!
//! Contrats (version UI) :
//! - Aucun calcul ici : tout passe par `envoyer(Action)`.
//! - Une erreur du noyau s’affiche sans rien effacer (l’écran reste tel quel).

use crate::noyau::format::format;
use crate::noyau::{Action, Evaluator, Outcome};
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    ev: Evaluator,

    // --- sorties ---
    pub ecran: String,
    pub memoire: String,
    pub erreur: String, // message d’erreur passager (vide si la dernière action a réussi)

    // --- paramètres ---
    pub radians: bool, // miroir de la case "Radians"
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        let ev = Evaluator::new(reglages.radians);
        let out = ev.outcome();
        Self {
            ev,
            ecran: out.display_text,
            memoire: out.memory_text,
            erreur: String::new(),
            radians: reglages.radians,
        }
    }

    /// Transmet une touche au noyau et dépose le résultat.
    pub fn envoyer(&mut self, action: Action) {
        let out = self.ev.apply(action);
        self.deposer(out);
    }

    fn deposer(&mut self, out: Outcome) {
        self.ecran = out.display_text;
        self.memoire = out.memory_text;
        self.erreur = out.error.map(|e| e.message).unwrap_or_default();
        self.radians = self.ev.use_radians();
    }

    /// Nombre de "(" encore ouvertes (indicateur de la vue).
    pub fn groupes_ouverts(&self) -> usize {
        self.ev.depth()
    }

    /// Indicateur "opérateur en attente" (ex. "+").
    pub fn en_attente(&self) -> Option<char> {
        self.ev.pending_operator().map(|op| op.symbol())
    }

    /// Dernier résultat (touche Ans), déjà formaté.
    pub fn reponse(&self) -> String {
        format(self.ev.answer())
    }
}
