//! Noyau — machine d’évaluation (touche par touche)
//!
//! Évaluation strictement gauche -> droite : un seul opérateur en attente,
//! pas de priorité (2 + 3 × 4 = 20).
//!
//! État : (accumulateur, affichage, opérateur en attente, saisie neuve, pile de groupes)
//! + registre réponse ("Ans") + registre mémoire + mode d’angle.
//!
//! Contrat d’erreur : une action qui échoue ne mute RIEN (tout est calculé avant
//! la moindre écriture) ; l’erreur part dans Outcome.error.

use super::actions::{
    Action, ConstantTag, ErrorReport, FunctionTag, MemoryCommand, Operator, Outcome,
};
use super::erreurs::{fini, CalcError, CalcResult};
use super::fonctions;
use super::format::{format, parse, parse_strict};
use super::memoire::MemoryRegister;
use super::parentheses::ParenGroupStack;

/// Garde-fou : longueur max d’une saisie au clavier.
const LONGUEUR_MAX: usize = 32;

/// Applique un opérateur binaire. `/` par zéro => DivisionByZero ; inf/NaN => Domain.
pub fn combine(a: f64, op: Operator, b: f64) -> CalcResult<f64> {
    let v = match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        Operator::Pow => a.powf(b),
    };
    fini(v)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluator {
    accumulateur: f64,
    affichage: String,
    en_attente: Option<Operator>,

    /// Vrai : le prochain chiffre remplace l’affichage.
    saisie_neuve: bool,

    /// Vrai : l’affichage porte une valeur pas encore repliée dans l’accumulateur
    /// (saisie, résultat de fonction, MR, constante, Ans).
    valeur_fraiche: bool,

    reponse: f64,
    memoire: MemoryRegister,
    groupes: ParenGroupStack,
    use_radians: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Evaluator {
    pub fn new(use_radians: bool) -> Self {
        Self {
            accumulateur: 0.0,
            affichage: "0".to_string(),
            en_attente: None,
            saisie_neuve: true,
            valeur_fraiche: false,
            reponse: 0.0,
            memoire: MemoryRegister::default(),
            groupes: ParenGroupStack::default(),
            use_radians,
        }
    }

    /* ------------------------ Lecture de l’état ------------------------ */

    pub fn display(&self) -> &str {
        &self.affichage
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulateur
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.en_attente
    }

    pub fn entry_mode(&self) -> bool {
        self.saisie_neuve
    }

    pub fn answer(&self) -> f64 {
        self.reponse
    }

    pub fn memory(&self) -> &MemoryRegister {
        &self.memoire
    }

    pub fn depth(&self) -> usize {
        self.groupes.depth()
    }

    pub fn use_radians(&self) -> bool {
        self.use_radians
    }

    pub fn outcome(&self) -> Outcome {
        Outcome {
            display_text: self.affichage.clone(),
            memory_text: self.memoire.display(),
            error: None,
        }
    }

    /* ------------------------ Point d’entrée ------------------------ */

    /// Traite une action jusqu’au bout et renvoie ce que l’hôte doit afficher.
    pub fn apply(&mut self, action: Action) -> Outcome {
        let res = match action {
            Action::Digit(c) => {
                self.chiffre(c);
                Ok(())
            }
            Action::Decimal => {
                self.point();
                Ok(())
            }
            Action::Backspace => {
                self.retour_arriere();
                Ok(())
            }
            Action::Operator(op) => self.operateur(op),
            Action::Equal => self.egal(),
            Action::OpenParen => {
                self.ouvre_groupe();
                Ok(())
            }
            Action::CloseParen => self.ferme_groupe(),
            Action::Function(tag) => self.fonction(tag),
            Action::Memory(cmd) => self.memoire_cmd(cmd),
            Action::Constant(tag) => self.constante(tag),
            Action::Answer => {
                self.montre_valeur(self.reponse);
                Ok(())
            }
            Action::SetRadians(r) => {
                self.use_radians = r;
                Ok(())
            }
            Action::Clear => {
                self.clear();
                Ok(())
            }
        };

        let mut out = self.outcome();
        match res {
            Ok(()) => {
                tracing::debug!(
                    ?action,
                    affichage = %self.affichage,
                    accumulateur = self.accumulateur,
                    en_attente = ?self.en_attente,
                    profondeur = self.groupes.depth(),
                    "action traitée"
                );
            }
            Err(e) => {
                tracing::warn!(?action, %e, "action refusée, état inchangé");
                out.error = Some(ErrorReport::from(&e));
            }
        }
        out
    }

    /* ------------------------ Saisie ------------------------ */

    fn chiffre(&mut self, c: char) {
        if !c.is_ascii_digit() {
            tracing::debug!(?c, "chiffre ignoré (pas un chiffre ASCII)");
            return;
        }

        if self.saisie_neuve {
            self.affichage = c.to_string();
            self.saisie_neuve = false;
        } else if self.affichage == "0" {
            self.affichage = c.to_string();
        } else if self.affichage == "-0" {
            self.affichage = format!("-{c}");
        } else if self.affichage.len() >= LONGUEUR_MAX {
            tracing::debug!("saisie trop longue, chiffre ignoré");
            return;
        } else {
            // ex. "1.000000e30" + "0" : l’exposant déborderait
            let candidat = format!("{}{c}", self.affichage);
            if parse_strict(&candidat).is_err() {
                tracing::debug!(%candidat, "chiffre ignoré (hors limites)");
                return;
            }
            self.affichage = candidat;
        }
        self.valeur_fraiche = true;
    }

    fn point(&mut self) {
        if self.saisie_neuve {
            self.affichage = "0.".to_string();
            self.saisie_neuve = false;
        } else if !self.affichage.contains('.') && self.affichage.len() < LONGUEUR_MAX {
            self.affichage.push('.');
        }
        self.valeur_fraiche = true;
    }

    fn retour_arriere(&mut self) {
        self.affichage.pop();
        // notation scientifique : pas d’exposant orphelin ("1.5e-" -> "1.5")
        if self.affichage.ends_with("e-") {
            self.affichage.truncate(self.affichage.len() - 2);
        } else if self.affichage.ends_with('e') {
            self.affichage.pop();
        }
        if self.affichage.is_empty() || self.affichage == "-" {
            self.affichage = "0".to_string();
            self.saisie_neuve = true;
        } else {
            // on retouche le nombre affiché : la saisie continue
            self.saisie_neuve = false;
        }
        self.valeur_fraiche = true;
    }

    /* ------------------------ Opérateurs ------------------------ */

    fn operateur(&mut self, op: Operator) -> CalcResult<()> {
        if self.valeur_fraiche {
            let v = parse(&self.affichage);
            match self.en_attente {
                None => self.accumulateur = v,
                Some(p) => {
                    let r = combine(self.accumulateur, p, v)?;
                    self.accumulateur = r;
                    self.reponse = r;
                }
            }
        }

        self.en_attente = Some(op);
        self.saisie_neuve = true;
        self.valeur_fraiche = false;
        self.affichage = format(self.accumulateur);
        Ok(())
    }

    fn egal(&mut self) -> CalcResult<()> {
        let Some(op) = self.en_attente else {
            return Ok(());
        };

        let v = parse(&self.affichage);
        let r = combine(self.accumulateur, op, v)?;
        self.termine(r);
        Ok(())
    }

    /// Fixe un résultat complet : accumulateur, Ans, affichage ; plus rien en attente.
    fn termine(&mut self, r: f64) {
        self.accumulateur = r;
        self.reponse = r;
        self.en_attente = None;
        self.saisie_neuve = true;
        self.valeur_fraiche = false;
        self.affichage = format(r);
    }

    /* ------------------------ Parenthèses ------------------------ */

    fn ouvre_groupe(&mut self) {
        // "5 (" sans opérateur : 5 devient l’accumulateur sauvegardé
        if self.valeur_fraiche && self.en_attente.is_none() {
            self.accumulateur = parse(&self.affichage);
        }

        let (acc, op) = self.groupes.open(self.accumulateur, self.en_attente);
        self.accumulateur = acc;
        self.en_attente = op;
        self.saisie_neuve = true;
        self.valeur_fraiche = false;
    }

    /// ")" : évalue le groupe courant puis le replie avec l’opérateur sauvegardé.
    /// Sans groupe ouvert : ignorée.
    fn ferme_groupe(&mut self) -> CalcResult<()> {
        // peek d’abord : en cas d’erreur, la pile reste intacte
        let Some(groupe) = self.groupes.peek().copied() else {
            tracing::debug!("\")\" sans groupe ouvert : ignorée");
            return Ok(());
        };

        let r = self.valeur_groupe()?;
        let plie = match groupe.operateur {
            Some(op) => combine(groupe.accumulateur, op, r)?,
            None => r,
        };

        self.groupes.close();
        self.termine(plie);
        Ok(())
    }

    /// Valeur du groupe courant, sans rien muter.
    /// Avec un opérateur en attente : même calcul que "=".
    fn valeur_groupe(&self) -> CalcResult<f64> {
        match self.en_attente {
            Some(op) => combine(self.accumulateur, op, parse(&self.affichage)),
            None if self.valeur_fraiche => Ok(parse(&self.affichage)),
            None => Ok(self.accumulateur),
        }
    }

    /* ------------------------ Fonctions / mémoire / valeurs ------------------------ */

    fn fonction(&mut self, tag: FunctionTag) -> CalcResult<()> {
        let v = parse(&self.affichage);
        let r = fonctions::apply(tag, v, self.use_radians)?;
        self.montre_valeur(r);
        self.reponse = r;
        Ok(())
    }

    /// π / e : l’opérande est ignoré, Ans inchangé.
    fn constante(&mut self, tag: ConstantTag) -> CalcResult<()> {
        let v = fonctions::apply(tag.fonction(), 0.0, self.use_radians)?;
        self.montre_valeur(v);
        Ok(())
    }

    fn memoire_cmd(&mut self, cmd: MemoryCommand) -> CalcResult<()> {
        let v = parse(&self.affichage);
        match cmd {
            MemoryCommand::Clear => self.memoire.clear(),
            MemoryCommand::Recall => self.montre_valeur(self.memoire.recall()),
            MemoryCommand::Add => {
                fini(self.memoire.recall() + v)?;
                self.memoire.add(v);
            }
            MemoryCommand::Subtract => {
                fini(self.memoire.recall() - v)?;
                self.memoire.subtract(v);
            }
            MemoryCommand::Store => self.memoire.store(v),
        }
        Ok(())
    }

    /// Affiche une valeur prête à l’emploi (MR, constante, Ans, résultat de fonction).
    fn montre_valeur(&mut self, v: f64) {
        self.affichage = format(v);
        self.saisie_neuve = true;
        self.valeur_fraiche = true;
    }

    /// "C" : état initial. La mémoire, Ans et le mode d’angle survivent.
    fn clear(&mut self) {
        self.accumulateur = 0.0;
        self.affichage = "0".to_string();
        self.en_attente = None;
        self.saisie_neuve = true;
        self.valeur_fraiche = false;
        self.groupes.clear();
    }
}
