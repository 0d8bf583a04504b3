// src/noyau/parentheses.rs
//
// Pile des groupes ouverts : une paire (accumulateur, opérateur en attente)
// sauvegardée par "(" et restituée par ")".
// Invariant : profondeur == nombre de groupes ouverts.

use super::actions::Operator;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Groupe {
    pub accumulateur: f64,
    pub operateur: Option<Operator>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParenGroupStack {
    pile: Vec<Groupe>,
}

impl ParenGroupStack {
    /// Sauvegarde l’état de l’appelant et renvoie l’état de départ du groupe :
    /// accumulateur 0, combinateur `+` (ainsi "(5)" vaut 0 + 5).
    pub fn open(
        &mut self,
        accumulateur: f64,
        operateur: Option<Operator>,
    ) -> (f64, Option<Operator>) {
        self.pile.push(Groupe {
            accumulateur,
            operateur,
        });
        (0.0, Some(Operator::Add))
    }

    /// None si aucun groupe n’est ouvert.
    pub fn close(&mut self) -> Option<(f64, Option<Operator>)> {
        self.pile.pop().map(|g| (g.accumulateur, g.operateur))
    }

    /// Groupe au sommet, sans le retirer.
    pub fn peek(&self) -> Option<&Groupe> {
        self.pile.last()
    }

    pub fn depth(&self) -> usize {
        self.pile.len()
    }

    pub fn clear(&mut self) {
        self.pile.clear();
    }
}
